use crate::rspec::Tour;

const DESCRIPTION: &str = r#"
### MWW 2023: OAI 5G w/ Open5GS CN5G using the POWDER Dense Deployment

This profile is for an OAI 5G OTA hands-on session during MWW 2023, in which
attendees will use portable COTS UE kits to attach to a 5G network with gNodeBs
deployed at POWDER dense sites. The description and instructions for this
activity can be found
[here](https://gitlab.flux.utah.edu/powderrenewpublic/mww2023/-/blob/main/content/oai_ota.md).

"#;

const INSTRUCTIONS: &str = r#"

Startup scripts will still be running when your experiment becomes ready.
Watch the "Startup" column on the "List View" tab for your experiment and wait
until all of the compute nodes show "Finished" before proceeding.

After all startup scripts have finished...

On `cn5g-...`:

If you'd like to monitor traffic between the various network functions and the
gNodeB, start tshark in a session:

```
LANIF=`ip r | awk '/192\.168\.1\.0/{print $3}'`
sudo tshark -i $LANIF \
  -f "not arp and not port 53 and not host archive.ubuntu.com and not host security.ubuntu.com"
```

In another session, start following the logs for the AMF. This way you can
see when the UE syncs with the network.

```
tail -f /var/log/open5gs/amf.log
```

On `gnb-...`:

```
sudo /var/tmp/oairan/cmake_targets/ran_build/build/nr-softmodem -E \
  -O /var/tmp/etc/oai/gnb.sa.band77.fr1.106PRB.usrpb210.conf \
  --gNBs.[0].servingCellConfigCommon.[0].physCellId 1 \
  --sa \
  -d
```

After attaching a UE, you should now be able to generate traffic in either
direction:

```
# in a terminal on the node connected to the UE
ping 10.45.0.1

# in a terminal on cn5g
ping <IP address of UE>
```

Known Issues:

- The gNodeB soft modem may spam warnings/errors. It may crash unexpectedly.

"#;

pub fn tour() -> Tour {
    Tour {
        description: DESCRIPTION.to_string(),
        instructions: INSTRUCTIONS.to_string(),
    }
}
