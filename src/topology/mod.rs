//! Topology builder: turn a bound `ParameterSet` into a `Request`.
//!
//! For every dense radio we emit one core-network node and one gNodeB node
//! joined by a point-to-point link, then one spectrum request per configured
//! frequency range, then the tour. Parameters are trusted as bound.

pub mod constants;
pub mod tour;

use crate::params::{DenseRadio, ParameterSet};
use crate::rspec::{Execute, Ipv4Address, Link, Node, Request};
use constants::*;

use log::debug;

pub fn build_request(params: &ParameterSet) -> Request {
    let mut request = Request::new();

    for (idx, radio) in params.dense_radios.iter().enumerate() {
        gnb_cn_pair(&mut request, params, idx, radio);
    }

    for range in &params.freq_ranges {
        request.request_spectrum(range.freq_min, range.freq_max, SPECTRUM_PRIORITY);
    }

    request.add_tour(tour::tour());
    request
}

/// `<deploy script> '<hash>' nodeb`
pub fn ran_deploy_command(ran_hash: &str) -> String {
    format!("{} '{}' {}", OAI_DEPLOY_SCRIPT, ran_hash, NODEB_ROLE)
}

fn gnb_cn_pair(request: &mut Request, params: &ParameterSet, idx: usize, radio: &DenseRadio) {
    let suffix = radio.suffix();

    let mut cn_node = Node::raw_pc(format!("cn5g-{}", suffix));
    cn_node.component_manager_id = Some(COMP_MANAGER_ID.to_string());
    cn_node.hardware_type = Some(params.cn_nodetype.clone());
    cn_node.disk_image = Some(UBUNTU_IMG.to_string());
    let cn_if = cn_node.add_interface(&format!("cn-if-{}", idx));
    cn_if.add_address(Ipv4Address::new(CN_LINK_ADDR, LINK_NETMASK));
    let cn_if_id = cn_if.client_id.clone();

    let mut link = Link::new(format!("cn-link-{}", idx));
    link.bandwidth = Some(LINK_BANDWIDTH);
    link.add_interface(cn_if_id);

    // Resolved but not forwarded: the Open5GS deploy script takes no arguments.
    let cn_hash = params
        .oai_cn_commit_hash
        .as_deref()
        .unwrap_or(DEFAULT_NR_CN_HASH);
    debug!("{}: cn hash {} not passed to deploy script", cn_node.client_id, cn_hash);
    cn_node.add_service(Execute::bash(OPEN5GS_DEPLOY_SCRIPT));

    let mut gnb_node = Node::raw_pc(format!("gnb-{}", suffix));
    gnb_node.component_manager_id = Some(COMP_MANAGER_ID.to_string());
    gnb_node.component_id = Some(radio.device.clone());
    gnb_node.disk_image = Some(
        params
            .sdr_compute_image
            .clone()
            .unwrap_or_else(|| LOWLAT_IMG.to_string()),
    );
    let gnb_if = gnb_node.add_interface("nodeb-cn-if");
    gnb_if.add_address(Ipv4Address::new(GNB_LINK_ADDR, LINK_NETMASK));
    link.add_interface(gnb_if.client_id.clone());

    let ran_hash = params
        .oai_ran_commit_hash
        .as_deref()
        .unwrap_or(DEFAULT_NR_RAN_HASH);
    // Deploy prepares the environment tuning expects; keep this order.
    gnb_node.add_service(Execute::bash(ran_deploy_command(ran_hash)));
    gnb_node.add_service(Execute::bash(TUNE_CPU_SCRIPT));

    debug!(
        "pair {}: {} <-> {} over {} ({})",
        idx, cn_node.client_id, gnb_node.client_id, link.client_id, radio.device
    );

    request.add_node(cn_node);
    request.add_node(gnb_node);
    request.add_link(link);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{FreqRange, UeSelection};
    use pretty_assertions::assert_eq;

    fn params_for(devices: &[&str]) -> ParameterSet {
        ParameterSet {
            ues: vec![UeSelection {
                device: "d430".to_string(),
            }],
            dense_radios: devices.iter().map(|d| DenseRadio::new(*d)).collect(),
            oai_ran_commit_hash: None,
            oai_cn_commit_hash: None,
            sdr_compute_image: None,
            cn_nodetype: "d430".to_string(),
            freq_ranges: vec![FreqRange {
                freq_min: 3430.0,
                freq_max: 3470.0,
            }],
        }
    }

    fn commands(node: &Node) -> Vec<&str> {
        node.services.iter().map(|s| s.command.as_str()).collect()
    }

    #[test]
    fn single_radio_example() {
        let request = build_request(&params_for(&["cnode-wasatch-1"]));

        let names: Vec<&str> = request.nodes.iter().map(|n| n.client_id.as_str()).collect();
        assert_eq!(names, vec!["cn5g-1", "gnb-1"]);

        let link = request.link("cn-link-0").unwrap();
        assert_eq!(link.interfaces, vec!["cn5g-1:cn-if-0", "gnb-1:nodeb-cn-if"]);

        let cn = request.node("cn5g-1").unwrap();
        let gnb = request.node("gnb-1").unwrap();
        assert_eq!(cn.interfaces[0].addresses[0].address, "192.168.1.1");
        assert_eq!(gnb.interfaces[0].addresses[0].address, "192.168.1.2");
        assert_eq!(gnb.interfaces[0].addresses[0].netmask, "255.255.255.0");

        assert_eq!(
            commands(gnb),
            vec![
                "/local/repository/bin/deploy-oai.sh '565b8482f926bea13b5b72e4a6651032fdac7083' nodeb",
                "/local/repository/bin/tune-cpu.sh",
            ]
        );
    }

    #[test]
    fn one_pair_and_link_per_radio() {
        let devices = ["cnode-wasatch", "cnode-mario", "cnode-moran", "cnode-ebc"];
        let request = build_request(&params_for(&devices));

        assert_eq!(request.nodes.len(), 2 * devices.len());
        assert_eq!(request.links.len(), devices.len());
        for (idx, link) in request.links.iter().enumerate() {
            assert_eq!(link.client_id, format!("cn-link-{}", idx));
            assert_eq!(link.interfaces.len(), 2);
            assert_eq!(link.bandwidth, Some(1_000_000));
        }

        let mut ids: Vec<&str> = request
            .nodes
            .iter()
            .flat_map(|n| n.interfaces.iter().map(|i| i.client_id.as_str()))
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 2 * devices.len());
    }

    #[test]
    fn cn_node_is_fixed() {
        let mut params = params_for(&["cnode-guesthouse"]);
        params.oai_cn_commit_hash = Some("v2.0.0".to_string());
        params.cn_nodetype = "d740".to_string();
        let request = build_request(&params);

        let cn = request.node("cn5g-guesthouse").unwrap();
        assert_eq!(cn.hardware_type.as_deref(), Some("d740"));
        assert_eq!(cn.disk_image.as_deref(), Some(UBUNTU_IMG));
        assert_eq!(cn.component_manager_id.as_deref(), Some(COMP_MANAGER_ID));
        assert_eq!(cn.component_id, None);
        assert_eq!(commands(cn), vec![OPEN5GS_DEPLOY_SCRIPT]);
    }

    #[test]
    fn gnb_defaults() {
        let request = build_request(&params_for(&["cnode-ustar"]));
        let gnb = request.node("gnb-ustar").unwrap();
        assert_eq!(gnb.component_id.as_deref(), Some("cnode-ustar"));
        assert_eq!(gnb.component_manager_id.as_deref(), Some(COMP_MANAGER_ID));
        assert_eq!(gnb.disk_image.as_deref(), Some(LOWLAT_IMG));
        assert_eq!(gnb.hardware_type, None);
    }

    #[test]
    fn gnb_overrides() {
        let mut params = params_for(&["cnode-ustar", "cnode-ebc"]);
        params.oai_ran_commit_hash = Some("deadbeef".to_string());
        params.sdr_compute_image = Some("urn:publicid:IDN+emulab.net+image+Foo:bar".to_string());
        let request = build_request(&params);

        for name in ["gnb-ustar", "gnb-ebc"] {
            let gnb = request.node(name).unwrap();
            assert_eq!(
                gnb.disk_image.as_deref(),
                Some("urn:publicid:IDN+emulab.net+image+Foo:bar")
            );
            assert_eq!(
                commands(gnb)[0],
                "/local/repository/bin/deploy-oai.sh 'deadbeef' nodeb"
            );
        }
    }

    #[test]
    fn spectrum_follows_ranges_in_order() {
        let mut params = params_for(&["cnode-mario"]);
        params.freq_ranges = vec![
            FreqRange {
                freq_min: 3550.0,
                freq_max: 3560.0,
            },
            FreqRange {
                freq_min: 3400.0,
                freq_max: 3410.5,
            },
        ];
        let request = build_request(&params);

        let got: Vec<(f64, f64, u32)> = request
            .spectrum
            .iter()
            .map(|s| (s.freq_min, s.freq_max, s.priority))
            .collect();
        assert_eq!(got, vec![(3550.0, 3560.0, 0), (3400.0, 3410.5, 0)]);
    }

    #[test]
    fn no_ranges_no_spectrum() {
        let mut params = params_for(&["cnode-mario"]);
        let with_default = build_request(&params);
        params.freq_ranges.clear();
        let request = build_request(&params);

        assert!(request.spectrum.is_empty());
        assert_eq!(request.nodes, with_default.nodes);
        assert_eq!(request.links, with_default.links);
    }

    #[test]
    fn tour_is_attached() {
        let request = build_request(&params_for(&["cnode-moran"]));
        let tour = request.tour.unwrap();
        assert!(tour.description.contains("Open5GS"));
        assert!(tour.instructions.contains("nr-softmodem"));
    }
}
