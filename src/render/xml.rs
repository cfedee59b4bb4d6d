//! RSpec v3 request XML.
//!
//! Shape:
//! <rspec type="request" ...namespaces>
//!   <node client_id=".." exclusive="true" component_manager_id=".." [component_id=".."]>
//!     <sliver_type name="raw-pc"><disk_image name=".."/></sliver_type>
//!     <hardware_type name=".."/>
//!     <services><execute shell="bash" command=".."/></services>
//!     <interface client_id=".."><ip address=".." type="ipv4" netmask=".."/></interface>
//!   </node>
//!   <link client_id="..">
//!     <interface_ref client_id=".."/> ...
//!     <property source_id=".." dest_id=".." capacity=".."/> ...
//!   </link>
//!   <emulab:spectrum frequency_low=".." frequency_high=".." power=".."/>
//!   <rspec_tour xmlns="..apt-tour/1">..</rspec_tour>
//! </rspec>

use crate::rspec::{Link, Node, Request, SpectrumRequest, Tour};
use std::fmt::Write;

const RSPEC_NS: &str = "http://www.geni.net/resources/rspec/3";
const EMULAB_NS: &str = "http://www.protogeni.net/resources/rspec/ext/emulab/1";
const TOUR_NS: &str = "http://www.protogeni.net/resources/rspec/ext/apt-tour/1";
const JACKS_NS: &str = "http://www.protogeni.net/resources/rspec/ext/jacks/1";
const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
const SCHEMA_LOCATION: &str =
    "http://www.geni.net/resources/rspec/3 http://www.geni.net/resources/rspec/3/request.xsd";

pub fn render_rspec(request: &Request) -> anyhow::Result<String> {
    let mut xml = String::new();

    writeln!(xml, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        xml,
        r#"<rspec xmlns="{}" xmlns:emulab="{}" xmlns:tour="{}" xmlns:jacks="{}" xmlns:xsi="{}" xsi:schemaLocation="{}" type="request">"#,
        RSPEC_NS, EMULAB_NS, TOUR_NS, JACKS_NS, XSI_NS, SCHEMA_LOCATION
    )?;

    for node in &request.nodes {
        write_node(&mut xml, node)?;
    }
    for link in &request.links {
        write_link(&mut xml, link)?;
    }
    for spectrum in &request.spectrum {
        write_spectrum(&mut xml, spectrum)?;
    }
    if let Some(tour) = &request.tour {
        write_tour(&mut xml, tour)?;
    }

    writeln!(xml, "</rspec>")?;
    Ok(xml)
}

fn write_node(xml: &mut String, node: &Node) -> std::fmt::Result {
    write!(
        xml,
        r#"  <node client_id="{}" exclusive="{}""#,
        xml_escape(&node.client_id),
        node.exclusive
    )?;
    if let Some(cm) = &node.component_manager_id {
        write!(xml, r#" component_manager_id="{}""#, xml_escape(cm))?;
    }
    if let Some(id) = &node.component_id {
        write!(xml, r#" component_id="{}""#, xml_escape(id))?;
    }
    writeln!(xml, ">")?;

    match &node.disk_image {
        Some(image) => {
            writeln!(xml, r#"    <sliver_type name="{}">"#, xml_escape(&node.sliver_type))?;
            writeln!(xml, r#"      <disk_image name="{}"/>"#, xml_escape(image))?;
            writeln!(xml, "    </sliver_type>")?;
        }
        None => writeln!(xml, r#"    <sliver_type name="{}"/>"#, xml_escape(&node.sliver_type))?,
    }

    if let Some(hw) = &node.hardware_type {
        writeln!(xml, r#"    <hardware_type name="{}"/>"#, xml_escape(hw))?;
    }

    if !node.services.is_empty() {
        writeln!(xml, "    <services>")?;
        for svc in &node.services {
            writeln!(
                xml,
                r#"      <execute shell="{}" command="{}"/>"#,
                xml_escape(&svc.shell),
                xml_escape(&svc.command)
            )?;
        }
        writeln!(xml, "    </services>")?;
    }

    for intf in &node.interfaces {
        if intf.addresses.is_empty() {
            writeln!(xml, r#"    <interface client_id="{}"/>"#, xml_escape(&intf.client_id))?;
            continue;
        }
        writeln!(xml, r#"    <interface client_id="{}">"#, xml_escape(&intf.client_id))?;
        for addr in &intf.addresses {
            writeln!(
                xml,
                r#"      <ip address="{}" type="ipv4" netmask="{}"/>"#,
                xml_escape(&addr.address),
                xml_escape(&addr.netmask)
            )?;
        }
        writeln!(xml, "    </interface>")?;
    }

    writeln!(xml, "  </node>")
}

fn write_link(xml: &mut String, link: &Link) -> std::fmt::Result {
    writeln!(xml, r#"  <link client_id="{}">"#, xml_escape(&link.client_id))?;
    for intf in &link.interfaces {
        writeln!(xml, r#"    <interface_ref client_id="{}"/>"#, xml_escape(intf))?;
    }
    // Capacity is per direction, so every ordered interface pair gets one.
    if let Some(bw) = link.bandwidth {
        for src in &link.interfaces {
            for dst in link.interfaces.iter().filter(|d| *d != src) {
                writeln!(
                    xml,
                    r#"    <property source_id="{}" dest_id="{}" capacity="{}"/>"#,
                    xml_escape(src),
                    xml_escape(dst),
                    bw
                )?;
            }
        }
    }
    writeln!(xml, "  </link>")
}

/// The emulab extension calls the priority field `power`.
fn write_spectrum(xml: &mut String, spectrum: &SpectrumRequest) -> std::fmt::Result {
    writeln!(
        xml,
        r#"  <emulab:spectrum frequency_low="{}" frequency_high="{}" power="{}"/>"#,
        fmt_mhz(spectrum.freq_min),
        fmt_mhz(spectrum.freq_max),
        spectrum.priority
    )
}

fn write_tour(xml: &mut String, tour: &Tour) -> std::fmt::Result {
    writeln!(xml, r#"  <rspec_tour xmlns="{}">"#, TOUR_NS)?;
    writeln!(
        xml,
        r#"    <description type="markdown">{}</description>"#,
        xml_escape(&tour.description)
    )?;
    writeln!(
        xml,
        r#"    <instructions type="markdown">{}</instructions>"#,
        xml_escape(&tour.instructions)
    )?;
    writeln!(xml, "  </rspec_tour>")
}

/// Always keep a fractional part ("3430.0", "3430.125").
fn fmt_mhz(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{:.1}", v)
    } else {
        format!("{}", v)
    }
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
