use crate::rspec::{Link, Node};
use serde::Serialize;

/// Reservation of a transmit band, MHz.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpectrumRequest {
    pub freq_min: f64,
    pub freq_max: f64,
    pub priority: u32,
}

/// Markdown text shown by the portal next to the experiment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tour {
    pub description: String,
    pub instructions: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Request {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
    pub spectrum: Vec<SpectrumRequest>,
    pub tour: Option<Tour>,
}

impl Request {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn add_link(&mut self, link: Link) {
        self.links.push(link);
    }

    pub fn request_spectrum(&mut self, freq_min: f64, freq_max: f64, priority: u32) {
        self.spectrum.push(SpectrumRequest {
            freq_min,
            freq_max,
            priority,
        });
    }

    pub fn add_tour(&mut self, tour: Tour) {
        self.tour = Some(tour);
    }

    #[cfg(test)]
    pub fn node(&self, client_id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.client_id == client_id)
    }

    #[cfg(test)]
    pub fn link(&self, client_id: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.client_id == client_id)
    }
}
