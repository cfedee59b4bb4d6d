//! In-memory request document: nodes, links, spectrum and tour.
//!
//! This is the aggregate the topology builder fills in and the renderers
//! serialize. It carries no validation of its own.

pub mod link;
pub mod node;
pub mod request;

pub use link::Link;
pub use node::{Execute, Ipv4Address, Node};
pub use request::{Request, SpectrumRequest, Tour};
