//! Output renderers for a finished `Request`.

pub mod json;
pub mod xml;

pub use json::render_json;
pub use xml::render_rspec;

use crate::rspec::Request;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// GENI RSpec v3 request XML.
    Rspec,
    /// The request model as pretty-printed JSON.
    Json,
}

pub fn render(request: &Request, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Rspec => render_rspec(request),
        OutputFormat::Json => render_json(request),
    }
}
