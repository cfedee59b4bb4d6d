use crate::rspec::Request;

pub fn render_json(request: &Request) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(request)?;
    out.push('\n');
    Ok(out)
}
