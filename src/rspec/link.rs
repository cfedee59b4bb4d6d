use serde::Serialize;

/// Undirected link between node interfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub client_id: String,
    /// Interface client ids, in attachment order.
    pub interfaces: Vec<String>,
    /// Capacity in kbps, applied in both directions.
    pub bandwidth: Option<u64>,
}

impl Link {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            interfaces: vec![],
            bandwidth: None,
        }
    }

    pub fn add_interface(&mut self, client_id: impl Into<String>) {
        self.interfaces.push(client_id.into());
    }
}
