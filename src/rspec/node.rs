use serde::Serialize;

/// Sliver type for bare-metal allocations.
pub const RAW_PC: &str = "raw-pc";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ipv4Address {
    pub address: String,
    pub netmask: String,
}

impl Ipv4Address {
    pub fn new(address: impl Into<String>, netmask: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            netmask: netmask.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interface {
    /// Document-wide id, `<node>:<name>`.
    pub client_id: String,
    pub addresses: Vec<Ipv4Address>,
}

impl Interface {
    pub fn add_address(&mut self, address: Ipv4Address) {
        self.addresses.push(address);
    }
}

/// Startup command run on the node once it boots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Execute {
    pub shell: String,
    pub command: String,
}

impl Execute {
    pub fn bash(command: impl Into<String>) -> Self {
        Self {
            shell: "bash".to_string(),
            command: command.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub client_id: String,
    pub sliver_type: String,
    pub exclusive: bool,
    pub component_manager_id: Option<String>,
    pub component_id: Option<String>,
    pub hardware_type: Option<String>,
    pub disk_image: Option<String>,
    pub interfaces: Vec<Interface>,
    /// Run in order.
    pub services: Vec<Execute>,
}

impl Node {
    pub fn raw_pc(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            sliver_type: RAW_PC.to_string(),
            exclusive: true,
            component_manager_id: None,
            component_id: None,
            hardware_type: None,
            disk_image: None,
            interfaces: vec![],
            services: vec![],
        }
    }

    pub fn add_interface(&mut self, name: &str) -> &mut Interface {
        let client_id = format!("{}:{}", self.client_id, name);
        self.interfaces.push(Interface {
            client_id,
            addresses: vec![],
        });
        let last = self.interfaces.len() - 1;
        &mut self.interfaces[last]
    }

    pub fn add_service(&mut self, service: Execute) {
        self.services.push(service);
    }
}
