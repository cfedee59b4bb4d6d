use serde::Serialize;

/// A COTS UE kit. `device` is the node hardware type it attaches through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UeSelection {
    pub device: String,
}

/// A small-form-factor compute + B210 radio at a dense deployment site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DenseRadio {
    pub device: String,
}

impl DenseRadio {
    pub fn new(device: impl Into<String>) -> Self {
        Self {
            device: device.into(),
        }
    }

    /// Last hyphen-delimited segment of the device id, used to name the
    /// nodes of this pairing ("cnode-wasatch" => "wasatch").
    pub fn suffix(&self) -> &str {
        self.device.rsplit('-').next().unwrap_or(&self.device)
    }
}

/// Transmit range in MHz, already rounded to kHz resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FreqRange {
    pub freq_min: f64,
    pub freq_max: f64,
}

/// Bound and verified profile parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterSet {
    pub ues: Vec<UeSelection>,
    pub dense_radios: Vec<DenseRadio>,
    pub oai_ran_commit_hash: Option<String>,
    pub oai_cn_commit_hash: Option<String>,
    pub sdr_compute_image: Option<String>,
    pub cn_nodetype: String,
    pub freq_ranges: Vec<FreqRange>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn suffix_is_last_segment() {
        assert_eq!(DenseRadio::new("cnode-wasatch").suffix(), "wasatch");
        assert_eq!(DenseRadio::new("cnode-wasatch-1").suffix(), "1");
    }

    #[test]
    fn suffix_without_hyphen_is_whole_id() {
        assert_eq!(DenseRadio::new("nuc7").suffix(), "nuc7");
    }
}
