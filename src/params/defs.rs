//! Parameter definitions as presented on the portal form.
//!
//! `definitions()` is what the `params` subcommand prints; binding checks
//! against the same legal-value tables so the two cannot drift apart.

use serde::Serialize;
use serde_json::{Value, json};

/// Compute node types, `(value, label)`.
pub const NODE_TYPES: &[(&str, &str)] = &[("d430", "Emulab, d430"), ("d740", "Emulab, d740")];

/// Dense deployment sites with an SFF compute + NI B210, `(value, label)`.
pub const DENSE_RADIOS: &[(&str, &str)] = &[
    ("cnode-wasatch", "Wasatch"),
    ("cnode-mario", "Mario"),
    ("cnode-moran", "Moran"),
    ("cnode-guesthouse", "Guesthouse"),
    ("cnode-ebc", "EBC"),
    ("cnode-ustar", "USTAR"),
];

pub const DEFAULT_CN_NODETYPE: &str = "d430";
pub const DEFAULT_FREQ_MIN: f64 = 3430.0;
pub const DEFAULT_FREQ_MAX: f64 = 3470.0;

pub fn is_legal(table: &[(&str, &str)], value: &str) -> bool {
    table.iter().any(|(v, _)| *v == value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    String,
    Bandwidth,
    Struct,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegalValue {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiValue {
    pub min: usize,
    pub title: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterDef {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub typ: ParameterType,
    pub default: Value,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub legal_values: Vec<LegalValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<&'static str>,
    pub advanced: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_value: Option<MultiValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<ParameterDef>,
}

impl ParameterDef {
    fn scalar(name: &'static str, description: &'static str, typ: ParameterType, default: Value) -> Self {
        Self {
            name,
            description,
            typ,
            default,
            legal_values: vec![],
            long_description: None,
            advanced: false,
            multi_value: None,
            members: vec![],
        }
    }

    fn advanced(mut self) -> Self {
        self.advanced = true;
        self
    }

    fn legal(mut self, table: &[(&'static str, &'static str)]) -> Self {
        self.legal_values = table
            .iter()
            .map(|&(value, label)| LegalValue { value, label })
            .collect();
        self
    }

    fn long(mut self, text: &'static str) -> Self {
        self.long_description = Some(text);
        self
    }

    fn multi(
        name: &'static str,
        description: &'static str,
        default: Value,
        min: usize,
        title: &'static str,
        members: Vec<ParameterDef>,
    ) -> Self {
        Self {
            multi_value: Some(MultiValue { min, title }),
            members,
            ..Self::scalar(name, description, ParameterType::Struct, default)
        }
    }
}

/// The full parameter surface, in form order.
pub fn definitions() -> Vec<ParameterDef> {
    const KHZ_NOTE: &str = "Values are rounded to the nearest kilohertz.";

    vec![
        ParameterDef::scalar(
            "oai_ran_commit_hash",
            "Commit hash for OAI RAN",
            ParameterType::String,
            json!(""),
        )
        .advanced(),
        ParameterDef::scalar(
            "oai_cn_commit_hash",
            "Commit hash for OAI (5G)CN",
            ParameterType::String,
            json!(""),
        )
        .advanced(),
        ParameterDef::scalar(
            "sdr_compute_image",
            "Image to use for compute connected to SDRs",
            ParameterType::String,
            json!(""),
        )
        .advanced(),
        ParameterDef::scalar(
            "cn_nodetype",
            "Type of compute node to use for CN node (if included)",
            ParameterType::String,
            json!(DEFAULT_CN_NODETYPE),
        )
        .legal(NODE_TYPES)
        .advanced(),
        ParameterDef::multi(
            "UEs",
            "COTS UE",
            json!([]),
            1,
            "number of UEs",
            vec![
                ParameterDef::scalar("device", "COTS UE", ParameterType::String, json!(NODE_TYPES[0].0))
                    .legal(NODE_TYPES)
                    .long("number of UEs to connected to same gNodeB basestation"),
            ],
        ),
        ParameterDef::multi(
            "dense_radios",
            "Dense Site Radios",
            json!([]),
            1,
            "Dense Site NUC+B210 radios to allocate.",
            vec![
                ParameterDef::scalar(
                    "device",
                    "SFF Compute + NI B210 device",
                    ParameterType::String,
                    json!(DENSE_RADIOS[0].0),
                )
                .legal(DENSE_RADIOS)
                .long(
                    "A Small Form Factor compute with attached NI B210 device at the given \
                     Dense Deployment site will be allocated.",
                ),
            ],
        ),
        ParameterDef::multi(
            "freq_ranges",
            "Frequency Ranges To Transmit In",
            json!([{ "freq_min": DEFAULT_FREQ_MIN, "freq_max": DEFAULT_FREQ_MAX }]),
            0,
            "Frequency ranges to be used for transmission.",
            vec![
                ParameterDef::scalar(
                    "freq_min",
                    "Frequency Range Min",
                    ParameterType::Bandwidth,
                    json!(DEFAULT_FREQ_MIN),
                )
                .long(KHZ_NOTE),
                ParameterDef::scalar(
                    "freq_max",
                    "Frequency Range Max",
                    ParameterType::Bandwidth,
                    json!(DEFAULT_FREQ_MAX),
                )
                .long(KHZ_NOTE),
            ],
        ),
    ]
}
