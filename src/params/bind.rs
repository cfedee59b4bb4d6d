//! Binding raw parameters (params JSON + CLI flags) into a `ParameterSet`.
//!
//! JSON shape (portal parameter names):
//! {
//!   "UEs": [{ "device": "d430" }],
//!   "dense_radios": [{ "device": "cnode-wasatch" }],
//!   "oai_ran_commit_hash": "",            // empty => default hash
//!   "oai_cn_commit_hash": "",
//!   "sdr_compute_image": "",              // empty => low-latency image
//!   "cn_nodetype": "d430",                // optional
//!   "freq_ranges": [{ "freq_min": 3430.0, "freq_max": 3470.0 }]
//! }
//!
//! A missing `freq_ranges` key means the form default; `[]` means none.

use crate::Result;
use crate::params::defs::{
    DEFAULT_CN_NODETYPE, DEFAULT_FREQ_MAX, DEFAULT_FREQ_MIN, DENSE_RADIOS, NODE_TYPES, is_legal,
};
use crate::params::set::{DenseRadio, FreqRange, ParameterSet, UeSelection};

use anyhow::{Context, anyhow, bail};
use log::debug;
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawParameters {
    #[serde(rename = "UEs", alias = "ues", default)]
    pub ues: Vec<RawDevice>,

    #[serde(default)]
    pub dense_radios: Vec<RawDevice>,

    #[serde(default)]
    pub oai_ran_commit_hash: String,

    #[serde(default)]
    pub oai_cn_commit_hash: String,

    #[serde(default)]
    pub sdr_compute_image: String,

    #[serde(default)]
    pub cn_nodetype: Option<String>,

    #[serde(default)]
    pub freq_ranges: Option<Vec<RawFreqRange>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawDevice {
    pub device: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RawFreqRange {
    pub freq_min: f64,
    pub freq_max: f64,
}

impl RawParameters {
    pub fn from_json_file(path: &str) -> Result<Self> {
        let text =
            fs::read_to_string(path).with_context(|| format!("read params file {}", path))?;
        Self::from_json_str(&text).with_context(|| format!("parse params file {}", path))
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Check cardinalities, legal values and frequency ranges, then produce
    /// the typed parameter set. All violations are reported together.
    pub fn bind(self) -> Result<ParameterSet> {
        let mut errors: Vec<String> = Vec::new();

        if self.ues.is_empty() {
            errors.push("UEs: at least 1 instance is required".to_string());
        }
        for (i, ue) in self.ues.iter().enumerate() {
            if !is_legal(NODE_TYPES, &ue.device) {
                errors.push(format!("UEs[{}].device: illegal value {:?}", i, ue.device));
            }
        }

        if self.dense_radios.is_empty() {
            errors.push("dense_radios: at least 1 instance is required".to_string());
        }
        // Node names derive from the device, so a site may only be picked once.
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        for (i, radio) in self.dense_radios.iter().enumerate() {
            if !is_legal(DENSE_RADIOS, &radio.device) {
                errors.push(format!(
                    "dense_radios[{}].device: illegal value {:?}",
                    i, radio.device
                ));
            }
            if !seen.insert(radio.device.as_str()) {
                errors.push(format!(
                    "dense_radios[{}].device: duplicate {:?}",
                    i, radio.device
                ));
            }
        }

        let cn_nodetype = non_empty(self.cn_nodetype.unwrap_or_default())
            .unwrap_or_else(|| DEFAULT_CN_NODETYPE.to_string());
        if !is_legal(NODE_TYPES, &cn_nodetype) {
            errors.push(format!("cn_nodetype: illegal value {:?}", cn_nodetype));
        }

        let raw_ranges = self.freq_ranges.unwrap_or_else(|| {
            vec![RawFreqRange {
                freq_min: DEFAULT_FREQ_MIN,
                freq_max: DEFAULT_FREQ_MAX,
            }]
        });
        let mut freq_ranges = Vec::with_capacity(raw_ranges.len());
        for (i, raw) in raw_ranges.iter().enumerate() {
            match check_range(raw) {
                Ok(range) => freq_ranges.push(range),
                Err(e) => errors.push(format!("freq_ranges[{}]: {}", i, e)),
            }
        }

        if !errors.is_empty() {
            bail!("invalid parameters:\n  {}", errors.join("\n  "));
        }

        let params = ParameterSet {
            ues: self
                .ues
                .into_iter()
                .map(|d| UeSelection { device: d.device })
                .collect(),
            dense_radios: self
                .dense_radios
                .into_iter()
                .map(|d| DenseRadio::new(d.device))
                .collect(),
            oai_ran_commit_hash: non_empty(self.oai_ran_commit_hash),
            oai_cn_commit_hash: non_empty(self.oai_cn_commit_hash),
            sdr_compute_image: non_empty(self.sdr_compute_image),
            cn_nodetype,
            freq_ranges,
        };
        debug!(
            "bound {} dense radio(s), {} UE(s), {} frequency range(s)",
            params.dense_radios.len(),
            params.ues.len(),
            params.freq_ranges.len()
        );
        Ok(params)
    }
}

/// Any non-empty string counts as set and is passed through verbatim.
fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

/// Checks apply to the rounded values, i.e. what ends up in the request.
fn check_range(raw: &RawFreqRange) -> Result<FreqRange> {
    let range = FreqRange {
        freq_min: round_to_khz(raw.freq_min),
        freq_max: round_to_khz(raw.freq_max),
    };
    for (field, v) in [("freq_min", range.freq_min), ("freq_max", range.freq_max)] {
        if !v.is_finite() || v <= 0.0 {
            bail!("{} must be a positive frequency in MHz, got {}", field, v);
        }
    }
    if range.freq_min >= range.freq_max {
        bail!(
            "freq_min ({}) must be below freq_max ({})",
            range.freq_min,
            range.freq_max
        );
    }
    Ok(range)
}

/// Round a MHz value to the nearest kHz.
pub fn round_to_khz(mhz: f64) -> f64 {
    (mhz * 1000.0).round() / 1000.0
}

/// Parse a CLI frequency range literal, "3430:3470" or "3430.5-3470".
pub fn parse_freq_range(s: &str) -> Result<RawFreqRange> {
    // 1) min: integer or decimal MHz
    // 2) max: integer or decimal MHz
    const RANGE_RE: &str = r#"^\s*([0-9]+(?:\.[0-9]+)?)\s*[:-]\s*([0-9]+(?:\.[0-9]+)?)\s*$"#;
    let re = Regex::new(RANGE_RE)?;

    let caps = re
        .captures(s)
        .ok_or_else(|| anyhow!("cannot parse frequency range {:?}, expected MIN:MAX", s))?;
    let freq_min: f64 = caps[1]
        .parse()
        .with_context(|| format!("bad freq_min in {:?}", s))?;
    let freq_max: f64 = caps[2]
        .parse()
        .with_context(|| format!("bad freq_max in {:?}", s))?;

    Ok(RawFreqRange { freq_min, freq_max })
}
