//! Parameter layer: the portal form definitions plus binding and validation.
//!
//! Everything downstream of this module receives a `ParameterSet` and trusts it.
//! It owns:
//! - the parameter surface (names, defaults, legal values)
//! - raw JSON / CLI input and its conversion into a validated `ParameterSet`

pub mod bind;
pub mod defs;
pub mod set;

pub use bind::{RawDevice, RawFreqRange, RawParameters, parse_freq_range};
pub use defs::definitions;
pub use set::{DenseRadio, FreqRange, ParameterSet, UeSelection};
