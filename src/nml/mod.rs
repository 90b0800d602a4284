//! GLM `.nml` configuration generation.
//!
//! GLM reads its configuration from a Fortran namelist file made of named
//! blocks. This module provides one typed struct per block, a trait for
//! rendering blocks into namelist text, and a document type that assembles
//! blocks into a complete `.nml` file.
//!
//! # File Format
//!
//! ```text
//! &glm_setup
//!    sim_name = 'Sparkling Lake'
//!    max_layers = 500
//!    non_avg = .true.
//! /
//! &time
//!    timefmt = 3
//!    start = '1980-04-15 00:00:00'
//!    dt = 3600.0
//! /
//! ```
//!
//! Every parameter is optional; parameters left unset are omitted from the
//! output entirely, and GLM falls back to its internal defaults for them.
//! Parameter lines appear in the block's declared order no matter how the
//! block was populated.
//!
//! # Example
//!
//! ```
//! use glm_prep::nml::{GlmSetup, NmlBlock, Number};
//!
//! let setup = GlmSetup {
//!     sim_name: Some("Sparkling Lake".into()),
//!     max_layers: Some(500),
//!     min_layer_thick: Some(Number::Float(0.15)),
//!     ..Default::default()
//! };
//!
//! assert_eq!(
//!     setup.render(),
//!     "&glm_setup\n   sim_name = 'Sparkling Lake'\n   max_layers = 500\n   min_layer_thick = 0.15\n/"
//! );
//! ```
//!
//! Instances of a block type are exclusively owned. Rendering is a pure
//! function of the block's state and may run concurrently on shared
//! references; mutating a block while another thread renders it is the
//! caller's responsibility to serialize.

mod block;
mod blocks;
mod document;
mod error;
pub mod value;

pub use block::{AttrMap, NmlBlock};
pub use blocks::{
    BirdModel, GlmSetup, InitProfiles, Inflows, Light, Meteorology, Mixing, Morphometry,
    Outflows, Output, Sediment, SnowIce, Time, WqSetup,
};
pub use document::{Block, BlockKind, NmlDocument, NmlDocumentBuilder};
pub use error::NmlError;
pub use value::{bool_token, comma_sep_list, fortran_bool, Number};
