//! # glm-prep
//!
//! A toolkit for preparing configuration inputs for the General Lake Model
//! (GLM), a one-dimensional hydrodynamic lake/reservoir simulator.
//!
//! This crate provides the building blocks for generating GLM `.nml`
//! configuration files:
//! - Typed configuration blocks (`&glm_setup`, `&morphometry`, `&time`, ...)
//!   with Fortran namelist formatting rules
//! - Document assembly with the canonical block ordering GLM expects
//! - A JSON front-end for populating blocks from structured config data
//! - Water body dimension calculators for deriving morphometry
//!   height/area profiles of simple dam shapes
//!
//! # Example
//!
//! ```
//! use glm_prep::nml::{GlmSetup, Morphometry, Time, InitProfiles, NmlDocument};
//!
//! let setup = GlmSetup {
//!     sim_name: Some("Sparkling Lake".into()),
//!     max_layers: Some(500),
//!     ..Default::default()
//! };
//!
//! let doc = NmlDocument::builder()
//!     .setup(setup)
//!     .morphometry(Morphometry::default())
//!     .time(Time::default())
//!     .init_profiles(InitProfiles::default())
//!     .build()
//!     .unwrap();
//!
//! let text = doc.serialize();
//! assert!(text.starts_with("&glm_setup\n"));
//! ```

pub mod dimensions;
pub mod json;
pub mod nml;

// Re-export main types for convenience
pub use dimensions::{DimensionsError, TruncatedCone, TruncatedPyramid};
pub use json::JsonConfig;
pub use nml::{
    Block, BlockKind, GlmSetup, InitProfiles, Morphometry, NmlBlock, NmlDocument,
    NmlDocumentBuilder, NmlError, Number, Time,
};
