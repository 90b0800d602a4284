//! Typed NML block structs.
//!
//! One struct per GLM configuration block, each with one optional field
//! per recognized parameter. Fields left `None` are omitted from the
//! rendered output entirely.

mod flows;
mod meteorology;
mod morphometry;
mod sediment;
mod setup;
mod time;

pub use flows::{Inflows, Outflows};
pub use meteorology::{BirdModel, Light, Meteorology};
pub use morphometry::{InitProfiles, Morphometry};
pub use sediment::{Sediment, SnowIce};
pub use setup::{GlmSetup, Mixing, WqSetup};
pub use time::{Output, Time};
