//! Morphometry and initial profile blocks.

use crate::nml::block::{AttrMap, AttrReader, NmlBlock};
use crate::nml::error::NmlError;
use crate::nml::value::{number_list, plain, quoted, string_list, Number};

/// The `&morphometry` block: basin shape of the modelled water body.
/// Required for every simulation.
///
/// The hypsographic profile is given as paired lists of elevations `H`
/// (m above datum, bottom first) and areas `A` (m^2), both of length
/// `bsn_vals`. The [`dimensions`](crate::dimensions) module can derive
/// these profiles for simple dam shapes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Morphometry {
    /// Site name.
    pub lake_name: Option<String>,
    /// Latitude, positive North.
    pub latitude: Option<Number>,
    /// Longitude, positive East.
    pub longitude: Option<Number>,
    /// Elevation of the bottom-most point of the lake (m above datum).
    pub base_elev: Option<Number>,
    /// Elevation of the weir crest where overflow begins (m above datum).
    pub crest_elev: Option<Number>,
    /// Basin length at crest height (m).
    pub bsn_len: Option<Number>,
    /// Basin width at crest height (m).
    pub bsn_wid: Option<Number>,
    /// Number of hypsographic points supplied.
    pub bsn_vals: Option<Number>,
    /// Elevations of the hypsographic profile (m above datum).
    pub h: Option<Vec<Number>>,
    /// Areas of the hypsographic profile (m^2).
    pub a: Option<Vec<Number>>,
}

impl NmlBlock for Morphometry {
    fn block_name(&self) -> &'static str {
        "morphometry"
    }

    fn params(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("lake_name", quoted(&self.lake_name)),
            ("latitude", plain(&self.latitude)),
            ("longitude", plain(&self.longitude)),
            ("base_elev", plain(&self.base_elev)),
            ("crest_elev", plain(&self.crest_elev)),
            ("bsn_len", plain(&self.bsn_len)),
            ("bsn_wid", plain(&self.bsn_wid)),
            ("bsn_vals", plain(&self.bsn_vals)),
            ("H", number_list(&self.h, false)),
            ("A", number_list(&self.a, false)),
        ]
    }

    fn set_attributes(
        &mut self,
        attrs: &AttrMap,
        overrides: Option<&AttrMap>,
    ) -> Result<(), NmlError> {
        let mut r = AttrReader::new(self.block_name(), attrs, overrides);
        if let Some(v) = r.string("lake_name")? {
            self.lake_name = Some(v);
        }
        if let Some(v) = r.number("latitude")? {
            self.latitude = Some(v);
        }
        if let Some(v) = r.number("longitude")? {
            self.longitude = Some(v);
        }
        if let Some(v) = r.number("base_elev")? {
            self.base_elev = Some(v);
        }
        if let Some(v) = r.number("crest_elev")? {
            self.crest_elev = Some(v);
        }
        if let Some(v) = r.number("bsn_len")? {
            self.bsn_len = Some(v);
        }
        if let Some(v) = r.number("bsn_wid")? {
            self.bsn_wid = Some(v);
        }
        if let Some(v) = r.number("bsn_vals")? {
            self.bsn_vals = Some(v);
        }
        if let Some(v) = r.number_list("H")? {
            self.h = Some(v);
        }
        if let Some(v) = r.number_list("A")? {
            self.a = Some(v);
        }
        r.finish()
    }
}

/// The `&init_profiles` block: initial vertical temperature/salinity
/// profile, plus optional water quality variable initial values.
/// Required for every simulation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InitProfiles {
    /// Initial lake height/depth (m).
    pub lake_depth: Option<Number>,
    /// Number of depths given.
    pub num_depths: Option<i64>,
    /// Depths at which initial values are provided (m).
    pub the_depths: Option<Vec<Number>>,
    /// Initial temperatures at those depths (degrees C).
    pub the_temps: Option<Vec<Number>>,
    /// Initial salinities at those depths (psu).
    pub the_sals: Option<Vec<Number>>,
    /// Number of water quality variables initialized.
    pub num_wq_vars: Option<i64>,
    /// Names of the water quality variables.
    pub wq_names: Option<Vec<String>>,
    /// Initial water quality values, flattened variable-major.
    pub wq_init_vals: Option<Vec<Number>>,
}

impl NmlBlock for InitProfiles {
    fn block_name(&self) -> &'static str {
        "init_profiles"
    }

    fn params(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("lake_depth", plain(&self.lake_depth)),
            ("num_depths", plain(&self.num_depths)),
            ("the_depths", number_list(&self.the_depths, false)),
            ("the_temps", number_list(&self.the_temps, false)),
            ("the_sals", number_list(&self.the_sals, false)),
            ("num_wq_vars", plain(&self.num_wq_vars)),
            ("wq_names", string_list(&self.wq_names, true)),
            ("wq_init_vals", number_list(&self.wq_init_vals, false)),
        ]
    }

    fn set_attributes(
        &mut self,
        attrs: &AttrMap,
        overrides: Option<&AttrMap>,
    ) -> Result<(), NmlError> {
        let mut r = AttrReader::new(self.block_name(), attrs, overrides);
        if let Some(v) = r.number("lake_depth")? {
            self.lake_depth = Some(v);
        }
        if let Some(v) = r.int("num_depths")? {
            self.num_depths = Some(v);
        }
        if let Some(v) = r.number_list("the_depths")? {
            self.the_depths = Some(v);
        }
        if let Some(v) = r.number_list("the_temps")? {
            self.the_temps = Some(v);
        }
        if let Some(v) = r.number_list("the_sals")? {
            self.the_sals = Some(v);
        }
        if let Some(v) = r.int("num_wq_vars")? {
            self.num_wq_vars = Some(v);
        }
        if let Some(v) = r.string_list("wq_names")? {
            self.wq_names = Some(v);
        }
        if let Some(v) = r.number_list("wq_init_vals")? {
            self.wq_init_vals = Some(v);
        }
        r.finish()
    }
}
