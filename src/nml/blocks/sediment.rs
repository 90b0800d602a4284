//! Sediment heating and snow/ice blocks.

use crate::nml::block::{AttrMap, AttrReader, NmlBlock};
use crate::nml::error::NmlError;
use crate::nml::value::{number_list, plain, Number};

/// The `&sediment` block: sediment heat exchange, optionally zoned by
/// height when `benthic_mode = 2`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sediment {
    /// Heat conductivity of the soil (W/m/K).
    pub sed_heat_ksoil: Option<Number>,
    /// Depth of the sediment temperature measurement (m).
    pub sed_temp_depth: Option<Number>,
    /// Mean sediment temperature per zone (degrees C).
    pub sed_temp_mean: Option<Vec<Number>>,
    /// Seasonal temperature amplitude per zone (degrees C).
    pub sed_temp_amplitude: Option<Vec<Number>>,
    /// Day of year of peak sediment temperature per zone.
    pub sed_temp_peak_doy: Option<Vec<Number>>,
    /// Benthic boundary mode.
    pub benthic_mode: Option<i64>,
    /// Number of sediment zones.
    pub n_zones: Option<i64>,
    /// Upper height of each zone (m).
    pub zone_heights: Option<Vec<Number>>,
    /// Reflectivity of each zone.
    pub sed_reflectivity: Option<Vec<Number>>,
    /// Roughness of each zone.
    pub sed_roughness: Option<Vec<Number>>,
}

impl NmlBlock for Sediment {
    fn block_name(&self) -> &'static str {
        "sediment"
    }

    fn params(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("sed_heat_Ksoil", plain(&self.sed_heat_ksoil)),
            ("sed_temp_depth", plain(&self.sed_temp_depth)),
            ("sed_temp_mean", number_list(&self.sed_temp_mean, false)),
            ("sed_temp_amplitude", number_list(&self.sed_temp_amplitude, false)),
            ("sed_temp_peak_doy", number_list(&self.sed_temp_peak_doy, false)),
            ("benthic_mode", plain(&self.benthic_mode)),
            ("n_zones", plain(&self.n_zones)),
            ("zone_heights", number_list(&self.zone_heights, false)),
            ("sed_reflectivity", number_list(&self.sed_reflectivity, false)),
            ("sed_roughness", number_list(&self.sed_roughness, false)),
        ]
    }

    fn set_attributes(
        &mut self,
        attrs: &AttrMap,
        overrides: Option<&AttrMap>,
    ) -> Result<(), NmlError> {
        let mut r = AttrReader::new(self.block_name(), attrs, overrides);
        if let Some(v) = r.number("sed_heat_Ksoil")? {
            self.sed_heat_ksoil = Some(v);
        }
        if let Some(v) = r.number("sed_temp_depth")? {
            self.sed_temp_depth = Some(v);
        }
        if let Some(v) = r.number_list("sed_temp_mean")? {
            self.sed_temp_mean = Some(v);
        }
        if let Some(v) = r.number_list("sed_temp_amplitude")? {
            self.sed_temp_amplitude = Some(v);
        }
        if let Some(v) = r.number_list("sed_temp_peak_doy")? {
            self.sed_temp_peak_doy = Some(v);
        }
        if let Some(v) = r.int("benthic_mode")? {
            self.benthic_mode = Some(v);
        }
        if let Some(v) = r.int("n_zones")? {
            self.n_zones = Some(v);
        }
        if let Some(v) = r.number_list("zone_heights")? {
            self.zone_heights = Some(v);
        }
        if let Some(v) = r.number_list("sed_reflectivity")? {
            self.sed_reflectivity = Some(v);
        }
        if let Some(v) = r.number_list("sed_roughness")? {
            self.sed_roughness = Some(v);
        }
        r.finish()
    }
}

/// The `&snowice` block: snow and ice cover dynamics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SnowIce {
    /// Scaling factor applied to snow albedo.
    pub snow_albedo_factor: Option<Number>,
    /// Maximum snow density (kg/m^3).
    pub snow_rho_max: Option<Number>,
    /// Minimum snow density (kg/m^3).
    pub snow_rho_min: Option<Number>,
}

impl NmlBlock for SnowIce {
    fn block_name(&self) -> &'static str {
        "snowice"
    }

    fn params(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("snow_albedo_factor", plain(&self.snow_albedo_factor)),
            ("snow_rho_max", plain(&self.snow_rho_max)),
            ("snow_rho_min", plain(&self.snow_rho_min)),
        ]
    }

    fn set_attributes(
        &mut self,
        attrs: &AttrMap,
        overrides: Option<&AttrMap>,
    ) -> Result<(), NmlError> {
        let mut r = AttrReader::new(self.block_name(), attrs, overrides);
        if let Some(v) = r.number("snow_albedo_factor")? {
            self.snow_albedo_factor = Some(v);
        }
        if let Some(v) = r.number("snow_rho_max")? {
            self.snow_rho_max = Some(v);
        }
        if let Some(v) = r.number("snow_rho_min")? {
            self.snow_rho_min = Some(v);
        }
        r.finish()
    }
}
