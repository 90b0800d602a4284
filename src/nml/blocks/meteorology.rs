//! Surface forcing blocks: meteorology, light, and the Bird clear-sky
//! radiation model.

use crate::nml::block::{AttrMap, AttrReader, NmlBlock};
use crate::nml::error::NmlError;
use crate::nml::value::{bool_scalar, number_list, plain, quoted, Number};

/// The `&meteorology` block: surface meteorological forcing and the
/// surface flux parameterization.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Meteorology {
    /// Switch enabling surface meteorological forcing.
    pub met_sw: Option<bool>,
    /// Path of the meteorological forcing CSV.
    pub meteo_fl: Option<String>,
    /// Forcing data is sub-daily rather than daily.
    pub subdaily: Option<bool>,
    /// Time format string of the forcing data.
    pub time_fmt: Option<String>,
    /// Shortwave radiation mode.
    pub rad_mode: Option<i64>,
    /// Albedo calculation mode.
    pub albedo_mode: Option<i64>,
    /// Scaling factor applied to shortwave radiation.
    pub sw_factor: Option<Number>,
    /// Longwave radiation type, e.g. `"LW_IN"`.
    pub lw_type: Option<String>,
    /// Cloud cover mode.
    pub cloud_mode: Option<i64>,
    /// Scaling factor applied to longwave radiation.
    pub lw_factor: Option<Number>,
    /// Atmospheric stability correction switch.
    pub atm_stab: Option<i64>,
    /// Scaling factor applied to relative humidity.
    pub rh_factor: Option<Number>,
    /// Scaling factor applied to air temperature.
    pub at_factor: Option<Number>,
    /// Bulk aerodynamic transfer coefficient for latent heat.
    pub ce: Option<Number>,
    /// Bulk aerodynamic transfer coefficient for sensible heat.
    pub ch: Option<Number>,
    /// Switch enabling rainfall input.
    pub rain_sw: Option<bool>,
    /// Scaling factor applied to rainfall.
    pub rain_factor: Option<Number>,
    /// Switch enabling rainfall runoff from the exposed banks.
    pub catchrain: Option<bool>,
    /// Rainfall threshold above which runoff is generated (m).
    pub rain_threshold: Option<Number>,
    /// Runoff coefficient of the exposed banks.
    pub runoff_coef: Option<Number>,
    /// Bulk aerodynamic transfer coefficient for momentum.
    pub cd: Option<Number>,
    /// Scaling factor applied to wind speed.
    pub wind_factor: Option<Number>,
    /// Fetch mode for wind sheltering.
    pub fetch_mode: Option<i64>,
    /// Number of wind direction bins.
    pub num_dir: Option<i64>,
    /// Wind directions of the bins (degrees).
    pub wind_dir: Option<Number>,
    /// Fetch scaling of the bins.
    pub fetch_scale: Option<Number>,
}

impl NmlBlock for Meteorology {
    fn block_name(&self) -> &'static str {
        "meteorology"
    }

    fn params(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("met_sw", bool_scalar(&self.met_sw)),
            ("meteo_fl", quoted(&self.meteo_fl)),
            ("subdaily", bool_scalar(&self.subdaily)),
            ("time_fmt", quoted(&self.time_fmt)),
            ("rad_mode", plain(&self.rad_mode)),
            ("albedo_mode", plain(&self.albedo_mode)),
            ("sw_factor", plain(&self.sw_factor)),
            ("lw_type", quoted(&self.lw_type)),
            ("cloud_mode", plain(&self.cloud_mode)),
            ("lw_factor", plain(&self.lw_factor)),
            ("atm_stab", plain(&self.atm_stab)),
            ("rh_factor", plain(&self.rh_factor)),
            ("at_factor", plain(&self.at_factor)),
            ("ce", plain(&self.ce)),
            ("ch", plain(&self.ch)),
            ("rain_sw", bool_scalar(&self.rain_sw)),
            ("rain_factor", plain(&self.rain_factor)),
            ("catchrain", bool_scalar(&self.catchrain)),
            ("rain_threshold", plain(&self.rain_threshold)),
            ("runoff_coef", plain(&self.runoff_coef)),
            ("cd", plain(&self.cd)),
            ("wind_factor", plain(&self.wind_factor)),
            ("fetch_mode", plain(&self.fetch_mode)),
            ("num_dir", plain(&self.num_dir)),
            ("wind_dir", plain(&self.wind_dir)),
            ("fetch_scale", plain(&self.fetch_scale)),
        ]
    }

    fn set_attributes(
        &mut self,
        attrs: &AttrMap,
        overrides: Option<&AttrMap>,
    ) -> Result<(), NmlError> {
        let mut r = AttrReader::new(self.block_name(), attrs, overrides);
        if let Some(v) = r.bool("met_sw")? {
            self.met_sw = Some(v);
        }
        if let Some(v) = r.string("meteo_fl")? {
            self.meteo_fl = Some(v);
        }
        if let Some(v) = r.bool("subdaily")? {
            self.subdaily = Some(v);
        }
        if let Some(v) = r.string("time_fmt")? {
            self.time_fmt = Some(v);
        }
        if let Some(v) = r.int("rad_mode")? {
            self.rad_mode = Some(v);
        }
        if let Some(v) = r.int("albedo_mode")? {
            self.albedo_mode = Some(v);
        }
        if let Some(v) = r.number("sw_factor")? {
            self.sw_factor = Some(v);
        }
        if let Some(v) = r.string("lw_type")? {
            self.lw_type = Some(v);
        }
        if let Some(v) = r.int("cloud_mode")? {
            self.cloud_mode = Some(v);
        }
        if let Some(v) = r.number("lw_factor")? {
            self.lw_factor = Some(v);
        }
        if let Some(v) = r.int("atm_stab")? {
            self.atm_stab = Some(v);
        }
        if let Some(v) = r.number("rh_factor")? {
            self.rh_factor = Some(v);
        }
        if let Some(v) = r.number("at_factor")? {
            self.at_factor = Some(v);
        }
        if let Some(v) = r.number("ce")? {
            self.ce = Some(v);
        }
        if let Some(v) = r.number("ch")? {
            self.ch = Some(v);
        }
        if let Some(v) = r.bool("rain_sw")? {
            self.rain_sw = Some(v);
        }
        if let Some(v) = r.number("rain_factor")? {
            self.rain_factor = Some(v);
        }
        if let Some(v) = r.bool("catchrain")? {
            self.catchrain = Some(v);
        }
        if let Some(v) = r.number("rain_threshold")? {
            self.rain_threshold = Some(v);
        }
        if let Some(v) = r.number("runoff_coef")? {
            self.runoff_coef = Some(v);
        }
        if let Some(v) = r.number("cd")? {
            self.cd = Some(v);
        }
        if let Some(v) = r.number("wind_factor")? {
            self.wind_factor = Some(v);
        }
        if let Some(v) = r.int("fetch_mode")? {
            self.fetch_mode = Some(v);
        }
        if let Some(v) = r.int("num_dir")? {
            self.num_dir = Some(v);
        }
        if let Some(v) = r.number("wind_dir")? {
            self.wind_dir = Some(v);
        }
        if let Some(v) = r.number("fetch_scale")? {
            self.fetch_scale = Some(v);
        }
        r.finish()
    }
}

/// The `&light` block: light penetration through the water column.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Light {
    /// Light extinction mode (0 = fixed `Kw`, 1 = multi-band).
    pub light_mode: Option<i64>,
    /// Fixed light extinction coefficient (1/m).
    pub kw: Option<Number>,
    /// Number of light bands, used with `light_mode = 1`.
    pub n_bands: Option<i64>,
    /// Extinction coefficient per band (1/m).
    pub light_extc: Option<Vec<Number>>,
    /// Fraction of incident energy per band.
    pub energy_frac: Option<Vec<Number>>,
    /// Minimum benthic irradiance.
    pub benthic_imin: Option<Number>,
}

impl NmlBlock for Light {
    fn block_name(&self) -> &'static str {
        "light"
    }

    fn params(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("light_mode", plain(&self.light_mode)),
            ("Kw", plain(&self.kw)),
            ("n_bands", plain(&self.n_bands)),
            ("light_extc", number_list(&self.light_extc, false)),
            ("energy_frac", number_list(&self.energy_frac, false)),
            ("Benthic_Imin", plain(&self.benthic_imin)),
        ]
    }

    fn set_attributes(
        &mut self,
        attrs: &AttrMap,
        overrides: Option<&AttrMap>,
    ) -> Result<(), NmlError> {
        let mut r = AttrReader::new(self.block_name(), attrs, overrides);
        if let Some(v) = r.int("light_mode")? {
            self.light_mode = Some(v);
        }
        if let Some(v) = r.number("Kw")? {
            self.kw = Some(v);
        }
        if let Some(v) = r.int("n_bands")? {
            self.n_bands = Some(v);
        }
        if let Some(v) = r.number_list("light_extc")? {
            self.light_extc = Some(v);
        }
        if let Some(v) = r.number_list("energy_frac")? {
            self.energy_frac = Some(v);
        }
        if let Some(v) = r.number("Benthic_Imin")? {
            self.benthic_imin = Some(v);
        }
        r.finish()
    }
}

/// The `&bird_model` block: Bird clear-sky solar radiation model inputs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BirdModel {
    /// Atmospheric pressure (hPa).
    pub ap: Option<Number>,
    /// Ozone column (atm-cm).
    pub oz: Option<Number>,
    /// Total precipitable water vapour (atm-cm).
    pub wat_vap: Option<Number>,
    /// Aerosol optical depth at 500 nm.
    pub aod500: Option<Number>,
    /// Aerosol optical depth at 380 nm.
    pub aod380: Option<Number>,
    /// Ground albedo.
    pub albedo: Option<Number>,
}

impl NmlBlock for BirdModel {
    fn block_name(&self) -> &'static str {
        "bird_model"
    }

    fn params(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("AP", plain(&self.ap)),
            ("Oz", plain(&self.oz)),
            ("WatVap", plain(&self.wat_vap)),
            ("AOD500", plain(&self.aod500)),
            ("AOD380", plain(&self.aod380)),
            ("Albedo", plain(&self.albedo)),
        ]
    }

    fn set_attributes(
        &mut self,
        attrs: &AttrMap,
        overrides: Option<&AttrMap>,
    ) -> Result<(), NmlError> {
        let mut r = AttrReader::new(self.block_name(), attrs, overrides);
        if let Some(v) = r.number("AP")? {
            self.ap = Some(v);
        }
        if let Some(v) = r.number("Oz")? {
            self.oz = Some(v);
        }
        if let Some(v) = r.number("WatVap")? {
            self.wat_vap = Some(v);
        }
        if let Some(v) = r.number("AOD500")? {
            self.aod500 = Some(v);
        }
        if let Some(v) = r.number("AOD380")? {
            self.aod380 = Some(v);
        }
        if let Some(v) = r.number("Albedo")? {
            self.albedo = Some(v);
        }
        r.finish()
    }
}
