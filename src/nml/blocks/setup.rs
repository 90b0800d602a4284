//! Simulation setup, mixing, and water quality setup blocks.

use crate::nml::block::{AttrMap, AttrReader, NmlBlock};
use crate::nml::error::NmlError;
use crate::nml::value::{bool_scalar, plain, quoted, Number};

/// The `&glm_setup` block: properties of the vertical series of layers
/// GLM uses to model the water body. Required for every simulation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlmSetup {
    /// Title of the simulation.
    pub sim_name: Option<String>,
    /// Maximum number of layers.
    pub max_layers: Option<i64>,
    /// Minimum layer volume (m^3).
    pub min_layer_vol: Option<Number>,
    /// Minimum thickness of a layer (m).
    pub min_layer_thick: Option<Number>,
    /// Maximum thickness of a layer (m).
    pub max_layer_thick: Option<Number>,
    /// Switch selecting the density equation.
    pub density_model: Option<i64>,
    /// Switch for flow boundary condition temporal interpolation.
    pub non_avg: Option<bool>,
}

impl NmlBlock for GlmSetup {
    fn block_name(&self) -> &'static str {
        "glm_setup"
    }

    fn params(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("sim_name", quoted(&self.sim_name)),
            ("max_layers", plain(&self.max_layers)),
            ("min_layer_vol", plain(&self.min_layer_vol)),
            ("min_layer_thick", plain(&self.min_layer_thick)),
            ("max_layer_thick", plain(&self.max_layer_thick)),
            ("density_model", plain(&self.density_model)),
            ("non_avg", bool_scalar(&self.non_avg)),
        ]
    }

    fn set_attributes(
        &mut self,
        attrs: &AttrMap,
        overrides: Option<&AttrMap>,
    ) -> Result<(), NmlError> {
        let mut r = AttrReader::new(self.block_name(), attrs, overrides);
        if let Some(v) = r.string("sim_name")? {
            self.sim_name = Some(v);
        }
        if let Some(v) = r.int("max_layers")? {
            self.max_layers = Some(v);
        }
        if let Some(v) = r.number("min_layer_vol")? {
            self.min_layer_vol = Some(v);
        }
        if let Some(v) = r.number("min_layer_thick")? {
            self.min_layer_thick = Some(v);
        }
        if let Some(v) = r.number("max_layer_thick")? {
            self.max_layer_thick = Some(v);
        }
        if let Some(v) = r.int("density_model")? {
            self.density_model = Some(v);
        }
        if let Some(v) = r.bool("non_avg")? {
            self.non_avg = Some(v);
        }
        r.finish()
    }
}

/// The `&mixing` block: mixing process coefficients.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mixing {
    /// Switch selecting the surface mixing model.
    pub surface_mixing: Option<i64>,
    /// Mixing efficiency, convective overturn.
    pub coef_mix_conv: Option<Number>,
    /// Mixing efficiency, wind stirring.
    pub coef_wind_stir: Option<Number>,
    /// Mixing efficiency, shear production.
    pub coef_mix_shear: Option<Number>,
    /// Mixing efficiency, unsteady turbulence.
    pub coef_mix_turb: Option<Number>,
    /// Mixing efficiency, Kelvin-Helmholtz billowing.
    pub coef_mix_kh: Option<Number>,
    /// Switch selecting the deep (hypolimnetic) mixing model.
    pub deep_mixing: Option<i64>,
    /// Mixing efficiency, hypolimnetic turbulence.
    pub coef_mix_hyp: Option<Number>,
    /// Background molecular diffusivity in the hypolimnion.
    pub diff: Option<Number>,
}

impl NmlBlock for Mixing {
    fn block_name(&self) -> &'static str {
        "mixing"
    }

    fn params(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("surface_mixing", plain(&self.surface_mixing)),
            ("coef_mix_conv", plain(&self.coef_mix_conv)),
            ("coef_wind_stir", plain(&self.coef_wind_stir)),
            ("coef_mix_shear", plain(&self.coef_mix_shear)),
            ("coef_mix_turb", plain(&self.coef_mix_turb)),
            ("coef_mix_KH", plain(&self.coef_mix_kh)),
            ("deep_mixing", plain(&self.deep_mixing)),
            ("coef_mix_hyp", plain(&self.coef_mix_hyp)),
            ("diff", plain(&self.diff)),
        ]
    }

    fn set_attributes(
        &mut self,
        attrs: &AttrMap,
        overrides: Option<&AttrMap>,
    ) -> Result<(), NmlError> {
        let mut r = AttrReader::new(self.block_name(), attrs, overrides);
        if let Some(v) = r.int("surface_mixing")? {
            self.surface_mixing = Some(v);
        }
        if let Some(v) = r.number("coef_mix_conv")? {
            self.coef_mix_conv = Some(v);
        }
        if let Some(v) = r.number("coef_wind_stir")? {
            self.coef_wind_stir = Some(v);
        }
        if let Some(v) = r.number("coef_mix_shear")? {
            self.coef_mix_shear = Some(v);
        }
        if let Some(v) = r.number("coef_mix_turb")? {
            self.coef_mix_turb = Some(v);
        }
        // GLM spells this one with capitals
        if let Some(v) = r.number("coef_mix_KH")? {
            self.coef_mix_kh = Some(v);
        }
        if let Some(v) = r.int("deep_mixing")? {
            self.deep_mixing = Some(v);
        }
        if let Some(v) = r.number("coef_mix_hyp")? {
            self.coef_mix_hyp = Some(v);
        }
        if let Some(v) = r.number("diff")? {
            self.diff = Some(v);
        }
        r.finish()
    }
}

/// The `&wq_setup` block: coupling to a water quality library (AED2).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WqSetup {
    /// Water quality library to link against, e.g. `"aed2"`.
    pub wq_lib: Option<String>,
    /// Name of the water quality namelist file.
    pub wq_nml_file: Option<String>,
    /// Switch for light feedback from biogeochemistry.
    pub bioshade_feedback: Option<bool>,
    /// Switch disabling settling/mobility.
    pub mobility_off: Option<bool>,
    /// ODE integration scheme selector.
    pub ode_method: Option<i64>,
    /// Number of WQ substeps per hydrodynamic step.
    pub split_factor: Option<Number>,
    /// Switch for clipping state variables to valid ranges.
    pub repair_state: Option<bool>,
}

impl NmlBlock for WqSetup {
    fn block_name(&self) -> &'static str {
        "wq_setup"
    }

    fn params(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("wq_lib", quoted(&self.wq_lib)),
            ("wq_nml_file", quoted(&self.wq_nml_file)),
            ("bioshade_feedback", bool_scalar(&self.bioshade_feedback)),
            ("mobility_off", bool_scalar(&self.mobility_off)),
            ("ode_method", plain(&self.ode_method)),
            ("split_factor", plain(&self.split_factor)),
            ("repair_state", bool_scalar(&self.repair_state)),
        ]
    }

    fn set_attributes(
        &mut self,
        attrs: &AttrMap,
        overrides: Option<&AttrMap>,
    ) -> Result<(), NmlError> {
        let mut r = AttrReader::new(self.block_name(), attrs, overrides);
        if let Some(v) = r.string("wq_lib")? {
            self.wq_lib = Some(v);
        }
        if let Some(v) = r.string("wq_nml_file")? {
            self.wq_nml_file = Some(v);
        }
        if let Some(v) = r.bool("bioshade_feedback")? {
            self.bioshade_feedback = Some(v);
        }
        if let Some(v) = r.bool("mobility_off")? {
            self.mobility_off = Some(v);
        }
        if let Some(v) = r.int("ode_method")? {
            self.ode_method = Some(v);
        }
        if let Some(v) = r.number("split_factor")? {
            self.split_factor = Some(v);
        }
        if let Some(v) = r.bool("repair_state")? {
            self.repair_state = Some(v);
        }
        r.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(value: serde_json::Value) -> AttrMap {
        match value {
            serde_json::Value::Object(m) => m,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_setup_render_full() {
        let mut setup = GlmSetup::default();
        setup
            .set_attributes(
                &attrs(json!({
                    "sim_name": "Lake A",
                    "max_layers": 500,
                    "non_avg": true,
                })),
                None,
            )
            .unwrap();

        let expected = "&glm_setup\n\
                        \x20  sim_name = 'Lake A'\n\
                        \x20  max_layers = 500\n\
                        \x20  non_avg = .true.\n\
                        /";
        assert_eq!(setup.render(), expected);
    }

    #[test]
    fn test_setup_render_empty() {
        let setup = GlmSetup::default();
        assert_eq!(setup.render(), "&glm_setup\n/");
    }

    #[test]
    fn test_setup_render_idempotent() {
        let setup = GlmSetup {
            sim_name: Some("Repeatable".into()),
            density_model: Some(1),
            ..Default::default()
        };
        assert_eq!(setup.render(), setup.render());
    }

    #[test]
    fn test_setup_absent_params_never_rendered() {
        let setup = GlmSetup {
            max_layers: Some(500),
            ..Default::default()
        };
        let text = setup.render();
        for name in [
            "sim_name",
            "min_layer_vol",
            "min_layer_thick",
            "max_layer_thick",
            "density_model",
            "non_avg",
        ] {
            assert!(!text.contains(name), "{name} should be absent:\n{text}");
        }
    }

    #[test]
    fn test_setup_populate_override_wins() {
        let mut setup = GlmSetup::default();
        setup
            .set_attributes(
                &attrs(json!({"sim_name": "Base", "max_layers": 100})),
                Some(&attrs(json!({"max_layers": 500, "density_model": 1}))),
            )
            .unwrap();

        assert_eq!(setup.sim_name.as_deref(), Some("Base"));
        assert_eq!(setup.max_layers, Some(500));
        assert_eq!(setup.density_model, Some(1));
    }

    #[test]
    fn test_setup_populate_idempotent() {
        let payload = attrs(json!({"sim_name": "Twice", "max_layers": 60}));
        let mut once = GlmSetup::default();
        once.set_attributes(&payload, None).unwrap();
        let mut twice = once.clone();
        twice.set_attributes(&payload, None).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_setup_unknown_parameter() {
        let mut setup = GlmSetup::default();
        let err = setup
            .set_attributes(&attrs(json!({"sim_title": "typo"})), None)
            .unwrap_err();
        assert!(matches!(err, NmlError::UnknownParameter { block: "glm_setup", .. }));
    }

    #[test]
    fn test_mixing_kh_spelling() {
        let mut mixing = Mixing::default();
        mixing
            .set_attributes(&attrs(json!({"coef_mix_KH": 0.3})), None)
            .unwrap();
        assert_eq!(mixing.render(), "&mixing\n   coef_mix_KH = 0.3\n/");
    }

    #[test]
    fn test_wq_setup_render() {
        let mut wq = WqSetup::default();
        wq.set_attributes(
            &attrs(json!({
                "wq_lib": "aed2",
                "wq_nml_file": "aed2.nml",
                "ode_method": 1,
                "split_factor": 1,
                "bioshade_feedback": true,
                "repair_state": true,
            })),
            None,
        )
        .unwrap();

        let expected = "&wq_setup\n\
                        \x20  wq_lib = 'aed2'\n\
                        \x20  wq_nml_file = 'aed2.nml'\n\
                        \x20  bioshade_feedback = .true.\n\
                        \x20  ode_method = 1\n\
                        \x20  split_factor = 1\n\
                        \x20  repair_state = .true.\n\
                        /";
        assert_eq!(wq.render(), expected);
    }
}
