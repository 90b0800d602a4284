//! Time window and output option blocks.

use crate::nml::block::{AttrMap, AttrReader, NmlBlock};
use crate::nml::error::NmlError;
use crate::nml::value::{bool_scalar, number_list, plain, quoted, string_list, Number};

/// The `&time` block: simulation time window and step. Required for
/// every simulation.
///
/// `start` and `stop` are passed through verbatim; GLM expects
/// `YYYY-MM-DD hh:mm:ss`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Time {
    /// Time configuration switch (2 = start/stop, 3 = start/num_days).
    pub timefmt: Option<i64>,
    /// Start time.
    pub start: Option<String>,
    /// Stop time.
    pub stop: Option<String>,
    /// Time step (seconds).
    pub dt: Option<Number>,
    /// Number of simulation days, used with `timefmt = 3`.
    pub num_days: Option<i64>,
    /// UTC offset of the supplied times (hours).
    pub timezone: Option<Number>,
}

impl NmlBlock for Time {
    fn block_name(&self) -> &'static str {
        "time"
    }

    fn params(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("timefmt", plain(&self.timefmt)),
            ("start", quoted(&self.start)),
            ("stop", quoted(&self.stop)),
            ("dt", plain(&self.dt)),
            ("num_days", plain(&self.num_days)),
            ("timezone", plain(&self.timezone)),
        ]
    }

    fn set_attributes(
        &mut self,
        attrs: &AttrMap,
        overrides: Option<&AttrMap>,
    ) -> Result<(), NmlError> {
        let mut r = AttrReader::new(self.block_name(), attrs, overrides);
        if let Some(v) = r.int("timefmt")? {
            self.timefmt = Some(v);
        }
        if let Some(v) = r.string("start")? {
            self.start = Some(v);
        }
        if let Some(v) = r.string("stop")? {
            self.stop = Some(v);
        }
        if let Some(v) = r.number("dt")? {
            self.dt = Some(v);
        }
        if let Some(v) = r.int("num_days")? {
            self.num_days = Some(v);
        }
        if let Some(v) = r.number("timezone")? {
            self.timezone = Some(v);
        }
        r.finish()
    }
}

/// The `&output` block: which result files GLM writes and how often.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Output {
    /// Directory to write output files to.
    pub out_dir: Option<String>,
    /// Name of the main NetCDF output file, without extension.
    pub out_fn: Option<String>,
    /// Output frequency in time steps.
    pub nsave: Option<i64>,
    /// Filename of the lake summary CSV.
    pub csv_lake_fname: Option<String>,
    /// Number of depths at which point CSVs are written.
    pub csv_point_nlevs: Option<Number>,
    /// Filename prefix of the point CSVs.
    pub csv_point_fname: Option<String>,
    /// Depths measured from the bottom rather than the surface.
    pub csv_point_frombot: Option<Vec<Number>>,
    /// Depths at which point CSVs are written (m).
    pub csv_point_at: Option<Vec<Number>>,
    /// Number of variables written to the point CSVs.
    pub csv_point_nvars: Option<i64>,
    /// Variables written to the point CSVs.
    pub csv_point_vars: Option<Vec<String>>,
    /// Write one combined outlet CSV rather than one per outlet.
    pub csv_outlet_allinone: Option<bool>,
    /// Filename prefix of the outlet CSVs.
    pub csv_outlet_fname: Option<String>,
    /// Number of variables written to the outlet CSVs.
    pub csv_outlet_nvars: Option<i64>,
    /// Variables written to the outlet CSVs.
    pub csv_outlet_vars: Option<Vec<String>>,
    /// Filename of the overflow CSV.
    pub csv_ovrflw_fname: Option<String>,
}

impl NmlBlock for Output {
    fn block_name(&self) -> &'static str {
        "output"
    }

    fn params(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("out_dir", quoted(&self.out_dir)),
            ("out_fn", quoted(&self.out_fn)),
            ("nsave", plain(&self.nsave)),
            ("csv_lake_fname", quoted(&self.csv_lake_fname)),
            ("csv_point_nlevs", plain(&self.csv_point_nlevs)),
            ("csv_point_fname", quoted(&self.csv_point_fname)),
            ("csv_point_frombot", number_list(&self.csv_point_frombot, false)),
            ("csv_point_at", number_list(&self.csv_point_at, false)),
            ("csv_point_nvars", plain(&self.csv_point_nvars)),
            ("csv_point_vars", string_list(&self.csv_point_vars, true)),
            ("csv_outlet_allinone", bool_scalar(&self.csv_outlet_allinone)),
            ("csv_outlet_fname", quoted(&self.csv_outlet_fname)),
            ("csv_outlet_nvars", plain(&self.csv_outlet_nvars)),
            ("csv_outlet_vars", string_list(&self.csv_outlet_vars, true)),
            ("csv_ovrflw_fname", quoted(&self.csv_ovrflw_fname)),
        ]
    }

    fn set_attributes(
        &mut self,
        attrs: &AttrMap,
        overrides: Option<&AttrMap>,
    ) -> Result<(), NmlError> {
        let mut r = AttrReader::new(self.block_name(), attrs, overrides);
        if let Some(v) = r.string("out_dir")? {
            self.out_dir = Some(v);
        }
        if let Some(v) = r.string("out_fn")? {
            self.out_fn = Some(v);
        }
        if let Some(v) = r.int("nsave")? {
            self.nsave = Some(v);
        }
        if let Some(v) = r.string("csv_lake_fname")? {
            self.csv_lake_fname = Some(v);
        }
        if let Some(v) = r.number("csv_point_nlevs")? {
            self.csv_point_nlevs = Some(v);
        }
        if let Some(v) = r.string("csv_point_fname")? {
            self.csv_point_fname = Some(v);
        }
        if let Some(v) = r.number_list("csv_point_frombot")? {
            self.csv_point_frombot = Some(v);
        }
        if let Some(v) = r.number_list("csv_point_at")? {
            self.csv_point_at = Some(v);
        }
        if let Some(v) = r.int("csv_point_nvars")? {
            self.csv_point_nvars = Some(v);
        }
        if let Some(v) = r.string_list("csv_point_vars")? {
            self.csv_point_vars = Some(v);
        }
        if let Some(v) = r.bool("csv_outlet_allinone")? {
            self.csv_outlet_allinone = Some(v);
        }
        if let Some(v) = r.string("csv_outlet_fname")? {
            self.csv_outlet_fname = Some(v);
        }
        if let Some(v) = r.int("csv_outlet_nvars")? {
            self.csv_outlet_nvars = Some(v);
        }
        if let Some(v) = r.string_list("csv_outlet_vars")? {
            self.csv_outlet_vars = Some(v);
        }
        if let Some(v) = r.string("csv_ovrflw_fname")? {
            self.csv_ovrflw_fname = Some(v);
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
    fn test_time_render() {
        let mut time = Time::default();
        time.set_attributes(
            &attrs(json!({
                "timefmt": 3,
                "start": "1997-01-01 00:00:00",
                "stop": "1999-01-01 00:00:00",
                "dt": 3600.0,
                "num_days": 730,
                "timezone": 7.0,
            })),
            None,
        )
        .unwrap();

        let expected = "&time\n\
                        \x20  timefmt = 3\n\
                        \x20  start = '1997-01-01 00:00:00'\n\
                        \x20  stop = '1999-01-01 00:00:00'\n\
                        \x20  dt = 3600.0\n\
                        \x20  num_days = 730\n\
                        \x20  timezone = 7.0\n\
                        /";
        assert_eq!(time.render(), expected);
    }

    #[test]
    fn test_time_override_layering() {
        // Base window, overridden stop date; override-only key added
        let mut time = Time::default();
        time.set_attributes(
            &attrs(json!({"start": "1997-01-01 00:00:00", "stop": "1998-01-01 00:00:00"})),
            Some(&attrs(json!({"stop": "1999-01-01 00:00:00", "timefmt": 2}))),
        )
        .unwrap();

        assert_eq!(time.start.as_deref(), Some("1997-01-01 00:00:00"));
        assert_eq!(time.stop.as_deref(), Some("1999-01-01 00:00:00"));
        assert_eq!(time.timefmt, Some(2));
    }

    #[test]
    fn test_output_quoted_var_lists() {
        let mut output = Output::default();
        output
            .set_attributes(
                &attrs(json!({
                    "nsave": 6,
                    "csv_point_vars": ["temp", "salt", "OXY_oxy"],
                    "csv_point_at": [2.0, 10.0],
                })),
                None,
            )
            .unwrap();

        let text = output.render();
        assert!(text.contains("   csv_point_vars = 'temp', 'salt', 'OXY_oxy'\n"), "{text}");
        assert!(text.contains("   csv_point_at = 2.0, 10.0\n"), "{text}");
    }

    #[test]
    fn test_output_allinone_token() {
        let output = Output {
            csv_outlet_allinone: Some(false),
            ..Default::default()
        };
        assert_eq!(output.render(), "&output\n   csv_outlet_allinone = .false.\n/");
    }
}
