//! Inflow and outflow blocks.
//!
//! Inflow parameters are per-stream lists (one element per inflow);
//! outflow parameters are per-outlet lists. GLM matches list positions
//! to streams/outlets by index.

use crate::nml::block::{AttrMap, AttrReader, NmlBlock};
use crate::nml::error::NmlError;
use crate::nml::value::{bool_list, bool_scalar, number_list, plain, quoted, string_list, Number};

/// The `&inflows` block: rivers and runoff entering the water body.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Inflows {
    /// Number of inflow streams.
    pub num_inflows: Option<i64>,
    /// Name of each stream.
    pub names_of_strms: Option<Vec<String>>,
    /// Whether each stream enters submerged.
    pub subm_flag: Option<Vec<bool>>,
    /// Stream half-angle of each stream (degrees).
    pub strm_hf_angle: Option<Vec<Number>>,
    /// Streambed slope of each stream (degrees).
    pub strmbd_slope: Option<Vec<Number>>,
    /// Streambed drag coefficient of each stream.
    pub strmbd_drag: Option<Vec<Number>>,
    /// Entrainment coefficient of each stream.
    pub coef_inf_entrain: Option<Vec<Number>>,
    /// Scaling factor applied to each stream's flow.
    pub inflow_factor: Option<Vec<Number>>,
    /// Forcing CSV path of each stream.
    pub inflow_fl: Option<Vec<String>>,
    /// Number of variables in the inflow forcing files.
    pub inflow_varnum: Option<i64>,
    /// Variable names in the inflow forcing files.
    pub inflow_vars: Option<Vec<String>>,
    /// Time format string of the forcing data.
    pub time_fmt: Option<String>,
}

impl NmlBlock for Inflows {
    fn block_name(&self) -> &'static str {
        "inflows"
    }

    fn params(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("num_inflows", plain(&self.num_inflows)),
            ("names_of_strms", string_list(&self.names_of_strms, true)),
            ("subm_flag", bool_list(&self.subm_flag)),
            ("strm_hf_angle", number_list(&self.strm_hf_angle, false)),
            ("strmbd_slope", number_list(&self.strmbd_slope, false)),
            ("strmbd_drag", number_list(&self.strmbd_drag, false)),
            ("coef_inf_entrain", number_list(&self.coef_inf_entrain, false)),
            ("inflow_factor", number_list(&self.inflow_factor, false)),
            ("inflow_fl", string_list(&self.inflow_fl, true)),
            ("inflow_varnum", plain(&self.inflow_varnum)),
            ("inflow_vars", string_list(&self.inflow_vars, true)),
            ("time_fmt", quoted(&self.time_fmt)),
        ]
    }

    fn set_attributes(
        &mut self,
        attrs: &AttrMap,
        overrides: Option<&AttrMap>,
    ) -> Result<(), NmlError> {
        let mut r = AttrReader::new(self.block_name(), attrs, overrides);
        if let Some(v) = r.int("num_inflows")? {
            self.num_inflows = Some(v);
        }
        if let Some(v) = r.string_list("names_of_strms")? {
            self.names_of_strms = Some(v);
        }
        if let Some(v) = r.bool_list("subm_flag")? {
            self.subm_flag = Some(v);
        }
        if let Some(v) = r.number_list("strm_hf_angle")? {
            self.strm_hf_angle = Some(v);
        }
        if let Some(v) = r.number_list("strmbd_slope")? {
            self.strmbd_slope = Some(v);
        }
        if let Some(v) = r.number_list("strmbd_drag")? {
            self.strmbd_drag = Some(v);
        }
        if let Some(v) = r.number_list("coef_inf_entrain")? {
            self.coef_inf_entrain = Some(v);
        }
        if let Some(v) = r.number_list("inflow_factor")? {
            self.inflow_factor = Some(v);
        }
        if let Some(v) = r.string_list("inflow_fl")? {
            self.inflow_fl = Some(v);
        }
        if let Some(v) = r.int("inflow_varnum")? {
            self.inflow_varnum = Some(v);
        }
        if let Some(v) = r.string_list("inflow_vars")? {
            self.inflow_vars = Some(v);
        }
        if let Some(v) = r.string("time_fmt")? {
            self.time_fmt = Some(v);
        }
        r.finish()
    }
}

/// The `&outflows` block: withdrawals, outlets, and seepage.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Outflows {
    /// Number of outlets.
    pub num_outlet: Option<i64>,
    /// Forcing CSV path of the outflow data.
    pub outflow_fl: Option<String>,
    /// Time format string of the forcing data.
    pub time_fmt: Option<String>,
    /// Scaling factor applied to each outlet's flow.
    pub outflow_factor: Option<Vec<Number>>,
    /// Withdrawal layer thickness limit of each outlet (m).
    pub outflow_thick_limit: Option<Vec<Number>>,
    /// Whether each outlet draws from a single layer.
    pub single_layer_draw: Option<Vec<bool>>,
    /// Whether each outlet is a floating offtake.
    pub flt_off_sw: Option<Vec<bool>>,
    /// Outlet type selector.
    pub outlet_type: Option<i64>,
    /// Elevation of each outlet (m above datum).
    pub outl_elvs: Option<Vec<Number>>,
    /// Basin length at each outlet elevation (m).
    pub bsn_len_outl: Option<Vec<Number>>,
    /// Basin width at each outlet elevation (m).
    pub bsn_wid_outl: Option<Vec<Number>>,
    /// Switch enabling seepage.
    pub seepage: Option<bool>,
    /// Seepage rate (m/day).
    pub seepage_rate: Option<Number>,
    /// Width of the weir crest (m).
    pub crest_width: Option<Number>,
    /// Weir crest discharge factor.
    pub crest_factor: Option<Number>,
}

impl NmlBlock for Outflows {
    fn block_name(&self) -> &'static str {
        "outflows"
    }

    fn params(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("num_outlet", plain(&self.num_outlet)),
            ("outflow_fl", quoted(&self.outflow_fl)),
            ("time_fmt", quoted(&self.time_fmt)),
            ("outflow_factor", number_list(&self.outflow_factor, false)),
            ("outflow_thick_limit", number_list(&self.outflow_thick_limit, false)),
            ("single_layer_draw", bool_list(&self.single_layer_draw)),
            ("flt_off_sw", bool_list(&self.flt_off_sw)),
            ("outlet_type", plain(&self.outlet_type)),
            ("outl_elvs", number_list(&self.outl_elvs, false)),
            ("bsn_len_outl", number_list(&self.bsn_len_outl, false)),
            ("bsn_wid_outl", number_list(&self.bsn_wid_outl, false)),
            ("seepage", bool_scalar(&self.seepage)),
            ("seepage_rate", plain(&self.seepage_rate)),
            ("crest_width", plain(&self.crest_width)),
            ("crest_factor", plain(&self.crest_factor)),
        ]
    }

    fn set_attributes(
        &mut self,
        attrs: &AttrMap,
        overrides: Option<&AttrMap>,
    ) -> Result<(), NmlError> {
        let mut r = AttrReader::new(self.block_name(), attrs, overrides);
        if let Some(v) = r.int("num_outlet")? {
            self.num_outlet = Some(v);
        }
        if let Some(v) = r.string("outflow_fl")? {
            self.outflow_fl = Some(v);
        }
        if let Some(v) = r.string("time_fmt")? {
            self.time_fmt = Some(v);
        }
        if let Some(v) = r.number_list("outflow_factor")? {
            self.outflow_factor = Some(v);
        }
        if let Some(v) = r.number_list("outflow_thick_limit")? {
            self.outflow_thick_limit = Some(v);
        }
        if let Some(v) = r.bool_list("single_layer_draw")? {
            self.single_layer_draw = Some(v);
        }
        if let Some(v) = r.bool_list("flt_off_sw")? {
            self.flt_off_sw = Some(v);
        }
        if let Some(v) = r.int("outlet_type")? {
            self.outlet_type = Some(v);
        }
        if let Some(v) = r.number_list("outl_elvs")? {
            self.outl_elvs = Some(v);
        }
        if let Some(v) = r.number_list("bsn_len_outl")? {
            self.bsn_len_outl = Some(v);
        }
        if let Some(v) = r.number_list("bsn_wid_outl")? {
            self.bsn_wid_outl = Some(v);
        }
        if let Some(v) = r.bool("seepage")? {
            self.seepage = Some(v);
        }
        if let Some(v) = r.number("seepage_rate")? {
            self.seepage_rate = Some(v);
        }
        if let Some(v) = r.number("crest_width")? {
            self.crest_width = Some(v);
        }
        if let Some(v) = r.number("crest_factor")? {
            self.crest_factor = Some(v);
        }
        r.finish()
    }
}
