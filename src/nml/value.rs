//! Value formatting for NML parameters.
//!
//! GLM reads Fortran namelist files, which have their own spelling rules:
//! booleans are `.true.`/`.false.`, strings are single-quoted, and lists
//! are bare comma-separated sequences with no brackets. The helpers here
//! produce those spellings; `None` inputs pass through as `None` so that
//! absent parameters are omitted from the rendered block entirely.

use std::fmt;

/// A numeric parameter value that remembers whether it was given as an
/// integer or a float.
///
/// GLM's namelist parser accepts both spellings, but a round-trip through
/// this crate must not turn `500` into `500.0` or `-10.0` into `-10`, so
/// the distinction is kept rather than widening everything to `f64`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    /// Integer-spelled value, e.g. `500`.
    Int(i64),
    /// Float-spelled value, e.g. `-10.0` or `0.025`.
    Float(f64),
}

impl Number {
    /// The value as `f64` regardless of spelling.
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(i) => *i as f64,
            Number::Float(v) => *v,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(v) => {
                // An integral float must still read as a float in the
                // output (`3.0`, not `3`).
                if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e16 {
                    write!(f, "{v:.1}")
                } else {
                    write!(f, "{v}")
                }
            }
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(value as i64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

/// Fortran spelling of a boolean.
///
/// # Example
///
/// ```
/// use glm_prep::nml::value::fortran_bool;
///
/// assert_eq!(fortran_bool(true), ".true.");
/// assert_eq!(fortran_bool(false), ".false.");
/// ```
pub fn fortran_bool(value: bool) -> &'static str {
    if value { ".true." } else { ".false." }
}

/// Fortran spelling of an optional boolean, propagating absence.
pub fn bool_token(value: Option<bool>) -> Option<&'static str> {
    value.map(fortran_bool)
}

/// Fortran spellings of a list of booleans.
pub fn bool_tokens(values: &[bool]) -> Vec<&'static str> {
    values.iter().map(|&v| fortran_bool(v)).collect()
}

/// Join a list of values into an NML comma-separated string.
///
/// With `quoted` set, each element is wrapped in single quotes (string
/// name lists); without it, elements are formatted bare (numeric lists).
/// `None` and an empty slice are both treated as "parameter absent" and
/// yield `None`.
///
/// # Example
///
/// ```
/// use glm_prep::nml::value::comma_sep_list;
///
/// let depths = [1.5, 20.0, 40.0];
/// assert_eq!(comma_sep_list(Some(&depths[..]), false).as_deref(), Some("1.5, 20, 40"));
///
/// let names = ["temp".to_string(), "salt".to_string()];
/// assert_eq!(comma_sep_list(Some(&names[..]), true).as_deref(), Some("'temp', 'salt'"));
///
/// assert_eq!(comma_sep_list::<f64>(None, false), None);
/// ```
pub fn comma_sep_list<T: fmt::Display>(values: Option<&[T]>, quoted: bool) -> Option<String> {
    let values = values?;
    if values.is_empty() {
        return None;
    }
    let joined = if quoted {
        values
            .iter()
            .map(|v| format!("'{v}'"))
            .collect::<Vec<_>>()
            .join(", ")
    } else {
        values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    Some(joined)
}

/// Format an optional string parameter with single quotes.
pub(crate) fn quoted(value: &Option<String>) -> Option<String> {
    value.as_ref().map(|s| format!("'{s}'"))
}

/// Format an optional scalar parameter with its `Display` spelling.
pub(crate) fn plain<T: fmt::Display>(value: &Option<T>) -> Option<String> {
    value.as_ref().map(|v| v.to_string())
}

/// Format an optional numeric list parameter.
pub(crate) fn number_list(value: &Option<Vec<Number>>, quoted: bool) -> Option<String> {
    comma_sep_list(value.as_deref(), quoted)
}

/// Format an optional string list parameter.
pub(crate) fn string_list(value: &Option<Vec<String>>, quoted: bool) -> Option<String> {
    comma_sep_list(value.as_deref(), quoted)
}

/// Format an optional boolean list parameter as comma-separated tokens.
pub(crate) fn bool_list(value: &Option<Vec<bool>>) -> Option<String> {
    let tokens = bool_tokens(value.as_deref()?);
    comma_sep_list(Some(&tokens), false)
}

/// Format an optional scalar boolean parameter.
pub(crate) fn bool_scalar(value: &Option<bool>) -> Option<String> {
    bool_token(*value).map(str::to_owned)
}
