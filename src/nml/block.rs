//! Block rendering and population machinery.
//!
//! Every NML block struct implements [`NmlBlock`]: it declares its block
//! name and its parameters in the fixed order GLM documents them, and gets
//! `render()` for free. Rendering owns the `&name` / `/` framing; the
//! document layer only concatenates rendered blocks, so the framing appears
//! exactly once per block.
//!
//! Population from a key-value mapping goes through [`AttrReader`], which
//! layers an optional override mapping over the base mapping, converts each
//! recognized key to the parameter's declared type, and rejects leftovers.

use serde_json::Value;

use crate::nml::error::NmlError;
use crate::nml::value::Number;

/// A key-value mapping of parameter names to JSON values, as produced by
/// the JSON config front-end for a single block.
pub type AttrMap = serde_json::Map<String, Value>;

/// One NML configuration block.
pub trait NmlBlock {
    /// Block name without the `&` prefix, e.g. `"glm_setup"`.
    fn block_name(&self) -> &'static str;

    /// All recognized parameters in declared order, paired with their
    /// formatted values. Absent parameters yield `None` and are skipped
    /// by `render()`.
    fn params(&self) -> Vec<(&'static str, Option<String>)>;

    /// Populate fields from a mapping, with entries of `overrides` taking
    /// precedence over `attrs` on key collision.
    ///
    /// # Errors
    ///
    /// - [`NmlError::InvalidParameterType`] if a value does not match the
    ///   parameter's declared type
    /// - [`NmlError::UnknownParameter`] if a key matches no recognized
    ///   parameter of this block
    fn set_attributes(&mut self, attrs: &AttrMap, overrides: Option<&AttrMap>)
        -> Result<(), NmlError>;

    /// Render the block as NML text.
    ///
    /// Emits `&<name>`, one three-space-indented `param = value` line per
    /// non-absent parameter in declared order, and the closing `/`. Pure
    /// and repeatable; never fails for absent parameters.
    fn render(&self) -> String {
        let mut out = String::new();
        out.push('&');
        out.push_str(self.block_name());
        for (name, value) in self.params() {
            if let Some(value) = value {
                out.push_str("\n   ");
                out.push_str(name);
                out.push_str(" = ");
                out.push_str(&value);
            }
        }
        out.push_str("\n/");
        out
    }
}

/// Layer `overrides` over `base`: override entries win on key collision,
/// keys present only in the override are added.
pub(crate) fn merge_attrs(base: &AttrMap, overrides: Option<&AttrMap>) -> AttrMap {
    let mut merged = base.clone();
    if let Some(overrides) = overrides {
        for (key, value) in overrides {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

/// JSON type name for error messages.
fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Typed field-by-field reader over a merged attribute mapping.
///
/// Each accessor removes its key from the mapping; `finish()` then rejects
/// whatever is left as unknown. A JSON `null` value is treated the same as
/// a missing key (parameter stays absent).
pub(crate) struct AttrReader {
    block: &'static str,
    attrs: AttrMap,
}

impl AttrReader {
    pub(crate) fn new(block: &'static str, attrs: &AttrMap, overrides: Option<&AttrMap>) -> Self {
        Self {
            block,
            attrs: merge_attrs(attrs, overrides),
        }
    }

    fn take(&mut self, key: &str) -> Option<Value> {
        match self.attrs.remove(key) {
            Some(Value::Null) | None => None,
            Some(value) => Some(value),
        }
    }

    fn type_error(&self, param: &str, expected: &'static str, found: &Value) -> NmlError {
        NmlError::InvalidParameterType {
            block: self.block,
            param: param.to_owned(),
            expected,
            found: json_type(found),
        }
    }

    pub(crate) fn string(&mut self, key: &str) -> Result<Option<String>, NmlError> {
        match self.take(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(self.type_error(key, "string", &other)),
        }
    }

    pub(crate) fn int(&mut self, key: &str) -> Result<Option<i64>, NmlError> {
        match self.take(key) {
            None => Ok(None),
            Some(Value::Number(n)) if n.is_i64() => Ok(n.as_i64()),
            Some(other) => Err(self.type_error(key, "integer", &other)),
        }
    }

    pub(crate) fn number(&mut self, key: &str) -> Result<Option<Number>, NmlError> {
        match self.take(key) {
            None => Ok(None),
            Some(Value::Number(n)) => Ok(Some(Self::to_number(&n))),
            Some(other) => Err(self.type_error(key, "number", &other)),
        }
    }

    pub(crate) fn bool(&mut self, key: &str) -> Result<Option<bool>, NmlError> {
        match self.take(key) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(b)),
            Some(other) => Err(self.type_error(key, "boolean", &other)),
        }
    }

    pub(crate) fn string_list(&mut self, key: &str) -> Result<Option<Vec<String>>, NmlError> {
        self.list(key, "list of string", |value| match value {
            Value::String(s) => Some(s.clone()),
            _ => None,
        })
    }

    pub(crate) fn number_list(&mut self, key: &str) -> Result<Option<Vec<Number>>, NmlError> {
        self.list(key, "list of number", |value| match value {
            Value::Number(n) => Some(Self::to_number(n)),
            _ => None,
        })
    }

    pub(crate) fn bool_list(&mut self, key: &str) -> Result<Option<Vec<bool>>, NmlError> {
        self.list(key, "list of boolean", |value| value.as_bool())
    }

    fn list<T>(
        &mut self,
        key: &str,
        expected: &'static str,
        convert: impl Fn(&Value) -> Option<T>,
    ) -> Result<Option<Vec<T>>, NmlError> {
        match self.take(key) {
            None => Ok(None),
            Some(Value::Array(items)) => {
                let mut out = Vec::with_capacity(items.len());
                for item in &items {
                    match convert(item) {
                        Some(v) => out.push(v),
                        None => return Err(self.type_error(key, expected, item)),
                    }
                }
                Ok(Some(out))
            }
            Some(other) => Err(self.type_error(key, expected, &other)),
        }
    }

    fn to_number(n: &serde_json::Number) -> Number {
        if let Some(i) = n.as_i64() {
            Number::Int(i)
        } else {
            // NaN/inf cannot appear in JSON, as_f64 is total here
            Number::Float(n.as_f64().unwrap_or(0.0))
        }
    }

    /// Reject any keys not consumed by the block's field lookups.
    pub(crate) fn finish(self) -> Result<(), NmlError> {
        if let Some(key) = self.attrs.keys().next() {
            return Err(NmlError::UnknownParameter {
                block: self.block,
                param: key.clone(),
            });
        }
        Ok(())
    }
}
