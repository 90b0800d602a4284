//! JSON front-end for GLM configuration data.
//!
//! Web applications and catalog services commonly hold GLM parameters as
//! JSON, one object per NML block. This module reads such data and feeds
//! it into the typed blocks of [`crate::nml`].
//!
//! # File Format
//!
//! ```text
//! {
//!     "&glm_setup": {
//!         "sim_name": "Sparkling Lake",
//!         "max_layers": 500
//!     },
//!     "&morphometry": {
//!         "lake_name": "Sparkling",
//!         "H": [301.7, 303.7, 305.7],
//!         "A": [0, 125000, 250000]
//!     }
//! }
//! ```
//!
//! Top-level keys are block names; the `&` prefix is accepted and
//! optional. Each value is an object of parameter name to value.
//!
//! # Example
//!
//! ```ignore
//! use glm_prep::json::JsonConfig;
//!
//! let config = JsonConfig::from_file("sparkling_lake.json")?;
//! let doc = config.to_document()?;
//! doc.write_nml("sparkling.nml")?;
//! ```

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::nml::{AttrMap, Block, BlockKind, NmlDocument, NmlError};

/// JSON type name for error messages.
fn value_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A parsed JSON configuration of NML blocks.
#[derive(Clone, Debug, PartialEq)]
pub struct JsonConfig {
    blocks: serde_json::Map<String, Value>,
}

impl JsonConfig {
    /// Parse a JSON config file.
    ///
    /// # Errors
    ///
    /// - [`NmlError::Io`] if the file cannot be read
    /// - [`NmlError::Json`] if the content is not valid JSON
    /// - [`NmlError::NotAnObject`] if the top level is not an object
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, NmlError> {
        let content = fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse a JSON config from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, NmlError> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(value)
    }

    /// Build a config from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, NmlError> {
        match value {
            Value::Object(blocks) => Ok(Self { blocks }),
            other => Err(NmlError::NotAnObject(value_type(&other))),
        }
    }

    /// Names of the blocks present in the config, as spelled in the
    /// input (possibly `&`-prefixed), in input order.
    pub fn block_names(&self) -> Vec<&str> {
        self.blocks.keys().map(String::as_str).collect()
    }

    /// The attribute mapping of one block, looked up with or without
    /// the `&` prefix.
    pub fn block_attrs(&self, name: &str) -> Option<&AttrMap> {
        let bare = name.strip_prefix('&').unwrap_or(name);
        let entry = self
            .blocks
            .get(name)
            .or_else(|| self.blocks.get(bare))
            .or_else(|| self.blocks.get(&format!("&{bare}")))?;
        entry.as_object()
    }

    /// Assemble a full [`NmlDocument`] from every block in the config.
    ///
    /// # Errors
    ///
    /// - [`NmlError::UnknownBlock`] for a top-level key naming no GLM block
    /// - [`NmlError::InvalidParameterType`] / [`NmlError::UnknownParameter`]
    ///   from block population
    /// - [`NmlError::MissingRequiredBlock`] if a required block is absent
    pub fn to_document(&self) -> Result<NmlDocument, NmlError> {
        self.to_document_with(|_| None)
    }

    /// Like [`to_document`](Self::to_document), with a per-block override
    /// mapping layered over the config's values (override entries win).
    pub fn to_document_with<'a, F>(&self, overrides: F) -> Result<NmlDocument, NmlError>
    where
        F: Fn(BlockKind) -> Option<&'a AttrMap>,
    {
        let mut builder = NmlDocument::builder();
        for (name, value) in &self.blocks {
            let kind = BlockKind::from_name(name)
                .ok_or_else(|| NmlError::UnknownBlock(name.clone()))?;
            let attrs = value.as_object().ok_or(NmlError::InvalidParameterType {
                block: kind.name(),
                param: name.clone(),
                expected: "object of parameters",
                found: value_type(value),
            })?;
            builder = builder.block(Block::from_attrs(kind, attrs, overrides(kind))?);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nml::Number;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SPARKLING: &str = r#"{
        "&glm_setup": {"sim_name": "Sparkling Lake", "max_layers": 500},
        "&morphometry": {"lake_name": "Sparkling", "H": [301.7, 303.7], "A": [0, 125000]},
        "&time": {"timefmt": 3, "start": "1980-04-15 00:00:00"},
        "&init_profiles": {"lake_depth": 18.3}
    }"#;

    #[test]
    fn test_block_names_and_attrs() {
        let config = JsonConfig::from_str(SPARKLING).unwrap();
        assert_eq!(
            config.block_names(),
            ["&glm_setup", "&morphometry", "&time", "&init_profiles"]
        );
        // Lookup works with and without the & prefix
        let attrs = config.block_attrs("glm_setup").unwrap();
        assert_eq!(attrs.get("max_layers"), Some(&json!(500)));
        assert!(config.block_attrs("&glm_setup").is_some());
        assert!(config.block_attrs("sediment").is_none());
    }

    #[test]
    fn test_to_document_text() {
        let doc = JsonConfig::from_str(SPARKLING).unwrap().to_document().unwrap();
        let expected = "&glm_setup\n\
                        \x20  sim_name = 'Sparkling Lake'\n\
                        \x20  max_layers = 500\n\
                        /\n\
                        &morphometry\n\
                        \x20  lake_name = 'Sparkling'\n\
                        \x20  H = 301.7, 303.7\n\
                        \x20  A = 0, 125000\n\
                        /\n\
                        &time\n\
                        \x20  timefmt = 3\n\
                        \x20  start = '1980-04-15 00:00:00'\n\
                        /\n\
                        &init_profiles\n\
                        \x20  lake_depth = 18.3\n\
                        /\n";
        assert_eq!(doc.serialize(), expected);
    }

    #[test]
    fn test_to_document_with_overrides() {
        let config = JsonConfig::from_str(SPARKLING).unwrap();
        let setup_overrides = match json!({"max_layers": 250}) {
            Value::Object(m) => m,
            _ => unreachable!(),
        };

        let doc = config
            .to_document_with(|kind| (kind == BlockKind::Setup).then_some(&setup_overrides))
            .unwrap();

        match doc.block(BlockKind::Setup) {
            Some(Block::Setup(setup)) => {
                assert_eq!(setup.max_layers, Some(250));
                assert_eq!(setup.sim_name.as_deref(), Some("Sparkling Lake"));
            }
            other => panic!("unexpected slot: {other:?}"),
        }
    }

    #[test]
    fn test_unprefixed_block_names_accepted() {
        let config = JsonConfig::from_str(
            r#"{
                "glm_setup": {},
                "morphometry": {"H": [0.0]},
                "time": {},
                "init_profiles": {}
            }"#,
        )
        .unwrap();
        let doc = config.to_document().unwrap();
        match doc.block(BlockKind::Morphometry) {
            Some(Block::Morphometry(m)) => {
                assert_eq!(m.h, Some(vec![Number::Float(0.0)]));
            }
            other => panic!("unexpected slot: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_block_rejected() {
        let config = JsonConfig::from_str(r#"{"&glm_stup": {}}"#).unwrap();
        let err = config.to_document().unwrap_err();
        match err {
            NmlError::UnknownBlock(name) => assert_eq!(name, "&glm_stup"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_required_block_from_json() {
        let config = JsonConfig::from_str(r#"{"&glm_setup": {}}"#).unwrap();
        assert!(matches!(
            config.to_document(),
            Err(NmlError::MissingRequiredBlock { block: "morphometry" })
        ));
    }

    #[test]
    fn test_top_level_not_object() {
        assert!(matches!(
            JsonConfig::from_str("[1, 2, 3]"),
            Err(NmlError::NotAnObject("an array"))
        ));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            JsonConfig::from_str("{not json"),
            Err(NmlError::Json(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SPARKLING.as_bytes()).unwrap();

        let config = JsonConfig::from_file(file.path()).unwrap();
        assert_eq!(config.block_names().len(), 4);
    }
}
