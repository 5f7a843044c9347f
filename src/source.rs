//! Partial record sources with provenance
//!
//! A source is a JSON or TOML file holding some subset of a creator record.
//! Loading keeps the SHA-256 digest of the raw bytes so a report can say
//! exactly which inputs it was built from.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

/// Errors loading a source file
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to read source file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid TOML in {path}: {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Source {path} is not valid UTF-8")]
    Encoding { path: String },

    #[error("Unsupported source file extension: {0} (expected .json or .toml)")]
    UnsupportedExtension(String),
}

/// Where a merged input came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceProvenance {
    pub path: String,

    /// SHA-256 of the raw file bytes, hex encoded
    pub digest: String,
}

/// A decoded source and its provenance
#[derive(Debug, Clone)]
pub struct LoadedSource {
    pub value: Value,
    pub provenance: SourceProvenance,
}

impl LoadedSource {
    /// Load a `.json` or `.toml` source file.
    pub fn load(path: &Path) -> Result<Self, SourceError> {
        let shown = path.display().to_string();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if extension != "json" && extension != "toml" {
            return Err(SourceError::UnsupportedExtension(shown));
        }

        let bytes = fs::read(path).map_err(|source| SourceError::Io {
            path: shown.clone(),
            source,
        })?;
        let digest = sha256_hex(&bytes);

        let value = if extension == "json" {
            serde_json::from_slice(&bytes).map_err(|source| SourceError::Json {
                path: shown.clone(),
                source,
            })?
        } else {
            let text = std::str::from_utf8(&bytes).map_err(|_| SourceError::Encoding {
                path: shown.clone(),
            })?;
            let table: toml::Value = toml::from_str(text).map_err(|source| SourceError::Toml {
                path: shown.clone(),
                source,
            })?;
            toml_to_json(table)
        };

        tracing::debug!(path = %shown, digest = %digest, "loaded source");

        Ok(Self {
            value,
            provenance: SourceProvenance {
                path: shown,
                digest,
            },
        })
    }

    /// In-memory source, e.g. a form draft; the digest covers its JSON encoding.
    pub fn from_value(label: impl Into<String>, value: Value) -> Self {
        let digest = sha256_hex(value.to_string().as_bytes());
        Self {
            value,
            provenance: SourceProvenance {
                path: label.into(),
                digest,
            },
        }
    }
}

/// Load several sources, keeping their order.
pub fn load_all<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<LoadedSource>, SourceError> {
    paths.iter().map(|p| LoadedSource::load(p.as_ref())).collect()
}

pub(crate) fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Convert a TOML value to JSON. Datetimes become strings; non-finite floats become null.
pub fn toml_to_json(toml: toml::Value) -> Value {
    match toml {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(arr) => Value::Array(arr.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_load_json_source() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("source1.json");
        fs::write(&path, r#"{"values": [{"name": "Authenticity"}]}"#).unwrap();

        let source = LoadedSource::load(&path).unwrap();
        assert_eq!(source.value["values"][0]["name"], "Authenticity");
        assert_eq!(source.provenance.digest.len(), 64);
    }

    #[test]
    fn test_load_toml_source() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("source2.toml");
        fs::write(
            &path,
            r#"
[[businesses]]
name = "Merch Store"
annual_revenue = 5000.0
status = "active"

[personal_info]
start_year = 2018
"#,
        )
        .unwrap();

        let source = LoadedSource::load(&path).unwrap();
        assert_eq!(source.value["businesses"][0]["name"], "Merch Store");
        assert_eq!(source.value["businesses"][0]["annual_revenue"], 5000.0);
        assert_eq!(source.value["personal_info"]["start_year"], 2018);
    }

    #[test]
    fn test_load_under_debug_subscriber() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profile.json");
        fs::write(&path, r#"{"personal_info": {"niche": "Tech"}}"#).unwrap();

        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .finish();
        let source = tracing::subscriber::with_default(subscriber, || LoadedSource::load(&path)).unwrap();

        assert_eq!(source.provenance.path, path.display().to_string());
        assert_eq!(source.provenance.digest, sha256_hex(&fs::read(&path).unwrap()));
    }

    #[test]
    fn test_digest_is_deterministic() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");
        fs::write(&a, "{}").unwrap();
        fs::write(&b, "{}").unwrap();

        let a = LoadedSource::load(&a).unwrap();
        let b = LoadedSource::load(&b).unwrap();
        assert_eq!(a.provenance.digest, b.provenance.digest);
    }

    #[test]
    fn test_unsupported_extension() {
        let err = LoadedSource::load(Path::new("creator.yaml")).unwrap_err();
        assert!(matches!(err, SourceError::UnsupportedExtension(_)));
    }

    #[test]
    fn test_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            LoadedSource::load(&path),
            Err(SourceError::Json { .. })
        ));
    }

    #[test]
    fn test_from_value() {
        let source = LoadedSource::from_value("form", json!({"a": 1}));
        assert_eq!(source.provenance.path, "form");
        assert_eq!(source.value, json!({"a": 1}));
    }
}
