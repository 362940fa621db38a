//! Turning raw layer bytes into typed values.

use serde::de::DeserializeOwned;

use crate::core::{Decree, Pool, ResolvedValue, ResourceCategory, ValueKind};
use crate::error::DecodeError;

/// Decodes one layer of a category into its value shape.
pub trait Decoder: Send + Sync {
    fn decode(&self, raw: &[u8], category: &ResourceCategory) -> Result<ResolvedValue, DecodeError>;
}

/// Decoder for `json` and `toml` content, driven by serde.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeDecoder;

impl SerdeDecoder {
    fn parse<T: DeserializeOwned>(text: &str, extension: &str) -> Result<T, DecodeError> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => serde_json::from_str(text).map_err(|err| DecodeError::Malformed {
                format: "json",
                reason: err.to_string(),
            }),
            "toml" => toml::from_str(text).map_err(|err| DecodeError::Malformed {
                format: "toml",
                reason: err.to_string(),
            }),
            other => Err(DecodeError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl Decoder for SerdeDecoder {
    fn decode(&self, raw: &[u8], category: &ResourceCategory) -> Result<ResolvedValue, DecodeError> {
        let text = std::str::from_utf8(raw).map_err(|err| DecodeError::Utf8(err.to_string()))?;
        let value = match category.kind {
            ValueKind::Pool => ResolvedValue::Pool(Self::parse::<Pool>(text, &category.extension)?),
            ValueKind::Decree => {
                ResolvedValue::Decree(Self::parse::<Decree>(text, &category.extension)?)
            }
        };
        Ok(value)
    }
}
