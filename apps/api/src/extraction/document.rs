//! Decoding of the inline `fileContent` payload into raw bytes.
//!
//! Accepted shapes:
//! - base64 string, optionally as a `data:<mime>;base64,` URL
//! - JSON array of byte values
//! - JSON object keyed by index, as produced by `JSON.stringify(new Uint8Array(..))`

use std::collections::BTreeMap;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;

use crate::errors::PipelineError;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DocumentContent {
    Encoded(String),
    Bytes(Vec<i64>),
    Indexed(BTreeMap<String, i64>),
}

impl Default for DocumentContent {
    fn default() -> Self {
        DocumentContent::Encoded(String::new())
    }
}

impl DocumentContent {
    pub fn decode(&self) -> Result<Vec<u8>, PipelineError> {
        match self {
            DocumentContent::Encoded(s) => decode_base64(s),
            DocumentContent::Bytes(values) => values.iter().copied().map(to_byte).collect(),
            DocumentContent::Indexed(map) => {
                let mut indexed = map
                    .iter()
                    .map(|(k, v)| {
                        let index = k.parse::<usize>().map_err(|_| {
                            PipelineError::Extraction(format!("Invalid byte index '{k}'"))
                        })?;
                        Ok((index, to_byte(*v)?))
                    })
                    .collect::<Result<Vec<_>, PipelineError>>()?;
                // BTreeMap orders keys lexically ("10" < "2"), so re-sort numerically.
                indexed.sort_unstable_by_key(|(i, _)| *i);
                if let Some((pos, (index, _))) =
                    indexed.iter().enumerate().find(|(pos, (i, _))| pos != i)
                {
                    return Err(PipelineError::Extraction(format!(
                        "Byte index {index} found where {pos} was expected"
                    )));
                }
                Ok(indexed.into_iter().map(|(_, b)| b).collect())
            }
        }
    }
}

fn decode_base64(s: &str) -> Result<Vec<u8>, PipelineError> {
    let payload = match s.split_once(";base64,") {
        Some((prefix, rest)) if prefix.starts_with("data:") => rest,
        _ => s,
    };
    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();

    STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| PipelineError::Extraction(format!("fileContent is not valid base64: {e}")))
}

fn to_byte(value: i64) -> Result<u8, PipelineError> {
    u8::try_from(value)
        .map_err(|_| PipelineError::Extraction(format!("Byte value {value} is out of range")))
}
