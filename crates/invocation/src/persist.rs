//! Event lists and calls persist as plain data; runtime binding caches are
//! never part of the output. JSON is meant for hand-editable assets, the
//! postcard encoding for compact storage.

use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	#[error("binary: {0}")]
	Binary(#[from] postcard::Error),
}

/// Pretty-printed JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, PersistError> {
	Ok(serde_json::to_string_pretty(value)?)
}

pub fn from_json<T: DeserializeOwned>(input: &str) -> Result<T, PersistError> {
	Ok(serde_json::from_str(input)?)
}

pub fn to_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, PersistError> {
	Ok(postcard::to_stdvec(value)?)
}

pub fn from_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, PersistError> {
	Ok(postcard::from_bytes(bytes)?)
}
