use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

/// Opaque lookup key of an indirect reference. The empty key means "no override".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyKey(Box<str>);

impl PropertyKey {
	pub fn new(key: impl Into<Box<str>>) -> Self {
		Self(key.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl Borrow<str> for PropertyKey {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl From<&str> for PropertyKey {
	fn from(key: &str) -> Self {
		Self(key.into())
	}
}

impl From<String> for PropertyKey {
	fn from(key: String) -> Self {
		Self(key.into_boxed_str())
	}
}

impl std::fmt::Display for PropertyKey {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}
