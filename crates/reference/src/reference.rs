use serde::{Deserialize, Serialize};
use tether_primitives::ObjectId;

use crate::{PropertyKey, ReferenceResolver};

/// A literal default object or a named lookup with a fallback.
///
/// Persisted as `{ default_value, key }` where an empty `key` means the
/// reference is a plain default. [`IndirectReference::named`] normalizes an
/// empty key to [`IndirectReference::Default`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ReferenceRecord", into = "ReferenceRecord")]
pub enum IndirectReference {
	/// Always resolves to the contained value.
	Default(Option<ObjectId>),
	/// Resolves to the resolver's entry for `key`, or to `fallback` when the
	/// resolver has none.
	Named { key: PropertyKey, fallback: Option<ObjectId> },
}

impl IndirectReference {
	/// A reference that always yields `value`.
	pub const fn literal(value: Option<ObjectId>) -> Self {
		Self::Default(value)
	}

	/// A reference looked up by `key`, falling back to `fallback`.
	pub fn named(key: impl Into<PropertyKey>, fallback: Option<ObjectId>) -> Self {
		let key = key.into();
		if key.is_empty() {
			Self::Default(fallback)
		} else {
			Self::Named { key, fallback }
		}
	}

	/// The lookup key, if the reference is named.
	pub fn key(&self) -> Option<&PropertyKey> {
		match self {
			Self::Named { key, .. } if !key.is_empty() => Some(key),
			_ => None,
		}
	}

	/// The value used when no override applies.
	pub fn default_value(&self) -> Option<ObjectId> {
		match *self {
			Self::Default(value) | Self::Named { fallback: value, .. } => value,
		}
	}

	/// Resolves the reference against `resolver`.
	///
	/// A found entry wins over the default even when it stores null.
	pub fn resolve<R: ReferenceResolver + ?Sized>(&self, resolver: &R) -> Option<ObjectId> {
		match self.key() {
			None => self.default_value(),
			Some(key) => resolver.get(key.as_str()).unwrap_or(self.default_value()),
		}
	}
}

impl Default for IndirectReference {
	fn default() -> Self {
		Self::Default(None)
	}
}

#[derive(Serialize, Deserialize)]
struct ReferenceRecord {
	default_value: Option<ObjectId>,
	#[serde(default)]
	key: PropertyKey,
}

impl From<ReferenceRecord> for IndirectReference {
	fn from(record: ReferenceRecord) -> Self {
		Self::named(record.key, record.default_value)
	}
}

impl From<IndirectReference> for ReferenceRecord {
	fn from(reference: IndirectReference) -> Self {
		match reference {
			IndirectReference::Default(default_value) => Self {
				default_value,
				key: PropertyKey::default(),
			},
			IndirectReference::Named { key, fallback } => Self {
				default_value: fallback,
				key,
			},
		}
	}
}
