use rustc_hash::FxHashMap as HashMap;
use tether_primitives::ObjectId;

use crate::PropertyKey;

/// Host-owned table mapping keys to object handles.
///
/// The engine only reads through [`get`](Self::get); hosts populate the
/// table with [`set`](Self::set) and [`clear`](Self::clear). A missing key is
/// a normal answer, never an error.
pub trait ReferenceResolver {
	/// Inserts or replaces the entry for `key`. A `None` value is a stored null.
	fn set(&mut self, key: PropertyKey, value: Option<ObjectId>);

	/// Looks `key` up. `Some(value)` if an entry exists (the stored value may
	/// be null), `None` if there is no entry.
	fn get(&self, key: &str) -> Option<Option<ObjectId>>;

	/// Removes the entry for `key`, if any.
	fn clear(&mut self, key: &str);
}

/// Hash-map backed [`ReferenceResolver`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceTable {
	entries: HashMap<PropertyKey, Option<ObjectId>>,
}

impl ReferenceTable {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Keys in unspecified order.
	pub fn keys(&self) -> impl Iterator<Item = &PropertyKey> {
		self.entries.keys()
	}
}

impl ReferenceResolver for ReferenceTable {
	fn set(&mut self, key: PropertyKey, value: Option<ObjectId>) {
		self.entries.insert(key, value);
	}

	fn get(&self, key: &str) -> Option<Option<ObjectId>> {
		self.entries.get(key).copied()
	}

	fn clear(&mut self, key: &str) {
		self.entries.remove(key);
	}
}

impl<K: Into<PropertyKey>> FromIterator<(K, Option<ObjectId>)> for ReferenceTable {
	fn from_iter<I: IntoIterator<Item = (K, Option<ObjectId>)>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
		}
	}
}
