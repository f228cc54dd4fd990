use serde::{Deserialize, Serialize};

/// Identity of an object living in the host's object graph.
///
/// This is the engine's object handle. Ids are compared by value, so two
/// resolutions yielding the same id refer to the same live object. Hosts
/// must not reuse an id for a different object while calls may still hold it
/// in a binding cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub u64);

impl ObjectId {
	/// Returns the underlying u64 value.
	#[inline]
	pub const fn as_u64(self) -> u64 {
		self.0
	}
}

impl std::fmt::Display for ObjectId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "ObjectId({})", self.0)
	}
}
