//! Reference implementation of [`ObjectGraph`] for hosts and tests.
//!
//! Objects are either roots or facets attached to a root. A facet query
//! against either a root or one of its facets searches the root's facets in
//! attachment order, mirroring a component lookup on a composite object.

use std::any::Any;

use rustc_hash::FxHashMap as HashMap;

use crate::{ObjectGraph, ObjectId};

struct Slot {
	type_name: Box<str>,
	value: Box<dyn Any + Send + Sync>,
	owner: Option<ObjectId>,
	facets: Vec<ObjectId>,
}

/// Owning store of live objects keyed by monotonically assigned ids.
///
/// Ids are never reused, so a removed object can't be confused with a later
/// one by identity.
#[derive(Default)]
pub struct ObjectArena {
	slots: HashMap<ObjectId, Slot>,
	next: u64,
}

impl ObjectArena {
	/// Creates an empty arena.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts a root object.
	pub fn insert<T: Any + Send + Sync>(&mut self, type_name: impl Into<Box<str>>, value: T) -> ObjectId {
		self.insert_slot(type_name.into(), Box::new(value), None)
	}

	/// Attaches a facet to `owner`'s root. Returns `None` if `owner` is not live.
	pub fn attach<T: Any + Send + Sync>(
		&mut self,
		owner: ObjectId,
		type_name: impl Into<Box<str>>,
		value: T,
	) -> Option<ObjectId> {
		let root = self.root_of(owner)?;
		let id = self.insert_slot(type_name.into(), Box::new(value), Some(root));
		self.slots.get_mut(&root)?.facets.push(id);
		Some(id)
	}

	/// Removes an object. Removing a root also removes its facets.
	pub fn remove(&mut self, id: ObjectId) -> bool {
		let Some(slot) = self.slots.remove(&id) else {
			return false;
		};
		if let Some(owner) = slot.owner
			&& let Some(root) = self.slots.get_mut(&owner)
		{
			root.facets.retain(|f| *f != id);
		}
		for facet in slot.facets {
			self.slots.remove(&facet);
		}
		true
	}

	/// Borrows an object as its concrete type.
	pub fn get<T: Any>(&self, id: ObjectId) -> Option<&T> {
		self.slots.get(&id)?.value.downcast_ref::<T>()
	}

	pub fn len(&self) -> usize {
		self.slots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}

	fn insert_slot(&mut self, type_name: Box<str>, value: Box<dyn Any + Send + Sync>, owner: Option<ObjectId>) -> ObjectId {
		self.next += 1;
		let id = ObjectId(self.next);
		self.slots.insert(
			id,
			Slot {
				type_name,
				value,
				owner,
				facets: Vec::new(),
			},
		);
		id
	}

	fn root_of(&self, id: ObjectId) -> Option<ObjectId> {
		let slot = self.slots.get(&id)?;
		Some(slot.owner.unwrap_or(id))
	}
}

impl ObjectGraph for ObjectArena {
	fn type_name(&self, id: ObjectId) -> Option<&str> {
		self.slots.get(&id).map(|s| &*s.type_name)
	}

	fn object(&self, id: ObjectId) -> Option<&dyn Any> {
		self.slots.get(&id).map(|s| s.value.as_ref() as &dyn Any)
	}

	fn facet(&self, container: ObjectId, type_name: &str) -> Option<ObjectId> {
		let root = self.slots.get(&self.root_of(container)?)?;
		root.facets
			.iter()
			.copied()
			.find(|f| self.type_name(*f) == Some(type_name))
	}

	fn owner(&self, id: ObjectId) -> Option<ObjectId> {
		self.slots.get(&id)?.owner
	}

	fn facets(&self, container: ObjectId) -> Vec<ObjectId> {
		self.root_of(container)
			.and_then(|root| self.slots.get(&root))
			.map(|slot| slot.facets.clone())
			.unwrap_or_default()
	}
}
