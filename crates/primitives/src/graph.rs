use std::any::Any;

use crate::ObjectId;

/// Read-only view of the host's live object graph.
///
/// The engine never creates, mutates or destroys objects through this
/// capability. Methods invoked on resolved targets receive shared references;
/// hosts that need mutation use interior mutability in their own types.
pub trait ObjectGraph {
	/// Concrete registered type name of `id`, or `None` if the object is not live.
	fn type_name(&self, id: ObjectId) -> Option<&str>;

	/// Borrows the object behind `id` for downcasting.
	fn object(&self, id: ObjectId) -> Option<&dyn Any>;

	/// Finds an attached facet of `container` whose type name is `type_name`.
	///
	/// Composite hosts answer this the way a component lookup does. Hosts
	/// without composites keep the default.
	fn facet(&self, container: ObjectId, type_name: &str) -> Option<ObjectId> {
		let _ = (container, type_name);
		None
	}

	/// The composite object `id` is attached to, if it is a facet.
	fn owner(&self, id: ObjectId) -> Option<ObjectId> {
		let _ = id;
		None
	}

	/// Lists the facets attached to `container`, used when enumerating
	/// invocable methods for authoring.
	fn facets(&self, container: ObjectId) -> Vec<ObjectId> {
		let _ = container;
		Vec::new()
	}

	/// Returns true if `id` refers to a live object.
	fn contains(&self, id: ObjectId) -> bool {
		self.type_name(id).is_some()
	}
}
