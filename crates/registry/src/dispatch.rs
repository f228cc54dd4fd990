use smallvec::SmallVec;
use tether_primitives::{ObjectGraph, ObjectId, Value};

use crate::def::Projection;
use crate::{DispatchError, MethodEntry, Thunk};

/// Result of a successful method lookup.
pub struct MethodMatch<'a> {
	pub(crate) method: &'a MethodEntry,
	pub(crate) declared_on: &'a str,
	pub(crate) path: SmallVec<[Projection; 2]>,
}

impl<'a> MethodMatch<'a> {
	pub fn method(&self) -> &'a MethodEntry {
		self.method
	}

	/// Registered name of the type that declares the matched method.
	pub fn declared_on(&self) -> &'a str {
		self.declared_on
	}

	/// Number of parent steps from the target's type to the declaring type.
	pub fn depth(&self) -> usize {
		self.path.len()
	}

	/// Binds the matched method to a concrete target.
	pub fn bind(self, target: ObjectId) -> BoundMethod {
		BoundMethod {
			target,
			method: self.method.name.clone(),
			declared_on: self.declared_on.into(),
			path: self.path,
			thunk: self.method.thunk.clone(),
		}
	}
}

/// A method bound to one target object, callable repeatedly.
#[derive(Clone)]
pub struct BoundMethod {
	target: ObjectId,
	method: Box<str>,
	declared_on: Box<str>,
	path: SmallVec<[Projection; 2]>,
	thunk: Thunk,
}

impl BoundMethod {
	pub fn target(&self) -> ObjectId {
		self.target
	}

	pub fn method_name(&self) -> &str {
		&self.method
	}

	pub fn declared_on(&self) -> &str {
		&self.declared_on
	}

	/// Calls the method on the bound target with already evaluated arguments.
	pub fn invoke<G: ObjectGraph + ?Sized>(&self, graph: &G, args: &[Value]) -> Result<(), DispatchError> {
		let mut this = graph
			.object(self.target)
			.ok_or(DispatchError::TargetGone { target: self.target })?;
		for project in &self.path {
			this = project(this).ok_or_else(|| DispatchError::TargetMismatch {
				type_name: self.declared_on.to_string(),
			})?;
		}
		(self.thunk)(this, args)
	}
}

impl std::fmt::Debug for BoundMethod {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("BoundMethod")
			.field("target", &self.target)
			.field("method", &self.method)
			.field("declared_on", &self.declared_on)
			.field("depth", &self.path.len())
			.finish()
	}
}
