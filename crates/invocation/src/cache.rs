use tether_primitives::{ObjectId, ValueType};
use tether_registry::BoundMethod;
use tracing::trace;

use crate::InvokableCall;

/// What a binding was made for: the resolved container and the parts of the
/// call that decide which method matches.
#[derive(Debug, Clone, PartialEq)]
struct BindingKey {
	container: ObjectId,
	target_type: Box<str>,
	method: Box<str>,
	declared: Vec<ValueType>,
}

impl BindingKey {
	fn new(container: ObjectId, call: &InvokableCall) -> Self {
		Self {
			container,
			target_type: call.target_type.as_str().into(),
			method: call.method.as_str().into(),
			declared: call.declared_types(),
		}
	}

	fn matches(&self, container: ObjectId, call: &InvokableCall) -> bool {
		self.container == container
			&& *self.target_type == *call.target_type
			&& *self.method == *call.method
			&& self.declared.len() == call.arguments.len()
			&& self
				.declared
				.iter()
				.zip(&call.arguments)
				.all(|(ty, arg)| *ty == arg.declared_type())
	}
}

/// Runtime binding cache of one [`InvokableCall`].
///
/// Remembers the resolved container and the method bound for it. The next
/// invocation whose target resolves to the same container reuses the binding
/// and skips narrowing and matching. A different container, or a call whose
/// target type, method name or argument types changed since, rebinds.
#[derive(Debug, Default)]
pub struct CallCache {
	slot: Option<(BindingKey, BoundMethod)>,
}

impl CallCache {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_empty(&self) -> bool {
		self.slot.is_none()
	}

	/// Container the cached binding was made for.
	pub fn container(&self) -> Option<ObjectId> {
		self.slot.as_ref().map(|(key, _)| key.container)
	}

	pub fn bound(&self) -> Option<&BoundMethod> {
		self.slot.as_ref().map(|(_, bound)| bound)
	}

	pub fn clear(&mut self) {
		self.slot = None;
	}

	/// Returns the binding of `call` for `container`, calling `bind` only on
	/// a miss.
	///
	/// A failed bind leaves the previous entry in place.
	pub fn get_or_bind<E>(
		&mut self,
		container: ObjectId,
		call: &InvokableCall,
		bind: impl FnOnce() -> Result<BoundMethod, E>,
	) -> Result<&BoundMethod, E> {
		let entry = match self.slot.take() {
			Some((key, bound)) if key.matches(container, call) => {
				trace!(%container, method = bound.method_name(), "call cache hit");
				(key, bound)
			}
			previous => match bind() {
				Ok(bound) => {
					trace!(%container, target = %bound.target(), method = bound.method_name(), "call cache bind");
					(BindingKey::new(container, call), bound)
				}
				Err(err) => {
					self.slot = previous;
					return Err(err);
				}
			},
		};
		Ok(&self.slot.insert(entry).1)
	}
}
