use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{CallCache, CallError, InvokableCall, InvokeContext};

/// Ordered list of calls invoked together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventList {
	#[serde(default)]
	pub calls: Vec<InvokableCall>,
}

impl EventList {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, call: InvokableCall) {
		self.calls.push(call);
	}

	pub fn len(&self) -> usize {
		self.calls.len()
	}

	pub fn is_empty(&self) -> bool {
		self.calls.is_empty()
	}

	/// Invokes every call in order, stopping at the first failure.
	///
	/// Calls after a failing one are not invoked and the failure is returned
	/// as is.
	pub fn invoke(&self, slots: &mut EventSlots, cx: &InvokeContext<'_>) -> Result<(), CallError> {
		slots.fit(self.calls.len());
		for (index, (call, cache)) in self.calls.iter().zip(&mut slots.caches).enumerate() {
			if let Err(error) = call.invoke(cache, cx) {
				debug!(
					index,
					method = %call.method,
					target_type = %call.target_type,
					error = %error,
					"event call failed"
				);
				return Err(error);
			}
		}
		Ok(())
	}

	/// Invokes with fresh bindings that are dropped afterwards.
	pub fn invoke_uncached(&self, cx: &InvokeContext<'_>) -> Result<(), CallError> {
		self.invoke(&mut EventSlots::new(), cx)
	}
}

impl FromIterator<InvokableCall> for EventList {
	fn from_iter<I: IntoIterator<Item = InvokableCall>>(iter: I) -> Self {
		Self {
			calls: iter.into_iter().collect(),
		}
	}
}

/// Binding caches for an [`EventList`], one per call position.
///
/// Slots belong to one list and reset themselves when the list's length
/// changes. A call edited in place rebinds on its next invocation, since each
/// [`CallCache`] checks the call it was bound for.
#[derive(Debug, Default)]
pub struct EventSlots {
	caches: Vec<CallCache>,
}

impl EventSlots {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.caches.len()
	}

	pub fn is_empty(&self) -> bool {
		self.caches.is_empty()
	}

	/// Cache of the call at `index`, if the slots have been sized for it.
	pub fn get(&self, index: usize) -> Option<&CallCache> {
		self.caches.get(index)
	}

	/// Drops every binding.
	pub fn reset(&mut self) {
		self.caches.iter_mut().for_each(CallCache::clear);
	}

	fn fit(&mut self, len: usize) {
		if self.caches.len() != len {
			self.caches.clear();
			self.caches.resize_with(len, CallCache::default);
		}
	}
}
