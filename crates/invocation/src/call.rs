use serde::{Deserialize, Serialize};
use tether_primitives::{ObjectId, Value, ValueType};
use tether_reference::IndirectReference;
use tether_registry::{BoundMethod, DispatchError};

use crate::{Argument, ArgumentContainer, CallCache, CallError, InvokeContext};

/// A method call recorded as data and invoked later.
///
/// `target` names the container object. When the container is not itself a
/// `target_type`, the call lands on the container's facet of that type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvokableCall {
	pub target: IndirectReference,
	pub target_type: String,
	pub method: String,
	#[serde(default)]
	pub arguments: Vec<ArgumentContainer>,
}

impl InvokableCall {
	pub fn new(target: IndirectReference, target_type: impl Into<String>, method: impl Into<String>) -> Self {
		Self {
			target,
			target_type: target_type.into(),
			method: method.into(),
			arguments: Vec::new(),
		}
	}

	/// Appends a labelled argument.
	pub fn with_argument(mut self, label: impl Into<String>, argument: impl Into<Argument>) -> Self {
		self.arguments.push(ArgumentContainer::new(label, argument));
		self
	}

	pub fn declared_types(&self) -> Vec<ValueType> {
		self.arguments.iter().map(ArgumentContainer::declared_type).collect()
	}

	/// `Type.Method(i32, f32)` style rendering for logs.
	pub fn describe(&self) -> String {
		let params: Vec<String> = self.arguments.iter().map(|a| a.declared_type().to_string()).collect();
		format!("{}.{}({})", self.target_type, self.method, params.join(", "))
	}

	/// Resolves the target, evaluates the arguments and calls the matched method.
	///
	/// The binding is reused from `cache` when the target resolves to the
	/// same container as last time and the call still names the same target
	/// type, method and argument types.
	pub fn invoke(&self, cache: &mut CallCache, cx: &InvokeContext<'_>) -> Result<(), CallError> {
		let args: Vec<Value> = self.arguments.iter().map(|a| a.evaluate(cx.resolver)).collect();
		let container = self.target.resolve(cx.resolver).ok_or_else(|| self.unresolved())?;
		let bound = cache.get_or_bind(container, self, || self.bind(container, cx))?;
		bound.invoke(cx.graph, &args).map_err(|err| self.dispatch_error(err))
	}

	/// Invokes without keeping a binding around.
	pub fn invoke_uncached(&self, cx: &InvokeContext<'_>) -> Result<(), CallError> {
		self.invoke(&mut CallCache::new(), cx)
	}

	fn bind(&self, container: ObjectId, cx: &InvokeContext<'_>) -> Result<BoundMethod, CallError> {
		let graph = cx.graph;
		let container_type = graph.type_name(container).ok_or_else(|| self.unresolved())?;
		let target = if container_type == self.target_type {
			container
		} else {
			graph
				.facet(container, &self.target_type)
				.ok_or_else(|| self.unresolved())?
		};
		let type_name = graph.type_name(target).ok_or_else(|| self.unresolved())?;
		let found = cx.registry.find_method(type_name, &self.method, &self.declared_types())?;
		Ok(found.bind(target))
	}

	fn unresolved(&self) -> CallError {
		CallError::TargetUnresolved {
			target_type: self.target_type.clone(),
		}
	}

	fn dispatch_error(&self, err: DispatchError) -> CallError {
		match err {
			DispatchError::TargetGone { .. } => self.unresolved(),
			DispatchError::TargetMismatch { type_name } => CallError::TargetMismatch { type_name },
			DispatchError::ArgumentCount { found, .. } => CallError::MethodNotFound {
				type_name: self.target_type.clone(),
				method: self.method.clone(),
				arity: found,
			},
			DispatchError::ArgumentMismatch { index, expected, found } => {
				CallError::ArgumentMismatch { index, expected, found }
			}
			DispatchError::Raised(err) => CallError::Raised(err),
		}
	}
}
