use tether_primitives::{ObjectId, ValueType};

use crate::MethodError;

/// Registration failures detected when freezing a [`RegistryBuilder`](crate::RegistryBuilder).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// Two definitions share a type name.
	#[error("duplicate type: {type_name}")]
	DuplicateType { type_name: String },
	/// A type extends a parent that was never registered.
	#[error("type {type_name} extends unknown parent {parent}")]
	UnknownParent { type_name: String, parent: String },
	/// A parent's registered Rust type differs from the projection's target.
	#[error("type {type_name} projects to {expected}, but {parent} is registered as {found}")]
	ParentTypeMismatch {
		type_name: String,
		parent: String,
		expected: &'static str,
		found: &'static str,
	},
	/// Following parents from a type leads back to it.
	#[error("inheritance cycle through {type_name}")]
	ParentCycle { type_name: String },
	/// A method declares more parameters than a call can carry.
	#[error("{type_name}::{method} declares {count} parameters (max {max})")]
	TooManyParameters {
		type_name: String,
		method: String,
		count: usize,
		max: usize,
	},
}

/// Method lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
	/// The call carries more arguments than a bound method can take.
	#[error("{count} arguments exceed the supported maximum of {max}")]
	ArgumentCountUnsupported { count: usize, max: usize },
	/// Nothing on the type or its ancestors matched name, arity and argument kinds.
	#[error("no method {method} with {arity} compatible parameters on {type_name}")]
	MethodNotFound {
		type_name: String,
		method: String,
		arity: usize,
	},
}

/// Failures while calling a bound method.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
	/// The bound target is no longer live in the object graph.
	#[error("bound target {target} is no longer live")]
	TargetGone { target: ObjectId },
	/// The live object is not the Rust type its registered name promised.
	#[error("object is not a {type_name}")]
	TargetMismatch { type_name: String },
	/// Wrong number of evaluated arguments for the bound method.
	#[error("expected {expected} arguments, got {found}")]
	ArgumentCount { expected: usize, found: usize },
	/// An evaluated argument can't be converted to its parameter type.
	#[error("argument {index} expects {expected}, got {found}")]
	ArgumentMismatch {
		index: usize,
		expected: ValueType,
		found: &'static str,
	},
	/// The method body itself failed.
	#[error(transparent)]
	Raised(MethodError),
}
