use tether_primitives::ValueType;
use tether_registry::{MatchError, MethodError};

/// Failures of a single call, and of the event list that ran it.
#[derive(Debug, thiserror::Error)]
pub enum CallError {
	/// The target reference resolved to null, to an object the graph does
	/// not know, or to an object without a facet of the expected type.
	#[error("no live {target_type} target")]
	TargetUnresolved { target_type: String },
	#[error("no method {method} with {arity} compatible parameters on {type_name}")]
	MethodNotFound {
		type_name: String,
		method: String,
		arity: usize,
	},
	#[error("{count} arguments exceed the supported maximum of {max}")]
	ArgumentCountUnsupported { count: usize, max: usize },
	#[error("argument {index} expects {expected}, got {found}")]
	ArgumentMismatch {
		index: usize,
		expected: ValueType,
		found: &'static str,
	},
	/// The live object is not the Rust type its registered name promised.
	#[error("object is not a {type_name}")]
	TargetMismatch { type_name: String },
	/// Error returned by the method body, passed through untouched.
	#[error(transparent)]
	Raised(MethodError),
}

impl From<MatchError> for CallError {
	fn from(err: MatchError) -> Self {
		match err {
			MatchError::ArgumentCountUnsupported { count, max } => Self::ArgumentCountUnsupported { count, max },
			MatchError::MethodNotFound {
				type_name,
				method,
				arity,
			} => Self::MethodNotFound {
				type_name,
				method,
				arity,
			},
		}
	}
}
