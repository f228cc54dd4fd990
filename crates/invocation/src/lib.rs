//! Deferred method calls over indirect references.
//!
//! An [`InvokableCall`] is pure data: a target reference, the registered type
//! the call expects to land on, a method name and a list of
//! [`ArgumentContainer`]s. At invocation time the target and any indirect
//! arguments are resolved through the host's
//! [`ReferenceResolver`](tether_reference::ReferenceResolver), a matching
//! method is found in the [`TypeRegistry`](tether_registry::TypeRegistry) and
//! called. The resulting binding is remembered in a [`CallCache`] kept next
//! to the call, never inside it, so persisted calls carry no runtime state.
//!
//! An [`EventList`] runs its calls in order and stops at the first failure.

mod argument;
/// Method enumeration for authoring tools.
pub mod authoring;
mod cache;
mod call;
mod context;
mod error;
mod event;
/// JSON and compact binary persistence of calls and event lists.
pub mod persist;

pub use argument::{Argument, ArgumentContainer};
pub use cache::CallCache;
pub use call::InvokableCall;
pub use context::InvokeContext;
pub use error::CallError;
pub use event::{EventList, EventSlots};
