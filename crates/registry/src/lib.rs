//! Explicit registration of invocable types and their methods.
//!
//! Hosts describe each invocable type once at startup with a [`TypeDef`]:
//! its registered name, its parent type (with a projection from the derived
//! Rust value to the parent's), and a table of typed methods. The frozen
//! [`TypeRegistry`] answers method lookups by walking a type's ancestor chain
//! and applying the configured [`MatchPolicy`] to the declared argument
//! types, then hands out [`BoundMethod`]s that call into the host's objects.
//!
//! Nothing here inspects types at runtime beyond `Any` downcasts of the
//! registered Rust types.

mod def;
mod dispatch;
mod error;
mod matching;
mod method;
mod param;
mod policy;
mod registry;
mod signature;

pub use def::TypeDef;
pub use dispatch::{BoundMethod, MethodMatch};
pub use error::{DispatchError, MatchError, RegistryError};
pub use method::{MAX_ARGUMENTS, Method, MethodEntry, Thunk};
pub use param::{MethodError, MethodOutcome, Param};
pub use policy::{MatchOptions, MatchPolicy, OptionsError};
pub use registry::{Ancestors, RegistryBuilder, TypeInfo, TypeRegistry};
pub use signature::MethodSignature;
