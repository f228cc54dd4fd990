//! Indirect object references.
//!
//! An [`IndirectReference`] either names a literal default object or looks a
//! key up in a host-owned [`ReferenceResolver`], falling back to its default
//! when the key has no entry. Resolution never fails: absence of an override
//! is a normal state.

mod key;
mod reference;
mod resolver;

pub use key::PropertyKey;
pub use reference::IndirectReference;
pub use resolver::{ReferenceResolver, ReferenceTable};
