//! Frozen type registry and method lookup.
//!
//! # Invariants
//!
//! - Every parent named by a registered type is registered, with the Rust
//!   type its child's projection produces.
//! - Parent chains are acyclic, so [`Ancestors`] always terminates.
//! - A lookup whose argument count exceeds [`MatchOptions::max_arguments`]
//!   fails before any method table is consulted and isn't counted.

use std::sync::atomic::{AtomicU64, Ordering};

use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};
use smallvec::SmallVec;
use tether_primitives::ValueType;
use tracing::{debug, trace};

use crate::def::TypeEntry;
use crate::{MAX_ARGUMENTS, MatchError, MatchOptions, MethodEntry, MethodMatch, RegistryError, TypeDef};

/// Collects [`TypeDef`]s before freezing them into a [`TypeRegistry`].
#[derive(Default)]
pub struct RegistryBuilder {
	types: Vec<TypeEntry>,
	options: MatchOptions,
}

impl RegistryBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn options(mut self, options: MatchOptions) -> Self {
		self.options = options;
		self
	}

	pub fn register<T: 'static>(mut self, def: TypeDef<T>) -> Self {
		self.types.push(def.into_entry());
		self
	}

	/// Validates the collected definitions and freezes them.
	pub fn build(self) -> Result<TypeRegistry, RegistryError> {
		let mut order = Vec::with_capacity(self.types.len());
		let mut types = HashMap::default();

		for entry in self.types {
			if let Some(method) = entry.methods.iter().find(|m| m.arity() > MAX_ARGUMENTS) {
				return Err(RegistryError::TooManyParameters {
					type_name: entry.name.to_string(),
					method: method.name().to_owned(),
					count: method.arity(),
					max: MAX_ARGUMENTS,
				});
			}
			if types.contains_key(&entry.name) {
				return Err(RegistryError::DuplicateType {
					type_name: entry.name.to_string(),
				});
			}
			order.push(entry.name.clone());
			types.insert(entry.name.clone(), entry);
		}

		for name in &order {
			let entry: &TypeEntry = &types[name];
			let Some(link) = &entry.parent else {
				continue;
			};
			let Some(parent) = types.get(&link.name) else {
				return Err(RegistryError::UnknownParent {
					type_name: name.to_string(),
					parent: link.name.to_string(),
				});
			};
			if parent.rust_type != link.rust_type {
				return Err(RegistryError::ParentTypeMismatch {
					type_name: name.to_string(),
					parent: link.name.to_string(),
					expected: link.rust_name,
					found: parent.rust_name,
				});
			}
		}

		for name in &order {
			let mut seen = HashSet::default();
			let mut cursor = Some(name);
			while let Some(current) = cursor {
				if !seen.insert(current) {
					return Err(RegistryError::ParentCycle {
						type_name: name.to_string(),
					});
				}
				cursor = types[current].parent.as_ref().map(|link| &link.name);
			}
		}

		let methods: usize = types.values().map(|t| t.methods.len()).sum();
		debug!(types = types.len(), methods, policy = ?self.options.policy, "type registry built");

		Ok(TypeRegistry {
			types,
			order,
			options: self.options,
			lookups: AtomicU64::new(0),
		})
	}
}

/// Immutable table of invocable types.
pub struct TypeRegistry {
	types: HashMap<Box<str>, TypeEntry>,
	order: Vec<Box<str>>,
	options: MatchOptions,
	lookups: AtomicU64,
}

impl TypeRegistry {
	pub fn builder() -> RegistryBuilder {
		RegistryBuilder::new()
	}

	pub fn options(&self) -> &MatchOptions {
		&self.options
	}

	pub fn len(&self) -> usize {
		self.types.len()
	}

	pub fn is_empty(&self) -> bool {
		self.types.is_empty()
	}

	pub fn contains(&self, type_name: &str) -> bool {
		self.types.contains_key(type_name)
	}

	/// Registered type names in registration order.
	pub fn type_names(&self) -> impl Iterator<Item = &str> {
		self.order.iter().map(|n| &**n)
	}

	pub fn info(&self, type_name: &str) -> Option<TypeInfo<'_>> {
		self.types.get(type_name).map(TypeInfo)
	}

	/// The type itself followed by its parents, most-derived first.
	/// Empty for unregistered names.
	pub fn ancestors<'a>(&'a self, type_name: &str) -> Ancestors<'a> {
		Ancestors {
			registry: self,
			next: self.types.get(type_name),
		}
	}

	/// Number of method-matching lookups performed so far.
	pub fn lookup_count(&self) -> u64 {
		self.lookups.load(Ordering::Relaxed)
	}

	/// Finds the method `method` on `type_name` or its ancestors that accepts
	/// arguments declared as `declared`.
	///
	/// Levels are searched most-derived first, and methods within one level
	/// in registration order. The first accepted candidate wins; more distant
	/// ancestors are not examined once a level produced a match.
	pub fn find_method(
		&self,
		type_name: &str,
		method: &str,
		declared: &[ValueType],
	) -> Result<MethodMatch<'_>, MatchError> {
		let max = self.options.max_arguments.min(MAX_ARGUMENTS);
		if declared.len() > max {
			return Err(MatchError::ArgumentCountUnsupported {
				count: declared.len(),
				max,
			});
		}
		self.lookups.fetch_add(1, Ordering::Relaxed);

		let policy = self.options.policy;
		let mut path = SmallVec::new();
		for level in self.ancestors(type_name) {
			let entry = level.0;
			let found = entry
				.methods
				.iter()
				.find(|m| &*m.name == method && m.arity() == declared.len() && policy.accepts(declared, &m.params));
			if let Some(found) = found {
				trace!(type_name, method, declared_on = &*entry.name, depth = path.len(), "method matched");
				return Ok(MethodMatch {
					method: found,
					declared_on: &entry.name,
					path,
				});
			}
			if let Some(link) = &entry.parent {
				path.push(link.project.clone());
			}
		}

		Err(MatchError::MethodNotFound {
			type_name: type_name.to_owned(),
			method: method.to_owned(),
			arity: declared.len(),
		})
	}
}

impl std::fmt::Debug for TypeRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TypeRegistry")
			.field("types", &self.order)
			.field("options", &self.options)
			.field("lookups", &self.lookup_count())
			.finish()
	}
}

/// Read-only view of one registered type.
#[derive(Clone, Copy)]
pub struct TypeInfo<'a>(pub(crate) &'a TypeEntry);

impl<'a> TypeInfo<'a> {
	pub fn name(&self) -> &'a str {
		&self.0.name
	}

	pub fn module(&self) -> &'a str {
		&self.0.module
	}

	pub fn parent(&self) -> Option<&'a str> {
		self.0.parent.as_ref().map(|link| &*link.name)
	}

	pub fn methods(&self) -> &'a [MethodEntry] {
		&self.0.methods
	}
}

impl std::fmt::Debug for TypeInfo<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TypeInfo")
			.field("name", &self.name())
			.field("module", &self.module())
			.field("parent", &self.parent())
			.field("methods", &self.methods().len())
			.finish()
	}
}

/// Iterator over a type and its ancestors.
pub struct Ancestors<'a> {
	registry: &'a TypeRegistry,
	next: Option<&'a TypeEntry>,
}

impl<'a> Iterator for Ancestors<'a> {
	type Item = TypeInfo<'a>;

	fn next(&mut self) -> Option<Self::Item> {
		let current = self.next?;
		self.next = current
			.parent
			.as_ref()
			.and_then(|link| self.registry.types.get(&link.name));
		Some(TypeInfo(current))
	}
}
