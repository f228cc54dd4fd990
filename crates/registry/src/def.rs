use std::any::{Any, TypeId};
use std::marker::PhantomData;
use std::sync::Arc;

use crate::method::erase;
use crate::{Method, MethodEntry};

/// Views a derived object as its parent's Rust type.
pub(crate) type Projection = Arc<dyn for<'a> Fn(&'a dyn Any) -> Option<&'a dyn Any> + Send + Sync>;

pub(crate) struct ParentLink {
	pub(crate) name: Box<str>,
	pub(crate) rust_type: TypeId,
	pub(crate) rust_name: &'static str,
	pub(crate) project: Projection,
}

pub(crate) struct TypeEntry {
	pub(crate) name: Box<str>,
	pub(crate) module: Box<str>,
	pub(crate) rust_type: TypeId,
	pub(crate) rust_name: &'static str,
	pub(crate) parent: Option<ParentLink>,
	pub(crate) methods: Vec<MethodEntry>,
}

/// Registration record for one invocable type backed by the Rust type `T`.
///
/// ```
/// use tether_registry::{TypeDef, TypeRegistry};
///
/// struct Base;
/// struct Door {
/// 	base: Base,
/// }
///
/// impl Base {
/// 	fn ping(&self) {}
/// }
///
/// impl Door {
/// 	fn open(&self, speed: f32) {
/// 		let _ = speed;
/// 	}
/// }
///
/// let registry = TypeRegistry::builder()
/// 	.register(TypeDef::<Base>::new("Game.Base", "game").method("Ping", Base::ping))
/// 	.register(
/// 		TypeDef::<Door>::new("Game.Door", "game")
/// 			.extends("Game.Base", |d: &Door| &d.base)
/// 			.method_with_labels("Open", &["speed"], Door::open),
/// 	)
/// 	.build()
/// 	.unwrap();
/// assert_eq!(registry.ancestors("Game.Door").count(), 2);
/// ```
pub struct TypeDef<T> {
	entry: TypeEntry,
	_marker: PhantomData<fn() -> T>,
}

impl<T: Any> TypeDef<T> {
	/// Starts a definition for the type registered as `name` in `module`.
	pub fn new(name: impl Into<Box<str>>, module: impl Into<Box<str>>) -> Self {
		Self {
			entry: TypeEntry {
				name: name.into(),
				module: module.into(),
				rust_type: TypeId::of::<T>(),
				rust_name: std::any::type_name::<T>(),
				parent: None,
				methods: Vec::new(),
			},
			_marker: PhantomData,
		}
	}

	/// Declares the parent type and how to reach the parent's part of a `T`.
	pub fn extends<P: Any>(mut self, parent: impl Into<Box<str>>, upcast: fn(&T) -> &P) -> Self {
		let project: Projection = Arc::new(projection(move |any| {
			any.downcast_ref::<T>().map(|this| upcast(this) as &dyn Any)
		}));
		self.entry.parent = Some(ParentLink {
			name: parent.into(),
			rust_type: TypeId::of::<P>(),
			rust_name: std::any::type_name::<P>(),
			project,
		});
		self
	}

	/// Adds a method whose parameters are labelled `arg0`, `arg1`, ...
	pub fn method<Args, M>(self, name: impl Into<Box<str>>, method: M) -> Self
	where
		M: Method<T, Args>,
	{
		self.method_with_labels(name, &[], method)
	}

	/// Adds a method with parameter labels shown to authoring tools.
	pub fn method_with_labels<Args, M>(mut self, name: impl Into<Box<str>>, labels: &[&str], method: M) -> Self
	where
		M: Method<T, Args>,
	{
		let params = M::param_types();
		let thunk = erase::<T, Args, M>(&self.entry.name, method);
		self.entry.methods.push(MethodEntry::new(name, params, labels, thunk));
		self
	}

	/// Adds a pre-built entry. Its thunk receives the target as `&T`.
	pub fn raw_method(mut self, entry: MethodEntry) -> Self {
		self.entry.methods.push(entry);
		self
	}

	pub fn name(&self) -> &str {
		&self.entry.name
	}

	pub(crate) fn into_entry(self) -> TypeEntry {
		self.entry
	}
}

fn projection<F>(f: F) -> F
where
	F: for<'a> Fn(&'a dyn Any) -> Option<&'a dyn Any> + Send + Sync + 'static,
{
	f
}
