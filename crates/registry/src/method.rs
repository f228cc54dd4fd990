use std::any::Any;
use std::sync::Arc;

use tether_primitives::{Value, ValueType};

use crate::{DispatchError, MethodOutcome, Param};

/// Largest number of positional arguments a bound method can take.
pub const MAX_ARGUMENTS: usize = 16;

/// Type-erased method body: receives the target viewed as its declaring
/// type and the evaluated arguments.
pub type Thunk = Arc<dyn Fn(&dyn Any, &[Value]) -> Result<(), DispatchError> + Send + Sync>;

/// A registered method of one type.
#[derive(Clone)]
pub struct MethodEntry {
	pub(crate) name: Box<str>,
	pub(crate) params: Vec<ValueType>,
	pub(crate) labels: Vec<Box<str>>,
	pub(crate) thunk: Thunk,
}

impl MethodEntry {
	/// Builds an entry from a raw thunk. `labels` shorter than `params` are
	/// padded with `argN`.
	pub fn new(name: impl Into<Box<str>>, params: Vec<ValueType>, labels: &[&str], thunk: Thunk) -> Self {
		let labels = (0..params.len())
			.map(|i| labels.get(i).map_or_else(|| format!("arg{i}").into(), |l| (*l).into()))
			.collect();
		Self {
			name: name.into(),
			params,
			labels,
			thunk,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn params(&self) -> &[ValueType] {
		&self.params
	}

	pub fn labels(&self) -> impl Iterator<Item = &str> {
		self.labels.iter().map(|l| &**l)
	}

	pub fn arity(&self) -> usize {
		self.params.len()
	}
}

impl std::fmt::Debug for MethodEntry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MethodEntry")
			.field("name", &self.name)
			.field("params", &self.params)
			.finish_non_exhaustive()
	}
}

/// A Rust callable usable as a method of `T` taking the parameter tuple `Args`.
///
/// Implemented for every `Fn(&T, A0, .., An) -> R` up to [`MAX_ARGUMENTS`]
/// parameters where each `Ai: Param` and `R: MethodOutcome`.
pub trait Method<T, Args>: Send + Sync + 'static {
	/// Declared parameter types in positional order.
	fn param_types() -> Vec<ValueType>;

	/// Converts `args` and calls the method on `this`.
	fn call(&self, this: &T, args: &[Value]) -> Result<(), DispatchError>;
}

macro_rules! count {
	() => { 0usize };
	($head:ident $($tail:ident)*) => { 1usize + count!($($tail)*) };
}

macro_rules! impl_method {
	($($arg:ident $idx:tt),*) => {
		impl<T, F, R, $($arg,)*> Method<T, ($($arg,)*)> for F
		where
			F: Fn(&T, $($arg),*) -> R + Send + Sync + 'static,
			R: MethodOutcome,
			$($arg: Param,)*
		{
			fn param_types() -> Vec<ValueType> {
				vec![$($arg::value_type()),*]
			}

			fn call(&self, this: &T, args: &[Value]) -> Result<(), DispatchError> {
				const ARITY: usize = count!($($arg)*);
				if args.len() != ARITY {
					return Err(DispatchError::ArgumentCount {
						expected: ARITY,
						found: args.len(),
					});
				}
				(self)(this, $(convert::<$arg>(args, $idx)?),*)
					.into_outcome()
					.map_err(DispatchError::Raised)
			}
		}
	};
}

fn convert<A: Param>(args: &[Value], index: usize) -> Result<A, DispatchError> {
	let value = &args[index];
	A::from_value(value).ok_or_else(|| DispatchError::ArgumentMismatch {
		index,
		expected: A::value_type(),
		found: value.kind_name(),
	})
}

impl_method!();
impl_method!(A0 0);
impl_method!(A0 0, A1 1);
impl_method!(A0 0, A1 1, A2 2);
impl_method!(A0 0, A1 1, A2 2, A3 3);
impl_method!(A0 0, A1 1, A2 2, A3 3, A4 4);
impl_method!(A0 0, A1 1, A2 2, A3 3, A4 4, A5 5);
impl_method!(A0 0, A1 1, A2 2, A3 3, A4 4, A5 5, A6 6);
impl_method!(A0 0, A1 1, A2 2, A3 3, A4 4, A5 5, A6 6, A7 7);
impl_method!(A0 0, A1 1, A2 2, A3 3, A4 4, A5 5, A6 6, A7 7, A8 8);
impl_method!(A0 0, A1 1, A2 2, A3 3, A4 4, A5 5, A6 6, A7 7, A8 8, A9 9);
impl_method!(A0 0, A1 1, A2 2, A3 3, A4 4, A5 5, A6 6, A7 7, A8 8, A9 9, A10 10);
impl_method!(A0 0, A1 1, A2 2, A3 3, A4 4, A5 5, A6 6, A7 7, A8 8, A9 9, A10 10, A11 11);
impl_method!(A0 0, A1 1, A2 2, A3 3, A4 4, A5 5, A6 6, A7 7, A8 8, A9 9, A10 10, A11 11, A12 12);
impl_method!(A0 0, A1 1, A2 2, A3 3, A4 4, A5 5, A6 6, A7 7, A8 8, A9 9, A10 10, A11 11, A12 12, A13 13);
impl_method!(A0 0, A1 1, A2 2, A3 3, A4 4, A5 5, A6 6, A7 7, A8 8, A9 9, A10 10, A11 11, A12 12, A13 13, A14 14);
impl_method!(
	A0 0, A1 1, A2 2, A3 3, A4 4, A5 5, A6 6, A7 7, A8 8, A9 9, A10 10, A11 11, A12 12, A13 13, A14 14, A15 15
);

/// Erases a typed method into a [`Thunk`] that downcasts its target to `T`.
pub(crate) fn erase<T, Args, M>(type_name: &str, method: M) -> Thunk
where
	T: Any,
	M: Method<T, Args>,
{
	let type_name = type_name.to_owned();
	Arc::new(move |this: &dyn Any, args: &[Value]| {
		let this = this
			.downcast_ref::<T>()
			.ok_or_else(|| DispatchError::TargetMismatch {
				type_name: type_name.clone(),
			})?;
		method.call(this, args)
	})
}
