use tether_primitives::ValueType;

use crate::MatchPolicy;

impl MatchPolicy {
	/// Returns true if `params` accepts arguments declared as `declared`.
	///
	/// Lengths must already agree.
	pub fn accepts(self, declared: &[ValueType], params: &[ValueType]) -> bool {
		debug_assert_eq!(declared.len(), params.len());
		declared
			.iter()
			.zip(params)
			.all(|(arg, param)| self.accepts_one(arg, param))
	}

	fn accepts_one(self, arg: &ValueType, param: &ValueType) -> bool {
		match self {
			Self::Primitiveness => arg.is_primitive() == param.is_primitive(),
			Self::Exact => match (arg, param) {
				(ValueType::Object(arg), ValueType::Object(param)) => param.is_any() || arg.type_name == param.type_name,
				_ => arg == param,
			},
		}
	}
}
