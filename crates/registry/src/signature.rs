use tether_primitives::ValueType;

use crate::TypeRegistry;

/// Description of an invocable method, as offered to authoring tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
	pub name: String,
	pub params: Vec<ValueType>,
	pub labels: Vec<String>,
	/// Registered name of the declaring type.
	pub declared_on: String,
}

impl MethodSignature {
	/// `Name(i32, f32)` style rendering.
	pub fn display(&self) -> String {
		let params: Vec<&str> = self.params.iter().map(ValueType::name).collect();
		format!("{}({})", self.name, params.join(", "))
	}
}

impl TypeRegistry {
	/// Lists the methods callable on `type_name`, including inherited ones.
	///
	/// A method redeclared with the same parameter types on a more-derived
	/// type hides the ancestor's. The result is sorted by name; overloads keep
	/// their most-derived-first, registration order.
	pub fn signatures(&self, type_name: &str) -> Vec<MethodSignature> {
		let mut out: Vec<MethodSignature> = Vec::new();
		for level in self.ancestors(type_name) {
			for method in level.methods() {
				let hidden = out
					.iter()
					.any(|s| s.name == method.name() && s.params == method.params());
				if hidden {
					continue;
				}
				out.push(MethodSignature {
					name: method.name().to_owned(),
					params: method.params().to_vec(),
					labels: method.labels().map(str::to_owned).collect(),
					declared_on: level.name().to_owned(),
				});
			}
		}
		out.sort_by(|a, b| a.name.cmp(&b.name));
		out
	}
}
