//! Editors offer the methods of a target object and its facets as menu
//! entries, then turn the picked entry into a default-filled call.

use tether_primitives::{ObjectGraph, ObjectId};
use tether_reference::IndirectReference;
use tether_registry::{MethodSignature, TypeRegistry};

use crate::{Argument, ArgumentContainer, InvokableCall};

/// One invocable method offered for a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodChoice {
	/// Object that declares the method: the target's root or one of its facets.
	pub target: ObjectId,
	/// Registered type of `target`.
	pub type_name: String,
	pub signature: MethodSignature,
	/// Menu label: `Type/Method(Params)`, or `Type/Method/Method(Params)`
	/// when the method is overloaded.
	pub label: String,
}

impl MethodChoice {
	/// A call of this method on `target` with default-valued arguments.
	pub fn to_call(&self, target: IndirectReference) -> InvokableCall {
		let mut call = InvokableCall::new(target, self.type_name.clone(), self.signature.name.clone());
		self.apply(&mut call);
		call
	}

	/// Retargets `call` at this method.
	///
	/// Existing arguments whose declared type matches the new parameter at
	/// the same position keep their value; the rest are reset to defaults.
	/// Labels always follow the signature.
	pub fn apply(&self, call: &mut InvokableCall) {
		let previous = std::mem::take(&mut call.arguments);
		call.target_type = self.type_name.clone();
		call.method = self.signature.name.clone();
		call.arguments = self
			.signature
			.params
			.iter()
			.zip(&self.signature.labels)
			.enumerate()
			.map(|(index, (ty, label))| {
				let argument = match previous.get(index) {
					Some(kept) if kept.declared_type() == *ty => kept.argument.clone(),
					_ => Argument::default_for(ty),
				};
				ArgumentContainer {
					label: label.clone(),
					argument,
				}
			})
			.collect();
	}
}

/// Lists the methods callable on `target`'s root object and on each of the
/// root's facets, in facet order.
///
/// Objects whose type is not registered contribute nothing.
pub fn browse<G: ObjectGraph + ?Sized>(graph: &G, registry: &TypeRegistry, target: ObjectId) -> Vec<MethodChoice> {
	let root = graph.owner(target).unwrap_or(target);
	let mut choices = Vec::new();
	for object in std::iter::once(root).chain(graph.facets(root)) {
		let Some(type_name) = graph.type_name(object) else {
			continue;
		};
		let signatures = registry.signatures(type_name);
		for signature in &signatures {
			let overloads = signatures.iter().filter(|s| s.name == signature.name).count();
			let label = if overloads > 1 {
				format!("{type_name}/{}/{}", signature.name, signature.display())
			} else {
				format!("{type_name}/{}", signature.display())
			};
			choices.push(MethodChoice {
				target: object,
				type_name: type_name.to_owned(),
				signature: signature.clone(),
				label,
			});
		}
	}
	choices
}
