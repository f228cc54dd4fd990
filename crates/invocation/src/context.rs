use tether_primitives::ObjectGraph;
use tether_reference::ReferenceResolver;
use tether_registry::TypeRegistry;

/// Host capabilities borrowed for the duration of an invocation.
#[derive(Clone, Copy)]
pub struct InvokeContext<'a> {
	pub registry: &'a TypeRegistry,
	pub graph: &'a dyn ObjectGraph,
	pub resolver: &'a dyn ReferenceResolver,
}

impl<'a> InvokeContext<'a> {
	pub fn new(
		registry: &'a TypeRegistry,
		graph: &'a dyn ObjectGraph,
		resolver: &'a dyn ReferenceResolver,
	) -> Self {
		Self {
			registry,
			graph,
			resolver,
		}
	}
}
