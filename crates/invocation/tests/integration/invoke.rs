use pretty_assertions::assert_eq;
use tether_invocation::{Argument, ArgumentContainer, CallCache, CallError, InvokableCall};
use tether_primitives::{ObjectId, ObjectType, Value, ValueType};
use tether_reference::{IndirectReference, ReferenceResolver};
use tether_registry::{MatchOptions, MatchPolicy};

use crate::common::{Jammed, World};

fn call(target: ObjectId, method: &str) -> InvokableCall {
	InvokableCall::new(IndirectReference::literal(Some(target)), "Game.Door", method)
}

#[test]
fn float_argument_picks_int_overload() {
	let mut world = World::new();
	let door = world.door();
	call(door, "Foo").with_argument("count", 2.75f32).invoke_uncached(&world.cx()).unwrap();
	assert_eq!(world.take(), vec!["Door.Foo(int 2)"]);
}

#[test]
fn string_argument_picks_string_overload() {
	let mut world = World::new();
	let door = world.door();
	call(door, "Foo").with_argument("text", "ajar").invoke_uncached(&world.cx()).unwrap();
	assert_eq!(world.take(), vec!["Door.Foo(string ajar)"]);
}

#[test]
fn inherited_method_runs_on_parent_part() {
	let mut world = World::new();
	let door = world.door();
	call(door, "Reset").invoke_uncached(&world.cx()).unwrap();
	assert_eq!(world.take(), vec!["Base.Reset"]);
}

#[test]
fn named_target_prefers_resolver_entry() {
	let mut world = World::new();
	let fallback = world.door();
	let other = world.door();
	let open = InvokableCall::new(IndirectReference::named("door", Some(fallback)), "Game.Door", "Open")
		.with_argument("speed", 1.0f32);

	open.invoke_uncached(&world.cx()).unwrap();

	world.table.set("door".into(), Some(other));
	let mut cache = CallCache::new();
	open.invoke(&mut cache, &world.cx()).unwrap();
	assert_eq!(cache.container(), Some(other));

	world.table.set("door".into(), None);
	let err = open.invoke(&mut CallCache::new(), &world.cx()).unwrap_err();
	assert!(matches!(err, CallError::TargetUnresolved { ref target_type } if target_type == "Game.Door"));

	world.table.clear("door");
	let mut cache = CallCache::new();
	open.invoke(&mut cache, &world.cx()).unwrap();
	assert_eq!(cache.container(), Some(fallback));
	assert_eq!(world.take().len(), 3);
}

#[test]
fn null_target_is_unresolved() {
	let world = World::new();
	let err = InvokableCall::new(IndirectReference::default(), "Game.Door", "Reset")
		.invoke_uncached(&world.cx())
		.unwrap_err();
	assert!(matches!(err, CallError::TargetUnresolved { .. }));
	assert_eq!(world.registry.lookup_count(), 0);
}

#[test]
fn cache_skips_matching_for_same_container() {
	let mut world = World::new();
	let first = world.door();
	let second = world.door();
	world.table.set("door".into(), Some(first));
	let open = InvokableCall::new(IndirectReference::named("door", None), "Game.Door", "Open")
		.with_argument("speed", 0.5f32);
	let mut cache = CallCache::new();
	assert!(cache.is_empty());

	open.invoke(&mut cache, &world.cx()).unwrap();
	open.invoke(&mut cache, &world.cx()).unwrap();
	assert_eq!(world.registry.lookup_count(), 1);
	assert_eq!(cache.bound().map(|b| b.target()), Some(first));

	world.table.set("door".into(), Some(second));
	open.invoke(&mut cache, &world.cx()).unwrap();
	assert_eq!(world.registry.lookup_count(), 2);
	assert_eq!(cache.container(), Some(second));
	assert_eq!(world.take().len(), 3);
}

#[test]
fn uncached_invocation_matches_every_time() {
	let mut world = World::new();
	let door = world.door();
	let reset = call(door, "Reset");
	reset.invoke_uncached(&world.cx()).unwrap();
	reset.invoke_uncached(&world.cx()).unwrap();
	assert_eq!(world.registry.lookup_count(), 2);
}

#[test]
fn seventeen_arguments_are_unsupported() {
	let mut world = World::new();
	let door = world.door();
	let mut wide = call(door, "Wide");
	for i in 0..17 {
		wide = wide.with_argument(format!("a{i}"), i);
	}
	let err = wide.invoke_uncached(&world.cx()).unwrap_err();
	assert!(matches!(err, CallError::ArgumentCountUnsupported { count: 17, max: 16 }));
	assert_eq!(world.registry.lookup_count(), 0);
	assert!(world.take().is_empty());
}

#[test]
fn sixteen_arguments_are_supported() {
	let mut world = World::new();
	let door = world.door();
	let mut wide = call(door, "Wide");
	for i in 0..16 {
		wide = wide.with_argument(format!("a{i}"), i);
	}
	wide.invoke_uncached(&world.cx()).unwrap();
	assert_eq!(world.take(), vec!["Door.Wide(120)"]);
}

#[test]
fn unknown_method_is_not_found() {
	let mut world = World::new();
	let door = world.door();
	let err = call(door, "Close").invoke_uncached(&world.cx()).unwrap_err();
	match err {
		CallError::MethodNotFound {
			type_name,
			method,
			arity,
		} => {
			assert_eq!(type_name, "Game.Door");
			assert_eq!(method, "Close");
			assert_eq!(arity, 0);
		}
		other => panic!("unexpected error: {other}"),
	}
}

#[test]
fn wrong_argument_kind_is_not_found() {
	let mut world = World::new();
	let door = world.door();
	let err = call(door, "Open").with_argument("speed", "fast").invoke_uncached(&world.cx()).unwrap_err();
	assert!(matches!(err, CallError::MethodNotFound { arity: 1, .. }));
}

#[test]
fn container_narrows_to_facet() {
	let mut world = World::new();
	let (holder, light) = world.lamp();
	let toggle = InvokableCall::new(IndirectReference::literal(Some(holder)), "Game.Light", "Toggle")
		.with_argument("on", true);
	let mut cache = CallCache::new();
	toggle.invoke(&mut cache, &world.cx()).unwrap();
	assert_eq!(cache.container(), Some(holder));
	assert_eq!(cache.bound().map(|b| b.target()), Some(light));
	assert_eq!(world.take(), vec!["Light.Toggle(true)"]);
}

#[test]
fn container_without_facet_is_unresolved() {
	let mut world = World::new();
	let door = world.door();
	let toggle = InvokableCall::new(IndirectReference::literal(Some(door)), "Game.Light", "Toggle")
		.with_argument("on", false);
	let err = toggle.invoke_uncached(&world.cx()).unwrap_err();
	assert!(matches!(err, CallError::TargetUnresolved { ref target_type } if target_type == "Game.Light"));
}

#[test]
fn unknown_container_is_unresolved() {
	let world = World::new();
	let err = call(ObjectId(404), "Reset").invoke_uncached(&world.cx()).unwrap_err();
	assert!(matches!(err, CallError::TargetUnresolved { .. }));
}

#[test]
fn removed_target_is_unresolved_even_when_cached() {
	let mut world = World::new();
	let door = world.door();
	let reset = call(door, "Reset");
	let mut cache = CallCache::new();
	reset.invoke(&mut cache, &world.cx()).unwrap();

	assert!(world.arena.remove(door));
	let err = reset.invoke(&mut cache, &world.cx()).unwrap_err();
	assert!(matches!(err, CallError::TargetUnresolved { .. }));
}

#[test]
fn method_errors_pass_through() {
	let mut world = World::new();
	let door = world.door();
	let err = call(door, "Jam").invoke_uncached(&world.cx()).unwrap_err();
	assert_eq!(err.to_string(), "door is jammed");
	match err {
		CallError::Raised(inner) => assert!(inner.downcast_ref::<Jammed>().is_some()),
		other => panic!("unexpected error: {other}"),
	}
}

#[test]
fn exposed_argument_resolves_at_call_time() {
	let mut world = World::new();
	let door = world.door();
	let other = world.door();
	let link = call(door, "Link").with_argument("other", Argument::exposed("partner", None, ObjectType::any()));

	world.table.set("partner".into(), Some(other));
	link.invoke_uncached(&world.cx()).unwrap();
	assert_eq!(world.take(), vec![format!("Door.Link({})", other.as_u64())]);

	world.table.set("partner".into(), None);
	let err = link.invoke_uncached(&world.cx()).unwrap_err();
	match err {
		CallError::ArgumentMismatch { index, expected, found } => {
			assert_eq!(index, 0);
			assert_eq!(expected, ValueType::Object(ObjectType::any()));
			assert_eq!(found, Value::Object(None).kind_name());
		}
		other => panic!("unexpected error: {other}"),
	}
}

#[test]
fn exact_policy_rejects_numeric_mixups() {
	let options = MatchOptions {
		policy: MatchPolicy::Exact,
		..MatchOptions::default()
	};
	let mut world = World::with_options(options);
	let door = world.door();
	let err = call(door, "Foo").with_argument("count", 2.0f32).invoke_uncached(&world.cx()).unwrap_err();
	assert!(matches!(err, CallError::MethodNotFound { .. }));

	call(door, "Foo").with_argument("count", 2).invoke_uncached(&world.cx()).unwrap();
	assert_eq!(world.take(), vec!["Door.Foo(int 2)"]);
}

#[test]
fn describe_lists_declared_types() {
	let call = call(ObjectId(1), "Open").with_argument("speed", 1.0f32).with_argument("label", "x");
	assert_eq!(call.describe(), "Game.Door.Open(f32, String)");
}

#[test]
fn edited_argument_types_rebind() {
	let mut world = World::new();
	let door = world.door();
	let mut foo = call(door, "Foo").with_argument("text", "ajar");
	let mut cache = CallCache::new();
	foo.invoke(&mut cache, &world.cx()).unwrap();

	foo.arguments[0] = ArgumentContainer::new("count", 4);
	foo.invoke(&mut cache, &world.cx()).unwrap();
	assert_eq!(world.registry.lookup_count(), 2);

	foo.arguments[0] = ArgumentContainer::new("count", 5);
	foo.invoke(&mut cache, &world.cx()).unwrap();
	assert_eq!(world.registry.lookup_count(), 2);
	assert_eq!(world.take(), vec!["Door.Foo(string ajar)", "Door.Foo(int 4)", "Door.Foo(int 5)"]);
}
