use pretty_assertions::assert_eq;
use tether_invocation::authoring::{self, MethodChoice};
use tether_invocation::{Argument, ArgumentContainer, CallCache, InvokableCall};
use tether_primitives::{ObjectType, ValueType};
use tether_reference::{IndirectReference, ReferenceResolver};

use crate::common::World;

fn find<'a>(choices: &'a [MethodChoice], label: &str) -> &'a MethodChoice {
	choices.iter().find(|c| c.label == label).unwrap()
}

#[test]
fn overloads_get_nested_labels() {
	let mut world = World::new();
	let door = world.door();
	let choices = authoring::browse(&world.arena, &world.registry, door);
	let labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();
	assert_eq!(
		&labels[..6],
		&[
			"Game.Door/Foo/Foo(String)",
			"Game.Door/Foo/Foo(i32)",
			"Game.Door/Jam()",
			"Game.Door/Link(Object)",
			"Game.Door/Open(f32)",
			"Game.Door/Reset()",
		]
	);
	assert_eq!(choices.len(), 7);
	assert_eq!(find(&choices, "Game.Door/Reset()").signature.declared_on, "Game.Base");
}

#[test]
fn facets_are_listed_from_the_root() {
	let mut world = World::new();
	let (holder, light) = world.lamp();
	let from_holder = authoring::browse(&world.arena, &world.registry, holder);
	let from_light = authoring::browse(&world.arena, &world.registry, light);
	assert_eq!(from_holder, from_light);

	let labels: Vec<&str> = from_holder.iter().map(|c| c.label.as_str()).collect();
	assert_eq!(labels, vec!["Game.Holder/Ping()", "Game.Light/Toggle(bool)"]);
	assert_eq!(from_holder[1].target, light);
	assert_eq!(from_holder[1].type_name, "Game.Light");
}

#[test]
fn chosen_method_becomes_a_default_call() {
	let mut world = World::new();
	let door = world.door();
	let choices = authoring::browse(&world.arena, &world.registry, door);
	let call = find(&choices, "Game.Door/Open(f32)").to_call(IndirectReference::literal(Some(door)));
	assert_eq!(call.target_type, "Game.Door");
	assert_eq!(call.method, "Open");
	assert_eq!(call.arguments, vec![ArgumentContainer::new("speed", 0.0f32)]);

	call.invoke_uncached(&world.cx()).unwrap();
	assert_eq!(world.take(), vec!["Door.Open(0)"]);
}

#[test]
fn object_parameters_become_exposed_arguments() {
	let mut world = World::new();
	let door = world.door();
	let other = world.door();
	let choices = authoring::browse(&world.arena, &world.registry, door);
	let mut call = find(&choices, "Game.Door/Link(Object)").to_call(IndirectReference::literal(Some(door)));
	assert_eq!(
		call.arguments[0].argument,
		Argument::Exposed {
			reference: IndirectReference::default(),
			object_type: ObjectType::any(),
		}
	);

	call.arguments[0].argument = Argument::exposed("partner", None, ObjectType::any());
	world.table.set("partner".into(), Some(other));
	call.invoke_uncached(&world.cx()).unwrap();
	assert_eq!(world.take(), vec![format!("Door.Link({})", other.as_u64())]);
}

#[test]
fn reapplying_keeps_compatible_arguments() {
	let mut world = World::new();
	let door = world.door();
	let choices = authoring::browse(&world.arena, &world.registry, door);
	let mut call =
		InvokableCall::new(IndirectReference::literal(Some(door)), "Game.Door", "Foo").with_argument("x", 5);

	find(&choices, "Game.Door/Foo/Foo(i32)").apply(&mut call);
	assert_eq!(call.arguments, vec![ArgumentContainer::new("count", 5)]);

	find(&choices, "Game.Door/Foo/Foo(String)").apply(&mut call);
	assert_eq!(call.arguments, vec![ArgumentContainer::new("text", "")]);
	assert_eq!(call.declared_types(), vec![ValueType::String]);

	find(&choices, "Game.Door/Reset()").apply(&mut call);
	assert_eq!(call.method, "Reset");
	assert!(call.arguments.is_empty());
}

#[test]
fn retargeted_call_rebinds_with_the_same_cache() {
	let mut world = World::new();
	let door = world.door();
	let choices = authoring::browse(&world.arena, &world.registry, door);
	let mut call =
		InvokableCall::new(IndirectReference::literal(Some(door)), "Game.Door", "Foo").with_argument("count", 3);
	let mut cache = CallCache::new();
	call.invoke(&mut cache, &world.cx()).unwrap();

	find(&choices, "Game.Door/Open(f32)").apply(&mut call);
	call.invoke(&mut cache, &world.cx()).unwrap();
	assert_eq!(world.take(), vec!["Door.Foo(int 3)", "Door.Open(0)"]);
	assert_eq!(cache.bound().map(|b| b.method_name()), Some("Open"));
	assert_eq!(world.registry.lookup_count(), 2);
}
