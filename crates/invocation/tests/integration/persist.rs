use pretty_assertions::assert_eq;
use tether_invocation::persist::{self, PersistError};
use tether_invocation::{Argument, EventList, EventSlots, InvokableCall};
use tether_primitives::{Color, LayerMask, ObjectId, ObjectType, Vector3};
use tether_reference::{IndirectReference, ReferenceResolver};

use crate::common::World;

fn sample(door: ObjectId) -> EventList {
	[
		InvokableCall::new(IndirectReference::named("door", Some(door)), "Game.Door", "Open")
			.with_argument("speed", 2.0f32),
		InvokableCall::new(IndirectReference::literal(Some(door)), "Game.Door", "Link").with_argument(
			"other",
			Argument::exposed("partner", Some(door), ObjectType::new("Game.Door", "game")),
		),
		InvokableCall::new(IndirectReference::literal(None), "Game.Light", "Tint")
			.with_argument("color", Color::WHITE)
			.with_argument("mask", LayerMask(0b101))
			.with_argument("at", Vector3 { x: 1.0, y: 2.0, z: 3.0 })
			.with_argument("note", "warm"),
	]
	.into_iter()
	.collect()
}

#[test]
fn json_round_trip_keeps_every_field() {
	let list = sample(ObjectId(9));
	let json = persist::to_json(&list).unwrap();
	let back: EventList = persist::from_json(&json).unwrap();
	assert_eq!(back, list);
}

#[test]
fn json_shape_of_references() {
	let list = sample(ObjectId(9));
	let value: serde_json::Value = serde_json::from_str(&persist::to_json(&list).unwrap()).unwrap();
	let first = &value["calls"][0];
	assert_eq!(first["target"]["default_value"], 9);
	assert_eq!(first["target"]["key"], "door");
	assert_eq!(first["arguments"][0]["argument"]["Float"], 2.0);
	assert_eq!(value["calls"][2]["target"]["key"], "");
	assert!(first.get("cache").is_none());
}

#[test]
fn binary_round_trip() {
	let list = sample(ObjectId(4));
	let bytes = persist::to_bytes(&list).unwrap();
	let back: EventList = persist::from_bytes(&bytes).unwrap();
	assert_eq!(back, list);
}

#[test]
fn missing_arguments_default_to_empty() {
	let json = r#"{
		"calls": [
			{ "target": { "default_value": null, "key": "door" }, "target_type": "Game.Door", "method": "Reset" }
		]
	}"#;
	let list: EventList = persist::from_json(json).unwrap();
	assert_eq!(list.calls[0].arguments.len(), 0);
	assert_eq!(list.calls[0].target, IndirectReference::named("door", None));
}

#[test]
fn malformed_input_is_reported() {
	assert!(matches!(persist::from_json::<EventList>("{"), Err(PersistError::Json(_))));
	assert!(matches!(persist::from_bytes::<EventList>(&[0xff, 0xff]), Err(PersistError::Binary(_))));
}

#[test]
fn loaded_list_binds_afresh() {
	let mut world = World::new();
	let door = world.door();
	let list: EventList = [
		InvokableCall::new(IndirectReference::named("door", None), "Game.Door", "Open").with_argument("speed", 1.5f32),
	]
	.into_iter()
	.collect();
	let mut slots = EventSlots::new();
	world.table.set("door".into(), Some(door));
	list.invoke(&mut slots, &world.cx()).unwrap();

	let loaded: EventList = persist::from_bytes(&persist::to_bytes(&list).unwrap()).unwrap();
	let mut fresh = EventSlots::new();
	loaded.invoke(&mut fresh, &world.cx()).unwrap();
	assert_eq!(world.registry.lookup_count(), 2);
	assert_eq!(world.take(), vec!["Door.Open(1.5)", "Door.Open(1.5)"]);
}
