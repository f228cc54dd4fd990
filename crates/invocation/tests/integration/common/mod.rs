//! Shared host fixture: a small object graph of doors and lights with a
//! journal recording every method body that ran.

use std::sync::{Arc, Mutex};

use tether_invocation::InvokeContext;
use tether_primitives::{ObjectArena, ObjectId};
use tether_reference::ReferenceTable;
use tether_registry::{MatchOptions, TypeDef, TypeRegistry};

pub type Journal = Arc<Mutex<Vec<String>>>;

#[derive(Debug, thiserror::Error)]
#[error("door is jammed")]
pub struct Jammed;

pub struct Base {
	journal: Journal,
}

impl Base {
	fn note(&self, entry: String) {
		self.journal.lock().unwrap().push(entry);
	}

	fn reset(&self) {
		self.note("Base.Reset".into());
	}

	fn foo(&self, v: i32) {
		self.note(format!("Base.Foo({v})"));
	}
}

pub struct Door {
	base: Base,
}

impl Door {
	fn foo_int(&self, v: i32) {
		self.base.note(format!("Door.Foo(int {v})"));
	}

	fn foo_string(&self, v: String) {
		self.base.note(format!("Door.Foo(string {v})"));
	}

	fn open(&self, speed: f32) {
		self.base.note(format!("Door.Open({speed})"));
	}

	fn jam(&self) -> Result<(), Jammed> {
		Err(Jammed)
	}

	fn link(&self, other: ObjectId) {
		self.base.note(format!("Door.Link({})", other.as_u64()));
	}

	#[allow(clippy::too_many_arguments)]
	fn wide(
		&self,
		a0: i32,
		a1: i32,
		a2: i32,
		a3: i32,
		a4: i32,
		a5: i32,
		a6: i32,
		a7: i32,
		a8: i32,
		a9: i32,
		a10: i32,
		a11: i32,
		a12: i32,
		a13: i32,
		a14: i32,
		a15: i32,
	) {
		let sum = a0 + a1 + a2 + a3 + a4 + a5 + a6 + a7 + a8 + a9 + a10 + a11 + a12 + a13 + a14 + a15;
		self.base.note(format!("Door.Wide({sum})"));
	}
}

pub struct Light {
	journal: Journal,
}

impl Light {
	fn toggle(&self, on: bool) {
		self.journal.lock().unwrap().push(format!("Light.Toggle({on})"));
	}
}

pub struct Holder;

impl Holder {
	fn ping(&self) {}
}

pub fn registry(options: MatchOptions) -> TypeRegistry {
	TypeRegistry::builder()
		.options(options)
		.register(
			TypeDef::<Base>::new("Game.Base", "game")
				.method("Reset", Base::reset)
				.method("Foo", Base::foo),
		)
		.register(
			TypeDef::<Door>::new("Game.Door", "game")
				.extends("Game.Base", |d: &Door| &d.base)
				.method_with_labels("Foo", &["text"], Door::foo_string)
				.method_with_labels("Foo", &["count"], Door::foo_int)
				.method_with_labels("Open", &["speed"], Door::open)
				.method("Jam", Door::jam)
				.method_with_labels("Link", &["other"], Door::link)
				.method("Wide", Door::wide),
		)
		.register(TypeDef::<Light>::new("Game.Light", "game").method_with_labels("Toggle", &["on"], Light::toggle))
		.register(TypeDef::<Holder>::new("Game.Holder", "game").method("Ping", Holder::ping))
		.build()
		.unwrap()
}

pub struct World {
	pub registry: TypeRegistry,
	pub arena: ObjectArena,
	pub table: ReferenceTable,
	pub journal: Journal,
}

impl World {
	pub fn new() -> Self {
		Self::with_options(MatchOptions::default())
	}

	pub fn with_options(options: MatchOptions) -> Self {
		Self {
			registry: registry(options),
			arena: ObjectArena::new(),
			table: ReferenceTable::new(),
			journal: Journal::default(),
		}
	}

	pub fn cx(&self) -> InvokeContext<'_> {
		InvokeContext::new(&self.registry, &self.arena, &self.table)
	}

	pub fn door(&mut self) -> ObjectId {
		let base = Base {
			journal: self.journal.clone(),
		};
		self.arena.insert("Game.Door", Door { base })
	}

	/// A holder with a light facet.
	pub fn lamp(&mut self) -> (ObjectId, ObjectId) {
		let holder = self.arena.insert("Game.Holder", Holder);
		let light = Light {
			journal: self.journal.clone(),
		};
		let light = self.arena.attach(holder, "Game.Light", light).unwrap();
		(holder, light)
	}

	/// Drains the journal.
	pub fn take(&self) -> Vec<String> {
		std::mem::take(&mut *self.journal.lock().unwrap())
	}
}
