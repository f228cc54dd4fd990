use tether_primitives::{
	Color, Color32, Curve, Gradient, LayerMask, Matrix4x4, ObjectId, ObjectType, Quaternion, Rect, RectOffset, Style,
	Value, ValueType, Vector2, Vector3, Vector4,
};

/// Error type returned by failing method bodies.
pub type MethodError = Box<dyn std::error::Error + Send + Sync>;

/// A method parameter type that can be filled from an evaluated [`Value`].
///
/// Primitive numeric parameters accept any primitive numeric value and
/// convert it with `as` semantics, since the default match policy pairs
/// arguments and parameters by primitiveness only. Every other parameter
/// demands its own value kind.
///
/// Hosts implement this for their own object reference newtypes to declare
/// a concrete object type:
///
/// ```
/// use tether_primitives::{ObjectId, ObjectType, Value, ValueType};
/// use tether_registry::Param;
///
/// struct DoorRef(ObjectId);
///
/// impl Param for DoorRef {
/// 	fn value_type() -> ValueType {
/// 		ValueType::Object(ObjectType::new("Game.Door", "game"))
/// 	}
///
/// 	fn from_value(value: &Value) -> Option<Self> {
/// 		match value {
/// 			Value::Object(Some(id)) => Some(Self(*id)),
/// 			_ => None,
/// 		}
/// 	}
/// }
/// ```
pub trait Param: Sized {
	/// Declared type reported for matching and authoring.
	fn value_type() -> ValueType;

	/// Converts an evaluated argument, or `None` if it doesn't fit.
	fn from_value(value: &Value) -> Option<Self>;
}

impl Param for i32 {
	fn value_type() -> ValueType {
		ValueType::Int
	}

	fn from_value(value: &Value) -> Option<Self> {
		match *value {
			Value::Int(v) => Some(v),
			Value::Float(v) => Some(v as i32),
			Value::Double(v) => Some(v as i32),
			_ => None,
		}
	}
}

impl Param for f32 {
	fn value_type() -> ValueType {
		ValueType::Float
	}

	fn from_value(value: &Value) -> Option<Self> {
		match *value {
			Value::Float(v) => Some(v),
			Value::Int(v) => Some(v as f32),
			Value::Double(v) => Some(v as f32),
			_ => None,
		}
	}
}

impl Param for f64 {
	fn value_type() -> ValueType {
		ValueType::Double
	}

	fn from_value(value: &Value) -> Option<Self> {
		match *value {
			Value::Double(v) => Some(v),
			Value::Int(v) => Some(f64::from(v)),
			Value::Float(v) => Some(f64::from(v)),
			_ => None,
		}
	}
}

impl Param for bool {
	fn value_type() -> ValueType {
		ValueType::Bool
	}

	fn from_value(value: &Value) -> Option<Self> {
		match *value {
			Value::Bool(v) => Some(v),
			_ => None,
		}
	}
}

/// Object parameter accepting any live object; a null argument doesn't fit.
impl Param for ObjectId {
	fn value_type() -> ValueType {
		ValueType::Object(ObjectType::any())
	}

	fn from_value(value: &Value) -> Option<Self> {
		match *value {
			Value::Object(id) => id,
			_ => None,
		}
	}
}

/// Nullable object parameter.
impl Param for Option<ObjectId> {
	fn value_type() -> ValueType {
		ValueType::Object(ObjectType::any())
	}

	fn from_value(value: &Value) -> Option<Self> {
		match *value {
			Value::Object(id) => Some(id),
			_ => None,
		}
	}
}

macro_rules! exact_param {
	($($ty:ident),* $(,)?) => {
		$(
			impl Param for $ty {
				fn value_type() -> ValueType {
					ValueType::$ty
				}

				fn from_value(value: &Value) -> Option<Self> {
					match value {
						Value::$ty(v) => Some(v.clone()),
						_ => None,
					}
				}
			}
		)*
	};
}

exact_param!(
	String, Vector2, Vector3, Vector4, Rect, Quaternion, Matrix4x4, Color, Color32, LayerMask, Curve, Gradient,
	RectOffset, Style,
);

/// Return types accepted from method bodies.
pub trait MethodOutcome {
	fn into_outcome(self) -> Result<(), MethodError>;
}

impl MethodOutcome for () {
	fn into_outcome(self) -> Result<(), MethodError> {
		Ok(())
	}
}

impl<E: Into<MethodError>> MethodOutcome for Result<(), E> {
	fn into_outcome(self) -> Result<(), MethodError> {
		self.map_err(Into::into)
	}
}
