use serde::{Deserialize, Serialize};
use tether_primitives::{
	Color, Color32, Curve, Gradient, LayerMask, Matrix4x4, ObjectId, ObjectType, Quaternion, Rect, RectOffset, Style,
	Value, ValueType, Vector2, Vector3, Vector4,
};
use tether_reference::{IndirectReference, ReferenceResolver};

/// One labelled argument of an [`InvokableCall`](crate::InvokableCall).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentContainer {
	/// Parameter label shown by authoring tools. Not used for matching.
	#[serde(default)]
	pub label: String,
	pub argument: Argument,
}

impl ArgumentContainer {
	pub fn new(label: impl Into<String>, argument: impl Into<Argument>) -> Self {
		Self {
			label: label.into(),
			argument: argument.into(),
		}
	}

	/// Declared type of the held argument, known without evaluating it.
	pub fn declared_type(&self) -> ValueType {
		self.argument.declared_type()
	}

	/// Produces the runtime value, resolving indirect object arguments.
	pub fn evaluate<R: ReferenceResolver + ?Sized>(&self, resolver: &R) -> Value {
		self.argument.evaluate(resolver)
	}
}

/// Stored argument value.
///
/// Every kind a method parameter can declare has a literal variant. Object
/// arguments come in two forms: a literal handle, or an
/// [`IndirectReference`] resolved at invocation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Argument {
	Int(i32),
	Float(f32),
	Double(f64),
	Bool(bool),
	String(String),
	Vector2(Vector2),
	Vector3(Vector3),
	Vector4(Vector4),
	Rect(Rect),
	Quaternion(Quaternion),
	Matrix4x4(Matrix4x4),
	Color(Color),
	Color32(Color32),
	LayerMask(LayerMask),
	Curve(Curve),
	Gradient(Gradient),
	RectOffset(RectOffset),
	Style(Style),
	Object {
		value: Option<ObjectId>,
		object_type: ObjectType,
	},
	Exposed {
		reference: IndirectReference,
		object_type: ObjectType,
	},
}

impl Argument {
	/// A literal argument holding `value`. Object handles get the wildcard
	/// object type.
	pub fn literal(value: Value) -> Self {
		match value {
			Value::Int(v) => Self::Int(v),
			Value::Float(v) => Self::Float(v),
			Value::Double(v) => Self::Double(v),
			Value::Bool(v) => Self::Bool(v),
			Value::String(v) => Self::String(v),
			Value::Vector2(v) => Self::Vector2(v),
			Value::Vector3(v) => Self::Vector3(v),
			Value::Vector4(v) => Self::Vector4(v),
			Value::Rect(v) => Self::Rect(v),
			Value::Quaternion(v) => Self::Quaternion(v),
			Value::Matrix4x4(v) => Self::Matrix4x4(v),
			Value::Color(v) => Self::Color(v),
			Value::Color32(v) => Self::Color32(v),
			Value::LayerMask(v) => Self::LayerMask(v),
			Value::Curve(v) => Self::Curve(v),
			Value::Gradient(v) => Self::Gradient(v),
			Value::RectOffset(v) => Self::RectOffset(v),
			Value::Style(v) => Self::Style(v),
			Value::Object(value) => Self::Object {
				value,
				object_type: ObjectType::any(),
			},
		}
	}

	/// A default-valued argument for a parameter declared as `ty`.
	///
	/// Object parameters get an indirect reference with no key and a null
	/// default, ready to be pointed at a resolver entry.
	pub fn default_for(ty: &ValueType) -> Self {
		match ty {
			ValueType::Object(object_type) => Self::Exposed {
				reference: IndirectReference::default(),
				object_type: object_type.clone(),
			},
			other => Self::literal(Value::default_for(other)),
		}
	}

	/// Indirect object argument looked up by `key`, falling back to `fallback`.
	pub fn exposed(key: &str, fallback: Option<ObjectId>, object_type: ObjectType) -> Self {
		Self::Exposed {
			reference: IndirectReference::named(key, fallback),
			object_type,
		}
	}

	pub fn is_indirect(&self) -> bool {
		matches!(self, Self::Exposed { .. })
	}

	pub fn declared_type(&self) -> ValueType {
		match self {
			Self::Int(_) => ValueType::Int,
			Self::Float(_) => ValueType::Float,
			Self::Double(_) => ValueType::Double,
			Self::Bool(_) => ValueType::Bool,
			Self::String(_) => ValueType::String,
			Self::Vector2(_) => ValueType::Vector2,
			Self::Vector3(_) => ValueType::Vector3,
			Self::Vector4(_) => ValueType::Vector4,
			Self::Rect(_) => ValueType::Rect,
			Self::Quaternion(_) => ValueType::Quaternion,
			Self::Matrix4x4(_) => ValueType::Matrix4x4,
			Self::Color(_) => ValueType::Color,
			Self::Color32(_) => ValueType::Color32,
			Self::LayerMask(_) => ValueType::LayerMask,
			Self::Curve(_) => ValueType::Curve,
			Self::Gradient(_) => ValueType::Gradient,
			Self::RectOffset(_) => ValueType::RectOffset,
			Self::Style(_) => ValueType::Style,
			Self::Object { object_type, .. } | Self::Exposed { object_type, .. } => {
				ValueType::Object(object_type.clone())
			}
		}
	}

	pub fn evaluate<R: ReferenceResolver + ?Sized>(&self, resolver: &R) -> Value {
		match self {
			Self::Int(v) => Value::Int(*v),
			Self::Float(v) => Value::Float(*v),
			Self::Double(v) => Value::Double(*v),
			Self::Bool(v) => Value::Bool(*v),
			Self::String(v) => Value::String(v.clone()),
			Self::Vector2(v) => Value::Vector2(*v),
			Self::Vector3(v) => Value::Vector3(*v),
			Self::Vector4(v) => Value::Vector4(*v),
			Self::Rect(v) => Value::Rect(*v),
			Self::Quaternion(v) => Value::Quaternion(*v),
			Self::Matrix4x4(v) => Value::Matrix4x4(*v),
			Self::Color(v) => Value::Color(*v),
			Self::Color32(v) => Value::Color32(*v),
			Self::LayerMask(v) => Value::LayerMask(*v),
			Self::Curve(v) => Value::Curve(v.clone()),
			Self::Gradient(v) => Value::Gradient(v.clone()),
			Self::RectOffset(v) => Value::RectOffset(*v),
			Self::Style(v) => Value::Style(v.clone()),
			Self::Object { value, .. } => Value::Object(*value),
			Self::Exposed { reference, .. } => Value::Object(reference.resolve(resolver)),
		}
	}
}

macro_rules! literal_from {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<$ty> for Argument {
				fn from(value: $ty) -> Self {
					Self::$variant(value)
				}
			}
		)*
	};
}

literal_from!(
	i32 => Int,
	f32 => Float,
	f64 => Double,
	bool => Bool,
	String => String,
	Vector2 => Vector2,
	Vector3 => Vector3,
	Vector4 => Vector4,
	Rect => Rect,
	Quaternion => Quaternion,
	Matrix4x4 => Matrix4x4,
	Color => Color,
	Color32 => Color32,
	LayerMask => LayerMask,
	Curve => Curve,
	Gradient => Gradient,
	RectOffset => RectOffset,
	Style => Style,
);

impl From<&str> for Argument {
	fn from(value: &str) -> Self {
		Self::String(value.to_owned())
	}
}
