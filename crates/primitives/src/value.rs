use serde::{Deserialize, Serialize};

use crate::{
	Color, Color32, Curve, Gradient, LayerMask, Matrix4x4, ObjectId, Quaternion, Rect, RectOffset, Style, Vector2,
	Vector3, Vector4,
};

/// Declared runtime type of an object-typed argument or parameter.
///
/// `module` names the crate or plugin that registered the type, so two
/// hosts' types with equal names can be told apart by authoring tools.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectType {
	pub type_name: String,
	pub module: String,
}

impl ObjectType {
	/// Type name of the wildcard object type, accepted by any object parameter.
	pub const ANY: &'static str = "Object";

	pub fn new(type_name: impl Into<String>, module: impl Into<String>) -> Self {
		Self {
			type_name: type_name.into(),
			module: module.into(),
		}
	}

	/// The wildcard object type.
	pub fn any() -> Self {
		Self::new(Self::ANY, "")
	}

	pub fn is_any(&self) -> bool {
		self.type_name == Self::ANY
	}
}

/// Declared type of an argument or method parameter.
///
/// This is the closed set of kinds an argument container can hold.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
	Int,
	Float,
	Double,
	Bool,
	String,
	Vector2,
	Vector3,
	Vector4,
	Rect,
	Quaternion,
	Matrix4x4,
	Color,
	Color32,
	LayerMask,
	Curve,
	Gradient,
	RectOffset,
	Style,
	Object(ObjectType),
}

impl ValueType {
	/// Primitive numeric or boolean kinds. Strings, aggregates and objects are not primitive.
	pub const fn is_primitive(&self) -> bool {
		matches!(self, Self::Int | Self::Float | Self::Double | Self::Bool)
	}

	pub const fn is_numeric(&self) -> bool {
		matches!(self, Self::Int | Self::Float | Self::Double)
	}

	/// Short display name used in method labels.
	pub fn name(&self) -> &str {
		match self {
			Self::Int => "i32",
			Self::Float => "f32",
			Self::Double => "f64",
			Self::Bool => "bool",
			Self::String => "String",
			Self::Vector2 => "Vector2",
			Self::Vector3 => "Vector3",
			Self::Vector4 => "Vector4",
			Self::Rect => "Rect",
			Self::Quaternion => "Quaternion",
			Self::Matrix4x4 => "Matrix4x4",
			Self::Color => "Color",
			Self::Color32 => "Color32",
			Self::LayerMask => "LayerMask",
			Self::Curve => "Curve",
			Self::Gradient => "Gradient",
			Self::RectOffset => "RectOffset",
			Self::Style => "Style",
			Self::Object(ty) => ty.type_name.rsplit('.').next().unwrap_or(&ty.type_name),
		}
	}
}

impl std::fmt::Display for ValueType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Object(ty) => f.write_str(&ty.type_name),
			other => f.write_str(other.name()),
		}
	}
}

/// An evaluated argument, ready to be passed to a bound method.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
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
	/// Object handle; `None` is a null reference.
	Object(Option<ObjectId>),
}

impl Value {
	/// Name of the value's kind, matching [`ValueType::name`] for non-object kinds.
	pub fn kind_name(&self) -> &'static str {
		match self {
			Self::Int(_) => "i32",
			Self::Float(_) => "f32",
			Self::Double(_) => "f64",
			Self::Bool(_) => "bool",
			Self::String(_) => "String",
			Self::Vector2(_) => "Vector2",
			Self::Vector3(_) => "Vector3",
			Self::Vector4(_) => "Vector4",
			Self::Rect(_) => "Rect",
			Self::Quaternion(_) => "Quaternion",
			Self::Matrix4x4(_) => "Matrix4x4",
			Self::Color(_) => "Color",
			Self::Color32(_) => "Color32",
			Self::LayerMask(_) => "LayerMask",
			Self::Curve(_) => "Curve",
			Self::Gradient(_) => "Gradient",
			Self::RectOffset(_) => "RectOffset",
			Self::Style(_) => "Style",
			Self::Object(_) => "Object",
		}
	}

	/// Numeric view of primitive numeric values.
	pub fn as_f64(&self) -> Option<f64> {
		match *self {
			Self::Int(v) => Some(f64::from(v)),
			Self::Float(v) => Some(f64::from(v)),
			Self::Double(v) => Some(v),
			_ => None,
		}
	}

	/// Default value of a declared type: zero, empty, identity or null.
	pub fn default_for(ty: &ValueType) -> Self {
		match ty {
			ValueType::Int => Self::Int(0),
			ValueType::Float => Self::Float(0.0),
			ValueType::Double => Self::Double(0.0),
			ValueType::Bool => Self::Bool(false),
			ValueType::String => Self::String(String::new()),
			ValueType::Vector2 => Self::Vector2(Vector2::default()),
			ValueType::Vector3 => Self::Vector3(Vector3::default()),
			ValueType::Vector4 => Self::Vector4(Vector4::default()),
			ValueType::Rect => Self::Rect(Rect::default()),
			ValueType::Quaternion => Self::Quaternion(Quaternion::IDENTITY),
			ValueType::Matrix4x4 => Self::Matrix4x4(Matrix4x4::IDENTITY),
			ValueType::Color => Self::Color(Color::default()),
			ValueType::Color32 => Self::Color32(Color32::default()),
			ValueType::LayerMask => Self::LayerMask(LayerMask::default()),
			ValueType::Curve => Self::Curve(Curve::default()),
			ValueType::Gradient => Self::Gradient(Gradient::default()),
			ValueType::RectOffset => Self::RectOffset(RectOffset::default()),
			ValueType::Style => Self::Style(Style::default()),
			ValueType::Object(_) => Self::Object(None),
		}
	}
}
