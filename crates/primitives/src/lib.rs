//! Core types shared by the tether crates: object identity, the host object
//! graph capability, and the closed value model used for call arguments.

/// Reference host object graph with composite facets.
pub mod arena;
/// Colour, gradient and layer mask values.
pub mod color;
/// Keyframed curves.
pub mod curve;
/// Fixed-size vector, rectangle, quaternion and matrix values.
pub mod geometry;
/// The host object graph capability.
pub mod graph;
/// Identifier types for objects in the host graph.
pub mod ids;
/// Style-like aggregate values.
pub mod style;
/// Runtime values and their declared types.
pub mod value;

pub use arena::ObjectArena;
pub use color::{AlphaKey, Color, Color32, ColorKey, Gradient, LayerMask};
pub use curve::{Curve, Keyframe};
pub use geometry::{Matrix4x4, Quaternion, Rect, RectOffset, Vector2, Vector3, Vector4};
pub use graph::ObjectGraph;
pub use ids::ObjectId;
pub use style::{Alignment, Style};
pub use value::{ObjectType, Value, ValueType};
