use serde::{Deserialize, Serialize};

/// Two-component vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
	pub x: f32,
	pub y: f32,
}

/// Three-component vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
	pub x: f32,
	pub y: f32,
	pub z: f32,
}

/// Four-component vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector4 {
	pub x: f32,
	pub y: f32,
	pub z: f32,
	pub w: f32,
}

impl Vector2 {
	pub const fn new(x: f32, y: f32) -> Self {
		Self { x, y }
	}
}

impl Vector3 {
	pub const fn new(x: f32, y: f32, z: f32) -> Self {
		Self { x, y, z }
	}
}

impl Vector4 {
	pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
		Self { x, y, z, w }
	}
}

/// Axis-aligned rectangle given by its minimum corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
	pub x: f32,
	pub y: f32,
	pub width: f32,
	pub height: f32,
}

impl Rect {
	pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
		Self { x, y, width, height }
	}

	/// Returns true if `point` lies inside the rectangle (minimum edges inclusive).
	pub fn contains(&self, point: Vector2) -> bool {
		point.x >= self.x && point.x < self.x + self.width && point.y >= self.y && point.y < self.y + self.height
	}
}

/// Rotation quaternion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
	pub x: f32,
	pub y: f32,
	pub z: f32,
	pub w: f32,
}

impl Quaternion {
	pub const IDENTITY: Self = Self {
		x: 0.0,
		y: 0.0,
		z: 0.0,
		w: 1.0,
	};
}

impl Default for Quaternion {
	fn default() -> Self {
		Self::IDENTITY
	}
}

/// Column-major 4x4 matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix4x4 {
	pub m: [f32; 16],
}

impl Matrix4x4 {
	pub const IDENTITY: Self = Self {
		m: [
			1.0, 0.0, 0.0, 0.0, //
			0.0, 1.0, 0.0, 0.0, //
			0.0, 0.0, 1.0, 0.0, //
			0.0, 0.0, 0.0, 1.0,
		],
	};

	/// Element at `row`, `column`, or `None` outside the 4x4 range.
	#[inline]
	pub fn get(&self, row: usize, column: usize) -> Option<f32> {
		if row < 4 && column < 4 { Some(self.m[column * 4 + row]) } else { None }
	}
}

impl Default for Matrix4x4 {
	fn default() -> Self {
		Self::IDENTITY
	}
}

/// Integer insets on each edge of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RectOffset {
	pub left: i32,
	pub right: i32,
	pub top: i32,
	pub bottom: i32,
}

impl RectOffset {
	pub const fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
		Self { left, right, top, bottom }
	}

	pub const fn horizontal(&self) -> i32 {
		self.left + self.right
	}

	pub const fn vertical(&self) -> i32 {
		self.top + self.bottom
	}
}
