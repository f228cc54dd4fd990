use serde::{Deserialize, Serialize};

/// Linear RGBA colour with float channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
	pub r: f32,
	pub g: f32,
	pub b: f32,
	pub a: f32,
}

impl Color {
	pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
	pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

	pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
		Self { r, g, b, a }
	}

	/// Component-wise linear interpolation, `t` clamped to `0.0..=1.0`.
	pub fn lerp(self, other: Self, t: f32) -> Self {
		let t = t.clamp(0.0, 1.0);
		Self {
			r: self.r + (other.r - self.r) * t,
			g: self.g + (other.g - self.g) * t,
			b: self.b + (other.b - self.b) * t,
			a: self.a + (other.a - self.a) * t,
		}
	}
}

/// 8-bit-per-channel RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color32 {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: u8,
}

impl Color32 {
	pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self { r, g, b, a }
	}
}

impl From<Color32> for Color {
	fn from(c: Color32) -> Self {
		Self::new(
			f32::from(c.r) / 255.0,
			f32::from(c.g) / 255.0,
			f32::from(c.b) / 255.0,
			f32::from(c.a) / 255.0,
		)
	}
}

impl From<Color> for Color32 {
	fn from(c: Color) -> Self {
		let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
		Self::new(q(c.r), q(c.g), q(c.b), q(c.a))
	}
}

/// Bit set of 32 layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
	/// Returns true if `layer` (0..32) is set. Out-of-range layers are never set.
	pub fn contains(self, layer: u32) -> bool {
		layer < 32 && self.0 & (1 << layer) != 0
	}

	pub fn with(self, layer: u32) -> Self {
		if layer < 32 { Self(self.0 | (1 << layer)) } else { self }
	}
}

/// Colour stop of a [`Gradient`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorKey {
	pub color: Color,
	pub time: f32,
}

/// Alpha stop of a [`Gradient`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlphaKey {
	pub alpha: f32,
	pub time: f32,
}

/// Colour gradient with independent colour and alpha stops.
///
/// Stops are kept sorted by time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Gradient {
	pub color_keys: Vec<ColorKey>,
	pub alpha_keys: Vec<AlphaKey>,
}

impl Gradient {
	pub fn new(mut color_keys: Vec<ColorKey>, mut alpha_keys: Vec<AlphaKey>) -> Self {
		color_keys.sort_by(|a, b| a.time.total_cmp(&b.time));
		alpha_keys.sort_by(|a, b| a.time.total_cmp(&b.time));
		Self { color_keys, alpha_keys }
	}

	/// Samples the gradient at `time`. An empty gradient is opaque white.
	pub fn evaluate(&self, time: f32) -> Color {
		let rgb = sample(&self.color_keys, time, |k| k.time, |k| k.color, Color::lerp).unwrap_or(Color::WHITE);
		let a = sample(&self.alpha_keys, time, |k| k.time, |k| k.alpha, |x, y, t| x + (y - x) * t).unwrap_or(1.0);
		Color { a, ..rgb }
	}
}

fn sample<K, V: Copy>(
	keys: &[K],
	time: f32,
	key_time: impl Fn(&K) -> f32,
	key_value: impl Fn(&K) -> V,
	lerp: impl Fn(V, V, f32) -> V,
) -> Option<V> {
	let first = keys.first()?;
	if time <= key_time(first) {
		return Some(key_value(first));
	}
	for pair in keys.windows(2) {
		let (lo, hi) = (&pair[0], &pair[1]);
		if time <= key_time(hi) {
			let span = key_time(hi) - key_time(lo);
			let t = if span > 0.0 { (time - key_time(lo)) / span } else { 1.0 };
			return Some(lerp(key_value(lo), key_value(hi), t));
		}
	}
	keys.last().map(key_value)
}
