use serde::{Deserialize, Serialize};

/// A single key of a [`Curve`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Keyframe {
	pub time: f32,
	pub value: f32,
	pub in_tangent: f32,
	pub out_tangent: f32,
}

impl Keyframe {
	pub const fn new(time: f32, value: f32) -> Self {
		Self {
			time,
			value,
			in_tangent: 0.0,
			out_tangent: 0.0,
		}
	}
}

/// Keyframed scalar curve evaluated with cubic Hermite segments.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Curve {
	pub keys: Vec<Keyframe>,
}

impl Curve {
	/// Builds a curve, sorting keys by time.
	pub fn new(mut keys: Vec<Keyframe>) -> Self {
		keys.sort_by(|a, b| a.time.total_cmp(&b.time));
		Self { keys }
	}

	/// Straight line from `(t0, v0)` to `(t1, v1)`.
	pub fn linear(t0: f32, v0: f32, t1: f32, v1: f32) -> Self {
		let slope = if t1 != t0 { (v1 - v0) / (t1 - t0) } else { 0.0 };
		Self::new(vec![
			Keyframe {
				time: t0,
				value: v0,
				in_tangent: slope,
				out_tangent: slope,
			},
			Keyframe {
				time: t1,
				value: v1,
				in_tangent: slope,
				out_tangent: slope,
			},
		])
	}

	/// Samples the curve, clamping outside the key range. An empty curve is zero.
	///
	/// Keys with a NaN time are skipped. Keys are expected in time order, as
	/// [`Curve::new`] leaves them; out-of-order keys from deserialized data
	/// give an unspecified sample but never panic.
	pub fn evaluate(&self, time: f32) -> f32 {
		let mut keys = self.keys.iter().filter(|k| !k.time.is_nan());
		let Some(mut prev) = keys.next() else {
			return 0.0;
		};
		if time.is_nan() || time <= prev.time {
			return prev.value;
		}
		for key in keys {
			if time <= key.time {
				return hermite(prev, key, time);
			}
			prev = key;
		}
		prev.value
	}
}

fn hermite(a: &Keyframe, b: &Keyframe, time: f32) -> f32 {
	let dt = b.time - a.time;
	if dt <= 0.0 {
		return b.value;
	}
	let t = (time - a.time) / dt;
	let t2 = t * t;
	let t3 = t2 * t;
	let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
	let h10 = t3 - 2.0 * t2 + t;
	let h01 = -2.0 * t3 + 3.0 * t2;
	let h11 = t3 - t2;
	h00 * a.value + h10 * dt * a.out_tangent + h01 * b.value + h11 * dt * b.in_tangent
}
