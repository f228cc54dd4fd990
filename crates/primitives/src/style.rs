use serde::{Deserialize, Serialize};

use crate::{Color, RectOffset};

/// Text alignment inside a styled box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Alignment {
	#[default]
	Left,
	Center,
	Right,
}

/// Presentation settings for a text box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
	pub name: String,
	pub font_size: i32,
	pub text_color: Color,
	pub alignment: Alignment,
	pub padding: RectOffset,
	pub margin: RectOffset,
	pub word_wrap: bool,
}

impl Default for Style {
	fn default() -> Self {
		Self {
			name: String::new(),
			font_size: 0,
			text_color: Color::BLACK,
			alignment: Alignment::Left,
			padding: RectOffset::default(),
			margin: RectOffset::default(),
			word_wrap: false,
		}
	}
}
