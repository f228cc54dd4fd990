use serde::{Deserialize, Serialize};

use crate::MAX_ARGUMENTS;

/// How declared argument types are compared with parameter types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
	/// Positions agree when both or neither side is a primitive numeric or
	/// boolean kind. Non-primitive kinds are never compared further.
	#[default]
	Primitiveness,
	/// Positions agree only on equal declared types. Object parameters of the
	/// wildcard type accept any object.
	Exact,
}

/// Method matching configuration of a [`TypeRegistry`](crate::TypeRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchOptions {
	pub policy: MatchPolicy,
	/// Calls with more arguments fail before matching. At most [`MAX_ARGUMENTS`].
	pub max_arguments: usize,
}

impl Default for MatchOptions {
	fn default() -> Self {
		Self {
			policy: MatchPolicy::Primitiveness,
			max_arguments: MAX_ARGUMENTS,
		}
	}
}

/// Invalid match configuration.
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
	#[error("invalid match options: {0}")]
	Parse(#[from] toml::de::Error),
	#[error("max_arguments must be within 1..={max}, got {value}")]
	MaxArguments { value: usize, max: usize },
}

impl MatchOptions {
	/// Parses options from a TOML document such as:
	///
	/// ```toml
	/// policy = "exact"
	/// max_arguments = 8
	/// ```
	///
	/// Missing fields keep their defaults.
	pub fn from_toml_str(input: &str) -> Result<Self, OptionsError> {
		let options: Self = toml::from_str(input)?;
		options.validate()?;
		Ok(options)
	}

	pub fn validate(&self) -> Result<(), OptionsError> {
		if (1..=MAX_ARGUMENTS).contains(&self.max_arguments) {
			Ok(())
		} else {
			Err(OptionsError::MaxArguments {
				value: self.max_arguments,
				max: MAX_ARGUMENTS,
			})
		}
	}
}
