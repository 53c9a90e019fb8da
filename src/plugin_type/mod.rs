//! The anti-cheat plugins that can author ban stats.
//!
//! Every plugin describes scroll patterns in its own format, so the plugin
//! type decides which [grammar] is used to decode them.
//!
//! [grammar]: crate::grammar

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::grammar::{Gokz, KzTimer, ScrollGrammar};
use crate::JumpInput;

#[cfg(feature = "serde")]
mod serde;


/// The anti-cheat plugin that produced a ban's stats.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PluginType
{
	/// [GOKZ](https://github.com/KZGlobalTeam/gokz)'s anti-cheat module.
	Gokz,

	/// [KZTimer](https://github.com/KZGlobalTeam/KZTimerGlobal)'s built-in anti-cheat.
	KzTimer,

	/// Any plugin we don't know the format of.
	///
	/// This is also used if the plugin is not known at all.
	#[default]
	Unknown,
}

impl PluginType
{
	/// Every known plugin type.
	pub const ALL: [Self; 3] = [Self::Gokz, Self::KzTimer, Self::Unknown];

	/// Returns a string representation of `self`.
	pub const fn as_str(&self) -> &'static str
	{
		match self {
			Self::Gokz => "gokz",
			Self::KzTimer => "kztimer",
			Self::Unknown => "unknown",
		}
	}

	/// Returns the name under which the plugin is usually known.
	///
	/// This yields the same result as the [`fmt::Display`] implementation, but
	/// is `const`.
	pub const fn as_str_capitalized(&self) -> &'static str
	{
		match self {
			Self::Gokz => Gokz::NAME,
			Self::KzTimer => KzTimer::NAME,
			Self::Unknown => "Unknown",
		}
	}

	/// Checks whether `self` is [Unknown].
	///
	/// [Unknown]: PluginType::Unknown
	pub const fn is_unknown(&self) -> bool
	{
		matches!(self, Self::Unknown)
	}

	/// Decodes a scroll pattern segment using this plugin's grammar.
	///
	/// Plugins without a grammar produce an empty list.
	pub fn parse_jump_inputs(&self, segment: &str) -> Vec<JumpInput>
	{
		match self {
			Self::Gokz => Gokz::parse(segment),
			Self::KzTimer => KzTimer::parse(segment),
			Self::Unknown => {
				debug!(segment, "no scroll pattern grammar for unknown plugin");
				Vec::new()
			}
		}
	}
}

impl fmt::Display for PluginType
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.write_str(self.as_str_capitalized())
	}
}

/// An error that can occur when parsing a string into a [`PluginType`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{0}` is not a known anti-cheat plugin")]
pub struct UnknownPluginType(pub String);

impl FromStr for PluginType
{
	type Err = UnknownPluginType;

	fn from_str(s: &str) -> Result<Self, Self::Err>
	{
		let s = s.trim();

		if s.eq_ignore_ascii_case("gokz") {
			return Ok(Self::Gokz);
		}

		if ["kztimer", "kz_timer", "kzt"]
			.iter()
			.any(|name| s.eq_ignore_ascii_case(name))
		{
			return Ok(Self::KzTimer);
		}

		if s.eq_ignore_ascii_case("unknown") {
			return Ok(Self::Unknown);
		}

		Err(UnknownPluginType(s.to_owned()))
	}
}
