//! The stats attached to anti-cheat bans.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use crate::{extract, JumpInput, PluginType, ScrollPattern};

#[cfg(feature = "serde")]
mod serde;

#[cfg(test)]
mod tests;

/// The raw stats of a ban, as written by the anti-cheat plugin that issued it.
///
/// The embedded [`ScrollPattern`] is decoded the first time it is needed, and
/// reused afterwards. Two [`BanStats`] are equal if their raw text and plugin
/// are equal.
#[derive(Debug, Default, Clone)]
pub struct BanStats
{
	/// The trimmed stats text.
	raw_stats: String,

	/// The plugin that wrote `raw_stats`.
	plugin_type: PluginType,

	/// The decoded scroll pattern.
	scroll_pattern: OnceLock<ScrollPattern>,
}

impl BanStats
{
	/// Creates new [`BanStats`].
	///
	/// Surrounding whitespace is removed from `raw_stats`.
	pub fn new<S>(raw_stats: S, plugin_type: PluginType) -> Self
	where
		S: AsRef<str>,
	{
		Self {
			raw_stats: raw_stats.as_ref().trim().to_owned(),
			plugin_type,
			scroll_pattern: OnceLock::new(),
		}
	}

	/// Creates new [`BanStats`] from fields that may be missing.
	///
	/// Missing text is treated as empty, and a missing plugin as
	/// [`PluginType::Unknown`].
	pub fn from_parts(raw_stats: Option<&str>, plugin_type: Option<PluginType>) -> Self
	{
		Self::new(raw_stats.unwrap_or_default(), plugin_type.unwrap_or_default())
	}

	/// The stats text, without surrounding whitespace.
	pub fn raw_stats(&self) -> &str
	{
		&self.raw_stats
	}

	/// The plugin that wrote the stats.
	pub const fn plugin_type(&self) -> PluginType
	{
		self.plugin_type
	}

	/// Checks whether the stats text is empty.
	pub fn is_empty(&self) -> bool
	{
		self.raw_stats.is_empty()
	}

	/// The scroll pattern embedded in the stats.
	///
	/// This is empty if the stats don't contain a scroll pattern, or if the
	/// plugin's format is not known.
	pub fn scroll_pattern(&self) -> &ScrollPattern
	{
		self.scroll_pattern.get_or_init(|| {
			let jump_inputs = extract::scroll_pattern_segment(&self.raw_stats)
				.map(|segment| self.plugin_type.parse_jump_inputs(segment))
				.unwrap_or_default();

			trace!(plugin = %self.plugin_type, jumps = jump_inputs.len(), "decoded scroll pattern");

			ScrollPattern::new(jump_inputs)
		})
	}

	/// See [`ScrollPattern::jump_inputs()`].
	pub fn jump_inputs(&self) -> &[JumpInput]
	{
		self.scroll_pattern().jump_inputs()
	}

	/// See [`ScrollPattern::total_jump_count()`].
	pub fn total_jump_count(&self) -> u64
	{
		self.scroll_pattern().total_jump_count()
	}

	/// See [`ScrollPattern::perf_jump_count()`].
	pub fn perf_jump_count(&self) -> u64
	{
		self.scroll_pattern().perf_jump_count()
	}

	/// See [`ScrollPattern::perf_jump_ratio()`].
	pub fn perf_jump_ratio(&self) -> f32
	{
		self.scroll_pattern().perf_jump_ratio()
	}

	/// See [`ScrollPattern::total_pre_input_count()`].
	pub fn total_pre_input_count(&self) -> u64
	{
		self.scroll_pattern().total_pre_input_count()
	}

	/// See [`ScrollPattern::total_post_input_count()`].
	pub fn total_post_input_count(&self) -> u64
	{
		self.scroll_pattern().total_post_input_count()
	}

	/// See [`ScrollPattern::total_input_count()`].
	pub fn total_input_count(&self) -> u64
	{
		self.scroll_pattern().total_input_count()
	}

	/// See [`ScrollPattern::avg_pre_input_count()`].
	pub fn avg_pre_input_count(&self) -> f32
	{
		self.scroll_pattern().avg_pre_input_count()
	}

	/// See [`ScrollPattern::avg_post_input_count()`].
	pub fn avg_post_input_count(&self) -> f32
	{
		self.scroll_pattern().avg_post_input_count()
	}

	/// See [`ScrollPattern::avg_total_input_count()`].
	pub fn avg_total_input_count(&self) -> f32
	{
		self.scroll_pattern().avg_total_input_count()
	}

	/// See [`ScrollPattern::to_gokz_string()`].
	pub fn to_gokz_string(&self) -> String
	{
		self.scroll_pattern().to_gokz_string()
	}

	/// See [`ScrollPattern::to_kztimer_string()`].
	pub fn to_kztimer_string(&self) -> String
	{
		self.scroll_pattern().to_kztimer_string()
	}
}

impl PartialEq for BanStats
{
	fn eq(&self, other: &Self) -> bool
	{
		self.raw_stats == other.raw_stats && self.plugin_type == other.plugin_type
	}
}

impl Eq for BanStats {}

impl Hash for BanStats
{
	fn hash<H: Hasher>(&self, state: &mut H)
	{
		self.raw_stats.hash(state);
		self.plugin_type.hash(state);
	}
}

impl fmt::Display for BanStats
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		write!(f, "BanStats[raw_stats={:?}, plugin_type={}]", self.raw_stats, self.plugin_type)
	}
}
