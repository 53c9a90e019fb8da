//! A single jump as recorded by an anti-cheat plugin.

/// The scroll inputs recorded around a single jump.
///
/// Plugins track how many times the player scrolled in a short window before
/// and after the tick they left the ground.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JumpInput
{
	/// Scroll inputs before the jump.
	pub pre_input_count: u32,

	/// Scroll inputs after the jump.
	pub post_input_count: u32,

	/// Whether the plugin considered this jump to be a perf.
	///
	/// What counts as a perf is up to the plugin, not this crate.
	pub is_perfect: bool,
}

impl JumpInput
{
	/// Creates a new [`JumpInput`].
	pub const fn new(pre_input_count: u32, post_input_count: u32, is_perfect: bool) -> Self
	{
		Self { pre_input_count, post_input_count, is_perfect }
	}

	/// The combined amount of scroll inputs around this jump.
	pub const fn total_input_count(&self) -> u64
	{
		// `u64::from` is not `const`
		#[allow(clippy::as_conversions, clippy::cast_lossless)]
		let total = self.pre_input_count as u64 + self.post_input_count as u64;

		total
	}
}
