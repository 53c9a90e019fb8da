//! Decoded scroll patterns and the statistics derived from them.

use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use crate::grammar::{Gokz, KzTimer, ScrollGrammar};
use crate::JumpInput;

#[cfg(feature = "serde")]
mod serde;


/// The scroll inputs of a series of jumps, in the order they were detected.
///
/// All statistics are computed on first access and cached afterwards; since
/// the jumps can't change, neither can the statistics.
#[derive(Debug, Default, Clone)]
pub struct ScrollPattern
{
	/// The jumps, in detection order.
	jump_inputs: Vec<JumpInput>,

	/// Lazily computed statistics over `jump_inputs`.
	summary: OnceLock<Summary>,
}

/// Aggregates over a [`ScrollPattern`]'s jumps.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Summary
{
	/// Total amount of jumps.
	jumps: u64,

	/// Amount of perfs.
	perfs: u64,

	/// Sum of all pre inputs.
	pre_inputs: u64,

	/// Sum of all post inputs.
	post_inputs: u64,

	/// `perfs / jumps`
	perf_ratio: f32,

	/// `pre_inputs / jumps`
	avg_pre_inputs: f32,

	/// `post_inputs / jumps`
	avg_post_inputs: f32,

	/// `(pre_inputs + post_inputs) / jumps`
	avg_total_inputs: f32,
}

impl Summary
{
	/// Folds over `jump_inputs` once to compute every statistic.
	fn new(jump_inputs: &[JumpInput]) -> Self
	{
		let (jumps, perfs, pre_inputs, post_inputs) = jump_inputs.iter().fold(
			(0_u64, 0_u64, 0_u64, 0_u64),
			|(jumps, perfs, pre, post), jump| {
				(
					jumps + 1,
					perfs + u64::from(jump.is_perfect),
					pre + u64::from(jump.pre_input_count),
					post + u64::from(jump.post_input_count),
				)
			},
		);

		Self {
			jumps,
			perfs,
			pre_inputs,
			post_inputs,
			perf_ratio: ratio(perfs, jumps),
			avg_pre_inputs: ratio(pre_inputs, jumps),
			avg_post_inputs: ratio(post_inputs, jumps),
			avg_total_inputs: ratio(pre_inputs + post_inputs, jumps),
		}
	}
}

/// `dividend / divisor`, or `0.0` if `divisor` is zero.
#[allow(clippy::as_conversions, clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn ratio(dividend: u64, divisor: u64) -> f32
{
	if divisor == 0 {
		return 0.0;
	}

	(dividend as f64 / divisor as f64) as f32
}

impl ScrollPattern
{
	/// Creates a new [`ScrollPattern`] from a list of jumps.
	pub const fn new(jump_inputs: Vec<JumpInput>) -> Self
	{
		Self { jump_inputs, summary: OnceLock::new() }
	}

	/// The jumps, in the order they were detected.
	pub fn jump_inputs(&self) -> &[JumpInput]
	{
		&self.jump_inputs
	}

	/// Consumes `self` and returns the jumps.
	pub fn into_jump_inputs(self) -> Vec<JumpInput>
	{
		self.jump_inputs
	}

	/// Checks whether there are any jumps at all.
	pub fn is_empty(&self) -> bool
	{
		self.jump_inputs.is_empty()
	}

	/// Returns the cached statistics, computing them if necessary.
	fn summary(&self) -> &Summary
	{
		self.summary.get_or_init(|| Summary::new(&self.jump_inputs))
	}

	/// The amount of jumps.
	pub fn total_jump_count(&self) -> u64
	{
		self.summary().jumps
	}

	/// The amount of jumps the plugin considered perfs.
	pub fn perf_jump_count(&self) -> u64
	{
		self.summary().perfs
	}

	/// The share of perfs among all jumps, between `0.0` and `1.0`.
	///
	/// This is `0.0` if there are no jumps.
	pub fn perf_jump_ratio(&self) -> f32
	{
		self.summary().perf_ratio
	}

	/// The sum of all pre inputs.
	pub fn total_pre_input_count(&self) -> u64
	{
		self.summary().pre_inputs
	}

	/// The sum of all post inputs.
	pub fn total_post_input_count(&self) -> u64
	{
		self.summary().post_inputs
	}

	/// The sum of all inputs, pre and post.
	pub fn total_input_count(&self) -> u64
	{
		let summary = self.summary();

		summary.pre_inputs + summary.post_inputs
	}

	/// Average amount of pre inputs per jump.
	pub fn avg_pre_input_count(&self) -> f32
	{
		self.summary().avg_pre_inputs
	}

	/// Average amount of post inputs per jump.
	pub fn avg_post_input_count(&self) -> f32
	{
		self.summary().avg_post_inputs
	}

	/// Average amount of inputs per jump.
	pub fn avg_total_input_count(&self) -> f32
	{
		self.summary().avg_total_inputs
	}

	/// Formats the jumps the way [GOKZ] does.
	///
	/// [GOKZ]: crate::grammar::Gokz
	pub fn to_gokz_string(&self) -> String
	{
		Gokz::format(&self.jump_inputs)
	}

	/// Formats the jumps the way [KZTimer] does.
	///
	/// [KZTimer]: crate::grammar::KzTimer
	pub fn to_kztimer_string(&self) -> String
	{
		KzTimer::format(&self.jump_inputs)
	}
}

impl PartialEq for ScrollPattern
{
	fn eq(&self, other: &Self) -> bool
	{
		self.jump_inputs == other.jump_inputs
	}
}

impl Eq for ScrollPattern {}

impl Hash for ScrollPattern
{
	fn hash<H: Hasher>(&self, state: &mut H)
	{
		self.jump_inputs.hash(state);
	}
}

impl From<Vec<JumpInput>> for ScrollPattern
{
	fn from(jump_inputs: Vec<JumpInput>) -> Self
	{
		Self::new(jump_inputs)
	}
}

impl FromIterator<JumpInput> for ScrollPattern
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = JumpInput>,
	{
		Self::new(iter.into_iter().collect())
	}
}
