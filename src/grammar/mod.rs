//! Per-plugin scroll pattern formats.
//!
//! Every anti-cheat plugin writes scroll patterns as a whitespace separated
//! list of jumps, but the notation of a single jump differs between plugins.
//! A [`ScrollGrammar`] knows how to read and write one jump in a plugin's
//! notation; splitting, error recovery, and formatting of whole patterns is
//! shared.
//!
//! Adding support for a new plugin means adding a new grammar module and a
//! [`PluginType`] variant that dispatches to it.
//!
//! [`PluginType`]: crate::PluginType

use std::fmt;

use thiserror::Error;

use crate::JumpInput;

mod gokz;
pub use gokz::Gokz;

mod kztimer;
pub use kztimer::KzTimer;


/// The text used in place of a scroll pattern that contains no jumps.
pub const NO_DATA: &str = "N/A";

/// The notation a plugin uses for scroll patterns.
pub trait ScrollGrammar
{
	/// The name of the plugin this grammar belongs to.
	const NAME: &'static str;

	/// Parses a single jump.
	fn parse_jump(token: &str) -> Result<JumpInput, MalformedJumpInput>;

	/// Writes a single jump in a form [`parse_jump()`] accepts.
	///
	/// [`parse_jump()`]: ScrollGrammar::parse_jump
	fn write_jump<W>(jump: &JumpInput, writer: &mut W) -> fmt::Result
	where
		W: fmt::Write;

	/// Parses an entire scroll pattern.
	///
	/// Malformed jumps are skipped; everything else is kept in order.
	fn parse(segment: &str) -> Vec<JumpInput>
	{
		let segment = segment.trim();

		if segment == NO_DATA {
			return Vec::new();
		}

		segment
			.split_ascii_whitespace()
			.filter_map(|token| match Self::parse_jump(token) {
				Ok(jump) => Some(jump),
				Err(error) => {
					debug!(plugin = Self::NAME, %error, "skipping malformed jump");
					None
				}
			})
			.collect()
	}

	/// Formats an entire scroll pattern.
	///
	/// An empty pattern is formatted as [`NO_DATA`].
	fn format(jumps: &[JumpInput]) -> String
	{
		if jumps.is_empty() {
			return String::from(NO_DATA);
		}

		let mut buf = String::new();

		for (idx, jump) in jumps.iter().enumerate() {
			if idx > 0 {
				buf.push(' ');
			}

			Self::write_jump(jump, &mut buf).expect("writing into a `String` cannot fail");
		}

		buf
	}
}

/// An error that can occur when parsing a single jump.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedJumpInput
{
	/// The separator between pre and post inputs is missing.
	#[error("`{token}` is missing the `{separator}` between pre and post inputs")]
	MissingSeparator
	{
		/// The offending token.
		token: String,

		/// The separator that was expected.
		separator: char,
	},

	/// One of the input counts is not a non-negative integer.
	#[error("`{token}` contains an invalid input count")]
	InvalidCount
	{
		/// The offending token.
		token: String,
	},

	/// A perf marker was opened but not closed, or closed but never opened.
	#[error("`{token}` has an unbalanced perf marker")]
	UnbalancedMarker
	{
		/// The offending token.
		token: String,
	},
}

/// Splits `token` at `separator` and parses both halves as input counts.
fn parse_counts(token: &str, counts: &str, separator: char) -> Result<(u32, u32), MalformedJumpInput>
{
	let (pre, post) = counts
		.split_once(separator)
		.ok_or_else(|| MalformedJumpInput::MissingSeparator { token: token.to_owned(), separator })?;

	let parse_count = |count: &str| {
		// `u32::from_str` accepts a leading `+`
		if !count.is_empty() && count.bytes().all(|byte| byte.is_ascii_digit()) {
			count.parse::<u32>().ok()
		} else {
			None
		}
	};

	Option::zip(parse_count(pre), parse_count(post))
		.ok_or_else(|| MalformedJumpInput::InvalidCount { token: token.to_owned() })
}
