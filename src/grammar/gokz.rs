//! GOKZ's scroll pattern notation.

use std::fmt;

use super::{parse_counts, MalformedJumpInput, ScrollGrammar};
use crate::JumpInput;

/// GOKZ writes every jump as `<pre>/<post>`, followed by a `*` if it was a
/// perf.
///
/// ```text
/// 1/2* 0/3 2/1*
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Gokz;

impl Gokz
{
	/// Separates pre and post inputs.
	const SEPARATOR: char = '/';

	/// Suffix of perfs.
	const PERF_MARKER: char = '*';
}

impl ScrollGrammar for Gokz
{
	const NAME: &'static str = "GOKZ";

	fn parse_jump(token: &str) -> Result<JumpInput, MalformedJumpInput>
	{
		let (counts, is_perfect) = match token.strip_suffix(Self::PERF_MARKER) {
			Some(counts) => (counts, true),
			None => (token, false),
		};

		if counts.contains(Self::PERF_MARKER) {
			return Err(MalformedJumpInput::UnbalancedMarker { token: token.to_owned() });
		}

		let (pre, post) = parse_counts(token, counts, Self::SEPARATOR)?;

		Ok(JumpInput::new(pre, post, is_perfect))
	}

	fn write_jump<W>(jump: &JumpInput, writer: &mut W) -> fmt::Result
	where
		W: fmt::Write,
	{
		write!(writer, "{}{}{}", jump.pre_input_count, Self::SEPARATOR, jump.post_input_count)?;

		if jump.is_perfect {
			writer.write_char(Self::PERF_MARKER)?;
		}

		Ok(())
	}
}
