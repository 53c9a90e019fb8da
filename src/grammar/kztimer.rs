//! KZTimer's scroll pattern notation.

use std::fmt;

use super::{parse_counts, MalformedJumpInput, ScrollGrammar};
use crate::JumpInput;

/// KZTimer writes every jump as `<pre>:<post>`, and wraps perfs in brackets.
///
/// ```text
/// [1:2] 0:3 [2:1]
/// ```
#[derive(Debug, Clone, Copy)]
pub struct KzTimer;

impl KzTimer
{
	/// Separates pre and post inputs.
	const SEPARATOR: char = ':';

	/// Opens a perf.
	const PERF_OPEN: char = '[';

	/// Closes a perf.
	const PERF_CLOSE: char = ']';
}

impl ScrollGrammar for KzTimer
{
	const NAME: &'static str = "KZTimer";

	fn parse_jump(token: &str) -> Result<JumpInput, MalformedJumpInput>
	{
		let unbalanced = || MalformedJumpInput::UnbalancedMarker { token: token.to_owned() };

		let (counts, is_perfect) = match token.strip_prefix(Self::PERF_OPEN) {
			Some(rest) => (rest.strip_suffix(Self::PERF_CLOSE).ok_or_else(unbalanced)?, true),
			None => (token, false),
		};

		if counts.contains([Self::PERF_OPEN, Self::PERF_CLOSE]) {
			return Err(unbalanced());
		}

		let (pre, post) = parse_counts(token, counts, Self::SEPARATOR)?;

		Ok(JumpInput::new(pre, post, is_perfect))
	}

	fn write_jump<W>(jump: &JumpInput, writer: &mut W) -> fmt::Result
	where
		W: fmt::Write,
	{
		let JumpInput { pre_input_count: pre, post_input_count: post, is_perfect } = *jump;

		if is_perfect {
			write!(writer, "{}{pre}{}{post}{}", Self::PERF_OPEN, Self::SEPARATOR, Self::PERF_CLOSE)
		} else {
			write!(writer, "{pre}{}{post}", Self::SEPARATOR)
		}
	}
}
