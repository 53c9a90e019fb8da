//! Locating scroll patterns inside raw ban stats.
//!
//! Plugins embed the scroll pattern somewhere in a longer text, introduced by
//! [`MARKER`]:
//!
//! ```text
//! Perfs: 28/30, Scroll pattern: 1/2* 0/3 2/1*,
//! ```

use lazy_regex::{regex, Lazy, Regex};

/// The text that precedes every scroll pattern.
pub const MARKER: &str = "Scroll pattern: ";

/// A regex to match everything after the last [`MARKER`] on a line, up to the
/// next comma or the end of that line.
pub static SCROLL_PATTERN_REGEX: &Lazy<Regex> = regex!(r"(?m)^.*Scroll pattern: ([^,\r\n]*)");

/// Extracts the scroll pattern segment from `raw_stats`.
///
/// The segment is whatever follows the last [`MARKER`] on the first line that
/// contains one, up to the next comma. Returns [`None`] if there is no marker
/// at all.
///
/// ```
/// use kreedz_anticheat::extract::scroll_pattern_segment;
///
/// assert_eq!(scroll_pattern_segment("Scroll pattern: 1/2* 0/3,"), Some("1/2* 0/3"));
/// assert_eq!(scroll_pattern_segment("banned for macro usage"), None);
/// ```
pub fn scroll_pattern_segment(raw_stats: &str) -> Option<&str>
{
	let segment = SCROLL_PATTERN_REGEX
		.captures(raw_stats)?
		.get(1)?
		.as_str()
		.trim();

	Some(segment)
}
