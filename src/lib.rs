//! Anti-cheat ban stats decoding.
//!
//! Bans issued by KZ anti-cheat plugins carry a free-text "stats" field. Next
//! to other notes, that text describes the scroll-wheel inputs the player
//! issued around each jump, in a format specific to the plugin that issued the
//! ban. This crate locates that description, decodes it into a
//! [`ScrollPattern`], and derives the usual statistics from it (perf ratio,
//! average inputs per jump, ...).
//!
//! ```
//! use kreedz_anticheat::{BanStats, PluginType};
//!
//! let stats = BanStats::new("bhop hack, Scroll pattern: 1/2* 0/3 2/1*", PluginType::Gokz);
//!
//! assert_eq!(stats.total_jump_count(), 3);
//! assert_eq!(stats.perf_jump_count(), 2);
//! assert_eq!(stats.to_kztimer_string(), "[1:2] 0:3 [2:1]");
//! ```

#[macro_use(trace, debug)]
extern crate tracing;

pub mod jump_input;

#[doc(inline)]
pub use jump_input::JumpInput;

pub mod plugin_type;

#[doc(inline)]
pub use plugin_type::PluginType;

pub mod grammar;

#[doc(inline)]
pub use grammar::{Gokz, KzTimer, MalformedJumpInput, ScrollGrammar};

pub mod scroll_pattern;

#[doc(inline)]
pub use scroll_pattern::ScrollPattern;

pub mod extract;

pub mod ban_stats;

#[doc(inline)]
pub use ban_stats::BanStats;
