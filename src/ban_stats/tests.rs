//! Unit tests.

use std::collections::HashSet;
use std::sync::Barrier;
use std::thread;

use pretty_assertions::assert_eq;

use crate::{BanStats, JumpInput, PluginType};

/// What a GOKZ bhop hack ban usually looks like.
const GOKZ_STATS: &str = "Bhop hack. Perfs: 2/3, Scroll pattern: 1/2* 0/3 2/1*,";

/// What a KZTimer bhop hack ban usually looks like.
const KZTIMER_STATS: &str = "bhop hack (Scroll pattern: [1:2] 0:3 [2:1]";

#[test]
fn no_scroll_pattern()
{
	for plugin in PluginType::ALL {
		let stats = BanStats::new("banned for macro usage", plugin);

		assert!(!stats.is_empty());
		assert!(stats.jump_inputs().is_empty());
		assert_eq!(stats.total_jump_count(), 0);
		assert_eq!(stats.perf_jump_count(), 0);
		assert_eq!(stats.perf_jump_ratio(), 0.0);
		assert_eq!(stats.total_input_count(), 0);
		assert_eq!(stats.avg_pre_input_count(), 0.0);
		assert_eq!(stats.avg_post_input_count(), 0.0);
		assert_eq!(stats.avg_total_input_count(), 0.0);
		assert_eq!(stats.to_gokz_string(), "N/A");
		assert_eq!(stats.to_kztimer_string(), "N/A");
	}
}

#[test]
fn gokz()
{
	let stats = BanStats::new(GOKZ_STATS, PluginType::Gokz);

	assert_eq!(stats.jump_inputs(), [
		JumpInput::new(1, 2, true),
		JumpInput::new(0, 3, false),
		JumpInput::new(2, 1, true),
	]);

	assert_eq!(stats.total_jump_count(), 3);
	assert_eq!(stats.perf_jump_count(), 2);
	assert!((stats.perf_jump_ratio() - 0.667).abs() < 0.001);
	assert_eq!(stats.total_pre_input_count(), 3);
	assert_eq!(stats.total_post_input_count(), 6);
	assert_eq!(stats.total_input_count(), 9);
	assert_eq!(stats.avg_total_input_count(), 3.0);
}

#[test]
fn kztimer()
{
	let stats = BanStats::new(KZTIMER_STATS, PluginType::KzTimer);

	assert_eq!(stats.scroll_pattern(), BanStats::new(GOKZ_STATS, PluginType::Gokz).scroll_pattern());
	assert_eq!(stats.to_gokz_string(), "1/2* 0/3 2/1*");
	assert_eq!(stats.to_kztimer_string(), "[1:2] 0:3 [2:1]");
}

#[test]
fn unknown_plugin()
{
	let stats = BanStats::new(GOKZ_STATS, PluginType::Unknown);

	assert!(stats.scroll_pattern().is_empty());
	assert_eq!(stats.perf_jump_ratio(), 0.0);
}

#[test]
fn malformed_jumps_are_dropped()
{
	let stats = BanStats::new("Scroll pattern: 1/2* ??? 0/3 4/", PluginType::Gokz);

	assert_eq!(stats.jump_inputs(), [JumpInput::new(1, 2, true), JumpInput::new(0, 3, false)]);
}

#[test]
fn notes_after_the_pattern_are_ignored()
{
	let stats = BanStats::new("Scroll pattern: 1/2* 0/3, Perfs: 1/2", PluginType::Gokz);

	assert_eq!(stats.jump_inputs(), [JumpInput::new(1, 2, true), JumpInput::new(0, 3, false)]);

	let stats = BanStats::new("Scroll pattern: [1:2] 0:3, avg 2", PluginType::KzTimer);

	assert_eq!(stats.jump_inputs(), [JumpInput::new(1, 2, true), JumpInput::new(0, 3, false)]);
}

#[test]
fn raw_stats_are_trimmed()
{
	let stats = BanStats::new("\t  Scroll pattern: 0/0  \n", PluginType::Gokz);

	assert_eq!(stats.raw_stats(), "Scroll pattern: 0/0");
	assert_eq!(stats.jump_inputs(), [JumpInput::new(0, 0, false)]);
}

#[test]
fn missing_parts()
{
	let stats = BanStats::from_parts(None, None);

	assert!(stats.is_empty());
	assert_eq!(stats.plugin_type(), PluginType::Unknown);
	assert_eq!(stats, BanStats::default());
	assert_eq!(stats.total_jump_count(), 0);

	let stats = BanStats::from_parts(Some("  "), Some(PluginType::Gokz));

	assert!(stats.is_empty());
	assert_eq!(stats.plugin_type(), PluginType::Gokz);
}

#[test]
fn equality()
{
	let a = BanStats::new(GOKZ_STATS, PluginType::Gokz);
	let b = BanStats::new(format!("  {GOKZ_STATS}  "), PluginType::Gokz);
	let c = BanStats::new(GOKZ_STATS, PluginType::KzTimer);

	// only one of them has decoded its pattern
	let _ = a.scroll_pattern();

	assert_eq!(a, b);
	assert_ne!(a, c);

	let set = [a, b, c].into_iter().collect::<HashSet<_>>();

	assert_eq!(set.len(), 2);
}

#[test]
fn aggregates_are_idempotent()
{
	let stats = BanStats::new(GOKZ_STATS, PluginType::Gokz);
	let first = stats.perf_jump_ratio();
	let second = stats.perf_jump_ratio();

	assert_eq!(first.to_bits(), second.to_bits());
	assert!(std::ptr::eq(stats.scroll_pattern(), stats.scroll_pattern()));
}

#[test]
fn clones_keep_decoded_pattern()
{
	let stats = BanStats::new(GOKZ_STATS, PluginType::Gokz);
	let _ = stats.scroll_pattern();
	let clone = stats.clone();

	assert_eq!(clone, stats);
	assert_eq!(clone.scroll_pattern(), stats.scroll_pattern());
}

#[test]
fn concurrent_access()
{
	const THREADS: usize = 16;

	let stats = &BanStats::new(GOKZ_STATS, PluginType::Gokz);
	let barrier = &Barrier::new(THREADS);

	let patterns = thread::scope(|scope| {
		let handles = (0..THREADS)
			.map(|_| {
				scope.spawn(move || {
					barrier.wait();
					let pattern = stats.scroll_pattern();
					(pattern, pattern.perf_jump_count(), pattern.total_input_count())
				})
			})
			.collect::<Vec<_>>();

		handles
			.into_iter()
			.map(|handle| handle.join().expect("thread panicked"))
			.collect::<Vec<_>>()
	});

	let (first, ..) = patterns.first().copied().expect("there are threads");

	for (pattern, perfs, inputs) in patterns {
		assert!(std::ptr::eq(pattern, first));
		assert_eq!((perfs, inputs), (2, 9));
	}
}

#[test]
fn fmt_display()
{
	let stats = BanStats::new("Scroll pattern: 1/2*", PluginType::Gokz);

	assert_eq!(stats.to_string(), r#"BanStats[raw_stats="Scroll pattern: 1/2*", plugin_type=GOKZ]"#);
}

#[cfg(feature = "serde")]
mod serde
{
	use color_eyre::Result;
	use serde_json::json;

	use super::GOKZ_STATS;
	use crate::{BanStats, PluginType};

	#[test]
	fn serialize()
	{
		let stats = BanStats::new(GOKZ_STATS, PluginType::Gokz);

		assert_eq!(
			serde_json::to_value(&stats).expect("serialize"),
			json!({ "raw_stats": GOKZ_STATS, "plugin_type": "gokz" }),
		);
	}

	#[test]
	fn deserialize() -> Result<()>
	{
		let stats = serde_json::from_value::<BanStats>(json!({
			"raw_stats": format!(" {GOKZ_STATS} "),
			"plugin_type": "GOKZ",
		}))?;

		assert_eq!(stats, BanStats::new(GOKZ_STATS, PluginType::Gokz));
		assert_eq!(stats.total_jump_count(), 3);

		let stats = serde_json::from_value::<BanStats>(json!({ "plugin_type": null }))?;

		assert_eq!(stats, BanStats::default());

		let stats = serde_json::from_value::<BanStats>(json!("banned for macro usage"))?;

		assert_eq!(stats.raw_stats(), "banned for macro usage");
		assert_eq!(stats.plugin_type(), PluginType::Unknown);

		assert_eq!(serde_json::from_value::<BanStats>(json!(null))?, BanStats::default());

		Ok(())
	}
}
