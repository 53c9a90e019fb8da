//! Trait implementations for the [`serde`] crate.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{BanStats, PluginType};

/// Only the raw text and plugin are serialized; everything else can be
/// derived from them.
impl Serialize for BanStats
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut serializer = serializer.serialize_struct("BanStats", 2)?;

		serializer.serialize_field("raw_stats", self.raw_stats())?;
		serializer.serialize_field("plugin_type", &self.plugin_type())?;
		serializer.end()
	}
}

/// Accepts `null`, a plain string (the raw text of a ban with an unknown
/// plugin), or an object with optional `raw_stats` and `plugin_type` fields.
impl<'de> Deserialize<'de> for BanStats
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		#[derive(Deserialize)]
		#[serde(untagged)]
		#[allow(clippy::missing_docs_in_private_items)]
		enum Helper
		{
			Raw(String),
			Object
			{
				raw_stats: Option<String>,
				plugin_type: Option<PluginType>,
			},
		}

		Option::<Helper>::deserialize(deserializer).map(|helper| match helper {
			None => Self::default(),
			Some(Helper::Raw(raw_stats)) => Self::new(raw_stats, PluginType::Unknown),
			Some(Helper::Object { raw_stats, plugin_type }) => {
				Self::from_parts(raw_stats.as_deref(), plugin_type)
			}
		})
	}
}
