//! Trait implementations for the [`serde`] crate.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::PluginType;

impl Serialize for PluginType
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		self.as_str().serialize(serializer)
	}
}

/// Unrecognized names and `null` both deserialize as [`PluginType::Unknown`].
impl<'de> Deserialize<'de> for PluginType
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let name = Option::<String>::deserialize(deserializer)?;

		Ok(name
			.and_then(|name| name.parse().ok())
			.unwrap_or_default())
	}
}
