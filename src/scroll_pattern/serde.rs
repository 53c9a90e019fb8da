//! Trait implementations for the [`serde`] crate.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{JumpInput, ScrollPattern};

/// Serializes the jumps together with all of the derived statistics.
impl Serialize for ScrollPattern
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut serializer = serializer.serialize_struct("ScrollPattern", 10)?;

		serializer.serialize_field("jump_inputs", self.jump_inputs())?;
		serializer.serialize_field("total_jump_count", &self.total_jump_count())?;
		serializer.serialize_field("perf_jump_count", &self.perf_jump_count())?;
		serializer.serialize_field("perf_jump_ratio", &self.perf_jump_ratio())?;
		serializer.serialize_field("total_pre_input_count", &self.total_pre_input_count())?;
		serializer.serialize_field("total_post_input_count", &self.total_post_input_count())?;
		serializer.serialize_field("total_input_count", &self.total_input_count())?;
		serializer.serialize_field("avg_pre_input_count", &self.avg_pre_input_count())?;
		serializer.serialize_field("avg_post_input_count", &self.avg_post_input_count())?;
		serializer.serialize_field("avg_total_input_count", &self.avg_total_input_count())?;
		serializer.end()
	}
}

/// Accepts either a plain list of jumps, or an object with a `jump_inputs`
/// field (which is what [`Serialize`] produces). Statistics in the input are
/// ignored and recomputed.
impl<'de> Deserialize<'de> for ScrollPattern
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
			List(Vec<JumpInput>),
			Object
			{
				jump_inputs: Vec<JumpInput>,
			},
		}

		Helper::deserialize(deserializer).map(|helper| match helper {
			Helper::List(jump_inputs) | Helper::Object { jump_inputs } => Self::new(jump_inputs),
		})
	}
}
