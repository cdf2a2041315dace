use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Output length and sampling parameters sent with every model call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub max_output_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_output_tokens: 8192,
            temperature: 1.0,
            top_p: 0.95,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmCategory {
    HarmCategoryHateSpeech,
    HarmCategoryDangerousContent,
    HarmCategorySexuallyExplicit,
    HarmCategoryHarassment,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockThreshold {
    BlockLowAndAbove,
    BlockMediumAndAbove,
    BlockOnlyHigh,
    BlockNone,
}

/// Per-category block thresholds. Identical for every role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SafetyThresholds(BTreeMap<HarmCategory, BlockThreshold>);

impl SafetyThresholds {
    pub fn uniform(threshold: BlockThreshold) -> Self {
        Self(
            [
                HarmCategory::HarmCategoryHateSpeech,
                HarmCategory::HarmCategoryDangerousContent,
                HarmCategory::HarmCategorySexuallyExplicit,
                HarmCategory::HarmCategoryHarassment,
            ]
            .into_iter()
            .map(|category| (category, threshold))
            .collect(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = (HarmCategory, BlockThreshold)> + '_ {
        self.0.iter().map(|(c, t)| (*c, *t))
    }
}

impl Default for SafetyThresholds {
    fn default() -> Self {
        Self::uniform(BlockThreshold::BlockOnlyHigh)
    }
}
