use anyhow::Context;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// On-disk configuration (`cuiguard.toml`), schema `cuiguard.config.v1`.
///
/// Every field is optional; missing fields fall back to the selected
/// profile's preset.
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CuiguardConfigV1 {
    /// Profile name: `standard` or `defense`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Whether matched excerpts are stored with findings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_excerpt: Option<bool>,

    /// Cap on emitted pattern hits per run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_hits: Option<u32>,

    /// Risk tier at or above which the inspect exit code signals failure:
    /// `moderate`, `high`, or `critical`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,
}

/// Parse config TOML. Empty input is allowed upstream (defaults apply).
pub fn parse_config_toml(text: &str) -> anyhow::Result<CuiguardConfigV1> {
    toml::from_str(text).context("invalid cuiguard.toml")
}
