use crate::{model::CuiguardConfigV1, presets};
use anyhow::Context;
use cuiguard_engine::InspectionPolicy;
use cuiguard_types::RiskTier;

/// CLI overrides; highest precedence.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub store_excerpt: Option<bool>,
    pub max_hits: Option<u32>,
    pub fail_on: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: InspectionPolicy,
}

/// Resolve config + overrides into the effective policy.
pub fn resolve_config(
    cfg: CuiguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "standard".to_string());

    let mut effective = presets::preset(&profile);

    if let Some(store_excerpt) = overrides.store_excerpt.or(cfg.store_excerpt) {
        effective.store_excerpt = store_excerpt;
    }

    if let Some(max_hits) = overrides.max_hits.or(cfg.max_hits) {
        effective.max_hits = max_hits as usize;
    }

    if let Some(fail_on) = overrides.fail_on.as_deref().or(cfg.fail_on.as_deref()) {
        effective.fail_on = parse_fail_on(fail_on)
            .with_context(|| format!("invalid fail_on for profile {profile}"))?;
    }

    Ok(ResolvedConfig { effective })
}

fn parse_fail_on(v: &str) -> anyhow::Result<RiskTier> {
    match RiskTier::parse(v) {
        Some(RiskTier::Low) | None => {
            anyhow::bail!("unknown fail_on: {v} (expected moderate|high|critical)")
        }
        Some(tier) => Ok(tier),
    }
}
