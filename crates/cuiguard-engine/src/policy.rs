use cuiguard_types::RiskTier;

/// Which builtin rule catalog variant to load.
///
/// `Defense` is a strict superset of `Standard`: it adds organization
/// identifiers, contract numbers, and cyber-threat indicators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RulesetProfile {
    Standard,
    Defense,
}

/// Default cap on emitted pattern hits per run. Counts and scores always
/// reflect all matches; only the emitted excerpt sequence is capped.
pub const DEFAULT_MAX_HITS: usize = 200;

/// Effective per-run options, resolved from config and CLI overrides.
///
/// Threaded through every call explicitly; there is no process-wide mutable
/// policy, so concurrent runs with different policies are safe.
#[derive(Clone, Debug)]
pub struct InspectionPolicy {
    /// Profile name as configured (for the report payload).
    pub profile: String,
    pub ruleset: RulesetProfile,
    /// Whether `matched_text` / `top_excerpt` are populated.
    pub store_excerpt: bool,
    /// Cap on emitted pattern hits.
    pub max_hits: usize,
    /// Risk tier at or above which the run is considered failing.
    pub fail_on: RiskTier,
}

impl InspectionPolicy {
    /// The `standard` profile defaults.
    pub fn standard() -> Self {
        Self {
            profile: "standard".to_string(),
            ruleset: RulesetProfile::Standard,
            store_excerpt: true,
            max_hits: DEFAULT_MAX_HITS,
            fail_on: RiskTier::High,
        }
    }
}
