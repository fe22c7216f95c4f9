use cuiguard_engine::{DEFAULT_MAX_HITS, InspectionPolicy, RulesetProfile};
use cuiguard_types::RiskTier;

/// Profile preset defaults.
///
/// `standard` carries the balanced catalog; `defense` enables the stricter
/// contractor-oriented rules and fails earlier. Unknown names keep
/// `standard` semantics under the given name, so custom profile names stay
/// usable as pure config labels.
pub fn preset(profile: &str) -> InspectionPolicy {
    match profile {
        "defense" => InspectionPolicy {
            profile: "defense".to_string(),
            ruleset: RulesetProfile::Defense,
            store_excerpt: true,
            max_hits: DEFAULT_MAX_HITS,
            fail_on: RiskTier::Moderate,
        },
        "standard" => InspectionPolicy::standard(),
        other => InspectionPolicy {
            profile: other.to_string(),
            ..InspectionPolicy::standard()
        },
    }
}
