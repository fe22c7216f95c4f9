//! The immutable detection rule catalog.
//!
//! Rules, per-category saturation constants, and severity multipliers are
//! versioned together: changing any of them is a new ruleset version, not a
//! runtime mutation. `Ruleset::load` is the only constructor; after load the
//! catalog is read-only and safe to share across threads.

use crate::error::RulesetLoadError;
use crate::policy::RulesetProfile;
use cuiguard_types::{CuiCategory, control_mappings, ids};
use regex::Regex;

/// A single compiled detection rule.
#[derive(Clone, Debug)]
pub struct PatternRule {
    pub id: &'static str,
    pub category: CuiCategory,
    matcher: Regex,
    /// Severity contribution of one match toward category confidence.
    pub weight: f64,
    pub description: &'static str,
}

impl PatternRule {
    pub fn matcher(&self) -> &Regex {
        &self.matcher
    }
}

/// Immutable, ordered rule catalog for one profile.
#[derive(Clone, Debug)]
pub struct Ruleset {
    profile: RulesetProfile,
    rules: Vec<PatternRule>,
}

struct RuleSpec {
    id: &'static str,
    category: CuiCategory,
    pattern: &'static str,
    weight: f64,
    description: &'static str,
    defense_only: bool,
}

/// The builtin catalog. Acronym rules (`ITAR`, `EAR`, CAGE codes) are
/// case-sensitive; phrase rules are not.
fn builtin_specs() -> Vec<RuleSpec> {
    vec![
        RuleSpec {
            id: ids::RULE_SSN,
            category: CuiCategory::Ssn,
            pattern: r"\b\d{3}-\d{2}-\d{4}\b",
            weight: 3.0,
            description: "Social Security number (000-00-0000)",
            defense_only: false,
        },
        RuleSpec {
            id: ids::RULE_EMAIL,
            category: CuiCategory::ContactInfo,
            pattern: r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
            weight: 1.0,
            description: "Email address",
            defense_only: false,
        },
        RuleSpec {
            id: ids::RULE_PHONE,
            category: CuiCategory::ContactInfo,
            pattern: r"\b(?:\+1\s*)?\(?\d{3}\)?[-.\s]\d{3}[-.\s]\d{4}\b",
            weight: 1.0,
            description: "North American phone number",
            defense_only: false,
        },
        RuleSpec {
            id: ids::RULE_DOD_EDIPI,
            category: CuiCategory::DodId,
            pattern: r"\b\d{10}\b",
            weight: 2.0,
            description: "DoD identification number (EDIPI)",
            defense_only: false,
        },
        RuleSpec {
            id: ids::RULE_ITAR,
            category: CuiCategory::ExportControl,
            pattern: r"\bITAR\b",
            weight: 2.5,
            description: "ITAR reference",
            defense_only: false,
        },
        RuleSpec {
            id: ids::RULE_EAR,
            category: CuiCategory::ExportControl,
            pattern: r"\bEAR\b",
            weight: 2.0,
            description: "EAR reference",
            defense_only: false,
        },
        RuleSpec {
            id: ids::RULE_CUI_PHRASE,
            category: CuiCategory::CuiMarking,
            pattern: r"(?i)\b(?:controlled unclassified information|for official use only|fouo|cui)\b",
            weight: 2.0,
            description: "Explicit CUI marking phrase",
            defense_only: false,
        },
        RuleSpec {
            id: ids::RULE_CUI_BANNER,
            category: CuiCategory::CuiMarking,
            pattern: r"(?i)\bcui//[a-z][a-z/-]*",
            weight: 2.5,
            description: "CUI banner with limited-dissemination marking",
            defense_only: false,
        },
        RuleSpec {
            id: ids::RULE_HANDLING,
            category: CuiCategory::HandlingContext,
            pattern: r"(?i)\b(?:do not distribute|need to know|limited dissemination|distribution statement|unauthorized sharing|unauthorized disclosure|improper dissemination|releasable to)\b",
            weight: 1.0,
            description: "Handling / dissemination control language",
            defense_only: false,
        },
        RuleSpec {
            id: ids::RULE_PROPRIETARY,
            category: CuiCategory::ProprietaryTech,
            pattern: r"(?i)\b(?:proprietary|trade secret|company confidential)\b",
            weight: 1.0,
            description: "Proprietary technology marker",
            defense_only: false,
        },
        RuleSpec {
            id: ids::RULE_CAGE,
            category: CuiCategory::OrgIdentifier,
            pattern: r"\b[A-HJ-NP-Z0-9]{5}\b",
            weight: 0.8,
            description: "CAGE code shape",
            defense_only: true,
        },
        RuleSpec {
            id: ids::RULE_CONTRACT,
            category: CuiCategory::ContractNumber,
            pattern: r"\b(?:FA\w{2}\d{2}-\w-\d{5}|W\d{2}\w{2}\w{2}\d{2}\w\d{4})\b",
            weight: 2.0,
            description: "Government contract number",
            defense_only: true,
        },
        RuleSpec {
            id: ids::RULE_CTI,
            category: CuiCategory::CyberThreat,
            pattern: r"(?i)\b(?:threat indicator|indicator of compromise|ioc)\b",
            weight: 1.5,
            description: "Cyber threat intelligence indicator",
            defense_only: true,
        },
    ]
}

/// Weighted-hit total at which category confidence saturates to 1.0.
///
/// Part of the ruleset version contract, together with the rule weights.
pub fn saturation(category: CuiCategory) -> f64 {
    match category {
        CuiCategory::Ssn => 6.0,
        CuiCategory::DodId => 6.0,
        CuiCategory::ContactInfo => 8.0,
        CuiCategory::OrgIdentifier => 8.0,
        CuiCategory::ContractNumber => 6.0,
        CuiCategory::ExportControl => 5.0,
        CuiCategory::CyberThreat => 6.0,
        CuiCategory::CuiMarking => 5.0,
        CuiCategory::HandlingContext => 8.0,
        CuiCategory::ProprietaryTech => 8.0,
    }
}

/// Contribution of a fully-saturated category to the overall risk score.
///
/// Distinguishes, e.g., SSNs (high) from generic proprietary markers
/// (moderate). Part of the ruleset version contract.
pub fn severity_multiplier(category: CuiCategory) -> f64 {
    match category {
        CuiCategory::Ssn => 3.0,
        CuiCategory::DodId => 2.5,
        CuiCategory::ContactInfo => 1.5,
        CuiCategory::OrgIdentifier => 1.0,
        CuiCategory::ContractNumber => 1.5,
        CuiCategory::ExportControl => 3.0,
        CuiCategory::CyberThreat => 2.0,
        CuiCategory::CuiMarking => 2.0,
        CuiCategory::HandlingContext => 1.0,
        CuiCategory::ProprietaryTech => 1.0,
    }
}

impl Ruleset {
    /// Build the immutable catalog for a profile.
    ///
    /// Fails on duplicate rule ids, uncompilable patterns, or a category the
    /// control registry cannot map. No mutation API exists after load.
    pub fn load(profile: RulesetProfile) -> Result<Ruleset, RulesetLoadError> {
        let specs: Vec<RuleSpec> = builtin_specs()
            .into_iter()
            .filter(|s| !s.defense_only || profile == RulesetProfile::Defense)
            .collect();
        Self::from_specs(profile, specs)
    }

    fn from_specs(
        profile: RulesetProfile,
        specs: Vec<RuleSpec>,
    ) -> Result<Ruleset, RulesetLoadError> {
        // Registry completeness first: every enum category must be mappable,
        // not just the ones this profile emits.
        for category in CuiCategory::ALL {
            if control_mappings(category).is_empty() {
                return Err(RulesetLoadError::MissingControlMapping { category });
            }
        }

        let mut rules = Vec::with_capacity(specs.len());
        let mut seen: std::collections::BTreeSet<&'static str> = std::collections::BTreeSet::new();

        for spec in specs {
            if !seen.insert(spec.id) {
                return Err(RulesetLoadError::DuplicateRuleId {
                    id: spec.id.to_string(),
                });
            }
            let matcher =
                Regex::new(spec.pattern).map_err(|source| RulesetLoadError::InvalidPattern {
                    id: spec.id.to_string(),
                    source,
                })?;
            rules.push(PatternRule {
                id: spec.id,
                category: spec.category,
                matcher,
                weight: spec.weight,
                description: spec.description,
            });
        }

        Ok(Ruleset { profile, rules })
    }

    pub fn profile(&self) -> RulesetProfile {
        self.profile
    }

    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    pub fn rule(&self, id: &str) -> Option<&PatternRule> {
        self.rules.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
