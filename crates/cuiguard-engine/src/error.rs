use cuiguard_types::CuiCategory;
use thiserror::Error;

/// Fatal ruleset construction failure.
///
/// Surfaced at process start; a ruleset that fails to load is never used.
#[derive(Debug, Error)]
pub enum RulesetLoadError {
    #[error("duplicate rule id: {id}")]
    DuplicateRuleId { id: String },

    #[error("invalid pattern for rule {id}")]
    InvalidPattern {
        id: String,
        #[source]
        source: regex::Error,
    },

    /// The control registry has no entry for a category the ruleset can
    /// emit. Indicates version skew between the ruleset and the registry.
    #[error("category {} has no compliance control mapping", category.as_str())]
    MissingControlMapping { category: CuiCategory },
}

/// Ruleset/mapper version skew observed at analysis time.
///
/// Structurally rare: `Ruleset::load` checks registry completeness up front.
#[derive(Debug, Error)]
#[error("no compliance control mapping for category {}", category.as_str())]
pub struct UnmappedCategoryError {
    pub category: CuiCategory,
}

/// Per-run analysis failure. Never downgraded to an empty result: a failed
/// run must not read as a clean scan.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("document is not valid UTF-8 (first invalid byte at offset {valid_up_to})")]
    InvalidEncoding { valid_up_to: usize },

    #[error(transparent)]
    UnmappedCategory(#[from] UnmappedCategoryError),
}
