//! Pure detection and classification (no IO).
//!
//! Input: document bytes plus an immutable ruleset and a per-call policy.
//! Output: findings + scan stats, compliance guidance, and run deltas.
//!
//! Everything in this crate is a self-contained computation over its inputs;
//! concurrent calls over independent runs need no coordination.

#![forbid(unsafe_code)]

pub mod error;
pub mod policy;
pub mod ruleset;

mod analysis;
mod compare;
mod mapper;
mod matcher;

#[cfg(test)]
mod proptest;

pub use analysis::{AnalysisContext, AnalysisReport, ScanStats, analyze, risk_score, risk_tier_for};
pub use compare::compare;
pub use error::{AnalysisError, RulesetLoadError, UnmappedCategoryError};
pub use mapper::map_guidance;
pub use matcher::{EXCERPT_CAP_CHARS, TRUNCATION_MARKER, scan, scan_text};
pub use policy::{DEFAULT_MAX_HITS, InspectionPolicy, RulesetProfile};
pub use ruleset::{PatternRule, Ruleset};
