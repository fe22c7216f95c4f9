//! Stable identifiers for detection rules.
//!
//! A rule id is a dotted namespace: `<group>.<discriminator>`. Rule ids are
//! part of the ruleset version contract; persisted findings reference them,
//! so they must never be reused with different semantics.

// PII
pub const RULE_SSN: &str = "pii.ssn";
pub const RULE_EMAIL: &str = "pii.email";
pub const RULE_PHONE: &str = "pii.phone";

// DoD identifiers
pub const RULE_DOD_EDIPI: &str = "dod.edipi";

// Export control
pub const RULE_ITAR: &str = "export.itar";
pub const RULE_EAR: &str = "export.ear";

// Markings and handling language
pub const RULE_CUI_PHRASE: &str = "marking.cui_phrase";
pub const RULE_CUI_BANNER: &str = "marking.banner";
pub const RULE_HANDLING: &str = "handling.dissemination";

// Proprietary content
pub const RULE_PROPRIETARY: &str = "proprietary.marker";

// Defense-profile additions
pub const RULE_CAGE: &str = "org.cage";
pub const RULE_CONTRACT: &str = "contract.number";
pub const RULE_CTI: &str = "cti.indicator";
