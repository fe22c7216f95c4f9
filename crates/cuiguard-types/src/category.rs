//! The closed CUI category taxonomy.
//!
//! Detection rules, saturation constants, severity multipliers, and the
//! compliance control registry are all keyed on this enum. Growing detection
//! coverage means adding a variant here and shipping a new ruleset version,
//! not patching string keys at runtime.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A CUI-like content category.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CuiCategory {
    /// Social Security numbers.
    Ssn,
    /// DoD identifiers (EDIPI).
    DodId,
    /// Personal contact details (email addresses, phone numbers).
    ContactInfo,
    /// Organization identifiers (CAGE codes).
    OrgIdentifier,
    /// Government contract numbers.
    ContractNumber,
    /// Export-controlled content indicators (ITAR / EAR).
    ExportControl,
    /// Cyber threat intelligence indicators.
    CyberThreat,
    /// Explicit CUI markings and banners.
    CuiMarking,
    /// Handling / dissemination control language.
    HandlingContext,
    /// Proprietary technology markers.
    ProprietaryTech,
}

impl CuiCategory {
    /// All categories, in the canonical (ascending) order used for
    /// deterministic aggregation.
    pub const ALL: [CuiCategory; 10] = [
        CuiCategory::Ssn,
        CuiCategory::DodId,
        CuiCategory::ContactInfo,
        CuiCategory::OrgIdentifier,
        CuiCategory::ContractNumber,
        CuiCategory::ExportControl,
        CuiCategory::CyberThreat,
        CuiCategory::CuiMarking,
        CuiCategory::HandlingContext,
        CuiCategory::ProprietaryTech,
    ];

    /// Stable wire name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            CuiCategory::Ssn => "SSN",
            CuiCategory::DodId => "DOD_ID",
            CuiCategory::ContactInfo => "CONTACT_INFO",
            CuiCategory::OrgIdentifier => "ORG_IDENTIFIER",
            CuiCategory::ContractNumber => "CONTRACT_NUMBER",
            CuiCategory::ExportControl => "EXPORT_CONTROL",
            CuiCategory::CyberThreat => "CYBER_THREAT",
            CuiCategory::CuiMarking => "CUI_MARKING",
            CuiCategory::HandlingContext => "HANDLING_CONTEXT",
            CuiCategory::ProprietaryTech => "PROPRIETARY_TECH",
        }
    }

    /// Parse a wire name back into a category.
    pub fn parse(s: &str) -> Option<CuiCategory> {
        CuiCategory::ALL.into_iter().find(|c| c.as_str() == s)
    }

    /// Human-readable label for rendered output.
    pub fn label(&self) -> &'static str {
        match self {
            CuiCategory::Ssn => "Social Security numbers",
            CuiCategory::DodId => "DoD identifiers",
            CuiCategory::ContactInfo => "Personal contact details",
            CuiCategory::OrgIdentifier => "Organization identifiers",
            CuiCategory::ContractNumber => "Contract numbers",
            CuiCategory::ExportControl => "Export-controlled content",
            CuiCategory::CyberThreat => "Cyber threat indicators",
            CuiCategory::CuiMarking => "Explicit CUI markings",
            CuiCategory::HandlingContext => "Handling / dissemination language",
            CuiCategory::ProprietaryTech => "Proprietary technology",
        }
    }
}
