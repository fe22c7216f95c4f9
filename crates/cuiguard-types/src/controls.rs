//! Static compliance control registry.
//!
//! Maps every CUI category to curated framework control citations with
//! remediation guidance. This content is versioned with the crate; the
//! engine checks at ruleset load time that every category has a non-empty
//! entry, so an unmapped category at analysis time indicates version skew
//! between the ruleset and this registry.

use crate::CuiCategory;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Supported compliance frameworks.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum Framework {
    #[serde(rename = "NIST_SP_800_171")]
    Nist800_171,
    #[serde(rename = "CMMC_LEVEL_2")]
    CmmcLevel2,
    #[serde(rename = "FEDRAMP_MODERATE")]
    FedRampModerate,
}

impl Framework {
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::Nist800_171 => "NIST SP 800-171",
            Framework::CmmcLevel2 => "CMMC Level 2",
            Framework::FedRampModerate => "FedRAMP Moderate",
        }
    }
}

/// One static control mapping entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlMapping {
    pub framework: Framework,
    pub control_id: &'static str,
    pub recommendation: &'static str,
}

/// Explanation entry for a category, used by the explain use case.
#[derive(Debug, Clone)]
pub struct CategoryExplanation {
    /// Short title.
    pub title: &'static str,
    /// What the category covers and why it matters.
    pub description: &'static str,
    /// The control citations for the category.
    pub controls: &'static [ControlMapping],
}

const BASELINE_ACCESS: ControlMapping = ControlMapping {
    framework: Framework::Nist800_171,
    control_id: "3.1.1",
    recommendation: "Limit system access to authorized users and enforce least privilege for repositories holding this content.",
};

const BASELINE_AUDIT: ControlMapping = ControlMapping {
    framework: Framework::Nist800_171,
    control_id: "3.3.1",
    recommendation: "Create and retain audit logs covering access, changes, downloads, and sharing events.",
};

const BASELINE_CRYPTO: ControlMapping = ControlMapping {
    framework: Framework::Nist800_171,
    control_id: "3.13.8",
    recommendation: "Apply cryptographic protection to this content in transit (TLS 1.2+) and at rest.",
};

const CMMC_ACCESS: ControlMapping = ControlMapping {
    framework: Framework::CmmcLevel2,
    control_id: "AC.1.001",
    recommendation: "Limit information system access to authorized users, processes, and devices.",
};

const CMMC_AT_REST: ControlMapping = ControlMapping {
    framework: Framework::CmmcLevel2,
    control_id: "AC.3.018",
    recommendation: "Encrypt CUI at rest in file shares, object storage, and backups.",
};

const CMMC_IN_TRANSIT: ControlMapping = ControlMapping {
    framework: Framework::CmmcLevel2,
    control_id: "SC.3.177",
    recommendation: "Employ FIPS-validated cryptography to protect CUI in transit.",
};

const CMMC_AUDIT: ControlMapping = ControlMapping {
    framework: Framework::CmmcLevel2,
    control_id: "AU.2.041",
    recommendation: "Ensure actions on CUI can be traced to individual users through audit logging.",
};

const FEDRAMP_ACCOUNTS: ControlMapping = ControlMapping {
    framework: Framework::FedRampModerate,
    control_id: "AC-2",
    recommendation: "Manage accounts so only authorized users can reach systems holding this content.",
};

const FEDRAMP_CRYPTO: ControlMapping = ControlMapping {
    framework: Framework::FedRampModerate,
    control_id: "SC-13",
    recommendation: "Apply approved cryptographic protection to stored and transmitted content.",
};

const FEDRAMP_LOGGING: ControlMapping = ControlMapping {
    framework: Framework::FedRampModerate,
    control_id: "AU-2",
    recommendation: "Enable event logging for access to and distribution of this content.",
};

static SSN_CONTROLS: &[ControlMapping] = &[
    BASELINE_ACCESS,
    BASELINE_CRYPTO,
    ControlMapping {
        framework: Framework::Nist800_171,
        control_id: "3.8.3",
        recommendation: "Sanitize or destroy media containing SSNs before disposal or reuse.",
    },
    CMMC_ACCESS,
    CMMC_AT_REST,
    FEDRAMP_CRYPTO,
];

static DOD_ID_CONTROLS: &[ControlMapping] = &[
    BASELINE_ACCESS,
    BASELINE_AUDIT,
    CMMC_ACCESS,
    FEDRAMP_ACCOUNTS,
];

static CONTACT_INFO_CONTROLS: &[ControlMapping] = &[
    BASELINE_ACCESS,
    ControlMapping {
        framework: Framework::Nist800_171,
        control_id: "3.1.22",
        recommendation: "Control information posted or processed on publicly accessible systems.",
    },
    FEDRAMP_ACCOUNTS,
];

static ORG_IDENTIFIER_CONTROLS: &[ControlMapping] = &[
    BASELINE_ACCESS,
    BASELINE_AUDIT,
    CMMC_AUDIT,
];

static CONTRACT_NUMBER_CONTROLS: &[ControlMapping] = &[
    BASELINE_ACCESS,
    BASELINE_AUDIT,
    ControlMapping {
        framework: Framework::CmmcLevel2,
        control_id: "AC.2.013",
        recommendation: "Monitor and control remote access sessions that can reach contracting records.",
    },
    FEDRAMP_LOGGING,
];

static EXPORT_CONTROL_CONTROLS: &[ControlMapping] = &[
    ControlMapping {
        framework: Framework::Nist800_171,
        control_id: "3.1.3",
        recommendation: "Control the flow of export-controlled technical data in accordance with ITAR/EAR licensing.",
    },
    BASELINE_CRYPTO,
    CMMC_IN_TRANSIT,
    ControlMapping {
        framework: Framework::FedRampModerate,
        control_id: "AC-4",
        recommendation: "Enforce information flow control so export-controlled data cannot leave approved boundaries.",
    },
];

static CYBER_THREAT_CONTROLS: &[ControlMapping] = &[
    ControlMapping {
        framework: Framework::Nist800_171,
        control_id: "3.14.3",
        recommendation: "Monitor security alerts and advisories; handle threat indicators under the organization's sharing agreements.",
    },
    BASELINE_AUDIT,
    CMMC_AUDIT,
    FEDRAMP_LOGGING,
];

static CUI_MARKING_CONTROLS: &[ControlMapping] = &[
    ControlMapping {
        framework: Framework::Nist800_171,
        control_id: "3.8.4",
        recommendation: "Mark media with necessary CUI markings and distribution limitations per the NARA CUI Registry.",
    },
    BASELINE_ACCESS,
    CMMC_AT_REST,
    FEDRAMP_CRYPTO,
];

static HANDLING_CONTEXT_CONTROLS: &[ControlMapping] = &[
    ControlMapping {
        framework: Framework::Nist800_171,
        control_id: "3.8.4",
        recommendation: "Add the markings and dissemination controls the handling language implies; prohibit sharing until marked.",
    },
    ControlMapping {
        framework: Framework::Nist800_171,
        control_id: "3.1.3",
        recommendation: "Control the flow of CUI in accordance with the stated dissemination limits.",
    },
    CMMC_ACCESS,
];

static PROPRIETARY_TECH_CONTROLS: &[ControlMapping] = &[
    BASELINE_ACCESS,
    BASELINE_CRYPTO,
    ControlMapping {
        framework: Framework::FedRampModerate,
        control_id: "SC-28",
        recommendation: "Protect proprietary technical data at rest on all storage tiers.",
    },
];

/// Look up the static control mappings for a category.
///
/// Every category has a non-empty table; the engine verifies this at ruleset
/// load time.
pub fn control_mappings(category: CuiCategory) -> &'static [ControlMapping] {
    match category {
        CuiCategory::Ssn => SSN_CONTROLS,
        CuiCategory::DodId => DOD_ID_CONTROLS,
        CuiCategory::ContactInfo => CONTACT_INFO_CONTROLS,
        CuiCategory::OrgIdentifier => ORG_IDENTIFIER_CONTROLS,
        CuiCategory::ContractNumber => CONTRACT_NUMBER_CONTROLS,
        CuiCategory::ExportControl => EXPORT_CONTROL_CONTROLS,
        CuiCategory::CyberThreat => CYBER_THREAT_CONTROLS,
        CuiCategory::CuiMarking => CUI_MARKING_CONTROLS,
        CuiCategory::HandlingContext => HANDLING_CONTEXT_CONTROLS,
        CuiCategory::ProprietaryTech => PROPRIETARY_TECH_CONTROLS,
    }
}

/// Explain a category: title, description, and its control citations.
pub fn explain_category(category: CuiCategory) -> CategoryExplanation {
    let description = match category {
        CuiCategory::Ssn => {
            "Social Security numbers in the 000-00-0000 shape. Direct privacy CUI; \
             exposure typically triggers breach-notification duties."
        }
        CuiCategory::DodId => {
            "Ten-digit DoD identification numbers (EDIPI). Identifiers for DoD \
             personnel; treated as privacy CUI in contractor systems."
        }
        CuiCategory::ContactInfo => {
            "Email addresses and phone numbers. Sensitive on their own and a \
             strong amplifier when co-located with other categories."
        }
        CuiCategory::OrgIdentifier => {
            "Five-character CAGE codes identifying contracting organizations. \
             Low-signal alone, meaningful alongside contract data."
        }
        CuiCategory::ContractNumber => {
            "Government contract numbers (e.g. FA- and W-prefixed shapes). \
             Ties a document to specific procurement activity."
        }
        CuiCategory::ExportControl => {
            "ITAR / EAR references indicating export-controlled technical data. \
             Mishandling carries statutory penalties beyond contract remedies."
        }
        CuiCategory::CyberThreat => {
            "Cyber threat intelligence language: threat indicators, IOCs. \
             Usually shared under explicit dissemination agreements."
        }
        CuiCategory::CuiMarking => {
            "Explicit CUI banners and legacy markings (CUI//, FOUO, 'For \
             Official Use Only'). The document self-identifies as controlled."
        }
        CuiCategory::HandlingContext => {
            "Handling and dissemination control language ('do not distribute', \
             'need to know'). Signals controlled content even without markings."
        }
        CuiCategory::ProprietaryTech => {
            "Proprietary / trade-secret markers. Not CUI per se, but commonly \
             commingled with it and subject to similar handling."
        }
    };

    CategoryExplanation {
        title: category.label(),
        description,
        controls: control_mappings(category),
    }
}
