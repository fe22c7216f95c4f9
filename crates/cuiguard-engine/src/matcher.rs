//! The pattern matcher: ruleset × text → ordered raw hits.

use crate::error::AnalysisError;
use crate::ruleset::Ruleset;
use cuiguard_types::{PatternHit, Span};

/// Cap on stored excerpt length, in characters.
pub const EXCERPT_CAP_CHARS: usize = 1200;

/// Marker appended to excerpts cut at the cap.
pub const TRUNCATION_MARKER: &str = "…[truncated]";

/// Scan document bytes against every rule in the set.
///
/// Fails only on undecodable input; absence of matches is an empty sequence,
/// not an error.
pub fn scan(
    document: &[u8],
    ruleset: &Ruleset,
    store_excerpt: bool,
) -> Result<Vec<PatternHit>, AnalysisError> {
    let text = std::str::from_utf8(document).map_err(|e| AnalysisError::InvalidEncoding {
        valid_up_to: e.valid_up_to(),
    })?;
    Ok(scan_text(text, ruleset, store_excerpt))
}

/// Scan already-decoded text.
///
/// Every rule is applied independently; overlapping matches are all kept and
/// no rule short-circuits another. Hits are emitted in ascending span start,
/// ties broken by rule id, so output order is stable across runs.
pub fn scan_text(text: &str, ruleset: &Ruleset, store_excerpt: bool) -> Vec<PatternHit> {
    let mut hits = Vec::new();

    for rule in ruleset.rules() {
        for m in rule.matcher().find_iter(text) {
            hits.push(PatternHit {
                rule_id: rule.id.to_string(),
                category: rule.category,
                span: Span {
                    start: m.start(),
                    end: m.end(),
                },
                matched_text: store_excerpt.then(|| excerpt(m.as_str())),
            });
        }
    }

    hits.sort_by(|a, b| {
        a.span
            .start
            .cmp(&b.span.start)
            .then_with(|| a.rule_id.cmp(&b.rule_id))
    });

    hits
}

/// Char-cap an excerpt, marking the cut.
fn excerpt(matched: &str) -> String {
    match matched.char_indices().nth(EXCERPT_CAP_CHARS) {
        None => matched.to_string(),
        Some((byte_idx, _)) => {
            let mut out = String::with_capacity(byte_idx + TRUNCATION_MARKER.len());
            out.push_str(&matched[..byte_idx]);
            out.push_str(TRUNCATION_MARKER);
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::RulesetProfile;
    use cuiguard_types::{CuiCategory, ids};

    fn standard() -> Ruleset {
        Ruleset::load(RulesetProfile::Standard).expect("load standard ruleset")
    }

    #[test]
    fn no_matches_is_empty_not_error() {
        let hits = scan(b"nothing sensitive in here", &standard(), true).expect("scan");
        assert!(hits.is_empty());
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let err = scan(&[0x66, 0x6f, 0xff, 0xfe], &standard(), true).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::InvalidEncoding { valid_up_to: 2 }
        ));
    }

    #[test]
    fn hits_are_ordered_by_position_then_rule_id() {
        let text = "id 1234567890 then 123-45-6789 and a@b.gov";
        let hits = scan_text(text, &standard(), true);
        let spans: Vec<usize> = hits.iter().map(|h| h.span.start).collect();
        let mut sorted = spans.clone();
        sorted.sort_unstable();
        assert_eq!(spans, sorted);
        assert_eq!(hits[0].rule_id, ids::RULE_DOD_EDIPI);
        assert_eq!(hits[1].rule_id, ids::RULE_SSN);
    }

    #[test]
    fn overlapping_matches_are_all_kept() {
        // The CUI phrase rule and the banner rule both match inside a banner.
        let text = "CUI//SP-PRIV distribution restricted";
        let hits = scan_text(text, &standard(), true);
        let rule_ids: Vec<&str> = hits.iter().map(|h| h.rule_id.as_str()).collect();
        assert!(rule_ids.contains(&ids::RULE_CUI_PHRASE));
        assert!(rule_ids.contains(&ids::RULE_CUI_BANNER));
    }

    #[test]
    fn excerpt_flag_controls_matched_text_only() {
        let text = "ssn 123-45-6789 here";
        let with = scan_text(text, &standard(), true);
        let without = scan_text(text, &standard(), false);

        assert_eq!(with.len(), without.len());
        assert_eq!(with[0].matched_text.as_deref(), Some("123-45-6789"));
        assert!(without[0].matched_text.is_none());
        assert_eq!(with[0].span, without[0].span);
    }

    #[test]
    fn long_matches_are_capped_with_marker() {
        let long = "x".repeat(EXCERPT_CAP_CHARS + 50);
        let capped = excerpt(&long);
        assert!(capped.ends_with(TRUNCATION_MARKER));
        assert_eq!(
            capped.chars().count(),
            EXCERPT_CAP_CHARS + TRUNCATION_MARKER.chars().count()
        );

        let short = excerpt("123-45-6789");
        assert_eq!(short, "123-45-6789");
    }

    #[test]
    fn hit_categories_come_from_the_matching_rule() {
        let hits = scan_text("call 555-867-5309 x", &standard(), false);
        assert!(
            hits.iter()
                .all(|h| h.category == CuiCategory::ContactInfo || h.category == CuiCategory::Ssn
                    || h.category == CuiCategory::DodId)
        );
        assert!(
            hits.iter()
                .any(|h| h.rule_id == ids::RULE_PHONE && h.category == CuiCategory::ContactInfo)
        );
    }
}
