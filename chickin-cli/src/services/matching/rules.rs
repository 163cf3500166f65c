//! Custom-rule compilation
//!
//! Broker rules arrive as free text ("Don't send Bitty deals over $30K").
//! Instead of re-deriving intent from substrings during every match, the text
//! is compiled once at this boundary into a small tagged action type. Text
//! that does not fit the recognized exclusion pattern compiles to
//! `Unsupported` and has no effect on matching.

use regex::Regex;

use super::models::{Deal, Lender};

/// Dollar threshold written as $<digits>K, interpreted as thousands
const THRESHOLD_PATTERN: &str = r"\$(\d+)k";

/// The enforceable action extracted from a rule's text
#[derive(Debug, Clone, PartialEq)]
pub enum RuleAction {
    /// Exclude the named lender when the requested amount exceeds the threshold
    ExcludeOverAmount { lender_name: String, threshold: f64 },
    /// Recognized as text only; ignored by the matcher
    Unsupported,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompiledRule {
    pub raw: String,
    pub action: RuleAction,
}

impl CompiledRule {
    /// Whether this rule removes `lender` from the match set for `deal`
    pub fn excludes(&self, lender: &Lender, deal: &Deal) -> bool {
        match &self.action {
            RuleAction::ExcludeOverAmount { lender_name, threshold } => {
                lender.name.eq_ignore_ascii_case(lender_name)
                    && *threshold < deal.requested_amount
            }
            RuleAction::Unsupported => false,
        }
    }
}

/// Compile one free-text rule against the known lender list.
///
/// A rule is enforceable only when it contains exclusion phrasing ("don't
/// send" or "avoid"), mentions a known lender by name, and carries an
/// "over ... $<n>K" amount threshold. The name mention is required even for
/// "avoid" phrasing, so a generic "avoid high-risk industries" note never
/// silently applies to every lender.
pub fn compile_rule(raw: &str, lenders: &[Lender]) -> CompiledRule {
    let lowered = raw.to_lowercase();

    let is_exclusion = lowered.contains("don't send") || lowered.contains("avoid");
    if !is_exclusion {
        return unsupported(raw);
    }

    let Some(lender) = lenders
        .iter()
        .find(|l| !l.name.is_empty() && lowered.contains(&l.name.to_lowercase()))
    else {
        log::debug!("Rule names no known lender, ignoring: {}", raw);
        return unsupported(raw);
    };

    if !(lowered.contains("over") && lowered.contains('$')) {
        return unsupported(raw);
    }

    let pattern = Regex::new(THRESHOLD_PATTERN).unwrap();
    let Some(threshold) = pattern
        .captures(&lowered)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse::<u64>().ok())
    else {
        log::debug!("Rule has no parseable $<n>K threshold, ignoring: {}", raw);
        return unsupported(raw);
    };

    CompiledRule {
        raw: raw.to_string(),
        action: RuleAction::ExcludeOverAmount {
            lender_name: lender.name.clone(),
            threshold: (threshold * 1000) as f64,
        },
    }
}

/// Compile the full rule list; unsupported rules are kept (callers may want
/// to show why a rule has no effect) but never exclude anything.
pub fn compile_rules(rules: &[String], lenders: &[Lender]) -> Vec<CompiledRule> {
    rules.iter().map(|rule| compile_rule(rule, lenders)).collect()
}

fn unsupported(raw: &str) -> CompiledRule {
    CompiledRule {
        raw: raw.to_string(),
        action: RuleAction::Unsupported,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::matching::models::default_lenders;

    fn bitty() -> Vec<Lender> {
        let mut lenders = default_lenders();
        lenders[0].name = "Bitty".to_string();
        lenders
    }

    #[test]
    fn test_compile_amount_exclusion() {
        let compiled = compile_rule("Don't send Bitty deals over $30K", &bitty());
        assert_eq!(
            compiled.action,
            RuleAction::ExcludeOverAmount {
                lender_name: "Bitty".to_string(),
                threshold: 30_000.0,
            }
        );
    }

    #[test]
    fn test_avoid_phrasing_compiles() {
        let compiled = compile_rule("Avoid Bitty for anything over $50K", &bitty());
        assert_eq!(
            compiled.action,
            RuleAction::ExcludeOverAmount {
                lender_name: "Bitty".to_string(),
                threshold: 50_000.0,
            }
        );
    }

    #[test]
    fn test_avoid_without_lender_name_is_ignored() {
        let compiled = compile_rule("Avoid high-risk industries for Tier 1 lenders", &bitty());
        assert_eq!(compiled.action, RuleAction::Unsupported);
    }

    #[test]
    fn test_preference_note_is_ignored() {
        let compiled = compile_rule("FinAccess prefers healthcare businesses", &bitty());
        assert_eq!(compiled.action, RuleAction::Unsupported);
    }

    #[test]
    fn test_exclusion_without_threshold_is_ignored() {
        let compiled = compile_rule("Don't send Bitty anything risky", &bitty());
        assert_eq!(compiled.action, RuleAction::Unsupported);
    }

    #[test]
    fn test_excludes_respects_threshold() {
        let lenders = bitty();
        let compiled = compile_rule("Don't send Bitty deals over $30K", &lenders);
        let mut deal = Deal {
            business_name: "Test Co".to_string(),
            industry: "Retail".to_string(),
            revenue: 60_000.0,
            requested_amount: 25_000.0,
            time_in_business: 24,
            fico_score: 700,
            num_nsfs: 0,
            additional_notes: None,
        };
        assert!(!compiled.excludes(&lenders[0], &deal));
        deal.requested_amount = 35_000.0;
        assert!(compiled.excludes(&lenders[0], &deal));
        // Other lenders are untouched either way
        assert!(!compiled.excludes(&lenders[1], &deal));
    }
}
