//! Core lender eligibility matching

use super::models::{Deal, Lender};
use super::rules::{self, CompiledRule};

/// Structural eligibility: every threshold must hold and the lender must
/// serve the deal's industry.
pub fn is_eligible(deal: &Deal, lender: &Lender) -> bool {
    if deal.fico_score < lender.min_fico {
        return false;
    }
    if deal.num_nsfs > lender.max_nsfs {
        return false;
    }
    if deal.revenue < lender.min_revenue {
        return false;
    }
    if deal.requested_amount > lender.max_amount {
        return false;
    }
    lender.serves_industry(&deal.industry)
}

/// Match a deal against the lender list under the given custom rules.
///
/// Returns the eligible lenders sorted ascending by tier (tier 1 first),
/// stable within a tier. Total: no matches is an empty vec, never an error.
pub fn match_lenders(deal: &Deal, lenders: &[Lender], rules: &[String]) -> Vec<Lender> {
    let compiled = rules::compile_rules(rules, lenders);
    let mut matched: Vec<Lender> = lenders
        .iter()
        .filter(|lender| is_eligible(deal, lender) && !excluded_by_rule(deal, lender, &compiled))
        .cloned()
        .collect();
    matched.sort_by_key(|lender| lender.tier);
    matched
}

fn excluded_by_rule(deal: &Deal, lender: &Lender, compiled: &[CompiledRule]) -> bool {
    compiled.iter().any(|rule| {
        let excluded = rule.excludes(lender, deal);
        if excluded {
            log::debug!("Rule excludes {}: {}", lender.name, rule.raw);
        }
        excluded
    })
}
