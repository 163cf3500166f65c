//! Recommendation narrative generation
//!
//! Renders the matcher's output as the multi-section report the assistant
//! posts into the deal chat.

use super::models::{Deal, Lender};

/// Build the full recommendation text for a matched deal.
///
/// Empty match sets get a single fallback paragraph; otherwise the report has
/// per-tier sections (omitted when empty), a deal analysis keyed on FICO and
/// NSF buckets, and a fixed next-steps list naming the top lender.
pub fn build_recommendation(deal: &Deal, matched: &[Lender]) -> String {
    if matched.is_empty() {
        return format!(
            "After analyzing {}, I couldn't find suitable lenders that match the deal parameters. \
             Consider adjusting the requested amount, or check for alternative funding sources for \
             businesses with FICO {} and {} NSFs in the {} industry.",
            deal.business_name, deal.fico_score, deal.num_nsfs, deal.industry
        );
    }

    let mut report = format!(
        "Based on my analysis for {} ({}), here are my funding recommendations:\n\n",
        deal.business_name, deal.industry
    );

    let sections: [(&str, u8); 3] = [
        ("PRIMARY RECOMMENDATIONS", 1),
        ("SECONDARY OPTIONS", 2),
        ("FALLBACK LENDERS", 3),
    ];
    for (title, tier) in sections {
        let in_tier: Vec<&Lender> = matched.iter().filter(|l| l.tier == tier).collect();
        if in_tier.is_empty() {
            continue;
        }
        report.push_str(title);
        report.push_str(":\n");
        for lender in in_tier {
            match &lender.notes {
                Some(notes) => report.push_str(&format!("• {} ({})\n", lender.name, notes)),
                None => report.push_str(&format!("• {}\n", lender.name)),
            }
        }
        report.push('\n');
    }

    report.push_str("DEAL ANALYSIS:\n");
    if deal.fico_score >= 700 {
        report.push_str(&format!(
            "• Strong FICO score ({}) is favorable for premium rates\n",
            deal.fico_score
        ));
    } else if deal.fico_score >= 600 {
        report.push_str(&format!(
            "• Moderate FICO score ({}) may impact rates but still qualifies for good options\n",
            deal.fico_score
        ));
    } else {
        report.push_str(&format!(
            "• Lower FICO score ({}) limits top-tier options but alternative funding is available\n",
            deal.fico_score
        ));
    }
    if deal.num_nsfs == 0 {
        report.push_str("• No NSFs is excellent for qualification\n");
    } else if deal.num_nsfs <= 3 {
        report.push_str(&format!(
            "• {} NSFs may affect terms but still within acceptable range for many lenders\n",
            deal.num_nsfs
        ));
    } else {
        report.push_str(&format!(
            "• Higher NSF count ({}) restricts options to more flexible lenders\n",
            deal.num_nsfs
        ));
    }

    let top_lender = matched
        .first()
        .map(|l| l.name.as_str())
        .unwrap_or("your selected lender");
    report.push_str("\nNEXT STEPS:\n");
    report.push_str(&format!(
        "1. Submit application to {} as first priority\n",
        top_lender
    ));
    report.push_str(&format!(
        "2. Prepare bank statements and proof of revenue (${})\n",
        format_usd(deal.revenue)
    ));
    report.push_str("3. Be ready to explain any NSFs or credit issues during underwriting\n");

    report
}

/// Whole-dollar amount with comma grouping ("1234567" -> "1,234,567")
pub fn format_usd(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if whole < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::matching::models::default_lenders;

    fn deal(fico: u16, nsfs: u32) -> Deal {
        Deal {
            business_name: "Cluckworks LLC".to_string(),
            industry: "Restaurants".to_string(),
            revenue: 85_000.0,
            requested_amount: 40_000.0,
            time_in_business: 30,
            fico_score: fico,
            num_nsfs: nsfs,
            additional_notes: None,
        }
    }

    #[test]
    fn test_empty_match_fallback_paragraph() {
        let report = build_recommendation(&deal(580, 6), &[]);
        assert!(report.contains("couldn't find suitable lenders"));
        assert!(report.contains("FICO 580"));
        assert!(!report.contains("NEXT STEPS"));
    }

    #[test]
    fn test_sections_present_and_empty_tiers_omitted() {
        let lenders = default_lenders();
        // Tier 1 and tier 3 only
        let matched = vec![lenders[0].clone(), lenders[2].clone()];
        let report = build_recommendation(&deal(720, 0), &matched);
        assert!(report.contains("PRIMARY RECOMMENDATIONS:\n• Alpha Funding"));
        assert!(report.contains("FALLBACK LENDERS:\n• Delta Finance"));
        assert!(!report.contains("SECONDARY OPTIONS"));
        assert!(report.contains("1. Submit application to Alpha Funding as first priority"));
        assert!(report.contains("$85,000"));
    }

    #[test]
    fn test_lender_notes_rendered_inline() {
        let lenders = default_lenders();
        let matched = vec![lenders[3].clone()]; // Omega Partners, has notes
        let report = build_recommendation(&deal(720, 0), &matched);
        assert!(report.contains("• Omega Partners (Prefers established businesses"));
    }

    #[test]
    fn test_fico_buckets() {
        let matched = vec![default_lenders().remove(2)];
        assert!(build_recommendation(&deal(700, 0), &matched).contains("Strong FICO score (700)"));
        assert!(build_recommendation(&deal(650, 0), &matched).contains("Moderate FICO score (650)"));
        assert!(build_recommendation(&deal(580, 0), &matched).contains("Lower FICO score (580)"));
    }

    #[test]
    fn test_nsf_buckets() {
        let matched = vec![default_lenders().remove(2)];
        assert!(build_recommendation(&deal(700, 0), &matched).contains("No NSFs is excellent"));
        assert!(build_recommendation(&deal(700, 2), &matched).contains("2 NSFs may affect terms"));
        assert!(build_recommendation(&deal(700, 5), &matched).contains("Higher NSF count (5)"));
    }

    #[test]
    fn test_format_usd_grouping() {
        assert_eq!(format_usd(0.0), "0");
        assert_eq!(format_usd(999.0), "999");
        assert_eq!(format_usd(25_000.0), "25,000");
        assert_eq!(format_usd(1_234_567.0), "1,234,567");
    }
}
