//! Broker data models: lenders, deals, and the deal chat history

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Industry sentinel meaning a lender funds any industry
pub const ALL_INDUSTRIES: &str = "All";

/// A lender's eligibility profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lender {
    pub id: String,
    pub name: String,
    /// Preference rank, 1 (most preferred) to 3 (fallback)
    pub tier: u8,
    #[serde(rename = "minFICO")]
    pub min_fico: u16,
    #[serde(rename = "maxNSFs")]
    pub max_nsfs: u32,
    pub min_revenue: f64,
    pub max_amount: f64,
    pub industries: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Lender {
    /// True when the lender funds the deal's industry: either the "All"
    /// sentinel is present, or one of the lender's industries is a
    /// case-insensitive substring of the deal industry.
    pub fn serves_industry(&self, industry: &str) -> bool {
        if self.industries.iter().any(|i| i == ALL_INDUSTRIES) {
            return true;
        }
        let industry = industry.to_lowercase();
        self.industries
            .iter()
            .any(|candidate| industry.contains(&candidate.to_lowercase()))
    }
}

/// A loan application. Immutable once submitted; the chat history owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub business_name: String,
    pub industry: String,
    pub revenue: f64,
    pub requested_amount: f64,
    /// Months the business has been operating
    pub time_in_business: u32,
    pub fico_score: u16,
    #[serde(rename = "numNSFs")]
    pub num_nsfs: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry in the persisted deal conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deal: Option<Deal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<Lender>>,
}

impl ChatMessage {
    /// The user-side message recorded when a deal is submitted
    pub fn from_deal(deal: Deal) -> Self {
        let mut content = format!(
            "Analyzing funding options for {} in the {} industry. Revenue: ${}, Requested: ${}, FICO: {}, NSFs: {}, Time in Business: {} months.",
            deal.business_name,
            deal.industry,
            crate::services::matching::narrative::format_usd(deal.revenue),
            crate::services::matching::narrative::format_usd(deal.requested_amount),
            deal.fico_score,
            deal.num_nsfs,
            deal.time_in_business,
        );
        if let Some(notes) = &deal.additional_notes {
            content.push_str(&format!(" Additional notes: {}", notes));
        }
        ChatMessage {
            id: Uuid::new_v4(),
            role: Role::User,
            content,
            timestamp: Utc::now(),
            deal: Some(deal),
            recommendations: None,
        }
    }

    /// The assistant-side message carrying the recommendation narrative
    pub fn from_recommendation(content: String, recommendations: Vec<Lender>) -> Self {
        ChatMessage {
            id: Uuid::new_v4(),
            role: Role::Assistant,
            content,
            timestamp: Utc::now(),
            deal: None,
            recommendations: Some(recommendations),
        }
    }
}

/// Seed lender list used until an import replaces it
pub fn default_lenders() -> Vec<Lender> {
    let lender = |id: &str,
                  name: &str,
                  tier: u8,
                  min_fico: u16,
                  max_nsfs: u32,
                  min_revenue: f64,
                  max_amount: f64,
                  industries: &[&str],
                  notes: Option<&str>| Lender {
        id: id.to_string(),
        name: name.to_string(),
        tier,
        min_fico,
        max_nsfs,
        min_revenue,
        max_amount,
        industries: industries.iter().map(|i| i.to_string()).collect(),
        notes: notes.map(|n| n.to_string()),
    };
    vec![
        lender(
            "1", "Alpha Funding", 1, 680, 0, 50_000.0, 250_000.0,
            &["Retail", "Restaurants", "Technology", "Healthcare"],
            None,
        ),
        lender(
            "2", "Beta Capital", 2, 600, 3, 30_000.0, 150_000.0,
            &["Construction", "Manufacturing", "Retail", "Services"],
            None,
        ),
        lender("3", "Delta Finance", 3, 550, 5, 15_000.0, 75_000.0, &[ALL_INDUSTRIES], None),
        lender(
            "4", "Omega Partners", 1, 700, 0, 100_000.0, 500_000.0,
            &["Technology", "Healthcare", "Finance"],
            Some("Prefers established businesses with strong credit history"),
        ),
        lender(
            "5", "Gamma Investments", 2, 620, 2, 40_000.0, 200_000.0,
            &["Food Services", "Hospitality", "Retail"],
            None,
        ),
    ]
}

/// Seed custom rules matching the demo configuration
pub fn default_rules() -> Vec<String> {
    vec![
        "Don't send Bitty deals over $30K".to_string(),
        "FinAccess prefers healthcare businesses".to_string(),
        "Avoid high-risk industries for Tier 1 lenders".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serves_industry_sentinel() {
        let lender = default_lenders().remove(2); // Delta Finance, ["All"]
        assert!(lender.serves_industry("Basket Weaving"));
    }

    #[test]
    fn test_serves_industry_substring_case_insensitive() {
        let lender = default_lenders().remove(0); // Alpha Funding
        assert!(lender.serves_industry("retail clothing"));
        assert!(!lender.serves_industry("Mining"));
    }

    #[test]
    fn test_lender_wire_field_names() {
        let json = serde_json::to_value(&default_lenders()[0]).unwrap();
        assert_eq!(json["minFICO"], 680);
        assert_eq!(json["maxNSFs"], 0);
        assert_eq!(json["minRevenue"], 50_000.0);
    }

    #[test]
    fn test_deal_message_content() {
        let deal = Deal {
            business_name: "Waffle House of Cards".to_string(),
            industry: "Restaurants".to_string(),
            revenue: 80_000.0,
            requested_amount: 50_000.0,
            time_in_business: 24,
            fico_score: 700,
            num_nsfs: 1,
            additional_notes: Some("repeat customer".to_string()),
        };
        let message = ChatMessage::from_deal(deal);
        assert_eq!(message.role, Role::User);
        assert!(message.content.contains("$80,000"));
        assert!(message.content.contains("FICO: 700"));
        assert!(message.content.contains("Additional notes: repeat customer"));
        assert!(message.deal.is_some());
    }
}
