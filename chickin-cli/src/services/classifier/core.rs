//! Core query classification: ordered substring predicates, first match wins

use super::models::{Intent, QueryResult, SearchResults};
use crate::data::DashboardData;
use crate::data::models::{InventoryItem, MenuItem};
use crate::services::inventory::{StockStatus, stock_status};

type Predicate = fn(&str) -> bool;

/// Ordered intent branches. Evaluation is strictly top-to-bottom and the
/// first matching predicate wins, so a query touching several topics resolves
/// to the earliest branch. Reordering these changes classification results.
const BRANCHES: &[(Predicate, Intent)] = &[
    (is_sales_analysis, Intent::SalesAnalysis),
    (is_inventory_status, Intent::InventoryStatus),
    (is_lowest_performing, Intent::LowestPerforming),
    (is_best_performing, Intent::BestPerforming),
    (is_demographic, Intent::DemographicPreference),
    (is_customer_service, Intent::CustomerService),
    (is_employee_productivity, Intent::EmployeeProductivity),
];

fn is_sales_analysis(q: &str) -> bool {
    q.contains("sales") && (q.contains("low") || q.contains("poor") || q.contains("why"))
}

fn is_inventory_status(q: &str) -> bool {
    (q.contains("inventory") || q.contains("stock"))
        && (q.contains("critical") || q.contains("low") || q.contains("urgent"))
}

fn is_lowest_performing(q: &str) -> bool {
    q.contains("lowest performing")
}

fn is_best_performing(q: &str) -> bool {
    q.contains("best performing")
}

fn is_demographic(q: &str) -> bool {
    q.contains("gen z") || q.contains("young")
}

fn is_customer_service(q: &str) -> bool {
    q.contains("customer service") || q.contains("satisfaction")
}

fn is_employee_productivity(q: &str) -> bool {
    q.contains("employee") || q.contains("productivity")
}

/// Resolve a query to its intent. Expects no particular casing; the query is
/// lower-cased before matching. Falls through to `GeneralSearch`.
pub fn intent_of(query: &str) -> Intent {
    let normalized = query.to_lowercase();
    for (predicate, intent) in BRANCHES {
        if predicate(&normalized) {
            return *intent;
        }
    }
    Intent::GeneralSearch
}

/// Classify a free-text query against the dashboard data.
///
/// Deterministic for a given query and data snapshot, and total: the worst
/// case is a `GeneralSearch` result with empty lists. Latency simulation and
/// history persistence are the caller's concern.
pub fn classify(data: &DashboardData, query: &str) -> QueryResult {
    let normalized = query.to_lowercase();
    match intent_of(query) {
        Intent::SalesAnalysis => sales_analysis(data),
        Intent::InventoryStatus => inventory_status(data, &normalized),
        Intent::LowestPerforming => QueryResult::MenuPerformance {
            data: by_sales_ascending(&data.menu_items, 3),
            explanation: "These are the lowest performing menu items based on sales volume."
                .to_string(),
        },
        Intent::BestPerforming => QueryResult::MenuPerformance {
            data: by_sales_descending(&data.menu_items, 3),
            explanation: "These are the best performing menu items based on sales volume."
                .to_string(),
        },
        Intent::DemographicPreference => demographic_preference(data),
        Intent::CustomerService => QueryResult::CustomerService {
            data: data.customer_service.clone(),
            explanation: "Here's the latest customer service performance data.".to_string(),
        },
        Intent::EmployeeProductivity => QueryResult::EmployeeProductivity {
            data: data.employee_productivity.clone(),
            explanation: "Here's the current employee productivity metrics.".to_string(),
        },
        Intent::GeneralSearch => general_search(data, query, &normalized),
    }
}

fn by_sales_ascending(items: &[MenuItem], count: usize) -> Vec<MenuItem> {
    let mut sorted = items.to_vec();
    sorted.sort_by_key(|item| item.sales);
    sorted.truncate(count);
    sorted
}

fn by_sales_descending(items: &[MenuItem], count: usize) -> Vec<MenuItem> {
    let mut sorted = items.to_vec();
    sorted.sort_by_key(|item| std::cmp::Reverse(item.sales));
    sorted.truncate(count);
    sorted
}

fn sales_analysis(data: &DashboardData) -> QueryResult {
    let lowest = by_sales_ascending(&data.menu_items, 3);

    let insights = match lowest.first() {
        Some(worst) => {
            let avg_sales = data.menu_items.iter().map(|i| f64::from(i.sales)).sum::<f64>()
                / data.menu_items.len() as f64;
            let percent_below_avg = (avg_sales - f64::from(worst.sales)) / avg_sales * 100.0;
            vec![
                format!(
                    "Sales are below average in several categories, with the worst performer ({}) being {:.1}% below the average.",
                    worst.name, percent_below_avg
                ),
                format!(
                    "{} items generally have lower performance compared to other categories.",
                    worst.category
                ),
                "Customer sentiment analysis suggests pricing and portion size concerns for these items."
                    .to_string(),
            ]
        }
        None => Vec::new(),
    };

    QueryResult::SalesAnalysis {
        data: lowest,
        explanation: "Analysis of underperforming menu items".to_string(),
        insights,
    }
}

fn inventory_status(data: &DashboardData, normalized: &str) -> QueryResult {
    let urgent: Vec<InventoryItem> = data
        .inventory_items
        .iter()
        .filter(|item| stock_status(item) == StockStatus::Urgent)
        .cloned()
        .collect();

    let wants_names = normalized.contains("name")
        || normalized.contains("what")
        || normalized.contains("which");

    if wants_names {
        let names: Vec<String> = urgent.iter().map(|item| item.name.clone()).collect();
        QueryResult::InventoryStatus {
            explanation: format!(
                "The following items need urgent attention: {}",
                names.join(", ")
            ),
            data: urgent,
            critical_names: Some(names),
        }
    } else {
        QueryResult::InventoryStatus {
            data: urgent,
            explanation:
                "These inventory items need urgent attention as they are below critical levels."
                    .to_string(),
            critical_names: None,
        }
    }
}

fn demographic_preference(data: &DashboardData) -> QueryResult {
    let mut sorted = data.menu_items.clone();
    sorted.sort_by(|a, b| {
        b.sentiment
            .by_age_group
            .gen_z
            .partial_cmp(&a.sentiment.by_age_group.gen_z)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.truncate(3);
    QueryResult::DemographicPreference {
        data: sorted,
        demographic: "Gen Z".to_string(),
        explanation:
            "These menu items are most popular with Gen Z customers based on sentiment analysis."
                .to_string(),
    }
}

fn general_search(data: &DashboardData, raw_query: &str, normalized: &str) -> QueryResult {
    let menu_items: Vec<MenuItem> = data
        .menu_items
        .iter()
        .filter(|item| {
            item.name.to_lowercase().contains(normalized)
                || item.category.to_lowercase().contains(normalized)
        })
        .cloned()
        .collect();
    let inventory: Vec<InventoryItem> = data
        .inventory_items
        .iter()
        .filter(|item| {
            item.name.to_lowercase().contains(normalized)
                || item.category.to_lowercase().contains(normalized)
        })
        .cloned()
        .collect();

    QueryResult::GeneralSearch {
        data: SearchResults { menu_items, inventory },
        explanation: format!("Search results for \"{}\"", raw_query),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> DashboardData {
        DashboardData::load()
    }

    #[test]
    fn test_lowest_performing_query() {
        let result = classify(&data(), "Show me the lowest performing menu items");
        match result {
            QueryResult::MenuPerformance { data, .. } => {
                assert_eq!(data.len(), 3);
                assert!(data[0].sales <= data[1].sales && data[1].sales <= data[2].sales);
                // Boneless Wing Meal has the fewest sales in the fixture
                assert_eq!(data[0].name, "Boneless Wing Meal");
            }
            other => panic!("expected menuPerformance, got {}", other.tag()),
        }
    }

    #[test]
    fn test_best_performing_query() {
        let result = classify(&data(), "What are the best performing items?");
        match result {
            QueryResult::MenuPerformance { data, .. } => {
                assert_eq!(data.len(), 3);
                assert_eq!(data[0].name, "Chick-In Maple");
            }
            other => panic!("expected menuPerformance, got {}", other.tag()),
        }
    }

    #[test]
    fn test_urgent_inventory_query_filters_to_urgent_only() {
        let fixtures = data();
        let result = classify(&fixtures, "What inventory items need urgent attention?");
        match result {
            QueryResult::InventoryStatus { data, critical_names, .. } => {
                assert!(!data.is_empty());
                for item in &data {
                    assert_eq!(stock_status(item), StockStatus::Urgent);
                }
                // "what" asks for names directly
                let names = critical_names.expect("names requested");
                assert_eq!(names.len(), data.len());
            }
            other => panic!("expected inventoryStatus, got {}", other.tag()),
        }
    }

    #[test]
    fn test_inventory_query_without_name_request() {
        let result = classify(&data(), "critical stock levels");
        match result {
            QueryResult::InventoryStatus { critical_names, .. } => {
                assert!(critical_names.is_none());
            }
            other => panic!("expected inventoryStatus, got {}", other.tag()),
        }
    }

    #[test]
    fn test_sales_analysis_insights() {
        let result = classify(&data(), "Why are sales so low this week?");
        match result {
            QueryResult::SalesAnalysis { data, insights, .. } => {
                assert_eq!(data.len(), 3);
                assert_eq!(insights.len(), 3);
                // Fixture mean is 303 sales; the worst item sells 150
                assert!(insights[0].contains("Boneless Wing Meal"));
                assert!(insights[0].contains("50.5%"));
                assert!(insights[1].starts_with("Wings"));
            }
            other => panic!("expected salesAnalysis, got {}", other.tag()),
        }
    }

    #[test]
    fn test_branch_order_is_first_match_wins() {
        // Matches both the inventory branch and "lowest performing", but the
        // inventory branch is listed earlier.
        assert_eq!(
            intent_of("lowest performing critical inventory items"),
            Intent::InventoryStatus
        );
        // "sales" + "low" outranks everything below it
        assert_eq!(
            intent_of("low sales and critical stock"),
            Intent::SalesAnalysis
        );
    }

    #[test]
    fn test_demographic_query() {
        let result = classify(&data(), "what do gen z customers like?");
        match result {
            QueryResult::DemographicPreference { data, demographic, .. } => {
                assert_eq!(demographic, "Gen Z");
                assert_eq!(data.len(), 3);
                // Asian Chili Fries has the top Gen Z sub-score (0.95)
                assert_eq!(data[0].name, "Asian Chili Fries");
            }
            other => panic!("expected demographicPreference, got {}", other.tag()),
        }
    }

    #[test]
    fn test_fixture_queries_route_to_full_fixtures() {
        assert_eq!(intent_of("how is customer satisfaction?"), Intent::CustomerService);
        assert_eq!(intent_of("employee productivity report"), Intent::EmployeeProductivity);
    }

    #[test]
    fn test_general_search_fallback() {
        let result = classify(&data(), "waffles");
        match result {
            QueryResult::GeneralSearch { data, explanation } => {
                assert!(explanation.contains("waffles"));
                assert!(!data.menu_items.is_empty()); // "Signature Waffles" category
                assert!(data.inventory.is_empty());
            }
            other => panic!("expected generalSearch, got {}", other.tag()),
        }
    }

    #[test]
    fn test_general_search_no_matches_is_empty_not_error() {
        let result = classify(&data(), "zzzzz");
        match result {
            QueryResult::GeneralSearch { data, .. } => {
                assert!(data.menu_items.is_empty());
                assert!(data.inventory.is_empty());
            }
            other => panic!("expected generalSearch, got {}", other.tag()),
        }
    }

    #[test]
    fn test_json_tagging() {
        let result = classify(&data(), "best performing");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["type"], "menuPerformance");
        assert!(json["data"].is_array());
    }
}
