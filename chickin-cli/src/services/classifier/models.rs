//! Result types for the query classification service

use serde::Serialize;

use crate::data::models::{CustomerServiceData, EmployeeProductivityData, InventoryItem, MenuItem};

/// The classified purpose of a free-text query.
///
/// `LowestPerforming` and `BestPerforming` both render as `menuPerformance`
/// results; they are separate intents because they sort in opposite
/// directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    SalesAnalysis,
    InventoryStatus,
    LowestPerforming,
    BestPerforming,
    DemographicPreference,
    CustomerService,
    EmployeeProductivity,
    GeneralSearch,
}

/// Classifier output: one variant per response shape, tagged with the
/// discriminator the dashboard front-ends key on.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum QueryResult {
    #[serde(rename = "salesAnalysis")]
    SalesAnalysis {
        data: Vec<MenuItem>,
        explanation: String,
        insights: Vec<String>,
    },
    #[serde(rename = "inventoryStatus")]
    InventoryStatus {
        data: Vec<InventoryItem>,
        explanation: String,
        #[serde(rename = "criticalNames", skip_serializing_if = "Option::is_none")]
        critical_names: Option<Vec<String>>,
    },
    #[serde(rename = "menuPerformance")]
    MenuPerformance {
        data: Vec<MenuItem>,
        explanation: String,
    },
    #[serde(rename = "demographicPreference")]
    DemographicPreference {
        data: Vec<MenuItem>,
        demographic: String,
        explanation: String,
    },
    #[serde(rename = "customerService")]
    CustomerService {
        data: CustomerServiceData,
        explanation: String,
    },
    #[serde(rename = "employeeProductivity")]
    EmployeeProductivity {
        data: EmployeeProductivityData,
        explanation: String,
    },
    #[serde(rename = "generalSearch")]
    GeneralSearch {
        data: SearchResults,
        explanation: String,
    },
}

/// Payload of a fallback free-text search across menu and inventory
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub menu_items: Vec<MenuItem>,
    pub inventory: Vec<InventoryItem>,
}

impl QueryResult {
    /// The wire discriminator for this result shape
    pub fn tag(&self) -> &'static str {
        match self {
            QueryResult::SalesAnalysis { .. } => "salesAnalysis",
            QueryResult::InventoryStatus { .. } => "inventoryStatus",
            QueryResult::MenuPerformance { .. } => "menuPerformance",
            QueryResult::DemographicPreference { .. } => "demographicPreference",
            QueryResult::CustomerService { .. } => "customerService",
            QueryResult::EmployeeProductivity { .. } => "employeeProductivity",
            QueryResult::GeneralSearch { .. } => "generalSearch",
        }
    }

    pub fn explanation(&self) -> &str {
        match self {
            QueryResult::SalesAnalysis { explanation, .. }
            | QueryResult::InventoryStatus { explanation, .. }
            | QueryResult::MenuPerformance { explanation, .. }
            | QueryResult::DemographicPreference { explanation, .. }
            | QueryResult::CustomerService { explanation, .. }
            | QueryResult::EmployeeProductivity { explanation, .. }
            | QueryResult::GeneralSearch { explanation, .. } => explanation,
        }
    }
}
