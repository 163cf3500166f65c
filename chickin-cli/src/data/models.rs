//! Data models for the operations dashboard

use serde::{Deserialize, Serialize};

/// A menu item with its sales and customer sentiment figures
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub cost: f64,
    pub sales: u32,
    pub rating: f64,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentiment {
    pub overall: f64,
    pub by_age_group: AgeGroupSentiment,
    pub keywords: Vec<String>,
}

/// Sentiment sub-scores per customer age group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgeGroupSentiment {
    #[serde(rename = "Gen Z")]
    pub gen_z: f64,
    #[serde(rename = "Millennials")]
    pub millennials: f64,
    #[serde(rename = "Gen X")]
    pub gen_x: f64,
    #[serde(rename = "Boomers")]
    pub boomers: f64,
}

/// A stocked ingredient or supply item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub current_stock: f64,
    pub min_required: f64,
    pub optimal_stock: f64,
    /// Units consumed per day
    pub usage_rate: f64,
    /// Days between placing an order and delivery
    pub supplier_lead_time: f64,
    pub last_ordered: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerServiceData {
    pub score: u32,
    pub previous_score: u32,
    pub improvement_areas: Vec<AreaScore>,
    pub top_performers: Vec<PerformerScore>,
    pub metrics_by_hour: Vec<HourlyScore>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaScore {
    pub area: String,
    pub score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformerScore {
    pub name: String,
    pub score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyScore {
    pub hour: u32,
    pub score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeProductivityData {
    pub overall: u32,
    pub previous_period: u32,
    pub by_department: Vec<DepartmentScore>,
    pub top_employees: Vec<EmployeeScore>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentScore {
    pub department: String,
    pub score: u32,
    pub change: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeScore {
    pub name: String,
    pub department: String,
    pub score: u32,
}

/// Headline key performance indicators shown on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiData {
    pub revenue: KpiMetric,
    pub customer_satisfaction: KpiMetric,
    pub employee_productivity: KpiMetric,
    pub inventory_health: KpiMetric,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiMetric {
    pub value: f64,
    /// Percentage change against the previous period
    pub change: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub id: String,
    pub supplier: String,
    pub items: Vec<ShipmentItem>,
    pub estimated_arrival: String,
    pub arrived: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentItem {
    pub name: String,
    pub quantity: u32,
}
