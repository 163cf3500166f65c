//! In-memory fixture data backing the dashboard
//!
//! The reference deployment runs against fabricated data held entirely in
//! memory. Everything here is a snapshot of one trading week at a single
//! Chick-In location.

use super::models::{
    AgeGroupSentiment, AreaScore, CustomerServiceData, DepartmentScore, EmployeeProductivityData,
    EmployeeScore, HourlyScore, InventoryItem, KpiData, KpiMetric, MenuItem, PerformerScore,
    Sentiment, Shipment, ShipmentItem,
};

/// All fixture collections the dashboard and classifier read from
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub menu_items: Vec<MenuItem>,
    pub inventory_items: Vec<InventoryItem>,
    pub customer_service: CustomerServiceData,
    pub employee_productivity: EmployeeProductivityData,
    pub kpis: KpiData,
    pub shipments: Vec<Shipment>,
}

impl DashboardData {
    pub fn load() -> Self {
        Self {
            menu_items: menu_items(),
            inventory_items: inventory_items(),
            customer_service: customer_service(),
            employee_productivity: employee_productivity(),
            kpis: kpis(),
            shipments: shipments(),
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn menu_item(
    id: u32,
    name: &str,
    category: &str,
    price: f64,
    cost: f64,
    sales: u32,
    rating: f64,
    overall: f64,
    by_age: [f64; 4],
    keywords: [&str; 4],
) -> MenuItem {
    MenuItem {
        id,
        name: name.to_string(),
        category: category.to_string(),
        price,
        cost,
        sales,
        rating,
        sentiment: Sentiment {
            overall,
            by_age_group: AgeGroupSentiment {
                gen_z: by_age[0],
                millennials: by_age[1],
                gen_x: by_age[2],
                boomers: by_age[3],
            },
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        },
    }
}

pub fn menu_items() -> Vec<MenuItem> {
    vec![
        menu_item(
            1, "Chick-In Maple", "Signature Waffles", 9.99, 3.50, 430, 4.2, 0.76,
            [0.65, 0.82, 0.78, 0.75],
            ["juicy", "filling", "overpriced", "consistent"],
        ),
        menu_item(
            2, "Spicy Chick", "Signature Waffles", 8.99, 3.20, 310, 3.8, 0.62,
            [0.55, 0.63, 0.67, 0.70],
            ["dry", "plain", "healthy", "quick"],
        ),
        menu_item(
            3, "Chick-In Queso", "Signature Waffles", 7.99, 2.80, 380, 4.5, 0.88,
            [0.92, 0.90, 0.75, 0.65],
            ["fresh", "healthy", "expensive", "trendy"],
        ),
        menu_item(
            4, "Chick-In Fries", "Loaded Fries", 8.49, 2.50, 250, 4.0, 0.71,
            [0.60, 0.75, 0.80, 0.78],
            ["fresh", "light", "more dressing", "crisp"],
        ),
        menu_item(
            5, "Asian Chili Fries", "Loaded Fries", 11.99, 4.20, 420, 4.7, 0.89,
            [0.95, 0.88, 0.75, 0.68],
            ["authentic", "spicy", "flavorful", "filling"],
        ),
        menu_item(
            6, "Nashville Hot Fries", "Loaded Fries", 12.99, 4.50, 390, 4.4, 0.82,
            [0.80, 0.85, 0.82, 0.79],
            ["classic", "cheesy", "simple", "satisfying"],
        ),
        menu_item(
            7, "Buffalo Sandwich Meal", "Chick-In Buns", 10.49, 3.80, 280, 4.3, 0.78,
            [0.77, 0.82, 0.75, 0.72],
            ["fresh", "zesty", "light", "flavorful"],
        ),
        menu_item(
            8, "Classic Sandwich Meal", "Chick-In Buns", 6.99, 2.20, 200, 4.6, 0.86,
            [0.90, 0.88, 0.85, 0.82],
            ["rich", "decadent", "moist", "sweet"],
        ),
        menu_item(
            9, "Garlic Parmesan Sandwich Meal", "Chick-In Buns", 9.49, 3.30, 220, 4.1, 0.74,
            [0.78, 0.80, 0.70, 0.62],
            ["healthy", "fresh", "bland", "overpriced"],
        ),
        menu_item(
            10, "Boneless Wing Meal", "Wings", 18.99, 8.50, 150, 4.5, 0.83,
            [0.70, 0.82, 0.90, 0.88],
            ["premium", "tender", "expensive", "satisfying"],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn inventory_item(
    id: u32,
    name: &str,
    category: &str,
    current_stock: f64,
    min_required: f64,
    optimal_stock: f64,
    usage_rate: f64,
    supplier_lead_time: f64,
    last_ordered: &str,
    price: f64,
) -> InventoryItem {
    InventoryItem {
        id,
        name: name.to_string(),
        category: category.to_string(),
        current_stock,
        min_required,
        optimal_stock,
        usage_rate,
        supplier_lead_time,
        last_ordered: last_ordered.to_string(),
        price,
    }
}

pub fn inventory_items() -> Vec<InventoryItem> {
    vec![
        inventory_item(1, "Chicken Breast", "Proteins", 10.0, 15.0, 30.0, 5.0, 2.0, "2023-05-15", 4.99),
        inventory_item(2, "Waffle Mix", "Dry Goods", 8.0, 12.0, 25.0, 4.0, 2.0, "2023-05-16", 5.99),
        inventory_item(3, "Maple Syrup", "Condiments", 5.0, 8.0, 15.0, 3.0, 1.0, "2023-05-17", 1.99),
        inventory_item(4, "French Fries", "Frozen Foods", 20.0, 10.0, 20.0, 3.0, 1.0, "2023-05-16", 2.49),
        inventory_item(5, "Hot Sauce", "Condiments", 25.0, 20.0, 40.0, 8.0, 1.0, "2023-05-15", 3.99),
        inventory_item(6, "Cheese Blend", "Dairy", 35.0, 30.0, 60.0, 10.0, 2.0, "2023-05-14", 4.99),
        inventory_item(7, "Brioche Buns", "Bakery", 8.0, 5.0, 12.0, 1.0, 3.0, "2023-05-10", 2.99),
        inventory_item(8, "Lettuce", "Produce", 18.0, 15.0, 30.0, 6.0, 2.0, "2023-05-12", 6.99),
        inventory_item(9, "Tomatoes", "Produce", 25.0, 15.0, 30.0, 3.0, 3.0, "2023-05-08", 2.49),
        inventory_item(10, "Cooking Oil", "Dry Goods", 150.0, 100.0, 200.0, 20.0, 4.0, "2023-05-05", 1.99),
        inventory_item(11, "Napkins", "Supplies", 200.0, 150.0, 300.0, 25.0, 1.0, "2023-05-19", 0.99),
    ]
}

pub fn customer_service() -> CustomerServiceData {
    let area = |area: &str, score| AreaScore { area: area.to_string(), score };
    let performer = |name: &str, score| PerformerScore { name: name.to_string(), score };
    CustomerServiceData {
        score: 90,
        previous_score: 87,
        improvement_areas: vec![
            area("Wait Time", 78),
            area("Friendliness", 92),
            area("Issue Resolution", 85),
            area("Follow-up", 81),
        ],
        top_performers: vec![
            performer("Sarah Johnson", 98),
            performer("Michael Chen", 96),
            performer("David Garcia", 95),
        ],
        metrics_by_hour: [
            (8, 92), (9, 90), (10, 93), (11, 91), (12, 86), (13, 84), (14, 89),
            (15, 92), (16, 94), (17, 95), (18, 93), (19, 91), (20, 90),
        ]
        .iter()
        .map(|&(hour, score)| HourlyScore { hour, score })
        .collect(),
    }
}

pub fn employee_productivity() -> EmployeeProductivityData {
    let dept = |department: &str, score, change| DepartmentScore {
        department: department.to_string(),
        score,
        change,
    };
    let employee = |name: &str, department: &str, score| EmployeeScore {
        name: name.to_string(),
        department: department.to_string(),
        score,
    };
    EmployeeProductivityData {
        overall: 83,
        previous_period: 81,
        by_department: vec![
            dept("Kitchen", 86, 2),
            dept("Service", 84, 3),
            dept("Management", 90, 1),
            dept("Cleaning", 82, -1),
        ],
        top_employees: vec![
            employee("Jessica Wu", "Kitchen", 97),
            employee("Robert Smith", "Management", 96),
            employee("Elena Rodriguez", "Service", 95),
        ],
    }
}

pub fn kpis() -> KpiData {
    KpiData {
        revenue: KpiMetric { value: 24850.0, change: 3.2 },
        customer_satisfaction: KpiMetric { value: 90.0, change: 2.5 },
        employee_productivity: KpiMetric { value: 83.0, change: 1.5 },
        inventory_health: KpiMetric { value: 72.0, change: -1.8 },
    }
}

pub fn shipments() -> Vec<Shipment> {
    let item = |name: &str, quantity| ShipmentItem { name: name.to_string(), quantity };
    vec![
        Shipment {
            id: "SHP-001".to_string(),
            supplier: "Fresh Produce Co.".to_string(),
            items: vec![item("Lettuce", 30), item("Tomatoes", 50)],
            estimated_arrival: "2023-05-20".to_string(),
            arrived: true,
        },
        Shipment {
            id: "SHP-002".to_string(),
            supplier: "Premium Meats".to_string(),
            items: vec![item("Ground Beef", 40), item("Chicken Breast", 35)],
            estimated_arrival: "2023-05-23".to_string(),
            arrived: false,
        },
        Shipment {
            id: "SHP-003".to_string(),
            supplier: "Bakery Supplies".to_string(),
            items: vec![item("Burger Buns", 100), item("Flour", 25)],
            estimated_arrival: "2023-05-18".to_string(),
            arrived: false,
        },
        Shipment {
            id: "SHP-004".to_string(),
            supplier: "Restaurant Essentials".to_string(),
            items: vec![item("Napkins", 200), item("Condiment Packets", 500)],
            estimated_arrival: "2023-05-25".to_string(),
            arrived: false,
        },
    ]
}
