// Lender matching service
//
// Pure business logic for matching loan deals against lender eligibility
// profiles, decoupled from the CLI and the persistent store.

pub mod core;
pub mod models;
pub mod narrative;
pub mod rules;

pub use self::core::{is_eligible, match_lenders};
pub use models::{ALL_INDUSTRIES, ChatMessage, Deal, Lender, Role, default_lenders, default_rules};
pub use narrative::build_recommendation;
pub use rules::{CompiledRule, RuleAction, compile_rule, compile_rules};
