// Natural-language query classification service
//
// Routes free-text dashboard questions to a fixed set of canned response
// shapes via ordered substring predicates. Pure over the fixture data.

pub mod core;
pub mod models;

pub use self::core::{classify, intent_of};
pub use models::{Intent, QueryResult, SearchResults};
