pub mod analytics;
pub mod formatting;
