pub mod dashboard;
pub mod use_cases;
