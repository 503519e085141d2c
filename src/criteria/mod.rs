//! Definition of Done criteria: types, loading, and validation

mod loader;
mod types;


pub use loader::{load_criteria, parse_criteria};
pub use types::{CriteriaSet, Criterion};
