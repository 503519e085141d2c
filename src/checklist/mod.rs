//! Checklist rendering, location, and satisfaction

pub mod compose;
pub mod evaluate;
pub mod locate;

pub use compose::compose;
pub use evaluate::{evaluate, SatisfactionResult};
pub use locate::{locate, ChecklistBlock, Located};
