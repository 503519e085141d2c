pub mod checklist;
pub mod commands;
pub mod config;
pub mod criteria;
pub mod error;
pub mod event;
pub mod gate;
pub mod github;
pub mod resolve;

/// Header rendered above every posted checklist
pub const DEFAULT_HEADER: &str = "### :ballot_box_with_check: Definition of Done checker";

/// Marker of an unchecked checklist line
pub const EMPTY_CHECKBOX: &str = "- [ ]";

/// Glyph used in criteria files to mark one level of nesting
pub const DEFAULT_INDENT_GLYPH: &str = "↳";
