//! # EdgeLab Filter Engine
//!
//! Resolves the dashboard's declarative drill-down selectors into matching,
//! display-ordered ledger subsets.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** Depends only on `core-types`; no knowledge of the
//!   UI that produces selectors or the views that consume results.
//! - **Fail-Soft:** An unrecognized selector kind resolves to an empty
//!   result, never an error.

pub mod engine;
pub mod selector;

pub use engine::FilterEngine;
pub use selector::FilterSelector;
