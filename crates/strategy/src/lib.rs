//! # leavecal-strategy
//!
//! Display ordering and selection over [`Strategy`] lists.
//!
//! | Module | Description |
//! |--------|-------------|
//! | `rank` | Stable CP-value / total-days ordering |
//! | `filter` | Minimum-days, maximum-leave and labor-only filters |
//! | `rating` | CP value to star rating |
//! | `lookup` | Strategy-by-date lookups |
//!
//! [`Strategy`]: leavecal_model::Strategy

mod filter;
mod lookup;
mod rank;
mod rating;

pub use filter::StrategyFilter;
pub use lookup::strategy_for_date;
pub use rank::{compare_for_display, rank_strategies};
pub use rating::cp_stars;
