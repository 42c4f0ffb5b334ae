//! # leavecal-grid
//!
//! Builds the data behind the month and year calendar views. Nothing here
//! renders; the binary's presenter turns [`MonthGrid`]s into text.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Dataset + today + show flag"] -->|"GridContext::new()"| B["GridContext"]
//!     B -->|".classify(date)"| C["DayTag"]
//!     B -->|"build_month()"| D["MonthGrid"]
//!     B -->|"build_year()"| E["YearGrid"]
//!     F["CalendarView"] -->|"prev/next (clamped)"| G["MonthIndex"]
//!     G --> D
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month` | Zero-based month newtype with clamping |
//! | `classify` | Per-date tag with priority rules |
//! | `build` | Month/year grid assembly |
//! | `view` | Navigation state (view mode, current month) |
//! | `details` | Day detail lookup for a selected date |

mod build;
mod classify;
mod details;
mod month;
mod view;

pub use build::{GridDay, MonthGrid, YearGrid, build_month, build_year, day_mapping};
pub use classify::{DayTag, GridContext, LEAVE_LABEL};
pub use details::{DayDetails, day_details};
pub use month::MonthIndex;
pub use view::{CalendarView, ViewMode};
