//! # leavecal-countdown
//!
//! Picks the holiday block to count down to and computes the display state
//! for a given instant.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["&[Strategy]"] -->|"partition()"| B["basic / leave"]
//!     B -->|"select()"| C["Selection"]
//!     C -->|"state_at(now)"| D["CountdownState"]
//!     E["Ticker"] -->|"every second"| F["Countdown::tick(now)"]
//!     F --> D
//! ```
//!
//! | Module | Description |
//! |--------|-------------|
//! | `select` | Basic/leave partition, target and related-strategy selection |
//! | `state` | Display state and remaining-time breakdown |
//! | `session` | Stateful countdown that survives across ticks |
//! | `ticker` | Cancellable fixed-period tick loop |

mod select;
mod session;
mod state;
mod ticker;

pub use select::{Partition, Selection, partition, related_strategy, select, select_target};
pub use session::Countdown;
pub use state::{CountdownState, Remaining, state_at};
pub use ticker::{CancelHandle, Tick, Ticker};
