//! Display formatting for quests, quest lists and action feedback.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the newtype wrappers here format whole lists and action outcomes. All
//! output is markdown, which the CLI renders with styling or prints as
//! plain text.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ List Wrappers & │    │   Formatted     │
//! │ (Quest, Status) │───▶│ Status Messages │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: list wrappers ([`ActiveQuests`], [`QuestHistory`])
//! - [`status`]: action feedback ([`OperationStatus`])
//! - [`datetime`]: timestamp and stopwatch formatting
//! - [`models`]: Display implementations for domain models
//!
//! ## Example
//!
//! ```rust
//! use quest_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Added quest 1");
//! assert_eq!(status.to_string(), "Success: Added quest 1\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod status;

pub use collections::{ActiveQuests, QuestHistory};
pub use datetime::{Elapsed, LocalDate, LocalDateTime};
pub use status::OperationStatus;
