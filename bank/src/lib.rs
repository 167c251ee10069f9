//! # Bank
//!
//! Local, on-device state for the recycling assistant.
//!
//! - [`Wallet`]: the user's reward-point balance plus recycle history,
//!   persisted as one small JSON document. A missing or corrupt file is
//!   never fatal, it just means a fresh wallet.
//! - [`waste_banks`]: the static drop-off directory, filterable by the
//!   waste category a station accepts.

pub mod locations;
pub mod wallet;

pub use locations::{WasteBank, accepting, waste_banks};
pub use wallet::{HistoryEntry, Wallet};
