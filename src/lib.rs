pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::PageConfig;

pub use core::binder::{initialize, Bindings};
pub use core::format::{apply_prefix, extract_raw_amount, format_grouped, mask};
pub use core::guard::check_withdrawal;
pub use domain::model::{RawAmount, WithdrawalDecision};
pub use domain::ports::{DefaultMarkers, Document, MarkerProvider, TextField};
pub use utils::error::{Result, RupiahError};
