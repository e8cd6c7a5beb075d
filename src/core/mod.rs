pub mod binder;
pub mod display;
pub mod format;
pub mod guard;
pub mod masking;

pub use crate::domain::model::{GuardWarning, RawAmount, WithdrawalDecision};
pub use crate::domain::ports::{DefaultMarkers, Document, MarkerProvider, TextField};
pub use crate::utils::error::Result;
