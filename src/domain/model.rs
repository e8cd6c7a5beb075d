use serde::{Deserialize, Serialize};

/// Canonical currency value: whole rupiah, no sub-units, never negative.
/// Exists only transiently between extraction and formatting; nothing
/// persists it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RawAmount(pub u64);

impl RawAmount {
    pub const ZERO: RawAmount = RawAmount(0);

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for RawAmount {
    fn from(value: u64) -> Self {
        RawAmount(value)
    }
}

impl std::fmt::Display for RawAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Outcome of the withdrawal guard for one click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WithdrawalDecision {
    /// Balance is positive, let the default action proceed.
    Allow(RawAmount),
    /// Cancel the action and show a blocking warning.
    Block(GuardWarning),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardWarning {
    pub title: &'static str,
    pub message: &'static str,
}
