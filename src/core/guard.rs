use crate::domain::model::{GuardWarning, RawAmount, WithdrawalDecision};

const INSUFFICIENT_TITLE: &str = "Saldo Tidak Cukup";
const INSUFFICIENT_MESSAGE: &str = "Saldo simpanan masih 0, tidak bisa melakukan penarikan.";

/// Withdrawal guard: decides whether a withdrawal action may proceed,
/// given the balance attribute read off the triggering control. An
/// absent, unparsable, or non-positive balance blocks the action with a
/// warning to surface to the user. Fractional balances are truncated to
/// whole rupiah; this guard does not use the formatter.
pub fn check_withdrawal(saldo_attr: Option<&str>) -> WithdrawalDecision {
    let saldo = saldo_attr
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .unwrap_or(0.0);

    if saldo > 0.0 {
        WithdrawalDecision::Allow(RawAmount(saldo as u64))
    } else {
        WithdrawalDecision::Block(GuardWarning {
            title: INSUFFICIENT_TITLE,
            message: INSUFFICIENT_MESSAGE,
        })
    }
}
