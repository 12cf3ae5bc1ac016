//! Per-share normalization of dividend payments.
//!
//! A dividend transaction books a gross amount in money units for a number
//! of shares held. Prices are on the quote scale, so the amount is first
//! lifted onto the quote scale, compensating for the share scale, and then
//! spread over the shares:
//!
//! ```text
//! scaled    = round(gross × share_divider × quote_factor_to_money)
//! per_share = scaled / shares            (integer division, skipped if shares == 0)
//! result    = per_share / quote_divider  (currency units per share)
//! ```

use divyield_core::ValueScale;
use divyield_portfolio::{AccountTransaction, AccountTransactionType, SecurityId, UnitType};

/// Returns true if `transaction` is a dividend payment for `security`.
#[must_use]
pub fn is_dividend_for(transaction: &AccountTransaction, security: SecurityId) -> bool {
    transaction.kind() == AccountTransactionType::Dividends
        && transaction.security() == Some(security)
}

/// The authoritative gross amount of a dividend in money units.
///
/// A gross value unit restates the payment in the security's currency and
/// takes precedence; otherwise the transaction's own gross value is used.
#[must_use]
pub fn gross_amount(transaction: &AccountTransaction) -> i64 {
    transaction
        .unit(UnitType::GrossValue)
        .and_then(|unit| unit.forex())
        .map_or_else(|| transaction.gross_value_amount(), |forex| forex.amount())
}

/// Rounds half up, matching the rounding of the stored fixed-point values.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// The dividend paid per share, in currency units.
///
/// With a share count of zero the whole rescaled gross amount is returned.
/// The division by the share count truncates before the conversion to
/// floating point, so sub-unit remainders on the quote scale are dropped.
#[must_use]
pub fn per_share_amount(transaction: &AccountTransaction, scale: &ValueScale) -> f64 {
    let gross = gross_amount(transaction) as f64;
    let scaled =
        round_half_up(gross * scale.share_divider() * scale.quote_factor_to_money()) as i128;

    let shares = transaction.shares();
    let per_share = if shares != 0 {
        scaled / i128::from(shares)
    } else {
        scaled
    };

    per_share as f64 / scale.quote_divider()
}
