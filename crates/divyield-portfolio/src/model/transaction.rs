//! Account transactions and their units.

use chrono::NaiveDateTime;
use divyield_core::types::{Date, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::SecurityId;
use crate::error::{PortfolioError, PortfolioResult};

/// Kind of an account transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountTransactionType {
    /// Cash deposit.
    Deposit,
    /// Cash withdrawal.
    Removal,
    /// Interest received.
    Interest,
    /// Interest charged.
    InterestCharge,
    /// Dividend payment for a security.
    Dividends,
    /// Fees paid.
    Fees,
    /// Fees refunded.
    FeesRefund,
    /// Taxes paid.
    Taxes,
    /// Taxes refunded.
    TaxRefund,
    /// Purchase of a security.
    Buy,
    /// Sale of a security.
    Sell,
    /// Cash moved in from another account.
    TransferIn,
    /// Cash moved out to another account.
    TransferOut,
}

impl AccountTransactionType {
    /// Returns true if the transaction adds cash to the account.
    #[must_use]
    pub fn is_credit(&self) -> bool {
        matches!(
            self,
            Self::Deposit
                | Self::Interest
                | Self::Dividends
                | Self::FeesRefund
                | Self::TaxRefund
                | Self::Sell
                | Self::TransferIn
        )
    }
}

impl fmt::Display for AccountTransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Kind of a transaction unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitType {
    /// Gross value restated in the security's currency.
    GrossValue,
    /// Tax withheld.
    Tax,
    /// Fee charged.
    Fee,
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A component of a transaction amount.
///
/// `amount` is always in the transaction currency. A unit may also carry
/// the same value in a foreign currency together with the exchange rate
/// that links the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    kind: UnitType,
    amount: Money,
    forex: Option<Money>,
    exchange_rate: Option<Decimal>,
}

impl Unit {
    /// Creates a unit in the transaction currency only.
    #[must_use]
    pub fn new(kind: UnitType, amount: Money) -> Self {
        Self {
            kind,
            amount,
            forex: None,
            exchange_rate: None,
        }
    }

    /// Creates a unit with a foreign currency amount.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::InvalidUnit` if the forex amount is in the
    /// same currency as `amount` or the exchange rate is not positive.
    pub fn with_forex(
        kind: UnitType,
        amount: Money,
        forex: Money,
        exchange_rate: Decimal,
    ) -> PortfolioResult<Self> {
        if forex.currency() == amount.currency() {
            return Err(PortfolioError::invalid_unit(format!(
                "forex amount must differ from transaction currency {}",
                amount.currency()
            )));
        }
        if exchange_rate <= Decimal::ZERO {
            return Err(PortfolioError::invalid_unit(format!(
                "exchange rate must be positive, got {exchange_rate}"
            )));
        }
        Ok(Self {
            kind,
            amount,
            forex: Some(forex),
            exchange_rate: Some(exchange_rate),
        })
    }

    /// Kind of the unit.
    #[must_use]
    pub fn kind(&self) -> UnitType {
        self.kind
    }

    /// Amount in the transaction currency.
    #[must_use]
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Amount in the foreign currency, if any.
    #[must_use]
    pub fn forex(&self) -> Option<Money> {
        self.forex
    }

    /// Exchange rate from forex to transaction currency, if any.
    #[must_use]
    pub fn exchange_rate(&self) -> Option<Decimal> {
        self.exchange_rate
    }
}

/// A booking on a cash account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountTransaction {
    id: Uuid,
    kind: AccountTransactionType,
    date_time: NaiveDateTime,
    amount: Money,
    security: Option<SecurityId>,
    shares: i64,
    units: Vec<Unit>,
    note: Option<String>,
}

impl AccountTransaction {
    /// Creates a transaction with a net amount.
    #[must_use]
    pub fn new(kind: AccountTransactionType, date_time: NaiveDateTime, amount: Money) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            date_time,
            amount,
            security: None,
            shares: 0,
            units: Vec::new(),
            note: None,
        }
    }

    /// Links the transaction to a security.
    #[must_use]
    pub fn with_security(mut self, security: SecurityId) -> Self {
        self.security = Some(security);
        self
    }

    /// Sets the share count, scaled by the share factor.
    #[must_use]
    pub fn with_shares(mut self, shares: i64) -> Self {
        self.shares = shares;
        self
    }

    /// Sets a free-text note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Adds a unit, see [`add_unit`](Self::add_unit).
    pub fn with_unit(mut self, unit: Unit) -> PortfolioResult<Self> {
        self.add_unit(unit)?;
        Ok(self)
    }

    /// Adds a unit.
    ///
    /// # Errors
    ///
    /// Fails if the unit amount is not in the transaction currency or if a
    /// second gross value unit is added.
    pub fn add_unit(&mut self, unit: Unit) -> PortfolioResult<()> {
        if unit.amount.currency() != self.amount.currency() {
            return Err(PortfolioError::currency_mismatch(
                self.amount.currency().code(),
                unit.amount.currency().code(),
            ));
        }
        if unit.kind == UnitType::GrossValue && self.unit(UnitType::GrossValue).is_some() {
            return Err(PortfolioError::DuplicateUnit {
                kind: unit.kind.to_string(),
            });
        }
        self.units.push(unit);
        Ok(())
    }

    /// Unique id of the transaction.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Kind of the transaction.
    #[must_use]
    pub fn kind(&self) -> AccountTransactionType {
        self.kind
    }

    /// Booking date and time.
    #[must_use]
    pub fn date_time(&self) -> NaiveDateTime {
        self.date_time
    }

    /// Booking date.
    #[must_use]
    pub fn date(&self) -> Date {
        Date::from_date_time(self.date_time)
    }

    /// Net amount booked on the account.
    #[must_use]
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// The linked security, if any.
    #[must_use]
    pub fn security(&self) -> Option<SecurityId> {
        self.security
    }

    /// Shares held, scaled by the share factor.
    #[must_use]
    pub fn shares(&self) -> i64 {
        self.shares
    }

    /// Free-text note.
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// All units.
    #[must_use]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// The first unit of the given kind.
    #[must_use]
    pub fn unit(&self, kind: UnitType) -> Option<&Unit> {
        self.units.iter().find(|u| u.kind == kind)
    }

    /// Gross value in minor units.
    ///
    /// Taxes and fees are added to the amount of a credit and taken off the
    /// amount of a debit.
    #[must_use]
    pub fn gross_value_amount(&self) -> i64 {
        let taxes_and_fees: i64 = self
            .units
            .iter()
            .filter(|u| matches!(u.kind, UnitType::Tax | UnitType::Fee))
            .map(|u| u.amount.amount())
            .sum();
        if self.kind.is_credit() {
            self.amount.amount() + taxes_and_fees
        } else {
            self.amount.amount() - taxes_and_fees
        }
    }

    /// Gross value as money in the transaction currency.
    #[must_use]
    pub fn gross_value(&self) -> Money {
        Money::new(self.gross_value_amount(), self.amount.currency())
    }
}
