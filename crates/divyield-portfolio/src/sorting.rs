//! Sort attribute tables for the model types.

use divyield_core::sorting::{AttributeTable, SortValue, Sortable};
use divyield_core::types::{Date, Money, Quote};

use crate::model::{AccountTransaction, LatestSecurityPrice, Security, SecurityPrice};

impl Sortable for SecurityPrice {
    fn attribute_table() -> AttributeTable<Self> {
        AttributeTable::<Self>::new("SecurityPrice")
            .with("date", |p| Some(SortValue::Date(p.date())))
            .with("value", |p| Some(SortValue::Quote(Quote::new(p.value()))))
    }
}

impl Sortable for Security {
    fn attribute_table() -> AttributeTable<Self> {
        AttributeTable::<Self>::new("Security")
            .with("name", |s| Some(SortValue::text(s.name())))
            .with("isin", |s| s.isin().map(SortValue::text))
            .with("ticker", |s| s.ticker().map(SortValue::text))
            .with("currency", |s| Some(SortValue::text(s.currency().code())))
            .with("latest", |s| {
                s.latest().map(|l| SortValue::Quote(Quote::new(l.value())))
            })
            .with("dayHigh", |s| {
                s.latest()
                    .and_then(LatestSecurityPrice::high)
                    .map(|v| SortValue::Quote(Quote::new(v)))
            })
            .with("dayLow", |s| {
                s.latest()
                    .and_then(LatestSecurityPrice::low)
                    .map(|v| SortValue::Quote(Quote::new(v)))
            })
            .with("volume", |s| {
                s.latest()
                    .and_then(LatestSecurityPrice::volume)
                    .map(SortValue::Integer)
            })
    }
}

impl Sortable for AccountTransaction {
    fn attribute_table() -> AttributeTable<Self> {
        AttributeTable::<Self>::new("AccountTransaction")
            .with("date", |t| Some(SortValue::Date(t.date())))
            .with("type", |t| Some(SortValue::text(t.kind().to_string())))
            .with("amount", |t| Some(SortValue::Money(t.amount())))
            .with("grossValue", |t| Some(SortValue::Money(t.gross_value())))
            .with("shares", |t| Some(SortValue::Integer(t.shares())))
            .with("note", |t| t.note().map(SortValue::text))
    }
}

/// Sort key of a transaction by booking date, for value-provider sorters.
#[must_use]
pub fn booking_date(transaction: &AccountTransaction) -> Option<Date> {
    Some(transaction.date())
}

/// Sort key of a transaction by gross value, for value-provider sorters.
#[must_use]
pub fn gross_value(transaction: &AccountTransaction) -> Option<Money> {
    Some(transaction.gross_value())
}
