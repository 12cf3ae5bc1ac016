//! Input contracts of the yield computation.
//!
//! - [`PriceSource`]: the price history of one security, latest quote included
//! - [`TransactionSource`]: every account transaction that may hold dividends

use divyield_portfolio::{Account, AccountTransaction, Client, Security, SecurityId, SecurityPrice};

/// Supplies the ordered price history of a security.
pub trait PriceSource {
    /// Identity of the priced security.
    fn security_id(&self) -> SecurityId;

    /// Prices in ascending date order, including the latest live quote.
    fn prices_including_latest(&self) -> Vec<SecurityPrice>;
}

impl PriceSource for Security {
    fn security_id(&self) -> SecurityId {
        self.id()
    }

    fn prices_including_latest(&self) -> Vec<SecurityPrice> {
        Security::prices_including_latest(self)
    }
}

/// Supplies account transactions in no particular order.
pub trait TransactionSource {
    /// All transactions.
    fn transactions(&self) -> Box<dyn Iterator<Item = &AccountTransaction> + '_>;
}

impl TransactionSource for Client {
    fn transactions(&self) -> Box<dyn Iterator<Item = &AccountTransaction> + '_> {
        Box::new(Client::transactions(self))
    }
}

impl TransactionSource for [Account] {
    fn transactions(&self) -> Box<dyn Iterator<Item = &AccountTransaction> + '_> {
        Box::new(self.iter().flat_map(|a| a.transactions().iter()))
    }
}

impl TransactionSource for [AccountTransaction] {
    fn transactions(&self) -> Box<dyn Iterator<Item = &AccountTransaction> + '_> {
        Box::new(self.iter())
    }
}
