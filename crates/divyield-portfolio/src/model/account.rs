//! Cash accounts and the client that owns them.

use divyield_core::types::Currency;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AccountTransaction, AccountTransactionType, Security, SecurityId};
use crate::error::{PortfolioError, PortfolioResult};

/// A cash account with its transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    id: Uuid,
    name: String,
    currency: Currency,
    transactions: Vec<AccountTransaction>,
}

impl Account {
    /// Creates an empty account.
    #[must_use]
    pub fn new(name: impl Into<String>, currency: Currency) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            currency,
            transactions: Vec::new(),
        }
    }

    /// Adds a transaction.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::CurrencyMismatch` if the transaction is not
    /// booked in the account currency.
    pub fn add_transaction(&mut self, transaction: AccountTransaction) -> PortfolioResult<()> {
        let currency = transaction.amount().currency();
        if currency != self.currency {
            return Err(PortfolioError::currency_mismatch(
                self.currency.code(),
                currency.code(),
            ));
        }
        self.transactions.push(transaction);
        Ok(())
    }

    /// Adds several transactions, stopping at the first failure.
    pub fn with_transactions(
        mut self,
        transactions: impl IntoIterator<Item = AccountTransaction>,
    ) -> PortfolioResult<Self> {
        for transaction in transactions {
            self.add_transaction(transaction)?;
        }
        Ok(self)
    }

    /// Unique id of the account.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Account currency.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Transactions in insertion order.
    #[must_use]
    pub fn transactions(&self) -> &[AccountTransaction] {
        &self.transactions
    }
}

/// The owner of accounts and securities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Client {
    securities: Vec<Security>,
    accounts: Vec<Account>,
}

impl Client {
    /// Creates an empty client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a security.
    #[must_use]
    pub fn with_security(mut self, security: Security) -> Self {
        self.securities.push(security);
        self
    }

    /// Adds an account.
    #[must_use]
    pub fn with_account(mut self, account: Account) -> Self {
        self.accounts.push(account);
        self
    }

    /// All securities.
    #[must_use]
    pub fn securities(&self) -> &[Security] {
        &self.securities
    }

    /// Looks up a security by id.
    #[must_use]
    pub fn security(&self, id: SecurityId) -> Option<&Security> {
        self.securities.iter().find(|s| s.id() == id)
    }

    /// All accounts.
    #[must_use]
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Every transaction of every account, account by account.
    pub fn transactions(&self) -> impl Iterator<Item = &AccountTransaction> + '_ {
        self.accounts.iter().flat_map(|a| a.transactions().iter())
    }

    /// Transactions of `kind` linked to `security`.
    pub fn transactions_for(
        &self,
        security: SecurityId,
        kind: AccountTransactionType,
    ) -> impl Iterator<Item = &AccountTransaction> + '_ {
        self.transactions()
            .filter(move |t| t.security() == Some(security) && t.kind() == kind)
    }
}
