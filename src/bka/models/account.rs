use super::User;

use crate::ids::{Iban, Ssn};
use crate::money::{Money, MoneyError};

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Negative amount: {0}")]
    NegativeAmount(Money),

    #[error("Insufficient balance: {0} available, {1} requested")]
    InsufficientBalance(Money, Money),

    #[error("SSN not valid: {0}")]
    SsnNotValid(Ssn),

    #[error("Balance out of range: {0}")]
    Overflow(#[from] MoneyError),
}

/// A single bank account: a holder, an opaque IBAN and a balance.
///
/// The balance only moves through [`Account::deposit`] and [`Account::withdraw`], both of which
/// leave it untouched when they fail. Construction and the setters are not validated, so an
/// account may start out with a negative balance.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Account {
    holder: User,
    iban: Iban,
    balance: Money,
}

impl Account {
    pub fn new(holder: User, iban: Iban, balance: Money) -> Self {
        return Self {
            holder,
            iban,
            balance,
        };
    }

    pub fn holder(&self) -> &User {
        return &self.holder;
    }

    pub fn set_holder(&mut self, holder: User) {
        self.holder = holder;
    }

    pub fn iban(&self) -> &Iban {
        return &self.iban;
    }

    pub fn set_iban(&mut self, iban: Iban) {
        self.iban = iban;
    }

    pub fn balance(&self) -> Money {
        return self.balance;
    }

    pub fn set_balance(&mut self, balance: Money) {
        self.balance = balance;
    }

    /// Adds `amount` to the balance. Zero is accepted and changes nothing.
    pub fn deposit(&mut self, amount: Money) -> Result<(), AccountError> {
        if amount.is_negative() {
            Err(AccountError::NegativeAmount(amount))?
        }

        self.balance.add(&amount)?;

        return Ok(());
    }

    /// Removes `amount` from the balance.
    ///
    /// Checks run in a fixed order and the first one to fail is reported: negative amount,
    /// then insufficient balance, then SSN mismatch. Withdrawing the whole balance is allowed.
    pub fn withdraw(&mut self, amount: Money, ssn: Option<&Ssn>) -> Result<(), AccountError> {
        if amount.is_negative() {
            Err(AccountError::NegativeAmount(amount))?
        }

        if amount > self.balance {
            Err(AccountError::InsufficientBalance(self.balance, amount))?
        }

        match ssn {
            Some(given) if !self.is_ssn_valid(ssn) => {
                Err(AccountError::SsnNotValid(given.clone()))?
            }
            _ => {}
        }

        // 0 <= amount <= balance, cannot go out of range
        self.balance.sub(&amount)?;

        return Ok(());
    }

    /// The SSN only has to match when both the caller and the holder have one.
    pub fn is_ssn_valid(&self, ssn: Option<&Ssn>) -> bool {
        return match (ssn, self.holder.ssn()) {
            (Some(given), Some(expected)) => given == expected,
            _ => true,
        };
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(
            f,
            "Account{{holder={}, iban='{}', balance={}}}",
            self.holder, self.iban, self.balance
        );
    }
}
