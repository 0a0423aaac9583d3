use crate::ids::Ssn;
use crate::Money;
use crate::Operation;
use crate::Result;

use serde::Deserialize;

use thiserror::Error;

/// Represents an input row that a csv record would deserialize into
#[derive(Deserialize, Debug, Clone)]
pub struct InputOperation {
    #[serde(rename = "type")]
    pub typ: InputOperationType,

    pub amount: Option<String>,
    pub ssn: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputOperationType {
    Deposit,
    Withdrawal,
}

#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("Error parsing input operation: amount value missing from deposit: {0:?}")]
    NoDepositAmount(InputOperation),

    #[error("Error parsing input operation: amount value missing from withdrawal: {0:?}")]
    NoWithdrawalAmount(InputOperation),
}

impl InputOperation {
    /// Negative amounts are passed through untouched, rejecting them is the account's job
    pub fn parse_operation(self) -> Result<Operation> {
        let operation = match self.typ {
            InputOperationType::Deposit => {
                let amount = self
                    .amount
                    .as_deref()
                    .ok_or_else(|| InputParseError::NoDepositAmount(self.clone()))?;
                let amount: Money = amount.parse()?;

                Operation::Deposit { amount }
            }
            InputOperationType::Withdrawal => {
                let amount = self
                    .amount
                    .as_deref()
                    .ok_or_else(|| InputParseError::NoWithdrawalAmount(self.clone()))?;
                let amount: Money = amount.parse()?;

                Operation::Withdrawal {
                    amount,
                    ssn: Ssn::parse_optional(self.ssn.as_deref()),
                }
            }
        };

        Ok(operation)
    }
}
