use crate::ids::Ssn;
use crate::Money;

/// A balance mutation to apply to an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Deposit { amount: Money },
    Withdrawal { amount: Money, ssn: Option<Ssn> },
}
