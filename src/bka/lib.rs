mod account_report;
pub mod diagnostics;
pub mod ids;
pub mod input;
pub mod models;
mod money;
mod operation;
mod result;
pub mod services;

pub use account_report::AccountReport;
pub use money::{Money, MoneyError};
pub use operation::Operation;
pub use result::Result;

use ids::Iban;
use models::{Account, User};

/// Opens an account for `holder` and wraps it in a service that logs failed operations
pub fn build_account_service(holder: User, iban: Iban, balance: Money) -> services::AccountService {
    let account = Account::new(holder, iban, balance);
    let account_service = services::AccountService::new(account);

    return account_service;
}
