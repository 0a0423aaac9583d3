mod account_service;

pub use account_service::{
    AccountService, DEPOSIT_FAILED, DEPOSIT_NEGATIVE_AMOUNT, WITHDRAWAL_FAILED,
};
