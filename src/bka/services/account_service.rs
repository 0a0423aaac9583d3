use crate::diagnostics::{Diagnostics, LogDiagnostics};
use crate::ids::Ssn;
use crate::models::{Account, AccountError};
use crate::{AccountReport, Money, Operation};

pub const DEPOSIT_NEGATIVE_AMOUNT: &str = "Error: Negative amount";
pub const DEPOSIT_FAILED: &str = "Error: deposit";
pub const WITHDRAWAL_FAILED: &str = "Error: withdrawal";

/// Runs balance operations against one account, announcing every failure on its diagnostics
/// channel before returning it unchanged.
pub struct AccountService<D = LogDiagnostics> {
    account: Account,
    diagnostics: D,
}

impl AccountService {
    pub fn new(account: Account) -> Self {
        return Self::with_diagnostics(account, LogDiagnostics);
    }
}

impl<D: Diagnostics> AccountService<D> {
    pub fn with_diagnostics(account: Account, diagnostics: D) -> Self {
        return Self {
            account,
            diagnostics,
        };
    }

    pub fn account(&self) -> &Account {
        return &self.account;
    }

    pub fn deposit(&mut self, amount: Money) -> Result<(), AccountError> {
        let res = self.account.deposit(amount);

        if let Err(e) = &res {
            let message = match e {
                AccountError::NegativeAmount(_) => DEPOSIT_NEGATIVE_AMOUNT,
                _ => DEPOSIT_FAILED,
            };
            self.diagnostics.report(message);
        }

        return res;
    }

    pub fn withdraw(&mut self, amount: Money, ssn: Option<&Ssn>) -> Result<(), AccountError> {
        let res = self.account.withdraw(amount, ssn);

        if res.is_err() {
            self.diagnostics.report(WITHDRAWAL_FAILED);
        }

        return res;
    }

    pub fn apply(&mut self, operation: &Operation) -> Result<(), AccountError> {
        log::debug!("Applying {operation:?} to {}", self.account);

        match operation {
            Operation::Deposit { amount } => self.deposit(*amount),
            Operation::Withdrawal { amount, ssn } => self.withdraw(*amount, ssn.as_ref()),
        }
    }

    pub fn build_report(&self) -> AccountReport {
        return AccountReport {
            iban: self.account.iban().to_string(),
            holder: self
                .account
                .holder()
                .ssn()
                .map(Ssn::to_string)
                .unwrap_or_default(),
            balance: self.account.balance().to_string(),
        };
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use crate::ids::Iban;
    use crate::models::User;

    use super::*;

    const SOME_SSN: &str = "111";
    const OTHER_SSN: &str = "222";

    #[derive(Default)]
    struct RecordingDiagnostics {
        messages: RefCell<Vec<String>>,
    }

    impl Diagnostics for RecordingDiagnostics {
        fn report(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    fn build_account(balance: Money) -> Account {
        Account::new(
            User::new(Some(Ssn::from(SOME_SSN))),
            Iban::from("GR1601101250000000012300695"),
            balance,
        )
    }

    #[test]
    fn successful_operations_report_nothing() {
        let diagnostics = RecordingDiagnostics::default();
        let mut service =
            AccountService::with_diagnostics(build_account(Money::from_units(100)), &diagnostics);

        assert_eq!(service.deposit(Money::from_units(50)), Ok(()));
        assert_eq!(
            service.withdraw(Money::from_units(150), Some(&Ssn::from(SOME_SSN))),
            Ok(())
        );

        assert_eq!(service.account().balance(), Money::ZERO);
        assert!(diagnostics.messages.borrow().is_empty());
    }

    #[test]
    fn failed_deposit_reports_then_returns_error() {
        let diagnostics = RecordingDiagnostics::default();
        let mut service =
            AccountService::with_diagnostics(build_account(Money::from_units(100)), &diagnostics);

        let res = service.deposit(Money::from_units(-10));

        assert_eq!(
            res,
            Err(AccountError::NegativeAmount(Money::from_units(-10)))
        );
        assert_eq!(
            *diagnostics.messages.borrow(),
            vec![DEPOSIT_NEGATIVE_AMOUNT.to_string()]
        );
        assert_eq!(service.account().balance(), Money::from_units(100));
    }

    #[test]
    fn overflowing_deposit_reports_generic_message() {
        let diagnostics = RecordingDiagnostics::default();
        let mut service = AccountService::with_diagnostics(build_account(Money::MAX), &diagnostics);

        let res = service.deposit(Money(1));

        assert!(matches!(res, Err(AccountError::Overflow(_))));
        assert_eq!(
            *diagnostics.messages.borrow(),
            vec![DEPOSIT_FAILED.to_string()]
        );
        assert_eq!(service.account().balance(), Money::MAX);
    }

    #[test]
    fn failed_withdrawals_share_one_message() {
        let diagnostics = RecordingDiagnostics::default();
        let mut service =
            AccountService::with_diagnostics(build_account(Money::from_units(100)), &diagnostics);

        let negative = service.withdraw(Money::from_units(-1), None);
        let insufficient = service.withdraw(Money::from_units(150), Some(&Ssn::from("any")));
        let ssn = service.withdraw(Money::from_units(40), Some(&Ssn::from(OTHER_SSN)));

        assert!(matches!(negative, Err(AccountError::NegativeAmount(_))));
        assert!(matches!(
            insufficient,
            Err(AccountError::InsufficientBalance(..))
        ));
        assert_eq!(ssn, Err(AccountError::SsnNotValid(Ssn::from(OTHER_SSN))));

        assert_eq!(
            *diagnostics.messages.borrow(),
            vec![WITHDRAWAL_FAILED.to_string(); 3]
        );
        assert_eq!(service.account().balance(), Money::from_units(100));
    }

    #[test]
    fn apply_operations() {
        let diagnostics = RecordingDiagnostics::default();
        let mut service =
            AccountService::with_diagnostics(build_account(Money::from_units(100)), &diagnostics);

        let operations = vec![
            Operation::Deposit {
                amount: Money::from_units(50),
            },
            Operation::Withdrawal {
                amount: Money::from_units(30),
                ssn: None,
            },
            Operation::Withdrawal {
                amount: Money::from_units(10),
                ssn: Some(Ssn::from(OTHER_SSN)),
            },
        ];

        let results: Vec<_> = operations.iter().map(|op| service.apply(op)).collect();

        assert_eq!(
            results,
            vec![
                Ok(()),
                Ok(()),
                Err(AccountError::SsnNotValid(Ssn::from(OTHER_SSN)))
            ]
        );
        assert_eq!(service.account().balance(), Money::from_units(120));
        assert_eq!(diagnostics.messages.borrow().len(), 1);
    }

    #[test]
    fn build_report() {
        let service = AccountService::new(build_account(Money(1234567)));

        assert_eq!(
            service.build_report(),
            AccountReport {
                iban: "GR1601101250000000012300695".to_string(),
                holder: SOME_SSN.to_string(),
                balance: "123.4567".to_string(),
            }
        );
    }

    #[test]
    fn report_without_holder_ssn() {
        let account = Account::new(User::default(), Iban::from("DE89"), Money::ZERO);
        let service = AccountService::new(account);

        let report = service.build_report();

        assert_eq!(report.holder, "");
        assert_eq!(report.balance, "0.0000");
    }
}
