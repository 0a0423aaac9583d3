use serde::{Deserialize, Serialize};

/// Final state of an account, as written to the output csv
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AccountReport {
    pub iban: String,
    pub holder: String,
    pub balance: String,
}
