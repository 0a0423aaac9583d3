use crate::ids::Ssn;

use std::fmt;

/// Account holder. Only the SSN takes part in account validation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct User {
    ssn: Option<Ssn>,
}

impl User {
    pub fn new(ssn: Option<Ssn>) -> Self {
        return Self { ssn };
    }

    pub fn ssn(&self) -> Option<&Ssn> {
        return self.ssn.as_ref();
    }

    pub fn set_ssn(&mut self, ssn: Option<Ssn>) {
        self.ssn = ssn;
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.ssn {
            Some(ssn) => write!(f, "User{{ssn='{ssn}'}}"),
            None => write!(f, "User{{ssn=none}}"),
        }
    }
}
