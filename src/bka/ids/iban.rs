use std::fmt;

/// International Bank Account Number. Treated as an opaque string, no format checks.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Iban(pub String);

impl Iban {
    pub fn as_str(&self) -> &str {
        return &self.0;
    }
}

impl From<&str> for Iban {
    fn from(iban: &str) -> Self {
        return Self(iban.to_string());
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
