use std::fmt;

/// Social security number of an account holder, compared by exact string equality
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ssn(pub String);

impl Ssn {
    /// Reads an optional SSN from an input field. Missing and blank values both mean "no SSN".
    pub fn parse_optional(value: Option<&str>) -> Option<Self> {
        return value
            .map(str::trim)
            .filter(|ssn| !ssn.is_empty())
            .map(Self::from);
    }

    pub fn as_str(&self) -> &str {
        return &self.0;
    }
}

impl From<&str> for Ssn {
    fn from(ssn: &str) -> Self {
        return Self(ssn.to_string());
    }
}

impl fmt::Display for Ssn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_optional() {
        assert_eq!(Ssn::parse_optional(Some("111")), Some(Ssn::from("111")));
        assert_eq!(Ssn::parse_optional(Some(" 111 ")), Some(Ssn::from("111")));
        assert_eq!(Ssn::parse_optional(Some("")), None);
        assert_eq!(Ssn::parse_optional(Some("   ")), None);
        assert_eq!(Ssn::parse_optional(None), None);
    }
}
