mod iban;
mod ssn;

pub use iban::Iban;
pub use ssn::Ssn;
