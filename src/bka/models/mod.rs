mod account;
mod user;

pub use account::{Account, AccountError};
pub use user::User;
