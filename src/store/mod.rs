pub mod ledger;
pub mod user;
