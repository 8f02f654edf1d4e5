pub mod add;
pub mod aggregate;
pub mod export;
pub mod goal;
pub mod remove;
