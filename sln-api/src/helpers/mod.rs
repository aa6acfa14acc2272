pub mod bank;
pub mod identity;
