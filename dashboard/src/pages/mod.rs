pub mod login;
pub mod operators;
