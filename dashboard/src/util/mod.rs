//! Small client-side utilities.

pub mod session;
