//! Shared client-side state.
//!
//! DESIGN
//! ======
//! State lives in plain structs held in `RwSignal`s so the transition
//! logic stays pure and natively testable; components derive memos over
//! the pieces they render.

pub mod auth;
pub mod operator;
pub mod poll;
