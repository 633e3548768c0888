//! Network layer: API client, shared auth token, wire types, and the
//! self-rescheduling poller.

pub mod api;
pub mod poll;
pub mod token;
pub mod types;
