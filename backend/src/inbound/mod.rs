//! Inbound adapters translating requests into domain service calls.

pub mod http;
