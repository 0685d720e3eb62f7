//! API Client
//!
//! HTTP calls to the activities API.

pub mod client;

pub use client::*;
