//! API communication layer.

pub mod client;

pub use client::*;
