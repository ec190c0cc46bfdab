//! Serial Engine library crate.
//!
//! This crate computes weighted check digits for serial numbers and
//! generates runs of sequential serial numbers with their check digits
//! attached.  External applications may call into
//! `engine::generate_numbers` directly or embed the HTTP surface via
//! `api::build_router`.

pub mod models;
pub mod error;
pub mod mask;
pub mod checksum;
pub mod engine;
pub mod export;
pub mod config;
pub mod api;

pub use error::{Result, SerialError};
