//! Core types and the read-model aggregation engine for Dohyo.
//!
//! This crate is deliberately free of HTTP and database dependencies. It
//! reads three append-only fact tables (rikishi, banzuke entries, bouts)
//! through the [`store::ResultsStore`] trait and derives every statistic on
//! demand; nothing is materialised or mutated.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod division;
pub mod engine;
pub mod error;
pub mod memory;
pub mod order;
pub mod read;
pub mod record;
pub mod store;

pub use division::{Division, Side};
pub use error::{Error, Result};
