#![doc(test(attr(deny(warnings))))]

//! Gasto Core offers the record keeping, aggregation, and export primitives
//! behind a personal expense log.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod export;
pub mod storage;
pub mod time;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Gasto Core tracing initialized.");
    });
}
