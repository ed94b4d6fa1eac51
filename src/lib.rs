#![doc(test(attr(deny(warnings))))]

//! Pocket Ledger records pocket-money income and expenses, keeps a running
//! balance, and derives simple reports. The engine (parser, ledger, storage,
//! reports) is free of terminal concerns; `cli` is the interactive boundary.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

/// Initializes global tracing. Safe to call more than once.
pub fn init() {
    utils::init_tracing();
}
