//! Terminal ASCII arcade: a side-scrolling platformer, a falling-invader
//! shooter and snake, all driven by one fixed-tick loop.
//!
//! The binary in `main.rs` owns the terminal; everything below is plain state
//! that can be updated and rendered without one.

pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod games;
pub mod logging;
pub mod ui;
