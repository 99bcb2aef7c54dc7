//! pixscroll
//!
//! Infinite-scroll image search browser for the terminal.
//!
//! The crate follows a Pure Core / Impure Shell split: `model`, `search`,
//! `gallery` and `state` hold the logic and are testable without a terminal;
//! `view` owns the terminal and the event loop.

pub mod config;
pub mod gallery;
pub mod logging;
pub mod model;
pub mod search;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
