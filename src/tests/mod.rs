//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests driving the full TUI against scripted
//! API responses.

mod acceptance_search;
