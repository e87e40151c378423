//! Event Handling Module
//!
//! Translates raw terminal events into application state changes, keeping
//! the abstraction layer between crossterm and the board's intents in one
//! place.
//!
//! # Module Organization
//!
//! - **`keys`**: keyboard input processing and intent dispatch
//! - **`clipboard`**: fire-and-forget copy via the platform clipboard tools

pub mod clipboard;
pub mod keys;
