//! snipboard - Code Snippet Board
//!
//! A terminal user interface for collecting and browsing code snippets.
//! Built with Rust and ratatui for a fast, keyboard-driven workflow.
//!
//! snipboard keeps everything in memory for the lifetime of the session:
//! - Browse a newest-first board of snippets with language badges and tags
//! - Filter live by free-text search and by tag combination
//! - Add new snippets through a modal form with validation
//! - Copy any snippet's code straight to the system clipboard

pub mod app;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod ui;
