//! CLI commands and terminal output helpers

pub mod context;
pub mod show;
pub mod style;
pub mod update;

use crate::cli::style::arrow;
use anstream::println;
use async_trait::async_trait;
use prtree::merge::ProgressCallback;

/// Progress reporter printing compact status lines
pub struct CliProgress;

impl CliProgress {
    /// Compact single-line progress output
    pub const fn compact() -> Self {
        Self
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_message(&self, message: &str) {
        println!("  {} {message}", arrow());
    }
}
