//! Chain update engine
//!
//! Two-phase pattern:
//! 1. Plan - expand the branch chain into ordered steps (pure, testable)
//! 2. Execute - perform the merges via the git CLI (effectful)

mod execute;
mod plan;

pub use execute::{ChainExecutionResult, execute_chain};
pub use plan::{ChainPlan, ChainStep, create_chain_plan};

use async_trait::async_trait;

/// Progress reporting for long-running operations
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Emit a status message
    async fn on_message(&self, message: &str);
}
