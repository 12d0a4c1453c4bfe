use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One unit of pipeline work: which document to advance, from which char
/// cursor, and which chunk index to assign next. This tuple is the queue
/// item; re-enqueueing it is how the pipeline loops.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipelineStep {
    pub document_id: Uuid,
    pub position: usize,
    pub chunk_index: i32,
}

impl PipelineStep {
    pub fn initial(document_id: Uuid) -> Self {
        Self {
            document_id,
            position: 0,
            chunk_index: 0,
        }
    }
}

#[derive(Debug)]
pub enum SchedulerError {
    QueueClosed,
}

impl std::fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchedulerError::QueueClosed => write!(f, "Step queue is closed"),
        }
    }
}

impl std::error::Error for SchedulerError {}

/// Deferred invocation primitive. Each step schedules at most one successor,
/// which keeps at most one step per document in flight.
#[async_trait]
pub trait StepScheduler: Send + Sync {
    async fn schedule_after(
        &self,
        delay: Duration,
        step: PipelineStep,
    ) -> Result<(), SchedulerError>;
}
