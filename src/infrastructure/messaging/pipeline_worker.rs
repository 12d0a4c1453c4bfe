use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::step_scheduler::StepScheduler;
use crate::application::services::EmbeddingPipeline;
use crate::application::services::embedding_pipeline::StepOutcome;
use crate::infrastructure::messaging::MpscStepQueueReceiver;

const STEP_DELAY: Duration = Duration::from_millis(150);
const RETRY_DELAY: Duration = Duration::from_millis(2000);

/// Drains the step queue and runs the embedding pipeline. Each step is
/// executed to an outcome, and continuation or retry steps are put back on
/// the queue with the appropriate delay. One worker is enough: step order
/// within a document is strict, and documents interleave on the queue.
pub struct PipelineWorker {
    receiver: MpscStepQueueReceiver,
    scheduler: Arc<dyn StepScheduler>,
    pipeline: Arc<EmbeddingPipeline>,
    step_delay: Duration,
    retry_delay: Duration,
}

impl PipelineWorker {
    pub fn new(
        receiver: MpscStepQueueReceiver,
        scheduler: Arc<dyn StepScheduler>,
        pipeline: Arc<EmbeddingPipeline>,
    ) -> Self {
        Self {
            receiver,
            scheduler,
            pipeline,
            step_delay: STEP_DELAY,
            retry_delay: RETRY_DELAY,
        }
    }

    pub fn with_delays(mut self, step_delay: Duration, retry_delay: Duration) -> Self {
        self.step_delay = step_delay;
        self.retry_delay = retry_delay;
        self
    }

    pub async fn start(self) {
        tracing::info!("pipeline worker started");

        while let Some(step) = self.receiver.recv().await {
            match self.pipeline.execute_step(step).await {
                StepOutcome::Continue(next) => {
                    if self
                        .scheduler
                        .schedule_after(self.step_delay, next)
                        .await
                        .is_err()
                    {
                        tracing::warn!("step queue closed, dropping continuation");
                        break;
                    }
                }
                StepOutcome::Retry(same) => {
                    tracing::warn!(
                        "retrying step for document {} at position {}",
                        same.document_id,
                        same.position
                    );
                    if self
                        .scheduler
                        .schedule_after(self.retry_delay, same)
                        .await
                        .is_err()
                    {
                        tracing::warn!("step queue closed, dropping retry");
                        break;
                    }
                }
                StepOutcome::Completed => {
                    tracing::info!("chunking completed for document {}", step.document_id);
                }
                StepOutcome::Abandoned => {
                    tracing::info!("step abandoned for document {}", step.document_id);
                }
            }
        }

        tracing::info!("pipeline worker stopped");
    }
}
