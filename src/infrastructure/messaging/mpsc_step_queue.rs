use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc};

use crate::application::ports::step_scheduler::{PipelineStep, SchedulerError, StepScheduler};

/// Tokio-channel scheduler. A scheduled step sleeps on a spawned task for
/// its delay before being sent, so the queue itself never blocks.
#[derive(Clone)]
pub struct MpscStepQueue {
    sender: mpsc::UnboundedSender<PipelineStep>,
}

pub struct MpscStepQueueReceiver {
    receiver: Arc<Mutex<mpsc::UnboundedReceiver<PipelineStep>>>,
}

impl MpscStepQueue {
    pub fn create_pair() -> (Self, MpscStepQueueReceiver) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (
            Self { sender },
            MpscStepQueueReceiver {
                receiver: Arc::new(Mutex::new(receiver)),
            },
        )
    }
}

impl MpscStepQueueReceiver {
    pub async fn recv(&self) -> Option<PipelineStep> {
        let mut receiver = self.receiver.lock().await;
        receiver.recv().await
    }
}

#[async_trait]
impl StepScheduler for MpscStepQueue {
    async fn schedule_after(
        &self,
        delay: Duration,
        step: PipelineStep,
    ) -> Result<(), SchedulerError> {
        if self.sender.is_closed() {
            return Err(SchedulerError::QueueClosed);
        }

        if delay.is_zero() {
            return self.sender.send(step).map_err(|_| SchedulerError::QueueClosed);
        }

        let sender = self.sender.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if sender.send(step).is_err() {
                tracing::warn!("step queue closed before delayed step could be delivered");
            }
        });

        Ok(())
    }
}
