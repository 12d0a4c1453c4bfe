pub mod mpsc_step_queue;
pub mod pipeline_worker;

pub use mpsc_step_queue::{MpscStepQueue, MpscStepQueueReceiver};
pub use pipeline_worker::PipelineWorker;
