use std::env;
use std::time::Duration;

use dotenv::dotenv;

use resumerag::infrastructure::AppContainer;
use resumerag::presentation::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    let container = AppContainer::new()?;

    // Re-enqueue chunking work left unfinished by a previous run.
    match container.pipeline.resume_steps().await {
        Ok(steps) => {
            for step in steps {
                tracing::info!("resuming chunking for document {}", step.document_id);
                container
                    .scheduler
                    .schedule_after(Duration::ZERO, step)
                    .await?;
            }
        }
        Err(e) => tracing::error!("failed to resume pipeline steps: {}", e),
    }

    tokio::spawn(container.pipeline_worker.start());

    let port = env::var("PORT").ok().and_then(|p| p.parse().ok());
    let server = HttpServer::new(container.document_handler, container.query_handler, port);

    server.run().await
}
