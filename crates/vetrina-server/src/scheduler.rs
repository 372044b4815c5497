//! Background job scheduler.
//!
//! Initialises a [`JobScheduler`] at server startup and registers the
//! recurring product auto-publish job.

use std::sync::Arc;

use sqlx::PgPool;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

/// Builds and starts the background job scheduler.
///
/// Returns the running [`JobScheduler`] handle, which must be kept alive for
/// the lifetime of the process. Dropping it shuts down all scheduled jobs.
///
/// # Errors
///
/// Returns [`JobSchedulerError`] if the scheduler cannot be initialised, the
/// job cannot be registered, or the scheduler fails to start.
pub async fn build_scheduler(pool: PgPool) -> Result<JobScheduler, JobSchedulerError> {
    let scheduler = JobScheduler::new().await?;

    register_publish_job(&scheduler, pool).await?;

    scheduler.start().await?;
    Ok(scheduler)
}

/// Register the scheduled-product publish job.
///
/// Runs every five minutes (`0 */5 * * * *`) and flips any product whose
/// `scheduled_for` time has passed to published. Failures are logged and the
/// next tick retries; a stuck product never blocks the server.
async fn register_publish_job(
    scheduler: &JobScheduler,
    pool: PgPool,
) -> Result<(), JobSchedulerError> {
    let pool = Arc::new(pool);

    let job = Job::new_async("0 */5 * * * *", move |_uuid, _lock| {
        let pool = Arc::clone(&pool);

        Box::pin(async move {
            match vetrina_db::publish_due_products(&pool).await {
                Ok(0) => {}
                Ok(published) => {
                    tracing::info!(published, "scheduler: auto-published due products");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "scheduler: product publish run failed");
                }
            }
        })
    })?;

    scheduler.add(job).await?;
    Ok(())
}
