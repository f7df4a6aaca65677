//! Scheduler for periodic housekeeping of the timer board.
//!
//! A cron-based job scheduler removes timers whose date lies further in the past than
//! the configured retention.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::error::Error;

pub mod config;
pub mod housekeeping;

use self::housekeeping::delete_obsolete_timers;

/// Job scheduler for background housekeeping tasks.
pub struct Scheduler {
    db: DatabaseConnection,
    timers_obsolete_after_days: u32,
    sched: JobScheduler,
}

impl Scheduler {
    /// Creates a new instance of [`Scheduler`].
    ///
    /// # Arguments
    /// - `db` - Database connection the jobs run against
    /// - `timers_obsolete_after_days` - Age in days after which past timers are deleted,
    ///   `0` keeps timers forever
    ///
    /// # Returns
    /// - `Ok(Scheduler)` - Successfully created scheduler instance
    /// - `Err(Error)` - Failed to initialize the underlying job scheduler
    pub async fn new(db: DatabaseConnection, timers_obsolete_after_days: u32) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;
        Ok(Self {
            db,
            timers_obsolete_after_days,
            sched,
        })
    }

    /// Registers all scheduled jobs and starts the scheduler.
    pub async fn start(mut self) -> Result<(), Error> {
        let days = self.timers_obsolete_after_days;

        if days > 0 {
            self.schedule_job(
                config::housekeeping::CRON_EXPRESSION,
                "obsolete timer",
                move |db| async move { delete_obsolete_timers(db, days).await },
            )
            .await?;
        } else {
            tracing::info!("Timer housekeeping disabled, past timers are kept forever");
        }

        self.sched.start().await?;

        Ok(())
    }

    /// Schedules a recurring job with the specified cron expression.
    ///
    /// The job receives a clone of the database connection and returns how many records
    /// it processed, which is logged together with `name`.
    ///
    /// # Arguments
    /// - `cron` - Cron expression defining when the job should run (e.g., "0 0 * * * *" for hourly)
    /// - `name` - Human-readable name for the job (used in log messages)
    /// - `function` - Async function performing the work
    pub async fn schedule_job<F, Fut>(
        &mut self,
        cron: &str,
        name: &str,
        function: F,
    ) -> Result<(), Error>
    where
        F: Fn(DatabaseConnection) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<u64, Error>> + Send + 'static,
    {
        let db = self.db.clone();
        let name = name.to_string();
        let function = Arc::new(function);

        self.sched
            .add(Job::new_async(cron, move |_, _| {
                let db = db.clone();
                let name = name.clone();
                let function = Arc::clone(&function);

                Box::pin(async move {
                    match function(db).await {
                        Ok(count) => tracing::info!("Deleted {} {} record(s)", count, name),
                        Err(e) => tracing::error!("Error running {} job: {:?}", name, e),
                    }
                })
            })?)
            .await?;

        Ok(())
    }
}
