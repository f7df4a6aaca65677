use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{error::Error, service::timer::TimerService};

/// Delete timers dated more than `days` days ago
pub async fn delete_obsolete_timers(db: DatabaseConnection, days: u32) -> Result<u64, Error> {
    TimerService::new(&db)
        .delete_obsolete_timers(days, Utc::now().naive_utc())
        .await
}
