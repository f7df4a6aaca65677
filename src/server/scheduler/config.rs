pub mod housekeeping {
    /// Cron expression for deleting obsolete timers
    /// Runs every hour at the top of the hour
    pub const CRON_EXPRESSION: &str = "0 0 * * * *";
}
