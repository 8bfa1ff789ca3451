//! Cron jobs for automated maintenance.

pub mod notification_cleanup;
