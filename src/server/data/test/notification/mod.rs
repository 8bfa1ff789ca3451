use crate::{
    model::notification::NotificationKind,
    server::{
        data::notification::NotificationRepository, error::AppError,
        model::notification::CreateNotificationParams,
    },
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod delete_read_older_than;
mod for_user_paginated;
mod mark_all_read;
mod unread_count;
