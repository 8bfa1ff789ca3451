use crate::server::{
    data::photo::PhotoRepository, error::AppError, model::photo::SendPhotoParams,
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod latest_received;
mod received_paginated;
mod sent_paginated;
