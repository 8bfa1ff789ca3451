use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, UpdateProfileParams},
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod deactivate;
mod find_by_username_or_email;
mod mark_verified;
mod search;
mod set_password;
mod update_profile;
