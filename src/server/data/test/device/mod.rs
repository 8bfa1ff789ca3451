use crate::{
    model::device::Platform,
    server::{data::device::DeviceRepository, error::AppError, model::device::RegisterDeviceParams},
};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod for_user;
mod update_token;
mod upsert;
