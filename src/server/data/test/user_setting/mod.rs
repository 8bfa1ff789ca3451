use crate::{
    model::settings::Theme,
    server::{
        data::user_setting::UserSettingRepository, error::AppError,
        model::settings::UpdateSettingsParams,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod get_or_create;
mod update;
