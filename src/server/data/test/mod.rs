mod device;
mod notification;
mod photo;
mod user;
mod user_setting;
