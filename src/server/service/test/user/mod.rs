use crate::server::{
    error::AppError,
    model::user::{CreateUserParam, UpdateUserParam},
    service::user::UserService,
};
use entity::sea_orm_active_enums::Role;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;
