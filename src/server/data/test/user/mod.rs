use crate::server::{
    data::user::UserRepository,
    model::{
        pagination::PageRequest,
        user::{CreateUserParam, UpdateUserParam},
    },
};
use entity::sea_orm_active_enums::Role;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod email_taken;
mod find_by_id;
mod get_paginated;
mod update;
