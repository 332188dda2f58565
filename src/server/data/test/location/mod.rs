use crate::server::{
    data::location::LocationRepository,
    model::{
        location::{CreateLocationParam, UpdateLocationParam},
        pagination::PageRequest,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;
