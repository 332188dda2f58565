use crate::server::{
    error::AppError,
    model::location::{CreateLocationParam, UpdateLocationParam},
    service::location::LocationService,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;
