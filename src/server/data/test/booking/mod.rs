use crate::server::{
    data::booking::BookingRepository,
    model::{
        booking::{CreateBookingParam, UpdateBookingParam},
        pagination::PageRequest,
    },
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod get_paginated;
mod update;
