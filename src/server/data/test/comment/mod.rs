use crate::server::{
    data::comment::CommentRepository,
    model::{
        comment::{CreateCommentParam, UpdateCommentParam},
        pagination::PageRequest,
    },
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_paginated;
