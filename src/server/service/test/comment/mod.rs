use crate::server::{
    error::AppError,
    model::comment::{CreateCommentParam, UpdateCommentParam},
    service::comment::CommentService,
};
use test_utils::{builder::TestBuilder, factory};

mod update;
