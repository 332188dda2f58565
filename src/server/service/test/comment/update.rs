use super::*;

/// Tests editing a comment.
///
/// Expected: new content and rating stored
#[tokio::test]
async fn updates_content_and_rating() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (_, room) = factory::helpers::create_room_with_location(db).await?;
    let comment = factory::comment::create_comment(db, room.id, user.id).await?;

    let service = CommentService::new(db);
    let updated = service
        .update(
            comment.id,
            UpdateCommentParam {
                content: "Even better the second time".to_string(),
                rating: 4,
            },
        )
        .await?;

    assert_eq!(updated.content, "Even better the second time");
    assert_eq!(updated.rating, 4);
    assert_eq!(service.get_by_id(comment.id).await?.rating, 4);

    Ok(())
}

/// Tests editing and deleting a comment that does not exist.
///
/// Expected: Err(AppError::NotFound) for both, including a second delete
#[tokio::test]
async fn missing_comment_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (_, room) = factory::helpers::create_room_with_location(db).await?;
    let comment = factory::comment::create_comment(db, room.id, user.id).await?;

    let service = CommentService::new(db);
    service.delete(comment.id).await?;

    let update = service
        .update(
            comment.id,
            UpdateCommentParam {
                content: "Too late".to_string(),
                rating: 1,
            },
        )
        .await;

    assert!(matches!(update, Err(AppError::NotFound(_))));
    assert!(matches!(
        service.delete(comment.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
