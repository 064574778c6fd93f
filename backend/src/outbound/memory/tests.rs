//! Behavioural coverage for the in-memory store.

use rstest::{fixture, rstest};

use super::*;
use crate::domain::{BlogDraft, PasswordHash, Username};

#[fixture]
fn store() -> InMemoryStore {
    InMemoryStore::new()
}

fn user(username: &str) -> User {
    User::new(
        UserId::random(),
        Username::new(username).expect("valid username"),
        Some(format!("{username} name")),
        PasswordHash::new("$2b$04$hash"),
    )
}

fn blog(title: &str, owner: Option<&User>) -> Blog {
    let draft = BlogDraft::try_from_parts(
        Some(title.to_owned()),
        Some("Edsger W. Dijkstra".to_owned()),
        Some(format!("https://example.com/{title}")),
        Some(5),
    )
    .expect("valid draft");
    Blog::from_draft(BlogId::random(), draft, owner.map(|u| u.id().clone()))
}

#[rstest]
#[tokio::test]
async fn blogs_list_in_insertion_order_with_owner(store: InMemoryStore) {
    let root = user("root");
    UserRepository::insert(&store, &root).await.expect("insert user");
    let first = blog("first", Some(&root));
    let second = blog("second", None);
    BlogRepository::insert(&store, &first).await.expect("insert");
    BlogRepository::insert(&store, &second).await.expect("insert");

    let listed = store.list_with_owners().await.expect("list");

    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].blog, first);
    let owner = listed[0].owner.as_ref().expect("owner expanded");
    assert_eq!(owner.username.as_ref(), "root");
    assert_eq!(owner.name.as_deref(), Some("root name"));
    assert_eq!(listed[1].blog, second);
    assert!(listed[1].owner.is_none());
}

#[rstest]
#[tokio::test]
async fn duplicate_username_is_rejected(store: InMemoryStore) {
    UserRepository::insert(&store, &user("root"))
        .await
        .expect("first insert");

    let err = UserRepository::insert(&store, &user("root"))
        .await
        .expect_err("duplicate");

    assert_eq!(err, UserPersistenceError::duplicate_username("root"));
}

#[rstest]
#[tokio::test]
async fn update_likes_preserves_other_fields(store: InMemoryStore) {
    let stored = blog("likes", None);
    BlogRepository::insert(&store, &stored).await.expect("insert");

    let updated = store
        .update_likes(stored.id(), 42)
        .await
        .expect("update")
        .expect("blog exists");

    assert_eq!(updated, stored.clone().with_likes(42));
    let found = BlogRepository::find_by_id(&store, stored.id())
        .await
        .expect("find");
    assert_eq!(found, Some(updated));
}

#[rstest]
#[tokio::test]
async fn update_likes_on_unknown_blog_returns_none(store: InMemoryStore) {
    let result = store.update_likes(&BlogId::random(), 1).await.expect("update");
    assert!(result.is_none());
}

#[rstest]
#[tokio::test]
async fn delete_reports_whether_a_blog_was_removed(store: InMemoryStore) {
    let stored = blog("gone", None);
    BlogRepository::insert(&store, &stored).await.expect("insert");

    assert!(store.delete(stored.id()).await.expect("delete"));
    assert!(!store.delete(stored.id()).await.expect("second delete"));
    assert!(store.list_with_owners().await.expect("list").is_empty());
}

#[rstest]
#[tokio::test]
async fn users_list_expands_linked_blogs_and_skips_deleted(store: InMemoryStore) {
    let root = user("root");
    UserRepository::insert(&store, &root).await.expect("insert user");
    let kept = blog("kept", Some(&root));
    let removed = blog("removed", Some(&root));
    for stored in [&kept, &removed] {
        BlogRepository::insert(&store, stored).await.expect("insert");
        store.link_blog(root.id(), stored.id()).await.expect("link");
    }
    store.delete(removed.id()).await.expect("delete");

    let listed = store.list_with_blogs().await.expect("list");

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].user.blogs().len(), 2);
    assert_eq!(listed[0].blogs, vec![BlogSummary::from(&kept)]);
}

#[rstest]
#[tokio::test]
async fn unlink_removes_ownership(store: InMemoryStore) {
    let root = user("root");
    UserRepository::insert(&store, &root).await.expect("insert user");
    let stored = blog("owned", Some(&root));
    store.link_blog(root.id(), stored.id()).await.expect("link");

    store.unlink_blog(root.id(), stored.id()).await.expect("unlink");

    let found = UserRepository::find_by_id(&store, root.id())
        .await
        .expect("find")
        .expect("user exists");
    assert!(found.blogs().is_empty());
}

#[rstest]
#[tokio::test]
async fn link_to_unknown_user_fails(store: InMemoryStore) {
    let err = store
        .link_blog(&UserId::random(), &BlogId::random())
        .await
        .expect_err("unknown user");
    assert!(matches!(err, UserPersistenceError::Query { .. }));
}

#[rstest]
#[tokio::test]
async fn find_by_username_matches_exactly(store: InMemoryStore) {
    UserRepository::insert(&store, &user("mluukkai"))
        .await
        .expect("insert");

    assert!(store.find_by_username("mluukkai").await.expect("find").is_some());
    assert!(store.find_by_username("MLUUKKAI").await.expect("find").is_none());
}
