//! Tests for the domain user model.

use super::*;
use rstest::{fixture, rstest};

const VALID_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

#[fixture]
fn user() -> User {
    User::new(
        UserId::new(VALID_ID).expect("valid id"),
        Username::new("mluukkai").expect("valid username"),
        Some("Matti Luukkainen".to_owned()),
        PasswordHash::new("$2b$10$hash"),
    )
}

#[rstest]
#[case("", UserValidationError::EmptyId)]
#[case("not-a-uuid", UserValidationError::InvalidId)]
#[case(" 3fa85f64-5717-4562-b3fc-2c963f66afa6", UserValidationError::InvalidId)]
fn user_id_rejects_malformed_input(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(UserId::new(raw), Err(expected));
}

#[rstest]
fn user_id_round_trips_through_display() {
    let id = UserId::new(VALID_ID).expect("valid id");
    assert_eq!(id.to_string(), VALID_ID);
}

#[rstest]
#[case("")]
#[case("ab")]
fn username_enforces_minimum_length(#[case] raw: &str) {
    assert_eq!(
        Username::new(raw),
        Err(UserValidationError::UsernameTooShort { min: USERNAME_MIN })
    );
}

#[rstest]
fn username_counts_characters_not_bytes() {
    let name = Username::new("äöü").expect("three characters");
    assert_eq!(name.as_ref(), "äöü");
}

#[rstest]
fn new_user_owns_no_blogs(user: User) {
    assert!(user.blogs().is_empty());
    assert_eq!(user.name(), Some("Matti Luukkainen"));
}

#[rstest]
fn link_blog_ignores_repeats(mut user: User) {
    let blog = BlogId::random();
    user.link_blog(blog.clone());
    user.link_blog(blog.clone());
    assert_eq!(user.blogs(), &[blog]);
}

#[rstest]
fn unlink_blog_removes_only_the_target(user: User) {
    let first = BlogId::random();
    let second = BlogId::random();
    let mut user = user.with_blogs([first.clone(), second.clone()]);

    user.unlink_blog(&first);

    assert_eq!(user.blogs(), &[second]);
}

#[rstest]
fn password_hash_debug_is_redacted(user: User) {
    let rendered = format!("{user:?}");
    assert!(!rendered.contains("$2b$10$hash"));
    assert!(rendered.contains("<redacted>"));
}
