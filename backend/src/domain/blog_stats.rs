//! Aggregations over an in-memory blog collection.
//!
//! Every function here is pure. Author grouping compares the `author` field
//! byte for byte; no normalisation is applied.
//!
//! Ties in [`most_blogs`] and [`most_likes`] are resolved by grouping authors
//! in order of first appearance, stable-sorting the groups ascending by the
//! measured value and taking the last group. Among tied authors this selects
//! the one whose first blog appears latest in the input.

use serde::Serialize;

use super::Blog;

/// Author with the largest number of blogs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorBlogCount {
    /// Author name as it appears on the blogs.
    pub author: String,
    /// Number of blogs written by `author`.
    #[serde(rename = "blogs")]
    pub count: usize,
}

/// Author whose blogs collected the most likes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorLikes {
    /// Author name as it appears on the blogs.
    pub author: String,
    /// Sum of likes over the author's blogs.
    pub likes: u64,
}

/// Sum of likes across all blogs; zero for an empty slice.
///
/// Saturates at `u64::MAX` instead of overflowing.
///
/// # Examples
/// ```
/// use bloglist::domain::blog_stats::total_likes;
///
/// assert_eq!(total_likes(&[]), 0);
/// ```
#[must_use]
pub fn total_likes(blogs: &[Blog]) -> u64 {
    blogs
        .iter()
        .fold(0_u64, |total, blog| total.saturating_add(blog.likes()))
}

/// Blog with strictly the most likes; the earliest one wins a tie.
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn favorite_blog(blogs: &[Blog]) -> Option<&Blog> {
    let (first, rest) = blogs.split_first()?;
    Some(rest.iter().fold(first, |favorite, blog| {
        if blog.likes() > favorite.likes() {
            blog
        } else {
            favorite
        }
    }))
}

/// Author with the most blogs, or `None` for an empty slice.
#[must_use]
pub fn most_blogs(blogs: &[Blog]) -> Option<AuthorBlogCount> {
    let groups = group_by_author(blogs, |_| 1, usize::saturating_add);
    let (author, count) = take_last_after_ascending_sort(groups)?;
    Some(AuthorBlogCount { author, count })
}

/// Author with the most likes in total, or `None` for an empty slice.
#[must_use]
pub fn most_likes(blogs: &[Blog]) -> Option<AuthorLikes> {
    let groups = group_by_author(blogs, Blog::likes, u64::saturating_add);
    let (author, likes) = take_last_after_ascending_sort(groups)?;
    Some(AuthorLikes { author, likes })
}

/// Accumulate `measure` per author with `combine`, keeping authors in
/// first-seen order.
fn group_by_author<T, F>(blogs: &[Blog], measure: F, combine: fn(T, T) -> T) -> Vec<(String, T)>
where
    T: Copy,
    F: Fn(&Blog) -> T,
{
    let mut groups: Vec<(String, T)> = Vec::new();
    for blog in blogs {
        let value = measure(blog);
        match groups.iter_mut().find(|(author, _)| author == blog.author()) {
            Some((_, total)) => *total = combine(*total, value),
            None => groups.push((blog.author().to_owned(), value)),
        }
    }
    groups
}

fn take_last_after_ascending_sort<T: Ord + Copy>(
    mut groups: Vec<(String, T)>,
) -> Option<(String, T)> {
    // `sort_by_key` is stable, which the tie-break relies on.
    groups.sort_by_key(|(_, value)| *value);
    groups.pop()
}
