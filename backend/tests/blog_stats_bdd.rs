//! Behaviour tests for the blog list statistics.

use std::cell::RefCell;

use bloglist::domain::blog_stats::{favorite_blog, most_blogs, most_likes, total_likes};
use bloglist::domain::{AuthorBlogCount, AuthorLikes, Blog, BlogDraft, BlogId};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

const REFERENCE_BLOGS: [(&str, &str, u64); 6] = [
    ("React patterns", "Michael Chan", 7),
    ("Go To Statement Considered Harmful", "Edsger W. Dijkstra", 5),
    ("Canonical string reduction", "Edsger W. Dijkstra", 12),
    ("First class tests", "Robert C. Martin", 10),
    ("TDD harms architecture", "Robert C. Martin", 0),
    ("Type wars", "Robert C. Martin", 2),
];

struct Outcome {
    total: u64,
    favourite: Option<String>,
    most_blogs: Option<AuthorBlogCount>,
    most_likes: Option<AuthorLikes>,
}

struct StatsWorld {
    blogs: RefCell<Vec<Blog>>,
    outcome: RefCell<Option<Outcome>>,
}

impl StatsWorld {
    fn new() -> Self {
        Self {
            blogs: RefCell::new(Vec::new()),
            outcome: RefCell::new(None),
        }
    }

    fn push(&self, title: &str, author: &str, likes: u64) {
        let draft = BlogDraft::try_from_parts(
            Some(title.to_owned()),
            Some(author.to_owned()),
            Some(format!("https://example.com/{}", self.blogs.borrow().len())),
            Some(likes),
        )
        .expect("valid draft");
        self.blogs
            .borrow_mut()
            .push(Blog::from_draft(BlogId::random(), draft, None));
    }

    fn with_outcome<F>(&self, f: F)
    where
        F: FnOnce(&Outcome),
    {
        let outcome = self.outcome.borrow();
        f(outcome.as_ref().expect("statistics computed"));
    }
}

#[fixture]
fn world() -> StatsWorld {
    StatsWorld::new()
}

#[given("the reference blog list")]
fn the_reference_blog_list(world: &StatsWorld) {
    for (title, author, likes) in REFERENCE_BLOGS {
        world.push(title, author, likes);
    }
}

#[given("an empty blog list")]
fn an_empty_blog_list(world: &StatsWorld) {
    world.blogs.borrow_mut().clear();
}

#[given("a blog by {author} with {likes} likes")]
fn a_blog_by_author(world: &StatsWorld, author: String, likes: u64) {
    let title = format!("Post {}", world.blogs.borrow().len() + 1);
    world.push(&title, &author, likes);
}

#[when("the statistics are computed")]
fn the_statistics_are_computed(world: &StatsWorld) {
    let blogs = world.blogs.borrow();
    let outcome = Outcome {
        total: total_likes(&blogs),
        favourite: favorite_blog(&blogs).map(|blog| blog.title().to_owned()),
        most_blogs: most_blogs(&blogs),
        most_likes: most_likes(&blogs),
    };
    *world.outcome.borrow_mut() = Some(outcome);
}

#[then("the total likes are {total}")]
fn the_total_likes_are(world: &StatsWorld, total: u64) {
    world.with_outcome(|outcome| assert_eq!(outcome.total, total));
}

#[then("the favourite blog is {title}")]
fn the_favourite_blog_is(world: &StatsWorld, title: String) {
    world.with_outcome(|outcome| assert_eq!(outcome.favourite.as_deref(), Some(title.as_str())));
}

#[then("the author with most blogs is {author} with {count} blogs")]
fn the_author_with_most_blogs(world: &StatsWorld, author: String, count: usize) {
    world.with_outcome(|outcome| {
        assert_eq!(outcome.most_blogs, Some(AuthorBlogCount { author, count }));
    });
}

#[then("the author with most likes is {author} with {likes} likes")]
fn the_author_with_most_likes(world: &StatsWorld, author: String, likes: u64) {
    world.with_outcome(|outcome| {
        assert_eq!(outcome.most_likes, Some(AuthorLikes { author, likes }));
    });
}

#[then("there is no favourite blog")]
fn there_is_no_favourite_blog(world: &StatsWorld) {
    world.with_outcome(|outcome| assert!(outcome.favourite.is_none()));
}

#[then("there is no leading author")]
fn there_is_no_leading_author(world: &StatsWorld) {
    world.with_outcome(|outcome| {
        assert!(outcome.most_blogs.is_none());
        assert!(outcome.most_likes.is_none());
    });
}

#[scenario(
    path = "tests/features/blog_stats.feature",
    name = "Statistics over the reference blog list"
)]
fn statistics_over_the_reference_blog_list(world: StatsWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/blog_stats.feature",
    name = "Statistics over an empty blog list"
)]
fn statistics_over_an_empty_blog_list(world: StatsWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/blog_stats.feature",
    name = "Tied authors resolve to the one seen last"
)]
fn tied_authors_resolve_to_the_one_seen_last(world: StatsWorld) {
    drop(world);
}
