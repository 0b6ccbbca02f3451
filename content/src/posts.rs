//! Post collection behind the admin "Posts" tab and the public pages.
//!
//! DESIGN
//! ======
//! The store is an ordered `Vec<Post>` with newest-first insertion. Queries
//! borrow the collection and build a [`PostView`]; they never reorder or
//! mutate the stored posts. Posts are not persisted: the collection lives for
//! the page session and starts from [`ContentStore::seeded`].

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clock::{Clock, stamp_id};
use crate::search::{contains_ci, locale_cmp};
use crate::{Error, Result};

const KIND: &str = "post";

// =============================================================================
// TYPES
// =============================================================================

/// Which public page a post belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Blog,
    Project,
}

impl Category {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::Project => "project",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "blog" => Ok(Self::Blog),
            "project" => Ok(Self::Project),
            other => Err(Error::validation(format!("unknown category: {other}"))),
        }
    }
}

/// A blog or project entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Remote URL or `data:` URI.
    pub image: Option<String>,
    pub category: Category,
    pub date: NaiveDate,
    pub published: bool,
}

/// Fields supplied by the create-post form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub category: Category,
}

/// Partial update from the inline editor. `None` leaves a field unchanged;
/// `image: Some(None)` clears the image.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<Option<String>>,
    pub category: Option<Category>,
    pub published: Option<bool>,
}

/// Category restriction for [`ContentStore::query`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }

    /// Select-box value: `all`, `blog` or `project`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.as_str(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == "all" {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

/// Search text and category restriction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub search: String,
    pub category: CategoryFilter,
}

impl PostFilter {
    fn matches(&self, post: &Post) -> bool {
        self.category.matches(post.category)
            && (contains_ci(&post.title, &self.search) || contains_ci(&post.content, &self.search))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    Date,
    Title,
    Category,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Sort key for [`ContentStore::query`]. Defaults to newest first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PostSort {
    pub field: SortField,
    pub order: SortOrder,
}

impl PostSort {
    #[must_use]
    pub const fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Combined select-box value such as `date-desc` or `title-asc`.
    #[must_use]
    pub fn key(self) -> &'static str {
        match (self.field, self.order) {
            (SortField::Date, SortOrder::Desc) => "date-desc",
            (SortField::Date, SortOrder::Asc) => "date-asc",
            (SortField::Title, SortOrder::Asc) => "title-asc",
            (SortField::Title, SortOrder::Desc) => "title-desc",
            (SortField::Category, SortOrder::Asc) => "category-asc",
            (SortField::Category, SortOrder::Desc) => "category-desc",
        }
    }

    /// Parse a value produced by [`PostSort::key`]. Unknown values fall back
    /// to the default.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        let (field, order) = key.split_once('-').unwrap_or((key, ""));
        let field = match field {
            "title" => SortField::Title,
            "category" => SortField::Category,
            _ => SortField::Date,
        };
        let order = match order {
            "asc" => SortOrder::Asc,
            _ => SortOrder::Desc,
        };
        Self { field, order }
    }

    fn compare(self, a: &Post, b: &Post) -> Ordering {
        let ordering = match self.field {
            SortField::Date => a.date.cmp(&b.date),
            SortField::Title => locale_cmp(&a.title, &b.title),
            SortField::Category => locale_cmp(a.category.as_str(), b.category.as_str()),
        };
        match self.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

/// Headline numbers for the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PostStats {
    pub total: usize,
    pub published: usize,
}

// =============================================================================
// VIEW
// =============================================================================

/// Filtered and sorted borrow of the collection. Iterate it as many times as
/// needed; each pass yields the same order.
#[derive(Clone, Debug)]
pub struct PostView<'a> {
    posts: Vec<&'a Post>,
}

impl<'a> PostView<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a Post> + '_ {
        self.posts.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&'a Post> {
        self.posts.first().copied()
    }

    /// Owned copies, for handing to a render closure.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Post> {
        self.posts.iter().map(|p| (*p).clone()).collect()
    }
}

impl<'a> IntoIterator for PostView<'a> {
    type Item = &'a Post;
    type IntoIter = std::vec::IntoIter<&'a Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.posts.into_iter()
    }
}

// =============================================================================
// STORE
// =============================================================================

/// In-memory post collection, newest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentStore {
    posts: Vec<Post>,
    last_id: Option<i64>,
}

impl ContentStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing posts, kept in the given order.
    #[must_use]
    pub fn from_posts(posts: Vec<Post>) -> Self {
        let last_id = posts.iter().map(|p| p.id).max();
        Self { posts, last_id }
    }

    /// The two starter posts shown on a fresh admin session.
    #[must_use]
    pub fn seeded() -> Self {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
        Self::from_posts(vec![
            Post {
                id: 1,
                title: "Machine Learning in Healthcare".into(),
                content: "Exploring AI applications in medical diagnosis...".into(),
                image: Some("https://images.unsplash.com/photo-1576091160399-112ba8d25d1f?w=300&h=200&fit=crop".into()),
                category: Category::Blog,
                date: date(2024, 1, 15),
                published: true,
            },
            Post {
                id: 2,
                title: "E-commerce Analytics Dashboard".into(),
                content: "Real-time sales and customer insights...".into(),
                image: Some("https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=300&h=200&fit=crop".into()),
                category: Category::Project,
                date: date(2024, 1, 10),
                published: true,
            },
        ])
    }

    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: i64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn stats(&self) -> PostStats {
        PostStats { total: self.posts.len(), published: self.posts.iter().filter(|p| p.published).count() }
    }

    /// Add a new unpublished post at the front of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the title or content is blank.
    pub fn create(&mut self, draft: PostDraft, clock: &impl Clock) -> Result<Post> {
        let title = required(&draft.title, "title")?;
        let content = required(&draft.content, "content")?;
        let post = Post {
            id: self.next_id(clock),
            title,
            content,
            image: draft.image.filter(|i| !i.trim().is_empty()),
            category: draft.category,
            date: clock.today(),
            published: false,
        };
        self.posts.insert(0, post.clone());
        tracing::debug!(id = post.id, category = %post.category, "post created");
        Ok(post)
    }

    /// Merge `patch` into the post with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown id and
    /// [`Error::Validation`] if the patch blanks the title or content.
    pub fn update(&mut self, id: i64, patch: PostPatch) -> Result<()> {
        let title = patch.title.as_deref().map(|t| required(t, "title")).transpose()?;
        let content = patch.content.as_deref().map(|c| required(c, "content")).transpose()?;
        let post = self.get_mut(id)?;
        if let Some(title) = title {
            post.title = title;
        }
        if let Some(content) = content {
            post.content = content;
        }
        if let Some(image) = patch.image {
            post.image = image.filter(|i| !i.trim().is_empty());
        }
        if let Some(category) = patch.category {
            post.category = category;
        }
        if let Some(published) = patch.published {
            post.published = published;
        }
        tracing::debug!(id, "post updated");
        Ok(())
    }

    /// Remove the post with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown id.
    pub fn delete(&mut self, id: i64) -> Result<Post> {
        let index = self.index_of(id)?;
        let removed = self.posts.remove(index);
        tracing::debug!(id, "post deleted");
        Ok(removed)
    }

    /// Copy the post with `id` as a new unpublished draft dated today.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown id.
    pub fn duplicate(&mut self, id: i64, clock: &impl Clock) -> Result<Post> {
        let source = self.get(id).cloned().ok_or(Error::NotFound { kind: KIND, id })?;
        let copy = Post {
            id: self.next_id(clock),
            title: format!("{} (Copy)", source.title),
            date: clock.today(),
            published: false,
            ..source
        };
        self.posts.insert(0, copy.clone());
        tracing::debug!(source = id, id = copy.id, "post duplicated");
        Ok(copy)
    }

    /// Flip the published flag and return the new value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown id.
    pub fn toggle_publish(&mut self, id: i64) -> Result<bool> {
        let post = self.get_mut(id)?;
        post.published = !post.published;
        tracing::debug!(id, published = post.published, "post visibility toggled");
        Ok(post.published)
    }

    /// Posts matching `filter`, ordered by `sort`.
    #[must_use]
    pub fn query(&self, filter: &PostFilter, sort: PostSort) -> PostView<'_> {
        let mut posts: Vec<&Post> = self.posts.iter().filter(|p| filter.matches(p)).collect();
        posts.sort_by(|a, b| sort.compare(a, b));
        PostView { posts }
    }

    /// Published posts of one category, newest first.
    #[must_use]
    pub fn published(&self, category: Category) -> Vec<Post> {
        self.query(&PostFilter { search: String::new(), category: CategoryFilter::Only(category) }, PostSort::default())
            .iter()
            .filter(|p| p.published)
            .cloned()
            .collect()
    }

    fn next_id(&mut self, clock: &impl Clock) -> i64 {
        let id = stamp_id(clock.now(), self.last_id);
        self.last_id = Some(id);
        id
    }

    fn index_of(&self, id: i64) -> Result<usize> {
        self.posts.iter().position(|p| p.id == id).ok_or(Error::NotFound { kind: KIND, id })
    }

    fn get_mut(&mut self, id: i64) -> Result<&mut Post> {
        self.posts.iter_mut().find(|p| p.id == id).ok_or(Error::NotFound { kind: KIND, id })
    }
}

fn required(value: &str, field: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::validation(format!("{field} is required")));
    }
    Ok(trimmed.to_owned())
}
