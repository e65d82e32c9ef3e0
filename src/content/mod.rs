//! Content module - loads blog documents and derives post views
//!
//! Data flows store -> normalizer -> repository: [`ContentStore`] holds raw
//! pages, [`Normalizer`] fills in defaults, [`PostRepository`] sorts,
//! filters and resolves them.

mod detail;
mod frontmatter;
mod markdown;
mod metadata;
mod normalize;
mod page;
mod post;
mod repository;
mod store;

pub use detail::{PostDetail, SearchOutcome};
pub use frontmatter::{AuthorMatter, DateValue, FrontMatter};
pub use markdown::MarkdownRenderer;
pub use metadata::{ListingMetadata, OpenGraph, PostMetadata, TwitterCard};
pub use normalize::{normalize, Normalizer};
pub use page::RawPage;
pub use post::{Author, BlogPostData, PostSummary, StaticParam, DEFAULT_AVATAR, UNKNOWN_AUTHOR_NAME};
pub use repository::PostRepository;
pub use store::ContentStore;
