//! Post repository - ordered, searchable views over a content store

use chrono::{DateTime, Utc};

use super::{
    BlogPostData, ContentStore, MarkdownRenderer, Normalizer, PostDetail, PostSummary, RawPage,
    SearchOutcome, StaticParam,
};
use crate::config::SiteConfig;

/// Read-only queries over an injected [`ContentStore`]
///
/// Nothing is cached: every call re-reads the store and re-derives
/// normalized records.
pub struct PostRepository<'a> {
    store: &'a ContentStore,
    normalizer: Normalizer,
}

impl<'a> PostRepository<'a> {
    /// Repository with default normalization rules
    pub fn new(store: &'a ContentStore) -> Self {
        Self::with_normalizer(store, Normalizer::default())
    }

    pub fn with_normalizer(store: &'a ContentStore, normalizer: Normalizer) -> Self {
        Self { store, normalizer }
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// All pages, newest first
    pub fn list_all(&self) -> Vec<&'a RawPage> {
        self.list_all_at(Utc::now())
    }

    /// All pages, newest first, with `now` standing in for missing dates
    ///
    /// `slice::sort_by_key` is a stable merge sort: pages with equal
    /// timestamps keep the store's natural order. That order is part of
    /// the contract, so do not switch this to an unstable sort.
    pub fn list_all_at(&self, now: DateTime<Utc>) -> Vec<&'a RawPage> {
        let mut keyed: Vec<(DateTime<Utc>, &'a RawPage)> = self
            .store
            .pages()
            .iter()
            .map(|page| (self.normalizer.published_at(page, now), page))
            .collect();

        keyed.sort_by_key(|(date, _)| std::cmp::Reverse(*date));
        keyed.into_iter().map(|(_, page)| page).collect()
    }

    /// The page whose slug sequence is exactly `[slug]`
    ///
    /// `None` means not found. With duplicate slugs the first page in
    /// store order is returned.
    pub fn get_by_slug(&self, slug: &str) -> Option<&'a RawPage> {
        self.store.get_page(&[slug])
    }

    /// Pages whose title or summary contains `query`, case-insensitively
    ///
    /// Results keep `list_all` order. A blank query returns everything.
    pub fn search(&self, query: &str) -> Vec<&'a RawPage> {
        self.search_at(query, Utc::now())
    }

    pub fn search_at(&self, query: &str, now: DateTime<Utc>) -> Vec<&'a RawPage> {
        let all = self.list_all_at(now);
        if query.trim().is_empty() {
            return all;
        }

        let needle = query.to_lowercase();
        all.into_iter()
            .filter(|page| search_text(page).contains(&needle))
            .collect()
    }

    /// One route parameter per page, in store order
    pub fn generate_static_params(&self) -> Vec<StaticParam> {
        self.store
            .pages()
            .iter()
            .map(|page| StaticParam {
                slug: page.slug().to_string(),
            })
            .collect()
    }

    /// Normalized posts, newest first
    pub fn posts(&self) -> Vec<BlogPostData> {
        let now = Utc::now();
        self.list_all_at(now)
            .into_iter()
            .map(|page| self.normalizer.normalize_at(page, now))
            .collect()
    }

    /// Listing cards for `query`
    pub fn summaries(&self, query: &str) -> Vec<PostSummary> {
        let now = Utc::now();
        self.search_at(query, now)
            .into_iter()
            .map(|page| PostSummary::from(self.normalizer.normalize_at(page, now)))
            .collect()
    }

    /// Normalized post for `slug`
    pub fn post(&self, slug: &str) -> Option<BlogPostData> {
        self.get_by_slug(slug)
            .map(|page| self.normalizer.normalize(page))
    }

    /// Everything a detail page needs for `slug`
    pub fn detail(
        &self,
        slug: &str,
        renderer: &MarkdownRenderer,
        config: &SiteConfig,
    ) -> Option<PostDetail> {
        let page = self.get_by_slug(slug)?;
        Some(PostDetail::build(
            self.normalizer.normalize(page),
            &page.body,
            renderer,
            config,
        ))
    }

    /// Listing query with the index page copy attached
    pub fn search_outcome(&self, query: &str, config: &SiteConfig) -> SearchOutcome {
        SearchOutcome::new(query, self.summaries(query), config)
    }
}

/// Lower-cased `title summary` haystack for search
fn search_text(page: &RawPage) -> String {
    let title = page.data.title.as_deref().unwrap_or("");
    let summary = page.data.summary.as_deref().unwrap_or("");
    format!("{} {}", title, summary).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UndatedPolicy;
    use crate::content::{Author, DateValue, FrontMatter};
    use chrono::TimeZone;

    fn post(slug: &str, title: &str, summary: &str, date: Option<&str>) -> RawPage {
        let data = FrontMatter {
            title: Some(title.to_string()),
            summary: Some(summary.to_string()),
            published_at: date.map(|d| DateValue::Text(d.to_string())),
            ..Default::default()
        };
        RawPage::new(vec![slug.to_string()], format!("/blog/{}", slug), data)
    }

    fn scenario() -> ContentStore {
        ContentStore::from_pages(
            vec![
                post("a", "Alpha Guide", "intro", Some("2024-01-01")),
                post("b", "Beta Notes", "alpha details", Some("2024-06-01")),
            ],
        )
    }

    fn slugs(pages: &[&RawPage]) -> Vec<String> {
        pages.iter().map(|p| p.slug().to_string()).collect()
    }

    #[test]
    fn test_list_all_newest_first() {
        let store = scenario();
        let repo = PostRepository::new(&store);
        assert_eq!(slugs(&repo.list_all()), vec!["b", "a"]);
    }

    #[test]
    fn test_list_all_is_non_increasing() {
        let store = ContentStore::from_pages(
            vec![
                post("x", "X", "", Some("2023-05-05")),
                post("y", "Y", "", None),
                post("z", "Z", "", Some("2025-01-01T10:00:00Z")),
                post("w", "W", "", Some("2019-12-31")),
            ],
        );
        let repo = PostRepository::new(&store);
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let listed = repo.list_all_at(now);
        let dates: Vec<_> = listed
            .iter()
            .map(|p| repo.normalizer().published_at(p, now))
            .collect();
        assert!(dates.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(slugs(&listed), vec!["z", "y", "x", "w"]);
    }

    #[test]
    fn test_list_all_is_idempotent() {
        let store = scenario();
        let repo = PostRepository::new(&store);
        assert_eq!(slugs(&repo.list_all()), slugs(&repo.list_all()));
    }

    #[test]
    fn test_equal_dates_keep_store_order() {
        let store = ContentStore::from_pages(
            vec![
                post("first", "1", "", Some("2024-02-02")),
                post("undated-1", "2", "", None),
                post("second", "3", "", Some("2024-02-02")),
                post("undated-2", "4", "", None),
            ],
        );
        let repo = PostRepository::new(&store);
        let now = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(
            slugs(&repo.list_all_at(now)),
            vec!["undated-1", "undated-2", "first", "second"]
        );
    }

    #[test]
    fn test_epoch_policy_sorts_undated_last() {
        let store = ContentStore::from_pages(
            vec![post("undated", "U", "", None), post("dated", "D", "", Some("2001-01-01"))],
        );
        let repo = PostRepository::with_normalizer(
            &store,
            Normalizer::new(Author::default(), UndatedPolicy::Epoch),
        );
        assert_eq!(slugs(&repo.list_all()), vec!["dated", "undated"]);
    }

    #[test]
    fn test_get_by_slug() {
        let store = scenario();
        let repo = PostRepository::new(&store);
        let page = repo.get_by_slug("a").unwrap();
        assert_eq!(page.data.title.as_deref(), Some("Alpha Guide"));
        assert!(repo.get_by_slug("missing-slug").is_none());
    }

    #[test]
    fn test_get_by_slug_ignores_nested_pages() {
        let nested = RawPage::new(
            vec!["a".to_string(), "b".to_string()],
            "/blog/a/b",
            FrontMatter::default(),
        );
        let store = ContentStore::from_pages(vec![nested]);
        let repo = PostRepository::new(&store);
        assert!(repo.get_by_slug("a").is_none());
    }

    #[test]
    fn test_search_blank_returns_all_in_order() {
        let store = ContentStore::from_pages(
            vec![
                post("a", "A", "", Some("2024-01-01")),
                post("b", "B", "", Some("2024-03-01")),
                post("c", "C", "", Some("2024-02-01")),
            ],
        );
        let repo = PostRepository::new(&store);
        let all = slugs(&repo.list_all());
        assert_eq!(slugs(&repo.search("")), all);
        assert_eq!(slugs(&repo.search("   ")), all);
        assert_eq!(all, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let store = ContentStore::from_pages(
            vec![
                post("hello", "Hello World", "", Some("2024-01-01")),
                post("other", "Other", "nothing", Some("2024-01-02")),
            ],
        );
        let repo = PostRepository::new(&store);
        assert_eq!(slugs(&repo.search("HELLO")), vec!["hello"]);
    }

    #[test]
    fn test_search_matches_title_or_summary_in_date_order() {
        let store = scenario();
        let repo = PostRepository::new(&store);
        assert_eq!(slugs(&repo.search("alpha")), vec!["b", "a"]);
        assert_eq!(slugs(&repo.search("intro")), vec!["a"]);
        assert!(repo.search("gamma").is_empty());
    }

    #[test]
    fn test_search_handles_missing_fields() {
        let store = ContentStore::from_pages(
            vec![RawPage::new(vec!["bare".to_string()], "/blog/bare", FrontMatter::default())],
        );
        let repo = PostRepository::new(&store);
        assert!(repo.search("x").is_empty());
        assert_eq!(repo.search("").len(), 1);
    }

    #[test]
    fn test_generate_static_params() {
        let store = scenario();
        let repo = PostRepository::new(&store);
        let mut params = repo.generate_static_params();
        params.sort_by(|a, b| a.slug.cmp(&b.slug));
        assert_eq!(
            params,
            vec![
                StaticParam { slug: "a".to_string() },
                StaticParam { slug: "b".to_string() },
            ]
        );
    }

    #[test]
    fn test_empty_store() {
        let store = ContentStore::default();
        let repo = PostRepository::new(&store);
        assert!(repo.list_all().is_empty());
        assert!(repo.search("anything").is_empty());
        assert!(repo.get_by_slug("a").is_none());
        assert!(repo.generate_static_params().is_empty());
    }

    #[test]
    fn test_summaries_and_posts() {
        let store = scenario();
        let repo = PostRepository::new(&store);

        let posts = repo.posts();
        assert_eq!(posts[0].slug, "b");
        assert_eq!(posts[0].published_at, "2024-06-01T00:00:00.000Z");

        let cards = repo.summaries("intro");
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].excerpt, "intro");
        assert_eq!(cards[0].author.name, "Unknown Author");

        assert_eq!(repo.post("a").unwrap().title, "Alpha Guide");
        assert!(repo.post("zzz").is_none());
    }

    #[test]
    fn test_detail_and_outcome() {
        let store = scenario();
        let repo = PostRepository::new(&store);
        let config = SiteConfig::default();
        let renderer = MarkdownRenderer::new();

        let detail = repo.detail("b", &renderer, &config).unwrap();
        assert_eq!(detail.post.title, "Beta Notes");
        assert!(repo.detail("missing", &renderer, &config).is_none());

        let outcome = repo.search_outcome("ALPHA", &config);
        assert_eq!(outcome.posts.len(), 2);
        assert_eq!(outcome.status.as_deref(), Some("2 posts found"));
    }
}
