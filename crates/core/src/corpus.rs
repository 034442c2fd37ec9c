use crate::models::{Article, RawArticleCard};
use crate::traits::FeedSource;
use futures::future::join_all;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Fetches the home feed and the first page of every configured section feed,
/// then merges them into one deduplicated corpus.
///
/// Fetches run concurrently but the merge always consumes them in declared
/// priority order: home latest, home featured, then sections as configured.
/// A failed feed contributes nothing; assembly never fails as a whole.
pub async fn assemble<F>(feeds: &F, sections: &[String]) -> Vec<Article>
where
    F: FeedSource + Sync,
{
    let (home, section_pages) = tokio::join!(
        feeds.fetch_home(),
        join_all(sections.iter().map(|slug| feeds.fetch_section(slug)))
    );

    let mut pools: Vec<Vec<RawArticleCard>> = Vec::new();

    match home {
        Ok(home) => {
            pools.push(home.latest);
            pools.push(home.featured);
        }
        Err(error) => {
            warn!(feed = "home", error = %error, "feed fetch failed, contributing no articles");
        }
    }

    for (slug, page) in sections.iter().zip(section_pages) {
        match page {
            Ok(page) => pools.push(page.results),
            Err(error) => {
                warn!(feed = %slug, error = %error, "feed fetch failed, contributing no articles");
            }
        }
    }

    let corpus = merge_feeds(pools);
    debug!(article_count = corpus.len(), "corpus assembled");
    corpus
}

/// Normalizes and deduplicates feed pools in priority order. Malformed cards
/// are dropped; for duplicate slugs the first (highest-priority) card wins.
pub fn merge_feeds(pools: Vec<Vec<RawArticleCard>>) -> Vec<Article> {
    let mut seen = HashSet::new();
    let mut corpus = Vec::new();

    for card in pools.into_iter().flatten() {
        let Some(article) = card.into_article() else {
            continue;
        };
        if seen.insert(article.slug.clone()) {
            corpus.push(article);
        }
    }

    corpus
}
