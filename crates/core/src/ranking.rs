use crate::models::Article;
use crate::scoring::score;

/// Cap applied by the inline suggestions surface while typing.
pub const SUGGESTION_LIMIT: usize = 6;

/// Scores every article against the query, keeps the ones that matched, and
/// orders them by descending score. The sort is stable, so equally scored
/// articles keep their corpus (first-seen) order. An empty query yields no
/// results by policy.
pub fn rank(query: &str, articles: &[Article]) -> Vec<Article> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(u32, &Article)> = articles
        .iter()
        .filter_map(|article| {
            let points = score(query, article);
            (points > 0).then_some((points, article))
        })
        .collect();

    scored.sort_by(|left, right| right.0.cmp(&left.0));

    scored.into_iter().map(|(_, article)| article.clone()).collect()
}

/// Ranking for the suggestions panel: same ordering, capped at the top six.
pub fn suggest(query: &str, articles: &[Article]) -> Vec<Article> {
    let mut ranked = rank(query, articles);
    ranked.truncate(SUGGESTION_LIMIT);
    ranked
}

/// Narrows a corpus to one section facet (case-insensitive exact match)
/// before scoring. The facet is a precondition, not part of the scoring.
pub fn filter_section(articles: &[Article], facet: &str) -> Vec<Article> {
    let facet = facet.trim().to_lowercase();
    articles
        .iter()
        .filter(|article| article.section.to_lowercase() == facet)
        .cloned()
        .collect()
}
