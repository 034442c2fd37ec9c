use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Canonical searchable article record. Immutable once it enters a corpus.
///
/// `slug` is the dedup key across feeds. `hero_image_url`, `label`, and
/// `first_published_at` are carried for callers but never scored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Article {
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    pub excerpt: String,
    pub section: String,
    pub hero_image_url: String,
    pub label: Option<String>,
    pub first_published_at: Option<DateTime<Utc>>,
}

/// An article card exactly as a feed endpoint serializes it. Every field may
/// be absent in the payload, so deserialization defaults instead of failing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawArticleCard {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub hero_image_url: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub first_published_at: Option<DateTime<Utc>>,
}

impl RawArticleCard {
    /// Normalizes a raw card into the canonical shape, failing closed: a card
    /// without a usable slug or title is dropped rather than half-filled.
    pub fn into_article(self) -> Option<Article> {
        if self.slug.trim().is_empty() || self.title.trim().is_empty() {
            return None;
        }

        Some(Article {
            slug: self.slug,
            title: self.title,
            subtitle: self.subtitle,
            excerpt: self.excerpt,
            section: self.section,
            hero_image_url: self.hero_image_url,
            label: self.label,
            first_published_at: self.first_published_at,
        })
    }
}

/// Response of the home feed endpoint: a curated list plus a recency list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HomeFeed {
    #[serde(default)]
    pub featured: Vec<RawArticleCard>,
    #[serde(default)]
    pub latest: Vec<RawArticleCard>,
}

/// First page of a cursor-paginated section feed. Only `results` is consumed
/// during corpus assembly; the cursors are kept for callers that page onward.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectionFeed {
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<RawArticleCard>,
}

/// A results-page query: free text, optional section facet, optional cap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub text: String,
    pub section: Option<String>,
    pub limit: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::{HomeFeed, RawArticleCard, SectionFeed};

    #[test]
    fn card_without_slug_is_dropped() {
        let card = RawArticleCard {
            title: "Budget transparency debate".to_string(),
            ..Default::default()
        };
        assert!(card.into_article().is_none());
    }

    #[test]
    fn card_without_title_is_dropped() {
        let card = RawArticleCard {
            slug: "budget-transparency-debate".to_string(),
            title: "   ".to_string(),
            ..Default::default()
        };
        assert!(card.into_article().is_none());
    }

    #[test]
    fn card_with_required_fields_normalizes() {
        let card = RawArticleCard {
            slug: "budget-transparency-debate".to_string(),
            title: "Budget transparency debate".to_string(),
            section: "politics".to_string(),
            ..Default::default()
        };

        let article = card.into_article().expect("card should normalize");
        assert_eq!(article.slug, "budget-transparency-debate");
        assert_eq!(article.subtitle, "");
        assert_eq!(article.label, None);
    }

    #[test]
    fn home_feed_deserializes_with_missing_optional_fields() {
        let payload = r#"{
            "featured": [
                {
                    "title": "Budget transparency debate",
                    "slug": "budget-transparency-debate",
                    "section": "politics",
                    "first_published_at": "2025-06-01T12:00:00Z",
                    "label": "Top story"
                }
            ],
            "latest": [
                {"title": "Sports roundup", "slug": "sports-roundup"}
            ]
        }"#;

        let home: HomeFeed = serde_json::from_str(payload).expect("payload should parse");
        assert_eq!(home.featured.len(), 1);
        assert_eq!(home.featured[0].label.as_deref(), Some("Top story"));
        assert!(home.featured[0].first_published_at.is_some());
        assert_eq!(home.latest[0].excerpt, "");
    }

    #[test]
    fn section_feed_deserializes_first_page_shape() {
        let payload = r#"{
            "next": "http://127.0.0.1:8000/api/v1/sections/politics/?cursor=abc",
            "previous": null,
            "results": [
                {"title": "Sports roundup", "slug": "sports-roundup", "section": "sports"}
            ]
        }"#;

        let page: SectionFeed = serde_json::from_str(payload).expect("payload should parse");
        assert!(page.next.is_some());
        assert!(page.previous.is_none());
        assert_eq!(page.results.len(), 1);
    }
}
