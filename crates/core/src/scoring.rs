use crate::models::Article;

pub const TITLE_EXACT_WEIGHT: u32 = 200;
pub const TITLE_PREFIX_WEIGHT: u32 = 120;
pub const TITLE_SUBSTRING_WEIGHT: u32 = 80;
pub const SUBTITLE_SUBSTRING_WEIGHT: u32 = 25;
pub const EXCERPT_SUBSTRING_WEIGHT: u32 = 15;
pub const SECTION_SUBSTRING_WEIGHT: u32 = 10;
pub const TOKEN_HIT_WEIGHT: u32 = 12;

/// Lower-cases a query and splits it on whitespace runs. No stemming, no
/// stop-word removal; punctuation stays part of its token.
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(|token| token.to_string())
        .collect()
}

/// Relevance of one article for one query.
///
/// The weights are cumulative, never exclusive: an exact title hit also earns
/// the prefix and substring weights, so an exact match (>= 400 from the title
/// alone) always outranks a document matched anywhere else. For multi-token
/// queries a flat per-token bonus is added for each token found in the
/// space-joined field haystack; a token that occurs twice in the query is
/// checked twice and counts twice.
pub fn score(query: &str, article: &Article) -> u32 {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return 0;
    }

    let title = article.title.to_lowercase();
    let subtitle = article.subtitle.to_lowercase();
    let excerpt = article.excerpt.to_lowercase();
    let section = article.section.to_lowercase();

    let mut total = 0;
    if title == query {
        total += TITLE_EXACT_WEIGHT;
    }
    if title.starts_with(&query) {
        total += TITLE_PREFIX_WEIGHT;
    }
    if title.contains(&query) {
        total += TITLE_SUBSTRING_WEIGHT;
    }
    if subtitle.contains(&query) {
        total += SUBTITLE_SUBSTRING_WEIGHT;
    }
    if excerpt.contains(&query) {
        total += EXCERPT_SUBSTRING_WEIGHT;
    }
    if section.contains(&query) {
        total += SECTION_SUBSTRING_WEIGHT;
    }

    let tokens = tokenize(&query);
    if tokens.len() > 1 {
        let haystack = format!("{title} {subtitle} {excerpt} {section}");
        let hits = tokens
            .iter()
            .filter(|token| haystack.contains(token.as_str()))
            .count() as u32;
        total += hits * TOKEN_HIT_WEIGHT;
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, subtitle: &str, excerpt: &str, section: &str) -> Article {
        Article {
            slug: "test-article".to_string(),
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            excerpt: excerpt.to_string(),
            section: section.to_string(),
            hero_image_url: String::new(),
            label: None,
            first_published_at: None,
        }
    }

    #[test]
    fn tokenize_drops_empty_pieces_and_lowercases() {
        assert_eq!(tokenize("  Budget   Transparency "), vec!["budget", "transparency"]);
        assert_eq!(tokenize("   "), Vec::<String>::new());
        assert_eq!(tokenize(""), Vec::<String>::new());
    }

    #[test]
    fn tokenize_keeps_punctuation_and_duplicates() {
        assert_eq!(tokenize("budget, budget"), vec!["budget,", "budget"]);
    }

    #[test]
    fn empty_query_scores_zero() {
        let a = article("Budget transparency debate", "", "", "");
        assert_eq!(score("", &a), 0);
        assert_eq!(score("   ", &a), 0);
    }

    #[test]
    fn exact_title_earns_every_title_weight() {
        let a = article("Budget transparency debate", "", "", "");
        assert_eq!(
            score("budget transparency debate", &a),
            TITLE_EXACT_WEIGHT
                + TITLE_PREFIX_WEIGHT
                + TITLE_SUBSTRING_WEIGHT
                + 3 * TOKEN_HIT_WEIGHT
        );
    }

    #[test]
    fn exact_title_outranks_substring_only_match() {
        let exact = article("budget", "", "", "");
        let partial = article("A budget story", "", "", "");
        assert!(score("budget", &exact) >= 400);
        assert_eq!(score("budget", &partial), TITLE_SUBSTRING_WEIGHT);
        assert!(score("budget", &exact) > score("budget", &partial));
    }

    #[test]
    fn field_weights_are_cumulative() {
        let a = article(
            "Budget transparency debate",
            "A budget deep dive",
            "The council budget under scrutiny",
            "politics",
        );
        assert_eq!(
            score("budget", &a),
            TITLE_PREFIX_WEIGHT
                + TITLE_SUBSTRING_WEIGHT
                + SUBTITLE_SUBSTRING_WEIGHT
                + EXCERPT_SUBSTRING_WEIGHT
        );
    }

    #[test]
    fn section_substring_contributes() {
        let a = article("Roundup", "", "", "politics");
        assert_eq!(score("politic", &a), SECTION_SUBSTRING_WEIGHT);
    }

    #[test]
    fn multi_token_bonus_accumulates_per_matched_token() {
        let a = article("Sports roundup", "", "budget and transparency in focus", "");
        // Neither token hits the title, both hit the haystack via the excerpt.
        assert_eq!(score("budget transparency", &a), 2 * TOKEN_HIT_WEIGHT);
        assert_eq!(score("nonexistentword", &a), 0);
    }

    #[test]
    fn duplicate_query_tokens_count_each_occurrence() {
        let a = article("Sports roundup", "", "budget for new stadium", "");
        // The full query string matches no field, so only the token bonus
        // applies, once per occurrence.
        assert_eq!(score("budget budget", &a), 2 * TOKEN_HIT_WEIGHT);
    }

    #[test]
    fn single_token_query_gets_no_token_bonus() {
        let a = article("Sports roundup", "", "budget for new stadium", "");
        assert_eq!(score("budget", &a), EXCERPT_SUBSTRING_WEIGHT);
    }
}
