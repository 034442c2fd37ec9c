use crate::corpus;
use crate::models::{Article, SearchRequest};
use crate::ranking::{filter_section, rank, suggest};
use crate::traits::FeedSource;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct CorpusSlot {
    generation: u64,
    snapshot: Option<Arc<Vec<Article>>>,
}

/// One interactive search session: owns the feed source, the configured
/// section feeds, and the memoized corpus snapshot. Ranking always runs
/// against the snapshot, never against live refetches.
pub struct SearchSession<F> {
    feeds: F,
    sections: Vec<String>,
    slot: RwLock<CorpusSlot>,
}

impl<F> SearchSession<F>
where
    F: FeedSource + Send + Sync,
{
    pub fn new(feeds: F, sections: Vec<String>) -> Self {
        Self {
            feeds,
            sections,
            slot: RwLock::new(CorpusSlot::default()),
        }
    }

    /// Returns the session corpus, assembling it on first use.
    ///
    /// The slot carries a generation counter: an assembly that was in flight
    /// when `invalidate` ran is discarded instead of overwriting the fresher
    /// session state.
    pub async fn corpus(&self) -> Arc<Vec<Article>> {
        let generation = {
            let slot = self.slot.read().await;
            if let Some(snapshot) = &slot.snapshot {
                return snapshot.clone();
            }
            slot.generation
        };

        let assembled = Arc::new(corpus::assemble(&self.feeds, &self.sections).await);

        let mut slot = self.slot.write().await;
        if slot.generation == generation && slot.snapshot.is_none() {
            slot.snapshot = Some(assembled.clone());
        }
        slot.snapshot.clone().unwrap_or(assembled)
    }

    /// Drops the snapshot; the next query assembles a fresh corpus.
    pub async fn invalidate(&self) {
        let mut slot = self.slot.write().await;
        slot.generation += 1;
        slot.snapshot = None;
    }

    /// Full results page: optional section facet narrows the corpus before
    /// scoring, optional limit caps the output. Uncapped by default.
    pub async fn search(&self, request: &SearchRequest) -> Vec<Article> {
        let corpus = self.corpus().await;

        let mut ranked = match request.section.as_deref().map(str::trim) {
            Some(facet) if !facet.is_empty() => {
                rank(&request.text, &filter_section(&corpus, facet))
            }
            _ => rank(&request.text, &corpus),
        };

        if let Some(limit) = request.limit {
            ranked.truncate(limit);
        }
        ranked
    }

    /// Inline suggestions panel: top six matches for the query so far.
    pub async fn suggest(&self, query: &str) -> Vec<Article> {
        let corpus = self.corpus().await;
        suggest(query, &corpus)
    }
}
