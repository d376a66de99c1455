use crate::config::SelectionConfig;
use crate::score::ScoredDocument;

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub documents: Vec<ScoredDocument>,
    /// `None` when too few documents matched to apply the cut.
    pub threshold: Option<f64>,
    pub matched: usize,
}

/// Stable sort by descending score; equal scores keep their encounter order.
pub fn rank(scored: &mut [ScoredDocument]) {
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
}

/// Rank, then cut relative to the score at `config.rank`.
///
/// Documents are taken from the top until the first one strictly below the threshold,
/// which is included. With fewer than `config.rank` matches everything is kept.
pub fn select(mut scored: Vec<ScoredDocument>, config: &SelectionConfig) -> Selection {
    rank(&mut scored);
    let matched = scored.len();
    if config.rank == 0 || matched < config.rank {
        tracing::debug!(matched, rank = config.rank, "too few matches for threshold, keeping all");
        return Selection { documents: scored, threshold: None, matched };
    }

    let threshold = scored[config.rank - 1].score * config.ratio;
    let mut documents = Vec::new();
    for doc in scored {
        let below = doc.score < threshold;
        documents.push(doc);
        if below {
            break;
        }
    }
    tracing::debug!(matched, selected = documents.len(), threshold, "applied threshold");
    Selection { documents, threshold: Some(threshold), matched }
}
