//! Independent orderings of bound summaries.

use boundscope_core::{BoundId, Metric};
use serde::Serialize;

use crate::summary::BoundSummary;

/// A bound summary with its 1-based position in a [`Ranking`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedBound {
    /// 1-based rank (1 = best).
    pub rank: usize,
    /// The ranked summary.
    #[serde(flatten)]
    pub summary: BoundSummary,
}

/// Summaries ordered best-first by one metric.
///
/// Each ranking is built from its own copy of the summaries, so ranking the
/// same list by accuracy and then by time never disturbs either order.
/// Pruned and accuracy rank descending, time ascending. Equal averages keep
/// registry order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    metric: Metric,
    entries: Vec<RankedBound>,
}

impl Ranking {
    /// Rank `summaries` by `metric`.
    #[must_use]
    pub fn by(summaries: &[BoundSummary], metric: Metric) -> Self {
        let mut ordered: Vec<BoundSummary> = summaries.to_vec();
        ordered.sort_by(|a, b| {
            metric
                .better_first(a.average(metric), b.average(metric))
                .then_with(|| a.bound.cmp(&b.bound))
        });

        let entries = ordered
            .into_iter()
            .enumerate()
            .map(|(i, summary)| RankedBound { rank: i + 1, summary })
            .collect();

        Self { metric, entries }
    }

    /// Return the best summary by `metric`, or `None` if no summary has any
    /// samples behind it.
    #[must_use]
    pub fn leader(summaries: &[BoundSummary], metric: Metric) -> Option<BoundSummary> {
        if summaries.iter().all(|s| s.sample_count == 0) {
            return None;
        }
        Self::by(summaries, metric).best().cloned()
    }

    /// Return the metric this ranking orders by.
    #[must_use]
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Return the top-ranked summary.
    #[must_use]
    pub fn best(&self) -> Option<&BoundSummary> {
        self.entries.first().map(|e| &e.summary)
    }

    /// Return the 1-based rank of `bound`.
    #[must_use]
    pub fn rank_of(&self, bound: BoundId) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.summary.bound == bound)
            .map(|e| e.rank)
    }

    /// Return the ranked entries, best first.
    #[must_use]
    pub fn entries(&self) -> &[RankedBound] {
        &self.entries
    }

    /// Iterate over summaries, best first.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &BoundSummary> + '_ {
        self.entries.iter().map(|e| &e.summary)
    }

    /// Return the number of ranked bounds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return true if nothing is ranked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
