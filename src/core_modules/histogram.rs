// THEORY:
// `HistogramCounts` is the per-call tally the aggregator builds while scanning a
// region. It is created fresh for every aggregation and thrown away afterwards;
// nothing is shared between calls.
//
// Slots are addressed by category identity through an exhaustive `match`, so
// adding a category is a compile error here until it gets a slot. Two partial
// histograms merge by slot-wise addition, which is what makes split-and-merge
// parallel aggregation give the same answer as a single sequential pass.
//
// `dominant` reproduces the leader scan exactly: the leader starts as `White`
// with a count of zero, categories are visited in `ColorCategory::ALL` order,
// and the leader is replaced only on a strictly greater count. An all-zero
// histogram therefore reports `White`.

use crate::core_modules::color_category::ColorCategory;

pub type PixelCount = u64;

const SLOTS: usize = ColorCategory::ALL.len();

/// Per-category pixel counts for one aggregation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistogramCounts {
    counts: [PixelCount; SLOTS],
}

#[inline]
fn slot(category: ColorCategory) -> usize {
    match category {
        ColorCategory::Red => 0,
        ColorCategory::Yellow => 1,
        ColorCategory::Green => 2,
        ColorCategory::Cyan => 3,
        ColorCategory::Blue => 4,
        ColorCategory::Magenta => 5,
        ColorCategory::Gray => 6,
        ColorCategory::Black => 7,
        ColorCategory::White => 8,
    }
}

impl HistogramCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, category: ColorCategory) {
        self.counts[slot(category)] += 1;
    }

    pub fn count(&self, category: ColorCategory) -> PixelCount {
        self.counts[slot(category)]
    }

    pub fn total(&self) -> PixelCount {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Adds another histogram's counts into this one.
    pub fn merge(&mut self, other: &HistogramCounts) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            *mine += theirs;
        }
    }

    /// Categories with their counts, in tie-break priority order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorCategory, PixelCount)> + '_ {
        ColorCategory::ALL
            .into_iter()
            .map(move |category| (category, self.count(category)))
    }

    /// The category with the strictly greatest count; first in priority order
    /// wins ties, `White` if nothing was counted.
    pub fn dominant(&self) -> ColorCategory {
        let mut leader = ColorCategory::DEFAULT;
        let mut leader_count: PixelCount = 0;
        for (category, count) in self.iter() {
            if count > leader_count {
                leader = category;
                leader_count = count;
            }
        }
        leader
    }
}

impl Extend<ColorCategory> for HistogramCounts {
    fn extend<T: IntoIterator<Item = ColorCategory>>(&mut self, iter: T) {
        for category in iter {
            self.record(category);
        }
    }
}

impl FromIterator<ColorCategory> for HistogramCounts {
    fn from_iter<T: IntoIterator<Item = ColorCategory>>(iter: T) -> Self {
        let mut histogram = HistogramCounts::new();
        histogram.extend(iter);
        histogram
    }
}
