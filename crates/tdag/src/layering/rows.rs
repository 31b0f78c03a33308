//! Per-row interval occupancy used while packing nodes into rows.

use tdag_graphlib::NodeIx;

#[derive(Debug, Clone, Copy)]
struct Span {
    lo: f64,
    hi: f64,
    owner: Option<NodeIx>,
}

impl Span {
    fn collides(&self, lo: f64, hi: f64, clearance: f64) -> bool {
        lo < self.hi + clearance && self.lo < hi + clearance
    }
}

/// Reserved horizontal spans, one list per row. Rows past the end are empty.
#[derive(Debug, Clone, Default)]
pub(crate) struct Rows {
    rows: Vec<Vec<Span>>,
}

impl Rows {
    /// Number of rows that hold at least one reservation (or lie above one that does).
    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn reserve(&mut self, row: usize, lo: f64, hi: f64, owner: Option<NodeIx>) {
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        self.rows[row].push(Span {
            lo: lo.min(hi),
            hi: lo.max(hi),
            owner,
        });
    }

    /// Whether `[lo, hi]` keeps `clearance` from every span on `row` not owned by `ignore`.
    pub(crate) fn is_free(
        &self,
        row: usize,
        lo: f64,
        hi: f64,
        clearance: f64,
        ignore: &[NodeIx],
    ) -> bool {
        let Some(spans) = self.rows.get(row) else {
            return true;
        };
        spans
            .iter()
            .filter(|s| s.owner.is_none_or(|o| !ignore.contains(&o)))
            .all(|s| !s.collides(lo, hi, clearance))
    }

    /// Right end of the furthest-reaching span on `row` that has `x` strictly inside it.
    pub(crate) fn covering(&self, row: usize, x: f64) -> Option<f64> {
        self.rows
            .get(row)?
            .iter()
            .filter(|s| s.lo < x && x < s.hi)
            .map(|s| s.hi)
            .reduce(f64::max)
    }

    /// First row strictly below `row` where `[lo, hi]` fits.
    pub(crate) fn first_free_below(&self, row: usize, lo: f64, hi: f64, clearance: f64) -> usize {
        let mut candidate = row + 1;
        while !self.is_free(candidate, lo, hi, clearance, &[]) {
            candidate += 1;
        }
        candidate
    }
}
