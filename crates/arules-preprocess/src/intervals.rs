//! Equal-width interval tables for continuous discretization.

/// One discretization bin. Boundaries are already rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub lower: f64,
    pub upper: f64,
}

impl Interval {
    /// Strictly-inside membership test.
    ///
    /// A value exactly equal to either boundary matches no bin. That is the
    /// established policy for this pipeline, not an oversight: boundary
    /// values are reported back to the caller instead of being attributed
    /// to an arbitrary neighbor.
    pub fn contains(&self, value: f64) -> bool {
        self.lower < value && value < self.upper
    }

    /// Display label with integer-truncated boundaries, e.g. `[20-32]`.
    pub fn label(&self) -> String {
        format!("[{}-{}]", self.lower.trunc() as i64, self.upper.trunc() as i64)
    }
}

/// The full bin table for one continuous field.
#[derive(Debug, Clone)]
pub struct IntervalTable {
    bins: Vec<Interval>,
}

impl IntervalTable {
    /// Partition `[floor(min), ceil(max)]` into `intervals` consecutive bins
    /// of width `(ceil(max) - floor(min)) / intervals`.
    ///
    /// Each boundary is rounded to 2 decimal places before any comparison,
    /// and every bin's lower boundary is the previous bin's rounded upper
    /// boundary, so the grid is identical however the raw bounds were
    /// specified.
    pub fn build(min: f64, max: f64, intervals: usize) -> Self {
        let lo = min.floor();
        let hi = max.ceil();
        let step = (hi - lo) / intervals as f64;
        let mut bins = Vec::with_capacity(intervals);
        let mut lower = round2(lo);
        for _ in 0..intervals {
            let upper = round2(lower + step);
            bins.push(Interval { lower, upper });
            lower = upper;
        }
        Self { bins }
    }

    /// First bin strictly containing `value`, scanning in increasing order.
    pub fn locate(&self, value: f64) -> Option<Interval> {
        self.bins.iter().copied().find(|bin| bin.contains(value))
    }

    pub fn bins(&self) -> &[Interval] {
        &self.bins
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
