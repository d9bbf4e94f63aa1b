use rand::Rng;

/// Ordered arrival epochs plus the inter-arrival increments that produced
/// them. Epochs are non-decreasing and the first is always 0.
#[derive(Clone, Debug)]
pub struct ArrivalPlan {
    epochs: Vec<u64>,
    increments: Vec<u64>,
}

impl ArrivalPlan {
    pub fn epochs(&self) -> &[u64] {
        &self.epochs
    }

    pub fn increments(&self) -> &[u64] {
        &self.increments
    }
}

/// Cumulative Poisson mass, `entries[i] = P(X <= i - 1)` with `entries[0] = 0`.
/// Terms come from the pmf recurrence `pmf(k) = pmf(k - 1) * rate / k` rather
/// than raw factorials, which overflow past k = 170.
struct CumulativeTable {
    rate: f64,
    entries: Vec<f64>,
    // pmf of the bucket that the next grow() folds in
    term: f64,
}

impl CumulativeTable {
    fn new(rate: f64, buckets: usize) -> Self {
        let mut table = Self {
            rate,
            entries: vec![0.0],
            term: (-rate).exp(),
        };
        for _ in 0..buckets {
            table.grow();
        }
        table
    }

    /// Append one bucket. Returns false once the pmf term has underflowed to
    /// zero, at which point the table cannot get any closer to mass 1.
    fn grow(&mut self) -> bool {
        if self.term == 0.0 {
            return false;
        }
        let last = self.entries.last().copied().unwrap_or(0.0);
        self.entries.push(last + self.term);
        self.term *= self.rate / self.entries.len().saturating_sub(1) as f64;
        true
    }

    /// Smallest index `j >= 1` with `r <= entries[j]`, scanning buckets in
    /// increasing order. If `r` exceeds the current mass the table is grown
    /// until it is covered, so every draw lands in a bucket and no arrival is
    /// ever silently dropped.
    fn bucket_for(&mut self, r: f64) -> usize {
        let mut j = 1;
        loop {
            while j < self.entries.len() {
                if r <= self.entries[j] {
                    return j;
                }
                j += 1;
            }
            if !self.grow() {
                return (self.entries.len() - 1).max(1);
            }
        }
    }
}

/// Generate `count` arrival epochs for a Poisson(rate) process by
/// inverse-CDF lookup against the cumulative table. Bucket `j` maps to an
/// inter-arrival increment of `j - 1`, so back-to-back arrivals are possible.
pub fn generate_arrivals<R: Rng + ?Sized>(rate: f64, count: usize, rng: &mut R) -> ArrivalPlan {
    let mut table = CumulativeTable::new(rate, count);
    let mut epochs = Vec::with_capacity(count);
    let mut increments = Vec::with_capacity(count.saturating_sub(1));

    epochs.push(0);
    for _ in 1..count {
        let r: f64 = rng.gen();
        let step = (table.bucket_for(r) - 1) as u64;
        let previous = epochs.last().copied().unwrap_or(0);
        increments.push(step);
        epochs.push(previous + step);
    }

    ArrivalPlan { epochs, increments }
}
