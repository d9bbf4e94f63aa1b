use crate::error::{Error, Result};

/// Where one job landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub server: usize,
    pub start: u64,
    pub finish: u64,
}

/// Earliest-available server pool. Greedy, non-preemptive and
/// work-conserving: there is no explicit wait queue, waiting is entirely
/// captured by `start = max(arrival, next_free)`.
pub struct ServerPool {
    next_free: Vec<u64>,
    busy: Vec<u64>,
}

impl ServerPool {
    pub fn new(count: usize) -> Result<Self> {
        if count == 0 {
            return Err(Error::ServersZero);
        }
        Ok(Self {
            next_free: vec![0; count],
            busy: vec![0; count],
        })
    }

    pub fn len(&self) -> usize {
        self.next_free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.next_free.is_empty()
    }

    /// Accumulated busy time per server, in index order.
    pub fn busy_times(&self) -> &[u64] {
        &self.busy
    }

    /// Assign one job. Jobs must be offered in non-decreasing arrival order;
    /// `next_free` only reflects jobs already assigned, so an out-of-order
    /// arrival would see stale availability.
    ///
    /// A server idle at the arrival wins over the earliest-to-free fallback,
    /// and the lowest index wins ties in both cases.
    pub fn assign(&mut self, arrival: u64, service: u64) -> Placement {
        let server = match self.next_free.iter().position(|&free| free <= arrival) {
            Some(idx) => idx,
            None => {
                let mut best = 0;
                for (idx, &free) in self.next_free.iter().enumerate().skip(1) {
                    if free < self.next_free[best] {
                        best = idx;
                    }
                }
                best
            }
        };

        let start = arrival.max(self.next_free[server]);
        let finish = start + service;
        self.next_free[server] = finish;
        self.busy[server] += service;

        Placement {
            server,
            start,
            finish,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_servers_error() {
        assert!(ServerPool::new(0).is_err());
    }

    #[test]
    fn single_server_serializes_simultaneous_arrivals() {
        // Three jobs at epoch 0 with durations 2, 3, 4 queue behind each
        // other on the only server.
        let mut pool = ServerPool::new(1).unwrap();
        let placements: Vec<Placement> = [2u64, 3, 4]
            .iter()
            .map(|&service| pool.assign(0, service))
            .collect();

        let starts: Vec<u64> = placements.iter().map(|p| p.start).collect();
        let finishes: Vec<u64> = placements.iter().map(|p| p.finish).collect();
        assert_eq!(starts, vec![0, 2, 5]);
        assert_eq!(finishes, vec![2, 5, 9]);
        assert_eq!(pool.busy_times(), &[9]);
    }

    #[test]
    fn idle_server_beats_earliest_to_free() {
        // Job A occupies server 0 until t=5; job B arriving at t=1 goes to
        // the idle server 1 even though server 0 frees "soon".
        let mut pool = ServerPool::new(2).unwrap();
        let a = pool.assign(0, 5);
        let b = pool.assign(1, 1);

        assert_eq!(a.server, 0);
        assert_eq!(a.start, 0);
        assert_eq!(a.finish, 5);
        assert_eq!(b.server, 1);
        assert_eq!(b.start, 1);
        assert_eq!(b.finish, 2);
    }

    #[test]
    fn earliest_to_free_fallback_when_all_busy() {
        let mut pool = ServerPool::new(2).unwrap();
        pool.assign(0, 10);
        pool.assign(0, 4);
        // Both busy at t=1; server 1 frees at 4, server 0 at 10.
        let placement = pool.assign(1, 2);
        assert_eq!(placement.server, 1);
        assert_eq!(placement.start, 4);
        assert_eq!(placement.finish, 6);
    }

    #[test]
    fn lowest_index_wins_idle_tie() {
        let mut pool = ServerPool::new(3).unwrap();
        let placement = pool.assign(0, 1);
        assert_eq!(placement.server, 0);
    }

    #[test]
    fn lowest_index_wins_earliest_to_free_tie() {
        let mut pool = ServerPool::new(2).unwrap();
        pool.assign(0, 5);
        pool.assign(0, 5);
        let placement = pool.assign(1, 1);
        assert_eq!(placement.server, 0);
        assert_eq!(placement.start, 5);
    }

    #[test]
    fn zero_duration_job_does_not_occupy_the_server() {
        let mut pool = ServerPool::new(1).unwrap();
        let first = pool.assign(0, 0);
        let second = pool.assign(0, 3);
        assert_eq!(first.finish, 0);
        assert_eq!(second.start, 0);
        assert_eq!(pool.busy_times(), &[3]);
    }

    #[test]
    fn next_free_is_monotonic_per_server() {
        let mut pool = ServerPool::new(2).unwrap();
        let mut last_finish = vec![0u64; 2];
        let jobs = [(0u64, 4u64), (1, 2), (2, 6), (3, 1), (7, 2), (9, 5)];
        for &(arrival, service) in &jobs {
            let placement = pool.assign(arrival, service);
            assert!(placement.start >= arrival);
            assert!(placement.start >= last_finish[placement.server]);
            last_finish[placement.server] = placement.finish;
        }
    }
}
