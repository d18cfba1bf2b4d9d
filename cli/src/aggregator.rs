//! Result aggregator for ordering parallel solver results
//!
//! Buffers and orders results for streaming output using two min-heaps:
//! - One for expected keys (what we're waiting for)
//! - One for received results (buffered until their turn)

use crate::executor::PartOutcome;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Key for ordering results (day, part) - ordered ascending
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub day: u8,
    pub part: u8,
}

impl From<&PartOutcome> for ResultKey {
    fn from(r: &PartOutcome) -> Self {
        Self {
            day: r.day,
            part: r.part,
        }
    }
}

/// Wrapper for min-heap ordering of PartOutcome
struct OrderedOutcome(PartOutcome);

impl Ord for OrderedOutcome {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse ordering for min-heap (smallest first)
        ResultKey::from(&other.0).cmp(&ResultKey::from(&self.0))
    }
}

impl PartialOrd for OrderedOutcome {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for OrderedOutcome {}

impl PartialEq for OrderedOutcome {
    fn eq(&self, other: &Self) -> bool {
        ResultKey::from(&self.0) == ResultKey::from(&other.0)
    }
}

/// Aggregator that buffers results and emits them in sorted order
pub struct ResultAggregator {
    /// Min-heap of expected keys (next to output is at top)
    expected: BinaryHeap<Reverse<ResultKey>>,
    /// Min-heap of received results waiting to be output
    pending: BinaryHeap<OrderedOutcome>,
}

impl ResultAggregator {
    /// Create aggregator from list of expected keys
    pub fn new(expected_keys: Vec<ResultKey>) -> Self {
        Self {
            expected: expected_keys.into_iter().map(Reverse).collect(),
            pending: BinaryHeap::new(),
        }
    }

    /// Add a result and return any results ready for output (in order)
    pub fn add(&mut self, outcome: PartOutcome) -> Vec<PartOutcome> {
        self.pending.push(OrderedOutcome(outcome));

        // Emit results while pending min matches expected min
        let mut ready = Vec::new();
        while let (Some(Reverse(next_expected)), Some(top_pending)) =
            (self.expected.peek(), self.pending.peek())
        {
            if ResultKey::from(&top_pending.0) == *next_expected {
                self.expected.pop();
                ready.push(self.pending.pop().expect("peeked above").0);
            } else {
                break;
            }
        }
        ready
    }

    /// Drain remaining results in order (for final output)
    pub fn drain(&mut self) -> Vec<PartOutcome> {
        let mut results: Vec<_> = self.pending.drain().map(|o| o.0).collect();
        results.sort_by_key(|o| ResultKey::from(o));
        results
    }

    /// Check if all expected results have been received
    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn make_outcome(day: u8, part: u8) -> PartOutcome {
        PartOutcome {
            day,
            part,
            answer: Ok(format!("{}_{}", day, part)),
            solve_duration: TimeDelta::milliseconds(10),
            parse_duration: Some(TimeDelta::milliseconds(5)),
        }
    }

    #[test]
    fn in_order_results_stream_through() {
        let keys = vec![ResultKey { day: 1, part: 1 }, ResultKey { day: 1, part: 2 }];
        let mut agg = ResultAggregator::new(keys);

        let ready = agg.add(make_outcome(1, 1));
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].part, 1);

        let ready = agg.add(make_outcome(1, 2));
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].part, 2);

        assert!(agg.is_complete());
    }

    #[test]
    fn out_of_order_results_are_buffered() {
        let keys = vec![
            ResultKey { day: 1, part: 1 },
            ResultKey { day: 1, part: 2 },
            ResultKey { day: 2, part: 1 },
        ];
        let mut agg = ResultAggregator::new(keys);

        // Part 2 before part 1
        let ready = agg.add(make_outcome(1, 2));
        assert!(ready.is_empty()); // Waiting for part 1

        let ready = agg.add(make_outcome(2, 1));
        assert!(ready.is_empty()); // Still waiting for day 1 part 1

        // Now add the missing one
        let ready = agg.add(make_outcome(1, 1));
        assert_eq!(ready.len(), 3); // All three should be ready now
        assert_eq!((ready[0].day, ready[0].part), (1, 1));
        assert_eq!((ready[1].day, ready[1].part), (1, 2));
        assert_eq!((ready[2].day, ready[2].part), (2, 1));
    }

    #[test]
    fn drain_returns_leftovers_sorted() {
        let keys = vec![ResultKey { day: 1, part: 1 }, ResultKey { day: 1, part: 2 }];
        let mut agg = ResultAggregator::new(keys);

        // Only part 2 arrives (out of order)
        agg.add(make_outcome(1, 2));

        let remaining = agg.drain();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].part, 2);
        assert!(!agg.is_complete());
    }

    #[test]
    fn drain_sorts_multiple_leftovers() {
        let keys = vec![
            ResultKey { day: 1, part: 1 },
            ResultKey { day: 1, part: 2 },
            ResultKey { day: 2, part: 1 },
            ResultKey { day: 3, part: 1 },
        ];
        let mut agg = ResultAggregator::new(keys);

        // Day 1 part 1 never arrives, so everything stays buffered
        agg.add(make_outcome(3, 1));
        agg.add(make_outcome(1, 2));
        agg.add(make_outcome(2, 1));

        let order: Vec<_> = agg.drain().iter().map(|o| (o.day, o.part)).collect();
        assert_eq!(order, vec![(1, 2), (2, 1), (3, 1)]);
    }
}
