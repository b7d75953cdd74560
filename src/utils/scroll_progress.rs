//! Termination rule for the scroll-collection loop.
//!
//! The collection loop scrolls, waits for lazy-loaded content, and counts
//! the review cards currently in the document. This module owns the pure
//! decision of whether another scroll is worthwhile: strict growth over the
//! best count seen so far continues the loop, anything else stops it.

/// Outcome of one convergence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDecision {
    /// The page yielded new cards; keep scrolling.
    Continue,
    /// The count plateaued (or shrank); the page is exhausted.
    Stop,
}

/// Folds one observed card count into the running best.
///
/// Returns the updated best count and the decision. Only strict growth
/// counts as progress: an observation equal to the current best means the
/// last scroll loaded nothing new, so a transient equal reading cannot keep
/// the loop alive indefinitely.
pub fn advance(best_so_far: usize, observed: usize) -> (usize, ScrollDecision) {
    if observed > best_so_far {
        (observed, ScrollDecision::Continue)
    } else {
        (best_so_far, ScrollDecision::Stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_strict_growth_continues() {
        assert_eq!(advance(0, 10), (10, ScrollDecision::Continue));
        assert_eq!(advance(10, 11), (11, ScrollDecision::Continue));
    }

    #[test]
    fn test_advance_plateau_stops() {
        assert_eq!(advance(10, 10), (10, ScrollDecision::Stop));
    }

    #[test]
    fn test_advance_shrink_stops_and_keeps_best() {
        // A shrinking count (re-rendered page dropping nodes) never lowers
        // the recorded best.
        assert_eq!(advance(10, 7), (10, ScrollDecision::Stop));
    }

    #[test]
    fn test_advance_zero_observation_on_empty_page_stops() {
        assert_eq!(advance(0, 0), (0, ScrollDecision::Stop));
    }

    #[test]
    fn test_advance_sequence_terminates_after_first_plateau() {
        let observations = [10usize, 20, 30, 30, 40];
        let mut best = 0;
        let mut stopped_at = None;
        for (i, &observed) in observations.iter().enumerate() {
            let (next, decision) = advance(best, observed);
            best = next;
            if decision == ScrollDecision::Stop {
                stopped_at = Some(i);
                break;
            }
        }

        // The fourth observation repeats the third, so the loop stops there
        // even though a later reading would have grown again.
        assert_eq!(stopped_at, Some(3));
        assert_eq!(best, 30);
    }
}
