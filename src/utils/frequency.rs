//! Token frequency counting and top-N ranking.

use std::collections::HashMap;

/// Ranks the `n` most frequent tokens in a flattened token stream.
///
/// Ranking is by descending occurrence count; ties are broken by
/// first-encountered order, so the ranking is stable across runs for the
/// same input sequence.
pub fn top_n<'a, I>(tokens: I, n: usize) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (index, token) in tokens.into_iter().enumerate() {
        let entry = counts.entry(token).or_insert((0, index));
        entry.0 += 1;
    }

    let mut ranked: Vec<(&str, (usize, usize))> = counts.into_iter().collect();
    ranked.sort_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
        count_b.cmp(count_a).then(first_a.cmp(first_b))
    });

    ranked
        .into_iter()
        .take(n)
        .map(|(token, (count, _))| (token.to_string(), count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(tokens: &[&str], n: usize) -> Vec<(String, usize)> {
        top_n(tokens.iter().copied(), n)
    }

    #[test]
    fn test_top_n_counts_occurrences() {
        let result = rank(&["画面", "剧情", "画面", "画面", "剧情"], 10);

        assert_eq!(
            result,
            vec![("画面".to_string(), 3), ("剧情".to_string(), 2)]
        );
    }

    #[test]
    fn test_top_n_sorted_by_descending_count() {
        let result = rank(&["a1", "b2", "b2", "c3", "c3", "c3"], 10);

        let counts: Vec<usize> = result.iter().map(|(_, c)| *c).collect();
        assert_eq!(counts, vec![3, 2, 1]);
    }

    #[test]
    fn test_top_n_ties_broken_by_discovery_order() {
        let result = rank(&["后来", "先来", "先来", "后来"], 10);

        // Equal counts: whichever token appeared first in the stream ranks
        // first.
        assert_eq!(
            result,
            vec![("后来".to_string(), 2), ("先来".to_string(), 2)]
        );
    }

    #[test]
    fn test_top_n_truncates_to_n() {
        let result = rank(&["a1", "b2", "c3", "d4"], 2);

        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_top_n_smaller_input_than_n() {
        let result = rank(&["a1"], 20);

        assert_eq!(result, vec![("a1".to_string(), 1)]);
    }

    #[test]
    fn test_top_n_empty_input() {
        let result = rank(&[], 5);

        assert!(result.is_empty());
    }

    #[test]
    fn test_top_n_zero_n() {
        let result = rank(&["a1", "a1"], 0);

        assert!(result.is_empty());
    }
}
