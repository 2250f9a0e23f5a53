use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

///
/// Split `items` into `parts` contiguous chunks of near identical size.
///
/// Sizes differ by at most one: the first `len % parts` chunks get the
/// extra element. Concatenating the chunks in order reproduces the input
/// exactly, so partitioned work keeps its ordering guarantees.
///
pub fn partition<T>(items: Vec<T>, parts: usize) -> Vec<Vec<T>> {
    assert!(parts > 0, "partition count must be positive");

    let base_size = items.len() / parts;
    let extra = items.len() % parts;

    let mut items = items.into_iter();
    let mut partitions = Vec::with_capacity(parts);
    for index in 0..parts {
        let size = base_size + usize::from(index < extra);
        partitions.push(items.by_ref().take(size).collect());
    }

    partitions
}

///
/// Union partial result maps produced by disjoint partitions.
///
/// Disjointness is the caller's contract: each key must come from exactly
/// one partition. A duplicate key means the partitioning itself is broken,
/// which is a programming error, so it panics instead of returning.
///
pub fn merge_maps<K, V>(parts: Vec<HashMap<K, V>>) -> HashMap<K, V>
where
    K: Eq + Hash + Debug,
{
    let mut merged = HashMap::new();
    for part in parts {
        for (key, value) in part {
            assert!(
                !merged.contains_key(&key),
                "partition violation: key {key:?} produced by more than one partition"
            );
            merged.insert(key, value);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(10, 1)]
    #[case(10, 3)]
    #[case(10, 10)]
    #[case(3, 5)]
    #[case(0, 4)]
    fn test_partition_sizes_and_order(#[case] len: usize, #[case] parts: usize) {
        let items: Vec<usize> = (0..len).collect();
        let partitions = partition(items.clone(), parts);

        assert_eq!(partitions.len(), parts);

        let sizes: Vec<usize> = partitions.iter().map(Vec::len).collect();
        let max = sizes.iter().max().unwrap();
        let min = sizes.iter().min().unwrap();
        assert!(max - min <= 1);

        let concatenated: Vec<usize> = partitions.into_iter().flatten().collect();
        assert_eq!(concatenated, items);
    }

    #[test]
    fn test_partition_is_contiguous_not_round_robin() {
        let partitions = partition(vec![0, 1, 2, 3, 4], 2);
        assert_eq!(partitions, vec![vec![0, 1, 2], vec![3, 4]]);
    }

    #[test]
    #[should_panic(expected = "partition count must be positive")]
    fn test_partition_rejects_zero_parts() {
        partition(vec![1, 2, 3], 0);
    }

    #[test]
    fn test_merge_maps_unions_disjoint_parts() {
        let parts = vec![
            HashMap::from([("a", 1), ("b", 2)]),
            HashMap::from([("c", 3)]),
            HashMap::new(),
        ];

        let merged = merge_maps(parts);
        assert_eq!(merged, HashMap::from([("a", 1), ("b", 2), ("c", 3)]));
    }

    #[test]
    #[should_panic(expected = "partition violation")]
    fn test_merge_maps_panics_on_overlap() {
        merge_maps(vec![
            HashMap::from([("a", 1)]),
            HashMap::from([("a", 2)]),
        ]);
    }
}
