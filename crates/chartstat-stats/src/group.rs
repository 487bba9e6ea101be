//! Grouped reductions over record slices.
//!
//! A [`Grouping`] partitions borrowed records by a key selector. Every record
//! lands in exactly one group, groups keep the records' input order, and the
//! map is ordered by key so results never depend on traversal order.
//!
//! # Examples
//!
//! ```
//! use chartstat_stats::group::{count_by, group_reduce, sum_by};
//!
//! let sales = [("north", 3.0), ("south", 1.0), ("north", 2.0)];
//!
//! let totals = sum_by(&sales, |s| s.0, |s| s.1);
//! assert_eq!(totals["north"], 5.0);
//!
//! let counts = count_by(&sales, |s| s.0);
//! assert_eq!(counts["south"], 1);
//!
//! let largest = group_reduce(&sales, |s| s.0, |g| g.iter().map(|s| s.1).fold(f64::MIN, f64::max));
//! assert_eq!(largest["north"], 3.0);
//! ```

use std::collections::BTreeMap;

/// Records partitioned by key.
pub type Grouping<'a, K, T> = BTreeMap<K, Vec<&'a T>>;

/// Partitions the records by `key`.
pub fn group_by<'a, T, K, F>(data: &'a [T], key: F) -> Grouping<'a, K, T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut groups: Grouping<'a, K, T> = BTreeMap::new();
    for record in data {
        groups.entry(key(record)).or_default().push(record);
    }
    groups
}

/// Partitions the records by `key` and reduces each partition.
///
/// The reducer only ever sees non-empty partitions. An empty dataset yields
/// an empty map.
pub fn group_reduce<T, K, R, F, G>(data: &[T], key: F, reducer: G) -> BTreeMap<K, R>
where
    K: Ord,
    F: Fn(&T) -> K,
    G: Fn(&[&T]) -> R,
{
    group_by(data, key)
        .into_iter()
        .map(|(k, group)| {
            let reduced = reducer(group.as_slice());
            (k, reduced)
        })
        .collect()
}

/// Sum of a numeric field per group.
pub fn sum_by<T, K, F, V>(data: &[T], key: F, value: V) -> BTreeMap<K, f64>
where
    K: Ord,
    F: Fn(&T) -> K,
    V: Fn(&T) -> f64,
{
    group_reduce(data, key, |group| group.iter().map(|r| value(*r)).sum())
}

/// Number of records per group.
pub fn count_by<T, K, F>(data: &[T], key: F) -> BTreeMap<K, usize>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    group_reduce(data, key, |group| group.len())
}

/// The entry with the greatest value.
///
/// On ties the entry visited last wins. NaN values never win against a
/// number.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use chartstat_stats::group::max_entry;
///
/// let totals = BTreeMap::from([("a", 2.0), ("b", 7.5), ("c", 7.5)]);
/// assert_eq!(max_entry(&totals), Some((&"c", 7.5)));
/// ```
pub fn max_entry<K>(map: &BTreeMap<K, f64>) -> Option<(&K, f64)> {
    map.iter().fold(None, |best, (k, &v)| match best {
        Some((_, best_value)) if best_value > v || v.is_nan() => best,
        _ => Some((k, v)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row {
        year: i32,
        rain: f64,
    }

    fn rows() -> Vec<Row> {
        [(2008, 1.0), (2009, 0.5), (2008, 2.5), (2010, 0.0), (2009, 4.0)]
            .into_iter()
            .map(|(year, rain)| Row { year, rain })
            .collect()
    }

    #[test]
    fn test_empty_dataset() {
        let data: Vec<Row> = vec![];
        assert!(group_by(&data, |r| r.year).is_empty());
        assert!(sum_by(&data, |r| r.year, |r| r.rain).is_empty());
    }

    #[test]
    fn test_groups_keep_input_order() {
        let data = rows();
        let groups = group_by(&data, |r| r.year);
        let rains = groups[&2009].iter().map(|r| r.rain).collect::<Vec<_>>();
        assert_eq!(rains, vec![0.5, 4.0]);
    }

    #[test]
    fn test_sum_and_count() {
        let data = rows();
        let sums = sum_by(&data, |r| r.year, |r| r.rain);
        assert_eq!(sums, BTreeMap::from([(2008, 3.5), (2009, 4.5), (2010, 0.0)]));
        let counts = count_by(&data, |r| r.year);
        assert_eq!(counts, BTreeMap::from([(2008, 2), (2009, 2), (2010, 1)]));
    }

    #[test]
    fn test_max_entry() {
        let data = rows();
        let sums = sum_by(&data, |r| r.year, |r| r.rain);
        assert_eq!(max_entry(&sums), Some((&2009, 4.5)));
        assert_eq!(max_entry(&BTreeMap::<i32, f64>::new()), None);
    }

    #[test]
    fn test_max_entry_skips_nan() {
        let totals = BTreeMap::from([(1, 3.0), (2, f64::NAN)]);
        assert_eq!(max_entry(&totals), Some((&1, 3.0)));
    }
}
