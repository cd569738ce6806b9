//! Grouped counts and statistics.
//!
//! The aggregator is generic: it groups any items (rows, exploded tokens)
//! by a caller-supplied key and knows nothing about dashboard tabs or units.
//! Durations in minutes and in seasons must be separated by the caller
//! before calling [`stat_by`].

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

pub use catalog_loader::UNKNOWN_LABEL;

/// An aggregation group: a concrete key, or the explicit bucket for items
/// whose key is missing.
///
/// `Unknown` orders after every key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Bucket<K> {
    Key(K),
    Unknown,
}

impl<K> Bucket<K> {
    pub fn key(&self) -> Option<&K> {
        match self {
            Bucket::Key(k) => Some(k),
            Bucket::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Bucket::Unknown)
    }
}

impl<K: fmt::Display> fmt::Display for Bucket<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bucket::Key(k) => k.fmt(f),
            Bucket::Unknown => f.write_str(UNKNOWN_LABEL),
        }
    }
}

/// What to do with items whose key function returns `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingKeys {
    /// Count them under [`Bucket::Unknown`]
    #[default]
    Bucket,
    /// Leave them out of the result
    Exclude,
}

/// Reduction applied by [`stat_by`] to each group's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reducer {
    Mean,
    Median,
    Sum,
    Min,
    Max,
}

/// Reduce a slice of values. Returns `None` for an empty slice.
pub fn reduce(values: &[f64], reducer: Reducer) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let result: f64 = match reducer {
        Reducer::Sum => values.iter().sum(),
        Reducer::Mean => values.iter().sum::<f64>() / values.len() as f64,
        Reducer::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
        Reducer::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        Reducer::Median => {
            let mut sorted = values.to_vec();
            sorted.sort_by(f64::total_cmp);
            let mid = sorted.len() / 2;
            if sorted.len() % 2 == 0 {
                (sorted[mid - 1] + sorted[mid]) / 2.0
            } else {
                sorted[mid]
            }
        }
    };
    Some(result)
}

/// Mapping from bucket to a count or statistic.
///
/// Never mutated after it is built; consumers sort for display.
#[derive(Debug, Clone)]
pub struct AggregationResult<K, V> {
    groups: HashMap<Bucket<K>, V>,
}

impl<K: Eq + Hash, V> AggregationResult<K, V> {
    pub fn get(&self, key: impl Into<K>) -> Option<&V> {
        self.groups.get(&Bucket::Key(key.into()))
    }

    pub fn get_unknown(&self) -> Option<&V> {
        self.groups.get(&Bucket::Unknown)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Bucket<K>, &V)> {
        self.groups.iter()
    }

    /// Buckets ascending by key, `Unknown` last
    pub fn sorted_by_key(&self) -> Vec<(Bucket<K>, V)>
    where
        K: Ord + Clone,
        V: Clone,
    {
        let mut entries: Vec<(Bucket<K>, V)> = self
            .groups
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// Buckets descending by value; ties ascending by key, `Unknown` last.
    pub fn sorted_desc(&self) -> Vec<(Bucket<K>, V)>
    where
        K: Ord + Clone,
        V: PartialOrd + Clone,
    {
        let mut entries: Vec<(Bucket<K>, V)> = self
            .groups
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        entries.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        entries
    }

    /// The first `n` entries of [`sorted_desc`](Self::sorted_desc)
    pub fn top_n(&self, n: usize) -> Vec<(Bucket<K>, V)>
    where
        K: Ord + Clone,
        V: PartialOrd + Clone,
    {
        let mut entries = self.sorted_desc();
        entries.truncate(n);
        entries
    }
}

impl<K: Eq + Hash> AggregationResult<K, usize> {
    /// Sum of all counts, including the `Unknown` bucket
    pub fn total(&self) -> usize {
        self.groups.values().sum()
    }
}

impl<K, V> Default for AggregationResult<K, V> {
    fn default() -> Self {
        Self {
            groups: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, V> FromIterator<(Bucket<K>, V)> for AggregationResult<K, V> {
    fn from_iter<T: IntoIterator<Item = (Bucket<K>, V)>>(iter: T) -> Self {
        Self {
            groups: iter.into_iter().collect(),
        }
    }
}

fn bucket_for<K>(key: Option<K>, missing: MissingKeys) -> Option<Bucket<K>> {
    match (key, missing) {
        (Some(k), _) => Some(Bucket::Key(k)),
        (None, MissingKeys::Bucket) => Some(Bucket::Unknown),
        (None, MissingKeys::Exclude) => None,
    }
}

/// Count items per key.
///
/// Every item lands in exactly one bucket (or none, for excluded missing
/// keys). Items sharing a key always share a bucket.
pub fn count_by<T, K, I, F>(items: I, key_fn: F, missing: MissingKeys) -> AggregationResult<K, usize>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash,
    F: Fn(&T) -> Option<K>,
{
    let mut groups: HashMap<Bucket<K>, usize> = HashMap::new();
    for item in items {
        if let Some(bucket) = bucket_for(key_fn(&item), missing) {
            *groups.entry(bucket).or_insert(0) += 1;
        }
    }
    AggregationResult { groups }
}

/// Count distinct ids per key.
///
/// Used with exploded tokens so a title is counted once per key even when
/// the same token appears twice in one of its cells.
pub fn count_distinct_by<T, K, D, I, F, G>(
    items: I,
    key_fn: F,
    id_fn: G,
    missing: MissingKeys,
) -> AggregationResult<K, usize>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash,
    D: Eq + Hash,
    F: Fn(&T) -> Option<K>,
    G: Fn(&T) -> D,
{
    let mut seen: HashMap<Bucket<K>, HashSet<D>> = HashMap::new();
    for item in items {
        if let Some(bucket) = bucket_for(key_fn(&item), missing) {
            seen.entry(bucket).or_default().insert(id_fn(&item));
        }
    }
    seen.into_iter().map(|(k, ids)| (k, ids.len())).collect()
}

/// Reduce a numeric value per key.
///
/// Items whose `value_fn` returns `None` add nothing; a bucket that ends up
/// with no values is left out of the result.
pub fn stat_by<T, K, I, F, G>(
    items: I,
    key_fn: F,
    value_fn: G,
    reducer: Reducer,
    missing: MissingKeys,
) -> AggregationResult<K, f64>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash,
    F: Fn(&T) -> Option<K>,
    G: Fn(&T) -> Option<f64>,
{
    let mut values: HashMap<Bucket<K>, Vec<f64>> = HashMap::new();
    for item in items {
        let Some(value) = value_fn(&item) else {
            continue;
        };
        if let Some(bucket) = bucket_for(key_fn(&item), missing) {
            values.entry(bucket).or_default().push(value);
        }
    }
    values
        .into_iter()
        .filter_map(|(k, vs)| reduce(&vs, reducer).map(|v| (k, v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_loader::{CatalogRow, ContentType, Duration};

    fn create_test_rows() -> Vec<CatalogRow> {
        let mut rows = Vec::new();
        for (id, content_type, rating, minutes) in [
            ("s1", ContentType::Movie, Some("PG"), 90),
            ("s2", ContentType::Movie, Some("R"), 120),
            ("s3", ContentType::TvShow, Some("PG"), 2),
            ("s4", ContentType::Movie, None, 100),
        ] {
            let mut row = CatalogRow::new(id, id, content_type);
            row.rating = rating.map(str::to_string);
            row.duration = Some(match content_type {
                ContentType::Movie => Duration::Minutes(minutes),
                ContentType::TvShow => Duration::Seasons(minutes),
            });
            rows.push(row);
        }
        rows
    }

    #[test]
    fn test_count_by_partitions_rows() {
        let rows = create_test_rows();
        let by_type = count_by(
            &rows,
            |r| Some(r.content_type.label().to_string()),
            MissingKeys::Bucket,
        );

        assert_eq!(by_type.get("Movie"), Some(&3));
        assert_eq!(by_type.get("TV Show"), Some(&1));
        assert_eq!(by_type.total(), rows.len());
    }

    #[test]
    fn test_missing_keys_bucketed_or_excluded() {
        let rows = create_test_rows();

        let bucketed = count_by(&rows, |r| r.rating.clone(), MissingKeys::Bucket);
        assert_eq!(bucketed.get_unknown(), Some(&1));
        assert_eq!(bucketed.total(), 4);

        let excluded = count_by(&rows, |r| r.rating.clone(), MissingKeys::Exclude);
        assert_eq!(excluded.get_unknown(), None);
        assert_eq!(excluded.total(), 3);
    }

    #[test]
    fn test_stat_by_mean_over_movies_only() {
        let rows = create_test_rows();
        let movies = rows.iter().filter(|r| r.is_movie());

        let mean = stat_by(
            movies,
            |r| Some(r.content_type),
            |r| r.duration_minutes().map(f64::from),
            Reducer::Mean,
            MissingKeys::Bucket,
        );

        assert_eq!(mean.len(), 1);
        assert_eq!(mean.get(ContentType::Movie), Some(&(310.0 / 3.0)));
    }

    #[test]
    fn test_stat_by_skips_missing_values() {
        let rows = create_test_rows();
        // TV shows have no minutes, so their bucket disappears
        let sums = stat_by(
            &rows,
            |r| Some(r.content_type),
            |r| r.duration_minutes().map(f64::from),
            Reducer::Sum,
            MissingKeys::Bucket,
        );

        assert_eq!(sums.get(ContentType::Movie), Some(&310.0));
        assert_eq!(sums.get(ContentType::TvShow), None);
    }

    #[test]
    fn test_reducers() {
        let values = [4.0, 1.0, 3.0, 2.0];
        assert_eq!(reduce(&values, Reducer::Sum), Some(10.0));
        assert_eq!(reduce(&values, Reducer::Mean), Some(2.5));
        assert_eq!(reduce(&values, Reducer::Median), Some(2.5));
        assert_eq!(reduce(&values[..3], Reducer::Median), Some(3.0));
        assert_eq!(reduce(&values, Reducer::Min), Some(1.0));
        assert_eq!(reduce(&values, Reducer::Max), Some(4.0));
        assert_eq!(reduce(&[], Reducer::Mean), None);
    }

    #[test]
    fn test_sorted_desc_breaks_ties_by_key() {
        let words = ["b", "a", "c", "a", "b", "d"];
        let counts = count_by(words, |w| Some(w.to_string()), MissingKeys::Bucket);

        let sorted: Vec<(String, usize)> = counts
            .sorted_desc()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        assert_eq!(
            sorted,
            vec![
                ("a".to_string(), 2),
                ("b".to_string(), 2),
                ("c".to_string(), 1),
                ("d".to_string(), 1),
            ]
        );
        assert_eq!(counts.top_n(1).len(), 1);
    }

    #[test]
    fn test_unknown_sorts_after_keys() {
        let items = [Some(1990), None, Some(1980)];
        let counts = count_by(items, |y| *y, MissingKeys::Bucket);

        let keys: Vec<Bucket<i32>> = counts.sorted_by_key().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![Bucket::Key(1980), Bucket::Key(1990), Bucket::Unknown]);
        assert_eq!(Bucket::<i32>::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn test_count_distinct_by() {
        let pairs = [("United States", "s1"), ("United States", "s1"), ("United States", "s2"), ("India", "s2")];
        let counts = count_distinct_by(
            pairs,
            |(country, _)| Some(country.to_string()),
            |(_, id)| *id,
            MissingKeys::Bucket,
        );

        assert_eq!(counts.get("United States"), Some(&2));
        assert_eq!(counts.get("India"), Some(&1));
    }
}
