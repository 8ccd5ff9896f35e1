use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One group of records with its count and optional running sum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateBucket {
    pub key: String,
    pub count: usize,
    pub sum: Option<f64>,
}

impl AggregateBucket {
    pub fn average(&self) -> Option<f64> {
        match self.sum {
            Some(sum) if self.count > 0 => Some(sum / self.count as f64),
            _ => None,
        }
    }
}

/// Key extractor plus an optional value extractor
pub struct GroupSpec<'f, T> {
    key: Box<dyn Fn(&T) -> String + 'f>,
    value: Option<Box<dyn Fn(&T) -> f64 + 'f>>,
}

impl<'f, T> GroupSpec<'f, T> {
    pub fn by<K>(key: K) -> Self
    where
        K: Fn(&T) -> String + 'f,
    {
        Self {
            key: Box::new(key),
            value: None,
        }
    }

    pub fn summing<V>(mut self, value: V) -> Self
    where
        V: Fn(&T) -> f64 + 'f,
    {
        self.value = Some(Box::new(value));
        self
    }
}

/// Buckets in first-seen key order. Only keys that occur get a bucket.
pub fn group_by<'t, T: 't, I>(items: I, grouping: &GroupSpec<'_, T>) -> Vec<AggregateBucket>
where
    I: IntoIterator<Item = &'t T>,
{
    let mut buckets: Vec<AggregateBucket> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for item in items {
        let key = (grouping.key)(item);
        let pos = match index.get(&key) {
            Some(&pos) => pos,
            None => {
                index.insert(key.clone(), buckets.len());
                buckets.push(AggregateBucket {
                    key,
                    count: 0,
                    sum: grouping.value.as_ref().map(|_| 0.0),
                });
                buckets.len() - 1
            }
        };

        let bucket = &mut buckets[pos];
        bucket.count += 1;
        if let (Some(value), Some(sum)) = (&grouping.value, bucket.sum.as_mut()) {
            *sum += value(item);
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Rec {
        guru: &'static str,
        product: &'static str,
        arr: f64,
    }

    fn recs() -> Vec<Rec> {
        vec![
            Rec { guru: "Sam", product: "Fresh QMS", arr: 100.0 },
            Rec { guru: "Ana", product: "Migrated QMS", arr: 50.0 },
            Rec { guru: "Sam", product: "Fresh QMS", arr: 25.0 },
        ]
    }

    #[test]
    fn test_first_seen_order_and_sums() {
        let grouping = GroupSpec::by(|r: &Rec| r.guru.to_string()).summing(|r: &Rec| r.arr);
        let buckets = group_by(&recs(), &grouping);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].key, "Sam");
        assert_eq!(buckets[0].count, 2);
        assert_eq!(buckets[0].sum, Some(125.0));
        assert_eq!(buckets[0].average(), Some(62.5));
        assert_eq!(buckets[1].key, "Ana");
    }

    #[test]
    fn test_counts_add_up_without_sum() {
        let grouping = GroupSpec::by(|r: &Rec| format!("{}-{}", r.guru, r.product));
        let records = recs();
        let buckets = group_by(&records, &grouping);

        assert_eq!(buckets.iter().map(|b| b.count).sum::<usize>(), records.len());
        assert!(buckets.iter().all(|b| b.sum.is_none() && b.count > 0));
        assert_eq!(buckets[0].key, "Sam-Fresh QMS");
    }

    #[test]
    fn test_empty_input() {
        let grouping = GroupSpec::by(|r: &Rec| r.guru.to_string());
        let empty: Vec<Rec> = Vec::new();
        assert!(group_by(&empty, &grouping).is_empty());
    }
}
