use std::collections::HashMap;

///
/// Where a variant lies inside its flanking sequence, in ungapped
/// reference coordinates.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantInterval {
    pub start: u64,
    pub stop: u64,
    pub allele_len: u64,
}

///
/// Lookup table from variant identifier to its interval, loaded once per
/// run from the variant-interval table.
///
/// A variant identifier showing up in alignment input but missing from
/// this table is a fatal inconsistency; callers surface that as an error
/// rather than skipping, so `get` returns an `Option` and the decision
/// lives at the call site.
///
#[derive(Debug, Clone, Default)]
pub struct VariantIntervalMap {
    map: HashMap<String, VariantInterval>,
}

impl VariantIntervalMap {
    pub fn new() -> Self {
        VariantIntervalMap::default()
    }

    pub fn insert(&mut self, variant_id: String, interval: VariantInterval) {
        self.map.insert(variant_id, interval);
    }

    pub fn get(&self, variant_id: &str) -> Option<&VariantInterval> {
        self.map.get(variant_id)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn variant_ids(&self) -> impl Iterator<Item = &String> {
        self.map.keys()
    }
}

impl FromIterator<(String, VariantInterval)> for VariantIntervalMap {
    fn from_iter<T: IntoIterator<Item = (String, VariantInterval)>>(iter: T) -> Self {
        VariantIntervalMap {
            map: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_map_lookup() {
        let map: VariantIntervalMap = vec![(
            "rs42".to_string(),
            VariantInterval {
                start: 16,
                stop: 17,
                allele_len: 1,
            },
        )]
        .into_iter()
        .collect();

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("rs42").unwrap().start, 16);
        assert!(map.get("rs999").is_none());
    }
}
