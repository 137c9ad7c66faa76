//! FILENAME: core/window-engine/src/group_index.rs
//! Group Index - Buckets the flat record list by group key.
//!
//! Groups are kept in a `Vec` in first-seen order and members keep the
//! original record order, so enumeration never depends on how a hash map
//! happens to iterate. The hash map is only a key -> position lookup.

use dataset::{GroupField, GroupKey, Record, RecordIndex};
use rustc_hash::FxHashMap;

/// One group: its key and the positions of its member records.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub key: GroupKey,
    pub members: Vec<RecordIndex>,
}

impl Group {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Mapping from group key to its member records, built once per load.
#[derive(Debug, Clone)]
pub struct GroupIndex {
    field: GroupField,
    records: Vec<Record>,
    groups: Vec<Group>,
    lookup: FxHashMap<GroupKey, usize>,
}

impl GroupIndex {
    /// Groups records by region.
    pub fn build(records: Vec<Record>) -> Self {
        Self::build_by(records, GroupField::Region)
    }

    /// Groups records by the given field. O(n) in the number of records.
    pub fn build_by(records: Vec<Record>, field: GroupField) -> Self {
        let mut groups: Vec<Group> = Vec::new();
        let mut lookup: FxHashMap<GroupKey, usize> = FxHashMap::default();

        for (index, record) in records.iter().enumerate() {
            let key = record.group_key(field);
            match lookup.get(key) {
                Some(&pos) => groups[pos].members.push(index),
                None => {
                    lookup.insert(key.to_string(), groups.len());
                    groups.push(Group {
                        key: key.to_string(),
                        members: vec![index],
                    });
                }
            }
        }

        GroupIndex {
            field,
            records,
            groups,
            lookup,
        }
    }

    pub fn field(&self) -> GroupField {
        self.field
    }

    /// Groups in first-seen order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group(&self, key: &str) -> Option<&Group> {
        self.lookup.get(key).map(|&pos| &self.groups[pos])
    }

    /// Member record positions for a key, in original order.
    pub fn members(&self, key: &str) -> Option<&[RecordIndex]> {
        self.group(key).map(|g| g.members.as_slice())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lookup.contains_key(key)
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn record(&self, index: RecordIndex) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
