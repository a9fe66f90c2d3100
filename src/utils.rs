use fnv::FnvHasher;
use std::{
    collections::HashSet,
    hash::{BuildHasherDefault, Hash}
};

pub type FnvHashSet<T> = HashSet<T, BuildHasherDefault<FnvHasher>>;

/// A hash set with the given capacity, hashed with fnv. Visited-set keys are
/// tiny coordinate pairs, where fnv beats the default hasher comfortably; it
/// trades away the default's resistance to key collision attacks, which no
/// maze grid cares about.
pub fn fnv_hashset<T: Hash + Eq>(capacity: usize) -> FnvHashSet<T> {
    let fnv = BuildHasherDefault::<FnvHasher>::default();
    HashSet::<T, _>::with_capacity_and_hasher(capacity, fnv)
}
