#[cfg(not(feature = "std"))]
use alloc::collections::{BTreeMap, BTreeSet};
#[cfg(feature = "std")]
use std::collections::{HashMap, HashSet};

/// The default expansion map for the enabled feature set.
///
/// `HashMap` with `std`, `BTreeMap` otherwise. Any [`crate::ExpansionState`] works as input; this
/// alias exists so adapters can own one without caring about the feature matrix.
#[cfg(feature = "std")]
pub type ExpansionMap<K> = HashMap<K, bool>;
#[cfg(not(feature = "std"))]
pub type ExpansionMap<K> = BTreeMap<K, bool>;

/// Set form of [`ExpansionMap`]: presence means expanded.
#[cfg(feature = "std")]
pub type ExpandedSet<K> = HashSet<K>;
#[cfg(not(feature = "std"))]
pub type ExpandedSet<K> = BTreeSet<K>;

/// Bounds an item identifier must satisfy to key an [`ExpansionMap`].
#[cfg(feature = "std")]
pub trait ExpansionKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq> ExpansionKey for K {}

#[cfg(not(feature = "std"))]
pub trait ExpansionKey: Ord {}
#[cfg(not(feature = "std"))]
impl<K: Ord> ExpansionKey for K {}
