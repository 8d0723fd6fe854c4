use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "std")]
use std::collections::{HashMap, HashSet};

/// An item with a stable identity.
///
/// The identity is used to look the item up in the caller's expansion state, so it must be unique
/// within one item sequence. Uniqueness is not checked.
pub trait HasId {
    type Id;

    fn id(&self) -> &Self::Id;
}

/// An item that carries a list of tasks.
///
/// Only the task count and the task descriptions feed the height estimate.
pub trait HasTasks {
    fn task_count(&self) -> usize;

    fn task_descriptions(&self) -> impl Iterator<Item = &str> + '_;
}

impl<T: HasId + ?Sized> HasId for &T {
    type Id = T::Id;

    fn id(&self) -> &Self::Id {
        (**self).id()
    }
}

impl<T: HasTasks + ?Sized> HasTasks for &T {
    fn task_count(&self) -> usize {
        (**self).task_count()
    }

    fn task_descriptions(&self) -> impl Iterator<Item = &str> + '_ {
        (**self).task_descriptions()
    }
}

/// A bare list of task descriptions is enough to size a card.
impl HasTasks for [String] {
    fn task_count(&self) -> usize {
        self.len()
    }

    fn task_descriptions(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(String::as_str)
    }
}

impl HasTasks for Vec<String> {
    fn task_count(&self) -> usize {
        self.len()
    }

    fn task_descriptions(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(String::as_str)
    }
}

/// Read-only view of the caller's per-item expanded/collapsed state.
///
/// Ids that are absent are collapsed.
pub trait ExpansionState<K: ?Sized> {
    fn is_expanded(&self, key: &K) -> bool;
}

impl<K: ?Sized, S: ExpansionState<K> + ?Sized> ExpansionState<K> for &S {
    fn is_expanded(&self, key: &K) -> bool {
        (**self).is_expanded(key)
    }
}

impl<K: Ord> ExpansionState<K> for BTreeMap<K, bool> {
    fn is_expanded(&self, key: &K) -> bool {
        self.get(key).copied().unwrap_or(false)
    }
}

impl<K: Ord> ExpansionState<K> for BTreeSet<K> {
    fn is_expanded(&self, key: &K) -> bool {
        self.contains(key)
    }
}

#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq, S: core::hash::BuildHasher> ExpansionState<K> for HashMap<K, bool, S> {
    fn is_expanded(&self, key: &K) -> bool {
        self.get(key).copied().unwrap_or(false)
    }
}

#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq, S: core::hash::BuildHasher> ExpansionState<K> for HashSet<K, S> {
    fn is_expanded(&self, key: &K) -> bool {
        self.contains(key)
    }
}

/// Every item collapsed. Useful for fixed-height grids.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AllCollapsed;

impl<K: ?Sized> ExpansionState<K> for AllCollapsed {
    fn is_expanded(&self, _key: &K) -> bool {
        false
    }
}

/// Every item expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AllExpanded;

impl<K: ?Sized> ExpansionState<K> for AllExpanded {
    fn is_expanded(&self, _key: &K) -> bool {
        true
    }
}
