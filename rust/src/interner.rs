//! Task identifier interning.
//!
//! Maps arbitrary hashable task identifiers to dense integer IDs so the
//! scheduling passes can work on plain vectors instead of hash maps.

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Interned task ID (u32 for compact storage and fast hashing).
pub type TaskIdInt = u32;

/// Interner mapping task identifiers to integers, in first-seen order.
#[derive(Debug, Clone)]
pub struct TaskIdInterner<T> {
    to_int: FxHashMap<T, TaskIdInt>,
    from_int: Vec<T>,
}

impl<T: Clone + Eq + Hash> TaskIdInterner<T> {
    /// Create a new interner with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            to_int: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            from_int: Vec::with_capacity(capacity),
        }
    }

    /// Intern an identifier, returning its integer ID.
    /// If already interned, returns the existing ID.
    pub fn intern(&mut self, task: &T) -> TaskIdInt {
        if let Some(&id) = self.to_int.get(task) {
            return id;
        }
        let id = self.from_int.len() as TaskIdInt;
        self.from_int.push(task.clone());
        self.to_int.insert(task.clone(), id);
        id
    }

    #[inline]
    pub fn get(&self, task: &T) -> Option<TaskIdInt> {
        self.to_int.get(task).copied()
    }

    #[inline]
    pub fn resolve(&self, id: TaskIdInt) -> Option<&T> {
        self.from_int.get(id as usize)
    }

    /// Identifiers in interning order (index `i` holds ID `i`).
    pub fn identifiers(&self) -> &[T] {
        &self.from_int
    }

    pub fn len(&self) -> usize {
        self.from_int.len()
    }

    pub fn is_empty(&self) -> bool {
        self.from_int.is_empty()
    }
}

impl<T: Clone + Eq + Hash> Default for TaskIdInterner<T> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
