use std::collections::HashMap;
use std::hash::Hash;
use std::fmt::{Debug, Display};
use thiserror::Error;

// =============================================================================
// 1. THE ABSTRACTION (Trait with Hooks and Patches)
// =============================================================================

/// Trait that any domain entity must implement to be managed by ResourceStore
pub trait Entity: Clone + Debug {
    type Id: Eq + Hash + Ord + Clone + Display + Debug;
    type Patch: Debug;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    // --- Lifecycle Hooks ---

    fn on_insert(&self) -> Result<(), String> { Ok(()) }
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), String>;
}

// =============================================================================
// 2. THE GENERIC OUTCOMES
// =============================================================================

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Item rejected: {0}")]
    Rejected(String),
}

/// What happened to the previous entry when an item was inserted.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertOutcome<T> {
    Inserted,
    Replaced(T),
}

/// Snapshot of the store contents, with an explicit empty case.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing<T> {
    Empty,
    Items(Vec<T>),
}

impl<T> Listing<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::Empty)
    }

    pub fn items(&self) -> &[T] {
        match self {
            Listing::Empty => &[],
            Listing::Items(items) => items,
        }
    }
}

// =============================================================================
// 3. THE GENERIC STORE
// =============================================================================

#[derive(Debug, Clone)]
pub struct ResourceStore<T: Entity> {
    items: HashMap<T::Id, T>,
}

impl<T: Entity> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> ResourceStore<T> {
    pub fn new() -> Self {
        Self { items: HashMap::new() }
    }

    /// Inserts under the entity's own ID. An existing entry with the same ID
    /// is replaced and handed back.
    pub fn insert(&mut self, item: T) -> Result<InsertOutcome<T>, StoreError> {
        item.on_insert().map_err(StoreError::Rejected)?;
        match self.items.insert(item.id().clone(), item) {
            Some(previous) => Ok(InsertOutcome::Replaced(previous)),
            None => Ok(InsertOutcome::Inserted),
        }
    }

    #[allow(dead_code)]
    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.get(id)
    }

    /// Applies the patch in place. A rejected patch leaves the entry untouched.
    pub fn update(&mut self, id: &T::Id, patch: T::Patch) -> Result<&T, StoreError> {
        let item = self.items.get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let mut patched = item.clone();
        patched.on_update(patch).map_err(StoreError::Rejected)?;
        *item = patched;
        Ok(item)
    }

    pub fn delete(&mut self, id: &T::Id) -> Result<T, StoreError> {
        self.items.remove(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// All entries ordered by ID.
    pub fn list(&self) -> Listing<T> {
        if self.items.is_empty() {
            return Listing::Empty;
        }
        let mut items: Vec<T> = self.items.values().cloned().collect();
        items.sort_by(|a, b| a.id().cmp(b.id()));
        Listing::Items(items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// 4. EXAMPLE USAGE (Test)
// =============================================================================
