//! In-memory recipe store.
//!
//! One `RwLock` guards the ordered collection together with the set of every
//! identifier the store has issued. Reads clone a snapshot under the read
//! lock; mutations take the write lock, so concurrent writers serialise and
//! the last one to acquire the lock wins.

use std::collections::HashSet;
use std::fmt;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{RecipeRepository, RecipeRepositoryError};
use crate::domain::{Recipe, RecipeDraft, RecipeId};

type IdSource = Box<dyn FnMut() -> RecipeId + Send + Sync>;

struct RecipeTable {
    recipes: Vec<Recipe>,
    issued: HashSet<RecipeId>,
    next_id: IdSource,
}

impl RecipeTable {
    fn issue_id(&mut self) -> RecipeId {
        loop {
            let candidate = (self.next_id)();
            if self.issued.insert(candidate) {
                return candidate;
            }
        }
    }

    fn position(&self, id: &RecipeId) -> Option<usize> {
        self.recipes.iter().position(|recipe| recipe.id() == *id)
    }
}

fn poisoned<T>(_: PoisonError<T>) -> RecipeRepositoryError {
    RecipeRepositoryError::unavailable("recipe store lock poisoned")
}

/// Recipe repository holding records in process memory.
///
/// Identifiers are random UUID v4 values checked against every identifier the
/// instance has issued, so an id is never handed out twice even after the
/// record it named has been deleted.
///
/// # Examples
/// ```
/// use recipe_backend::domain::RecipeDraft;
/// use recipe_backend::outbound::memory::InMemoryRecipeRepository;
///
/// let store = InMemoryRecipeRepository::seeded([
///     RecipeDraft::new("boiled white rice", false),
///     RecipeDraft::new("milkshake", false),
/// ]);
/// assert_eq!(store.len(), Ok(2));
/// ```
pub struct InMemoryRecipeRepository {
    table: RwLock<RecipeTable>,
}

impl InMemoryRecipeRepository {
    /// Create an empty store issuing random identifiers.
    #[must_use]
    pub fn new() -> Self {
        Self::with_id_source(RecipeId::random)
    }

    /// Create an empty store drawing candidate identifiers from `next_id`.
    ///
    /// Candidates that were already issued are skipped, so the source only
    /// has to produce an unseen value eventually.
    #[must_use]
    pub fn with_id_source<F>(next_id: F) -> Self
    where
        F: FnMut() -> RecipeId + Send + Sync + 'static,
    {
        Self {
            table: RwLock::new(RecipeTable {
                recipes: Vec::new(),
                issued: HashSet::new(),
                next_id: Box::new(next_id),
            }),
        }
    }

    /// Create a store pre-populated with `drafts` in order.
    #[must_use]
    pub fn seeded<I>(drafts: I) -> Self
    where
        I: IntoIterator<Item = RecipeDraft>,
    {
        let store = Self::new();
        if let Ok(mut table) = store.table.write() {
            for draft in drafts {
                let id = table.issue_id();
                table.recipes.push(Recipe::new(id, draft));
            }
        }
        store
    }

    /// Number of stored recipes.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeRepositoryError::Unavailable`] if the lock is poisoned.
    pub fn len(&self) -> Result<usize, RecipeRepositoryError> {
        self.table
            .read()
            .map(|table| table.recipes.len())
            .map_err(poisoned)
    }

    /// Whether the store holds no recipes.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeRepositoryError::Unavailable`] if the lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, RecipeRepositoryError> {
        self.len().map(|len| len == 0)
    }
}

impl Default for InMemoryRecipeRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InMemoryRecipeRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryRecipeRepository")
            .field("len", &self.len().ok())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRecipeRepository {
    async fn list(&self) -> Result<Vec<Recipe>, RecipeRepositoryError> {
        let table = self.table.read().map_err(poisoned)?;
        Ok(table.recipes.clone())
    }

    async fn insert(&self, draft: RecipeDraft) -> Result<Recipe, RecipeRepositoryError> {
        let mut table = self.table.write().map_err(poisoned)?;
        let recipe = Recipe::new(table.issue_id(), draft);
        table.recipes.push(recipe.clone());
        Ok(recipe)
    }

    async fn update(
        &self,
        id: &RecipeId,
        draft: RecipeDraft,
    ) -> Result<Option<Recipe>, RecipeRepositoryError> {
        let mut table = self.table.write().map_err(poisoned)?;
        let Some(recipe) = table.recipes.iter_mut().find(|recipe| recipe.id() == *id) else {
            return Ok(None);
        };
        recipe.apply(draft);
        Ok(Some(recipe.clone()))
    }

    async fn remove(&self, id: &RecipeId) -> Result<Option<Recipe>, RecipeRepositoryError> {
        let mut table = self.table.write().map_err(poisoned)?;
        Ok(table
            .position(id)
            .map(|index| table.recipes.remove(index)))
    }
}
