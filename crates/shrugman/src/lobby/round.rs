//! A round: the category being played and its engine.

use derive_getters::Getters;
use rand::Rng;
use strictly_shrugman::GuessEngine;
use tracing::{info, instrument};

use crate::{Catalog, CatalogError};

/// One play-through from title selection to win or loss.
#[derive(Debug, Clone, Getters)]
pub struct Round {
    /// Name of the category the title came from.
    category: String,
    /// Engine holding the round state.
    engine: GuessEngine,
}

impl Round {
    /// Wraps an engine created elsewhere.
    pub fn new(category: impl Into<String>, engine: GuessEngine) -> Self {
        Self {
            category: category.into(),
            engine,
        }
    }

    /// Draws a random title from the category at `index` and starts a round.
    #[instrument(skip(catalog, rng))]
    pub fn start<R: Rng + ?Sized>(
        catalog: &Catalog,
        index: usize,
        rng: &mut R,
    ) -> Result<Self, CatalogError> {
        let category = catalog
            .get(index)
            .ok_or_else(|| CatalogError::new(format!("No category at index {}", index)))?;
        let title = category.choose_title(rng)?;
        let engine = GuessEngine::new(title)
            .map_err(|e| CatalogError::new(format!("Unplayable title: {}", e)))?;

        info!(category = %category.name(), letters = engine.secret().letter_count(), "Round started");
        Ok(Self::new(category.name().clone(), engine))
    }

    /// Mutable access for submitting guesses.
    pub fn engine_mut(&mut self) -> &mut GuessEngine {
        &mut self.engine
    }
}
