//! Title catalog: categories of titles a round can be played with.
//!
//! The catalog is immutable once built. It is validated at construction so
//! every title it hands out is accepted by [`GuessEngine::new`].

use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use strictly_shrugman::GuessEngine;
use tracing::{debug, info, instrument};

const MOVIES: &[&str] = &[
    "The Matrix",
    "Titanic",
    "Pulp Fiction",
    "The Godfather",
    "The Shawshank Redemption",
    "Fight Club",
    "The Dark Knight",
    "Forrest Gump",
    "Inception",
    "Casablanca",
    "Jurassic Park",
    "Gladiator",
    "The Prestige",
    "The Lion King",
    "Avatar",
    "The Silence of the Lambs",
    "Braveheart",
    "Back to the Future",
];

const BOOKS: &[&str] = &[
    "To Kill a Mockingbird",
    "The Great Gatsby",
    "Pride and Prejudice",
    "The Catcher in the Rye",
    "The Lord of the Rings",
    "The Hobbit",
    "The Chronicles of Narnia",
    "The Book Thief",
    "Brave New World",
    "Moby Dick",
    "The Road",
    "The Shining",
    "Little Women",
    "The Alchemist",
    "Gone with the Wind",
];

const FICTIONAL_CHARACTERS: &[&str] = &[
    "Harry Potter",
    "Sherlock Holmes",
    "Darth Vader",
    "Hannibal Lecter",
    "Frodo Baggins",
    "James Bond",
    "Spider Man",
    "Walter White",
    "Indiana Jones",
    "Batman",
    "Rick Grimes",
    "Superman",
    "Hermione Granger",
];

const TV_SHOWS: &[&str] = &[
    "Breaking Bad",
    "Game of Thrones",
    "Stranger Things",
    "Friends",
    "The Office",
    "The Crown",
    "Sherlock",
    "The Simpsons",
    "Black Mirror",
    "The Walking Dead",
    "Narcos",
    "House of Cards",
    "Mad Men",
    "Lost",
    "Better Call Saul",
];

const SONGS: &[&str] = &[
    "Bohemian Rhapsody",
    "Imagine",
    "Hotel California",
    "Sweet Child Of Mine",
    "Billie Jean",
    "Stairway to Heaven",
    "Hey Jude",
    "Like a Rolling Stone",
    "Let It Be",
    "I Will Always Love You",
    "Born to Run",
    "Superstition",
    "Piano Man",
    "I Want to Hold Your Hand",
    "Every Breath You Take",
    "Somebody to Love",
];

const BUILTIN: &[(&str, &[&str])] = &[
    ("Movies", MOVIES),
    ("Books", BOOKS),
    ("Fictional Characters", FICTIONAL_CHARACTERS),
    ("TV Shows", TV_SHOWS),
    ("Songs", SONGS),
];

/// A named list of titles.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Category {
    /// Display name, e.g. "TV Shows".
    name: String,
    /// Titles a round in this category can use.
    titles: Vec<String>,
}

impl Category {
    /// Creates a category. Validation happens in [`Catalog::new`].
    pub fn new(name: impl Into<String>, titles: Vec<String>) -> Self {
        Self {
            name: name.into(),
            titles,
        }
    }

    /// Picks a title uniformly at random.
    #[instrument(skip(self, rng), fields(category = %self.name))]
    pub fn choose_title<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&str, CatalogError> {
        let title = self
            .titles
            .choose(rng)
            .ok_or_else(|| CatalogError::new(format!("Category '{}' has no titles", self.name)))?;
        debug!(title = %title, "Title chosen");
        Ok(title.as_str())
    }
}

/// Serialized catalog layout:
///
/// ```toml
/// [[categories]]
/// name = "Movies"
/// titles = ["The Matrix", "Titanic"]
/// ```
#[derive(Debug, Deserialize)]
struct CatalogFile {
    categories: Vec<Category>,
}

/// Validated, immutable set of categories.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Validates and builds a catalog.
    ///
    /// # Errors
    ///
    /// Fails if there are no categories, a category name is blank or
    /// repeated (case-insensitively), a category has no titles, or a title
    /// could not start a round.
    #[instrument(skip(categories), fields(count = categories.len()))]
    pub fn new(categories: Vec<Category>) -> Result<Self, CatalogError> {
        if categories.is_empty() {
            return Err(CatalogError::new("Catalog has no categories".to_string()));
        }

        let mut names = HashSet::new();
        for category in &categories {
            let name = category.name.trim();
            if name.is_empty() {
                return Err(CatalogError::new("Category name is empty".to_string()));
            }
            if !names.insert(name.to_lowercase()) {
                return Err(CatalogError::new(format!("Duplicate category '{}'", name)));
            }
            if category.titles.is_empty() {
                return Err(CatalogError::new(format!("Category '{}' has no titles", name)));
            }
            for title in &category.titles {
                GuessEngine::new(title).map_err(|e| {
                    CatalogError::new(format!("Category '{}': {}", name, e))
                })?;
            }
        }

        Ok(Self { categories })
    }

    /// The five categories the game ships with.
    #[instrument]
    pub fn builtin() -> Self {
        let categories = BUILTIN
            .iter()
            .map(|(name, titles)| {
                Category::new(*name, titles.iter().map(|t| t.to_string()).collect())
            })
            .collect();
        Self { categories }
    }

    /// Parses a catalog from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)
            .map_err(|e| CatalogError::new(format!("Failed to parse catalog: {}", e)))?;
        Self::new(file.categories)
    }

    /// Loads a catalog from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        debug!("Loading catalog from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| CatalogError::new(format!("Failed to read catalog file: {}", e)))?;
        let catalog = Self::from_toml_str(&content)?;
        info!(categories = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Loads the file if a path is given, otherwise returns the built-in catalog.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Finds a category by name, ignoring case and surrounding whitespace.
    #[instrument(skip(self))]
    pub fn find(&self, name: &str) -> Option<usize> {
        let wanted = name.trim().to_lowercase();
        self.categories
            .iter()
            .position(|c| c.name.trim().to_lowercase() == wanted)
    }

    /// Returns the category at `index`.
    pub fn get(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    /// Category names in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Always false for a validated catalog.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Catalog error.
#[derive(Debug, Clone, Display, Error)]
#[display("Catalog error: {} at {}:{}", message, file, line)]
pub struct CatalogError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl CatalogError {
    /// Creates a new catalog error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
