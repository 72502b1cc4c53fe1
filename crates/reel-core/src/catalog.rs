use thiserror::Error;

use crate::MovieRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
/// Every catalog failure is a client-input problem; the wire message for
/// each variant is its `Display` rendering.
pub enum CatalogError {
    #[error("Genre query parameter is required")]
    MissingGenreParameter,
    #[error("Missing required movie fields")]
    MissingFields,
    #[error("Year must be a number")]
    YearNotANumber,
    #[error("Movie not found")]
    NotFound,
}

/// The ordered in-memory movie collection.
///
/// A record's id is its current zero-based position, so deleting index `k`
/// shifts every later record's effective id down by one. Callers must
/// tolerate that shift; it is part of the contract, not a bug.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: Vec<MovieRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The five records present at startup before any client mutation.
    pub fn with_seed_data() -> Self {
        let seed = [
            ("The Matrix", "Sci-Fi", 1999, "The Wachowskis"),
            ("Inception", "Sci-Fi", 2010, "Christopher Nolan"),
            ("The Godfather", "Drama", 1972, "Francis Ford Coppola"),
            ("Pulp Fiction", "Crime", 1994, "Quentin Tarantino"),
            ("The Dark Knight", "Action", 2008, "Christopher Nolan"),
        ];
        Self {
            movies: seed
                .into_iter()
                .map(|(title, genre, year, director)| MovieRecord {
                    title: title.to_string(),
                    genre: genre.to_string(),
                    year,
                    director: director.to_string(),
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Full ordered sequence; always succeeds.
    pub fn list(&self) -> &[MovieRecord] {
        &self.movies
    }

    /// Subsequence whose genre matches case-insensitively, in original
    /// relative order. An empty result is a valid outcome, not an error.
    pub fn filter_by_genre(&self, genre: &str) -> Vec<MovieRecord> {
        let wanted = genre.to_lowercase();
        self.movies
            .iter()
            .filter(|movie| movie.genre.to_lowercase() == wanted)
            .cloned()
            .collect()
    }

    pub fn get(&self, index: usize) -> Result<&MovieRecord, CatalogError> {
        self.movies.get(index).ok_or(CatalogError::NotFound)
    }

    /// Appends the record; its id is the collection length before the call.
    pub fn create(&mut self, record: MovieRecord) -> usize {
        self.movies.push(record);
        self.movies.len() - 1
    }

    /// Wholesale overwrite of the record at `index`; no partial-field merge.
    pub fn replace(&mut self, index: usize, record: MovieRecord) -> Result<(), CatalogError> {
        let slot = self.movies.get_mut(index).ok_or(CatalogError::NotFound)?;
        *slot = record;
        Ok(())
    }

    /// Removes and returns the record at `index`; later records shift down.
    pub fn delete(&mut self, index: usize) -> Result<MovieRecord, CatalogError> {
        if index >= self.movies.len() {
            return Err(CatalogError::NotFound);
        }
        Ok(self.movies.remove(index))
    }
}

/// Resolves an id path segment. A malformed segment (non-numeric, negative,
/// overflowing) is indistinguishable from an out-of-range one: both surface
/// as `NotFound` downstream.
pub fn parse_movie_index(segment: &str) -> Result<usize, CatalogError> {
    segment.parse::<usize>().map_err(|_| CatalogError::NotFound)
}
