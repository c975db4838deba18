//! Read-only query service over the episode dataset.
//!
//! The catalog is built once at startup and shared behind an `Arc`; every
//! operation is a pure read.

use std::collections::BTreeMap;

use crate::dataset::SEASONS;
use crate::error::CoreError;
use crate::types::{Episode, Number, Season};
use crate::validation::{validate_episode_ref, validate_season};

/// In-memory episode list plus the season summaries derived from it.
#[derive(Debug, Clone)]
pub struct EpisodeCatalog {
    episodes: Vec<Episode>,
    seasons: Vec<Season>,
}

impl EpisodeCatalog {
    /// Build a catalog from an arbitrary episode list.
    ///
    /// Seasons are derived by grouping on `season` and ordered numerically.
    pub fn new(episodes: Vec<Episode>) -> Self {
        let seasons = derive_seasons(&episodes);
        Self { episodes, seasons }
    }

    /// Build the catalog from the built-in dataset.
    pub fn builtin() -> Self {
        let episodes = SEASONS
            .iter()
            .zip(1..)
            .flat_map(|(records, season)| {
                records.iter().map(move |&(number, title, released)| Episode {
                    season,
                    episode_number: number,
                    title: title.to_string(),
                    released_date: released.to_string(),
                })
            })
            .collect();
        Self::new(episodes)
    }

    /// All seasons, ascending by number.
    pub fn all_seasons(&self) -> &[Season] {
        &self.seasons
    }

    /// A single season summary, if it exists.
    pub fn season(&self, season: Number) -> Option<&Season> {
        self.seasons.iter().find(|s| s.season_number == season)
    }

    /// Episodes of one season in dataset order. Empty when the season is unknown.
    pub fn season_episodes(&self, season: Number) -> Vec<&Episode> {
        self.episodes.iter().filter(|e| e.season == season).collect()
    }

    /// A single episode, if it exists.
    pub fn episode(&self, season: Number, episode: Number) -> Option<&Episode> {
        self.episodes
            .iter()
            .find(|e| e.season == season && e.episode_number == episode)
    }

    /// Range-checked season lookup.
    pub fn find_season(&self, season: Number) -> Result<&Season, CoreError> {
        validate_season(self, season)?;
        self.season(season).ok_or(CoreError::SeasonNotFound { season })
    }

    /// Range-checked episode listing for one season.
    pub fn find_season_episodes(&self, season: Number) -> Result<Vec<&Episode>, CoreError> {
        validate_season(self, season)?;
        Ok(self.season_episodes(season))
    }

    /// Range-checked single episode lookup.
    ///
    /// Within range but absent (a gap in the numbering) is
    /// [`CoreError::EpisodeNotFound`].
    pub fn find_episode(&self, season: Number, episode: Number) -> Result<&Episode, CoreError> {
        validate_episode_ref(self, season, episode)?;
        self.episode(season, episode)
            .ok_or(CoreError::EpisodeNotFound { season, episode })
    }

    pub fn season_count(&self) -> usize {
        self.seasons.len()
    }

    pub fn episode_count(&self, season: Number) -> usize {
        self.episodes.iter().filter(|e| e.season == season).count()
    }

    /// Total number of episodes across every season.
    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }
}

impl Default for EpisodeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn derive_seasons(episodes: &[Episode]) -> Vec<Season> {
    let mut counts: BTreeMap<Number, usize> = BTreeMap::new();
    for episode in episodes {
        *counts.entry(episode.season).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(number, episode_count)| Season {
            season_number: number,
            episode_count,
        })
        .collect()
}
