//! Hypermedia links for the level 3 API.
//!
//! [`LinkBuilder`] owns the link graph: which relations accompany a season,
//! an episode, or an error, and when `previous`, `next`, and `nextSeason`
//! edges appear.

use office_core::types::{Episode, Number, Season};
use serde::Serialize;

/// A single hypermedia control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
    pub rel: &'static str,
    pub method: &'static str,
}

impl Link {
    pub fn get(href: String, rel: &'static str) -> Self {
        Self {
            href,
            rel,
            method: "GET",
        }
    }
}

/// A season with its links.
#[derive(Debug, Serialize)]
pub struct SeasonResource {
    #[serde(flatten)]
    pub season: Season,
    pub links: Vec<Link>,
}

/// An episode with its links.
#[derive(Debug, Serialize)]
pub struct EpisodeResource {
    #[serde(flatten)]
    pub episode: Episode,
    pub links: Vec<Link>,
}

/// Builds links rooted at a level's base path (e.g. `/api/v3`).
#[derive(Debug, Clone, Copy)]
pub struct LinkBuilder {
    base: &'static str,
}

impl LinkBuilder {
    pub fn new(base: &'static str) -> Self {
        Self { base }
    }

    // -- single links ---------------------------------------------------------

    pub fn all_seasons(&self, rel: &'static str) -> Link {
        Link::get(format!("{}/seasons", self.base), rel)
    }

    pub fn season(&self, season: Number, rel: &'static str) -> Link {
        Link::get(format!("{}/seasons/{season}", self.base), rel)
    }

    pub fn episodes(&self, season: Number, rel: &'static str) -> Link {
        Link::get(format!("{}/seasons/{season}/episodes", self.base), rel)
    }

    pub fn episode(&self, season: Number, episode: Number, rel: &'static str) -> Link {
        Link::get(
            format!("{}/seasons/{season}/episodes/{episode}", self.base),
            rel,
        )
    }

    // -- resource links -------------------------------------------------------

    /// Links on a season inside the season list.
    pub fn season_links(&self, season: Number) -> Vec<Link> {
        vec![
            self.season(season, "self"),
            self.episodes(season, "episodes"),
            self.all_seasons("allSeasons"),
        ]
    }

    /// Links on a single season, adding `previous` and `next` neighbours.
    pub fn season_detail_links(&self, season: Number, season_count: usize) -> Vec<Link> {
        let mut links = self.season_links(season);
        if season > 1 {
            links.push(self.season(season - 1, "previous"));
        }
        if below(season, season_count) {
            links.push(self.season(season + 1, "next"));
        }
        links
    }

    /// Links on an episode inside a season's episode list.
    pub fn episode_links(&self, season: Number, episode: Number, episode_count: usize) -> Vec<Link> {
        let mut links = self.episode_base_links(season, episode);
        if episode > 1 {
            links.push(self.episode(season, episode - 1, "previous"));
        }
        if below(episode, episode_count) {
            links.push(self.episode(season, episode + 1, "next"));
        }
        links
    }

    /// Links on a single episode.
    ///
    /// The last episode of a season links to the first episode of the next
    /// season (`nextSeason`) instead of `next`, unless the season is the last.
    pub fn episode_detail_links(
        &self,
        season: Number,
        episode: Number,
        episode_count: usize,
        season_count: usize,
    ) -> Vec<Link> {
        let mut links = self.episode_base_links(season, episode);
        if episode > 1 {
            links.push(self.episode(season, episode - 1, "previous"));
        }
        if below(episode, episode_count) {
            links.push(self.episode(season, episode + 1, "next"));
        } else if below(season, season_count) {
            links.push(self.episode(season + 1, 1, "nextSeason"));
        }
        links
    }

    fn episode_base_links(&self, season: Number, episode: Number) -> Vec<Link> {
        vec![
            self.episode(season, episode, "self"),
            self.season(season, "season"),
            self.episodes(season, "allEpisodes"),
        ]
    }

    // -- envelope links -------------------------------------------------------

    pub fn seasons_envelope(&self) -> Vec<Link> {
        vec![self.all_seasons("self")]
    }

    pub fn season_envelope(&self, season: Number) -> Vec<Link> {
        vec![self.season(season, "self"), self.all_seasons("allSeasons")]
    }

    pub fn episodes_envelope(&self, season: Number) -> Vec<Link> {
        vec![
            self.episodes(season, "self"),
            self.season(season, "season"),
            self.all_seasons("allSeasons"),
        ]
    }

    pub fn episode_envelope(&self, season: Number, episode: Number) -> Vec<Link> {
        vec![
            self.episode(season, episode, "self"),
            self.episodes(season, "allEpisodes"),
            self.season(season, "season"),
            self.all_seasons("allSeasons"),
        ]
    }

    // -- error links ----------------------------------------------------------

    /// Recovery links when a season could not be resolved.
    pub fn season_error_links(&self) -> Vec<Link> {
        vec![self.all_seasons("allSeasons")]
    }

    /// Recovery links when an episode could not be resolved in a valid season.
    pub fn episode_error_links(&self, season: Number) -> Vec<Link> {
        vec![
            self.episodes(season, "allEpisodes"),
            self.season(season, "season"),
            self.all_seasons("allSeasons"),
        ]
    }
}

/// `value < count`, treating negative values as below any count.
fn below(value: Number, count: usize) -> bool {
    usize::try_from(value).map_or(true, |v| v < count)
}
