//! Range checks applied before any catalog lookup.
//!
//! Bounds are computed from the live catalog rather than hardcoded, so a
//! catalog built from a different episode list validates against its own
//! shape.

use crate::catalog::EpisodeCatalog;
use crate::error::CoreError;
use crate::types::Number;

/// Ensure `1 <= season <= season_count`.
pub fn validate_season(catalog: &EpisodeCatalog, season: Number) -> Result<(), CoreError> {
    let max = catalog.season_count();
    if in_range(season, max) {
        Ok(())
    } else {
        Err(CoreError::SeasonOutOfRange { max })
    }
}

/// Ensure `1 <= episode <= episode_count(season)`.
///
/// Call after [`validate_season`]; for an unknown season the upper bound is 0
/// and every episode number is rejected.
pub fn validate_episode(
    catalog: &EpisodeCatalog,
    season: Number,
    episode: Number,
) -> Result<(), CoreError> {
    let max = catalog.episode_count(season);
    if in_range(episode, max) {
        Ok(())
    } else {
        Err(CoreError::EpisodeOutOfRange { max })
    }
}

/// Validate both coordinates, season first.
pub fn validate_episode_ref(
    catalog: &EpisodeCatalog,
    season: Number,
    episode: Number,
) -> Result<(), CoreError> {
    validate_season(catalog, season)?;
    validate_episode(catalog, season, episode)
}

fn in_range(value: Number, max: usize) -> bool {
    usize::try_from(value).is_ok_and(|v| v >= 1 && v <= max)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn season_bounds() {
        let catalog = EpisodeCatalog::builtin();
        assert!(validate_season(&catalog, 1).is_ok());
        assert!(validate_season(&catalog, 9).is_ok());
        assert_matches!(
            validate_season(&catalog, 0),
            Err(CoreError::SeasonOutOfRange { max: 9 })
        );
        assert_matches!(
            validate_season(&catalog, 10),
            Err(CoreError::SeasonOutOfRange { max: 9 })
        );
        assert_matches!(
            validate_season(&catalog, -3),
            Err(CoreError::SeasonOutOfRange { .. })
        );
    }

    #[test]
    fn episode_bounds_follow_the_season() {
        let catalog = EpisodeCatalog::builtin();
        assert!(validate_episode(&catalog, 1, 6).is_ok());
        assert_matches!(
            validate_episode(&catalog, 1, 7),
            Err(CoreError::EpisodeOutOfRange { max: 6 })
        );
        assert!(validate_episode(&catalog, 5, 26).is_ok());
        assert_matches!(
            validate_episode(&catalog, 5, 0),
            Err(CoreError::EpisodeOutOfRange { max: 26 })
        );
    }

    #[test]
    fn episode_ref_checks_season_first() {
        let catalog = EpisodeCatalog::builtin();
        assert_matches!(
            validate_episode_ref(&catalog, 42, 99),
            Err(CoreError::SeasonOutOfRange { .. })
        );
        assert_matches!(
            validate_episode_ref(&catalog, 2, 99),
            Err(CoreError::EpisodeOutOfRange { max: 22 })
        );
        assert!(validate_episode_ref(&catalog, 2, 22).is_ok());
    }

    #[test]
    fn empty_catalog_rejects_everything() {
        let catalog = EpisodeCatalog::new(Vec::new());
        assert_matches!(
            validate_season(&catalog, 1),
            Err(CoreError::SeasonOutOfRange { max: 0 })
        );
    }
}
