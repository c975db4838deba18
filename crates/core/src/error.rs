/// Domain errors produced by catalog lookups and request validation.
///
/// The `Display` text of each variant is the `error` string sent to clients,
/// so wording changes here are visible on the wire.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Season parameter is outside of the scope. Please select the season number between 1 and {max} (inclusive).")]
    SeasonOutOfRange { max: usize },

    #[error("Episode parameter is outside of the scope. Please select the episode number between 1 and {max} (inclusive).")]
    EpisodeOutOfRange { max: usize },

    #[error("Season {season} not found")]
    SeasonNotFound { season: i32 },

    #[error("Episode {episode} of season {season} not found")]
    EpisodeNotFound { season: i32, episode: i32 },

    /// A required request parameter was absent.
    #[error("{0}")]
    MissingParameter(&'static str),

    /// A request parameter could not be parsed.
    #[error("{0}")]
    InvalidParameter(String),

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Short client-facing summary that accompanies the detailed error text.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::SeasonOutOfRange { .. }
            | Self::EpisodeOutOfRange { .. }
            | Self::MissingParameter(_)
            | Self::InvalidParameter(_) => "Invalid request",
            Self::SeasonNotFound { .. } => "Season not found",
            Self::EpisodeNotFound { .. } => "Episode not found",
            Self::UnknownAction(_) => "Invalid action",
            Self::Internal(_) => "An error occurred while processing the request",
        }
    }

    /// Whether the failure refers to a resource that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::SeasonOutOfRange { .. }
                | Self::EpisodeOutOfRange { .. }
                | Self::SeasonNotFound { .. }
                | Self::EpisodeNotFound { .. }
        )
    }
}
