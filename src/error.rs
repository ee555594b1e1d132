//! Error types with fix suggestions

use thiserror::Error;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

#[derive(Error, Debug)]
pub enum SquadError {
    #[error("Unsupported topic: '{requested}'")]
    UnsupportedTopic { requested: String },

    #[error("Topic '{topic}' is not registered")]
    TopicNotRegistered { topic: String },

    #[error("Environment error: {0}")]
    Environment(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FixSuggestion for SquadError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            SquadError::UnsupportedTopic { .. } => {
                Some("Run 'squad topics' to list the supported topics")
            }
            SquadError::TopicNotRegistered { .. } => {
                Some("Register a renderer for the topic before activating it")
            }
            SquadError::Environment(_) => {
                Some("Set SQUAD_AS_API and SQUAD_DM_API (a .env file works too)")
            }
            SquadError::Io(_) => Some("Check file path and permissions"),
        }
    }
}
