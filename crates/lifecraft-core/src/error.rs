use thiserror::Error;

#[derive(Debug, Error)]
pub enum LifecraftError {
    #[error("not initialized: run 'lifecraft init'")]
    NotInitialized,

    #[error("unknown module: {0}")]
    UnknownModule(String),

    #[error("invalid module status: {0}")]
    InvalidStatus(String),

    #[error("invalid stage '{stage}' for module '{module}'")]
    InvalidStage { module: String, stage: String },

    #[error("invalid completion percentage {0}: must be 0-100")]
    InvalidPercentage(u32),

    #[error("invalid user id '{0}'")]
    InvalidUserId(String),

    #[error("invalid role: {0}")]
    InvalidRole(String),

    #[error("malformed progress set: {0}")]
    MalformedProgress(String),

    #[error("invalid registry: {0}")]
    InvalidRegistry(String),

    #[error("prerequisites not met for '{module}': missing {}", missing.join(", "))]
    PrerequisitesNotMet {
        module: String,
        missing: Vec<String>,
    },

    #[error("invalid response value {value} for item '{item}': must be 1-5")]
    InvalidLikert { item: String, value: i64 },

    #[error("invalid locale '{0}': expected en or kr")]
    InvalidLocale(String),

    #[error("invalid instinct '{0}': expected sp, so or sx")]
    InvalidInstinct(String),

    #[error("invalid enneagram type '{0}': must be 1-9")]
    InvalidEnneagramType(String),

    #[error("type {enneagram_type} has no wing {wing}: wings are the adjacent types")]
    InvalidWing { enneagram_type: u8, wing: u8 },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl LifecraftError {
    /// True for errors caused by bad caller input rather than the environment.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            LifecraftError::UnknownModule(_)
                | LifecraftError::InvalidStatus(_)
                | LifecraftError::InvalidStage { .. }
                | LifecraftError::InvalidPercentage(_)
                | LifecraftError::InvalidUserId(_)
                | LifecraftError::InvalidRole(_)
                | LifecraftError::MalformedProgress(_)
                | LifecraftError::InvalidLikert { .. }
                | LifecraftError::InvalidLocale(_)
                | LifecraftError::InvalidInstinct(_)
                | LifecraftError::InvalidEnneagramType(_)
                | LifecraftError::InvalidWing { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, LifecraftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prerequisites_message_lists_missing() {
        let err = LifecraftError::PrerequisitesNotMet {
            module: "vision".into(),
            missing: vec!["values".into(), "strengths".into()],
        };
        assert_eq!(
            err.to_string(),
            "prerequisites not met for 'vision': missing values, strengths"
        );
    }

    #[test]
    fn invalid_argument_classification() {
        assert!(LifecraftError::UnknownModule("x".into()).is_invalid_argument());
        assert!(LifecraftError::InvalidPercentage(140).is_invalid_argument());
        assert!(LifecraftError::InvalidLocale("fr".into()).is_invalid_argument());
        assert!(LifecraftError::InvalidWing {
            enneagram_type: 1,
            wing: 5
        }
        .is_invalid_argument());
        assert!(!LifecraftError::NotInitialized.is_invalid_argument());
        assert!(!LifecraftError::InvalidRegistry("cycle".into()).is_invalid_argument());
    }
}
