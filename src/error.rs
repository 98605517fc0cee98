use thiserror::Error;

/// Errors that can occur while generating recipes or managing saved ones
#[derive(Error, Debug)]
pub enum KitchenError {
    /// HTTP transport failure talking to a provider
    #[error("Failed to reach provider: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The provider answered, but with an error (or every provider failed)
    #[error("Provider error: {0}")]
    Provider(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),

    /// The ingredient photo could not be read or encoded
    #[error("Image error: {0}")]
    Image(String),

    /// Persistent storage failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serializing saved recipes failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid planner input
    #[error(transparent)]
    Planner(#[from] PlannerError),
}

impl KitchenError {
    /// Message suitable for showing to an end user.
    ///
    /// Provider overload gets its own wording; everything else collapses
    /// into a generic retry hint.
    pub fn friendly_message(&self) -> &'static str {
        if self.to_string().to_lowercase().contains("overloaded") {
            "Our AI chefs are currently overwhelmed with orders! Please try again in a few moments."
        } else {
            "Failed to generate recipes. Please try again."
        }
    }
}

/// Rejected caller input for the weekly planner
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlannerError {
    #[error("Unknown day '{0}', expected one of Monday..Sunday")]
    InvalidDay(String),

    #[error("Unknown meal type '{0}', expected breakfast, lunch, dinner or snack")]
    InvalidMealType(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friendly_message_for_overload() {
        let err = KitchenError::Provider("503: The model is overloaded".to_string());
        assert!(err.friendly_message().contains("overwhelmed"));
    }

    #[test]
    fn test_friendly_message_generic() {
        let err = KitchenError::Provider("quota exceeded".to_string());
        assert_eq!(
            err.friendly_message(),
            "Failed to generate recipes. Please try again."
        );
    }

    #[test]
    fn test_planner_error_converts() {
        let err: KitchenError = PlannerError::InvalidDay("Funday".to_string()).into();
        assert!(err.to_string().contains("Funday"));
    }
}
