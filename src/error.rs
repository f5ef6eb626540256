/// Error returned from [crate::Model] construction and evaluation
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("Unknown model \"{0}\"")]
    UnknownModel(String),

    #[error("invalid fancy parameter registry: {0}")]
    InvalidFancyRegistry(String),

    #[error("fancy parameters {0:?} depend on each other and cannot be resolved")]
    UnresolvableDependency(Vec<String>),

    #[error("parameter \"{0}\" is not set")]
    MissingField(String),

    #[error("model has {expected} parameters, {actual} values are given")]
    TooManyParameters { expected: usize, actual: usize },

    #[error("model has {expected} physical parameters, {actual} boundaries are given")]
    BoundariesSizeMismatch { expected: usize, actual: usize },

    #[error(transparent)]
    Event(#[from] EventError),
}

impl ModelError {
    pub(crate) fn invalid_registry(reason: impl Into<String>) -> Self {
        Self::InvalidFancyRegistry(reason.into())
    }

    pub(crate) fn unresolvable<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self::UnresolvableDependency(names.into_iter().map(Into::into).collect())
    }
}

/// Error returned from [crate::Event] and [crate::Telescope] constructors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EventError {
    #[error("event must contain at least one telescope")]
    NoTelescopes,

    #[error("telescope name \"{0}\" is used more than once")]
    DuplicateTelescope(String),

    #[error("light curve of telescope \"{telescope}\" has {actual} columns, 3 are required")]
    WrongColumnNumber { telescope: String, actual: usize },

    #[error("light curve of telescope \"{0}\" is empty")]
    EmptyLightCurve(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_model_message() {
        let error = ModelError::UnknownModel("BAD".into());
        assert!(error.to_string().contains("Unknown model \"BAD\""));
    }

    #[test]
    fn event_error_is_transparent() {
        let error: ModelError = EventError::DuplicateTelescope("Test".into()).into();
        assert_eq!(
            error.to_string(),
            "telescope name \"Test\" is used more than once"
        );
    }

    #[test]
    fn unresolvable_lists_names() {
        let error = ModelError::unresolvable(["tE", "rho"]);
        assert_eq!(
            error,
            ModelError::UnresolvableDependency(vec!["tE".into(), "rho".into()])
        );
    }
}
