use crate::resource::Resource;

/// Failure talking to the remote catalog API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}")]
    Status { status: u16 },

    #[error("decode error: {0}")]
    Decode(String),
}

/// An operation was invoked without an identifier it requires.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing required parameter `{0}`")]
pub struct MissingParameterError(pub &'static str);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    MissingParameter(#[from] MissingParameterError),
}

impl CatalogError {
    /// Generic text shown in error panels. Never exposes transport details.
    pub fn user_message(&self, resource: Resource) -> String {
        match self {
            Self::Fetch(_) => format!(
                "Failed to fetch {}. Please try again later.",
                resource.noun(2)
            ),
            Self::MissingParameter(_) => format!("No {} was specified.", resource.noun(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_errors_render_generic_message() {
        let err = CatalogError::from(FetchError::Status { status: 503 });
        assert_eq!(
            err.user_message(Resource::Clans),
            "Failed to fetch clans. Please try again later."
        );
    }

    #[test]
    fn missing_parameter_names_the_parameter() {
        let err = MissingParameterError("id");
        assert_eq!(err.to_string(), "missing required parameter `id`");
        assert_eq!(
            CatalogError::from(err).user_message(Resource::Characters),
            "No character was specified."
        );
    }
}
