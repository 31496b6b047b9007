use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarvestlabError {
    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },
}

impl HarvestlabError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        HarvestlabError::ConfigInvalidValue {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HarvestlabError>;
