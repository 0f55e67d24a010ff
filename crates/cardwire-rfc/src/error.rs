use thiserror::Error;

/// Errors raised while constructing vCard properties from raw input
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Invalid {parameter} parameter on {property}: {value}")]
    InvalidParameter {
        property: &'static str,
        parameter: String,
        value: String,
    },

    #[error("Invalid group identifier: {0}")]
    InvalidGroup(String),

    #[error("Invalid {property} value: {message}")]
    InvalidValue {
        property: &'static str,
        message: String,
    },

    #[error("{property} expects {expected} unescaped semicolons, found {found}")]
    ComponentCount {
        property: &'static str,
        expected: usize,
        found: usize,
    },
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
