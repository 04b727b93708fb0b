//! Error types for option binding and extension hosting

use thiserror::Error;

/// Boxed error returned by text parsers and extension hooks
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias for binding operations
pub type BindResult<T> = Result<T, BindError>;

/// Result type alias for extension operations
pub type PluginResult<T> = Result<T, PluginError>;

/// Error raised while binding tokens to a configuration graph
///
/// Option names are reported as flag signatures (`prefix + name`) and owners
/// as the Rust type name of the configuration object holding the field.
#[derive(Error, Debug)]
pub enum BindError {
    /// A flag that needs a value was matched with nothing following it
    #[error("option {option} in type '{owner}' must have a value")]
    MissingValue { option: String, owner: &'static str },

    /// No text parser is registered for the option name or value type
    #[error("text parser not found for option '{option}' of type '{type_name}'")]
    UnresolvedParser {
        option: String,
        type_name: &'static str,
    },

    /// The declared collection type cannot be built by the engine
    #[error("unsupported collection type '{type_name}' for option '{option}' in type '{owner}'")]
    UnsupportedCollection {
        option: String,
        owner: &'static str,
        type_name: String,
    },

    /// The field cannot be an option target
    #[error("invalid option '{option}' in type '{owner}': {reason}")]
    InvalidDescriptor {
        option: String,
        owner: &'static str,
        reason: String,
    },

    /// A required option was neither supplied nor defaulted
    #[error("option '{option}' not found in type '{owner}'")]
    RequiredOptionMissing { option: String, owner: &'static str },

    /// A text parser rejected the raw value
    #[error("cannot convert '{text}' for option '{option}': {source}")]
    Conversion {
        option: String,
        text: String,
        #[source]
        source: BoxError,
    },
}

impl BindError {
    /// Returns a stable numeric code for this error kind
    pub fn error_code(&self) -> u32 {
        match self {
            BindError::MissingValue { .. } => 1,
            BindError::UnresolvedParser { .. } => 2,
            BindError::UnsupportedCollection { .. } => 3,
            BindError::InvalidDescriptor { .. } => 4,
            BindError::RequiredOptionMissing { .. } => 5,
            BindError::Conversion { .. } => 6,
        }
    }

    /// The flag signature the error is about
    pub fn option(&self) -> &str {
        match self {
            BindError::MissingValue { option, .. }
            | BindError::UnresolvedParser { option, .. }
            | BindError::UnsupportedCollection { option, .. }
            | BindError::InvalidDescriptor { option, .. }
            | BindError::RequiredOptionMissing { option, .. }
            | BindError::Conversion { option, .. } => option,
        }
    }
}

/// Error type for extension operations
#[derive(Error, Debug)]
pub enum PluginError {
    /// Binding the extension's own arguments failed
    #[error("Error parsing plugin option {option}: {source}")]
    BadCommandLine {
        option: String,
        #[source]
        source: BindError,
    },

    /// The configuration type declares no root option
    #[error("extension type '{0}' declares no root option")]
    MissingRoot(&'static str),

    /// The post-parse hook rejected the bound configuration
    #[error("plugin option {option} rejected its configuration: {source}")]
    PostParse {
        option: String,
        #[source]
        source: BoxError,
    },

    /// No extension claimed a token
    #[error("unrecognized parameter: {0}")]
    UnrecognizedParameter(String),
}

impl PluginError {
    /// Returns a stable numeric code for this error kind
    pub fn error_code(&self) -> u32 {
        match self {
            PluginError::BadCommandLine { .. } => 1,
            PluginError::MissingRoot(_) => 2,
            PluginError::PostParse { .. } => 3,
            PluginError::UnrecognizedParameter(_) => 4,
        }
    }
}


#[cfg(test)]
#[path = "error/error_parameterized_tests.rs"]
mod error_parameterized_tests;
