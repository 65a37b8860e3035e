use thiserror::Error;

/// Errors raised while generating a sentence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
	#[error("cannot generate a sentence from an empty dictionary")]
	EmptyDictionary,
}

/// Invalid generation settings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
	#[error("max words must be at least {min}, got {got}")]
	MaxWords { min: usize, got: usize },
}
