use thiserror::Error;

#[derive(Error, Debug)]
pub enum SayError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {message}")]
    TomlParseError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SayError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            SayError::IoError(e) => format!("Could not read or write: {}", e),
            SayError::TomlParseError { message } => {
                format!("The configuration file is not valid TOML: {}", message)
            }
            SayError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SayError::IoError(_) => "Check that the file exists and is readable",
            SayError::TomlParseError { .. } => {
                "Make sure the file has a [say] table with a messages array"
            }
            SayError::InvalidConfigValueError { .. } => "Fix the value and run again",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            SayError::IoError(_) => 3,
            SayError::TomlParseError { .. } | SayError::InvalidConfigValueError { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, SayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let io = SayError::from(std::io::Error::other("closed"));
        assert_eq!(io.exit_code(), 3);

        let invalid = SayError::InvalidConfigValueError {
            field: "repeat".to_string(),
            value: "0".to_string(),
            reason: "Value must be at least 1".to_string(),
        };
        assert_eq!(invalid.exit_code(), 1);
        assert!(invalid.user_friendly_message().contains("repeat"));
    }
}
