use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    MissingEndpoint,
    InvalidEndpoint { input: String, reason: String },
    MissingRecipient,
    InvalidPhoneNumber { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::MissingEndpoint => write!(f, "missing parameter: endpoint"),
            Self::InvalidEndpoint { input, reason } => {
                write!(f, "invalid endpoint {input:?}: {reason}")
            }
            Self::MissingRecipient => write!(f, "missing parameter: targetPhoneNumber"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "to" };
        assert_eq!(err.to_string(), "to must not be empty");

        assert_eq!(
            ValidationError::MissingEndpoint.to_string(),
            "missing parameter: endpoint"
        );
        assert_eq!(
            ValidationError::MissingRecipient.to_string(),
            "missing parameter: targetPhoneNumber"
        );

        let err = ValidationError::InvalidEndpoint {
            input: "nope".to_owned(),
            reason: "relative URL without a base".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid endpoint \"nope\": relative URL without a base"
        );

        let err = ValidationError::InvalidPhoneNumber {
            input: "bad".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid phone number: bad");
    }
}
