use std::fmt;

use thiserror::Error;

/// Server failure detail that marks members unknown to the upstream roster
pub const NOT_REGISTERED_DETAIL: &str = "KFIDs not registered in KIITFest";

const CONNECTIVITY_MESSAGE: &str = "Please check your connection and try again";
const NOT_REGISTERED_MESSAGE: &str = "Some team members are not registered for KIITFest. Please make sure all members are registered first.";

/// Input rejected by one of the client-side validators
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Team name must be at least 3 characters")]
    TooShort,

    #[error("Invalid KFID format")]
    InvalidFormat,

    #[error("At least {required} team members are required ({found} added)")]
    TooFewMembers { required: usize, found: usize },
}

impl ValidationError {
    /// Wizard error key the message is shown under
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::TooShort => crate::features::registration::TEAM_NAME_FIELD,
            ValidationError::InvalidFormat | ValidationError::TooFewMembers { .. } => {
                crate::features::registration::KFID_FIELD
            }
        }
    }
}

/// Why the registration service refused an otherwise well-formed request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerValidationReason {
    NotRegisteredMembers,
}

impl fmt::Display for ServerValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerValidationReason::NotRegisteredMembers => {
                write!(f, "one or more members are not registered")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Duplicate KFID: {identifier}")]
    DuplicateIdentifier { identifier: String },

    #[error("Registration already in progress")]
    SubmissionInProgress,

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Server validation error: {reason}")]
    ServerValidation { reason: ServerValidationReason },

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
}

impl RegistrationError {
    /// Text shown to the user in the wizard
    pub fn user_message(&self) -> String {
        match self {
            RegistrationError::Validation(err) => err.to_string(),
            RegistrationError::DuplicateIdentifier { .. } => {
                "This team member has already been added".to_string()
            }
            RegistrationError::SubmissionInProgress => {
                "Your registration is already being submitted".to_string()
            }
            RegistrationError::Network { .. } => CONNECTIVITY_MESSAGE.to_string(),
            RegistrationError::ServerValidation { reason } => match reason {
                ServerValidationReason::NotRegisteredMembers => NOT_REGISTERED_MESSAGE.to_string(),
            },
            RegistrationError::Server { message, .. } => message.clone(),
        }
    }

    /// Title of the notice raised for this error
    pub fn notice_title(&self) -> &'static str {
        match self {
            RegistrationError::Validation(ValidationError::InvalidFormat) => "Invalid KFID",
            RegistrationError::DuplicateIdentifier { .. } => "Duplicate KFID",
            _ => "Registration Failed",
        }
    }

    /// Whether resubmitting the same data can succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            RegistrationError::Network { .. } | RegistrationError::Server { .. }
        )
    }
}

impl From<reqwest::Error> for RegistrationError {
    fn from(err: reqwest::Error) -> Self {
        RegistrationError::Network {
            message: format!("Failed to reach registration service: {}", err),
        }
    }
}

impl From<serde_json::Error> for RegistrationError {
    fn from(err: serde_json::Error) -> Self {
        RegistrationError::Network {
            message: format!("Unexpected response body: {}", err),
        }
    }
}

pub type ServiceResult<T> = Result<T, RegistrationError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Configuration error: {field} - {reason}")]
    Invalid { field: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_map_to_wizard_fields() {
        assert_eq!(ValidationError::TooShort.field(), "teamName");
        assert_eq!(ValidationError::InvalidFormat.field(), "kfid");
        assert_eq!(
            ValidationError::TooFewMembers { required: 2, found: 1 }.field(),
            "kfid"
        );
    }

    #[test]
    fn test_not_registered_message_asks_for_pre_registration() {
        let err = RegistrationError::ServerValidation {
            reason: ServerValidationReason::NotRegisteredMembers,
        };
        assert!(err.user_message().contains("registered first"));
        assert_eq!(err.notice_title(), "Registration Failed");
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_network_error_uses_generic_guidance() {
        let err = RegistrationError::Network {
            message: "connection refused".to_string(),
        };
        assert_eq!(err.user_message(), CONNECTIVITY_MESSAGE);
        assert!(err.is_retryable());
    }

    #[test]
    fn test_server_error_surfaces_server_text() {
        let err = RegistrationError::Server {
            status: 409,
            message: "Team name already taken".to_string(),
        };
        assert_eq!(err.user_message(), "Team name already taken");
        assert!(err.is_retryable());
    }

    #[test]
    fn test_serde_errors_become_network_errors() {
        let parse_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err: RegistrationError = parse_err.into();
        assert!(matches!(err, RegistrationError::Network { .. }));
    }

    #[test]
    fn test_transport_errors_become_retryable_network_errors() {
        let transport = reqwest::Client::new()
            .post("not a url")
            .build()
            .unwrap_err();

        let err = RegistrationError::from(transport);
        assert!(matches!(err, RegistrationError::Network { .. }));
        assert!(err.is_retryable());
        assert_eq!(err.user_message(), "Please check your connection and try again");
    }
}
