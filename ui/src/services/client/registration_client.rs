use async_trait::async_trait;
use reqwest::Client;
use tracing::{error, info, instrument, warn};

use super::types::*;
use crate::features::registration::RegistrationResult;
use crate::services::config::{get_global_config, RegistrationConfig, API_KEY_HEADER};
use crate::services::errors::{
    RegistrationError, ServerValidationReason, ServiceResult, NOT_REGISTERED_DETAIL,
};

const FALLBACK_FAILURE_MESSAGE: &str = "Registration failed";

/// Anything able to register a team. The wizard only talks to this seam.
#[async_trait(?Send)]
pub trait TeamSubmitter {
    /// Perform exactly one registration attempt; empty slots are not sent
    async fn submit(
        &self,
        team_name: &str,
        identifiers: &[String],
    ) -> ServiceResult<RegistrationResult>;
}

/// HTTP client for the team registration service
#[derive(Clone)]
pub struct RegistrationClient {
    pub(crate) http_client: Client,
    pub(crate) config: RegistrationConfig,
}

impl RegistrationClient {
    /// Create a client from the global configuration
    pub fn new() -> ServiceResult<Self> {
        Self::with_config(get_global_config())
    }

    pub fn with_config(config: RegistrationConfig) -> ServiceResult<Self> {
        let http_client = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// POST the team to the registration endpoint
    #[instrument(skip(self, identifiers), fields(members = identifiers.len()), err)]
    pub async fn register_team(
        &self,
        team_name: &str,
        identifiers: &[String],
    ) -> ServiceResult<TeamRegisterResponse> {
        let request = TeamRegisterRequest::new(team_name, identifiers);
        let url = self.config.register_url();
        info!(
            "Submitting team registration with {} members to {}",
            request.kfids.len(),
            url
        );

        let response = self
            .http_client
            .post(&url)
            .header(API_KEY_HEADER, self.config.api_key.as_str())
            .json(&request)
            .send()
            .await
            .inspect_err(|e| error!("Registration request failed to send: {}", e))?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        interpret_response(status, &body)
    }
}

#[async_trait(?Send)]
impl TeamSubmitter for RegistrationClient {
    async fn submit(
        &self,
        team_name: &str,
        identifiers: &[String],
    ) -> ServiceResult<RegistrationResult> {
        let response = self.register_team(team_name, identifiers).await?;
        Ok(RegistrationResult::from(response))
    }
}

/// Map a raw HTTP status and body onto the registration outcome
pub fn interpret_response(status: u16, body: &str) -> ServiceResult<TeamRegisterResponse> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        warn!("Registration service returned non-JSON body (status {})", status);
        RegistrationError::Network {
            message: format!("Non-JSON response (status {}): {}", status, e),
        }
    })?;

    if (200..300).contains(&status) {
        let registered: TeamRegisterResponse = serde_json::from_value(value)?;
        info!("Team registered with id {}", registered.team_id);
        return Ok(registered);
    }

    let failure: ErrorResponseBody = serde_json::from_value(value).unwrap_or_default();
    let detail = failure.detail_text();

    if detail
        .as_deref()
        .is_some_and(|detail| detail.contains(NOT_REGISTERED_DETAIL))
    {
        warn!("Registration rejected: members not registered upstream");
        return Err(RegistrationError::ServerValidation {
            reason: ServerValidationReason::NotRegisteredMembers,
        });
    }

    let message = detail
        .or_else(|| failure.message_text())
        .unwrap_or_else(|| FALLBACK_FAILURE_MESSAGE.to_string());
    error!("Registration failed with status {}: {}", status, message);

    Err(RegistrationError::Server { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_response_yields_credentials() {
        let body = json!({"team_id": "T1", "password": "p@ss"}).to_string();
        let response = interpret_response(201, &body).unwrap();

        assert_eq!(response.team_id, "T1");
        assert_eq!(response.password, "p@ss");
    }

    #[test]
    fn test_not_registered_detail_is_server_validation_error() {
        let body = json!({"detail": "KFIDs not registered in KIITFest"}).to_string();

        assert_eq!(
            interpret_response(400, &body),
            Err(RegistrationError::ServerValidation {
                reason: ServerValidationReason::NotRegisteredMembers
            })
        );
    }

    #[test]
    fn test_not_registered_detail_matches_as_substring() {
        let body = json!({"detail": "KFIDs not registered in KIITFest: ZZZ999"}).to_string();

        assert!(matches!(
            interpret_response(400, &body),
            Err(RegistrationError::ServerValidation { .. })
        ));
    }

    #[test]
    fn test_generic_failure_prefers_detail_then_message_then_fallback() {
        let body = json!({"detail": "Team name taken", "message": "ignored"}).to_string();
        assert_eq!(
            interpret_response(409, &body),
            Err(RegistrationError::Server {
                status: 409,
                message: "Team name taken".to_string()
            })
        );

        let body = json!({"message": "Invalid API key"}).to_string();
        assert_eq!(
            interpret_response(401, &body),
            Err(RegistrationError::Server {
                status: 401,
                message: "Invalid API key".to_string()
            })
        );

        assert_eq!(
            interpret_response(500, "{}"),
            Err(RegistrationError::Server {
                status: 500,
                message: "Registration failed".to_string()
            })
        );
    }

    #[test]
    fn test_non_json_bodies_are_network_errors() {
        assert!(matches!(
            interpret_response(502, "<html>Bad Gateway</html>"),
            Err(RegistrationError::Network { .. })
        ));
        assert!(matches!(
            interpret_response(200, ""),
            Err(RegistrationError::Network { .. })
        ));
    }

    #[test]
    fn test_success_status_with_unexpected_shape_is_network_error() {
        let body = json!({"ok": true}).to_string();
        assert!(matches!(
            interpret_response(200, &body),
            Err(RegistrationError::Network { .. })
        ));
    }

    #[test]
    fn test_non_object_failure_body_uses_fallback() {
        assert_eq!(
            interpret_response(503, "\"maintenance\""),
            Err(RegistrationError::Server {
                status: 503,
                message: "Registration failed".to_string()
            })
        );
    }

    #[test]
    fn test_client_builds_from_explicit_config() {
        let config = RegistrationConfig::new()
            .with_api_base_url("http://localhost:8000")
            .with_api_key("test-key");
        let client = RegistrationClient::with_config(config).unwrap();

        assert_eq!(
            client.config.register_url(),
            "http://localhost:8000/api/teams/register"
        );
    }
}
