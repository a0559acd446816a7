// Client-side access to the team registration service
//
// - Wire types for the register endpoint
// - RegistrationClient: reqwest-based HTTP client
// - TeamSubmitter: the seam the wizard submits through

pub mod registration_client;
pub mod types;

pub use registration_client::{interpret_response, RegistrationClient, TeamSubmitter};
pub use types::{ErrorResponseBody, TeamRegisterRequest, TeamRegisterResponse};
