use std::fmt;

use crate::features::registration::types::*;
use crate::services::errors::ValidationError;

pub const MIN_TEAM_NAME_LEN: usize = 3;

/// A member KFID that passed [`validate_identifier`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A team name that passed [`validate_team_name`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamName(String);

impl TeamName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// KFIDs are one or more of `A-Z` / `0-9`. No trimming, no case folding.
pub fn validate_identifier(raw: &str) -> Result<Identifier, ValidationError> {
    let well_formed = !raw.is_empty()
        && raw
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());

    if well_formed {
        Ok(Identifier(raw.to_string()))
    } else {
        Err(ValidationError::InvalidFormat)
    }
}

/// Team names need at least three characters; whitespace counts.
pub fn validate_team_name(raw: &str) -> Result<TeamName, ValidationError> {
    if raw.chars().count() >= MIN_TEAM_NAME_LEN {
        Ok(TeamName(raw.to_string()))
    } else {
        Err(ValidationError::TooShort)
    }
}

/// Validates that enough members are present to submit
pub fn validate_minimum_members(state: &WizardState) -> Result<(), ValidationError> {
    let found = state.filled_identifier_count();
    if found >= MIN_MEMBERS {
        Ok(())
    } else {
        Err(ValidationError::TooFewMembers {
            required: MIN_MEMBERS,
            found,
        })
    }
}

/// Validates that the register action can be started right now
pub fn validate_registration_ready(state: &WizardState) -> bool {
    state.registered.is_none()
        && !state.submitting
        && state.can_register()
        && validate_minimum_members(state).is_ok()
}

/// Validates that the Add Member / Confirm action has something to submit
pub fn validate_member_entry_ready(state: &WizardState) -> bool {
    state.current_step.is_member_step() && !state.current_identifier.is_empty() && !state.submitting
}

/// Gets the error message shown under a wizard field, if any
pub fn get_field_error(state: &WizardState, field: &str) -> Option<String> {
    state.errors.get(field).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_accepts_uppercase_alphanumerics() {
        for raw in ["A", "7", "K1A2B3", "AAA111", "KF00000001", "ZZZZZZZZZZZZZZZZZZZZ"] {
            let id = validate_identifier(raw).unwrap();
            assert_eq!(id.as_str(), raw);
        }
    }

    #[test]
    fn test_identifier_rejects_everything_else() {
        for raw in [
            "", "k1a2b3", "K1a2B3", " K1A2B3", "K1A2B3 ", "K1-A2", "K1_A2", "KÄ1", "Ｋ1", "K1\n",
        ] {
            assert_eq!(
                validate_identifier(raw),
                Err(ValidationError::InvalidFormat),
                "{:?} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_team_name_length_boundary() {
        assert_eq!(validate_team_name(""), Err(ValidationError::TooShort));
        assert_eq!(validate_team_name("A"), Err(ValidationError::TooShort));
        assert_eq!(validate_team_name("AB"), Err(ValidationError::TooShort));
        assert!(validate_team_name("ABC").is_ok());
        assert_eq!(validate_team_name("Alpha").unwrap().as_str(), "Alpha");
        assert!(validate_team_name("   ").is_ok());
        assert!(validate_team_name("日本語").is_ok());
        assert_eq!(validate_team_name("日本"), Err(ValidationError::TooShort));
    }

    #[test]
    fn test_minimum_members() {
        let mut state = WizardState::default();
        state.identifiers = vec!["AAA111".to_string()];
        assert_eq!(
            validate_minimum_members(&state),
            Err(ValidationError::TooFewMembers { required: 2, found: 1 })
        );

        state.identifiers = vec!["AAA111".to_string(), String::new(), "CCC333".to_string()];
        assert!(validate_minimum_members(&state).is_ok());
    }

    #[test]
    fn test_registration_ready_requires_register_step_and_idle_submitter() {
        let mut state = WizardState::default();
        state.current_step = WizardStep::Member3;
        state.identifiers = vec!["AAA111".to_string(), "BBB222".to_string()];
        assert!(validate_registration_ready(&state));

        state.submitting = true;
        assert!(!validate_registration_ready(&state));

        state.submitting = false;
        state.current_step = WizardStep::Member2;
        assert!(!validate_registration_ready(&state));
    }

    #[test]
    fn test_member_entry_ready() {
        let mut state = WizardState::default();
        state.current_identifier = "AAA111".to_string();
        assert!(!validate_member_entry_ready(&state));

        state.current_step = WizardStep::Member1;
        assert!(validate_member_entry_ready(&state));

        state.current_identifier.clear();
        assert!(!validate_member_entry_ready(&state));
    }
}
