// Core types for the registration wizard - no dioxus imports needed here
use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, info, warn};

use crate::features::registration::form_validation::{validate_identifier, validate_team_name};
use crate::services::client::TeamRegisterResponse;
use crate::services::errors::{RegistrationError, ValidationError};

pub const MAX_MEMBERS: usize = 3;
pub const MIN_MEMBERS: usize = 2;

// Error map keys
pub const TEAM_NAME_FIELD: &str = "teamName";
pub const KFID_FIELD: &str = "kfid";

// Wizard step management
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WizardStep {
    TeamName,
    Member1,
    Member2,
    Member3,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::TeamName,
        WizardStep::Member1,
        WizardStep::Member2,
        WizardStep::Member3,
    ];

    pub fn index(self) -> usize {
        match self {
            WizardStep::TeamName => 0,
            WizardStep::Member1 => 1,
            WizardStep::Member2 => 2,
            WizardStep::Member3 => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::TeamName => "Team Name",
            WizardStep::Member1 => "Member 1",
            WizardStep::Member2 => "Member 2",
            WizardStep::Member3 => "Member 3",
        }
    }

    /// Index into `WizardState::identifiers` written by this step
    pub fn member_slot(self) -> Option<usize> {
        self.index().checked_sub(1)
    }

    pub fn is_member_step(self) -> bool {
        self.member_slot().is_some()
    }

    pub fn is_optional(self) -> bool {
        self == WizardStep::Member3
    }

    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }
}

/// Where an identifier came from
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EntrySource {
    Manual,
    Scan,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NoticeVariant {
    Info,
    Destructive,
}

/// Transient message shown above the wizard
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Notice {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

/// Credentials issued by the registration service
#[derive(Clone, PartialEq, Eq)]
pub struct RegistrationResult {
    pub team_id: String,
    pub password: String,
}

impl fmt::Debug for RegistrationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationResult")
            .field("team_id", &self.team_id)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl From<TeamRegisterResponse> for RegistrationResult {
    fn from(response: TeamRegisterResponse) -> Self {
        Self {
            team_id: response.team_id,
            password: response.password,
        }
    }
}

/// One entry of the progress stepper
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StepIndicator {
    pub title: &'static str,
    pub is_completed: bool,
    pub is_current: bool,
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum WizardAction {
    // Team name step
    SetTeamName(String),
    SubmitTeamName,

    // Member steps
    SetCurrentIdentifier(String),
    EnterIdentifier { raw: String, source: EntrySource },
    ConfirmCurrentIdentifier,
    PreviousStep,
    SetScanning(bool),
    ScannerFailed(String),

    // Submission
    BeginSubmission,
    RegistrationSucceeded(RegistrationResult),
    RegistrationFailed(RegistrationError),

    DismissNotice(u64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct WizardState {
    pub current_step: WizardStep,
    pub team_name: String,
    // identifiers[i] belongs to member i + 1; an empty string is an empty slot
    pub identifiers: Vec<String>,
    // Text in the KFID input, or the last scanned KFID awaiting confirmation
    pub current_identifier: String,
    pub scanning: bool,
    pub errors: BTreeMap<String, String>,
    pub notice: Option<Notice>,
    pub submitting: bool,
    pub registered: Option<RegistrationResult>,
    notice_seq: u64,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            current_step: WizardStep::TeamName,
            team_name: String::new(),
            identifiers: Vec::new(),
            current_identifier: String::new(),
            scanning: false,
            errors: BTreeMap::new(),
            notice: None,
            submitting: false,
            registered: None,
            notice_seq: 0,
        }
    }
}

impl WizardState {
    /// Validate the team name and move on to the first member
    pub fn submit_team_name(&mut self, name: &str) -> Result<(), ValidationError> {
        if self.current_step != WizardStep::TeamName {
            warn!("Team name submitted outside the team name step");
            return Ok(());
        }

        self.team_name = name.to_string();
        match validate_team_name(name) {
            Ok(team_name) => {
                info!("Team name accepted: {}", team_name.as_str());
                self.team_name = team_name.into_inner();
                self.set_step(WizardStep::Member1);
                self.errors.clear();
                Ok(())
            }
            Err(err) => {
                debug!("Team name rejected: {}", err);
                self.errors.insert(err.field().to_string(), err.to_string());
                Err(err)
            }
        }
    }

    /// Store an identifier in the slot of the current member step.
    ///
    /// Manual entries on steps 1 and 2 advance the wizard; step 3 never
    /// auto-advances. Scanned entries never advance and wait for confirmation.
    pub fn enter_identifier_for_current_step(
        &mut self,
        raw: &str,
        source: EntrySource,
    ) -> Result<(), RegistrationError> {
        let Some(slot) = self.current_step.member_slot() else {
            warn!("Identifier entered outside a member step");
            return Ok(());
        };

        let identifier = match validate_identifier(raw) {
            Ok(identifier) => identifier,
            Err(err) => {
                debug!("Rejected KFID for member {}: {}", slot + 1, err);
                self.errors.insert(KFID_FIELD.to_string(), err.to_string());
                if source == EntrySource::Scan {
                    self.push_notice(
                        "Invalid KFID",
                        "Please try scanning again",
                        NoticeVariant::Destructive,
                    );
                    self.scanning = false;
                }
                return Err(err.into());
            }
        };

        if self
            .other_identifiers(slot)
            .any(|other| other == identifier.as_str())
        {
            let err = RegistrationError::DuplicateIdentifier {
                identifier: identifier.to_string(),
            };
            debug!("Duplicate KFID {} for member {}", identifier, slot + 1);
            match source {
                EntrySource::Manual => {
                    self.errors.insert(KFID_FIELD.to_string(), err.user_message());
                }
                EntrySource::Scan => {
                    self.push_notice(err.notice_title(), &err.user_message(), NoticeVariant::Destructive);
                    self.scanning = false;
                }
            }
            return Err(err);
        }

        info!("Member {} set to {} ({:?})", slot + 1, identifier, source);
        let identifier = identifier.into_inner();
        self.assign_slot(slot, identifier.clone());

        match source {
            EntrySource::Manual => {
                self.current_identifier.clear();
                self.errors.clear();
                if self.current_step.index() < MAX_MEMBERS {
                    if let Some(next) = self.current_step.next() {
                        self.set_step(next);
                    }
                }
            }
            EntrySource::Scan => {
                self.errors.remove(KFID_FIELD);
                self.current_identifier = identifier;
                self.scanning = false;
            }
        }

        Ok(())
    }

    /// Step back without touching stored identifiers
    pub fn go_to_previous_step(&mut self) -> bool {
        let Some(previous) = self.current_step.previous() else {
            return false;
        };

        self.set_step(previous);
        self.errors.clear();
        if !previous.is_member_step() {
            self.scanning = false;
        }
        true
    }

    /// Enter or leave scanning mode; only meaningful on member steps
    pub fn toggle_scanning(&mut self, on: bool) -> bool {
        if !self.current_step.is_member_step() {
            warn!("Scanning requested outside a member step");
            return false;
        }

        self.scanning = on;
        true
    }

    /// Whether the register action is offered
    pub fn can_register(&self) -> bool {
        self.current_step == WizardStep::Member3 || self.filled_identifier_count() == MAX_MEMBERS
    }

    pub fn filled_identifier_count(&self) -> usize {
        self.identifiers.iter().filter(|id| !id.is_empty()).count()
    }

    /// Non-empty identifiers in member order
    pub fn filled_identifiers(&self) -> Vec<String> {
        self.identifiers
            .iter()
            .filter(|id| !id.is_empty())
            .cloned()
            .collect()
    }

    pub fn identifier_for(&self, step: WizardStep) -> Option<&str> {
        step.member_slot()
            .and_then(|slot| self.identifiers.get(slot))
            .map(String::as_str)
            .filter(|id| !id.is_empty())
    }

    pub fn stepper_steps(&self) -> Vec<StepIndicator> {
        let current = self.current_step.index();
        WizardStep::ALL
            .iter()
            .map(|step| StepIndicator {
                title: step.title(),
                is_completed: step.index() < current,
                is_current: step.index() == current,
            })
            .collect()
    }

    /// Reduces the state based on an action
    pub fn reduce(mut self, action: WizardAction) -> Self {
        self.reduce_in_place(action);
        self
    }

    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: WizardAction) {
        if self.registered.is_some() {
            match action {
                WizardAction::DismissNotice(id) => self.dismiss_notice(id),
                other => debug!("Ignoring {:?} after registration", other),
            }
            return;
        }

        if self.submitting && !Self::allowed_while_submitting(&action) {
            debug!("Ignoring {:?} while a submission is pending", action);
            return;
        }

        match action {
            WizardAction::SetTeamName(name) => {
                self.team_name = name;
            }
            WizardAction::SubmitTeamName => {
                let name = self.team_name.clone();
                let _ = self.submit_team_name(&name);
            }
            WizardAction::SetCurrentIdentifier(value) => {
                self.current_identifier = value;
            }
            WizardAction::EnterIdentifier { raw, source } => {
                if source == EntrySource::Scan && !self.scanning {
                    debug!("Ignoring decode result received outside scanning mode");
                    return;
                }
                let _ = self.enter_identifier_for_current_step(&raw, source);
            }
            WizardAction::ConfirmCurrentIdentifier => {
                let raw = self.current_identifier.clone();
                if raw.is_empty() {
                    return;
                }
                let _ = self.enter_identifier_for_current_step(&raw, EntrySource::Manual);
                self.scanning = false;
            }
            WizardAction::PreviousStep => {
                self.go_to_previous_step();
            }
            WizardAction::SetScanning(on) => {
                self.toggle_scanning(on);
            }
            WizardAction::ScannerFailed(cause) => {
                warn!("QR scanner error: {}", cause);
                self.push_notice(
                    "Scanner Error",
                    "Please try again or enter KFID manually",
                    NoticeVariant::Destructive,
                );
            }
            WizardAction::BeginSubmission => {
                self.submitting = true;
                self.scanning = false;
            }
            WizardAction::RegistrationSucceeded(result) => {
                info!("Registration complete for team {}", self.team_name);
                self.submitting = false;
                self.scanning = false;
                self.errors.clear();
                self.registered = Some(result);
            }
            WizardAction::RegistrationFailed(err) => {
                self.submitting = false;
                self.push_notice(err.notice_title(), &err.user_message(), NoticeVariant::Destructive);
            }
            WizardAction::DismissNotice(id) => {
                self.dismiss_notice(id);
            }
        }
    }

    /// Only the submission outcome and notice dismissal may land while a
    /// request is in flight; the wizard data must match what was sent.
    fn allowed_while_submitting(action: &WizardAction) -> bool {
        matches!(
            action,
            WizardAction::RegistrationSucceeded(_)
                | WizardAction::RegistrationFailed(_)
                | WizardAction::DismissNotice(_)
        )
    }

    fn set_step(&mut self, step: WizardStep) {
        debug!("Wizard step {:?} -> {:?}", self.current_step, step);
        self.current_step = step;
        if step.is_member_step() {
            self.current_identifier = self.identifier_for(step).unwrap_or_default().to_string();
        }
    }

    fn assign_slot(&mut self, slot: usize, identifier: String) {
        if self.identifiers.len() <= slot {
            self.identifiers.resize(slot + 1, String::new());
        }
        self.identifiers[slot] = identifier;
    }

    fn other_identifiers(&self, slot: usize) -> impl Iterator<Item = &str> {
        self.identifiers
            .iter()
            .enumerate()
            .filter(move |(index, id)| *index != slot && !id.is_empty())
            .map(|(_, id)| id.as_str())
    }

    fn push_notice(&mut self, title: &str, description: &str, variant: NoticeVariant) {
        self.notice_seq += 1;
        self.notice = Some(Notice {
            id: self.notice_seq,
            title: title.to_string(),
            description: description.to_string(),
            variant,
        });
    }

    fn dismiss_notice(&mut self, id: u64) {
        if self.notice.as_ref().is_some_and(|notice| notice.id == id) {
            self.notice = None;
        }
    }
}
