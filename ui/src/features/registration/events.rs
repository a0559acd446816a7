//! Registration lifecycle events and event handling
//!
//! Events carry plain data only. Turning a `Registered` event into something
//! visible is the presentation layer's job.

use tracing::{info, warn};

/// Events that can occur while submitting a team
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationEvent {
    Submitted { team_name: String, members: usize },
    Registered { team_id: String, password: String },
    Failed { message: String, retryable: bool },
}

/// Event handler for registration events
pub trait RegistrationEventHandler {
    fn handle_event(&self, event: RegistrationEvent);
}

/// Logs events; never writes the issued password
pub struct LoggingEventHandler;

impl RegistrationEventHandler for LoggingEventHandler {
    fn handle_event(&self, event: RegistrationEvent) {
        match event {
            RegistrationEvent::Submitted { team_name, members } => {
                info!("[Event] Registration submitted for '{}' with {} members", team_name, members);
            }
            RegistrationEvent::Registered { team_id, .. } => {
                info!("[Event] Team registered: {}", team_id);
            }
            RegistrationEvent::Failed { message, retryable } => {
                warn!("[Event] Registration failed (retryable: {}): {}", retryable, message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Recorder(RefCell<Vec<RegistrationEvent>>);

    impl RegistrationEventHandler for Recorder {
        fn handle_event(&self, event: RegistrationEvent) {
            self.0.borrow_mut().push(event);
        }
    }

    #[test]
    fn test_handlers_are_usable_as_trait_objects() {
        let recorder = Recorder(RefCell::new(Vec::new()));
        let handlers: [&dyn RegistrationEventHandler; 2] = [&LoggingEventHandler, &recorder];

        let event = RegistrationEvent::Failed {
            message: "Please check your connection and try again".to_string(),
            retryable: true,
        };
        for handler in handlers {
            handler.handle_event(event.clone());
        }

        assert_eq!(*recorder.0.borrow(), vec![event]);
    }
}
