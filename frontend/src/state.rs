use std::rc::Rc;

use shared::history::History;
use shared::limits::{sanitize_title, DEFAULT_TITLE};
use shared::options::OptionRegistry;
use shared::spin::resolve_winner;
use yew::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Warning,
    Error,
}

/// One message surfaced near the input after a registry mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub text: String,
}

impl Feedback {
    fn success(text: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Success,
            text: text.into(),
        }
    }

    fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Warning,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Error,
            text: text.into(),
        }
    }
}

/// Everything the widget shows, in one value object with named fields.
/// Updated only through `WheelAction` transitions, which keeps the wheel
/// math decoupled from presentation toggles and makes every transition
/// testable without a DOM.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelState {
    pub registry: OptionRegistry,
    pub history: History,
    pub title: String,
    pub winner: Option<String>,
    pub show_confetti: bool,
    pub feedback: Option<Feedback>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WheelAction {
    AddInput(String),
    DeleteAt(usize),
    ResetOptions,
    ClearHistory,
    SetTitle(String),
    SpinResolved { end_rotation: f64 },
    HideConfetti,
    DismissFeedback,
}

impl WheelState {
    /// Fresh state, optionally hydrated from the URL query parameters.
    pub fn hydrated(options_param: Option<&str>, title_param: Option<&str>) -> Self {
        let registry = match options_param {
            Some(value) if !value.is_empty() => {
                OptionRegistry::from_query_value(value, Default::default())
            }
            _ => OptionRegistry::default(),
        };
        let title = title_param
            .map(sanitize_title)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());
        Self {
            registry,
            history: History::default(),
            title,
            winner: None,
            show_confetti: false,
            feedback: None,
        }
    }

    /// Applies one transition in place. `Reducible` wraps this; tests call
    /// it directly.
    pub fn apply(&mut self, action: WheelAction) {
        match action {
            WheelAction::AddInput(raw) => {
                // A comma in the input means a batch paste; otherwise it is
                // a single name.
                if raw.contains(',') {
                    let outcome = self.registry.add_batch(&raw);
                    let message = outcome.message();
                    self.feedback = Some(if outcome.is_full_success() {
                        Feedback::success(message)
                    } else if outcome.is_partial() {
                        Feedback::warning(message)
                    } else {
                        Feedback::error(message)
                    });
                } else {
                    match self.registry.add_single(&raw) {
                        Ok(label) => {
                            self.feedback =
                                Some(Feedback::success(format!("Added \"{}\"", label)));
                        }
                        Err(err) => {
                            self.feedback = Some(Feedback::error(err.message()));
                        }
                    }
                }
            }
            WheelAction::DeleteAt(index) => match self.registry.delete_at(index) {
                Ok(label) => {
                    self.feedback = Some(Feedback::success(format!("Removed \"{}\"", label)));
                }
                Err(err) => {
                    self.feedback = Some(Feedback::error(err.message()));
                }
            },
            WheelAction::ResetOptions => {
                self.registry.reset();
                self.winner = None;
                self.feedback = Some(Feedback::success("Cleared the wheel"));
            }
            WheelAction::ClearHistory => {
                self.history.clear();
            }
            WheelAction::SetTitle(raw) => {
                self.title = sanitize_title(&raw);
            }
            WheelAction::SpinResolved { end_rotation } => {
                // Resolution uses the option count as it stands right now;
                // mid-spin deletions shift which sector wins, and that is
                // the documented behavior.
                if let Some(index) = resolve_winner(end_rotation, self.registry.len()) {
                    if let Some(label) = self.registry.labels().get(index) {
                        let label = label.clone();
                        log::info!("winner: '{}' (sector {})", label, index);
                        self.history.record(&label);
                        self.winner = Some(label);
                        self.show_confetti = true;
                    }
                }
            }
            WheelAction::HideConfetti => {
                self.show_confetti = false;
            }
            WheelAction::DismissFeedback => {
                self.feedback = None;
            }
        }
    }
}

impl Reducible for WheelState {
    type Action = WheelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hydrated_empty() {
        let state = WheelState::hydrated(None, None);
        assert!(state.registry.is_empty());
        assert_eq!(state.title, DEFAULT_TITLE);
        assert!(state.winner.is_none());
    }

    #[test]
    fn test_hydrated_from_params() {
        let state = WheelState::hydrated(Some("Alice,Bob"), Some("  Homeroom 3B  "));
        assert_eq!(
            state.registry.labels(),
            ["Alice".to_string(), "Bob".to_string()]
        );
        assert_eq!(state.title, "Homeroom 3B");
    }

    #[test]
    fn test_add_input_single_success() {
        let mut state = WheelState::hydrated(None, None);
        state.apply(WheelAction::AddInput("Alice".to_string()));
        assert_eq!(state.registry.len(), 1);
        let feedback = state.feedback.expect("feedback after add");
        assert_eq!(feedback.kind, FeedbackKind::Success);
    }

    #[test]
    fn test_add_input_duplicate_reports_error() {
        let mut state = WheelState::hydrated(Some("Alice"), None);
        state.apply(WheelAction::AddInput("Alice".to_string()));
        assert_eq!(state.registry.len(), 1);
        assert_eq!(state.feedback.unwrap().kind, FeedbackKind::Error);
    }

    #[test]
    fn test_add_input_batch_partial_warns() {
        let mut state = WheelState::hydrated(Some("Bob"), None);
        state.apply(WheelAction::AddInput("Alice, Bob, Carol".to_string()));
        assert_eq!(state.registry.len(), 3);
        let feedback = state.feedback.expect("feedback after batch");
        assert_eq!(feedback.kind, FeedbackKind::Warning);
        assert!(feedback.text.contains("2 of 3"));
    }

    #[test]
    fn test_spin_resolved_records_winner() {
        let mut state = WheelState::hydrated(Some("A,B,C,D"), None);
        state.apply(WheelAction::SpinResolved { end_rotation: 0.0 });
        // Pointer offset of 90 degrees over four 90-degree sectors.
        assert_eq!(state.winner.as_deref(), Some("B"));
        assert_eq!(state.history.items(), ["B".to_string()]);
        assert!(state.show_confetti);
    }

    #[test]
    fn test_spin_resolved_on_empty_wheel_is_noop() {
        let mut state = WheelState::hydrated(None, None);
        state.apply(WheelAction::SpinResolved { end_rotation: 123.0 });
        assert!(state.winner.is_none());
        assert!(state.history.is_empty());
        assert!(!state.show_confetti);
    }

    #[test]
    fn test_reset_clears_winner_but_not_history() {
        let mut state = WheelState::hydrated(Some("A,B"), None);
        state.apply(WheelAction::SpinResolved { end_rotation: 0.0 });
        state.apply(WheelAction::ResetOptions);
        assert!(state.registry.is_empty());
        assert!(state.winner.is_none());
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn test_dismiss_and_hide() {
        let mut state = WheelState::hydrated(Some("A,B"), None);
        state.apply(WheelAction::SpinResolved { end_rotation: 0.0 });
        state.apply(WheelAction::HideConfetti);
        state.apply(WheelAction::DismissFeedback);
        assert!(!state.show_confetti);
        assert!(state.feedback.is_none());
    }
}
