use crate::domain::replay::Message;

/// What the status and results regions currently show.
///
/// Exactly one variant is active; every invocation replaces the previous one.
/// `Idle` only holds until the first invocation starts.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Success { count: u64, messages: Vec<Message> },
    SuccessEmpty,
    Error(String),
}

impl ViewState {
    /// Build the state for a successful answer.
    pub fn from_success(count: u64, messages: Vec<Message>) -> Self {
        if count == 0 {
            ViewState::SuccessEmpty
        } else {
            ViewState::Success { count, messages }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn messages(&self) -> &[Message] {
        match self {
            ViewState::Success { messages, .. } => messages,
            _ => &[],
        }
    }
}
