use serde_json::Value;

use crate::domain::replay::Message;
use crate::view_state::ViewState;

pub const LOADING_TEXT: &str = "Fetching data...";
pub const EMPTY_TITLE: &str = "No data found for the selected parameters.";
pub const EMPTY_HINT: &str = "Note: Free tier only has access to the first day of each month.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Idle,
    Loading,
    Success,
    Error,
}

impl StatusKind {
    /// CSS classes of the status region
    pub fn css_class(self) -> &'static str {
        match self {
            StatusKind::Idle => "status",
            StatusKind::Loading => "status loading",
            StatusKind::Success => "status success",
            StatusKind::Error => "status error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

/// One rendered message: 1-based ordinal, header and pretty-printed payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBlock {
    pub ordinal: usize,
    pub header: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsContent {
    Nothing,
    Empty,
    Blocks(Vec<MessageBlock>),
}

/// Turns a [`ViewState`] into what the page shows
pub struct ReplayPresenter;

impl ReplayPresenter {
    pub fn status(state: &ViewState) -> StatusLine {
        match state {
            ViewState::Idle => StatusLine {
                kind: StatusKind::Idle,
                text: String::new(),
            },
            ViewState::Loading => StatusLine {
                kind: StatusKind::Loading,
                text: LOADING_TEXT.to_string(),
            },
            ViewState::Success { count, .. } => StatusLine {
                kind: StatusKind::Success,
                text: format!("✓ Successfully retrieved {} messages", count),
            },
            ViewState::SuccessEmpty => StatusLine {
                kind: StatusKind::Success,
                text: "✓ Successfully retrieved 0 messages".to_string(),
            },
            ViewState::Error(message) => StatusLine {
                kind: StatusKind::Error,
                text: format!("✗ Error: {}", message),
            },
        }
    }

    pub fn results(state: &ViewState) -> ResultsContent {
        match state {
            ViewState::Success { .. } => ResultsContent::Blocks(
                state
                    .messages()
                    .iter()
                    .enumerate()
                    .map(|(index, message)| Self::block(index, message))
                    .collect(),
            ),
            ViewState::SuccessEmpty => ResultsContent::Empty,
            ViewState::Idle | ViewState::Loading | ViewState::Error(_) => ResultsContent::Nothing,
        }
    }

    fn block(index: usize, message: &Message) -> MessageBlock {
        MessageBlock {
            ordinal: index + 1,
            header: format!("Message #{} - {}", index + 1, message.timestamp),
            body: pretty_json(&message.data),
        }
    }
}

/// Largest integer a JS number holds exactly
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Two-space indented JSON, keys in received order. Integral floats print
/// without a fraction (`1.0` as `1`), the way a browser stringifies them.
pub fn pretty_json(value: &Value) -> String {
    let value = integral_floats_as_integers(value);
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}

fn integral_floats_as_integers(value: &Value) -> Value {
    match value {
        Value::Number(n) if n.is_f64() => n
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER)
            .map(|f| Value::from(f as i64))
            .unwrap_or_else(|| value.clone()),
        Value::Array(items) => Value::Array(items.iter().map(integral_floats_as_integers).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(key, field)| (key.clone(), integral_floats_as_integers(field)))
                .collect(),
        ),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn two_messages() -> Vec<Message> {
        vec![
            Message { timestamp: "t1".into(), data: json!({"a": 1}) },
            Message { timestamp: "t2".into(), data: json!({"b": 2}) },
        ]
    }

    #[test]
    fn blocks_are_numbered_in_response_order() {
        let state = ViewState::from_success(2, two_messages());
        let ResultsContent::Blocks(blocks) = ReplayPresenter::results(&state) else {
            panic!("expected blocks");
        };
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].header, "Message #1 - t1");
        assert_eq!(blocks[1].header, "Message #2 - t2");
        assert_eq!(blocks[0].body, "{\n  \"a\": 1\n}");
        assert_eq!(blocks[1].ordinal, 2);
    }

    #[test]
    fn integral_floats_print_like_the_browser() {
        let value: Value =
            serde_json::from_str(r#"{"price": 97000.0, "size": 0.25, "levels": [[1.0, -0.0]]}"#)
                .unwrap();
        assert_eq!(
            pretty_json(&value),
            "{\n  \"price\": 97000,\n  \"size\": 0.25,\n  \"levels\": [\n    [\n      1,\n      0\n    ]\n  ]\n}"
        );
    }

    #[test]
    fn idle_state_shows_nothing() {
        let idle = ReplayPresenter::status(&ViewState::Idle);
        assert_eq!(idle.kind.css_class(), "status");
        assert!(idle.text.is_empty());
        assert_eq!(ReplayPresenter::results(&ViewState::Idle), ResultsContent::Nothing);
    }

    #[test]
    fn status_lines_per_state() {
        let loading = ReplayPresenter::status(&ViewState::Loading);
        assert_eq!(loading.kind.css_class(), "status loading");
        assert_eq!(loading.text, "Fetching data...");

        let success = ReplayPresenter::status(&ViewState::from_success(2, two_messages()));
        assert_eq!(success.text, "✓ Successfully retrieved 2 messages");

        let error = ReplayPresenter::status(&ViewState::Error("boom".into()));
        assert_eq!(error.kind, StatusKind::Error);
        assert_eq!(error.text, "✗ Error: boom");
    }

    #[test]
    fn empty_and_error_states_render_no_blocks() {
        assert_eq!(ReplayPresenter::results(&ViewState::SuccessEmpty), ResultsContent::Empty);
        assert_eq!(
            ReplayPresenter::results(&ViewState::Error("x".into())),
            ResultsContent::Nothing
        );
        assert_eq!(ReplayPresenter::results(&ViewState::Loading), ResultsContent::Nothing);
    }

    #[test]
    fn pretty_json_preserves_key_order() {
        let value: Value = serde_json::from_str(r#"{"z": 1, "a": [1, 2]}"#).unwrap();
        assert_eq!(pretty_json(&value), "{\n  \"z\": 1,\n  \"a\": [\n    1,\n    2\n  ]\n}");
    }
}
