//! Editor dialog lifecycle.
//!
//! ```text
//! Hidden ──Open*──→ Open{Editing} ──Submitted──→ Open{Submitting}
//!                        ↑                            │
//!                        └──────SubmitFailed──────────┤
//! Hidden ←─────────────SubmitSucceeded────────────────┘
//! ```

use std::marker::PhantomData;

use crate::store::CrudOp;
use crate::ui::form::EditForm;
use crate::ui::mvi::{Intent, Reducer, UiState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPhase {
    Editing,
    /// A create or update is in flight; input is ignored until it settles.
    Submitting,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditorState<F> {
    Hidden,
    Open {
        form: F,
        /// Identifier of the entity being edited; `None` in create mode.
        editing: Option<String>,
        focused: usize,
        phase: EditorPhase,
        error: Option<String>,
    },
}

impl<F> Default for EditorState<F> {
    fn default() -> Self {
        EditorState::Hidden
    }
}

impl<F: EditForm> UiState for EditorState<F> {}

impl<F: EditForm> EditorState<F> {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(
            self,
            Self::Open {
                phase: EditorPhase::Submitting,
                ..
            }
        )
    }

    pub fn form(&self) -> Option<&F> {
        match self {
            Self::Open { form, .. } => Some(form),
            Self::Hidden => None,
        }
    }

    pub fn editing(&self) -> Option<&str> {
        match self {
            Self::Open { editing, .. } => editing.as_deref(),
            Self::Hidden => None,
        }
    }

    pub fn focused(&self) -> usize {
        match self {
            Self::Open { focused, .. } => *focused,
            Self::Hidden => 0,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Open { error, .. } => error.as_deref(),
            Self::Hidden => None,
        }
    }

    /// The request a submit from this editor issues.
    pub fn submit_op(&self) -> CrudOp {
        match self.editing() {
            Some(_) => CrudOp::Update,
            None => CrudOp::Create,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditorIntent<F> {
    OpenCreate { form: F },
    OpenEdit { id: String, form: F },
    Close,
    FocusNext,
    FocusPrev,
    Input(char),
    Backspace,
    /// Local validation failed; nothing was sent.
    ValidationFailed { message: String },
    Submitted,
    SubmitSucceeded,
    SubmitFailed { message: String },
}

impl<F: EditForm> Intent for EditorIntent<F> {}

pub struct EditorReducer<F>(PhantomData<F>);

impl<F: EditForm> Reducer for EditorReducer<F> {
    type State = EditorState<F>;
    type Intent = EditorIntent<F>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EditorIntent::OpenCreate { form } => open(form, None),
            EditorIntent::OpenEdit { id, form } => open(form, Some(id)),
            EditorIntent::Close => EditorState::Hidden,
            EditorIntent::SubmitSucceeded => match state {
                EditorState::Open {
                    phase: EditorPhase::Submitting,
                    ..
                } => EditorState::Hidden,
                other => other,
            },
            EditorIntent::SubmitFailed { message } => match state {
                EditorState::Open {
                    form,
                    editing,
                    focused,
                    phase: EditorPhase::Submitting,
                    ..
                } => EditorState::Open {
                    form,
                    editing,
                    focused,
                    phase: EditorPhase::Editing,
                    error: Some(message),
                },
                other => other,
            },
            intent => match state {
                EditorState::Open {
                    form,
                    editing,
                    focused,
                    phase: EditorPhase::Editing,
                    error,
                } => edit(form, editing, focused, error, intent),
                other => other,
            },
        }
    }
}

fn open<F: EditForm>(form: F, editing: Option<String>) -> EditorState<F> {
    EditorState::Open {
        form,
        editing,
        focused: 0,
        phase: EditorPhase::Editing,
        error: None,
    }
}

/// Transitions that only apply while the user is editing.
fn edit<F: EditForm>(
    form: F,
    editing: Option<String>,
    focused: usize,
    error: Option<String>,
    intent: EditorIntent<F>,
) -> EditorState<F> {
    let field_count = F::fields().len().max(1);
    let (form, focused, phase, error) = match intent {
        EditorIntent::FocusNext => (form, (focused + 1) % field_count, EditorPhase::Editing, error),
        EditorIntent::FocusPrev => (
            form,
            (focused + field_count - 1) % field_count,
            EditorPhase::Editing,
            error,
        ),
        EditorIntent::Input(ch) => {
            let (form, error) = change_focused(form, focused, error, |value| value.push(ch));
            (form, focused, EditorPhase::Editing, error)
        }
        EditorIntent::Backspace => {
            let (form, error) = change_focused(form, focused, error, |value| {
                value.pop();
            });
            (form, focused, EditorPhase::Editing, error)
        }
        EditorIntent::ValidationFailed { message } => {
            (form, focused, EditorPhase::Editing, Some(message))
        }
        EditorIntent::Submitted => (form, focused, EditorPhase::Submitting, None),
        _ => (form, focused, EditorPhase::Editing, error),
    };

    EditorState::Open {
        form,
        editing,
        focused,
        phase,
        error,
    }
}

fn change_focused<F: EditForm>(
    form: F,
    focused: usize,
    error: Option<String>,
    change: impl FnOnce(&mut String),
) -> (F, Option<String>) {
    let Some(field) = F::fields().get(focused) else {
        return (form, error);
    };
    let mut value = form.value(field.path).unwrap_or_default().to_string();
    change(&mut value);
    match form.with_value(field.path, value) {
        Ok(next) => (next, error),
        Err(err) => (form, Some(err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::form::RoomForm;

    type Editor = EditorReducer<RoomForm>;

    fn typed(text: &str) -> EditorState<RoomForm> {
        text.chars().fold(
            Editor::reduce(
                EditorState::default(),
                EditorIntent::OpenCreate {
                    form: RoomForm::default(),
                },
            ),
            |state, ch| Editor::reduce(state, EditorIntent::Input(ch)),
        )
    }

    #[test]
    fn typing_edits_the_focused_field() {
        let state = typed("c12");
        let state = Editor::reduce(state, EditorIntent::Backspace);
        assert_eq!(state.form().map(|f| f.cinema_id.as_str()), Some("c1"));

        let state = Editor::reduce(state, EditorIntent::FocusNext);
        let state = Editor::reduce(state, EditorIntent::Input('2'));
        assert_eq!(state.form().map(|f| f.hall_number.as_str()), Some("2"));
        assert_eq!(state.focused(), 1);
    }

    #[test]
    fn focus_wraps_around() {
        let state = Editor::reduce(typed(""), EditorIntent::FocusPrev);
        assert_eq!(state.focused(), 2);
        let state = Editor::reduce(state, EditorIntent::FocusNext);
        assert_eq!(state.focused(), 0);
    }

    #[test]
    fn failed_submit_keeps_dialog_open_with_error() {
        let state = Editor::reduce(typed("c1"), EditorIntent::Submitted);
        assert!(state.is_submitting());

        // Input is ignored while the request is in flight.
        let state = Editor::reduce(state, EditorIntent::Input('x'));
        assert_eq!(state.form().map(|f| f.cinema_id.as_str()), Some("c1"));

        let state = Editor::reduce(
            state,
            EditorIntent::SubmitFailed {
                message: "Failed to add room".into(),
            },
        );
        assert!(state.is_visible());
        assert!(!state.is_submitting());
        assert_eq!(state.error(), Some("Failed to add room"));
        assert_eq!(state.form().map(|f| f.cinema_id.as_str()), Some("c1"));
    }

    #[test]
    fn successful_submit_closes() {
        let state = Editor::reduce(typed("c1"), EditorIntent::Submitted);
        let state = Editor::reduce(state, EditorIntent::SubmitSucceeded);
        assert_eq!(state, EditorState::Hidden);
    }

    #[test]
    fn settlement_without_submit_is_ignored() {
        let state = Editor::reduce(typed("c1"), EditorIntent::SubmitSucceeded);
        assert!(state.is_visible());
    }

    #[test]
    fn validation_failure_stays_editing() {
        let state = Editor::reduce(
            typed("c1"),
            EditorIntent::ValidationFailed {
                message: "Hall number must be a number".into(),
            },
        );
        assert!(!state.is_submitting());
        assert_eq!(state.error(), Some("Hall number must be a number"));
    }

    #[test]
    fn edit_mode_submits_update() {
        let state = Editor::reduce(
            EditorState::default(),
            EditorIntent::OpenEdit {
                id: "r1".into(),
                form: RoomForm::default(),
            },
        );
        assert_eq!(state.editing(), Some("r1"));
        assert_eq!(state.submit_op(), CrudOp::Update);
        assert_eq!(typed("").submit_op(), CrudOp::Create);
    }
}
