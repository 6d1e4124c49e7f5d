use crate::commands::{CmdMessage, CmdResult, EMPTY_MESSAGE_ERROR};
use crate::error::Result;
use crate::state::ViewState;
use crate::store::{KeyValueStore, StorageKeys};
use tracing::debug;

/// Opens the message editor, seeding the draft from the committed message.
pub fn begin_edit(state: &mut ViewState) -> CmdResult {
    state.message.draft = state.message.committed.clone();
    state.message.error.clear();
    state.message.editing = true;
    CmdResult::default()
}

pub fn edit_draft(state: &mut ViewState, text: impl Into<String>) -> CmdResult {
    state.message.draft = text.into();
    CmdResult::default()
}

/// Saves `draft` as the new message. A whitespace-only draft is rejected and the
/// editor stays open.
pub fn submit<S: KeyValueStore>(
    state: &mut ViewState,
    store: &S,
    keys: &StorageKeys,
    draft: impl Into<String>,
) -> Result<CmdResult> {
    let draft = draft.into();
    state.message.draft = draft.clone();

    if draft.trim().is_empty() {
        state.message.error = EMPTY_MESSAGE_ERROR.to_string();
        return Ok(CmdResult::rejected(EMPTY_MESSAGE_ERROR));
    }

    state.message.committed = draft;
    state.message.error.clear();
    state.message.editing = false;
    debug!(len = state.message.committed.len(), "message saved");

    store.set(&keys.message, &state.message.committed)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Message saved"));
    Ok(result)
}
