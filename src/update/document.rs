//! Buffer edits and toolbar actions

use std::time::{SystemTime, UNIX_EPOCH};

use crate::commands::Cmd;
use crate::editable::EditCommand;
use crate::messages::Msg;
use crate::session::Session;
use crate::toolbar::{image_markdown, ToolbarAction};

/// Indentation inserted by the Tab key
const TAB_TEXT: &str = "  ";

const CLEAR_CONFIRMATION: &str = "Clear all content? This cannot be undone.";
const IMAGE_URL_PROMPT: &str = "Image URL:";
const IMAGE_ALT_PROMPT: &str = "Image description (optional):";
const DEFAULT_IMAGE_ALT: &str = "image";

/// Handle direct edits of the buffer
pub fn update_document(session: &mut Session, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::BufferChanged(text) => {
            if text == session.text {
                return None;
            }
            Some(session.replace_text(text))
        }
        Msg::InsertTab => Some(session.apply_edit(&EditCommand::insert(TAB_TEXT))),
        _ => None,
    }
}

/// Handle a toolbar button
pub fn update_toolbar(session: &mut Session, action: ToolbarAction) -> Option<Cmd> {
    if let Some(command) = action.edit_command() {
        return Some(session.apply_edit(&command));
    }

    match action {
        ToolbarAction::ImageUrl => {
            let url = session
                .dialogs
                .prompt_text(IMAGE_URL_PROMPT, "")
                .filter(|url| !url.trim().is_empty())?;
            let alt = session
                .dialogs
                .prompt_text(IMAGE_ALT_PROMPT, DEFAULT_IMAGE_ALT)
                .unwrap_or_else(|| DEFAULT_IMAGE_ALT.to_string());
            let command = EditCommand::insert(image_markdown(&alt, url.trim()));
            Some(session.apply_edit(&command))
        }
        ToolbarAction::ImageUpload => Some(Cmd::PickImageFile),
        ToolbarAction::Copy => Some(Cmd::WriteClipboard(session.text.clone())),
        ToolbarAction::Paste => Some(Cmd::ReadClipboard),
        ToolbarAction::Clear => {
            if !session.dialogs.confirm(CLEAR_CONFIRMATION) {
                return None;
            }
            if let Err(e) = session.storage.clear() {
                tracing::warn!("Failed to clear stored document: {}", e);
            }
            tracing::info!("Document cleared");
            Some(session.replace_text(String::new()))
        }
        ToolbarAction::Download => Some(Cmd::Download {
            file_name: download_file_name(),
            contents: session.text.clone(),
        }),
        _ => None,
    }
}

/// `markdown-<unix millis>.md`
fn download_file_name() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("markdown-{}.md", millis)
}
