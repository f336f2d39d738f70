//! Completions of asynchronous host operations
//!
//! Anything that edits the buffer here works against the buffer and the
//! selection as they are now, not as they were when the operation started.

use crate::commands::Cmd;
use crate::editable::EditCommand;
use crate::messages::IoMsg;
use crate::session::Session;
use crate::toolbar::image_markdown;

const COPY_SUCCEEDED: &str = "Content copied to clipboard!";
const COPY_FAILED: &str = "Copy failed, please copy manually.";
const PASTE_FAILED: &str = "Paste failed, please check clipboard permissions.";
const NOT_AN_IMAGE: &str = "Please choose an image file!";

pub fn update_io(session: &mut Session, msg: IoMsg) -> Option<Cmd> {
    match msg {
        IoMsg::DiagramRendered {
            revision,
            slot,
            result,
        } => {
            // Skip if the buffer has changed since the diagram was requested
            if revision != session.revision {
                tracing::debug!(
                    "Discarding stale diagram: revision {} != current {}",
                    revision,
                    session.revision
                );
                return None;
            }

            if !session.view.resolve_diagram(slot, result) {
                tracing::warn!("Diagram result for unknown slot {}", slot);
                return None;
            }
            Some(Cmd::PublishView(session.view.clone()))
        }

        IoMsg::ClipboardRead(Ok(text)) => {
            if text.is_empty() {
                return None;
            }
            Some(session.apply_edit(&EditCommand::insert(text)))
        }
        IoMsg::ClipboardRead(Err(e)) => {
            tracing::warn!("Clipboard read failed: {}", e);
            session.dialogs.alert(PASTE_FAILED);
            None
        }

        IoMsg::ClipboardWritten(result) => {
            match result {
                Ok(()) => session.dialogs.alert(COPY_SUCCEEDED),
                Err(e) => {
                    tracing::warn!("Clipboard write failed: {}", e);
                    session.dialogs.alert(COPY_FAILED);
                }
            }
            None
        }

        IoMsg::ImageFileRead {
            file_name,
            mime_type,
            data_url,
        } => {
            if !mime_type.starts_with("image/") {
                tracing::debug!("Rejected non-image upload {} ({})", file_name, mime_type);
                session.dialogs.alert(NOT_AN_IMAGE);
                return None;
            }
            let command = EditCommand::insert(image_markdown(&file_name, &data_url));
            Some(session.apply_edit(&command))
        }
    }
}
