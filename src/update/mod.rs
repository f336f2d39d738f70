//! Update functions for the Elm-style architecture
//!
//! All session state transformations flow through these functions.

mod document;
mod io;
mod scroll;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::session::Session;

pub use document::{update_document, update_toolbar};
pub use io::update_io;
pub use scroll::update_scroll;

/// Main update function - dispatches to sub-handlers
pub fn update(session: &mut Session, msg: Msg) -> Option<Cmd> {
    let cmd = match msg {
        Msg::BufferChanged(_) | Msg::InsertTab => update_document(session, msg),
        Msg::Toolbar(action) => update_toolbar(session, action),
        Msg::Scrolled { .. } | Msg::ToggleScrollSync => update_scroll(session, msg),
        Msg::Tick => update_tick(session),
        Msg::Io(io_msg) => update_io(session, io_msg),
    };

    cmd.filter(|cmd| !matches!(cmd, Cmd::None))
}

/// Fire due timers: the debounced save and scroll suppression resets
fn update_tick(session: &mut Session) -> Option<Cmd> {
    let now = session.now();

    if let Some(text) = session.persistence.poll(now) {
        session.save(&text);
    }
    session.scroll_sync.poll(now);

    None
}
