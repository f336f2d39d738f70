//! Scroll synchronization between the panes

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::session::Session;

pub fn update_scroll(session: &mut Session, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Scrolled { pane, fraction } => {
            if !session.scroll_sync_enabled {
                return None;
            }

            let now = session.now();
            let target = session.scroll_sync.on_scroll(pane, fraction, now)?;
            session.scroll_pane_to(target.pane, target.fraction);

            Some(Cmd::ScrollTo {
                pane: target.pane,
                fraction: target.fraction,
            })
        }
        Msg::ToggleScrollSync => {
            session.scroll_sync_enabled = !session.scroll_sync_enabled;
            if !session.scroll_sync_enabled {
                session.scroll_sync.reset();
            }
            tracing::info!(
                "Scroll sync: {}",
                if session.scroll_sync_enabled {
                    "enabled"
                } else {
                    "disabled"
                }
            );
            None
        }
        _ => None,
    }
}
