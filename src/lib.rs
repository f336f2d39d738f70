//! markpane - Elm-style Markdown editor core
//!
//! A document session keeps one Markdown buffer, re-renders the preview and
//! outline on every change, keeps the editor and preview panes scrolled
//! together and saves the buffer after a quiet period. Hosts drive it with
//! [`Msg`]s and execute the returned [`Cmd`]s.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod host;
pub mod markdown;
pub mod messages;
pub mod outline;
pub mod persistence;
pub mod sample;
pub mod scroll_sync;
pub mod session;
pub mod storage;
pub mod timer;
pub mod toolbar;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::SessionConfig;
pub use markdown::RenderedView;
pub use messages::{IoMsg, Msg};
pub use session::{Session, SessionBuilder};
pub use toolbar::ToolbarAction;
pub use update::update;
