//! Text editing primitives for the document buffer.
//!
//! - [`SelectionRange`]: char-offset selection captured from the editor surface
//! - [`EditCommand`]: insert or wrap request produced by toolbar actions
//! - [`apply`]: pure buffer surgery returning the new text and selection
//!
//! Nothing here touches a widget. The session reads the selection from the
//! editor surface, calls [`apply`], then writes the result back.

mod mutation;
mod selection;

pub use mutation::{apply, EditCommand, EditKind, Mutation};
pub use selection::SelectionRange;
