//! Drei-Punkt-Bogen-Werkzeug: Start → zweites Bogen-Ende → Durchgangspunkt.
//!
//! Nach dem ersten Klick folgt eine Sehnen-Vorschau vom Startpunkt zum Cursor,
//! nach dem zweiten der Umkreis-Bogen durch den Cursor. Der dritte Klick
//! schließt den Bogen ab; die Sitzung endet danach.

mod lifecycle;
mod preview;
mod state;

pub use state::{advance, ArcTool, ToolPhase};
