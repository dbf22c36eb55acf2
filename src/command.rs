//! The commands understood by the downstream engine and how each one is
//! written on the wire.

use std::fmt;

/// A rectangle entity as requested by an `ADD RECT` command.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Rect {
    /// Identity of the entity. The engine numbers entities by arrival order,
    /// so the id is not written on the wire.
    pub id: i64,
    /// Left edge
    pub x: i64,
    /// Top edge
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

/// One line of a command stream.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Command {
    /// Adds a rectangle to the engine's scene
    AddRect(Rect),
    /// The sentinel, the engine stops reading once it sees this
    Quit,
}

impl Command {
    /// Returns true if this is the end of stream sentinel.
    pub fn is_sentinel(&self) -> bool {
        *self == Command::Quit
    }
}

/// Writes the command exactly as the engine expects to read it, without the
/// trailing newline.
/// `ADD RECT x y width height` for rectangles
/// `QUIT` for the sentinel
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Command::AddRect(r) => {
                write!(f, "ADD RECT {} {} {} {}", r.x, r.y, r.width, r.height)
            }
            Command::Quit => write!(f, "QUIT"),
        }
    }
}
