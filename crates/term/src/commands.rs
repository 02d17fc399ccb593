//! Escape sequences crossterm has no exact command for.
//!
//! crossterm's `MoveTo` emits `ESC[{row+1};{col+1}H` from unsigned, 0-based
//! coordinates. The canvas sends the grid address verbatim through the `f`
//! form instead, including out-of-range values.

use std::fmt;

use crossterm::Command;

/// `ESC[?47h`: save the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveScreen;

impl Command for SaveScreen {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1B[?47h")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        Err(unsupported())
    }
}

/// `ESC[?47l`: restore the screen saved by [`SaveScreen`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestoreScreen;

impl Command for RestoreScreen {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1B[?47l")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        Err(unsupported())
    }
}

/// `ESC[H`: cursor to the home cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorHome;

impl Command for CursorHome {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1B[H")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        Err(unsupported())
    }
}

/// `ESC[{row};{col}f`: cursor to a grid cell, values passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveToCell {
    pub col: i32,
    pub row: i32,
}

impl Command for MoveToCell {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(f, "\x1B[{};{}f", self.row, self.col)
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        Err(unsupported())
    }
}

#[cfg(windows)]
fn unsupported() -> std::io::Error {
    std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "ANSI escape sequences are required",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::QueueableCommand;

    fn encode(cmd: impl Command) -> String {
        let mut out: Vec<u8> = Vec::new();
        out.queue(cmd).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn sequences_are_bit_exact() {
        assert_eq!(encode(SaveScreen), "\x1B[?47h");
        assert_eq!(encode(RestoreScreen), "\x1B[?47l");
        assert_eq!(encode(CursorHome), "\x1B[H");
        assert_eq!(encode(MoveToCell { col: 93, row: 50 }), "\x1B[50;93f");
    }

    #[test]
    fn move_passes_out_of_range_cells_through() {
        assert_eq!(encode(MoveToCell { col: -3, row: 0 }), "\x1B[0;-3f");
    }

    #[test]
    fn builtin_sequences_match_expected_bytes() {
        use crossterm::{cursor, terminal};
        assert_eq!(encode(cursor::Hide), "\x1B[?25l");
        assert_eq!(encode(cursor::Show), "\x1B[?25h");
        assert_eq!(encode(terminal::EnterAlternateScreen), "\x1B[?1049h");
        assert_eq!(encode(terminal::LeaveAlternateScreen), "\x1B[?1049l");
        assert_eq!(
            encode(terminal::Clear(terminal::ClearType::All)),
            "\x1B[2J"
        );
    }
}
