pub const OTP_LEN: usize = 6;

/// Six one-digit input cells plus the focused index.
///
/// Mirrors a row of single-character inputs: a cell holds at most one
/// digit, typing advances focus, backspace on an empty cell retreats it,
/// and paste replaces the whole row only when the clipboard is exactly six
/// digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpBuffer {
    cells: [Option<char>; OTP_LEN],
    focus: usize,
}

impl Default for OtpBuffer {
    fn default() -> Self {
        OtpBuffer {
            cells: [None; OTP_LEN],
            focus: 0,
        }
    }
}

impl OtpBuffer {
    pub fn new() -> Self {
        OtpBuffer::default()
    }

    /// Write one cell. `raw` is whatever the input produced: a single digit
    /// lands in the cell, the empty string clears it, everything else is
    /// dropped. Writing a digit into a filled cell is also dropped; the
    /// cell must be cleared first. Returns whether the buffer changed.
    pub fn set_digit(&mut self, index: usize, raw: &str) -> bool {
        if index >= OTP_LEN {
            return false;
        }

        if raw.is_empty() {
            self.cells[index] = None;
            return true;
        }

        let mut chars = raw.chars();
        let digit = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_digit() => c,
            _ => return false,
        };

        if self.cells[index].is_some() {
            return false;
        }

        self.cells[index] = Some(digit);
        if index < OTP_LEN - 1 {
            self.focus = index + 1;
        }
        true
    }

    /// Backspace pressed in a cell. An empty cell sends focus back one
    /// position; the previous cell keeps its digit. A filled cell is
    /// cleared by the input itself, which reaches us as `set_digit(i, "")`.
    pub fn backspace(&mut self, index: usize) {
        if index < OTP_LEN && index > 0 && self.cells[index].is_none() {
            self.focus = index - 1;
        }
    }

    /// Paste into the row. Accepts exactly six digits after trimming
    /// surrounding whitespace; anything else leaves the buffer untouched.
    /// Returns whether the paste was applied.
    pub fn paste(&mut self, raw: &str) -> bool {
        let trimmed = raw.trim();
        if trimmed.len() != OTP_LEN || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }

        for (cell, digit) in self.cells.iter_mut().zip(trimmed.chars()) {
            *cell = Some(digit);
        }
        self.focus = OTP_LEN - 1;
        true
    }

    pub fn clear(&mut self) {
        self.cells = [None; OTP_LEN];
        self.focus = 0;
    }

    /// Concatenation of the filled cells, gaps skipped.
    pub fn value(&self) -> String {
        self.cells.iter().flatten().collect()
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn digit(&self, index: usize) -> Option<char> {
        self.cells.get(index).copied().flatten()
    }
}
