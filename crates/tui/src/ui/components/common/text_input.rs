//! UTF-8 safe single-line text buffer with cursor management.
//!
//! Holds only the editing primitives; tokenization and suggestion logic live
//! in the selector field state that wraps it.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextInputState {
    /// The underlying text buffer
    input: String,
    /// Cursor byte index into `input` (always on a UTF-8 boundary)
    cursor: usize,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer seeded with `input` and the cursor at its end.
    pub fn with_input(input: impl Into<String>) -> Self {
        let input = input.into();
        let cursor = input.len();
        Self { input, cursor }
    }

    // ----- Getters -----
    pub fn input(&self) -> &str {
        &self.input
    }
    pub fn cursor(&self) -> usize {
        self.cursor
    }
    pub fn is_cursor_at_end(&self) -> bool {
        self.cursor == self.input.len()
    }
    /// Text before the cursor; used to place the terminal cursor.
    pub fn text_before_cursor(&self) -> &str {
        &self.input[..self.cursor]
    }

    // ----- Setters -----

    /// Replace the buffer. The cursor is clamped back onto a char boundary.
    pub fn set_input<S: Into<String>>(&mut self, s: S) {
        self.input = s.into();
        let mut cursor = self.cursor.min(self.input.len());
        while !self.input.is_char_boundary(cursor) {
            cursor -= 1;
        }
        self.cursor = cursor;
    }

    pub fn move_to_end(&mut self) {
        self.cursor = self.input.len();
    }

    pub fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    // ----- Editing primitives (UTF-8 safe) -----

    /// Move cursor one Unicode scalar to the left.
    pub fn move_left(&mut self) {
        if let Some(prev) = self.input[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    /// Move cursor one Unicode scalar to the right.
    pub fn move_right(&mut self) {
        if let Some(next) = self.input[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    /// Insert a char at the cursor.
    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Remove the char immediately before the cursor. Returns whether anything changed.
    pub fn backspace(&mut self) -> bool {
        let Some(prev) = self.input[..self.cursor].chars().next_back() else {
            return false;
        };
        let start = self.cursor - prev.len_utf8();
        self.input.drain(start..self.cursor);
        self.cursor = start;
        true
    }

    /// Remove the char at the cursor. Returns whether anything changed.
    pub fn delete(&mut self) -> bool {
        let Some(next) = self.input[self.cursor..].chars().next() else {
            return false;
        };
        self.input.drain(self.cursor..self.cursor + next.len_utf8());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_move_insert_backspace() {
        let mut st = TextInputState::with_input("h🙂llo"); // emoji is 4 bytes
        st.move_to_start();
        st.move_right(); // between h and 🙂
        st.insert_char('e');
        assert_eq!(st.input(), "he🙂llo");
        st.move_right(); // step over 🙂
        assert!(st.backspace()); // delete 🙂
        assert_eq!(st.input(), "hello");
        st.move_left();
        st.backspace();
        assert_eq!(st.input(), "ello");
    }

    #[test]
    fn edits_at_the_edges_are_noops() {
        let mut st = TextInputState::with_input("ab");
        assert!(!st.delete());
        st.move_to_start();
        assert!(!st.backspace());
        st.move_left();
        assert_eq!(st.cursor(), 0);
        assert!(st.delete());
        assert_eq!(st.input(), "b");
    }

    #[test]
    fn set_input_keeps_cursor_on_char_boundary() {
        let mut st = TextInputState::with_input("$string");
        st.set_input("é");
        assert_eq!(st.cursor(), 2);
        assert!(st.is_cursor_at_end());
        st.set_input("   ");
        assert_eq!(st.cursor(), 2);
    }
}
