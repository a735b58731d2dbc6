//! Search input state for the TUI

/// Search input state: the query text plus cursor/focus bookkeeping.
///
/// Editing methods return `true` when the query text changed, so the app
/// knows to push a query-changed event through the reducer.
pub struct SearchState {
    pub query: String,
    pub cursor_pos: usize,
    pub focused: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            cursor_pos: 0,
            focused: true,
        }
    }
}

impl SearchState {
    pub fn insert(&mut self, c: char) -> bool {
        self.query.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
        true
    }

    pub fn backspace(&mut self) -> bool {
        if self.cursor_pos == 0 {
            return false;
        }
        let prev = self.prev_boundary();
        self.query.remove(prev);
        self.cursor_pos = prev;
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.cursor_pos >= self.query.len() {
            return false;
        }
        self.query.remove(self.cursor_pos);
        true
    }

    pub fn clear(&mut self) -> bool {
        if self.query.is_empty() {
            return false;
        }
        self.query.clear();
        self.cursor_pos = 0;
        true
    }

    pub fn move_left(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos = self.prev_boundary();
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor_pos < self.query.len() {
            self.cursor_pos = self.query[self.cursor_pos..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_pos + i)
                .unwrap_or(self.query.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor_pos = self.query.len();
    }

    /// Byte index of the character boundary before the cursor.
    fn prev_boundary(&self) -> usize {
        self.query[..self.cursor_pos]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_advances_cursor() {
        let mut s = SearchState::default();
        assert!(s.insert('a'));
        assert!(s.insert('b'));
        assert_eq!(s.query, "ab");
        assert_eq!(s.cursor_pos, 2);
    }

    #[test]
    fn backspace_respects_char_boundaries() {
        let mut s = SearchState::default();
        s.insert('é');
        s.insert('x');
        assert!(s.backspace());
        assert_eq!(s.query, "é");
        assert!(s.backspace());
        assert_eq!(s.query, "");
        assert!(!s.backspace());
    }

    #[test]
    fn cursor_moves_over_multibyte_chars() {
        let mut s = SearchState::default();
        s.insert('a');
        s.insert('é');
        s.insert('b');
        s.move_left();
        s.move_left();
        assert_eq!(s.cursor_pos, 1);
        s.move_right();
        assert_eq!(s.cursor_pos, 3);
        s.move_home();
        assert_eq!(s.cursor_pos, 0);
        s.move_end();
        assert_eq!(s.cursor_pos, s.query.len());
    }

    #[test]
    fn delete_removes_at_cursor() {
        let mut s = SearchState::default();
        s.insert('a');
        s.insert('b');
        s.move_home();
        assert!(s.delete());
        assert_eq!(s.query, "b");
    }

    #[test]
    fn clear_reports_whether_anything_changed() {
        let mut s = SearchState::default();
        assert!(!s.clear());
        s.insert('q');
        assert!(s.clear());
        assert_eq!(s.cursor_pos, 0);
    }
}
