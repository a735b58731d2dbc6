//! Table display state

/// Selection and scroll state for the user table.
pub struct TableState {
    pub selected: Option<usize>,
    pub scroll_offset: usize,
    pub visible_rows: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            selected: None,
            scroll_offset: 0,
            visible_rows: 20,
        }
    }
}

impl TableState {
    pub fn select_next(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) => (i + 1).min(total - 1),
            None => 0,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn select_prev(&mut self) {
        let i = match self.selected {
            Some(0) | None => 0,
            Some(i) => i - 1,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn page_down(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let jump = self.visible_rows.saturating_sub(1);
        let i = match self.selected {
            Some(i) => (i + jump).min(total - 1),
            None => jump.min(total - 1),
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn page_up(&mut self) {
        let jump = self.visible_rows.saturating_sub(1);
        let i = match self.selected {
            Some(i) => i.saturating_sub(jump),
            None => 0,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn select_first(&mut self) {
        self.selected = Some(0);
        self.scroll_offset = 0;
    }

    pub fn select_last(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        self.selected = Some(total - 1);
        self.ensure_visible(total - 1);
    }

    /// Re-clamp after the visible list changed size (new fetch or new query).
    pub fn clamp(&mut self, total: usize) {
        if total == 0 {
            self.selected = None;
            self.scroll_offset = 0;
            return;
        }
        if let Some(i) = self.selected {
            if i >= total {
                self.selected = Some(total - 1);
            }
        }
        if self.scroll_offset >= total {
            self.scroll_offset = total.saturating_sub(1);
        }
    }

    fn ensure_visible(&mut self, index: usize) {
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if self.visible_rows > 0 && index >= self.scroll_offset + self.visible_rows {
            self.scroll_offset = index - self.visible_rows + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_clamps_at_end() {
        let mut t = TableState::default();
        t.select_next(2);
        t.select_next(2);
        t.select_next(2);
        assert_eq!(t.selected, Some(1));
    }

    #[test]
    fn prev_stops_at_start() {
        let mut t = TableState::default();
        t.select_next(3);
        t.select_prev();
        t.select_prev();
        assert_eq!(t.selected, Some(0));
    }

    #[test]
    fn paging_scrolls_selection_into_view() {
        let mut t = TableState {
            visible_rows: 5,
            ..TableState::default()
        };
        t.page_down(100);
        assert_eq!(t.selected, Some(4));
        t.page_down(100);
        assert_eq!(t.selected, Some(8));
        assert!(t.scroll_offset + t.visible_rows > 8);
    }

    #[test]
    fn select_last_scrolls_to_bottom() {
        let mut t = TableState {
            visible_rows: 10,
            ..TableState::default()
        };
        t.select_last(50);
        assert_eq!(t.selected, Some(49));
        assert_eq!(t.scroll_offset, 40);
    }

    #[test]
    fn clamp_handles_a_shrinking_list() {
        let mut t = TableState::default();
        t.select_last(30);
        t.clamp(5);
        assert_eq!(t.selected, Some(4));
        assert!(t.scroll_offset < 5);

        t.clamp(0);
        assert_eq!(t.selected, None);
        assert_eq!(t.scroll_offset, 0);
    }

    #[test]
    fn empty_list_keeps_no_selection() {
        let mut t = TableState::default();
        t.select_next(0);
        t.page_down(0);
        t.select_last(0);
        assert_eq!(t.selected, None);
    }
}
