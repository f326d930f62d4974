//! Table row selection
//!
//! Tracks which display rows are selected. Row indices map directly to
//! ledger positions because the table shows the ledger in insertion order.

use std::collections::BTreeSet;

/// Selected rows plus the row under the cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    rows: BTreeSet<usize>,
    cursor: Option<usize>,
}

impl Selection {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Select exactly one row and put the cursor on it
    pub fn select_only(&mut self, row: usize) {
        self.rows.clear();
        self.rows.insert(row);
        self.cursor = Some(row);
    }

    /// Add or remove the cursor row from the selection
    pub fn toggle_cursor(&mut self) {
        if let Some(row) = self.cursor {
            if !self.rows.remove(&row) {
                self.rows.insert(row);
            }
        }
    }

    /// Add or remove a specific row
    pub fn toggle(&mut self, row: usize) {
        if !self.rows.remove(&row) {
            self.rows.insert(row);
        }
        self.cursor = Some(row);
    }

    /// Move the cursor down one row and select it
    pub fn move_down(&mut self, row_count: usize) {
        if row_count == 0 {
            return;
        }
        let next = match self.cursor {
            Some(row) => (row + 1).min(row_count - 1),
            None => 0,
        };
        self.select_only(next);
    }

    /// Move the cursor up one row and select it
    pub fn move_up(&mut self, row_count: usize) {
        if row_count == 0 {
            return;
        }
        let next = match self.cursor {
            Some(row) => row.saturating_sub(1).min(row_count - 1),
            None => 0,
        };
        self.select_only(next);
    }

    /// Deselect everything, keeping the cursor where it is
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Drop the selection and keep the cursor inside a table of `row_count` rows
    pub fn reset(&mut self, row_count: usize) {
        self.rows.clear();
        self.cursor = match self.cursor {
            Some(_) if row_count == 0 => None,
            Some(row) => Some(row.min(row_count - 1)),
            None => None,
        };
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of selected rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether a row is selected
    pub fn contains(&self, row: usize) -> bool {
        self.rows.contains(&row)
    }

    /// Row under the cursor
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Selected rows in ascending order
    pub fn rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().copied()
    }
}

impl FromIterator<usize> for Selection {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let rows: BTreeSet<usize> = iter.into_iter().collect();
        let cursor = rows.iter().next_back().copied();
        Self { rows, cursor }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_movement_selects_single_row() {
        let mut sel = Selection::new();
        assert!(sel.is_empty());

        sel.move_down(3);
        assert_eq!(sel.cursor(), Some(0));
        assert!(sel.contains(0));

        sel.move_down(3);
        sel.move_down(3);
        sel.move_down(3);
        assert_eq!(sel.cursor(), Some(2));
        assert_eq!(sel.rows().collect::<Vec<_>>(), vec![2]);

        sel.move_up(3);
        assert_eq!(sel.rows().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_movement_on_empty_table() {
        let mut sel = Selection::new();
        sel.move_down(0);
        sel.move_up(0);
        assert!(sel.is_empty());
        assert_eq!(sel.cursor(), None);
    }

    #[test]
    fn test_toggle_builds_multi_selection() {
        let mut sel = Selection::new();
        sel.select_only(0);
        sel.move_down(4);
        sel.move_down(4);
        sel.toggle_cursor();
        assert_eq!(sel.rows().collect::<Vec<_>>(), Vec::<usize>::new());
        sel.toggle(0);
        sel.toggle(3);
        assert_eq!(sel.rows().collect::<Vec<_>>(), vec![0, 3]);
        sel.toggle(0);
        assert_eq!(sel.rows().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_reset_clamps_cursor() {
        let mut sel: Selection = [1, 4].into_iter().collect();
        assert_eq!(sel.cursor(), Some(4));
        sel.reset(3);
        assert!(sel.is_empty());
        assert_eq!(sel.cursor(), Some(2));
        sel.reset(0);
        assert_eq!(sel.cursor(), None);
    }
}
