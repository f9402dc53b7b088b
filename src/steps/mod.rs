// Step cursor and per-tab view state for replaying precomputed steps

/// Bounded, wrap-around index over an ordered step sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepCursor {
    index: usize,
    len: usize,
}

impl StepCursor {
    pub fn new(len: usize) -> Self {
        StepCursor { index: 0, len }
    }

    /// Move to the next step, wrapping to 0 after the last one
    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Move to the previous step, wrapping to the last one before 0
    pub fn retreat(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Jump to the last step (no-op on an empty sequence)
    pub fn jump_to_end(&mut self) {
        self.index = self.len.saturating_sub(1);
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_at_start(&self) -> bool {
        self.index == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.len > 0 && self.index + 1 == self.len
    }
}

/// Cursor bound to the raw input it was built for.
///
/// The shell calls [`ViewState::sync`] with the current raw input before every
/// render. Whenever the input differs from the last one seen, the cursor is
/// rebuilt at index 0 so it can never point into a structure derived from a
/// previous input.
#[derive(Debug, Clone)]
pub struct ViewState<K> {
    last_input: Option<K>,
    cursor: StepCursor,
}

impl<K: PartialEq + Clone> ViewState<K> {
    pub fn new() -> Self {
        ViewState {
            last_input: None,
            cursor: StepCursor::default(),
        }
    }

    /// Record `raw` as the current input. Returns `true` if the input changed
    /// (or was seen for the first time) and the cursor was reset.
    pub fn sync(&mut self, raw: &K, len: usize) -> bool {
        if self.last_input.as_ref() == Some(raw) {
            return false;
        }
        self.last_input = Some(raw.clone());
        self.cursor = StepCursor::new(len);
        true
    }

    pub fn cursor(&self) -> &StepCursor {
        &self.cursor
    }

    pub fn index(&self) -> usize {
        self.cursor.index()
    }

    pub fn advance(&mut self) {
        self.cursor.advance();
    }

    pub fn retreat(&mut self) {
        self.cursor.retreat();
    }

    pub fn reset(&mut self) {
        self.cursor.reset();
    }

    pub fn jump_to_end(&mut self) {
        self.cursor.jump_to_end();
    }
}

impl<K: PartialEq + Clone> Default for ViewState<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps_around() {
        let mut cursor = StepCursor::new(3);
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.index(), 2);
        assert!(cursor.is_at_end());
        cursor.advance();
        assert_eq!(cursor.index(), 0);
        assert!(cursor.is_at_start());
    }

    #[test]
    fn test_retreat_wraps_to_last() {
        let mut cursor = StepCursor::new(4);
        cursor.retreat();
        assert_eq!(cursor.index(), 3);
        cursor.retreat();
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn test_empty_cursor_is_noop() {
        let mut cursor = StepCursor::new(0);
        cursor.advance();
        cursor.retreat();
        cursor.jump_to_end();
        assert_eq!(cursor.index(), 0);
        assert!(cursor.is_empty());
        assert!(!cursor.is_at_end());
    }

    #[test]
    fn test_reset_from_any_position() {
        let mut cursor = StepCursor::new(5);
        cursor.jump_to_end();
        assert_eq!(cursor.index(), 4);
        cursor.reset();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_view_state_resets_on_input_change() {
        let mut view = ViewState::new();
        assert!(view.sync(&"1,2,3".to_string(), 3));
        view.advance();
        view.advance();
        assert_eq!(view.index(), 2);

        // Same input keeps the position
        assert!(!view.sync(&"1,2,3".to_string(), 3));
        assert_eq!(view.index(), 2);

        // New input starts over
        assert!(view.sync(&"1,2,3,4".to_string(), 4));
        assert_eq!(view.index(), 0);
        assert_eq!(view.cursor().len(), 4);
    }

    #[test]
    fn test_view_state_tuple_key() {
        let mut view: ViewState<(String, String)> = ViewState::new();
        let raw = ("A,B".to_string(), "A-B".to_string());
        view.sync(&raw, 4);
        view.advance();
        let changed = ("A,B".to_string(), "B-A".to_string());
        assert!(view.sync(&changed, 4));
        assert_eq!(view.index(), 0);
    }
}
