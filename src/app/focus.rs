//! Cyclic keyboard focus within a modal.

/// Focus ring over a modal's interactive elements.
///
/// Tab moves forward and Shift+Tab backward; both wrap, so focus never leaves
/// the element set while the trap is in use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTrap<T> {
    elements: Vec<T>,
    focused: usize,
}

impl<T> Default for FocusTrap<T> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            focused: 0,
        }
    }
}

impl<T: Copy + PartialEq> FocusTrap<T> {
    /// Creates a trap over `elements` with the first one focused.
    #[must_use]
    pub fn new(elements: Vec<T>) -> Self {
        Self { elements, focused: 0 }
    }

    /// Replaces the element set, keeping focus on the same element if it survives.
    pub fn rebuild(&mut self, elements: Vec<T>) {
        let previous = self.focused();
        self.elements = elements;
        self.focused = previous
            .and_then(|el| self.elements.iter().position(|e| *e == el))
            .unwrap_or(0);
    }

    /// The focused element, or `None` for an empty trap.
    #[must_use]
    pub fn focused(&self) -> Option<T> {
        self.elements.get(self.focused).copied()
    }

    /// The elements in tab order.
    #[must_use]
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    /// Moves focus to the next element, wrapping from last to first (Tab).
    pub fn focus_next(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        self.focused = (self.focused + 1) % self.elements.len();
        self.focused()
    }

    /// Moves focus to the previous element, wrapping from first to last (Shift+Tab).
    pub fn focus_previous(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        self.focused = if self.focused == 0 {
            self.elements.len() - 1
        } else {
            self.focused - 1
        };
        self.focused()
    }

    /// Focuses `element` if it belongs to the trap. Returns whether focus moved.
    pub fn focus(&mut self, element: T) -> bool {
        match self.elements.iter().position(|e| *e == element) {
            Some(idx) => {
                self.focused = idx;
                true
            }
            None => false,
        }
    }

    /// Focuses the first element.
    pub fn reset(&mut self) {
        self.focused = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_wraps_forward_and_backward() {
        let mut trap = FocusTrap::new(vec!['a', 'b', 'c']);

        assert_eq!(trap.focused(), Some('a'));
        assert_eq!(trap.focus_previous(), Some('c'));
        assert_eq!(trap.focus_next(), Some('a'));
        assert_eq!(trap.focus_next(), Some('b'));
        assert_eq!(trap.focus_next(), Some('c'));
        assert_eq!(trap.focus_next(), Some('a'));
    }

    #[test]
    fn rebuild_keeps_focus_on_surviving_element() {
        let mut trap = FocusTrap::new(vec!['a', 'b', 'c']);
        trap.focus('c');

        trap.rebuild(vec!['c', 'a']);
        assert_eq!(trap.focused(), Some('c'));

        trap.rebuild(vec!['x', 'y']);
        assert_eq!(trap.focused(), Some('x'));
    }

    #[test]
    fn empty_trap_has_no_focus() {
        let mut trap: FocusTrap<char> = FocusTrap::default();

        assert_eq!(trap.focus_next(), None);
        assert_eq!(trap.focus_previous(), None);
        assert!(!trap.focus('a'));
    }
}
