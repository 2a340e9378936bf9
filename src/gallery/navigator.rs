// SPDX-License-Identifier: MPL-2.0
//! Gallery navigation state for the full-screen pager.
//!
//! The navigator holds only indices; photo identity (paths, handles,
//! decoded assets) stays with the host. Both navigation directions wrap
//! around, matching swipe-through-the-whole-roll behavior.

/// Manages selection over an indexed list of photos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryNavigator {
    len: usize,
    current: Option<usize>,
}

impl GalleryNavigator {
    /// Creates a navigator over `len` photos. A non-empty gallery starts
    /// with the first photo selected.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: (len > 0).then_some(0),
        }
    }

    /// Replaces the photo count, keeping the selection when it still fits.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.current = match self.current {
            Some(index) if index < len => Some(index),
            _ => (len > 0).then_some(0),
        };
    }

    /// Selects the photo at `index`. Returns the index back, or `None` when
    /// it is out of range (selection is then unchanged).
    pub fn select(&mut self, index: usize) -> Option<usize> {
        if index < self.len {
            self.current = Some(index);
            Some(index)
        } else {
            None
        }
    }

    /// Advances to the next photo and returns its index.
    ///
    /// Returns `None` if the gallery is empty. Wraps around to the first
    /// photo when at the last one.
    pub fn next(&mut self) -> Option<usize> {
        let current = self.current?;
        let next = if current + 1 >= self.len { 0 } else { current + 1 };
        self.current = Some(next);
        Some(next)
    }

    /// Steps back to the previous photo and returns its index.
    ///
    /// Returns `None` if the gallery is empty. Wraps around to the last
    /// photo when at the first one.
    pub fn previous(&mut self) -> Option<usize> {
        let current = self.current?;
        let previous = if current == 0 { self.len - 1 } else { current - 1 };
        self.current = Some(previous);
        Some(previous)
    }

    /// Returns the selected index, if any.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Checks if another photo follows the current one (always true in a
    /// non-empty gallery, since navigation wraps).
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.len > 0
    }

    /// Checks if a photo precedes the current one.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.len > 0
    }

    /// Checks if the first photo is selected.
    #[must_use]
    pub fn is_at_first(&self) -> bool {
        self.current == Some(0)
    }

    /// Checks if the last photo is selected.
    #[must_use]
    pub fn is_at_last(&self) -> bool {
        self.len > 0 && self.current == Some(self.len - 1)
    }

    /// Returns the total number of photos.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the gallery is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for GalleryNavigator {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_gallery_navigates_nowhere() {
        let mut nav = GalleryNavigator::new(0);
        assert!(nav.is_empty());
        assert_eq!(nav.current_index(), None);
        assert_eq!(nav.next(), None);
        assert_eq!(nav.previous(), None);
        assert!(!nav.has_next());
        assert!(!nav.has_previous());
    }

    #[test]
    fn new_gallery_selects_first_photo() {
        let nav = GalleryNavigator::new(3);
        assert_eq!(nav.current_index(), Some(0));
        assert!(nav.is_at_first());
        assert!(!nav.is_at_last());
    }

    #[test]
    fn next_advances_and_wraps_around() {
        let mut nav = GalleryNavigator::new(3);
        assert_eq!(nav.next(), Some(1));
        assert_eq!(nav.next(), Some(2));
        assert!(nav.is_at_last());
        assert_eq!(nav.next(), Some(0)); // wraps to first
    }

    #[test]
    fn previous_steps_back_and_wraps_around() {
        let mut nav = GalleryNavigator::new(3);
        assert_eq!(nav.previous(), Some(2)); // wraps to last
        assert_eq!(nav.previous(), Some(1));
        assert_eq!(nav.previous(), Some(0));
    }

    #[test]
    fn select_rejects_out_of_range_indices() {
        let mut nav = GalleryNavigator::new(3);
        assert_eq!(nav.select(2), Some(2));
        assert_eq!(nav.select(3), None);
        assert_eq!(nav.current_index(), Some(2));
    }

    #[test]
    fn set_len_keeps_selection_when_it_fits() {
        let mut nav = GalleryNavigator::new(5);
        nav.select(3);

        nav.set_len(6);
        assert_eq!(nav.current_index(), Some(3));

        nav.set_len(2);
        assert_eq!(nav.current_index(), Some(0));

        nav.set_len(0);
        assert_eq!(nav.current_index(), None);
    }
}
