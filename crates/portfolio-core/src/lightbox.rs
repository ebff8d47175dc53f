//! Lightbox Overlay
//!
//! Single page-wide overlay showing one enlarged image from whichever
//! carousel the user expanded. Opening replaces the image list wholesale;
//! after that the overlay navigates independently of the carousel it came
//! from. Backdrop-click detection, scroll suppression, and key routing are
//! handled by the component layer; this is just the index machine.

use crate::error::PortfolioError;

/// Lightbox overlay state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lightbox {
    images: Vec<String>,
    current: usize,
    open: bool,
}

impl Lightbox {
    /// Create the (closed) overlay. One instance per page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the overlay on `start_index` of `images`, replacing whatever
    /// image set a previous open left behind. The start index is clamped
    /// into range rather than wrapped: it comes from a carousel whose own
    /// index is already in range, so anything out of bounds means the
    /// caller snapshot is inconsistent and the nearest valid image wins.
    pub fn open_with(
        &mut self,
        images: Vec<String>,
        start_index: usize,
    ) -> Result<(), PortfolioError> {
        if images.is_empty() {
            return Err(PortfolioError::EmptyImageList);
        }
        self.current = start_index.min(images.len() - 1);
        self.images = images;
        self.open = true;
        tracing::debug!(index = self.current, total = self.images.len(), "lightbox opened");
        Ok(())
    }

    /// Close the overlay. The image list is kept until the next open but
    /// is no longer meaningful.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Jump to an image, wrapping negative and overflowing indices just
    /// like the carousel does. No-op on an empty list.
    pub fn show(&mut self, index: i64) {
        let n = self.images.len() as i64;
        if n == 0 {
            return;
        }
        self.current = index.rem_euclid(n) as usize;
    }

    pub fn next(&mut self) {
        self.show(self.current as i64 + 1);
    }

    pub fn previous(&mut self) {
        self.show(self.current as i64 - 1);
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Source of the image currently displayed, if any.
    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.current).map(String::as_str)
    }

    /// The "position / total" label, 1-based.
    pub fn counter_text(&self) -> String {
        format!("{} / {}", self.current + 1, self.images.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("shot-{i}.webp")).collect()
    }

    #[test]
    fn test_open_on_carousel_slide() {
        // Expanding a carousel showing slide 2 of 4 opens on that image.
        let mut lb = Lightbox::new();
        lb.open_with(images(4), 2).unwrap();
        assert!(lb.is_open());
        assert_eq!(lb.current_index(), 2);
        assert_eq!(lb.counter_text(), "3 / 4");
        assert_eq!(lb.current_image(), Some("shot-2.webp"));
    }

    #[test]
    fn test_open_clamps_out_of_range_start() {
        let mut lb = Lightbox::new();
        lb.open_with(images(3), 9).unwrap();
        assert_eq!(lb.current_index(), 2);
    }

    #[test]
    fn test_open_rejects_empty_list() {
        let mut lb = Lightbox::new();
        assert!(matches!(
            lb.open_with(Vec::new(), 0),
            Err(PortfolioError::EmptyImageList)
        ));
        assert!(!lb.is_open());
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut lb = Lightbox::new();
        lb.open_with(images(4), 3).unwrap();
        lb.next();
        assert_eq!(lb.current_index(), 0);
        assert_eq!(lb.counter_text(), "1 / 4");
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut lb = Lightbox::new();
        lb.open_with(images(4), 0).unwrap();
        lb.previous();
        assert_eq!(lb.current_index(), 3);
        assert_eq!(lb.counter_text(), "4 / 4");
    }

    #[test]
    fn test_reopen_replaces_images() {
        let mut lb = Lightbox::new();
        lb.open_with(images(4), 1).unwrap();
        lb.close();
        assert!(!lb.is_open());

        // Opening from a different carousel overwrites, never appends.
        lb.open_with(vec!["other.webp".to_string()], 0).unwrap();
        assert_eq!(lb.counter_text(), "1 / 1");
        assert_eq!(lb.current_image(), Some("other.webp"));
    }

    #[test]
    fn test_show_on_empty_overlay_is_inert() {
        let mut lb = Lightbox::new();
        lb.show(5);
        assert_eq!(lb.current_index(), 0);
        assert_eq!(lb.current_image(), None);
    }
}
