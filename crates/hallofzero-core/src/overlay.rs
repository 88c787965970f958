//! Overlay State: zero or one item open at a time.

/// Where a click inside the overlay came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOrigin {
    /// Inside the content region; never dismisses
    Content,
    /// The dimmed area around the content
    Backdrop,
    /// The explicit close control
    CloseButton,
}

impl ClickOrigin {
    pub fn dismisses(self) -> bool {
        matches!(self, ClickOrigin::Backdrop | ClickOrigin::CloseButton)
    }
}

/// Single-item selection.
#[derive(Debug, Clone)]
pub struct OverlayState<T> {
    selected: Option<T>,
}

impl<T> Default for OverlayState<T> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<T> OverlayState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `item`, replacing any open item. Returns the replaced one.
    pub fn select(&mut self, item: T) -> Option<T> {
        self.selected.replace(item)
    }

    /// Close the overlay. Returns the item that was open.
    pub fn dismiss(&mut self) -> Option<T> {
        self.selected.take()
    }

    /// Route a click; returns whether it dismissed the overlay
    pub fn click(&mut self, origin: ClickOrigin) -> bool {
        if self.selected.is_some() && origin.dismisses() {
            self.selected = None;
            true
        } else {
            false
        }
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// The overlay's share of the document scroll lock
    pub fn requires_lock(&self) -> bool {
        self.is_open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_selection_wins() {
        let mut overlay = OverlayState::new();
        assert_eq!(overlay.select("alex"), None);
        assert_eq!(overlay.select("ivan"), Some("alex"));
        assert_eq!(overlay.selected(), Some(&"ivan"));
        assert!(overlay.requires_lock());
    }

    #[test]
    fn test_dismiss_clears_selection() {
        let mut overlay = OverlayState::new();
        overlay.select(1);
        overlay.select(2);
        assert_eq!(overlay.dismiss(), Some(2));
        assert!(!overlay.is_open());
        assert!(!overlay.requires_lock());
        assert_eq!(overlay.dismiss(), None);
    }

    #[test]
    fn test_content_clicks_never_dismiss() {
        let mut overlay = OverlayState::new();
        overlay.select("victoria");
        assert!(!overlay.click(ClickOrigin::Content));
        assert!(overlay.is_open());
        assert!(overlay.click(ClickOrigin::Backdrop));
        assert!(!overlay.is_open());

        overlay.select("victoria");
        assert!(overlay.click(ClickOrigin::CloseButton));
    }

    #[test]
    fn test_clicks_on_closed_overlay_do_nothing() {
        let mut overlay: OverlayState<u8> = OverlayState::new();
        assert!(!overlay.click(ClickOrigin::Backdrop));
    }
}
