/// Open/closed state of the mobile navigation menu.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NavToggle {
    open: bool,
}

impl NavToggle {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Following any menu link closes the menu.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Value for the toggle button's `aria-expanded` attribute.
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}
