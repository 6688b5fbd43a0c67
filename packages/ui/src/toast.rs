//! Transient toast notification.
//!
//! Only one toast exists. Showing a new message overwrites the current one and bumps
//! the generation; an expiry scheduled for an older generation is ignored, so every
//! message stays up for the full window.

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toast {
    pub message: String,
    pub visible: bool,
    pub generation: u64,
}

impl Toast {
    /// Show `message`, returning the generation to pass to [`Toast::expire`].
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.generation += 1;
        self.message = message.into();
        self.visible = true;
        self.generation
    }

    /// Hide the toast if it still shows the message of `generation`.
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.visible && self.generation == generation {
            self.visible = false;
            true
        } else {
            false
        }
    }
}
