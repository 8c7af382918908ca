//! Modal overlays

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Overlay collaborator
pub trait Overlay: Send + Sync {
    /// Close the overlay
    fn hide(&self);
}

/// Modal visibility state
#[derive(Debug, Default)]
pub struct Modal {
    visible: AtomicBool,
    hide_count: AtomicUsize,
}

impl Modal {
    /// Create a hidden modal
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the modal
    pub fn show(&self) {
        self.visible.store(true, Ordering::SeqCst);
    }

    /// Whether the modal is open
    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }

    /// Number of times [`Overlay::hide`] was called
    pub fn hide_count(&self) -> usize {
        self.hide_count.load(Ordering::SeqCst)
    }
}

impl Overlay for Modal {
    fn hide(&self) {
        self.visible.store(false, Ordering::SeqCst);
        self.hide_count.fetch_add(1, Ordering::SeqCst);
    }
}
