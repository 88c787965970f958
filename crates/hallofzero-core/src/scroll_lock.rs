//! Document scroll lock composed from independent owners.
//!
//! The scene and the overlay each own one flag. The document is locked while
//! either flag is set; an owner can only ever clear its own flag.

/// Who is asking for the lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockOwner {
    /// Scene Controller (locked during the intro)
    Scene,
    /// Overlay State (locked while an item is open)
    Overlay,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollLock {
    global: bool,
    overlay: bool,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one owner's flag. Returns the new effective lock when it changed.
    pub fn set(&mut self, owner: LockOwner, locked: bool) -> Option<bool> {
        let before = self.effective();
        match owner {
            LockOwner::Scene => self.global = locked,
            LockOwner::Overlay => self.overlay = locked,
        }
        let after = self.effective();
        (before != after).then_some(after)
    }

    pub fn get(&self, owner: LockOwner) -> bool {
        match owner {
            LockOwner::Scene => self.global,
            LockOwner::Overlay => self.overlay,
        }
    }

    /// The lock the document should show
    pub fn effective(&self) -> bool {
        self.global || self.overlay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_is_or_of_both_flags() {
        for global in [false, true] {
            for overlay in [false, true] {
                let mut lock = ScrollLock::new();
                lock.set(LockOwner::Scene, global);
                lock.set(LockOwner::Overlay, overlay);
                assert_eq!(lock.effective(), global || overlay);
            }
        }
    }

    #[test]
    fn test_overlay_release_keeps_global_lock() {
        let mut lock = ScrollLock::new();
        lock.set(LockOwner::Scene, true);
        assert_eq!(lock.set(LockOwner::Overlay, true), None);
        assert_eq!(lock.set(LockOwner::Overlay, false), None);
        assert!(lock.effective());
        assert!(lock.get(LockOwner::Scene));
    }

    #[test]
    fn test_change_is_reported_once() {
        let mut lock = ScrollLock::new();
        assert_eq!(lock.set(LockOwner::Overlay, true), Some(true));
        assert_eq!(lock.set(LockOwner::Overlay, true), None);
        assert_eq!(lock.set(LockOwner::Overlay, false), Some(false));
    }
}
