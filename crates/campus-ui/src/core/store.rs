//! Shared motion state for animated components.
//!
//! # Design
//! - User settings and the system preference live side by side; readers
//!   only see the merged view through the helper methods.
//! - Components fall back to the store defaults when no app seeds it.

use crate::core::settings::MotionSettings;
use yewdux::store::Store;

/// Global motion store slice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Store)]
pub struct MotionStore {
    /// Persisted user preferences.
    pub settings: MotionSettings,
    /// Mirrors `prefers-reduced-motion: reduce` from the browser.
    pub system_reduced_motion: bool,
}

impl MotionStore {
    /// Whether animations must be suppressed.
    #[must_use]
    pub const fn reduced_motion(&self) -> bool {
        self.settings.reduced_motion || self.system_reduced_motion
    }

    /// Stagger step to use when a container does not set its own.
    #[must_use]
    pub const fn stagger_delay_ms(&self) -> u32 {
        self.settings.stagger_delay_ms
    }

    /// Whether glow layers should animate.
    #[must_use]
    pub const fn glow_animated(&self) -> bool {
        self.settings.glow_animated && !self.reduced_motion()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_preference_forces_reduced_motion() {
        let store = MotionStore {
            settings: MotionSettings::default(),
            system_reduced_motion: true,
        };
        assert!(store.reduced_motion());
        assert!(!store.glow_animated());
    }

    #[test]
    fn user_setting_alone_reduces_motion() {
        let store = MotionStore {
            settings: MotionSettings {
                reduced_motion: true,
                ..MotionSettings::default()
            },
            system_reduced_motion: false,
        };
        assert!(store.reduced_motion());
        assert!(!store.glow_animated());
    }

    #[test]
    fn default_store_animates() {
        let store = MotionStore::default();
        assert!(!store.reduced_motion());
        assert!(store.glow_animated());
        assert_eq!(store.stagger_delay_ms(), 50);
    }
}
