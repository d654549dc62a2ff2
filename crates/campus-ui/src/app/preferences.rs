//! Persistence and environment helpers for motion preferences.

use crate::core::settings::MotionSettings;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use web_sys::MediaQueryList;

pub(crate) const MOTION_KEY: &str = "campus.motion";
const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

pub(crate) fn load_motion_settings() -> MotionSettings {
    let raw = match LocalStorage::raw().get_item(MOTION_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return MotionSettings::default(),
        Err(err) => {
            console::error!("storage read failed", MOTION_KEY, err);
            return MotionSettings::default();
        }
    };
    MotionSettings::from_json(&raw).unwrap_or_else(|err| {
        console::error!("ignoring stored motion settings", err.to_string());
        MotionSettings::default()
    })
}

pub(crate) fn persist_motion_settings(settings: &MotionSettings) {
    let json = match settings.to_json() {
        Ok(json) => json,
        Err(err) => {
            console::error!("motion settings encode failed", err.to_string());
            return;
        }
    };
    if let Err(err) = LocalStorage::raw().set_item(MOTION_KEY, &json) {
        console::error!("storage write failed", MOTION_KEY, err);
    }
}

pub(crate) fn reduced_motion_query() -> Option<MediaQueryList> {
    match window().match_media(REDUCED_MOTION_QUERY) {
        Ok(list) => list,
        Err(err) => {
            console::error!("matchMedia unavailable", err);
            None
        }
    }
}
