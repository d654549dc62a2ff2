//! Core, DOM-free primitives and helpers for the component kit.
pub mod actions;
pub mod glow;
pub mod motion;
pub mod settings;
pub mod skeleton;
pub mod store;
pub mod surface;
