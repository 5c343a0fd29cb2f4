//! The deterministic "AI": keyword classification over a fixed template set,
//! plus the reducer that owns the widget's state.

pub mod bundles;
pub mod classify;
pub mod state;
