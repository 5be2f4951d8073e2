//! Browser utility helpers.

pub mod view_prefs;
