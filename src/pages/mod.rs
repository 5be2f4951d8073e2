//! Page components.

pub mod recipients;
