//! Modal form logic: the per-modal state machine driving the add/edit
//! and remove flows, and the serializer that turns the rendered field
//! set into a flat mutation payload.
//!
//! Everything here is pure and browser-independent so the CRUD flows can
//! be tested natively; the Leptos components in `components/` only read
//! and mutate this state through signals.

pub mod serialize;
pub mod state;
