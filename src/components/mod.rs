//! Reusable page components: the recipient table and the modal dialogs.

pub mod recipient_modal;
pub mod recipients_table;
pub mod remove_modal;
