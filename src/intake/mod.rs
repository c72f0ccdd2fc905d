//! Intake driver module.
//!
//! This module provides:
//! - Run state tracking
//! - Transmittal folder allocation
//! - Attachment fetching from the mail source

pub mod attachments;
pub mod folders;
pub mod state;

pub use attachments::fetch_attachments;
pub use folders::allocate_folder;
pub use state::IntakeState;
