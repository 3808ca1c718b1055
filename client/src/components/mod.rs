//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render portal chrome from the shared `PortalState` signal and
//! forward user events to `Portal` handlers.

pub mod dashboard_card;
pub mod flash_stack;
pub mod form;
pub mod navbar;
pub mod page_section;
pub mod particle_field;
pub mod profile_card;
pub mod stats_grid;
