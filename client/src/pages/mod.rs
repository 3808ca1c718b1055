//! Page sections of the single-page portal.
//!
//! ARCHITECTURE
//! ============
//! Every page is mounted once and toggled by `PortalState::page`. Pages own
//! their form field signals and delegate submission to `Portal` handlers.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod register;
pub mod reset;
