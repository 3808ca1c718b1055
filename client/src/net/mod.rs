//! Browser networking.

pub mod transport;
