//! Feature slices: one module per screen.

pub mod home;
pub mod login;
