//! The components module contains the status bar and the shared primitives it is built from.
pub mod connectivity_warning;
pub mod pico;
pub mod polling;
