//! Reusable UI components for Refinery Desktop

pub mod animated_button;
