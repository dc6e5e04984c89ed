//! Leptos components provided by this crate.

pub mod snowfall;
