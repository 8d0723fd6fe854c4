//! Adapter utilities for the `card-virtualizer` crate.
//!
//! The `card-virtualizer` crate is UI-agnostic and only does layout math. This crate provides the
//! small, framework-neutral pieces a dashboard needs around it:
//!
//! - Responsive column breakpoints and container sizing from window geometry
//! - Owned expand/collapse state keyed by item id
//! - Tween-based smooth scrolling (adapter-driven) and a scroll-to-top threshold
//! - Keeping a card in view after a drag reorder
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod tween;
mod viewport;


pub use controller::GridController;
pub use tween::{Easing, ScrollTween};
pub use viewport::{Breakpoints, ContainerSizing, ScrollToTop};
