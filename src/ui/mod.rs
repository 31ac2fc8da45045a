//! Screens around the game
//!
//! `screens` is the pure navigation model; `dom` applies it to the page.

pub mod screens;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use screens::{GALLERY_PHOTOS, GalleryEntry, NavAction, Screen, ScreenFlow, Transition};
