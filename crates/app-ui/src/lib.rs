//! User interface for Campus Buzz
//!
//! This crate provides the UI layer: the tab shell, the Campus Buzz feed
//! screen and the design system primitives it renders with. Screens produce
//! serializable render trees; a host UI runtime draws them.
//!
//! # Modules
//!
//! - [`theme`] - Light and dark color schemes
//! - [`tokens`] - Design tokens (sizing, radius, layering)
//! - [`components`] - Render tree building blocks
//! - [`screens`] - The feed screen and placeholder screens
//! - [`navigation`] - Tab routes and navigation state
//! - [`harness`] - Synchronous driver for the feed
//!
//! # Example
//!
//! ```rust
//! use app_ui::harness::Harness;
//!
//! let mut harness = Harness::with_defaults().unwrap();
//! harness.swipe_card(-150.0);
//! assert!(harness.settle());
//! assert_eq!(harness.screen.state().current_index, 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod harness;
pub mod navigation;
pub mod screens;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use components::{CampusBuzzView, EventHandler, PlaceholderView, TabBar};
pub use harness::Harness;
pub use navigation::{NavigationState, NavigationTab, Route, Router};
pub use screens::{CampusBuzzScreen, PlaceholderScreen, ScreenError, DETAILS_TITLE, FEED_TITLE};
pub use theme::{Theme, ThemeName};
