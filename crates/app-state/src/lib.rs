//! Presentation state for the Campus Buzz feed
//!
//! This crate holds the swipeable card feed's state machines and the
//! plumbing that keeps them in sync with animated values:
//!
//! - [`feed`] - current card and the at-most-one in-flight transition
//! - [`gesture`] - pan gesture interpretation for the card and settings sheet
//! - [`panels`] - details panel and settings sheet open/closed state
//! - [`animation`] - spring-driven animated values
//! - [`dispatch`] - messages between the main and animation contexts
//! - [`animator`] - the animation context itself
//! - [`config`] - thresholds, spring parameters and geometry

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod animation;
pub mod animator;
pub mod config;
pub mod dispatch;
pub mod feed;
pub mod gesture;
pub mod panels;

pub use animation::{AnimatedValue, Completion, SpringConfig, Ticket};
pub use animator::{initial_frame, Animator};
pub use config::{ConfigError, FeedConfig};
pub use dispatch::{
    bridge, AnimationCommand, AnimationEndpoint, Bridge, Channel, FrameSnapshot, InputEvent,
    InputSender, MainEndpoint, MainMessage, MessagePoster,
};
pub use feed::{Direction, FeedController, FeedError, FeedState, Transition};
pub use gesture::{
    classify_swipe, CardGesture, CardPose, DragOutcome, PanEvent, PanPhase, SheetDrag, Side,
    SwipeOutcome,
};
pub use panels::{PanelCoordinator, PanelGeometry, PanelId, PanelState};
