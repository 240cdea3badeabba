//! Synchronous driver for the feed
//!
//! [`Harness`] wires a [`CampusBuzzScreen`] to an [`Animator`] over a fresh
//! bridge and steps both by hand, one frame at a time. The demo binary and
//! the tests use it where a spawned animation task would make timing
//! nondeterministic.

use std::sync::Arc;
use std::time::Duration;

use app_core::Catalog;
use app_platform::{BackHandlerRegistry, HapticEngine, NoopHaptics};
use app_state::{
    bridge, initial_frame, Animator, Bridge, FeedConfig, FrameSnapshot, InputEvent, InputSender,
    PanEvent,
};

use crate::components::CampusBuzzView;
use crate::screens::{CampusBuzzScreen, Result};

/// Frames `settle` steps before giving up
const MAX_SETTLE_FRAMES: usize = 2_000;

/// A mounted feed plus its animation context
#[derive(Debug)]
pub struct Harness {
    /// Main context
    pub screen: CampusBuzzScreen,
    /// Animation context
    pub animator: Animator,
    input: InputSender,
    registry: BackHandlerRegistry,
    frame_interval: Duration,
}

impl Harness {
    /// Mount a screen over `catalog`
    pub fn new(
        config: FeedConfig,
        catalog: Catalog,
        haptics: Arc<dyn HapticEngine>,
    ) -> Result<Self> {
        let Bridge {
            main,
            animation,
            input,
        } = bridge(initial_frame(&config));
        let registry = BackHandlerRegistry::new();
        let frame_interval = config.frame_interval();
        let screen = CampusBuzzScreen::mount(config.clone(), catalog, &registry, haptics, main)?;
        let animator = Animator::new(config, animation);

        Ok(Self {
            screen,
            animator,
            input,
            registry,
            frame_interval,
        })
    }

    /// Default configuration, the sample catalog and no haptics
    pub fn with_defaults() -> Result<Self> {
        Self::new(FeedConfig::default(), Catalog::sample(), Arc::new(NoopHaptics))
    }

    /// Back registry the screen listens on
    pub fn registry(&self) -> &BackHandlerRegistry {
        &self.registry
    }

    /// Exchange messages until both contexts are idle
    pub fn pump(&mut self) -> usize {
        let mut total = 0;
        loop {
            let handled = self.animator.drain() + self.screen.pump();
            if handled == 0 {
                return total;
            }
            total += handled;
        }
    }

    /// Advance `count` frames
    pub fn frames(&mut self, count: usize) {
        for _ in 0..count {
            self.pump();
            self.animator.tick(self.frame_interval);
            self.pump();
        }
    }

    /// Step frames until nothing is animating; returns false if it never settled
    pub fn settle(&mut self) -> bool {
        for _ in 0..MAX_SETTLE_FRAMES {
            self.pump();
            if !self.animator.is_animating() && !self.screen.state().animating {
                return true;
            }
            self.animator.tick(self.frame_interval);
        }
        self.pump();
        !self.animator.is_animating() && !self.screen.state().animating
    }

    /// Drag the card by `translation` and release
    pub fn swipe_card(&mut self, translation: f32) {
        self.pan(InputEvent::CardPan, translation);
    }

    /// Drag the settings sheet by `translation` and release
    pub fn drag_settings(&mut self, translation: f32) {
        self.pan(InputEvent::SettingsPan, translation);
    }

    fn pan(&mut self, target: fn(PanEvent) -> InputEvent, translation: f32) {
        for event in [
            PanEvent::began(),
            PanEvent::changed(translation / 2.0),
            PanEvent::changed(translation),
            PanEvent::ended(translation),
        ] {
            self.input.send(target(event));
        }
        self.pump();
    }

    /// Send the platform back signal; returns whether a listener consumed it
    pub fn press_back(&mut self) -> bool {
        let consumed = self.registry.dispatch();
        self.pump();
        consumed
    }

    /// Current animated values
    pub fn frame(&self) -> FrameSnapshot {
        self.animator.snapshot()
    }

    /// Render tree for the current frame
    pub fn render(&self) -> CampusBuzzView {
        self.screen.render(&self.frame())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_state::{FeedState, PanelId};

    #[test]
    fn test_cancelled_swipe_returns_to_rest() {
        let mut harness = Harness::with_defaults().unwrap();
        harness.swipe_card(100.0);
        assert_eq!(harness.frame().card_offset, 100.0);
        assert!(harness.settle());

        let frame = harness.frame();
        assert_eq!(frame.card_offset, 0.0);
        assert_eq!(frame.card_rotation, 0.0);
        assert_eq!(harness.screen.state().current_index, 0);
    }

    #[test]
    fn test_committed_swipe_advances() {
        let mut harness = Harness::with_defaults().unwrap();
        harness.swipe_card(101.0);
        assert_eq!(
            harness.screen.state(),
            FeedState {
                current_index: 0,
                animating: true
            }
        );

        assert!(harness.settle());
        assert_eq!(
            harness.screen.state(),
            FeedState {
                current_index: 1,
                animating: false
            }
        );
        assert_eq!(harness.frame().card_offset, 0.0);
        assert_eq!(harness.frame().card_rotation, 0.0);
    }

    #[test]
    fn test_exit_then_enter_from_opposite_side() {
        let mut harness = Harness::with_defaults().unwrap();
        harness.swipe_card(-150.0);

        // Run until the index swaps, then the card must be entering from the right
        let mut swapped = false;
        for _ in 0..MAX_SETTLE_FRAMES {
            harness.frames(1);
            if harness.screen.state().current_index == 1 {
                swapped = true;
                break;
            }
            assert!(harness.frame().card_offset <= 0.0);
        }
        assert!(swapped);
        assert!(harness.frame().card_offset > 0.0);
        assert!(harness.screen.state().animating);
    }

    #[test]
    fn test_swipe_during_transition_is_dropped() {
        let mut harness = Harness::with_defaults().unwrap();
        harness.swipe_card(-150.0);
        harness.frames(2);
        harness.swipe_card(-150.0);
        assert!(harness.settle());
        assert_eq!(harness.screen.state().current_index, 1);
    }

    #[test]
    fn test_settings_drag_outcomes() {
        let mut harness = Harness::with_defaults().unwrap();
        harness.screen.toggle_settings();
        assert!(harness.settle());
        assert_eq!(harness.frame().settings_position, 58.0);

        harness.drag_settings(30.0);
        assert!(harness.settle());
        assert!(harness.screen.panel_state(PanelId::Settings).open);
        assert_eq!(harness.frame().settings_position, 58.0);

        harness.drag_settings(60.0);
        assert!(!harness.screen.panel_state(PanelId::Settings).open);
        assert!(harness.settle());
        assert_eq!(harness.frame().settings_position, 844.0);
    }

    #[test]
    fn test_grab_during_close_restores_open() {
        let mut harness = Harness::with_defaults().unwrap();
        harness.screen.toggle_settings();
        assert!(harness.settle());

        harness.screen.toggle_settings();
        assert!(!harness.screen.panel_state(PanelId::Settings).open);
        harness.frames(2);
        assert!(harness.frame().settings_position > 58.0);

        harness.drag_settings(30.0);
        assert!(harness.screen.panel_state(PanelId::Settings).open);
        assert!(harness.settle());
        assert_eq!(harness.frame().settings_position, 58.0);
        assert!(harness.render().settings.open);
    }

    #[test]
    fn test_back_closes_details() {
        let mut harness = Harness::with_defaults().unwrap();
        assert!(!harness.press_back());

        harness.screen.toggle_details();
        assert!(harness.settle());
        assert_eq!(harness.frame().details_position, 0.0);

        assert!(harness.press_back());
        assert!(!harness.screen.panel_state(PanelId::Details).open);
        assert!(harness.settle());
        assert_eq!(harness.frame().details_position, 312.0);
        assert_eq!(harness.registry().default_invocations(), 1);
    }
}
