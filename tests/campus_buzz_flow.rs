//! Campus Buzz integration tests
//!
//! End-to-end flows through the feed screen, the animation context and the
//! platform back handler.

use std::sync::Arc;
use std::time::Duration;

use app_core::{Catalog, FeedItem};
use app_platform::{BackHandlerRegistry, NoopHaptics};
use app_state::{
    bridge, initial_frame, Animator, Bridge, FeedConfig, FeedState, InputEvent, MainMessage,
    PanEvent, PanelId,
};
use app_ui::{CampusBuzzScreen, EventHandler, Harness};
use tempfile::TempDir;

fn idle(current_index: usize) -> FeedState {
    FeedState {
        current_index,
        animating: false,
    }
}

/// Swipe left twice then undo: 0 → 1 → 2 → 1
#[test]
fn test_swipe_swipe_undo() {
    let mut harness = Harness::with_defaults().unwrap();
    assert_eq!(harness.screen.state(), idle(0));

    harness.swipe_card(-150.0);
    assert!(harness.screen.state().animating);
    assert!(harness.settle());
    assert_eq!(harness.screen.state(), idle(1));

    harness.swipe_card(-150.0);
    assert!(harness.settle());
    assert_eq!(harness.screen.state(), idle(2));

    assert!(harness.screen.undo());
    assert!(harness.settle());
    assert_eq!(harness.screen.state(), idle(1));
    assert_eq!(harness.frame().card_offset, 0.0);
}

/// Swiping through the whole catalog comes back to the first card
#[test]
fn test_forward_cycle_wraps() {
    let mut harness = Harness::with_defaults().unwrap();
    let len = harness.screen.catalog().len();
    for step in 1..=len {
        let side = if step % 2 == 0 { 130.0 } else { -130.0 };
        harness.swipe_card(side);
        assert!(harness.settle());
        assert_eq!(harness.screen.state(), idle(step % len));
    }
}

/// Undo from the first card wraps to the last
#[test]
fn test_undo_wraps_backward() {
    let mut harness = Harness::with_defaults().unwrap();
    assert!(harness.screen.undo());
    assert!(harness.settle());
    assert_eq!(harness.screen.state(), idle(3));
}

/// Exactly at the threshold cancels; one past commits to the right
#[test]
fn test_threshold_is_strict() {
    let mut harness = Harness::with_defaults().unwrap();
    harness.swipe_card(100.0);
    assert!(!harness.screen.state().animating);
    assert!(harness.settle());
    assert_eq!(harness.screen.state(), idle(0));
    assert_eq!(harness.frame().card_rotation, 0.0);

    harness.swipe_card(101.0);
    assert!(harness.screen.state().animating);
    assert!(harness.settle());
    assert_eq!(harness.screen.state(), idle(1));
}

/// Undo while a swipe transition runs is ignored
#[test]
fn test_undo_ignored_during_swipe() {
    let mut harness = Harness::with_defaults().unwrap();
    harness.swipe_card(-150.0);
    harness.frames(3);
    assert!(!harness.screen.undo());
    assert!(harness.settle());
    assert_eq!(harness.screen.state(), idle(1));
}

/// Selecting from the settings list jumps without animating and closes the sheet
#[test]
fn test_select_from_settings() {
    let mut harness = Harness::with_defaults().unwrap();
    harness.screen.toggle_settings();
    assert!(harness.settle());
    let view = harness.render();
    assert!(view.settings.open);
    assert_eq!(view.settings.entries[2].on_press, EventHandler::SelectItem(2));

    harness
        .screen
        .handle_event(EventHandler::SelectItem(2))
        .unwrap();
    assert_eq!(harness.screen.state(), idle(2));
    assert!(!harness.screen.panel_state(PanelId::Settings).open);

    assert!(harness.settle());
    let view = harness.render();
    assert!(view.settings.entries[2].selected);
    assert_eq!(view.settings.translate_y, 844.0);
    assert_eq!(view.card.item_id, harness.screen.catalog().items()[2].id);
}

/// Selecting while settings is closed leaves it closed
#[test]
fn test_select_with_settings_closed() {
    let mut harness = Harness::with_defaults().unwrap();
    harness.screen.select_item(3).unwrap();
    harness.pump();
    assert_eq!(harness.screen.state(), idle(3));
    assert!(!harness.screen.panel_state(PanelId::Settings).open);
    assert!(!harness.animator.is_animating());
}

/// Both panels may be open at the same time
#[test]
fn test_panels_are_independent() {
    let mut harness = Harness::with_defaults().unwrap();
    harness.screen.toggle_details();
    harness.screen.toggle_settings();
    assert!(harness.settle());

    let view = harness.render();
    assert!(view.details.open);
    assert!(view.settings.open);
    assert!(view.backdrop.is_some());
    assert_eq!(view.details.translate_x, 0.0);
    assert_eq!(view.settings.translate_y, 58.0);
}

/// Details panel shows the long text of whatever card is visible
#[test]
fn test_details_follow_current_card() {
    let mut harness = Harness::with_defaults().unwrap();
    harness.screen.toggle_details();
    harness.swipe_card(-150.0);
    assert!(harness.settle());

    let expected = harness.screen.catalog().items()[1].long_text.clone();
    assert_eq!(harness.render().details.body, expected);
}

/// Back closes details when open, otherwise falls through to the default
#[test]
fn test_back_signal() {
    let mut harness = Harness::with_defaults().unwrap();
    let before = harness.screen.state();
    assert!(!harness.press_back());
    assert_eq!(harness.screen.state(), before);
    assert_eq!(harness.registry().default_invocations(), 1);

    harness.screen.toggle_details();
    assert!(harness.settle());
    assert!(harness.press_back());
    assert!(!harness.screen.panel_state(PanelId::Details).open);
    assert!(harness.settle());
    assert_eq!(harness.frame().details_position, 312.0);

    assert!(!harness.press_back());
    assert_eq!(harness.registry().default_invocations(), 2);
}

/// Unmounting deregisters the back listener
#[test]
fn test_back_listener_lifecycle() {
    let config = FeedConfig::default();
    let registry = BackHandlerRegistry::new();
    let Bridge { main, .. } = bridge(initial_frame(&config));
    let screen = CampusBuzzScreen::mount(
        config,
        Catalog::sample(),
        &registry,
        Arc::new(NoopHaptics),
        main,
    )
    .unwrap();
    assert_eq!(registry.listener_count(), 1);

    screen.unmount();
    assert_eq!(registry.listener_count(), 0);
    assert!(!registry.dispatch());
}

/// Configuration and catalog load from files
#[test]
fn test_load_from_files() {
    let temp_dir = TempDir::new().unwrap();

    let config_path = temp_dir.path().join("feed.json");
    std::fs::write(&config_path, r#"{"swipeThreshold": 40, "screenWidth": 400}"#).unwrap();
    let config = FeedConfig::load(&config_path).unwrap();
    assert_eq!(config.swipe_threshold, 40.0);
    assert_eq!(config.dock_width(), 320.0);

    let items = vec![
        FeedItem::new("a", "img://a", "First", "Short A", "Long A"),
        FeedItem::new("b", "img://b", "Second", "Short B", "Long B"),
    ];
    let catalog_path = temp_dir.path().join("catalog.json");
    std::fs::write(&catalog_path, serde_json::to_string(&items).unwrap()).unwrap();
    let catalog = Catalog::load(&catalog_path).unwrap();

    let mut harness = Harness::new(config, catalog, Arc::new(NoopHaptics)).unwrap();
    // 50 clears the lowered threshold
    harness.swipe_card(50.0);
    assert!(harness.settle());
    assert_eq!(harness.screen.state(), idle(1));
    assert_eq!(harness.render().details.width, 320.0);

    harness.swipe_card(-50.0);
    assert!(harness.settle());
    assert_eq!(harness.screen.state(), idle(0));
}

/// The screen and a spawned animation context under paused time
#[tokio::test(start_paused = true)]
async fn test_spawned_animation_context() {
    let config = FeedConfig::default();
    let Bridge {
        main,
        animation,
        input,
    } = bridge(initial_frame(&config));
    let registry = BackHandlerRegistry::new();
    let mut screen = CampusBuzzScreen::mount(
        config.clone(),
        Catalog::sample(),
        &registry,
        Arc::new(NoopHaptics),
        main,
    )
    .unwrap();
    let animator = tokio::spawn(Animator::new(config, animation).run());

    for event in [
        PanEvent::began(),
        PanEvent::changed(-80.0),
        PanEvent::changed(-160.0),
        PanEvent::ended(-160.0),
    ] {
        assert!(input.send(InputEvent::CardPan(event)));
    }

    let first = screen.next_message().await;
    assert!(matches!(first, Some(MainMessage::SwipeCommitted(_))));
    while screen.state().animating {
        tokio::time::timeout(Duration::from_secs(5), screen.next_message())
            .await
            .expect("transition should finish")
            .expect("animation context alive");
    }
    assert_eq!(screen.state(), idle(1));

    screen.toggle_details();
    assert!(registry.dispatch());
    assert_eq!(
        screen.next_message().await,
        Some(MainMessage::BackPressed)
    );
    assert!(!screen.panel_state(PanelId::Details).open);

    drop(input);
    screen.unmount();
    tokio::time::timeout(Duration::from_secs(1), animator)
        .await
        .expect("animation context should stop")
        .unwrap();
}
