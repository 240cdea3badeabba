//! Campus Buzz demo
//!
//! Mounts the feed, runs the animation context on its own task and plays a
//! short scripted session against it, logging each step and printing the
//! final render tree as JSON.
//!
//! Environment:
//! - `RUST_LOG`: log filter (default `info`)
//! - `CAMPUS_BUZZ_CONFIG`: optional feed configuration file
//! - `CAMPUS_BUZZ_CATALOG`: optional catalog file (JSON array of items)

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use app_core::Catalog;
use app_platform::{BackHandlerRegistry, TracingHaptics};
use app_state::{
    bridge, initial_frame, Animator, Bridge, FeedConfig, InputEvent, InputSender, PanEvent,
};
use app_ui::CampusBuzzScreen;

const CONFIG_ENV: &str = "CAMPUS_BUZZ_CONFIG";
const CATALOG_ENV: &str = "CAMPUS_BUZZ_CATALOG";

/// Upper bound for one card transition to finish
const TRANSITION_TIMEOUT: Duration = Duration::from_secs(5);

fn load_config() -> anyhow::Result<FeedConfig> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => FeedConfig::load(&path)
            .with_context(|| format!("loading feed configuration from {}", path.to_string_lossy())),
        None => Ok(FeedConfig::default()),
    }
}

fn load_catalog() -> anyhow::Result<Catalog> {
    match std::env::var_os(CATALOG_ENV) {
        Some(path) => Catalog::load(&path)
            .with_context(|| format!("loading catalog from {}", path.to_string_lossy())),
        None => Ok(Catalog::sample()),
    }
}

fn drag_card(input: &InputSender, translation: f32) {
    for event in [
        PanEvent::began(),
        PanEvent::changed(translation),
        PanEvent::ended(translation),
    ] {
        input.send(InputEvent::CardPan(event));
    }
}

/// Handle messages until the card transition in flight has finished
async fn await_card(screen: &mut CampusBuzzScreen) -> anyhow::Result<()> {
    tokio::time::timeout(TRANSITION_TIMEOUT, async {
        loop {
            screen
                .next_message()
                .await
                .context("animation context stopped")?;
            if !screen.state().animating {
                return anyhow::Ok(());
            }
        }
    })
    .await
    .context("card transition timed out")?
}

fn log_card(screen: &CampusBuzzScreen, step: &str) {
    let item = screen.current_item();
    tracing::info!(
        step,
        index = screen.state().current_index,
        id = %item.id,
        text = %item.short_text,
        "Card shown"
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config()?;
    let catalog = load_catalog()?;

    let Bridge {
        main,
        animation,
        input,
    } = bridge(initial_frame(&config));
    let registry = BackHandlerRegistry::new();
    let mut screen = CampusBuzzScreen::mount(
        config.clone(),
        catalog,
        &registry,
        Arc::new(TracingHaptics),
        main,
    )?;
    let animator = tokio::spawn(Animator::new(config, animation).run());

    log_card(&screen, "mounted");

    drag_card(&input, -160.0);
    await_card(&mut screen).await?;
    log_card(&screen, "swipe left");

    drag_card(&input, 160.0);
    await_card(&mut screen).await?;
    log_card(&screen, "swipe right");

    if screen.undo() {
        await_card(&mut screen).await?;
    }
    log_card(&screen, "undo");

    screen.toggle_details();
    let consumed = registry.dispatch();
    screen
        .next_message()
        .await
        .context("animation context stopped")?;
    tracing::info!(consumed, "Back pressed with details open");

    screen.press_bell();

    screen.toggle_settings();
    screen.select_item(2)?;
    log_card(&screen, "selected from settings");

    let view = screen.render_latest();
    println!("{}", serde_json::to_string_pretty(&view)?);

    drop(input);
    screen.unmount();
    animator.await.context("animation context panicked")?;
    Ok(())
}
