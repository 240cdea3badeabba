//! Application screens
//!
//! [`CampusBuzzScreen`] is the main context of the feed. It owns the catalog,
//! the feed controller and the panel flags, reacts to messages from the
//! animation context, and renders a [`CampusBuzzView`] from the latest frame.
//! All animated values live in the animation context and are only ever
//! changed by sending it [`AnimationCommand`]s.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use uuid::Uuid;

use app_core::{Catalog, FeedItem};
use app_platform::{BackHandlerRegistry, BackSubscription, HapticEngine, ImpactStyle};
use app_state::{
    AnimationCommand, Channel, ConfigError, FeedConfig, FeedController, FeedError, FeedState,
    FrameSnapshot, MainEndpoint, MainMessage, PanelCoordinator, PanelId, PanelState, Side, Ticket,
    Transition,
};

use crate::components::{
    Backdrop, CampusBuzzView, CardView, DetailsPanelView, EventHandler, FloatingButton, Header,
    Icon, IconButton, KnowMoreLink, PlaceholderView, SettingsEntry, SettingsPanelView, SheetHandle,
};
use crate::navigation::NavigationTab;
use crate::theme::Theme;
use crate::tokens::{radius, sizing, z_index};

/// Header title of the feed
pub const FEED_TITLE: &str = "Noblex - Campus Buzz";

/// Header title of the details panel
pub const DETAILS_TITLE: &str = "Event Details";

/// Screen errors
#[derive(Debug, thiserror::Error)]
pub enum ScreenError {
    /// Feed configuration failed validation
    #[error("Invalid feed configuration: {0}")]
    Config(#[from] ConfigError),

    /// Feed navigation error
    #[error(transparent)]
    Feed(#[from] FeedError),
}

/// Result type for screen operations
pub type Result<T> = std::result::Result<T, ScreenError>;

// =============================================================================
// Placeholder Screens
// =============================================================================

/// "Under development" screen for tabs that are not built yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderScreen {
    /// Tab this screen belongs to
    pub tab: NavigationTab,
    emoji: &'static str,
    description: &'static str,
}

impl PlaceholderScreen {
    /// Placeholder for a tab; `None` for tabs that have a real screen
    pub fn for_tab(tab: NavigationTab) -> Option<Self> {
        let (emoji, description) = match tab {
            NavigationTab::Home => (
                "🏠",
                "Your campus at a glance. This feature is currently being built. Check back later!",
            ),
            NavigationTab::Experientia => (
                "🚀",
                "Discover experiences happening around campus. This feature is currently being built. Check back later!",
            ),
            NavigationTab::Networking => (
                "🤝",
                "Connect with fellow students and professionals. This feature is currently being built. Check back later!",
            ),
            NavigationTab::Profile => (
                "👤",
                "Manage your personal information and preferences. This feature is currently being built. Check back later!",
            ),
            NavigationTab::CampusBuzz => return None,
        };
        Some(Self {
            tab,
            emoji,
            description,
        })
    }

    /// Render tree for this screen
    pub fn render(&self, theme: &Theme) -> PlaceholderView {
        PlaceholderView {
            emoji: self.emoji.to_string(),
            title: self.tab.label().to_string(),
            subtitle: "Under Development".to_string(),
            description: self.description.to_string(),
            text_color: theme.text.clone(),
            background: theme.background.clone(),
        }
    }
}

// =============================================================================
// Campus Buzz Screen
// =============================================================================

/// Card animation the screen is waiting on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CardStep {
    Exiting(Ticket),
    Entering(Ticket),
}

/// The swipeable event feed
pub struct CampusBuzzScreen {
    id: Uuid,
    config: FeedConfig,
    catalog: Catalog,
    feed: FeedController,
    panels: PanelCoordinator,
    endpoint: MainEndpoint,
    haptics: Arc<dyn HapticEngine>,
    theme: Theme,
    // Read by the back listener on the platform's thread; written only here.
    details_open: Arc<AtomicBool>,
    back_subscription: Option<BackSubscription>,
    card_step: Option<CardStep>,
}

impl fmt::Debug for CampusBuzzScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CampusBuzzScreen")
            .field("id", &self.id)
            .field("feed", &self.feed.state())
            .field("details_open", &self.panels.is_open(PanelId::Details))
            .field("settings_open", &self.panels.is_open(PanelId::Settings))
            .finish()
    }
}

impl CampusBuzzScreen {
    /// Mount the screen and register its back listener
    pub fn mount(
        config: FeedConfig,
        catalog: Catalog,
        registry: &BackHandlerRegistry,
        haptics: Arc<dyn HapticEngine>,
        endpoint: MainEndpoint,
    ) -> Result<Self> {
        config.validate()?;
        let feed = FeedController::new(catalog.len())?;
        let panels = PanelCoordinator::from_config(&config);

        let details_open = Arc::new(AtomicBool::new(false));
        let back_subscription = {
            let details_open = Arc::clone(&details_open);
            let poster = endpoint.poster();
            registry.add_listener(move || {
                if !details_open.load(Ordering::Acquire) {
                    return false;
                }
                poster.post(MainMessage::BackPressed);
                true
            })
        };

        let id = Uuid::new_v4();
        tracing::info!(screen = %id, items = catalog.len(), "Campus Buzz mounted");

        Ok(Self {
            id,
            config,
            catalog,
            feed,
            panels,
            endpoint,
            haptics,
            theme: Theme::default(),
            details_open,
            back_subscription: Some(back_subscription),
            card_step: None,
        })
    }

    /// Instance id, for correlating log lines
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Switch palettes
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Observable feed state
    pub fn state(&self) -> FeedState {
        self.feed.state()
    }

    /// Open flag and last published position of a panel
    pub fn panel_state(&self, id: PanelId) -> PanelState {
        let frame = self.endpoint.latest_frame();
        PanelState {
            open: self.panels.is_open(id),
            position: frame.get(panel_channel(id)),
        }
    }

    /// Item on the visible card
    pub fn current_item(&self) -> &FeedItem {
        // The controller keeps the index inside the non-empty catalog
        &self.catalog.items()[self.feed.current_index()]
    }

    /// Catalog backing the feed
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // -------------------------------------------------------------------------
    // User actions
    // -------------------------------------------------------------------------

    /// Header undo button: step back one card
    ///
    /// Returns false if a card transition is already running.
    pub fn undo(&mut self) -> bool {
        match self.feed.undo() {
            Some(transition) => {
                self.start_exit(transition);
                true
            }
            None => false,
        }
    }

    /// Open or close the details panel
    pub fn toggle_details(&mut self) {
        self.toggle_panel(PanelId::Details);
    }

    /// Open or close the settings sheet
    pub fn toggle_settings(&mut self) {
        self.toggle_panel(PanelId::Settings);
    }

    /// Settings list row: show an item immediately and close the sheet
    pub fn select_item(&mut self, index: usize) -> Result<()> {
        self.feed.jump_to(index)?;
        tracing::info!(index, "Item selected");
        if let Some(target) = self.panels.close(PanelId::Settings) {
            self.spring_panel(PanelId::Settings, target);
        }
        Ok(())
    }

    /// Floating bell button
    pub fn press_bell(&self) {
        self.haptics.impact(ImpactStyle::Medium);
    }

    /// Dispatch a pressed element from the render tree
    pub fn handle_event(&mut self, event: EventHandler) -> Result<()> {
        if event.light_haptic() {
            self.haptics.impact(ImpactStyle::Light);
        }
        match event {
            EventHandler::Undo => {
                self.undo();
            }
            EventHandler::ToggleSettings => self.toggle_settings(),
            EventHandler::ToggleDetails => self.toggle_details(),
            EventHandler::SelectItem(index) => self.select_item(index)?,
            EventHandler::PressBell => self.press_bell(),
            EventHandler::SelectTab(_) => {
                tracing::debug!(?event, "Tab selection belongs to the shell")
            }
        }
        Ok(())
    }

    /// Back signal claimed by this screen's listener
    ///
    /// Returns whether the details panel was closed.
    pub fn handle_back_press(&mut self) -> bool {
        let consumed = self.panels.handle_back();
        if consumed {
            self.sync_back_mirror();
            self.spring_panel(PanelId::Details, self.panels.target_position(PanelId::Details));
        }
        consumed
    }

    // -------------------------------------------------------------------------
    // Messages from the animation context
    // -------------------------------------------------------------------------

    /// Apply one message from the animation context
    pub fn handle_message(&mut self, message: MainMessage) {
        match message {
            MainMessage::SwipeCommitted(side) => self.on_swipe(side),
            MainMessage::AnimationFinished { ticket, finished } => {
                self.on_animation_finished(ticket, finished)
            }
            MainMessage::SettingsDismissed => {
                self.panels.mark_closed(PanelId::Settings);
                tracing::info!("Settings dismissed by drag");
            }
            MainMessage::SettingsRestored => {
                self.panels.mark_open(PanelId::Settings);
            }
            MainMessage::BackPressed => {
                self.handle_back_press();
            }
        }
    }

    /// Apply every queued message; returns how many were handled
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Some(message) = self.endpoint.try_recv() {
            self.handle_message(message);
            handled += 1;
        }
        handled
    }

    /// Wait for the next message and apply it
    ///
    /// Returns `None` once the animation context is gone.
    pub async fn next_message(&mut self) -> Option<MainMessage> {
        let message = self.endpoint.recv().await?;
        self.handle_message(message);
        Some(message)
    }

    fn on_swipe(&mut self, side: Side) {
        match self.feed.swipe(side) {
            Some(transition) => self.start_exit(transition),
            None => tracing::debug!(?side, "Swipe dropped during transition"),
        }
    }

    fn on_animation_finished(&mut self, ticket: Ticket, finished: bool) {
        match self.card_step {
            Some(CardStep::Exiting(expected)) if expected == ticket => {
                if !finished {
                    tracing::debug!(?ticket, "Exit animation interrupted");
                }
                match self.feed.finish_exit() {
                    Some(transition) => self.start_enter(transition),
                    None => self.card_step = None,
                }
            }
            Some(CardStep::Entering(expected)) if expected == ticket => {
                self.feed.finish_enter();
                self.card_step = None;
                tracing::debug!(index = self.feed.current_index(), "Card transition finished");
            }
            _ => tracing::warn!(?ticket, finished, "Completion for unknown ticket"),
        }
    }

    fn start_exit(&mut self, transition: Transition) {
        let ticket = self.endpoint.next_ticket();
        self.card_step = Some(CardStep::Exiting(ticket));
        self.endpoint.send(AnimationCommand::SpringTo {
            channel: Channel::CardOffset,
            target: transition.exit.sign() * self.config.screen_width,
            ticket: Some(ticket),
        });
        if !transition.with_rotation {
            self.endpoint.send(AnimationCommand::SpringTo {
                channel: Channel::CardRotation,
                target: 0.0,
                ticket: None,
            });
        }
    }

    fn start_enter(&mut self, transition: Transition) {
        let ticket = self.endpoint.next_ticket();
        self.card_step = Some(CardStep::Entering(ticket));
        self.endpoint.send(AnimationCommand::Set {
            channel: Channel::CardOffset,
            value: transition.enter_from.sign() * self.config.screen_width,
        });
        self.endpoint.send(AnimationCommand::SpringTo {
            channel: Channel::CardOffset,
            target: 0.0,
            ticket: Some(ticket),
        });
        let rotation = if transition.with_rotation {
            AnimationCommand::SpringTo {
                channel: Channel::CardRotation,
                target: 0.0,
                ticket: None,
            }
        } else {
            AnimationCommand::Set {
                channel: Channel::CardRotation,
                value: 0.0,
            }
        };
        self.endpoint.send(rotation);
    }

    fn toggle_panel(&mut self, id: PanelId) {
        let target = self.panels.toggle(id);
        if id == PanelId::Details {
            self.sync_back_mirror();
        }
        self.spring_panel(id, target);
    }

    fn spring_panel(&self, id: PanelId, target: f32) {
        self.endpoint.send(AnimationCommand::SpringTo {
            channel: panel_channel(id),
            target,
            ticket: None,
        });
    }

    fn sync_back_mirror(&self) {
        self.details_open
            .store(self.panels.is_open(PanelId::Details), Ordering::Release);
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Render tree for a frame
    pub fn render(&self, frame: &FrameSnapshot) -> CampusBuzzView {
        let theme = &self.theme;
        let item = self.current_item();
        let current = self.feed.current_index();
        let details_open = self.panels.is_open(PanelId::Details);

        let entries = self
            .catalog
            .iter()
            .enumerate()
            .map(|(index, entry)| SettingsEntry {
                index,
                item_id: entry.id.clone(),
                image_ref: entry.image_ref.clone(),
                thumbnail_size: sizing::THUMBNAIL,
                title: entry.title.clone(),
                text: entry.short_text.clone(),
                selected: index == current,
                on_press: EventHandler::SelectItem(index),
            })
            .collect();

        CampusBuzzView {
            header: Header::feed(FEED_TITLE, theme),
            card: CardView {
                item_id: item.id.clone(),
                image_ref: item.image_ref.clone(),
                title: item.title.clone(),
                text: item.short_text.clone(),
                translate_x: frame.card_offset,
                rotate_deg: frame.card_rotation * self.config.rotation_degrees,
                border_radius: radius::MD,
                know_more: KnowMoreLink::new(theme),
            },
            floating_button: FloatingButton::bell(theme),
            backdrop: details_open.then(Backdrop::for_details),
            details: DetailsPanelView {
                title: DETAILS_TITLE.to_string(),
                close: IconButton {
                    icon: Icon::new("arrow.backward", sizing::icon::MD, theme.text.clone()),
                    on_press: EventHandler::ToggleDetails,
                    haptic: false,
                },
                body: item.long_text.clone(),
                width: self.config.dock_width(),
                translate_x: frame.details_position,
                open: details_open,
                border_color: theme.panel_border.clone(),
                z_index: z_index::PANEL,
            },
            settings: SettingsPanelView {
                handle: SheetHandle::default(),
                entries,
                translate_y: frame.settings_position,
                open: self.panels.is_open(PanelId::Settings),
                border_radius: radius::XL,
                separator: theme.separator.clone(),
                z_index: z_index::PANEL,
            },
            background: theme.background.clone(),
        }
    }

    /// Render tree for the most recently published frame
    pub fn render_latest(&self) -> CampusBuzzView {
        self.render(&self.endpoint.latest_frame())
    }

    /// Tear down the screen and deregister its back listener
    pub fn unmount(mut self) {
        if let Some(subscription) = self.back_subscription.take() {
            subscription.remove();
        }
        tracing::info!(screen = %self.id, "Campus Buzz unmounted");
    }
}

fn panel_channel(id: PanelId) -> Channel {
    match id {
        PanelId::Details => Channel::DetailsPosition,
        PanelId::Settings => Channel::SettingsPosition,
    }
}
