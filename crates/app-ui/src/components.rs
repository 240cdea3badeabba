//! Render tree for Campus Buzz
//!
//! Screens describe what to draw as plain serializable structs; the host UI
//! runtime turns them into native views. Nothing here draws or holds state.
//! Interactive elements carry an [`EventHandler`] that the host sends back
//! when the element is pressed.

use serde::{Deserialize, Serialize};

use app_platform::ImpactStyle;

use crate::navigation::NavigationTab;
use crate::theme::{Color, Theme};
use crate::tokens::{opacity, overlay, radius, sizing, z_index};

// =============================================================================
// Common Types
// =============================================================================

/// Action the host reports back when an element is pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "index", rename_all = "camelCase")]
pub enum EventHandler {
    /// Go back one card
    Undo,
    /// Open or close the settings sheet
    ToggleSettings,
    /// Open or close the details panel
    ToggleDetails,
    /// Jump to a catalog entry
    SelectItem(usize),
    /// Floating bell button
    PressBell,
    /// Switch tabs
    SelectTab(usize),
}

impl EventHandler {
    /// Whether pressing this element fires a light haptic tap
    ///
    /// Header actions tap; card links, panel controls and list rows do not.
    pub fn light_haptic(&self) -> bool {
        matches!(self, EventHandler::Undo | EventHandler::ToggleSettings)
    }
}

/// Icon symbol with a Material fallback for platforms without SF Symbols
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Icon {
    /// SF Symbol name
    pub symbol: String,
    /// Material Icons name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    /// Size in pixels
    pub size: f32,
    /// Tint
    pub color: Color,
}

impl Icon {
    /// Create an icon, resolving its Material fallback
    pub fn new(symbol: impl Into<String>, size: f32, color: impl Into<Color>) -> Self {
        let symbol = symbol.into();
        Self {
            material: material_icon(&symbol).map(str::to_string),
            symbol,
            size,
            color: color.into(),
        }
    }
}

/// Material Icons equivalent of an SF Symbol name
pub fn material_icon(symbol: &str) -> Option<&'static str> {
    let name = match symbol {
        "house.fill" => "home",
        "house" => "home-outlined",
        "paperplane.fill" => "send",
        "paperplane" => "send-outlined",
        "megaphone.fill" => "campaign",
        "megaphone" => "campaign-outlined",
        "person.2.fill" => "group",
        "person.2" => "group-outlined",
        "person.fill" => "account-circle",
        "person" => "account-circle-outlined",
        "chevron.right" => "chevron-right",
        "arrow.uturn.backward" => "undo",
        "arrow.backward" => "arrow-back",
        "slider.horizontal.3" => "tune",
        "info.circle" => "info-outline",
        "bell" => "notifications",
        _ => return None,
    };
    Some(name)
}

/// Pressable icon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconButton {
    /// Icon
    pub icon: Icon,
    /// Press handler
    pub on_press: EventHandler,
    /// Fire a light haptic on press (see [`EventHandler::light_haptic`])
    pub haptic: bool,
}

// =============================================================================
// Feed Components
// =============================================================================

/// Feed header bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    /// Title text
    pub title: String,
    /// Bottom border color
    pub border_color: Color,
    /// Header actions, left to right
    pub actions: Vec<IconButton>,
}

impl Header {
    /// Feed header with undo and settings actions
    pub fn feed(title: impl Into<String>, theme: &Theme) -> Self {
        Self {
            title: title.into(),
            border_color: theme.tint.clone(),
            actions: vec![
                IconButton {
                    icon: Icon::new("arrow.uturn.backward", sizing::icon::MD, theme.text.clone()),
                    on_press: EventHandler::Undo,
                    haptic: true,
                },
                IconButton {
                    icon: Icon::new("slider.horizontal.3", sizing::icon::MD, theme.text.clone()),
                    on_press: EventHandler::ToggleSettings,
                    haptic: true,
                },
            ],
        }
    }
}

/// The swipeable card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    /// Feed item id
    pub item_id: String,
    /// Image reference
    pub image_ref: String,
    /// Subheading
    pub title: String,
    /// Card text
    pub text: String,
    /// Horizontal translation
    pub translate_x: f32,
    /// Rotation in degrees
    pub rotate_deg: f32,
    /// Corner radius
    pub border_radius: f32,
    /// "Know more" link
    pub know_more: KnowMoreLink,
}

/// Link that opens the details panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowMoreLink {
    /// Link label
    pub label: String,
    /// Trailing icon
    pub icon: Icon,
    /// Press handler
    pub on_press: EventHandler,
}

impl KnowMoreLink {
    /// Standard link for the current theme
    pub fn new(theme: &Theme) -> Self {
        Self {
            label: "Know more about this event".to_string(),
            icon: Icon::new("info.circle", sizing::icon::SM, theme.tint.clone()),
            on_press: EventHandler::ToggleDetails,
        }
    }
}

/// Floating action button pinned to the bottom right of the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloatingButton {
    /// Icon
    pub icon: Icon,
    /// Fill
    pub background: Color,
    /// Diameter
    pub size: f32,
    /// Corner radius
    pub border_radius: f32,
    /// Android ripple color
    pub ripple: Color,
    /// Haptic fired on press
    pub haptic: ImpactStyle,
    /// Press handler
    pub on_press: EventHandler,
}

impl FloatingButton {
    /// The bell button
    pub fn bell(theme: &Theme) -> Self {
        Self {
            icon: Icon::new("bell", sizing::icon::MD, "#FFFFFF"),
            background: theme.fab_background.clone(),
            size: sizing::FAB,
            border_radius: radius::FULL,
            ripple: overlay::RIPPLE.to_string(),
            haptic: ImpactStyle::Medium,
            on_press: EventHandler::PressBell,
        }
    }
}

/// Dimming backdrop; pressing it closes the panel it covers for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backdrop {
    /// Fill
    pub color: Color,
    /// Layer
    pub z_index: i32,
    /// Press handler
    pub on_press: EventHandler,
}

/// Details panel sliding in from the right
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsPanelView {
    /// Header title
    pub title: String,
    /// Back arrow that closes the panel
    pub close: IconButton,
    /// Long-form text of the current item
    pub body: String,
    /// Panel width
    pub width: f32,
    /// Horizontal translation (0 = fully open)
    pub translate_x: f32,
    /// Open flag
    pub open: bool,
    /// Left edge border color
    pub border_color: Color,
    /// Layer
    pub z_index: i32,
}

/// One row in the settings sheet list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsEntry {
    /// Catalog position
    pub index: usize,
    /// Feed item id
    pub item_id: String,
    /// Thumbnail reference
    pub image_ref: String,
    /// Thumbnail edge length
    pub thumbnail_size: f32,
    /// Subheading
    pub title: String,
    /// Card text
    pub text: String,
    /// Whether this is the visible card
    pub selected: bool,
    /// Press handler
    pub on_press: EventHandler,
}

/// Drag handle at the top of the settings sheet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SheetHandle {
    /// Handle width
    pub width: f32,
    /// Handle height
    pub height: f32,
}

impl Default for SheetHandle {
    fn default() -> Self {
        Self {
            width: sizing::handle::WIDTH,
            height: sizing::handle::HEIGHT,
        }
    }
}

/// Settings sheet sliding up from the bottom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPanelView {
    /// Drag handle
    pub handle: SheetHandle,
    /// Catalog entries
    pub entries: Vec<SettingsEntry>,
    /// Vertical translation
    pub translate_y: f32,
    /// Open flag
    pub open: bool,
    /// Corner radius of the top edge
    pub border_radius: f32,
    /// Row separator color
    pub separator: Color,
    /// Layer
    pub z_index: i32,
}

/// Complete Campus Buzz render tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusBuzzView {
    /// Header bar
    pub header: Header,
    /// Visible card
    pub card: CardView,
    /// Floating bell button
    pub floating_button: FloatingButton,
    /// Backdrop, present while the details panel is open
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backdrop: Option<Backdrop>,
    /// Details panel
    pub details: DetailsPanelView,
    /// Settings sheet
    pub settings: SettingsPanelView,
    /// Screen background
    pub background: Color,
}

impl Backdrop {
    /// Backdrop behind the details panel
    pub fn for_details() -> Self {
        Self {
            color: overlay::BACKDROP.to_string(),
            z_index: z_index::OVERLAY,
            on_press: EventHandler::ToggleDetails,
        }
    }
}

// =============================================================================
// Shell Components
// =============================================================================

/// Tab bar item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabBarItem {
    /// Tab
    pub tab: NavigationTab,
    /// Label text
    pub label: String,
    /// Icon
    pub icon: Icon,
    /// Icon opacity (dimmed when not focused)
    pub opacity: f32,
    /// Whether this tab is active
    pub is_active: bool,
    /// Press handler
    pub on_press: EventHandler,
}

/// Bottom tab bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabBar {
    /// Items in display order
    pub items: Vec<TabBarItem>,
    /// Haptic feedback on tab press
    pub haptic_tabs: bool,
}

impl TabBar {
    /// Tab bar with `active` highlighted
    pub fn new(active: NavigationTab, theme: &Theme) -> Self {
        let items = NavigationTab::all()
            .into_iter()
            .enumerate()
            .map(|(position, tab)| {
                let is_active = tab == active;
                TabBarItem {
                    tab,
                    label: tab.label().to_string(),
                    icon: Icon::new(tab.icon(), sizing::icon::TAB, theme.tint.clone()),
                    opacity: if is_active {
                        opacity::TAB_FOCUSED
                    } else {
                        opacity::TAB_UNFOCUSED
                    },
                    is_active,
                    on_press: EventHandler::SelectTab(position),
                }
            })
            .collect();

        Self {
            items,
            haptic_tabs: true,
        }
    }

    /// Currently active tab
    pub fn active_tab(&self) -> Option<NavigationTab> {
        self.items.iter().find(|i| i.is_active).map(|i| i.tab)
    }
}

/// "Under development" screen body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderView {
    /// Large emoji
    pub emoji: String,
    /// Title
    pub title: String,
    /// Subtitle
    pub subtitle: String,
    /// Description paragraph
    pub description: String,
    /// Text color
    pub text_color: Color,
    /// Background
    pub background: Color,
}
