//! Messages between the main context and the animation context
//!
//! The feed runs on two cooperative contexts. The main context owns feed and
//! panel state and re-renders; the animation context owns animated values and
//! processes gesture samples every frame. They never share mutable state:
//! - main → animation: [`AnimationCommand`]
//! - animation → main: [`MainMessage`]
//! - host → animation: [`InputEvent`]
//! - animation → host: [`FrameSnapshot`] over a watch channel

use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, watch};

use crate::animation::Ticket;
use crate::gesture::{PanEvent, Side};

/// Animated values owned by the animation context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Channel {
    /// Card horizontal offset
    CardOffset,
    /// Card rotation factor
    CardRotation,
    /// Details panel horizontal offset
    DetailsPosition,
    /// Settings sheet vertical offset
    SettingsPosition,
}

/// Request from the main context to the animation context
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationCommand {
    /// Snap a channel to a value
    Set {
        /// Target channel
        channel: Channel,
        /// New value
        value: f32,
    },
    /// Spring a channel toward a target, redirecting any in-flight spring
    SpringTo {
        /// Target channel
        channel: Channel,
        /// Spring target
        target: f32,
        /// Reported back in [`MainMessage::AnimationFinished`] when set
        ticket: Option<Ticket>,
    },
}

/// Notification from the animation context to the main context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMessage {
    /// A card drag was released past the threshold
    SwipeCommitted(Side),
    /// A ticketed animation ended
    AnimationFinished {
        /// Ticket from the originating command
        ticket: Ticket,
        /// False if redirected before settling
        finished: bool,
    },
    /// The settings sheet was dragged closed
    SettingsDismissed,
    /// A settings drag was released short of the dismiss threshold
    SettingsRestored,
    /// The platform back signal was claimed for the details panel
    BackPressed,
}

/// Host input routed to the animation context
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "target", content = "event", rename_all = "camelCase")]
pub enum InputEvent {
    /// Horizontal pan on the feed card
    CardPan(PanEvent),
    /// Vertical pan on the settings sheet handle
    SettingsPan(PanEvent),
}

/// Animated values as of the last frame
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSnapshot {
    /// Card horizontal offset
    pub card_offset: f32,
    /// Card rotation factor
    pub card_rotation: f32,
    /// Details panel horizontal offset
    pub details_position: f32,
    /// Settings sheet vertical offset
    pub settings_position: f32,
}

impl FrameSnapshot {
    /// Value of a channel
    pub fn get(&self, channel: Channel) -> f32 {
        match channel {
            Channel::CardOffset => self.card_offset,
            Channel::CardRotation => self.card_rotation,
            Channel::DetailsPosition => self.details_position,
            Channel::SettingsPosition => self.settings_position,
        }
    }
}

/// Sender for posting messages onto the main context queue
#[derive(Debug, Clone)]
pub struct MessagePoster {
    tx: mpsc::UnboundedSender<MainMessage>,
}

impl MessagePoster {
    /// Queue a message; returns false once the main context is gone
    pub fn post(&self, message: MainMessage) -> bool {
        self.tx.send(message).is_ok()
    }
}

/// Host-side sender for gesture input
#[derive(Debug, Clone)]
pub struct InputSender {
    tx: mpsc::UnboundedSender<InputEvent>,
}

impl InputSender {
    /// Queue an input event; returns false once the animation context is gone
    pub fn send(&self, event: InputEvent) -> bool {
        self.tx.send(event).is_ok()
    }
}

/// Main context end of the bridge
#[derive(Debug)]
pub struct MainEndpoint {
    commands: mpsc::UnboundedSender<AnimationCommand>,
    messages: mpsc::UnboundedReceiver<MainMessage>,
    poster: MessagePoster,
    frames: watch::Receiver<FrameSnapshot>,
    next_ticket: u64,
}

impl MainEndpoint {
    /// Send a command to the animation context
    pub fn send(&self, command: AnimationCommand) {
        if self.commands.send(command).is_err() {
            tracing::debug!(?command, "Animation context stopped, dropping command");
        }
    }

    /// Allocate a fresh completion ticket
    pub fn next_ticket(&mut self) -> Ticket {
        self.next_ticket += 1;
        Ticket(self.next_ticket)
    }

    /// Next queued message without waiting
    pub fn try_recv(&mut self) -> Option<MainMessage> {
        self.messages.try_recv().ok()
    }

    /// Wait for the next message
    pub async fn recv(&mut self) -> Option<MainMessage> {
        self.messages.recv().await
    }

    /// Poster for callers that need to queue work onto the main context
    pub fn poster(&self) -> MessagePoster {
        self.poster.clone()
    }

    /// Most recently published frame
    pub fn latest_frame(&self) -> FrameSnapshot {
        *self.frames.borrow()
    }

    /// Subscribe to published frames
    pub fn subscribe_frames(&self) -> watch::Receiver<FrameSnapshot> {
        self.frames.clone()
    }
}

/// Animation context end of the bridge
#[derive(Debug)]
pub struct AnimationEndpoint {
    pub(crate) commands: mpsc::UnboundedReceiver<AnimationCommand>,
    pub(crate) input: mpsc::UnboundedReceiver<InputEvent>,
    messages: mpsc::UnboundedSender<MainMessage>,
    frames: watch::Sender<FrameSnapshot>,
}

impl AnimationEndpoint {
    /// Queue a message for the main context
    pub fn post(&self, message: MainMessage) {
        if self.messages.send(message).is_err() {
            tracing::debug!(?message, "Main context stopped, dropping message");
        }
    }

    /// Publish the latest frame
    pub fn publish(&self, frame: FrameSnapshot) {
        self.frames.send_replace(frame);
    }

    /// Next queued command without waiting
    pub fn try_recv_command(&mut self) -> Option<AnimationCommand> {
        self.commands.try_recv().ok()
    }

    /// Next queued input event without waiting
    pub fn try_recv_input(&mut self) -> Option<InputEvent> {
        self.input.try_recv().ok()
    }
}

/// Both ends of a freshly created bridge plus the host input sender
#[derive(Debug)]
pub struct Bridge {
    /// Main context end
    pub main: MainEndpoint,
    /// Animation context end
    pub animation: AnimationEndpoint,
    /// Host gesture input
    pub input: InputSender,
}

/// Create a connected bridge whose first frame is `initial`
pub fn bridge(initial: FrameSnapshot) -> Bridge {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (message_tx, message_rx) = mpsc::unbounded_channel();
    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let (frame_tx, frame_rx) = watch::channel(initial);

    Bridge {
        main: MainEndpoint {
            commands: command_tx,
            messages: message_rx,
            poster: MessagePoster {
                tx: message_tx.clone(),
            },
            frames: frame_rx,
            next_ticket: 0,
        },
        animation: AnimationEndpoint {
            commands: command_rx,
            input: input_rx,
            messages: message_tx,
            frames: frame_tx,
        },
        input: InputSender { tx: input_tx },
    }
}
