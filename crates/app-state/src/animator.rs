//! Animation context
//!
//! The [`Animator`] owns every animated value of the feed and evaluates
//! gesture samples against them, the way a UI runtime's animation thread
//! does. Anything that must change feed or panel state is sent to the main
//! context as a [`MainMessage`] instead of being applied here.
//!
//! The animator can be driven synchronously (`drain` + `tick`) for
//! deterministic stepping, or spawned with [`Animator::run`] which drives
//! frames from a tokio interval.

use std::time::Duration;
use tokio::time::MissedTickBehavior;

use crate::animation::{AnimatedValue, Completion};
use crate::config::FeedConfig;
use crate::dispatch::{
    AnimationCommand, AnimationEndpoint, Channel, FrameSnapshot, InputEvent, MainMessage,
};
use crate::gesture::{CardGesture, DragOutcome, PanEvent, PanPhase, SheetDrag, SwipeOutcome};

/// Frame snapshot with both panels closed and the card centered
pub fn initial_frame(config: &FeedConfig) -> FrameSnapshot {
    FrameSnapshot {
        card_offset: 0.0,
        card_rotation: 0.0,
        details_position: config.details_closed_position(),
        settings_position: config.settings_closed_position(),
    }
}

/// Owner of the feed's animated values
#[derive(Debug)]
pub struct Animator {
    config: FeedConfig,
    card_offset: AnimatedValue,
    card_rotation: AnimatedValue,
    details_position: AnimatedValue,
    settings_position: AnimatedValue,
    card_gesture: CardGesture,
    sheet_drag: SheetDrag,
    endpoint: AnimationEndpoint,
}

impl Animator {
    /// Create an animator at the initial frame
    pub fn new(config: FeedConfig, endpoint: AnimationEndpoint) -> Self {
        let frame = initial_frame(&config);
        let animator = Self {
            card_offset: AnimatedValue::new(frame.card_offset),
            card_rotation: AnimatedValue::new(frame.card_rotation),
            details_position: AnimatedValue::new(frame.details_position),
            settings_position: AnimatedValue::new(frame.settings_position),
            card_gesture: CardGesture::new(config.swipe_threshold),
            sheet_drag: SheetDrag::new(config.settings_open_position(), config.dismiss_threshold),
            config,
            endpoint,
        };
        animator.endpoint.publish(frame);
        animator
    }

    /// Read an animated value
    pub fn value(&self, channel: Channel) -> &AnimatedValue {
        match channel {
            Channel::CardOffset => &self.card_offset,
            Channel::CardRotation => &self.card_rotation,
            Channel::DetailsPosition => &self.details_position,
            Channel::SettingsPosition => &self.settings_position,
        }
    }

    fn value_mut(&mut self, channel: Channel) -> &mut AnimatedValue {
        match channel {
            Channel::CardOffset => &mut self.card_offset,
            Channel::CardRotation => &mut self.card_rotation,
            Channel::DetailsPosition => &mut self.details_position,
            Channel::SettingsPosition => &mut self.settings_position,
        }
    }

    /// Current values of every channel
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            card_offset: self.card_offset.value(),
            card_rotation: self.card_rotation.value(),
            details_position: self.details_position.value(),
            settings_position: self.settings_position.value(),
        }
    }

    /// Whether any channel has a spring in flight
    pub fn is_animating(&self) -> bool {
        self.card_offset.is_animating()
            || self.card_rotation.is_animating()
            || self.details_position.is_animating()
            || self.settings_position.is_animating()
    }

    /// Apply a command from the main context
    pub fn handle_command(&mut self, command: AnimationCommand) {
        let interrupted = match command {
            AnimationCommand::Set { channel, value } => self.value_mut(channel).set(value),
            AnimationCommand::SpringTo {
                channel,
                target,
                ticket,
            } => {
                let spring = self.config.spring;
                self.value_mut(channel).spring_to(target, spring, ticket)
            }
        };
        self.report(interrupted);
    }

    /// Apply a gesture sample from the host
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::CardPan(pan) => self.handle_card_pan(pan),
            InputEvent::SettingsPan(pan) => self.handle_settings_pan(pan),
        }
    }

    fn handle_card_pan(&mut self, pan: PanEvent) {
        match pan.phase {
            PanPhase::Began => {
                // A ticketed offset spring is a card transition; dragging it
                // would strand the main context waiting on its completion.
                if self.card_transition_in_flight() {
                    tracing::debug!("Card transition in flight, ignoring pan");
                    return;
                }
                self.card_gesture.begin(self.card_offset.value());
            }
            PanPhase::Changed => {
                if self.card_transition_in_flight() {
                    return;
                }
                if let Some(pose) = self.card_gesture.update(pan.translation) {
                    let offset = self.card_offset.set(pose.offset);
                    let rotation = self.card_rotation.set(pose.rotation);
                    self.report(offset);
                    self.report(rotation);
                }
            }
            PanPhase::Ended => match self.card_gesture.end(pan.translation) {
                Some(_) if self.card_transition_in_flight() => {
                    tracing::debug!("Card transition started mid-drag, discarding release");
                }
                Some(SwipeOutcome::Commit(side)) => {
                    tracing::info!(?side, translation = pan.translation, "Swipe committed");
                    self.endpoint.post(MainMessage::SwipeCommitted(side));
                }
                Some(SwipeOutcome::Cancel) => {
                    let spring = self.config.spring;
                    let offset = self.card_offset.spring_to(0.0, spring, None);
                    let rotation = self.card_rotation.spring_to(0.0, spring, None);
                    self.report(offset);
                    self.report(rotation);
                }
                None => {}
            },
        }
    }

    fn card_transition_in_flight(&self) -> bool {
        self.card_offset.pending_ticket().is_some()
    }

    fn handle_settings_pan(&mut self, pan: PanEvent) {
        match pan.phase {
            PanPhase::Began => self.sheet_drag.begin(self.settings_position.value()),
            PanPhase::Changed => {
                if let Some(position) = self.sheet_drag.update(pan.translation) {
                    let interrupted = self.settings_position.set(position);
                    self.report(interrupted);
                }
            }
            PanPhase::Ended => {
                let spring = self.config.spring;
                let interrupted = match self.sheet_drag.end(pan.translation) {
                    Some(DragOutcome::Dismiss) => {
                        let closed = self.config.settings_closed_position();
                        let interrupted = self.settings_position.spring_to(closed, spring, None);
                        self.endpoint.post(MainMessage::SettingsDismissed);
                        interrupted
                    }
                    Some(DragOutcome::Restore) => {
                        let open = self.config.settings_open_position();
                        let interrupted = self.settings_position.spring_to(open, spring, None);
                        self.endpoint.post(MainMessage::SettingsRestored);
                        interrupted
                    }
                    None => None,
                };
                self.report(interrupted);
            }
        }
    }

    /// Apply every queued command and input event; returns how many were handled
    pub fn drain(&mut self) -> usize {
        let mut handled = 0;
        while let Some(command) = self.endpoint.try_recv_command() {
            self.handle_command(command);
            handled += 1;
        }
        while let Some(event) = self.endpoint.try_recv_input() {
            self.handle_input(event);
            handled += 1;
        }
        if handled > 0 {
            self.endpoint.publish(self.snapshot());
        }
        handled
    }

    /// Advance every spring by `dt` and publish the resulting frame
    pub fn tick(&mut self, dt: Duration) {
        let completions = [
            self.card_offset.step(dt),
            self.card_rotation.step(dt),
            self.details_position.step(dt),
            self.settings_position.step(dt),
        ];
        for completion in completions {
            self.report(completion);
        }
        self.endpoint.publish(self.snapshot());
    }

    fn report(&self, completion: Option<Completion>) {
        if let Some(Completion { ticket, finished }) = completion {
            self.endpoint
                .post(MainMessage::AnimationFinished { ticket, finished });
        }
    }

    /// Run the animation context until the main context goes away
    pub async fn run(mut self) {
        let frame_interval = self.config.frame_interval();
        let mut frames = tokio::time::interval(frame_interval);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut last_frame = tokio::time::Instant::now();

        tracing::debug!(?frame_interval, "Animation context started");
        loop {
            tokio::select! {
                command = self.endpoint.commands.recv() => match command {
                    Some(command) => self.handle_command(command),
                    None => break,
                },
                Some(event) = self.endpoint.input.recv() => self.handle_input(event),
                now = frames.tick() => {
                    let dt = now.saturating_duration_since(last_frame);
                    last_frame = now;
                    self.tick(dt);
                }
            }
        }
        tracing::debug!("Animation context stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Ticket;
    use crate::dispatch::{bridge, Bridge, MainEndpoint};
    use crate::gesture::Side;

    const FRAME: Duration = Duration::from_millis(16);

    fn setup() -> (Animator, MainEndpoint) {
        let config = FeedConfig::default();
        let Bridge {
            main, animation, ..
        } = bridge(initial_frame(&config));
        (Animator::new(config, animation), main)
    }

    fn settle(animator: &mut Animator) {
        for _ in 0..1_000 {
            if !animator.is_animating() {
                return;
            }
            animator.tick(FRAME);
        }
        panic!("animator did not settle");
    }

    fn pan(animator: &mut Animator, translation: f32) {
        animator.handle_input(InputEvent::CardPan(PanEvent::began()));
        animator.handle_input(InputEvent::CardPan(PanEvent::changed(translation / 2.0)));
        animator.handle_input(InputEvent::CardPan(PanEvent::changed(translation)));
        animator.handle_input(InputEvent::CardPan(PanEvent::ended(translation)));
    }

    #[test]
    fn test_initial_frame_has_panels_closed() {
        let (animator, main) = setup();
        let frame = animator.snapshot();
        assert_eq!(frame.details_position, 312.0);
        assert_eq!(frame.settings_position, 844.0);
        assert_eq!(main.latest_frame(), frame);
    }

    #[test]
    fn test_drag_moves_card() {
        let (mut animator, _main) = setup();
        animator.handle_input(InputEvent::CardPan(PanEvent::began()));
        animator.handle_input(InputEvent::CardPan(PanEvent::changed(-60.0)));

        let frame = animator.snapshot();
        assert_eq!(frame.card_offset, -60.0);
        assert_eq!(frame.card_rotation, -0.6);
    }

    #[test]
    fn test_commit_posts_to_main() {
        let (mut animator, mut main) = setup();
        pan(&mut animator, 101.0);
        assert_eq!(main.try_recv(), Some(MainMessage::SwipeCommitted(Side::Right)));
        // Card stays where it was released until the main context reacts
        assert_eq!(animator.snapshot().card_offset, 101.0);
    }

    #[test]
    fn test_threshold_drag_cancels_to_zero() {
        let (mut animator, mut main) = setup();
        pan(&mut animator, 100.0);
        assert_eq!(main.try_recv(), None);

        settle(&mut animator);
        let frame = animator.snapshot();
        assert_eq!(frame.card_offset, 0.0);
        assert_eq!(frame.card_rotation, 0.0);
    }

    #[test]
    fn test_pan_ignored_during_transition() {
        let (mut animator, mut main) = setup();
        animator.handle_command(AnimationCommand::SpringTo {
            channel: Channel::CardOffset,
            target: -390.0,
            ticket: Some(Ticket(1)),
        });
        pan(&mut animator, 150.0);

        assert_eq!(main.try_recv(), None);
        assert_eq!(animator.value(Channel::CardOffset).pending_ticket(), Some(Ticket(1)));
    }

    #[test]
    fn test_transition_mid_drag_discards_release() {
        let (mut animator, mut main) = setup();
        animator.handle_input(InputEvent::CardPan(PanEvent::began()));
        animator.handle_input(InputEvent::CardPan(PanEvent::changed(40.0)));
        animator.handle_command(AnimationCommand::SpringTo {
            channel: Channel::CardOffset,
            target: 390.0,
            ticket: Some(Ticket(3)),
        });
        animator.handle_input(InputEvent::CardPan(PanEvent::changed(150.0)));
        animator.handle_input(InputEvent::CardPan(PanEvent::ended(150.0)));

        assert_eq!(main.try_recv(), None);
        assert_eq!(animator.value(Channel::CardOffset).pending_ticket(), Some(Ticket(3)));
    }

    #[test]
    fn test_ticketed_spring_reports_completion() {
        let (mut animator, mut main) = setup();
        animator.handle_command(AnimationCommand::SpringTo {
            channel: Channel::CardOffset,
            target: 390.0,
            ticket: Some(Ticket(9)),
        });
        settle(&mut animator);

        assert_eq!(
            main.try_recv(),
            Some(MainMessage::AnimationFinished {
                ticket: Ticket(9),
                finished: true
            })
        );
        assert_eq!(animator.snapshot().card_offset, 390.0);
    }

    #[test]
    fn test_settings_drag_dismiss_and_restore() {
        let (mut animator, mut main) = setup();
        animator.handle_command(AnimationCommand::Set {
            channel: Channel::SettingsPosition,
            value: 58.0,
        });

        animator.handle_input(InputEvent::SettingsPan(PanEvent::began()));
        animator.handle_input(InputEvent::SettingsPan(PanEvent::changed(-20.0)));
        assert_eq!(animator.snapshot().settings_position, 58.0);
        animator.handle_input(InputEvent::SettingsPan(PanEvent::changed(30.0)));
        assert_eq!(animator.snapshot().settings_position, 88.0);
        animator.handle_input(InputEvent::SettingsPan(PanEvent::ended(30.0)));
        settle(&mut animator);
        assert_eq!(animator.snapshot().settings_position, 58.0);
        assert_eq!(main.try_recv(), Some(MainMessage::SettingsRestored));
        assert_eq!(main.try_recv(), None);

        animator.handle_input(InputEvent::SettingsPan(PanEvent::began()));
        animator.handle_input(InputEvent::SettingsPan(PanEvent::changed(60.0)));
        animator.handle_input(InputEvent::SettingsPan(PanEvent::ended(60.0)));
        assert_eq!(main.try_recv(), Some(MainMessage::SettingsDismissed));
        settle(&mut animator);
        assert_eq!(animator.snapshot().settings_position, 844.0);
    }

    #[test]
    fn test_drain_applies_queued_commands() {
        let (mut animator, main) = setup();
        main.send(AnimationCommand::Set {
            channel: Channel::DetailsPosition,
            value: 0.0,
        });
        assert_eq!(animator.drain(), 1);
        assert_eq!(main.latest_frame().details_position, 0.0);
        assert_eq!(animator.drain(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_stops_when_main_dropped() {
        let (animator, main) = setup();
        main.send(AnimationCommand::SpringTo {
            channel: Channel::DetailsPosition,
            target: 0.0,
            ticket: None,
        });
        let mut frames = main.subscribe_frames();
        let handle = tokio::spawn(animator.run());

        tokio::time::timeout(
            Duration::from_secs(5),
            frames.wait_for(|frame| frame.details_position == 0.0),
        )
        .await
        .expect("details panel should open")
        .expect("animation context alive");
        drop(frames);

        drop(main);
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("run loop should exit")
            .unwrap();
    }
}
