#![forbid(unsafe_code)]

//! Document-scope pointer subscription management for splitter drags.
//!
//! While a drag is active the host must keep receiving pointer move/up events
//! even after the pointer leaves the splitter element. This adapter owns the
//! handle for that document-level subscription:
//! - it asks the host to subscribe when the state enters a drag,
//! - it asks the host to unsubscribe when the drag ends, and
//! - it drops document-scope input that arrives with no subscription held.
//!
//! A drag that never sees an end or cancel keeps its subscription. There is no
//! timeout; hosts that can lose the release event call
//! [`SplitterCaptureAdapter::force_release`] on teardown.

use splitpane_layout::{
    GestureEvent, GestureInput, InputScope, ResizeEffect, ResizeState, UpdateConfig,
};

/// Host command for the document-level pointer subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureCommand {
    Subscribe { subscription: u64 },
    Unsubscribe { subscription: u64 },
}

/// Deterministic reason why an input never reached the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitterIgnoredReason {
    /// Document-scope input with no subscription held.
    NoActiveSubscription,
    /// The input had no gesture meaning.
    NoGesture,
}

/// Outcome category for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplitterLogOutcome {
    Forwarded(ResizeEffect),
    Ignored(SplitterIgnoredReason),
}

/// Structured record of one dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitterLogEntry {
    pub sequence: u64,
    pub scope: InputScope,
    pub gesture: Option<GestureEvent>,
    pub capture_command: Option<CaptureCommand>,
    pub outcome: SplitterLogOutcome,
}

/// Result of dispatching one input.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitterDispatch<M> {
    /// State after the input. Unchanged when the input was ignored.
    pub state: ResizeState,
    pub notification: Option<M>,
    /// Whether the host should suppress the platform default.
    pub prevent_default: bool,
    pub capture_command: Option<CaptureCommand>,
    pub log: SplitterLogEntry,
}

/// Feeds platform input into a [`ResizeState`] and keeps the document
/// subscription in step with its drag.
#[derive(Debug, Clone)]
pub struct SplitterCaptureAdapter {
    subscription: Option<u64>,
    next_subscription: u64,
    next_sequence: u64,
}

impl Default for SplitterCaptureAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl SplitterCaptureAdapter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            subscription: None,
            next_subscription: 1,
            next_sequence: 1,
        }
    }

    /// Held subscription, if any.
    #[must_use]
    pub const fn active_subscription(&self) -> Option<u64> {
        self.subscription
    }

    /// Dispatch one input against the host's state.
    pub fn dispatch<I, M>(
        &mut self,
        input: &I,
        state: ResizeState,
        update: &UpdateConfig<M>,
    ) -> SplitterDispatch<M>
    where
        I: GestureInput,
        M: Clone,
    {
        let sequence = self.next_sequence();
        let scope = input.scope();
        let prevent_default = input.prevents_default();

        if scope == InputScope::Document && self.subscription.is_none() {
            return Self::ignored(
                state,
                sequence,
                scope,
                prevent_default,
                SplitterIgnoredReason::NoActiveSubscription,
            );
        }
        let Some(gesture) = input.gesture() else {
            return Self::ignored(
                state,
                sequence,
                scope,
                prevent_default,
                SplitterIgnoredReason::NoGesture,
            );
        };

        let (step, notification) = state.step_notify(gesture, update);
        let capture_command = self.sync(step.state.is_dragging());

        SplitterDispatch {
            state: step.state,
            notification,
            prevent_default,
            capture_command,
            log: SplitterLogEntry {
                sequence,
                scope,
                gesture: Some(gesture),
                capture_command,
                outcome: SplitterLogOutcome::Forwarded(step.effect),
            },
        }
    }

    /// Drop the subscription regardless of drag state.
    ///
    /// Returns the unsubscribe command if one was held. The host's state keeps
    /// its drag info; pair this with a `DragEnd` if the drag should end too.
    pub fn force_release(&mut self) -> Option<CaptureCommand> {
        let subscription = self.subscription.take()?;
        #[cfg(feature = "tracing")]
        log_capture("force_release", subscription);
        Some(CaptureCommand::Unsubscribe { subscription })
    }

    fn sync(&mut self, dragging: bool) -> Option<CaptureCommand> {
        match (dragging, self.subscription) {
            (true, None) => {
                let subscription = self.next_subscription;
                self.next_subscription = self.next_subscription.saturating_add(1);
                self.subscription = Some(subscription);
                #[cfg(feature = "tracing")]
                log_capture("subscribe", subscription);
                Some(CaptureCommand::Subscribe { subscription })
            }
            (false, Some(subscription)) => {
                self.subscription = None;
                #[cfg(feature = "tracing")]
                log_capture("unsubscribe", subscription);
                Some(CaptureCommand::Unsubscribe { subscription })
            }
            _ => None,
        }
    }

    fn ignored<M>(
        state: ResizeState,
        sequence: u64,
        scope: InputScope,
        prevent_default: bool,
        reason: SplitterIgnoredReason,
    ) -> SplitterDispatch<M> {
        SplitterDispatch {
            state,
            notification: None,
            prevent_default,
            capture_command: None,
            log: SplitterLogEntry {
                sequence,
                scope,
                gesture: None,
                capture_command: None,
                outcome: SplitterLogOutcome::Ignored(reason),
            },
        }
    }

    fn next_sequence(&mut self) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.saturating_add(1);
        sequence
    }
}

#[cfg(feature = "tracing")]
fn log_capture(action: &'static str, subscription: u64) {
    tracing::debug!(message = "splitpane.capture", action, subscription);
}

#[cfg(test)]
mod tests {
    use super::{
        CaptureCommand, SplitterCaptureAdapter, SplitterIgnoredReason, SplitterLogOutcome,
    };
    use crate::raw_input::{RawInputEvent, RawInputKind};
    use pretty_assertions::assert_eq;
    use splitpane_layout::{
        ContainerSize, GestureEvent, GestureInput, InputScope, Orientation, ResizeEffect,
        ResizeNoopReason, ResizeState, UpdateConfig,
    };
    #[cfg(feature = "tracing")]
    use std::sync::{Arc, Mutex};
    #[cfg(feature = "tracing")]
    use tracing::Subscriber;
    #[cfg(feature = "tracing")]
    use tracing_subscriber::Layer;
    #[cfg(feature = "tracing")]
    use tracing_subscriber::layer::{Context, SubscriberExt};

    fn down(x: f64) -> RawInputEvent {
        RawInputEvent::pointer(RawInputKind::PointerDown, x, 0.0)
            .with_container(ContainerSize::new(200, 100))
    }

    fn doc_move(x: f64) -> RawInputEvent {
        RawInputEvent::pointer(RawInputKind::DocumentPointerMove, x, 0.0)
    }

    fn doc_up(x: f64) -> RawInputEvent {
        RawInputEvent::pointer(RawInputKind::DocumentPointerUp, x, 0.0)
    }

    fn silent() -> UpdateConfig<()> {
        UpdateConfig::none()
    }

    #[test]
    fn pointer_down_subscribes_and_prevents_default() {
        let mut adapter = SplitterCaptureAdapter::new();
        let state = ResizeState::new(Orientation::Horizontal);
        let dispatch = adapter.dispatch(&down(100.0), state, &silent());
        assert!(dispatch.state.is_dragging());
        assert!(dispatch.prevent_default);
        assert_eq!(
            dispatch.capture_command,
            Some(CaptureCommand::Subscribe { subscription: 1 })
        );
        assert_eq!(adapter.active_subscription(), Some(1));
    }

    #[test]
    fn document_move_resizes_while_subscribed() {
        let mut adapter = SplitterCaptureAdapter::new();
        let state = adapter
            .dispatch(&down(100.0), ResizeState::new(Orientation::Horizontal), &silent())
            .state;
        let dispatch = adapter.dispatch(&doc_move(120.0), state, &silent());
        assert!(!dispatch.prevent_default);
        assert_eq!(dispatch.capture_command, None);
        assert!((dispatch.state.splitter_fraction().get() - 0.6).abs() < 1e-12);
        assert!(matches!(
            dispatch.log.outcome,
            SplitterLogOutcome::Forwarded(ResizeEffect::Resized { .. })
        ));
    }

    #[test]
    fn document_up_unsubscribes() {
        let mut adapter = SplitterCaptureAdapter::new();
        let state = adapter
            .dispatch(&down(10.0), ResizeState::new(Orientation::Horizontal), &silent())
            .state;
        let dispatch = adapter.dispatch(&doc_up(10.0), state, &silent());
        assert!(!dispatch.state.is_dragging());
        assert_eq!(
            dispatch.capture_command,
            Some(CaptureCommand::Unsubscribe { subscription: 1 })
        );
        assert_eq!(adapter.active_subscription(), None);
    }

    #[test]
    fn document_input_without_subscription_is_ignored() {
        let mut adapter = SplitterCaptureAdapter::new();
        let state = ResizeState::new(Orientation::Horizontal);
        let update = UpdateConfig::none().on_resize_ended(7);
        let dispatch = adapter.dispatch(&doc_up(0.0), state, &update);
        assert_eq!(dispatch.state, state);
        assert_eq!(dispatch.notification, None);
        assert_eq!(
            dispatch.log.outcome,
            SplitterLogOutcome::Ignored(SplitterIgnoredReason::NoActiveSubscription)
        );
    }

    #[test]
    fn restart_keeps_existing_subscription() {
        let mut adapter = SplitterCaptureAdapter::new();
        let state = adapter
            .dispatch(&down(10.0), ResizeState::new(Orientation::Horizontal), &silent())
            .state;
        let dispatch = adapter.dispatch(&down(30.0), state, &silent());
        assert_eq!(dispatch.capture_command, None);
        assert_eq!(adapter.active_subscription(), Some(1));
    }

    #[test]
    fn not_draggable_never_subscribes() {
        let mut adapter = SplitterCaptureAdapter::new();
        let state = ResizeState::new(Orientation::Horizontal).with_draggable(false);
        let dispatch = adapter.dispatch(&down(10.0), state, &silent());
        assert_eq!(dispatch.state, state);
        assert_eq!(dispatch.capture_command, None);
        assert_eq!(
            dispatch.log.outcome,
            SplitterLogOutcome::Forwarded(ResizeEffect::Noop {
                reason: ResizeNoopReason::NotDraggable,
            })
        );
    }

    #[test]
    fn subscription_ids_are_never_reused() {
        let mut adapter = SplitterCaptureAdapter::new();
        let mut state = ResizeState::new(Orientation::Horizontal);
        let mut subscribed = Vec::new();
        for _ in 0..3 {
            let start = adapter.dispatch(&down(50.0), state, &silent());
            subscribed.extend(start.capture_command);
            state = adapter.dispatch(&doc_up(50.0), start.state, &silent()).state;
        }
        assert_eq!(
            subscribed,
            vec![
                CaptureCommand::Subscribe { subscription: 1 },
                CaptureCommand::Subscribe { subscription: 2 },
                CaptureCommand::Subscribe { subscription: 3 },
            ]
        );
    }

    #[test]
    fn force_release_drops_subscription_once() {
        let mut adapter = SplitterCaptureAdapter::new();
        let state = adapter
            .dispatch(&down(10.0), ResizeState::new(Orientation::Horizontal), &silent())
            .state;
        assert_eq!(
            adapter.force_release(),
            Some(CaptureCommand::Unsubscribe { subscription: 1 })
        );
        assert_eq!(adapter.force_release(), None);
        // Drag info is still held by the host until it sends an end.
        assert!(state.is_dragging());
    }

    struct TerminalClick {
        column: i32,
        released: bool,
    }

    impl GestureInput for TerminalClick {
        fn scope(&self) -> InputScope {
            InputScope::Splitter
        }

        fn gesture(&self) -> Option<GestureEvent> {
            if self.released {
                return None;
            }
            Some(GestureEvent::DragMove {
                position: splitpane_layout::PointerPosition::new(self.column, 0),
            })
        }
    }

    #[test]
    fn inputs_without_gesture_are_logged_and_ignored() {
        let mut adapter = SplitterCaptureAdapter::new();
        let state = ResizeState::new(Orientation::Horizontal);
        let dispatch = adapter.dispatch(
            &TerminalClick {
                column: 4,
                released: true,
            },
            state,
            &silent(),
        );
        assert_eq!(
            dispatch.log.outcome,
            SplitterLogOutcome::Ignored(SplitterIgnoredReason::NoGesture)
        );
        assert_eq!(dispatch.log.sequence, 1);

        let moved = adapter.dispatch(
            &TerminalClick {
                column: 4,
                released: false,
            },
            state,
            &silent(),
        );
        assert_eq!(moved.log.sequence, 2);
        assert_eq!(moved.state, state);
    }

    #[cfg(feature = "tracing")]
    #[derive(Debug, Default)]
    struct CaptureTrace {
        actions: Vec<(String, u64)>,
    }

    #[cfg(feature = "tracing")]
    struct CaptureLayer {
        state: Arc<Mutex<CaptureTrace>>,
    }

    #[cfg(feature = "tracing")]
    impl<S> Layer<S> for CaptureLayer
    where
        S: Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
    {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            #[derive(Default)]
            struct ActionVisitor {
                message: Option<String>,
                action: Option<String>,
                subscription: Option<u64>,
            }

            impl tracing::field::Visit for ActionVisitor {
                fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
                    match field.name() {
                        "message" => self.message = Some(value.to_owned()),
                        "action" => self.action = Some(value.to_owned()),
                        _ => {}
                    }
                }

                fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
                    if field.name() == "subscription" {
                        self.subscription = Some(value);
                    }
                }

                fn record_debug(
                    &mut self,
                    field: &tracing::field::Field,
                    value: &dyn std::fmt::Debug,
                ) {
                    let rendered = format!("{value:?}").trim_matches('"').to_owned();
                    match field.name() {
                        "message" => self.message = Some(rendered),
                        "action" => self.action = Some(rendered),
                        _ => {}
                    }
                }
            }

            let mut visitor = ActionVisitor::default();
            event.record(&mut visitor);
            if visitor.message.as_deref() != Some("splitpane.capture") {
                return;
            }
            if let (Some(action), Some(subscription)) = (visitor.action, visitor.subscription) {
                self.state
                    .lock()
                    .expect("trace state lock")
                    .actions
                    .push((action, subscription));
            }
        }
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn tracing_reports_subscription_changes() {
        let state = Arc::new(Mutex::new(CaptureTrace::default()));
        let subscriber = tracing_subscriber::registry().with(CaptureLayer {
            state: Arc::clone(&state),
        });
        let _guard = tracing::subscriber::set_default(subscriber);
        tracing::callsite::rebuild_interest_cache();

        let mut adapter = SplitterCaptureAdapter::new();
        let resting = ResizeState::new(Orientation::Horizontal);
        let dragging = adapter.dispatch(&down(10.0), resting, &silent()).state;
        let _ = adapter.dispatch(&doc_up(10.0), dragging, &silent());
        let _ = adapter.dispatch(&down(20.0), resting, &silent());
        let _ = adapter.force_release();
        let _ = adapter.force_release();

        tracing::callsite::rebuild_interest_cache();
        let snapshot = state.lock().expect("trace state lock");
        assert_eq!(
            snapshot.actions,
            vec![
                ("subscribe".to_owned(), 1),
                ("unsubscribe".to_owned(), 1),
                ("subscribe".to_owned(), 2),
                ("force_release".to_owned(), 2),
            ]
        );
    }
}
