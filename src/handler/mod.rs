//! Handler module - event kinds, dispatch arguments, and the registry.
//!
//! Every response and event in the protocol table has a fixed
//! [`EventKind`], alongside the five lifecycle kinds signalling the
//! client's own operation (busy/idle/timeout and the two send hooks).
//! Handlers are registered against a kind and invoked in registration
//! order with the decoded message.

mod registry;

pub use registry::{EventRegistry, HandlerId};

use std::fmt;

use crate::codec::{DeviceEvent, Response};
use crate::error::Result;

/// Lifecycle signal about the client's own operation, not a wire message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    /// A command was sent and its response is now pending.
    Busy,
    /// The pending command completed (response arrived or timed out).
    Idle,
    /// A poll with a positive timeout expired with no response.
    Timeout,
    /// About to write a command to the transport.
    BeforeSend,
    /// Finished writing a command to the transport.
    AfterSend,
}

/// The fixed set of dispatchable event identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    // Command responses
    RspSystemPing,
    RspSystemReset,
    RspTouchGetMode,
    RspTouchSetMode,
    RspFeedbackGetBlinkMode,
    RspFeedbackSetBlinkMode,
    RspFeedbackGetPiezoMode,
    RspFeedbackSetPiezoMode,
    RspFeedbackGetVibeMode,
    RspFeedbackSetVibeMode,
    RspFeedbackGetRgbMode,
    RspFeedbackSetRgbMode,
    RspMotionGetMode,
    RspMotionSetMode,
    // Asynchronous device events
    EvtProtocolError,
    EvtSystemBoot,
    EvtSystemReady,
    EvtSystemError,
    EvtTouchMode,
    EvtTouchStatus,
    EvtFeedbackBlinkMode,
    EvtFeedbackPiezoMode,
    EvtFeedbackVibeMode,
    EvtFeedbackRgbMode,
    EvtMotionMode,
    EvtMotionData,
    // Lifecycle signals
    Busy,
    Idle,
    Timeout,
    BeforeSend,
    AfterSend,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventKind::RspSystemPing => "response:system:ping",
            EventKind::RspSystemReset => "response:system:reset",
            EventKind::RspTouchGetMode => "response:touch:get_mode",
            EventKind::RspTouchSetMode => "response:touch:set_mode",
            EventKind::RspFeedbackGetBlinkMode => "response:feedback:get_blink_mode",
            EventKind::RspFeedbackSetBlinkMode => "response:feedback:set_blink_mode",
            EventKind::RspFeedbackGetPiezoMode => "response:feedback:get_piezo_mode",
            EventKind::RspFeedbackSetPiezoMode => "response:feedback:set_piezo_mode",
            EventKind::RspFeedbackGetVibeMode => "response:feedback:get_vibe_mode",
            EventKind::RspFeedbackSetVibeMode => "response:feedback:set_vibe_mode",
            EventKind::RspFeedbackGetRgbMode => "response:feedback:get_rgb_mode",
            EventKind::RspFeedbackSetRgbMode => "response:feedback:set_rgb_mode",
            EventKind::RspMotionGetMode => "response:motion:get_mode",
            EventKind::RspMotionSetMode => "response:motion:set_mode",
            EventKind::EvtProtocolError => "event:protocol:error",
            EventKind::EvtSystemBoot => "event:system:boot",
            EventKind::EvtSystemReady => "event:system:ready",
            EventKind::EvtSystemError => "event:system:error",
            EventKind::EvtTouchMode => "event:touch:mode",
            EventKind::EvtTouchStatus => "event:touch:status",
            EventKind::EvtFeedbackBlinkMode => "event:feedback:blink_mode",
            EventKind::EvtFeedbackPiezoMode => "event:feedback:piezo_mode",
            EventKind::EvtFeedbackVibeMode => "event:feedback:vibe_mode",
            EventKind::EvtFeedbackRgbMode => "event:feedback:rgb_mode",
            EventKind::EvtMotionMode => "event:motion:mode",
            EventKind::EvtMotionData => "event:motion:data",
            EventKind::Busy => "busy",
            EventKind::Idle => "idle",
            EventKind::Timeout => "timeout",
            EventKind::BeforeSend => "before_send",
            EventKind::AfterSend => "after_send",
        };
        f.write_str(name)
    }
}

/// Decoded message (or lifecycle signal) handed to handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventArgs {
    Response(Response),
    Event(DeviceEvent),
    Lifecycle(Lifecycle),
}

impl EventArgs {
    /// The event kind this message dispatches under.
    pub fn kind(&self) -> EventKind {
        match self {
            EventArgs::Response(rsp) => match rsp {
                Response::SystemPing { .. } => EventKind::RspSystemPing,
                Response::SystemReset { .. } => EventKind::RspSystemReset,
                Response::TouchGetMode { .. } => EventKind::RspTouchGetMode,
                Response::TouchSetMode { .. } => EventKind::RspTouchSetMode,
                Response::FeedbackGetBlinkMode { .. } => EventKind::RspFeedbackGetBlinkMode,
                Response::FeedbackSetBlinkMode { .. } => EventKind::RspFeedbackSetBlinkMode,
                Response::FeedbackGetPiezoMode { .. } => EventKind::RspFeedbackGetPiezoMode,
                Response::FeedbackSetPiezoMode { .. } => EventKind::RspFeedbackSetPiezoMode,
                Response::FeedbackGetVibeMode { .. } => EventKind::RspFeedbackGetVibeMode,
                Response::FeedbackSetVibeMode { .. } => EventKind::RspFeedbackSetVibeMode,
                Response::FeedbackGetRgbMode { .. } => EventKind::RspFeedbackGetRgbMode,
                Response::FeedbackSetRgbMode { .. } => EventKind::RspFeedbackSetRgbMode,
                Response::MotionGetMode { .. } => EventKind::RspMotionGetMode,
                Response::MotionSetMode { .. } => EventKind::RspMotionSetMode,
            },
            EventArgs::Event(evt) => match evt {
                DeviceEvent::ProtocolError { .. } => EventKind::EvtProtocolError,
                DeviceEvent::SystemBoot => EventKind::EvtSystemBoot,
                DeviceEvent::SystemReady => EventKind::EvtSystemReady,
                DeviceEvent::SystemError { .. } => EventKind::EvtSystemError,
                DeviceEvent::TouchMode { .. } => EventKind::EvtTouchMode,
                DeviceEvent::TouchStatus { .. } => EventKind::EvtTouchStatus,
                DeviceEvent::FeedbackBlinkMode { .. } => EventKind::EvtFeedbackBlinkMode,
                DeviceEvent::FeedbackPiezoMode { .. } => EventKind::EvtFeedbackPiezoMode,
                DeviceEvent::FeedbackVibeMode { .. } => EventKind::EvtFeedbackVibeMode,
                DeviceEvent::FeedbackRgbMode { .. } => EventKind::EvtFeedbackRgbMode,
                DeviceEvent::MotionMode { .. } => EventKind::EvtMotionMode,
                DeviceEvent::MotionData { .. } => EventKind::EvtMotionData,
            },
            EventArgs::Lifecycle(lc) => match lc {
                Lifecycle::Busy => EventKind::Busy,
                Lifecycle::Idle => EventKind::Idle,
                Lifecycle::Timeout => EventKind::Timeout,
                Lifecycle::BeforeSend => EventKind::BeforeSend,
                Lifecycle::AfterSend => EventKind::AfterSend,
            },
        }
    }
}

/// Whether a handler stays registered after an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerAction {
    /// Keep the handler registered.
    Retain,
    /// Remove the handler after this fire completes its invocation order.
    Unregister,
}

/// Handler callback type.
///
/// Returning `Err` aborts the remaining handlers for the fire and
/// propagates the error to the caller (fail-fast policy).
pub type Handler = Box<dyn FnMut(&EventArgs) -> Result<HandlerAction> + Send>;
