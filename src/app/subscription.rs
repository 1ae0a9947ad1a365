// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config::defaults::TOAST_FRAME_INTERVAL_MS;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Routes window close requests so pending toast timers can be cancelled
/// before the application exits.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(iced::window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        _ => None,
    })
}

/// Frame ticks for the toast animation, only while a toast is on screen.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(Duration::from_millis(TOAST_FRAME_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
