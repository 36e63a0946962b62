// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The only subscription is the animation tick driving the sorting
//! visualizer: one snapshot of the sort trace is published per tick. The
//! subscription runs only while the home screen is visible and the sort
//! has not finished, so a completed animation costs nothing.

use super::{Message, Screen};
use crate::ui::home;
use crate::ui::sort_visualizer::{self, State as VisualizerState};
use iced::{time, Subscription};

/// Creates the animation tick subscription for the sorting visualizer.
pub fn create_sort_subscription(
    screen: Screen,
    visualizer: &VisualizerState,
) -> Subscription<Message> {
    if screen == Screen::Home && !visualizer.is_loaded() {
        time::every(sort_visualizer::STEP_INTERVAL)
            .map(|at| Message::Home(home::Message::Sort(sort_visualizer::Message::Tick(at))))
    } else {
        Subscription::none()
    }
}
