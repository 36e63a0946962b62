// SPDX-License-Identifier: MPL-2.0
//! Animated merge-sort visualizer shown on the home screen.
//!
//! The component owns the bar sequence, the pending sort trace, and the
//! ready flag. A 10 ms tick subscription (see `app::subscription`) advances
//! the trace one snapshot at a time; each advance republishes the full
//! sequence to the bar-chart canvas. When the trace is drained the ready
//! flag flips and the subscription goes quiet.

use crate::sort::{self, BAR_COUNT, BAR_MAX, BAR_MIN};
use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Pause between animation steps.
pub const STEP_INTERVAL: Duration = Duration::from_millis(10);

/// Visualizer state: the published bar sequence, the not-yet-played
/// remainder of the sort trace, and the ready flag.
#[derive(Debug, Clone)]
pub struct State {
    bars: Vec<u32>,
    pending: VecDeque<Vec<u32>>,
    is_loaded: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    /// Fresh visualizer over a newly generated random sequence.
    pub fn new() -> Self {
        Self::with_bars(sort::generate(BAR_COUNT, BAR_MIN, BAR_MAX))
    }

    /// Visualizer over a caller-supplied sequence. The sort trace is
    /// computed up front; sequences with fewer than two elements are ready
    /// immediately.
    pub fn with_bars(bars: Vec<u32>) -> Self {
        let pending: VecDeque<Vec<u32>> = sort::merge_sort_trace(&bars).into();
        let is_loaded = pending.is_empty();
        Self {
            bars,
            pending,
            is_loaded,
        }
    }

    /// Regenerates the sequence and replays the animation, as if the
    /// visualizer had been remounted.
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    /// The currently published bar sequence.
    pub fn bars(&self) -> &[u32] {
        &self.bars
    }

    /// True once the animated sort has fully played out.
    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    /// Publishes the next snapshot of the trace; flips the ready flag when
    /// the trace is drained.
    pub fn advance(&mut self) {
        if let Some(snapshot) = self.pending.pop_front() {
            self.bars = snapshot;
        }
        if self.pending.is_empty() {
            self.is_loaded = true;
        }
    }
}

/// Messages emitted by the visualizer.
#[derive(Debug, Clone)]
pub enum Message {
    /// Periodic animation tick.
    Tick(Instant),
}

/// Advance the animation in response to a message.
pub fn update(state: &mut State, message: Message) {
    match message {
        Message::Tick(_) => state.advance(),
    }
}

/// Render the bar chart for the current sequence.
///
/// Bars are drawn in the brand color while sorting and switch to the
/// success color once the sequence is fully sorted.
pub fn view<MessageT: 'static>(state: &State, sorting_color: Color, done_color: Color) -> Element<'static, MessageT> {
    let color = if state.is_loaded() {
        done_color
    } else {
        sorting_color
    };
    BarChart::new(state.bars().to_vec(), color).into_element()
}

/// Bar chart drawn with Canvas, one vertical bar per sequence element,
/// heights proportional to value.
struct BarChart {
    cache: Cache,
    bars: Vec<u32>,
    color: Color,
}

impl BarChart {
    fn new(bars: Vec<u32>, color: Color) -> Self {
        Self {
            cache: Cache::default(),
            bars,
            color,
        }
    }

    fn into_element<MessageT: 'static>(self) -> Element<'static, MessageT> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::VISUALIZER_HEIGHT))
            .into()
    }
}

impl<MessageT> canvas::Program<MessageT> for BarChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                if self.bars.is_empty() {
                    return;
                }

                #[allow(clippy::cast_precision_loss)]
                let count = self.bars.len() as f32;
                let slot = frame.width() / count;
                // Leave a hairline gap between bars when there is room
                let gap = if slot > 3.0 { 1.0 } else { 0.0 };

                for (index, &value) in self.bars.iter().enumerate() {
                    #[allow(clippy::cast_precision_loss)]
                    let x = index as f32 * slot;
                    let fraction = (value as f32 / BAR_MAX as f32).min(1.0);
                    let height = fraction * frame.height();

                    let bar = Path::rectangle(
                        Point::new(x, frame.height() - height),
                        Size::new(slot - gap, height),
                    );
                    frame.fill(&bar, self.color);
                }
            });

        vec![geometry]
    }
}
