// SPDX-License-Identifier: MPL-2.0
//! Home screen: introduction text and the animated sorting visualizer.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::sort_visualizer::{self, State as VisualizerState};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    widget::{button, Column, Container, Text},
    Element, Length,
};

/// Contextual data needed to render the home screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub visualizer: &'a VisualizerState,
    /// Resolved theme colors for the bar chart.
    pub scheme: ColorScheme,
}

/// Messages emitted by the home screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded visualizer animation messages.
    Sort(sort_visualizer::Message),
    /// Regenerate the bars and replay the sort.
    Replay,
}

/// Process a home screen message against the visualizer state.
pub fn update(visualizer: &mut VisualizerState, message: Message) {
    match message {
        Message::Sort(sort_message) => sort_visualizer::update(visualizer, sort_message),
        Message::Replay => visualizer.restart(),
    }
}

/// Render the home screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("home-title")).size(typography::TITLE_LG);
    let intro = Text::new(ctx.i18n.tr("home-intro")).size(typography::BODY_LG);

    let chart = sort_visualizer::view::<Message>(
        ctx.visualizer,
        ctx.scheme.brand_primary,
        ctx.scheme.success,
    );

    let status_key = if ctx.visualizer.is_loaded() {
        "home-sort-done"
    } else {
        "home-sort-running"
    };
    let status = Text::new(ctx.i18n.tr(status_key)).size(typography::CAPTION);

    let replay = button(Text::new(ctx.i18n.tr("home-replay-button")).size(typography::BODY))
        .on_press(Message::Replay)
        .style(styles::button::primary);

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .push(title)
        .push(intro)
        .push(chart)
        .push(status)
        .push(replay);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_view_renders() {
        let i18n = I18n::default();
        let visualizer = VisualizerState::with_bars(vec![3, 1, 2]);
        let ctx = ViewContext {
            i18n: &i18n,
            visualizer: &visualizer,
            scheme: ColorScheme::dark(),
        };
        let _element = view(ctx);
    }

    #[test]
    fn replay_restarts_the_animation() {
        let mut visualizer = VisualizerState::with_bars(vec![1]);
        assert!(visualizer.is_loaded());
        update(&mut visualizer, Message::Replay);
        assert!(!visualizer.is_loaded());
    }

    #[test]
    fn sort_message_advances_the_trace() {
        let mut visualizer = VisualizerState::with_bars(vec![2, 1]);
        assert!(!visualizer.is_loaded());
        update(
            &mut visualizer,
            Message::Sort(sort_visualizer::Message::Tick(std::time::Instant::now())),
        );
        assert!(visualizer.is_loaded());
        assert_eq!(visualizer.bars(), &[1, 2]);
    }
}
