// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! Renders one button per portfolio screen plus the noise-page toggle and
//! the theme-mode toggle. The noise entry only appears while the global
//! "show noise" flag is on.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Screen currently displayed, highlighted in the bar.
    pub active: Screen,
    /// Whether the noise page entry is shown.
    pub show_noise: bool,
    /// Current theme mode, shown on the theme toggle.
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Screen),
    ToggleNoise,
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Navigate(Screen),
    ToggleNoise,
    ToggleTheme,
}

/// Process a navbar message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::Navigate(screen) => Event::Navigate(screen),
        Message::ToggleNoise => Event::ToggleNoise,
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::XS)
        .padding(spacing::SM)
        .align_y(Vertical::Center);

    for screen in Screen::PAGES {
        row = row.push(nav_button(&ctx, screen));
    }
    if ctx.show_noise {
        row = row.push(nav_button(&ctx, Screen::Noise));
    }

    row = row.push(Space::new().width(Length::Fill));

    let noise_label = if ctx.show_noise {
        ctx.i18n.tr("navbar-noise-hide")
    } else {
        ctx.i18n.tr("navbar-noise-show")
    };
    row = row.push(
        button(Text::new(noise_label).size(typography::BODY))
            .on_press(Message::ToggleNoise)
            .padding([spacing::XXS, spacing::SM])
            .style(nav_item_style),
    );

    let theme_label = match ctx.theme_mode {
        ThemeMode::Light => ctx.i18n.tr("navbar-theme-light"),
        ThemeMode::Dark => ctx.i18n.tr("navbar-theme-dark"),
        ThemeMode::System => ctx.i18n.tr("navbar-theme-system"),
    };
    row = row.push(
        button(Text::new(theme_label).size(typography::BODY))
            .on_press(Message::ToggleTheme)
            .padding([spacing::XXS, spacing::SM])
            .style(nav_item_style),
    );

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(styles::container::toolbar)
        .into()
}

/// Build a single navigation button, highlighted when active.
fn nav_button<'a>(ctx: &ViewContext<'a>, screen: Screen) -> Element<'a, Message> {
    let label = ctx.i18n.tr(screen.i18n_key());
    let base = button(Text::new(label).size(typography::BODY))
        .on_press(Message::Navigate(screen))
        .padding([spacing::XXS, spacing::SM]);

    if screen == ctx.active {
        base.style(styles::button::selected).into()
    } else {
        base.style(nav_item_style).into()
    }
}

/// Style function for inactive navigation items.
fn nav_item_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Hovered => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: palette.primary.strong.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        _ => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
    }
}
