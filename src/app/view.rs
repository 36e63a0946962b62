// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the navigation
//! bar and the current screen based on application state.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::contact::{self, ViewContext as ContactViewContext};
use crate::ui::experience::{self, ViewContext as ExperienceViewContext};
use crate::ui::home::{self, ViewContext as HomeViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::noise_screen::{self, ViewContext as NoiseViewContext};
use crate::ui::projects::{self, ViewContext as ProjectsViewContext};
use crate::ui::sort_visualizer::State as VisualizerState;
use crate::ui::sources::{self, ViewContext as SourcesViewContext};
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{
    widget::{Column, Container},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub visualizer: &'a VisualizerState,
    pub projects: &'a projects::State,
    pub experience: &'a experience::State,
    pub noise: &'a noise_screen::State,
    pub show_noise: bool,
    pub theme_mode: ThemeMode,
    /// Resolved colors for the current theme mode; owned because it is
    /// recomputed per frame (System mode follows the OS at render time).
    pub scheme: ColorScheme,
}

/// Renders the navigation bar above the currently active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        active: ctx.screen,
        show_noise: ctx.show_noise,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Navbar);

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Home => home::view(HomeViewContext {
            i18n: ctx.i18n,
            visualizer: ctx.visualizer,
            scheme: ctx.scheme.clone(),
        })
        .map(Message::Home),
        Screen::Projects => projects::view(ProjectsViewContext {
            i18n: ctx.i18n,
            state: ctx.projects,
        })
        .map(Message::Projects),
        Screen::Experience => experience::view(ExperienceViewContext {
            i18n: ctx.i18n,
            state: ctx.experience,
        })
        .map(Message::Experience),
        Screen::Sources => sources::view(SourcesViewContext { i18n: ctx.i18n }).map(Message::Sources),
        Screen::Contact => contact::view(ContactViewContext { i18n: ctx.i18n }).map(Message::Contact),
        Screen::Noise => noise_screen::view(NoiseViewContext {
            i18n: ctx.i18n,
            state: ctx.noise,
        })
        .map(Message::Noise),
    };

    let column = Column::new().push(navbar_view).push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
