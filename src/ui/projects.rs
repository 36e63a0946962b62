// SPDX-License-Identifier: MPL-2.0
//! Projects screen with collapsible project cards.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{button, rule, scrollable, Column, Container, Row, Text},
    Element, Length,
};
use std::collections::HashSet;

/// Projects that can be expanded/collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Project {
    Folio,
    Chip8,
    Raytracer,
}

impl Project {
    /// All projects in display order.
    pub const ALL: [Project; 3] = [Project::Folio, Project::Chip8, Project::Raytracer];

    fn key(self) -> &'static str {
        match self {
            Project::Folio => "folio",
            Project::Chip8 => "chip8",
            Project::Raytracer => "raytracer",
        }
    }
}

/// State for the projects screen (tracks which cards are expanded).
#[derive(Debug, Clone, Default)]
pub struct State {
    expanded: HashSet<Project>,
}

impl State {
    /// Create a new state with all cards collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a card is expanded.
    pub fn is_expanded(&self, project: Project) -> bool {
        self.expanded.contains(&project)
    }

    /// Toggle a card's expanded state.
    pub fn toggle(&mut self, project: Project) {
        if !self.expanded.remove(&project) {
            self.expanded.insert(project);
        }
    }
}

/// Contextual data needed to render the projects screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Messages emitted by the projects screen.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleProject(Project),
}

/// Process a projects screen message.
pub fn update(state: &mut State, message: Message) {
    match message {
        Message::ToggleProject(project) => state.toggle(project),
    }
}

/// Render the projects screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("projects-title")).size(typography::TITLE_LG);
    let hint = Text::new(ctx.i18n.tr("projects-hint")).size(typography::BODY);

    let mut content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::MD)
        .padding(spacing::XL)
        .push(title)
        .push(hint);

    for project in Project::ALL {
        content = content.push(build_card(&ctx, project));
    }

    scrollable(content).into()
}

/// Build one collapsible project card.
fn build_card<'a>(ctx: &ViewContext<'a>, project: Project) -> Element<'a, Message> {
    let key = project.key();
    let name = ctx.i18n.tr(&format!("project-{key}-name"));
    let tagline = ctx.i18n.tr(&format!("project-{key}-tagline"));

    let marker = if ctx.state.is_expanded(project) {
        "▾"
    } else {
        "▸"
    };

    let header_row = Row::new()
        .spacing(spacing::SM)
        .push(Text::new(marker).size(typography::TITLE_SM))
        .push(Text::new(name).size(typography::TITLE_SM))
        .push(Text::new(tagline).size(typography::BODY));

    let header = button(header_row)
        .on_press(Message::ToggleProject(project))
        .width(Length::Fill)
        .padding([spacing::XS, spacing::SM])
        .style(|_theme, _status| button::Style::default());

    let mut card = Column::new().push(header);

    if ctx.state.is_expanded(project) {
        let description = ctx.i18n.tr(&format!("project-{key}-description"));
        let stack = ctx.i18n.tr(&format!("project-{key}-stack"));
        card = card
            .push(rule::horizontal(1))
            .push(
                Column::new()
                    .spacing(spacing::XS)
                    .padding(spacing::SM)
                    .push(Text::new(description).size(typography::BODY))
                    .push(Text::new(stack).size(typography::CAPTION)),
            );
    }

    Container::new(card)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_view_renders() {
        let i18n = I18n::default();
        let state = State::new();
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
    }

    #[test]
    fn cards_start_collapsed() {
        let state = State::new();
        for project in Project::ALL {
            assert!(!state.is_expanded(project));
        }
    }

    #[test]
    fn toggle_expands_and_collapses() {
        let mut state = State::new();
        update(&mut state, Message::ToggleProject(Project::Chip8));
        assert!(state.is_expanded(Project::Chip8));
        assert!(!state.is_expanded(Project::Folio));

        update(&mut state, Message::ToggleProject(Project::Chip8));
        assert!(!state.is_expanded(Project::Chip8));
    }
}
