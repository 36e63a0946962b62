// SPDX-License-Identifier: MPL-2.0
//! Experience screen: a collapsible timeline of roles and studies.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{button, rule, scrollable, Column, Container, Row, Text},
    Element, Length,
};
use std::collections::HashSet;

/// Timeline entries, newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entry {
    Developer,
    Internship,
    Studies,
}

impl Entry {
    /// All entries in display order.
    pub const ALL: [Entry; 3] = [Entry::Developer, Entry::Internship, Entry::Studies];

    fn key(self) -> &'static str {
        match self {
            Entry::Developer => "developer",
            Entry::Internship => "internship",
            Entry::Studies => "studies",
        }
    }
}

/// State for the experience screen (tracks which entries are expanded).
#[derive(Debug, Clone, Default)]
pub struct State {
    expanded: HashSet<Entry>,
}

impl State {
    /// Create a new state with all entries collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an entry is expanded.
    pub fn is_expanded(&self, entry: Entry) -> bool {
        self.expanded.contains(&entry)
    }

    /// Toggle an entry's expanded state.
    pub fn toggle(&mut self, entry: Entry) {
        if !self.expanded.remove(&entry) {
            self.expanded.insert(entry);
        }
    }
}

/// Contextual data needed to render the experience screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Messages emitted by the experience screen.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleEntry(Entry),
}

/// Process an experience screen message.
pub fn update(state: &mut State, message: Message) {
    match message {
        Message::ToggleEntry(entry) => state.toggle(entry),
    }
}

/// Render the experience screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("experience-title")).size(typography::TITLE_LG);

    let mut content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::MD)
        .padding(spacing::XL)
        .push(title);

    for entry in Entry::ALL {
        content = content.push(build_entry(&ctx, entry));
    }

    scrollable(content).into()
}

/// Build one collapsible timeline entry.
fn build_entry<'a>(ctx: &ViewContext<'a>, entry: Entry) -> Element<'a, Message> {
    let key = entry.key();
    let role = ctx.i18n.tr(&format!("experience-{key}-role"));
    let org = ctx.i18n.tr(&format!("experience-{key}-org"));
    let period = ctx.i18n.tr(&format!("experience-{key}-period"));

    let marker = if ctx.state.is_expanded(entry) {
        "▾"
    } else {
        "▸"
    };

    let header_row = Row::new()
        .spacing(spacing::SM)
        .push(Text::new(marker).size(typography::TITLE_SM))
        .push(Text::new(role).size(typography::TITLE_SM))
        .push(Text::new(org).size(typography::BODY))
        .push(Text::new(period).size(typography::CAPTION));

    let header = button(header_row)
        .on_press(Message::ToggleEntry(entry))
        .width(Length::Fill)
        .padding([spacing::XS, spacing::SM])
        .style(|_theme, _status| button::Style::default());

    let mut card = Column::new().push(header);

    if ctx.state.is_expanded(entry) {
        let summary = ctx.i18n.tr(&format!("experience-{key}-summary"));
        card = card.push(rule::horizontal(1)).push(
            Container::new(Text::new(summary).size(typography::BODY)).padding(spacing::SM),
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
    fn experience_view_renders() {
        let i18n = I18n::default();
        let state = State::new();
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
    }

    #[test]
    fn toggle_expands_a_single_entry() {
        let mut state = State::new();
        update(&mut state, Message::ToggleEntry(Entry::Studies));
        assert!(state.is_expanded(Entry::Studies));
        assert!(!state.is_expanded(Entry::Developer));
    }
}
