// SPDX-License-Identifier: MPL-2.0
//! Sources screen listing the libraries and references this app builds on.
//!
//! Each entry shows a label and its URL with a button that copies the URL
//! to the clipboard (the copy itself is performed by the parent).

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{button, scrollable, Column, Container, Row, Text},
    Element, Length,
};

/// Label key and URL for one listed source.
const SOURCES: [(&str, &str); 4] = [
    ("sources-iced", "https://github.com/iced-rs/iced"),
    ("sources-fluent", "https://projectfluent.org"),
    ("sources-rand", "https://github.com/rust-random/rand"),
    (
        "sources-mergesort",
        "https://en.wikipedia.org/wiki/Merge_sort",
    ),
];

/// Contextual data needed to render the sources screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the sources screen.
#[derive(Debug, Clone)]
pub enum Message {
    CopyUrl(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    CopyToClipboard(String),
}

/// Process a sources screen message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::CopyUrl(url) => Event::CopyToClipboard(url),
    }
}

/// Render the sources screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("sources-title")).size(typography::TITLE_LG);
    let intro = Text::new(ctx.i18n.tr("sources-intro")).size(typography::BODY);

    let mut content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::MD)
        .padding(spacing::XL)
        .push(title)
        .push(intro);

    for (label_key, url) in SOURCES {
        content = content.push(build_source_row(&ctx, label_key, url));
    }

    scrollable(content).into()
}

/// Build one source row: label, URL, copy button.
fn build_source_row<'a>(ctx: &ViewContext<'a>, label_key: &str, url: &'a str) -> Element<'a, Message> {
    let label = ctx.i18n.tr(label_key);
    let copy_label = ctx.i18n.tr("sources-copy-button");

    let row = Row::new()
        .spacing(spacing::SM)
        .push(Text::new(label).size(typography::BODY_LG))
        .push(Text::new(url).size(typography::BODY))
        .push(
            button(Text::new(copy_label).size(typography::CAPTION))
                .on_press(Message::CopyUrl(url.to_string()))
                .padding([spacing::XXS, spacing::XS]),
        );

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sources_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext { i18n: &i18n });
    }

    #[test]
    fn copy_message_emits_clipboard_event() {
        let event = update(Message::CopyUrl("https://example.org".into()));
        match event {
            Event::CopyToClipboard(url) => assert_eq!(url, "https://example.org"),
        }
    }

    #[test]
    fn listed_urls_are_well_formed() {
        for (_, url) in SOURCES {
            assert!(url.starts_with("https://"));
        }
    }
}
