// SPDX-License-Identifier: MPL-2.0
//! Contact screen with copyable contact details.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

const EMAIL: &str = "hello@bawycle.dev";
const REPOSITORY: &str = "https://codeberg.org/Bawycle";

/// Contextual data needed to render the contact screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the contact screen.
#[derive(Debug, Clone)]
pub enum Message {
    CopyValue(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    CopyToClipboard(String),
}

/// Process a contact screen message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::CopyValue(value) => Event::CopyToClipboard(value),
    }
}

/// Render the contact screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("contact-title")).size(typography::TITLE_LG);
    let intro = Text::new(ctx.i18n.tr("contact-intro")).size(typography::BODY_LG);

    let email_row = build_detail_row(&ctx, "contact-email-label", EMAIL);
    let repo_row = build_detail_row(&ctx, "contact-repo-label", REPOSITORY);

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::MD)
        .padding(spacing::XL)
        .push(title)
        .push(intro)
        .push(email_row)
        .push(repo_row);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Build one contact detail row with a copy button.
fn build_detail_row<'a>(ctx: &ViewContext<'a>, label_key: &str, value: &'a str) -> Element<'a, Message> {
    let label = ctx.i18n.tr(label_key);
    let copy_label = ctx.i18n.tr("contact-copy-button");

    let row = Row::new()
        .spacing(spacing::SM)
        .push(Text::new(format!("{label}:")).size(typography::BODY_LG))
        .push(Text::new(value).size(typography::BODY))
        .push(
            button(Text::new(copy_label).size(typography::CAPTION))
                .on_press(Message::CopyValue(value.to_string()))
                .padding([spacing::XXS, spacing::XS]),
        );

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::outlined_card)
        .into()
}
