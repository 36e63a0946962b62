// SPDX-License-Identifier: MPL-2.0
//! Noise screen rendering a seeded value-noise field as a grayscale grid.
//!
//! The field is reseeded whenever the screen is entered or the regenerate
//! button is pressed; rendering is otherwise static.

use crate::noise::NoiseField;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path};
use iced::{
    mouse,
    widget::{button, Column, Container, Text},
    Color, Element, Length, Point, Rectangle, Renderer, Size, Theme,
};
use rand::Rng;

/// Cells per side of the rendered grid.
const GRID_CELLS: usize = 48;

/// Lattice frequency: grid cells per noise lattice step.
const FREQUENCY: f32 = 8.0;

/// State for the noise screen.
#[derive(Debug, Clone)]
pub struct State {
    field: NoiseField,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    /// Fresh state with a random seed.
    pub fn new() -> Self {
        Self {
            field: NoiseField::new(rand::thread_rng().gen()),
        }
    }

    /// Draw a new seed; the next render shows a different field.
    pub fn reseed(&mut self) {
        self.field = NoiseField::new(rand::thread_rng().gen());
    }

    pub fn field(&self) -> NoiseField {
        self.field
    }
}

/// Messages emitted by the noise screen.
#[derive(Debug, Clone)]
pub enum Message {
    Regenerate,
}

/// Process a noise screen message.
pub fn update(state: &mut State, message: Message) {
    match message {
        Message::Regenerate => state.reseed(),
    }
}

/// Render the noise screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("noise-title")).size(typography::TITLE_LG);
    let description = Text::new(ctx.i18n.tr("noise-description")).size(typography::BODY);

    let canvas = NoiseCanvas::new(ctx.state.field()).into_element();

    let regenerate =
        button(Text::new(ctx.i18n.tr("noise-regenerate-button")).size(typography::BODY))
            .on_press(Message::Regenerate)
            .style(styles::button::primary);

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .push(title)
        .push(description)
        .push(canvas)
        .push(regenerate);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Contextual data needed to render the noise screen.
pub struct ViewContext<'a> {
    pub i18n: &'a crate::i18n::fluent::I18n,
    pub state: &'a State,
}

/// Canvas program sampling the field once per grid cell.
struct NoiseCanvas {
    cache: Cache,
    field: NoiseField,
}

impl NoiseCanvas {
    fn new(field: NoiseField) -> Self {
        Self {
            cache: Cache::default(),
            field,
        }
    }

    fn into_element<MessageT: 'static>(self) -> Element<'static, MessageT> {
        Canvas::new(self)
            .width(Length::Fixed(sizing::NOISE_CANVAS))
            .height(Length::Fixed(sizing::NOISE_CANVAS))
            .into()
    }
}

impl<MessageT> canvas::Program<MessageT> for NoiseCanvas {
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
                #[allow(clippy::cast_precision_loss)]
                let cells = GRID_CELLS as f32;
                let cell_w = frame.width() / cells;
                let cell_h = frame.height() / cells;

                for row in 0..GRID_CELLS {
                    for col in 0..GRID_CELLS {
                        #[allow(clippy::cast_precision_loss)]
                        let x = col as f32;
                        #[allow(clippy::cast_precision_loss)]
                        let y = row as f32;
                        let v = self.field.sample(x / FREQUENCY, y / FREQUENCY);

                        let cell = Path::rectangle(
                            Point::new(x * cell_w, y * cell_h),
                            Size::new(cell_w, cell_h),
                        );
                        frame.fill(&cell, Color::from_rgb(v, v, v));
                    }
                }
            });

        vec![geometry]
    }
}
