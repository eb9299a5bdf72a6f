// SPDX-License-Identifier: MPL-2.0
//! Glass card rendering for a single toast.
//!
//! The card shows the title, optional description and a close affordance
//! wired to the same dismissal path as [`Manager::dismiss`]. Visibility
//! follows the record's phase: `Initial` and `Exiting` render fully
//! transparent so the entering/exiting style states are observable.
//!
//! [`Manager::dismiss`]: crate::Manager::dismiss

use super::design_tokens::{border, glass, palette, radius, shadow, sizing, spacing, typography};
use crate::manager::Message;
use crate::record::{Phase, ToastRecord, Variant};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Renders a single toast card.
pub fn view(record: &ToastRecord) -> Element<'_, Message> {
    let variant = record.variant();
    let phase = record.phase();
    let opacity = phase_opacity(phase);

    let mut body = Column::new().spacing(spacing::XXS);
    if let Some(title) = record.title() {
        body = body.push(
            Text::new(title)
                .size(typography::BODY_LG)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(faded(palette::WHITE, opacity)),
                }),
        );
    }
    if let Some(description) = record.description() {
        body = body.push(
            Text::new(description)
                .size(typography::BODY)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(faded(palette::TEXT_MUTED, opacity)),
                }),
        );
    }

    let close_button = button(
        Container::new(Text::new("\u{00d7}").size(typography::BODY_LG))
            .width(Length::Fixed(sizing::CLOSE_BUTTON))
            .height(Length::Fixed(sizing::CLOSE_BUTTON))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .on_press(Message::Dismiss(record.id().clone()))
    .padding(0.0)
    .style(close_button_style);

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(body).width(Length::Fill))
        .push(close_button);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::MD)
        .style(move |theme: &Theme| card_style(theme, variant, opacity))
        .into()
}

/// Target opacity for each lifecycle phase. `Initial` matches the
/// pre-entry animation state, `Exiting` the outgoing one.
fn phase_opacity(phase: Phase) -> f32 {
    match phase {
        Phase::Initial | Phase::Exiting => 0.0,
        Phase::Entering => 1.0,
    }
}

fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity,
        ..color
    }
}

/// Style function for the glass card container.
fn card_style(_theme: &Theme, variant: Variant, opacity: f32) -> container::Style {
    let (fill, tint) = variant_tint(variant);

    container::Style {
        background: Some(iced::Background::Color(faded(fill, opacity))),
        border: iced::Border {
            color: faded(tint, opacity),
            width: border::WIDTH_SM,
            radius: radius::XL.into(),
        },
        shadow: if opacity > 0.0 {
            shadow::GLASS
        } else {
            shadow::NONE
        },
        text_color: Some(faded(palette::WHITE, opacity)),
        ..Default::default()
    }
}

/// Fill and border tint for a variant.
fn variant_tint(variant: Variant) -> (Color, Color) {
    match variant {
        Variant::Default => (glass::DEFAULT_FILL, glass::DEFAULT_BORDER),
        Variant::Success => (glass::SUCCESS_FILL, glass::SUCCESS_BORDER),
        Variant::Error => (glass::ERROR_FILL, glass::ERROR_BORDER),
        Variant::Info => (glass::INFO_FILL, glass::INFO_BORDER),
    }
}

/// Style function for the close button.
fn close_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(iced::Background::Color(glass::DEFAULT_FILL)),
        text_color: palette::WHITE,
        border: iced::Border {
            color: glass::DEFAULT_BORDER,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    };

    match status {
        button::Status::Active | button::Status::Disabled => base,
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: 0.20,
                ..Color::WHITE
            })),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: 0.30,
                ..Color::WHITE
            })),
            ..base
        },
    }
}
