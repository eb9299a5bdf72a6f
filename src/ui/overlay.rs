// SPDX-License-Identifier: MPL-2.0
//! Toast overlay layer.
//!
//! Renders the projected position buckets as anchored columns, stacked over
//! each other so every corner/edge can hold toasts at once. The host
//! application composes this element above its own content (for example with
//! `iced::widget::stack`); that composition point is the mount point, and
//! when there is nothing to show the overlay collapses to a zero-size
//! element.

use super::design_tokens::spacing;
use super::toast;
use crate::manager::{Manager, Message};
use crate::record::Position;
use iced::widget::{text, Column, Container, Stack};
use iced::{alignment, Element, Length};

/// Renders all active toasts, grouped and ordered by position.
pub fn view(manager: &Manager) -> Element<'_, Message> {
    let buckets = manager.grouped();

    if buckets.is_empty() {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);

    for (position, records) in buckets {
        let (align_x, align_y) = anchor(position);

        let cards: Vec<Element<'_, Message>> = records.into_iter().map(toast::view).collect();

        let column = Column::with_children(cards)
            .spacing(spacing::SM)
            .align_x(align_x);

        layers = layers.push(
            Container::new(column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(align_x)
                .align_y(align_y)
                .padding(spacing::LG),
        );
    }

    layers.into()
}

/// Screen-edge alignment for a position bucket.
fn anchor(position: Position) -> (alignment::Horizontal, alignment::Vertical) {
    let horizontal = match position {
        Position::TopLeft | Position::BottomLeft => alignment::Horizontal::Left,
        Position::TopCenter | Position::BottomCenter => alignment::Horizontal::Center,
        Position::TopRight | Position::BottomRight => alignment::Horizontal::Right,
    };
    let vertical = if position.is_top() {
        alignment::Vertical::Top
    } else {
        alignment::Vertical::Bottom
    };
    (horizontal, vertical)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_match_position_edges() {
        assert_eq!(
            anchor(Position::TopRight),
            (alignment::Horizontal::Right, alignment::Vertical::Top)
        );
        assert_eq!(
            anchor(Position::BottomCenter),
            (alignment::Horizontal::Center, alignment::Vertical::Bottom)
        );
        assert_eq!(
            anchor(Position::BottomLeft),
            (alignment::Horizontal::Left, alignment::Vertical::Bottom)
        );
    }
}
