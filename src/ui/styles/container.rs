// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Intake panel surface.
///
/// Derived from the active theme background so the panel reads well in both
/// light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.weak.color;

    container::Style {
        background: Some(Background::Color(base)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Drop zone outline; tinted while a file drag hovers the window.
pub fn drop_zone(active: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let text = theme.palette().text;
        let (background, border_color, width) = if active {
            (
                Some(Background::Color(Color {
                    a: opacity::DROP_HIGHLIGHT,
                    ..palette::PRIMARY_500
                })),
                palette::PRIMARY_500,
                border::WIDTH_MD,
            )
        } else {
            (None, palette::GRAY_400, border::WIDTH_SM)
        };

        container::Style {
            background,
            border: Border {
                color: border_color,
                width,
                radius: radius::MD.into(),
            },
            text_color: Some(text),
            ..Default::default()
        }
    }
}

/// One file row in the list.
pub fn list_row(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// Dimmed layer behind the preview modal.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Preview modal card.
pub fn modal(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(base)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}
