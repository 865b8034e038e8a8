// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the intake panel and the toast overlay.
//!
//! Widgets never hard-code colours or sizes; they pick them from the scales
//! below so the panel, the list rows and the preview modal stay consistent.
//!
//! ```
//! use iced::Color;
//! use pricing_intake::ui::design_tokens::{opacity, palette, spacing};
//!
//! let backdrop = Color {
//!     a: opacity::BACKDROP,
//!     ..palette::BLACK
//! };
//! assert!(spacing::MD > spacing::XS);
//! assert!(backdrop.a < 1.0);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    pub const PRIMARY_100: Color = Color::from_rgb(0.85, 0.92, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_700: Color = Color::from_rgb(0.15, 0.4, 0.7);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

pub mod opacity {
    /// Dimmed layer behind the preview modal.
    pub const BACKDROP: f32 = 0.6;
    /// Drop zone tint while a file drag hovers the window.
    pub const DROP_HIGHLIGHT: f32 = 0.15;
    pub const HOVER: f32 = 0.2;
    pub const PRESSED: f32 = 0.5;
}

/// 8px baseline grid.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const TOAST_WIDTH: f32 = 360.0;
    pub const PANEL_MAX_WIDTH: f32 = 720.0;
    pub const DROP_ZONE_HEIGHT: f32 = 140.0;
    pub const LIST_MAX_HEIGHT: f32 = 320.0;
    pub const PREVIEW_WIDTH: f32 = 640.0;
    pub const PREVIEW_MAX_HEIGHT: f32 = 480.0;
}

pub mod typography {
    //! Font size scale, largest first.

    /// Panel heading.
    pub const TITLE_MD: f32 = 20.0;
    /// Modal heading.
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY: f32 = 14.0;
    /// File metadata in list rows.
    pub const CAPTION: f32 = 12.0;
    /// Text preview body.
    pub const MONOSPACE: f32 = 13.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    /// Toast accents and the active drop zone.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

const _: () = {
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::DROP_HIGHLIGHT > 0.0 && opacity::DROP_HIGHLIGHT < opacity::BACKDROP);
    assert!(opacity::BACKDROP < 1.0);

    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(sizing::PREVIEW_WIDTH < sizing::PANEL_MAX_WIDTH);
};
