//! Pre-computed text styles.
//!
//! `MonoTextStyle` and `TextStyle` constructors are const fn in
//! embedded-graphics 0.8, so every fixed-color style is built at compile time.
//! Button labels follow the fade color at runtime, so they are built from
//! [`LABEL_FONT`] instead.

use dashboard_common::colors::{BLACK, MID_GRAY, WHITE};
use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_10X20};
use embedded_graphics::mono_font::iso_8859_1::FONT_9X15;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::text::{Alignment, TextStyle, TextStyleBuilder};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Right-aligned text (range and battery).
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

// =============================================================================
// Font References
// =============================================================================

/// Small label font (6x10).
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

// =============================================================================
// Fixed-Color Styles
// =============================================================================

/// Small white text (status bar, debug values).
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Small gray text (units, secondary labels).
pub const LABEL_STYLE_GRAY: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, MID_GRAY);

/// Popup and navigation title text.
pub const TITLE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Large speed readout.
pub const SPEED_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, WHITE);

/// Climate set point while on. ISO 8859-1 so the degree sign renders.
pub const CLIMATE_STYLE_ON: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_9X15, WHITE);

/// Climate placeholder while off.
pub const CLIMATE_STYLE_OFF: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_9X15, MID_GRAY);

/// Selected gear letter (black on white pill).
pub const GEAR_STYLE_SELECTED: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, BLACK);

/// Unselected gear letter.
pub const GEAR_STYLE_IDLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, MID_GRAY);
