//! Low-level drawing helpers shared by the panel widgets.
//!
//! Regions are repainted by filling their background rectangle first, then
//! drawing content on top. Glyphs (padlock, battery, fan) are built from
//! primitives since the mono fonts have no icons.

use dashboard_common::animations::FAN_BLADES;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, Circle, Line, PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics_simulator::SimulatorDisplay;

/// Fill a region's background.
pub fn fill_region(
    display: &mut SimulatorDisplay<Rgb565>,
    x: u32,
    y: u32,
    w: u32,
    h: u32,
    color: Rgb565,
) {
    Rectangle::new(Point::new(x as i32, y as i32), Size::new(w, h))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Draw a filled pill (fully rounded rectangle).
///
/// Does nothing if the pill is too small to round.
pub fn draw_pill(
    display: &mut SimulatorDisplay<Rgb565>,
    top_left: Point,
    size: Size,
    color: Rgb565,
) {
    if size.width < 2 || size.height < 2 {
        return;
    }
    let radius = size.height.min(size.width) / 2;
    RoundedRectangle::with_equal_corners(Rectangle::new(top_left, size), Size::new(radius, radius))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Draw a small padlock. The 8x6 body has its top-left at `(x, y)`, the
/// shackle arcs above it.
pub fn draw_lock_glyph(
    display: &mut SimulatorDisplay<Rgb565>,
    x: i32,
    y: i32,
    color: Rgb565,
) {
    Arc::new(Point::new(x + 1, y - 5), 6, 180.0_f32.deg(), 180.0_f32.deg())
        .into_styled(PrimitiveStyle::with_stroke(color, 1))
        .draw(display)
        .ok();
    Rectangle::new(Point::new(x, y), Size::new(8, 6))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Draw a battery outline with a fill bar proportional to `level` (0-100).
///
/// The glyph is 18x9 px plus a 2px terminal nub on the right.
pub fn draw_battery_glyph(
    display: &mut SimulatorDisplay<Rgb565>,
    x: i32,
    y: i32,
    level: u8,
    color: Rgb565,
) {
    const BODY_W: u32 = 18;
    const BODY_H: u32 = 9;
    const INNER_W: u32 = BODY_W - 4;

    Rectangle::new(Point::new(x, y), Size::new(BODY_W, BODY_H))
        .into_styled(PrimitiveStyle::with_stroke(color, 1))
        .draw(display)
        .ok();
    Rectangle::new(Point::new(x + BODY_W as i32, y + 3), Size::new(2, 3))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();

    let fill_w = INNER_W * u32::from(level.min(100)) / 100;
    if fill_w > 0 {
        Rectangle::new(Point::new(x + 2, y + 2), Size::new(fill_w, BODY_H - 4))
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(display)
            .ok();
    }
}

/// Draw a fan glyph: a hub plus one line per blade tip offset.
pub fn draw_fan_glyph(
    display: &mut SimulatorDisplay<Rgb565>,
    center: Point,
    tips: &[(i32, i32); FAN_BLADES],
    color: Rgb565,
) {
    let blade_style = PrimitiveStyle::with_stroke(color, 2);
    for (dx, dy) in tips {
        Line::new(center, center + Point::new(*dx, *dy))
            .into_styled(blade_style)
            .draw(display)
            .ok();
    }
    Circle::with_center(center, 4)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}
