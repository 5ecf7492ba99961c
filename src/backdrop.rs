///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use std::f64::consts::PI;

use druid::kurbo::{Arc, BezPath, Line};
use druid::piet::{FixedGradient, FixedRadialGradient, GradientStop};
use druid::widget::Painter;
use druid::{Color, Data, PaintCtx, Point, RenderContext, Size, Vec2};
use druid_color_thesaurus::black;

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Constants
///
///////////////////////////////////////////////////////////////////////////////////////////////////
pub const BACKGROUND: Color = black::ONYX;
pub const SECTOR_COUNT: usize = 6;
/// Span of the square view box the backdrop is drawn in.
const VIEW_SPAN: f64 = 200.0;
/// Sector radius in view units.
const SECTOR_RADIUS: f64 = 100.0;
const SPOKE_WIDTH: f64 = 0.2;
const SATURATION: f64 = 0.7;
const LIGHTNESS: f64 = 0.6;

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Colour helpers
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// Converts hue (degrees), saturation and lightness (`0.0..=1.0`) to rgb
/// components in `0.0..=1.0`.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (f64, f64, f64) {
    let hue = hue.rem_euclid(360.0) / 60.0;
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = chroma * (1.0 - (hue % 2.0 - 1.0).abs());
    let (r, g, b) = match hue as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    (r + m, g + m, b + m)
}

pub fn hsla(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Color {
    let (r, g, b) = hsl_to_rgb(hue, saturation, lightness);
    Color::rgba(r, g, b, alpha)
}

/// Start angle of sector `index`, in degrees.
pub fn sector_angle(index: usize) -> f64 {
    index as f64 * 360.0 / SECTOR_COUNT as f64
}

/// Gradient stops of one sector: the sector hue at the hub fading into the
/// hue 30 degrees further on at the rim.
pub fn sector_stops(index: usize) -> Vec<GradientStop> {
    let angle = sector_angle(index);
    let rim = hsla(angle + 30.0, SATURATION, LIGHTNESS, 1.0);
    vec![
        GradientStop {
            pos: 0.0,
            color: hsla(angle, SATURATION, LIGHTNESS, 0.5),
        },
        GradientStop {
            pos: 0.7,
            color: rim.with_alpha(0.3),
        },
        GradientStop {
            pos: 1.0,
            color: rim.with_alpha(0.0),
        },
    ]
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// BackdropLayout
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// Placement of the view box inside the painted area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackdropLayout {
    pub hub: Point,
    pub scale: f64,
}

impl BackdropLayout {
    /// Fits the view box into `size`, centred.
    pub fn fit(size: Size) -> Self {
        Self {
            hub: size.to_rect().center(),
            scale: size.width.min(size.height) / VIEW_SPAN,
        }
    }

    pub fn radius(&self) -> f64 {
        SECTOR_RADIUS * self.scale
    }

    /// Point on the rim at `angle` degrees.
    pub fn rim_point(&self, angle: f64) -> Point {
        let radians = angle.to_radians();
        self.hub + Vec2::new(radians.cos(), radians.sin()) * self.radius()
    }

    pub fn sector_path(&self, index: usize) -> BezPath {
        let start = sector_angle(index);
        let arc = Arc {
            center: self.hub,
            radii: Vec2::new(self.radius(), self.radius()),
            start_angle: start.to_radians(),
            sweep_angle: 2.0 * PI / SECTOR_COUNT as f64,
            x_rotation: 0.0,
        };

        let mut path = BezPath::new();
        path.move_to(self.hub);
        path.line_to(self.rim_point(start));
        for element in arc.append_iter(0.1) {
            path.push(element);
        }
        path.close_path();
        path
    }

    pub fn spoke(&self, index: usize) -> Line {
        Line::new(self.hub, self.rim_point(sector_angle(index)))
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Painter
///
///////////////////////////////////////////////////////////////////////////////////////////////////
pub fn backdrop<T: Data>() -> Painter<T> {
    Painter::new(|ctx, _data: &T, _env| paint_backdrop(ctx))
}

pub fn paint_backdrop(ctx: &mut PaintCtx) {
    let size = ctx.size();
    ctx.fill(size.to_rect(), &BACKGROUND);

    let layout = BackdropLayout::fit(size);
    if layout.scale <= 0.0 {
        return;
    }

    for index in 0..SECTOR_COUNT {
        let gradient = FixedGradient::Radial(FixedRadialGradient {
            center: layout.hub,
            origin_offset: Vec2::ZERO,
            radius: layout.radius(),
            stops: sector_stops(index),
        });
        match ctx.gradient(gradient) {
            Ok(brush) => ctx.fill(layout.sector_path(index), &brush),
            Err(err) => log::warn!("Skipping backdrop sector {}: {}", index, err),
        }
    }

    let spoke_color = Color::WHITE.with_alpha(0.5);
    for index in 0..SECTOR_COUNT {
        ctx.stroke(layout.spoke(index), &spoke_color, SPOKE_WIDTH * layout.scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rgb(actual: (f64, f64, f64), expected: (f64, f64, f64)) {
        let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
        assert!(
            close(actual.0, expected.0) && close(actual.1, expected.1) && close(actual.2, expected.2),
            "{:?} != {:?}",
            actual,
            expected
        );
    }

    #[test]
    fn primary_hues() {
        assert_rgb(hsl_to_rgb(0.0, 1.0, 0.5), (1.0, 0.0, 0.0));
        assert_rgb(hsl_to_rgb(120.0, 1.0, 0.5), (0.0, 1.0, 0.0));
        assert_rgb(hsl_to_rgb(240.0, 1.0, 0.5), (0.0, 0.0, 1.0));
    }

    #[test]
    fn backdrop_palette_values() {
        assert_rgb(hsl_to_rgb(0.0, 0.7, 0.6), (0.88, 0.32, 0.32));
        assert_rgb(hsl_to_rgb(30.0, 0.7, 0.6), (0.88, 0.6, 0.32));
        assert_rgb(hsl_to_rgb(180.0, 0.7, 0.6), (0.32, 0.88, 0.88));
    }

    #[test]
    fn hue_wraps_around() {
        assert_rgb(hsl_to_rgb(330.0, 0.7, 0.6), hsl_to_rgb(-30.0, 0.7, 0.6));
        assert_rgb(hsl_to_rgb(360.0, 0.7, 0.6), hsl_to_rgb(0.0, 0.7, 0.6));
    }

    #[test]
    fn grey_without_saturation() {
        assert_rgb(hsl_to_rgb(200.0, 0.0, 0.25), (0.25, 0.25, 0.25));
    }

    #[test]
    fn sectors_cover_the_circle() {
        let angles: Vec<f64> = (0..SECTOR_COUNT).map(sector_angle).collect();
        assert_eq!(angles, vec![0.0, 60.0, 120.0, 180.0, 240.0, 300.0]);
    }

    #[test]
    fn stops_fade_out_at_rim() {
        let stops = sector_stops(2);
        let positions: Vec<f32> = stops.iter().map(|stop| stop.pos).collect();
        assert_eq!(positions, vec![0.0, 0.7, 1.0]);
        assert_eq!(stops[2].color.as_rgba().3, 0.0);
    }

    #[test]
    fn layout_fits_shorter_side() {
        let layout = BackdropLayout::fit(Size::new(800.0, 400.0));
        assert_eq!(layout.hub, Point::new(400.0, 200.0));
        assert_eq!(layout.scale, 2.0);
        assert_eq!(layout.radius(), 200.0);

        let rim = layout.rim_point(90.0);
        assert!((rim.x - 400.0).abs() < 1e-9);
        assert!((rim.y - 400.0).abs() < 1e-9);
    }

    #[test]
    fn spokes_start_at_hub() {
        let layout = BackdropLayout::fit(Size::new(200.0, 200.0));
        let spoke = layout.spoke(0);
        assert_eq!(spoke.p0, Point::new(100.0, 100.0));
        assert!((spoke.p1.x - 200.0).abs() < 1e-9);
        assert!((spoke.p1.y - 100.0).abs() < 1e-9);
    }
}
