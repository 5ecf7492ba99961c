use druid::kurbo::Circle;
use druid::{
    BoxConstraints, Color, Data, Env, Event, EventCtx, LayoutCtx, LifeCycle, LifeCycleCtx, PaintCtx,
    RenderContext, Size, UpdateCtx, Widget,
};

pub const DEFAULT_DIAMETER: f64 = 96.0;

/// One ring of the button: inset from the edge, stroke width and opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub inset: f64,
    pub width: f64,
    pub alpha: f64,
}

pub const RINGS: [Ring; 3] = [
    Ring { inset: 0.0, width: 4.0, alpha: 0.3 },
    Ring { inset: 8.0, width: 2.0, alpha: 0.2 },
    Ring { inset: 16.0, width: 1.0, alpha: 0.1 },
];
const FILL_ALPHA: f64 = 0.1;
const HOT_BOOST: f64 = 0.1;
const HOT_RING_BOOST: f64 = 0.2;

/// A round click target drawn as a translucent disc with concentric rings.
/// Pair it with `WidgetExt::on_click` to give it an action.
pub struct RingButton {
    diameter: f64,
}

impl RingButton {
    pub fn new(diameter: f64) -> Self {
        Self { diameter }
    }

    pub fn fill_alpha(is_hot: bool) -> f64 {
        if is_hot {
            FILL_ALPHA + HOT_BOOST
        } else {
            FILL_ALPHA
        }
    }

    pub fn ring_alpha(ring: &Ring, is_hot: bool) -> f64 {
        if is_hot {
            ring.alpha + HOT_RING_BOOST
        } else {
            ring.alpha
        }
    }
}

impl Default for RingButton {
    fn default() -> Self {
        Self::new(DEFAULT_DIAMETER)
    }
}

impl<T: Data> Widget<T> for RingButton {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, _data: &mut T, _env: &Env) {
        match event {
            Event::MouseDown(_) if !ctx.is_disabled() => {
                ctx.set_active(true);
                ctx.request_paint();
            }
            Event::MouseUp(_) => {
                if ctx.is_active() {
                    ctx.set_active(false);
                    ctx.request_paint();
                }
            }
            _ => (),
        }
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, _data: &T, _env: &Env) {
        if let LifeCycle::HotChanged(_) | LifeCycle::DisabledChanged(_) = event {
            ctx.request_paint();
        }
    }

    fn update(&mut self, _ctx: &mut UpdateCtx, _old_data: &T, _data: &T, _env: &Env) {}

    fn layout(&mut self, _ctx: &mut LayoutCtx, bc: &BoxConstraints, _data: &T, _env: &Env) -> Size {
        bc.constrain(Size::new(self.diameter, self.diameter))
    }

    fn paint(&mut self, ctx: &mut PaintCtx, _data: &T, _env: &Env) {
        let is_hot = ctx.is_hot() && !ctx.is_disabled();
        let size = ctx.size();
        let center = size.to_rect().center();
        let radius = size.width.min(size.height) / 2.0;

        ctx.fill(
            Circle::new(center, radius),
            &Color::WHITE.with_alpha(Self::fill_alpha(is_hot)),
        );

        for ring in RINGS.iter() {
            // Rings are stroked on their centre line, so pull them in by
            // half their width to stay inside the disc.
            let ring_radius = radius - ring.inset - ring.width / 2.0;
            if ring_radius <= 0.0 {
                continue;
            }
            ctx.stroke(
                Circle::new(center, ring_radius),
                &Color::WHITE.with_alpha(Self::ring_alpha(ring, is_hot)),
                ring.width,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_brightens_fill_and_rings() {
        assert_eq!(RingButton::fill_alpha(false), 0.1);
        assert!((RingButton::fill_alpha(true) - 0.2).abs() < 1e-9);
        for ring in RINGS.iter() {
            assert!((RingButton::ring_alpha(ring, true) - ring.alpha - 0.2).abs() < 1e-9);
        }
    }

    #[test]
    fn rings_fade_inwards() {
        assert!(RINGS.windows(2).all(|pair| pair[0].alpha > pair[1].alpha));
        assert!(RINGS.windows(2).all(|pair| pair[0].inset < pair[1].inset));
    }
}
