///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use druid::kurbo::BezPath;
use druid::widget::Label;
use druid::{
    Affine, BoxConstraints, Color, Data, Env, Event, EventCtx, LayoutCtx, LifeCycle, LifeCycleCtx,
    PaintCtx, Point, RenderContext, Size, UpdateCtx, Widget,
};
use druid_color_thesaurus::{blue, white};

use crate::spin::SpinDataAccess;

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Constants
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// Outline vertices in a 100x100 view box.
pub const HEXAGON_POINTS: [(f64, f64); 6] = [
    (50.0, 10.0),
    (85.0, 30.0),
    (85.0, 70.0),
    (50.0, 90.0),
    (15.0, 70.0),
    (15.0, 30.0),
];
const VIEW_SIZE: f64 = 100.0;
const STROKE_WIDTH: f64 = 2.0;
pub const DEFAULT_SIDE: f64 = 256.0;
const LABEL_TEXT_SIZE: f64 = 20.0;
const STROKE_COLOR: Color = white::ALABASTER;
const HOVER_COLOR: Color = blue::ARGENTINIAN_BLUE;

/// Closed hexagon outline scaled to a square of `side` pixels.
pub fn hexagon_outline(side: f64) -> BezPath {
    let scale = side / VIEW_SIZE;
    let mut path = BezPath::new();
    for (index, (x, y)) in HEXAGON_POINTS.iter().enumerate() {
        let point = Point::new(x * scale, y * scale);
        if index == 0 {
            path.move_to(point);
        } else {
            path.line_to(point);
        }
    }
    path.close_path();
    path
}

/// Rotation of `degrees` about the centre of a square of `side` pixels.
pub fn spin_transform(side: f64, degrees: f64) -> Affine {
    let center = Point::new(side / 2.0, side / 2.0).to_vec2();
    Affine::translate(center) * Affine::rotate(degrees.to_radians()) * Affine::translate(-center)
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Hexagon Widget
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// The spinning glyph: a hexagon outline with the speed readout in its
/// middle, both turned by the current rotation.
pub struct Hexagon<T> {
    label: Label<T>,
    label_size: Size,
    side: f64,
}

impl<T: Data + SpinDataAccess> Hexagon<T> {
    pub fn new(side: f64) -> Self {
        let mut label = Label::dynamic(|data: &T, _env: &Env| data.speed_label());
        label.set_text_color(STROKE_COLOR);
        label.set_text_size(LABEL_TEXT_SIZE);

        Self {
            label,
            label_size: Size::ZERO,
            side,
        }
    }
}

impl<T: Data + SpinDataAccess> Default for Hexagon<T> {
    fn default() -> Self {
        Self::new(DEFAULT_SIDE)
    }
}

impl<T: Data + SpinDataAccess> Widget<T> for Hexagon<T> {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut T, env: &Env) {
        self.label.event(ctx, event, data, env);
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, data: &T, env: &Env) {
        if let LifeCycle::HotChanged(_) = event {
            ctx.request_paint();
        }
        self.label.lifecycle(ctx, event, data, env);
    }

    fn update(&mut self, ctx: &mut UpdateCtx, old_data: &T, data: &T, env: &Env) {
        if old_data.get_rotation() != data.get_rotation() {
            ctx.request_paint();
        }
        self.label.update(ctx, old_data, data, env);
    }

    fn layout(&mut self, ctx: &mut LayoutCtx, bc: &BoxConstraints, data: &T, env: &Env) -> Size {
        self.label_size = self.label.layout(ctx, &bc.loosen(), data, env);
        bc.constrain(Size::new(self.side, self.side))
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &T, env: &Env) {
        let size = ctx.size();
        let side = size.width.min(size.height);
        let offset = ((size.to_vec2() - Size::new(side, side).to_vec2()) / 2.0).to_point();
        let stroke_color = if ctx.is_hot() { HOVER_COLOR } else { STROKE_COLOR };

        ctx.with_save(|ctx| {
            ctx.transform(Affine::translate(offset.to_vec2()));
            ctx.transform(spin_transform(side, data.get_rotation()));

            let scale = side / VIEW_SIZE;
            ctx.stroke(hexagon_outline(side), &stroke_color, STROKE_WIDTH * scale);

            let label_offset = (Size::new(side, side).to_vec2() - self.label_size.to_vec2()) / 2.0;
            ctx.transform(Affine::translate(label_offset));
            self.label.paint(ctx, data, env);
        });
    }
}
