use druid::widget::{Flex, MainAxisAlignment, CrossAxisAlignment};
use druid::{theme, AppLauncher, Color, LocalizedString, PlatformError, Widget, WidgetExt, WindowDesc};

use druid_color_thesaurus::*;

use druid_hexagon_spinner::backdrop::{backdrop, BACKGROUND};
use druid_hexagon_spinner::hexagon::Hexagon;
use druid_hexagon_spinner::ring_button::RingButton;
use druid_hexagon_spinner::{RotationController, SpinData, SpinDataAccess};

//////////////////////////////////////////////////////////////////////////////////////
// Constants
//////////////////////////////////////////////////////////////////////////////////////
pub const WINDOW_SIZE: (f64, f64) = (900.0, 900.0);
pub const GLYPH_SIDE: f64 = 384.0;
pub const BUTTON_DIAMETER: f64 = 128.0;
pub const BUTTON_GAP: f64 = 64.0;
pub const BOTTOM_MARGIN: f64 = 90.0;

//////////////////////////////////////////////////////////////////////////////////////
//
// Main
//
//////////////////////////////////////////////////////////////////////////////////////

fn main() -> Result<(), PlatformError> {
    let main_window = WindowDesc::new(make_ui())
        .window_size(WINDOW_SIZE)
        .title(LocalizedString::new("hexagon-spinner-title").with_placeholder("Hexagon Spinner"));

    AppLauncher::with_window(main_window)
        .configure_env(|env, _| {
            env.set(theme::WINDOW_BACKGROUND_COLOR, BACKGROUND);
            env.set(theme::TEXT_COLOR, white::ALABASTER);
            env.set(theme::CURSOR_COLOR, Color::WHITE);
        })
        .log_to_console()
        .launch(SpinData::new())
}

fn make_ui() -> impl Widget<SpinData> {
    let glyph = Hexagon::new(GLYPH_SIDE)
        .controller(RotationController::new())
        .center();

    Flex::column()
        .with_flex_child(glyph, 1.0)
        .with_child(make_controls())
        .with_spacer(BOTTOM_MARGIN)
        .main_axis_alignment(MainAxisAlignment::SpaceBetween)
        .cross_axis_alignment(CrossAxisAlignment::Center)
        .must_fill_main_axis(true)
        .background(backdrop())
}

fn make_controls() -> impl Widget<SpinData> {
    Flex::row()
        .with_child(RingButton::new(BUTTON_DIAMETER).on_click(|_ctx, data: &mut SpinData, _env| {
            data.increase_counter_clockwise();
        }))
        .with_spacer(BUTTON_GAP)
        .with_child(RingButton::new(BUTTON_DIAMETER).on_click(|_ctx, data: &mut SpinData, _env| {
            data.increase_clockwise();
        }))
        .main_axis_alignment(MainAxisAlignment::Center)
}
