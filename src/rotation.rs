///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use druid::{widget::Controller, Data, Env, Event, EventCtx, LifeCycle, LifeCycleCtx, Widget};

use crate::frame_loop::{FrameHandle, FrameLoop};
use crate::spin::SpinDataAccess;

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// RotationController
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// Drives the spin of the wrapped widget, one tick per animation frame.
///
/// The speed is read from the data on every frame, so changing it never
/// requires restarting the loop.
pub struct RotationController {
    frame_loop: FrameLoop,
}

impl RotationController {
    pub fn new() -> Self {
        Self {
            frame_loop: FrameLoop::new(),
        }
    }

    /// Schedules the first frame unless a loop is already running.
    /// Callers must follow up with `request_anim_frame`.
    pub fn start(&mut self) -> FrameHandle {
        match self.frame_loop.pending() {
            Some(handle) => handle,
            None => {
                let handle = self.frame_loop.schedule();
                log::info!("Rotation loop started (frame {})", handle.id());
                handle
            }
        }
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.frame_loop.cancel() {
            log::info!(
                "Rotation loop stopped (frame {}, {} frames run)",
                handle.id(),
                self.frame_loop.frames()
            );
        }
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    /// Runs one frame of the loop. Returns whether another frame was
    /// scheduled; a frame arriving after `stop` leaves the data untouched.
    pub fn step<T: SpinDataAccess>(&mut self, data: &mut T) -> bool {
        if !self.frame_loop.fire() {
            return false;
        }
        data.tick();
        self.frame_loop.schedule();
        true
    }
}

impl Default for RotationController {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RotationController {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<T: Data + SpinDataAccess, W: Widget<T>> Controller<T, W> for RotationController {
    fn event(&mut self, child: &mut W, ctx: &mut EventCtx, event: &Event, data: &mut T, env: &Env) {
        if let Event::AnimFrame(interval) = event {
            if self.step(data) {
                log::trace!("Tick after {}ns, rotation {}", interval, data.get_rotation());
                ctx.request_anim_frame();
                ctx.request_paint();
            }
        }
        child.event(ctx, event, data, env);
    }

    fn lifecycle(&mut self, child: &mut W, ctx: &mut LifeCycleCtx, event: &LifeCycle, data: &T, env: &Env) {
        match event {
            LifeCycle::WidgetAdded | LifeCycle::DisabledChanged(false) => {
                self.start();
                ctx.request_anim_frame();
            }
            LifeCycle::DisabledChanged(true) => self.stop(),
            _ => (),
        }
        child.lifecycle(ctx, event, data, env);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spin::SpinData;

    fn run_frames(controller: &mut RotationController, data: &mut SpinData, frames: usize) {
        for _ in 0..frames {
            controller.step(data);
        }
    }

    #[test]
    fn does_nothing_before_start() {
        let mut controller = RotationController::new();
        let mut data = SpinData::new();
        data.set_speed(3);
        assert!(!controller.step(&mut data));
        assert_eq!(data.rotation, 0.0);
    }

    #[test]
    fn advances_by_speed_each_frame() {
        let mut controller = RotationController::new();
        let mut data = SpinData::new();
        data.set_speed(-4);
        data.rotation = 90.0;
        controller.start();
        run_frames(&mut controller, &mut data, 25);
        assert_eq!(data.rotation, 90.0 - 4.0 * 25.0);
        assert!(controller.is_running());
    }

    #[test]
    fn speed_change_takes_effect_on_next_frame() {
        let mut controller = RotationController::new();
        let mut data = SpinData::new();
        data.increase_clockwise();
        data.increase_clockwise();
        controller.start();
        run_frames(&mut controller, &mut data, 5);

        data.set_speed(-1);
        assert_eq!(data.rotation, 10.0);
        run_frames(&mut controller, &mut data, 3);
        assert_eq!(data.rotation, 7.0);
    }

    #[test]
    fn stopped_loop_ignores_frames() {
        let mut controller = RotationController::new();
        let mut data = SpinData::new();
        data.set_speed(5);
        controller.start();
        run_frames(&mut controller, &mut data, 2);
        controller.stop();

        for _ in 0..100 {
            assert!(!controller.step(&mut data));
        }
        assert_eq!(data.rotation, 10.0);
        assert!(!controller.is_running());
    }

    #[test]
    fn start_is_idempotent_while_running() {
        let mut controller = RotationController::new();
        let mut data = SpinData::new();
        data.set_speed(1);
        let first = controller.start();
        assert_eq!(controller.start(), first);

        // Only one frame is in flight, so one delivery moves the glyph once.
        assert!(controller.step(&mut data));
        assert_eq!(data.rotation, 1.0);
    }

    #[test]
    fn restart_after_stop_resumes_from_current_rotation() {
        let mut controller = RotationController::new();
        let mut data = SpinData::new();
        data.set_speed(2);
        controller.start();
        run_frames(&mut controller, &mut data, 3);
        controller.stop();
        run_frames(&mut controller, &mut data, 3);
        controller.start();
        run_frames(&mut controller, &mut data, 3);
        assert_eq!(data.rotation, 12.0);
    }
}
