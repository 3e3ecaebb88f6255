use crate::bounds::{clamp_translation, compute_world_aabb, Rect};
use crate::font;
use crate::graphics::{clear, draw_line, draw_rect_outline, world_to_screen};
use crate::state::AppState;
use crate::transform::{action_for_key, Transform};
use druid::keyboard_types::Key;
use druid::text::FontFamily;
use druid::widget::prelude::*;
use druid::{
    commands,
    piet::{InterpolationMode, Text, TextLayoutBuilder},
    Color, RenderContext, Widget,
};
use std::time::Instant;

const BACKGROUND: Color = Color::rgb8(20, 23, 31);
const TEXT_COLOR: Color = Color::WHITE;
const BOX_COLOR: Color = Color::rgb8(0, 255, 0);

/// Rolling frames-per-second estimate, updated once per paint
struct FpsCounter {
    frames_since_last_update: usize,
    last_fps_calculation: Instant,
    fps: f64,
}

impl FpsCounter {
    fn new() -> Self {
        FpsCounter {
            frames_since_last_update: 0,
            last_fps_calculation: Instant::now(),
            fps: 0.0,
        }
    }

    /// Records one frame at `now` and returns the current estimate,
    /// recomputed about once per second.
    fn tick(&mut self, now: Instant) -> f64 {
        self.frames_since_last_update += 1;
        let duration = now.duration_since(self.last_fps_calculation);
        if duration.as_secs_f64() >= 1.0 {
            self.fps = self.frames_since_last_update as f64 / duration.as_secs_f64();
            self.frames_since_last_update = 0;
            self.last_fps_calculation = now;
        }
        self.fps
    }
}

/// Stroke-text sketch widget
pub struct PlateWidget {
    /// Widget size, tracked for view-bounds computation on key events
    size: Size,
    fps: FpsCounter,
}

impl PlateWidget {
    pub fn new() -> Self {
        PlateWidget {
            size: Size::ZERO,
            fps: FpsCounter::new(),
        }
    }

    /// Visible world rectangle for the current widget size
    fn view_bounds(&self) -> Rect {
        let aspect = if self.size.height > 0.0 {
            self.size.width / self.size.height
        } else {
            1.0
        };
        Rect::view_bounds(aspect)
    }
}

impl Widget<AppState> for PlateWidget {
    /// Handle events for the sketch widget
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut AppState, _env: &Env) {
        match event {
            Event::WindowConnected => {
                // Request focus to receive keyboard events
                ctx.request_focus();
            }
            Event::WindowSize(size) => {
                // the view rectangle follows the window aspect, so a
                // resize can push the text out; pull it back in
                self.size = *size;
                data.transform = clamp_translation(data.model_box, data.transform, self.view_bounds());
                ctx.request_paint();
            }
            Event::KeyDown(key_event) => match &key_event.key {
                Key::Character(s) => {
                    if let Some(action) = action_for_key(s) {
                        let edited = action.apply(data.transform);
                        data.transform =
                            clamp_translation(data.model_box, edited, self.view_bounds());
                        log::debug!("{:?} -> {:?}", action, data.transform);
                        ctx.request_paint();
                    } else if s == "r" || s == "R" {
                        data.transform = clamp_translation(
                            data.model_box,
                            Transform::default(),
                            self.view_bounds(),
                        );
                        ctx.request_paint();
                    } else if s == "b" || s == "B" {
                        data.debug = !data.debug;
                        ctx.request_paint();
                    }
                }
                Key::Escape => {
                    ctx.submit_command(commands::QUIT_APP);
                }
                _ => {}
            },
            _ => {}
        }
    }

    fn lifecycle(
        &mut self,
        _ctx: &mut LifeCycleCtx,
        event: &LifeCycle,
        _data: &AppState,
        _env: &Env,
    ) {
        if let LifeCycle::Size(size) = event {
            self.size = *size;
        }
    }

    fn update(&mut self, _ctx: &mut UpdateCtx, _old_data: &AppState, _data: &AppState, _env: &Env) {
    }

    /// Determines the layout constraints for the sketch widget
    fn layout(
        &mut self,
        _layout_ctx: &mut LayoutCtx,
        bc: &BoxConstraints,
        _data: &AppState,
        _env: &Env,
    ) -> Size {
        let size = bc.max();
        self.size = size;
        size
    }

    /// Paint the sketch widget
    fn paint(&mut self, ctx: &mut PaintCtx, data: &AppState, _env: &Env) {
        // Update FPS calculation
        let fps = self.fps.tick(Instant::now());

        let size = ctx.size();
        let width = size.width as usize;
        let height = size.height as usize;
        if width == 0 || height == 0 {
            return;
        }

        // paint sees the state immutably, so re-clamp into a local
        // copy; the persisted transform catches up on the next edit
        let view = self.view_bounds();
        let transform = clamp_translation(data.model_box, data.transform, view);

        // Create pixel buffer
        let mut pixel_data = vec![0u8; width * height * 4];
        clear(&mut pixel_data, BACKGROUND);

        // Draw the stroke text: model space -> world -> screen
        for (from, to) in font::layout_segments(&data.text) {
            let (x0, y0) = transform.apply(from.0, from.1);
            let (x1, y1) = transform.apply(to.0, to.1);
            draw_line(
                world_to_screen(x0, y0, width, height),
                world_to_screen(x1, y1, width, height),
                &mut pixel_data,
                width,
                height,
                TEXT_COLOR,
            );
        }

        // Outline the world AABB if the debug overlay is on
        if data.debug {
            let world = compute_world_aabb(data.model_box, transform);
            draw_rect_outline(world, &mut pixel_data, width, height, BOX_COLOR);
        }

        // Create and draw the image
        let image = ctx
            .make_image(
                width,
                height,
                &pixel_data,
                druid::piet::ImageFormat::RgbaSeparate,
            )
            .unwrap();
        ctx.draw_image(&image, size.to_rect(), InterpolationMode::NearestNeighbor);

        // Add debug info if the overlay is enabled
        if data.debug {
            let text = format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            let text_layout = ctx
                .text()
                .new_text_layout(text)
                .font(FontFamily::SYSTEM_UI, 12.0)
                .text_color(Color::WHITE)
                .build()
                .unwrap();
            ctx.draw_text(&text_layout, (10.0, 10.0));

            // Draw scale and angle
            let text = format!(
                "Scale: {:.2}, Angle: {:.1}",
                transform.scale, transform.angle_deg
            );
            let text_layout = ctx
                .text()
                .new_text_layout(text)
                .font(FontFamily::SYSTEM_UI, 12.0)
                .text_color(Color::WHITE)
                .build()
                .unwrap();
            ctx.draw_text(&text_layout, (10.0, 30.0));

            // Draw translation
            let text = format!(
                "Translation X: {:.2}, Y: {:.2}",
                transform.tx, transform.ty
            );
            let text_layout = ctx
                .text()
                .new_text_layout(text)
                .font(FontFamily::SYSTEM_UI, 12.0)
                .text_color(Color::WHITE)
                .build()
                .unwrap();
            ctx.draw_text(&text_layout, (10.0, 50.0));

            // Draw view bounds
            let text = format!(
                "View: [{:.2}, {:.2}] x [-1, 1]",
                view.min_x, view.max_x
            );
            let text_layout = ctx
                .text()
                .new_text_layout(text)
                .font(FontFamily::SYSTEM_UI, 12.0)
                .text_color(Color::WHITE)
                .build()
                .unwrap();
            ctx.draw_text(&text_layout, (10.0, 70.0));

            // Draw FPS
            let text = format!("FPS: {:.2}", fps);
            let text_layout = ctx
                .text()
                .new_text_layout(text)
                .font(FontFamily::SYSTEM_UI, 12.0)
                .text_color(Color::WHITE)
                .build()
                .unwrap();
            ctx.draw_text(&text_layout, (10.0, 90.0));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn fps_estimate_updates_after_a_full_second() {
        let start = Instant::now();
        let mut counter = FpsCounter {
            frames_since_last_update: 0,
            last_fps_calculation: start,
            fps: 0.0,
        };
        // under a second the previous estimate is returned unchanged
        for i in 1..60u64 {
            let fps = counter.tick(start + Duration::from_millis(i * 16));
            assert_eq!(fps, 0.0);
        }
        // 60th frame lands exactly on the second boundary
        let fps = counter.tick(start + Duration::from_secs(1));
        assert!((fps - 60.0).abs() < 1e-9);
        assert_eq!(counter.frames_since_last_update, 0);
    }
}
