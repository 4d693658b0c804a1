//! Circular slider widget.

use arcdial_core::kurbo;
use arcdial_core::{Color, SliderConfig, SliderController, SliderEvent};
use egui::{Color32, Pos2, Response, Sense, Stroke, Ui, Vec2, Widget};

/// Segments used to flatten each arc into a line strip.
const ARC_SAMPLES: usize = 64;

/// A circular drag/click slider bound to an `f64` value.
///
/// The widget keeps its interaction state in egui temp memory, so it can
/// be rebuilt every frame like any other immediate-mode widget:
///
/// ```no_run
/// fn show(ui: &mut egui::Ui, value: &mut f64) {
///     ui.add(
///         arcdial_widgets::CircleSlider::new(value)
///             .range(0.0, 100.0)
///             .step_size(5.0),
///     );
/// }
/// ```
pub struct CircleSlider<'a> {
    value: &'a mut f64,
    config: SliderConfig,
}

impl<'a> CircleSlider<'a> {
    /// A default 0..=100 slider bound to `value`.
    pub fn new(value: &'a mut f64) -> Self {
        Self {
            value,
            config: SliderConfig::default(),
        }
    }

    /// Replace the whole configuration. The bound value still wins over
    /// `config.value`.
    pub fn config(mut self, config: SliderConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the minimum and maximum values.
    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.config.min = min;
        self.config.max = max;
        self
    }

    /// Set the distance between adjacent steps.
    pub fn step_size(mut self, step_size: f64) -> Self {
        self.config.step_size = step_size;
        self
    }

    /// Set the side length of the square surface.
    pub fn side(mut self, side: f64) -> Self {
        self.config.side = side;
        self
    }

    /// Span and rotation of the track, in degrees.
    pub fn arc(mut self, length_degrees: f64, offset_degrees: f64) -> Self {
        self.config.arc_length_degrees = length_degrees;
        self.config.arc_offset_degrees = offset_degrees;
        self
    }

    /// Value the progress arc is drawn from.
    pub fn origin(mut self, origin: f64) -> Self {
        self.config.origin = Some(origin);
        self
    }

    /// Track, progress, and knob colors.
    pub fn colors(mut self, circle: Color, progress: Color, knob: Color) -> Self {
        self.config.circle_color = circle;
        self.config.progress_color = progress;
        self.config.knob_color = knob;
        self
    }
}

fn to_point(pos: Pos2) -> kurbo::Point {
    kurbo::Point::new(f64::from(pos.x), f64::from(pos.y))
}

fn color32(color: Color) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// Configuration identity ignoring the value, which tracks the binding.
fn config_key(config: &SliderConfig) -> SliderConfig {
    SliderConfig {
        value: 0.0,
        ..config.clone()
    }
}

impl Widget for CircleSlider<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let side = self.config.side as f32;
        let (rect, mut response) =
            ui.allocate_exact_size(Vec2::splat(side), Sense::click_and_drag());

        if self.config.validate().is_err() {
            // Nothing sane to drive or draw.
            return response;
        }

        let id = response.id;
        let stored = ui
            .ctx()
            .data_mut(|d| d.get_temp::<SliderController>(id))
            .filter(|stored| config_key(stored.config()) == config_key(&self.config));
        let mut controller = match stored {
            Some(controller) => controller,
            None => {
                let initial = SliderConfig {
                    value: *self.value,
                    ..self.config.clone()
                };
                match SliderController::new(initial) {
                    Ok(controller) => controller,
                    // Unreachable: validated above.
                    Err(_) => return response,
                }
            }
        };

        // The host may have written the binding since last frame.
        if *self.value != controller.value() {
            controller.set_value(*self.value);
        }

        // The freshly allocated rect is this frame's surface measurement.
        let surface = kurbo::Rect::new(
            f64::from(rect.min.x),
            f64::from(rect.min.y),
            f64::from(rect.max.x),
            f64::from(rect.max.y),
        );

        let multi_touch = ui.input(|i| i.multi_touch().is_some());
        if multi_touch {
            if let Some(pos) = response.interact_pointer_pos() {
                controller.handle_touch_move(2, to_point(pos), &surface);
            }
        } else {
            if response.drag_started() {
                controller.handle_press();
            }
            if response.dragged() {
                if let Some(pos) = response.interact_pointer_pos() {
                    controller.handle_move(to_point(pos), &surface);
                }
            }
            if response.drag_stopped() {
                controller.handle_release();
            }
            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    controller.handle_click(to_point(pos), &surface);
                }
            }
        }

        if controller.tick() {
            ui.ctx().request_repaint();
        }

        for event in controller.drain_events() {
            match event {
                SliderEvent::ValueChanged(value) => {
                    *self.value = value;
                    response.mark_changed();
                }
                SliderEvent::TouchMoveAttempted => {}
            }
        }

        if ui.is_rect_visible(rect) {
            let arcs = controller.arcs();
            let origin = rect.min;
            let to_pos =
                |p: kurbo::Point| Pos2::new(origin.x + p.x as f32, origin.y + p.y as f32);
            let painter = ui.painter();

            painter.add(egui::Shape::line(
                arcs.track_points(ARC_SAMPLES).into_iter().map(to_pos).collect(),
                Stroke::new(
                    self.config.circle_stroke_width() as f32,
                    color32(self.config.circle_color),
                ),
            ));
            painter.add(egui::Shape::line(
                arcs.progress_points(ARC_SAMPLES).into_iter().map(to_pos).collect(),
                Stroke::new(
                    self.config.progress_stroke_width() as f32,
                    color32(self.config.progress_color),
                ),
            ));
            painter.circle_filled(
                to_pos(arcs.knob),
                self.config.resolved_knob_radius() as f32,
                color32(self.config.knob_color),
            );
        }

        ui.ctx().data_mut(|d| d.insert_temp(id, controller));

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_frame(ctx: &egui::Context, value: &mut f64) {
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.add(CircleSlider::new(value).step_size(10.0));
            });
        });
    }

    #[test]
    fn test_widget_runs_headless_without_touching_the_value() {
        let ctx = egui::Context::default();
        let mut value = 30.0;
        run_frame(&ctx, &mut value);
        run_frame(&ctx, &mut value);
        assert_eq!(value, 30.0);
    }

    #[test]
    fn test_off_grid_binding_snaps_to_a_step() {
        let ctx = egui::Context::default();
        let mut value = 33.0;
        run_frame(&ctx, &mut value);
        // 33 fits to 30 on the step-10 grid.
        assert_eq!(value, 30.0);
    }
}
