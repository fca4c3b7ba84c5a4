use std::time::Duration;

use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{error, warn};
use winit::{
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::EventLoop,
    window::Window,
};

use crate::controllers::interactive::{
    Button, InputEvent, InteractiveController, PanDirection, WheelDirection,
};
use crate::core::fractals::multibrot::colour_mapping::kinds::Palette;
use crate::input::gui::app::key_input::input_event_for_key;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;

pub struct GuiApp<T: GuiPresenterPort> {
    width: u32,
    height: u32,
    pub scale_factor: f64,
    presenter: T,
    controller: InteractiveController,
    cursor_position: Option<(f64, f64)>,
    last_render_duration: Option<Duration>,
    last_error_message: Option<String>,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        controller: InteractiveController,
    ) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Self {
            width: size.width,
            height: size.height,
            scale_factor,
            presenter,
            controller,
            cursor_position: None,
            last_render_duration: None,
            last_error_message: None,
            egui_ctx,
            egui_state,
        }
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        self.presenter.render(egui_output, &self.egui_ctx)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return;
        }

        self.presenter.resize(width, height);
        self.render_view();
    }

    /// Renders the controller's current view into the presenter's frame.
    pub fn render_view(&mut self) {
        if self.width == 0 || self.height == 0 {
            return;
        }

        match self.controller.render(self.width, self.height) {
            Ok(frame) => {
                self.presenter.present(&frame);
                self.last_render_duration = Some(frame.render_duration);
                self.last_error_message = None;
            }
            Err(err) => {
                error!("render failed: {}", err);
                self.last_error_message = Some(err.to_string());
            }
        }
    }

    fn is_on_surface(&self, x: f64, y: f64) -> bool {
        x >= 0.0 && y >= 0.0 && x < self.width as f64 && y < self.height as f64
    }

    /// Applies `event` and re-renders if it moved the view. Returns whether a
    /// redraw is needed.
    pub fn dispatch(&mut self, event: InputEvent) -> bool {
        if !self.controller.handle(event) {
            return false;
        }

        self.render_view();
        true
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let mut requested: Vec<InputEvent> = Vec::new();
        let view = *self.controller.view();

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Controls")
                .anchor(egui::Align2::RIGHT_BOTTOM, [-10.0, -10.0])
                .resizable(false)
                .collapsible(true)
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        ui.add_space(28.0);
                        if ui.button("▲").clicked() {
                            requested.push(InputEvent::Button(Button::Pan(PanDirection::Up)));
                        }
                    });
                    ui.horizontal(|ui| {
                        if ui.button("◀").clicked() {
                            requested.push(InputEvent::Button(Button::Pan(PanDirection::Left)));
                        }
                        if ui.button("▼").clicked() {
                            requested.push(InputEvent::Button(Button::Pan(PanDirection::Down)));
                        }
                        if ui.button("▶").clicked() {
                            requested.push(InputEvent::Button(Button::Pan(PanDirection::Right)));
                        }
                    });

                    ui.separator();
                    ui.horizontal(|ui| {
                        if ui.button("+").clicked() {
                            requested.push(InputEvent::Button(Button::ZoomIn));
                        }
                        if ui.button("-").clicked() {
                            requested.push(InputEvent::Button(Button::ZoomOut));
                        }
                        if ui.button("Reset").clicked() {
                            requested.push(InputEvent::Button(Button::Reset));
                        }
                        if ui.button("Multiply").clicked() {
                            requested.push(InputEvent::Button(Button::Transform));
                        }
                    });

                    ui.horizontal(|ui| {
                        ui.label("Palette:");
                        let mut selected = view.palette;
                        egui::ComboBox::from_id_source("multibrot_palette")
                            .selected_text(selected.display_name())
                            .show_ui(ui, |ui| {
                                for &palette in Palette::ALL {
                                    ui.selectable_value(
                                        &mut selected,
                                        palette,
                                        palette.display_name(),
                                    );
                                }
                            });
                        if selected != view.palette {
                            requested.push(InputEvent::SelectPalette(selected));
                        }
                    });

                    ui.separator();
                    ui.label(format!(
                        "Magnification: {:.3}  Exponent: {}  Rotation: {}°",
                        view.magnification, view.exponent, view.rotation_degrees
                    ));
                    if let Some(render_duration) = self.last_render_duration {
                        ui.label(format!("Last render: {} ms", render_duration.as_millis()));
                    }
                    if let Some(message) = &self.last_error_message {
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });
        });

        for event in requested {
            self.dispatch(event);
        }

        output
    }

    /// Forwards `event` to egui, then to the controller if egui did not take
    /// it. Returns whether a redraw is needed.
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        let response = self.egui_state.on_window_event(window, event);

        if response.consumed {
            return response.repaint;
        }

        let view_changed = match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_position = Some((position.x, position.y));
                false
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor_position = None;
                false
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => match self.cursor_position {
                Some((x, y)) if self.is_on_surface(x, y) => {
                    self.dispatch(InputEvent::Click { x, y })
                }
                Some((x, y)) => {
                    warn!("ignoring click at ({}, {}) outside the surface", x, y);
                    false
                }
                None => false,
            },
            WindowEvent::MouseWheel { delta, .. } => {
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y as f64,
                    MouseScrollDelta::PixelDelta(position) => position.y,
                };
                // winit reports scrolling away from the user as positive
                if dy == 0.0 {
                    false
                } else {
                    self.dispatch(InputEvent::Wheel(WheelDirection::from_delta(-dy)))
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                match input_event_for_key(&event.logical_key, event.state) {
                    Some(input) => self.dispatch(input),
                    None => false,
                }
            }
            _ => false,
        };

        view_changed || response.repaint
    }
}
