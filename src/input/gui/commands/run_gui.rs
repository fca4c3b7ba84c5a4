use std::error::Error;
use std::marker::PhantomData;

use log::{error, info};
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::controllers::interactive::InteractiveController;
use crate::core::fractals::multibrot::multibrot_config::{
    DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH,
};
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F) -> Self {
        Self {
            presenter_factory,
            _phantom: PhantomData,
        }
    }

    /// Opens the viewer window and blocks until it is closed.
    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let event_loop = EventLoop::new()?;

        // pixels needs a 'static window
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Multibrot Explorer")
                .with_inner_size(LogicalSize::new(
                    DEFAULT_SURFACE_WIDTH as f64,
                    DEFAULT_SURFACE_HEIGHT as f64,
                ))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)?,
        ));

        let presenter: P = self.presenter_factory.build(window);
        let mut app = GuiApp::new(window, &event_loop, presenter, InteractiveController::new());

        app.render_view();
        info!("viewer window opened");

        let mut redraw_pending = true;

        event_loop.run(|event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => {
                    elwt.exit();
                }
                WindowEvent::RedrawRequested => {
                    redraw_pending = false;

                    let egui_output = app.update_ui(window);

                    app.egui_state
                        .handle_platform_output(window, egui_output.platform_output.clone());

                    if egui_output
                        .viewport_output
                        .values()
                        .any(|v| v.repaint_delay.is_zero())
                    {
                        redraw_pending = true;
                    }

                    if let Err(err) = app.render(egui_output) {
                        error!("render error: {}", err);
                        elwt.exit();
                    }
                }
                WindowEvent::Resized(size) => {
                    app.handle_window_event(window, event);
                    app.resize(size.width, size.height);
                    redraw_pending = true;
                }
                WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                    app.handle_window_event(window, event);
                    app.scale_factor = *scale_factor;
                    app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                    let size = window.inner_size();
                    app.resize(size.width, size.height);
                    redraw_pending = true;
                }
                _ => {
                    if app.handle_window_event(window, event) {
                        redraw_pending = true;
                    }
                }
            },
            Event::AboutToWait => {
                if redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        })?;

        Ok(())
    }
}
