use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use log::{error, warn};
use pixels::wgpu;
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::adapters::pixel_format::copy_pixel_buffer_to_rgba;
use crate::controllers::interactive::FrameData;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;

pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    width: u32,
    height: u32,
}

impl GuiPresenterPort for PixelsPresenter {
    fn new(window: &'static Window) -> Self {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = Pixels::new(size.width, size.height, surface_texture)
            .expect("Failed to create pixels surface");

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Self {
            pixels,
            egui_renderer,
            width: size.width,
            height: size.height,
        }
    }

    fn present(&mut self, frame: &FrameData) {
        let pixel_rect = frame.pixel_buffer.pixel_rect();

        if pixel_rect.width() != self.width || pixel_rect.height() != self.height {
            warn!(
                "dropping {}x{} frame for {}x{} surface",
                pixel_rect.width(),
                pixel_rect.height(),
                self.width,
                self.height
            );
            return;
        }

        if let Err(err) = copy_pixel_buffer_to_rgba(&frame.pixel_buffer, self.pixels.frame_mut()) {
            warn!("could not present frame: {}", err);
        }
    }

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.width, self.height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            // keep the fractal underneath the panel
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.width = width;
        self.height = height;

        if let Err(err) = self.pixels.resize_surface(width, height) {
            error!("failed to resize surface to {}x{}: {}", width, height, err);
        }

        if let Err(err) = self.pixels.resize_buffer(width, height) {
            error!("failed to resize buffer to {}x{}: {}", width, height, err);
        }
    }
}
