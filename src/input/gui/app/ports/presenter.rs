use egui::Context as EguiContext;
use winit::window::Window;

use crate::controllers::interactive::FrameData;

pub trait GuiPresenterPort {
    fn new(window: &'static Window) -> Self;
    fn present(&mut self, frame: &FrameData);
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error>;
    fn resize(&mut self, width: u32, height: u32);
}
