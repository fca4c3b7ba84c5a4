use multibrot_explorer::multibrot_config::{
    DEFAULT_OUTPUT_PATH, DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let presenter = multibrot_explorer::PpmFilePresenter::new();
    let mut controller = multibrot_explorer::HeadlessController::new(presenter);

    controller.generate(
        &multibrot_explorer::ViewState::default(),
        DEFAULT_SURFACE_WIDTH,
        DEFAULT_SURFACE_HEIGHT,
    )?;
    controller.write(DEFAULT_OUTPUT_PATH)?;

    Ok(())
}
