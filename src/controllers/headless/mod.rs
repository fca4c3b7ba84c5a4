pub mod headless_controller;
