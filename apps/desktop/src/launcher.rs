use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use nwatch::domain::config::ClientConfig;

#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
    config: ClientConfig,
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self {
            title: "NeoWatch: Register".to_owned(),
            width: 520.0,
            height: 640.0,
            config: ClientConfig::default(),
        }
    }
}

impl DesktopApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Client settings handed to the components as root context.
    #[must_use]
    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Opens the window and blocks until it is closed.
    pub fn launch(self, root: fn() -> Element) {
        let window = WindowBuilder::new()
            .with_title(&self.title)
            .with_inner_size(LogicalSize { width: self.width, height: self.height });

        let cfg = Config::default().with_window(window).with_custom_head(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#.into(),
        );

        let config = self.config;
        LaunchBuilder::desktop()
            .with_cfg(cfg)
            .with_context_provider(move || Box::new(config.clone()))
            .launch(root);
    }
}
