/// Window construction parameters.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,

    /// Request vertical sync. Failure to enable it is logged and tolerated.
    pub vsync: bool,

    /// Log the driver vendor/version/renderer strings once after the context
    /// is created.
    pub debug_info: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "oriel".to_string(),
            width: 1280,
            height: 720,
            vsync: true,
            debug_info: false,
        }
    }
}
