use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// URL for a pre-rendered marketing image (see the `imagegen` tool).
pub fn ai_image_url(filename: &str) -> String {
    format!("/ai/{}", filename)
}
