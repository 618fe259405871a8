use thiserror::Error;

///
/// All errors emitted from the display module.
///
/// - `WindowUnavailable`: When a window could not be opened, usually because there is no display
///     Parameters:
///     - `title`: The title of the requested window
///     - `reason`: The windowing backend's explanation
/// - `PresentFailed`: When the buffer could not be pushed to an open window
///     Parameters:
///     - `reason`: The windowing backend's explanation
///
#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Could not open the window \"{}\": {}", .title, .reason)]
    WindowUnavailable { title: String, reason: String },

    #[error("Could not present the canvas: {}", .reason)]
    PresentFailed { reason: String },
}
