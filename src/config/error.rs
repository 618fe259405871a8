use thiserror::Error;

///
/// All errors emitted while loading the demo configuration.
///
/// - `Unreadable`: When the configuration file could not be read
///     Parameters:
///     - `path`: The configuration file path
///     - `err`: The underlying io error
/// - `Malformed`: When the configuration file is not valid JSON, or has fields of the wrong type
///     Parameters:
///     - `path`: The configuration file path
///     - `err`: The underlying parser error
///
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read the configuration file {}: {}", .path, .err)]
    Unreadable { path: String, err: std::io::Error },

    #[error("The configuration file {} is malformed: {}", .path, .err)]
    Malformed { path: String, err: serde_json::Error },
}
