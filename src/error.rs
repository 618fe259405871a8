use thiserror::Error;

use crate::config::error::ConfigError;
use crate::display::error::DisplayError;
use crate::raster::error::RasterError;

///
/// Any error which can stop a demo run, wrapping the module errors.
///
#[derive(Error, Debug)]
pub enum PolyviewError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Raster(#[from] RasterError),

    #[error(transparent)]
    Display(#[from] DisplayError),

    #[error("Could not write the vertex list: {}", .0)]
    Output(#[from] std::io::Error),
}
