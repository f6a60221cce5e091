//! Pipeline errors.

use mesh_io::IoError;
use mesh_material::MaterialError;
use thiserror::Error;

/// Result type for the weight pipeline.
pub type WeighResult<T> = Result<T, WeighError>;

/// Any failure between reading the STL and producing a report.
#[derive(Debug, Error)]
pub enum WeighError {
    /// The STL could not be read or parsed.
    #[error(transparent)]
    Io(#[from] IoError),

    /// The measured volume could not be weighed.
    #[error(transparent)]
    Material(#[from] MaterialError),
}
