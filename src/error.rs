use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SliceError {
    #[error("Invalid layer height: {0} (must be a finite value > 0)")]
    InvalidLayerHeight(f64),
    #[error("Layer height {layer_height} would cut the model into {count} layers (at most {max} are allowed)")]
    TooManyLayers{
        layer_height:f64,
        count:f64,
        max:usize,
    },
    #[error("Invalid scale factor: {0} (must be finite and non-zero)")]
    InvalidScale(f64),
    #[error("Mesh contains no valid triangles")]
    EmptyMesh,
    #[error("Failed to read {path}: {source}")]
    Io{
        path:PathBuf,
        #[source]
        source:std::io::Error,
    },
    #[error("Invalid settings file {path}: {source}")]
    Settings{
        path:PathBuf,
        #[source]
        source:serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, SliceError>;

#[test]
fn error_display(){
    let err = SliceError::InvalidLayerHeight(-0.1);
    assert!(format!("{err}").contains("-0.1"));
    assert_eq!(format!("{}",SliceError::EmptyMesh), "Mesh contains no valid triangles");
}
