use std::fs;
use std::path::Path;

use log::debug;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SliceError};
use crate::mesh::Mesh;
use crate::slicer::LayerAnchor;

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct Settings{
    /// [mm] thickness of every layer
    pub layer_height: f64,

    /// Whether layer planes are measured from the lowest point of the
    /// model (model_min) or from z = 0 (origin)
    pub anchor: LayerAnchor,

    /// Uniform scale applied to the model about the origin
    pub scale: f64,

    /// [(x,y,z) mm] Translation applied after scaling
    pub translate: [f64;3],

    /// [mm] If set, the model is moved so its lowest point sits at this z
    /// after the other transforms are applied
    pub z_height: Option<f64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            layer_height: 0.2,
            anchor: LayerAnchor::ModelMin,
            scale: 1.0,
            translate: [0.0, 0.0, 0.0],
            z_height: None,
        }
    }
}

impl Settings {
    pub fn from_json_file<P:AsRef<Path>>(path:P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|source| SliceError::Io{ path:path.to_path_buf(), source })?;
        serde_json::from_str(&json)
            .map_err(|source| SliceError::Settings{ path:path.to_path_buf(), source })
    }

    /// Applies scale, translation and z-height to the mesh, in that order.
    pub fn apply_transforms(&self, mesh:&mut Mesh) -> Result<()> {
        if !self.scale.is_finite() || self.scale == 0.0 {
            return Err(SliceError::InvalidScale(self.scale))
        }
        if self.scale != 1.0 {
            mesh.scale(self.scale);
        }
        let translation = Vector3::from(self.translate);
        if translation != Vector3::zeros() {
            mesh.translate(translation);
        }
        if let Some(z) = self.z_height {
            mesh.set_z_height(z);
        }
        debug!("transforms applied, total translation {:?}", mesh.applied_translation());
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::data;
    use nalgebra::Point3;

    #[test]
    fn partial_json_uses_defaults(){
        let settings:Settings = serde_json::from_str(r#"{"layer_height": 0.1, "anchor": "origin"}"#).unwrap();
        assert_eq!(settings.layer_height, 0.1);
        assert_eq!(settings.anchor, LayerAnchor::Origin);
        assert_eq!(settings.scale, 1.0);
        assert_eq!(settings.z_height, None);
    }

    #[test]
    fn malformed_json_is_rejected(){
        let path = std::env::temp_dir().join("layer_slice_malformed_settings.json");
        fs::write(&path, "{ layer_height: ").unwrap();
        let result = Settings::from_json_file(&path);
        assert!(matches!(result, Err(SliceError::Settings{..})));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn transforms_are_applied_in_order(){
        let mut mesh = Mesh::from_triangles(data::cube(Point3::new(1.0,1.0,1.0), 1.0));
        let settings = Settings{
            scale: 2.0,
            translate: [1.0, 0.0, 3.0],
            z_height: Some(0.5),
            ..Default::default()
        };
        settings.apply_transforms(&mut mesh).unwrap();

        let bounds = mesh.bounding_box();
        assert_eq!(bounds.min, Point3::new(3.0, 2.0, 0.5));
        assert_eq!(bounds.max, Point3::new(5.0, 4.0, 2.5));
        assert!((mesh.volume() - 8.0).abs() < 1e-9);
        // 1 + 3, then down from z = 5 to z = 0.5
        assert_eq!(mesh.applied_translation(), Vector3::new(1.0, 0.0, -1.5));
    }

    #[test]
    fn zero_scale_is_rejected(){
        let mut mesh = Mesh::from_triangles(data::unit_cube());
        let settings = Settings{ scale: 0.0, ..Default::default() };
        assert!(matches!(settings.apply_transforms(&mut mesh), Err(SliceError::InvalidScale(_))));
    }
}
