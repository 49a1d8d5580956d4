//! Drives one design from parameters to a generated scene and a saved file,
//! keeping the design status in step the way the upload flow does.

use bridge_params::{load_rows, ParameterMap, ParameterRow};
use bridge_types::Scene;
use design_file::{load_design, save_design, DesignMetadata};
use gad_engine::{generate_from_map, GenOptions};

use crate::helpers::HarnessError;
use crate::report::SceneReport;

/// A design under test.
pub struct DesignRun {
    pub metadata: DesignMetadata,
    pub parameters: ParameterMap,
    pub options: GenOptions,
    scene: Option<Scene>,
}

impl DesignRun {
    pub fn new(name: &str, parameters: ParameterMap) -> Self {
        Self {
            metadata: DesignMetadata::new(name),
            parameters,
            options: GenOptions::default(),
            scene: None,
        }
    }

    /// Start from spreadsheet rows, as an uploaded sheet would arrive.
    pub fn from_rows(
        name: &str,
        source_filename: &str,
        rows: Vec<ParameterRow>,
    ) -> Result<Self, HarnessError> {
        let parameters = load_rows(rows)?;
        let mut run = Self::new(name, parameters);
        run.metadata = run.metadata.with_source(source_filename);
        Ok(run)
    }

    /// Reopen a saved design file. No scene until [`generate`](Self::generate).
    pub fn from_json(json: &str) -> Result<Self, HarnessError> {
        let (parameters, metadata) = load_design(json)?;
        Ok(Self {
            metadata,
            parameters,
            options: GenOptions::default(),
            scene: None,
        })
    }

    pub fn with_options(mut self, options: GenOptions) -> Self {
        self.options = options;
        self
    }

    /// Change one parameter. Any previous scene is discarded.
    pub fn set(&mut self, name: &str, value: f64) -> &mut Self {
        self.parameters.insert(name, value);
        self.scene = None;
        self
    }

    /// Generate the drawing and record the outcome in the design status.
    pub fn generate(&mut self) -> Result<&Scene, HarnessError> {
        match generate_from_map(&self.parameters, &self.options) {
            Ok(scene) => {
                self.metadata.mark_generated();
                Ok(&*self.scene.insert(scene))
            }
            Err(e) => {
                self.metadata.mark_failed(e.to_string());
                self.scene = None;
                Err(e.into())
            }
        }
    }

    pub fn scene(&self) -> Result<&Scene, HarnessError> {
        self.scene.as_ref().ok_or_else(|| HarnessError::NoScene {
            name: self.metadata.name.clone(),
        })
    }

    pub fn report(&self) -> Result<SceneReport, HarnessError> {
        Ok(SceneReport::from_scene(self.scene()?))
    }

    pub fn save(&self) -> Result<String, HarnessError> {
        Ok(save_design(&self.parameters, &self.metadata)?)
    }
}
