//! Input extraction and the parameter record passed to the algorithm.

use serde::{Deserialize, Serialize};

use polykit_canvas::{PlotStore, PolygonRings, Ring};
use polykit_settings::AlgorithmDefaults;

use crate::error::{RunnerError, RunnerResult};

/// Boundary and obstacle rings read from the canvas at invocation time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlgorithmInput {
    pub boundary: Option<Ring>,
    pub obstacles: Vec<Ring>,
}

impl AlgorithmInput {
    pub fn from_store(store: &PlotStore) -> Self {
        PolygonRings::from_store(store).into()
    }
}

impl From<PolygonRings> for AlgorithmInput {
    fn from(rings: PolygonRings) -> Self {
        Self {
            boundary: rings.boundary,
            obstacles: rings.obstacles,
        }
    }
}

/// Keyword arguments of the algorithm's entry point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmParams {
    pub boundary_list: Ring,
    pub flight_angle_degrees: f64,
    pub boundary_margin: f64,
    /// One margin per obstacle.
    pub obstacle_margin: Vec<f64>,
    pub swath: f64,
    /// `null` when there are no obstacles.
    pub obstacle_list: Option<Vec<Ring>>,
    pub start_point: i64,
    pub perimter_scaled_no: i64,
    pub start_end_elongation_flag: i64,
    pub param_convention: i64,
}

impl AlgorithmParams {
    /// Builds the record from drawn geometry. Fails when no boundary exists.
    pub fn new(input: AlgorithmInput, defaults: &AlgorithmDefaults) -> RunnerResult<Self> {
        let boundary_list = input.boundary.ok_or(RunnerError::MissingBoundary)?;
        let obstacle_margin = vec![defaults.obstacle_margin; input.obstacles.len()];
        let obstacle_list = if input.obstacles.is_empty() {
            None
        } else {
            Some(input.obstacles)
        };

        Ok(Self {
            boundary_list,
            flight_angle_degrees: defaults.flight_angle_degrees,
            boundary_margin: defaults.boundary_margin,
            obstacle_margin,
            swath: defaults.swath,
            obstacle_list,
            start_point: defaults.start_point,
            perimter_scaled_no: defaults.perimter_scaled_no,
            start_end_elongation_flag: defaults.start_end_elongation_flag,
            param_convention: defaults.param_convention,
        })
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacle_list.as_ref().map_or(0, Vec::len)
    }

    pub fn to_json(&self) -> RunnerResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> RunnerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
