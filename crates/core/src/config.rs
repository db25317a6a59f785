//! External configuration record and its validated form
//!
//! The raw record mirrors the operator-facing shape (camelCase
//! `initTiles`, every field optional so an absent field is reported as a
//! configuration error rather than a parse failure). Validation produces
//! the concrete [`RunConfig`] the controller builds a run from.

use serde::Deserialize;

use crate::error::ConfigError;

/// Raw configuration record as supplied by the operator.
///
/// All fields are optional; [`SimulationConfig::validate`] decides which
/// absences are errors.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Grid row count
    pub rows: Option<u32>,
    /// Grid column count
    pub cols: Option<u32>,
    /// Ignition probability in [0, 1]
    pub probability: Option<f32>,
    /// Initial ignition coordinates as [row, col] pairs, possibly empty
    #[serde(rename = "initTiles")]
    pub init_tiles: Option<Vec<[u32; 2]>>,
}

impl SimulationConfig {
    /// Parse a configuration record from its JSON representation.
    ///
    /// # Errors
    /// Returns [`ConfigError::Malformed`] if the text is not valid JSON of
    /// the expected shape.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    /// Check that every required field is present and in range.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingField`] for an absent field,
    /// [`ConfigError::InvalidDimension`] for a zero dimension, and
    /// [`ConfigError::InvalidProbability`] for a probability outside
    /// [0, 1] or a non-finite value.
    pub fn validate(&self) -> Result<RunConfig, ConfigError> {
        let rows = self.rows.ok_or(ConfigError::MissingField("rows"))?;
        let cols = self.cols.ok_or(ConfigError::MissingField("cols"))?;
        let probability = self
            .probability
            .ok_or(ConfigError::MissingField("probability"))?;
        let init_tiles = self
            .init_tiles
            .as_ref()
            .ok_or(ConfigError::MissingField("initTiles"))?;

        if rows == 0 {
            return Err(ConfigError::InvalidDimension { field: "rows", value: rows });
        }
        if cols == 0 {
            return Err(ConfigError::InvalidDimension { field: "cols", value: cols });
        }
        if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
            return Err(ConfigError::InvalidProbability(probability));
        }

        Ok(RunConfig {
            rows: rows as usize,
            cols: cols as usize,
            probability,
            init_tiles: init_tiles
                .iter()
                .map(|pair| (pair[0] as usize, pair[1] as usize))
                .collect(),
        })
    }
}

/// Validated configuration a run is built from.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Grid row count, guaranteed positive
    pub rows: usize,
    /// Grid column count, guaranteed positive
    pub cols: usize,
    /// Ignition probability, guaranteed within [0, 1]
    pub probability: f32,
    /// Initial ignition coordinates, not yet bounds-checked (that happens
    /// against the built grid when the run begins)
    pub init_tiles: Vec<(usize, usize)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_record_validates() {
        let config = SimulationConfig {
            rows: Some(10),
            cols: Some(20),
            probability: Some(0.6),
            init_tiles: Some(vec![[0, 0], [3, 4]]),
        };
        let run = config.validate().unwrap();
        assert_eq!(run.rows, 10);
        assert_eq!(run.cols, 20);
        assert_eq!(run.probability, 0.6);
        assert_eq!(run.init_tiles, vec![(0, 0), (3, 4)]);
    }

    #[test]
    fn each_missing_field_is_named() {
        let full = SimulationConfig {
            rows: Some(2),
            cols: Some(2),
            probability: Some(0.5),
            init_tiles: Some(Vec::new()),
        };

        let mut config = full.clone();
        config.probability = None;
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::MissingField("probability")
        );

        let mut config = full.clone();
        config.rows = None;
        assert_eq!(config.validate().unwrap_err(), ConfigError::MissingField("rows"));

        let mut config = full;
        config.init_tiles = None;
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::MissingField("initTiles")
        );
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let mut config = SimulationConfig {
            rows: Some(0),
            cols: Some(2),
            probability: Some(0.5),
            init_tiles: Some(Vec::new()),
        };
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::InvalidDimension { field: "rows", value: 0 }
        ));

        config.rows = Some(2);
        config.probability = Some(1.5);
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::InvalidProbability(1.5)
        );

        config.probability = Some(f32::NAN);
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::InvalidProbability(_)
        ));
    }

    #[test]
    fn boundary_probabilities_are_accepted() {
        for p in [0.0, 1.0] {
            let config = SimulationConfig {
                rows: Some(1),
                cols: Some(1),
                probability: Some(p),
                init_tiles: Some(Vec::new()),
            };
            assert_eq!(config.validate().unwrap().probability, p);
        }
    }

    #[test]
    fn parses_the_operator_facing_json_shape() {
        let config = SimulationConfig::from_json(
            r#"{ "rows": 4, "cols": 5, "probability": 0.3, "initTiles": [[1, 2]] }"#,
        )
        .unwrap();
        let run = config.validate().unwrap();
        assert_eq!((run.rows, run.cols), (4, 5));
        assert_eq!(run.init_tiles, vec![(1, 2)]);
    }

    #[test]
    fn absent_json_fields_become_missing_field_errors() {
        let config = SimulationConfig::from_json(r#"{ "rows": 4, "cols": 5 }"#).unwrap();
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::MissingField("probability")
        );
    }

    #[test]
    fn invalid_json_is_malformed() {
        assert!(matches!(
            SimulationConfig::from_json("not json").unwrap_err(),
            ConfigError::Malformed(_)
        ));
    }
}
