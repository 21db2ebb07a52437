use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::field::*;
use crate::render::*;
use crate::sweep::*;
use crate::validate::*;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },

    #[error("cannot parse config {path}: {source}")]
    Parse { path: PathBuf, source: serde_json::Error },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub format: Format,
    pub width: usize,
    pub height: usize,
    // stdout when missing
    pub output: Option<PathBuf>,
}

impl Default for RenderSettings {
    fn default() -> Self {
	RenderSettings {
	    format: Format::Text,
	    width: 800,
	    height: 600,
	    output: None,
	}
    }
}

// a run as read from a JSON file; model values stay unchecked until validate
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub layers: Vec<RawLayer>,
    pub incidence_angle: Field,
    pub source_depth: Field,
    #[serde(default)]
    pub render: RenderSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sweep: Option<Sweep>,
}

// six layer demo model with the source in the top layer
impl Default for Config {
    fn default() -> Self {
	let layers = [
	    (-2500, -2200, 3000),
	    (-2200, -1800, 2500),
	    (-1800, -1000, 2000),
	    (-1000, -500, 1500),
	    (-500, 200, 900),
	    (200, 500, 600),
	];
	Config {
	    layers: layers.iter()
		.map(|&(top, bottom, velocity)| RawLayer::from(vec![Field::from(top), Field::from(bottom), Field::from(velocity)]))
		.collect(),
	    incidence_angle: Field::Real(39.85),
	    source_depth: Field::Int(-2300),
	    render: RenderSettings::default(),
	    sweep: None,
	}
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
	let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
	    path: path.to_owned(),
	    source,
	})?;
	Self::parse(&text).map_err(|source| ConfigError::Parse {
	    path: path.to_owned(),
	    source,
	})
    }

    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
	serde_json::from_str(text)
    }

    pub fn to_raw(&self) -> RawModel {
	RawModel {
	    layers: self.layers.clone(),
	    incidence_angle: self.incidence_angle.clone(),
	    source_depth: self.source_depth.clone(),
	}
    }
}
