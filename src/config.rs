use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::graph::max_simple_edges;
use crate::{Error, Result};

/// Parameters for one generate, weigh and search run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub vertex_count: usize,
    pub edge_limit: usize,
    pub seed: u64,
    pub min_weight: u64,
    pub max_weight: u64,
    pub source: usize,
    /// Clamp unreachable edge limits instead of failing
    pub clamp_edge_limit: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            vertex_count: 1000,
            edge_limit: 5000,
            seed: 1051962,
            min_weight: 1,
            max_weight: 50,
            source: 0,
            clamp_edge_limit: false,
        }
    }
}

impl RunConfig {
    /// Reads a JSON config file; missing fields take their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|err| Error::Config(format!("cannot read {}: {}", path.display(), err)))?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).map_err(|err| Error::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings no run could satisfy
    pub fn validate(&self) -> Result<()> {
        if self.min_weight > self.max_weight {
            return Err(Error::InvalidWeightRange);
        }
        let max = max_simple_edges(self.vertex_count);
        if !self.clamp_edge_limit && self.edge_limit > max {
            return Err(Error::UnsatisfiableEdgeLimit {
                requested: self.edge_limit,
                max,
            });
        }
        if self.vertex_count > 0 && self.source >= self.vertex_count {
            return Err(Error::SourceNotFound(self.source));
        }
        Ok(())
    }
}
