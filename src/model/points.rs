//! Point data to plot

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// A point in math units with a pixel radius
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataPoint {
    pub x: i64,
    pub y: i64,
    pub r: i64,
}

impl DataPoint {
    pub fn new(x: i64, y: i64, r: i64) -> Self {
        Self { x, y, r }
    }
}

/// The ordered point list of a render request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataPoints {
    #[serde(rename = "DataVals")]
    pub data_vals: Vec<DataPoint>,
}

impl DataPoints {
    pub fn new(data_vals: Vec<DataPoint>) -> Self {
        Self { data_vals }
    }

    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let content = super::read_source(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn len(&self) -> usize {
        self.data_vals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data_vals.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataPoint> {
        self.data_vals.iter()
    }
}
