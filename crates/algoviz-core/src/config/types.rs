//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Top-level visualizer configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VizConfig {
    /// Animation pacing
    #[serde(default)]
    pub animation: AnimationConfig,

    /// Tree layout geometry
    #[serde(default)]
    pub tree: TreeLayoutConfig,

    /// Accepted BST input values
    #[serde(default)]
    pub bst: BstConfig,

    /// Quicksort array generation
    #[serde(default)]
    pub sort: SortConfig,
}

/// Configuration for animation pacing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Base animation speed in milliseconds (0 disables pacing)
    #[serde(default = "default_speed_ms")]
    pub speed_ms: u64,
}

/// Geometry used by the BST layout pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TreeLayoutConfig {
    /// Horizontal position of the root
    #[serde(default = "default_anchor_x")]
    pub anchor_x: f64,

    /// Vertical position of the root
    #[serde(default = "default_anchor_y")]
    pub anchor_y: f64,

    /// Base horizontal spread, divided by child depth
    #[serde(default = "default_spread")]
    pub spread: f64,

    /// Vertical distance between levels
    #[serde(default = "default_level_height")]
    pub level_height: f64,
}

/// Range of values accepted for BST insertion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BstConfig {
    #[serde(default = "default_bst_min")]
    pub min_value: i64,

    #[serde(default = "default_bst_max")]
    pub max_value: i64,
}

/// Array generation settings for the sort engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortConfig {
    /// Array size used for a fresh session
    #[serde(default = "default_array_size")]
    pub default_size: usize,

    #[serde(default = "default_min_size")]
    pub min_size: usize,

    #[serde(default = "default_max_size")]
    pub max_size: usize,

    /// Smallest generated element
    #[serde(default = "default_min_element")]
    pub min_value: i64,

    /// Largest generated element
    #[serde(default = "default_max_element")]
    pub max_value: i64,
}

fn default_speed_ms() -> u64 {
    500
}

fn default_anchor_x() -> f64 {
    400.0
}

fn default_anchor_y() -> f64 {
    80.0
}

fn default_spread() -> f64 {
    200.0
}

fn default_level_height() -> f64 {
    100.0
}

fn default_bst_min() -> i64 {
    1
}

fn default_bst_max() -> i64 {
    100
}

fn default_array_size() -> usize {
    20
}

fn default_min_size() -> usize {
    5
}

fn default_max_size() -> usize {
    100
}

fn default_min_element() -> i64 {
    10
}

fn default_max_element() -> i64 {
    100
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            speed_ms: default_speed_ms(),
        }
    }
}

impl Default for TreeLayoutConfig {
    fn default() -> Self {
        Self {
            anchor_x: default_anchor_x(),
            anchor_y: default_anchor_y(),
            spread: default_spread(),
            level_height: default_level_height(),
        }
    }
}

impl Default for BstConfig {
    fn default() -> Self {
        Self {
            min_value: default_bst_min(),
            max_value: default_bst_max(),
        }
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            default_size: default_array_size(),
            min_size: default_min_size(),
            max_size: default_max_size(),
            min_value: default_min_element(),
            max_value: default_max_element(),
        }
    }
}
