//! Common type definitions used across the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five assessed measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    Tree,
    Bucket,
    Thickness,
    Input,
    Output,
}

impl Measure {
    pub const ALL: [Measure; 5] = [
        Measure::Tree,
        Measure::Bucket,
        Measure::Thickness,
        Measure::Input,
        Measure::Output,
    ];

    /// Measures scored on a linear scale and located in a tertile band table
    pub const LINEAR: [Measure; 4] = [
        Measure::Bucket,
        Measure::Thickness,
        Measure::Input,
        Measure::Output,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Measure::Tree => "tree",
            Measure::Bucket => "bucket",
            Measure::Thickness => "thickness",
            Measure::Input => "input",
            Measure::Output => "output",
        }
    }

    /// Get the display name for this measure
    pub fn display_name(&self) -> &'static str {
        match self {
            Measure::Tree => "Tree",
            Measure::Bucket => "Bucket Level",
            Measure::Thickness => "Bucket Thickness",
            Measure::Input => "Input Pipe",
            Measure::Output => "Output Pipe",
        }
    }

    /// What the measure captures, in a few words
    pub fn tagline(&self) -> &'static str {
        match self {
            Measure::Tree => "Motivation for Change",
            Measure::Bucket => "Trust in Gut",
            Measure::Thickness => "Resilience",
            Measure::Input => "Learning Style",
            Measure::Output => "Sharing Style",
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Measure {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tree" => Ok(Measure::Tree),
            "bucket" | "bucket_level" | "bucketlevel" => Ok(Measure::Bucket),
            "thickness" | "bucket_thickness" | "bucketthickness" => Ok(Measure::Thickness),
            "input" | "input_pipe" | "inputpipe" => Ok(Measure::Input),
            "output" | "output_pipe" | "outputpipe" => Ok(Measure::Output),
            other => Err(format!("unknown measure '{}'", other)),
        }
    }
}

/// Tree sub-dimension. Each facet pulls the Tree vector toward its compass angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeFacet {
    Root,
    Trunk,
    Branch,
    Leaf,
}

impl TreeFacet {
    pub const ALL: [TreeFacet; 4] = [
        TreeFacet::Root,
        TreeFacet::Trunk,
        TreeFacet::Branch,
        TreeFacet::Leaf,
    ];

    /// Compass angle in degrees (root east, trunk north, branch west, leaf south)
    pub fn angle_degrees(&self) -> f64 {
        match self {
            TreeFacet::Root => 0.0,
            TreeFacet::Trunk => 90.0,
            TreeFacet::Branch => 180.0,
            TreeFacet::Leaf => 270.0,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TreeFacet::Root => "Root",
            TreeFacet::Trunk => "Trunk",
            TreeFacet::Branch => "Branch",
            TreeFacet::Leaf => "Leaf",
        }
    }
}

impl fmt::Display for TreeFacet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Integer response scale shared by every linear measure.
///
/// The Tree position always lives on its own circular 1-99 scale; see
/// [`TREE_SCALE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scale {
    #[serde(default = "default_scale_min")]
    pub min: u8,
    #[serde(default = "default_scale_max")]
    pub max: u8,
}

/// Circular scale of Tree positions
pub const TREE_SCALE: Scale = Scale { min: 1, max: 99 };

fn default_scale_min() -> u8 {
    1
}

fn default_scale_max() -> u8 {
    99
}

impl Default for Scale {
    fn default() -> Self {
        Self {
            min: default_scale_min(),
            max: default_scale_max(),
        }
    }
}

impl Scale {
    pub fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    /// Value used when a measure received no responses
    pub fn midpoint(&self) -> u8 {
        ((u16::from(self.min) + u16::from(self.max)) / 2) as u8
    }

    pub fn contains(&self, value: i64) -> bool {
        value >= i64::from(self.min) && value <= i64::from(self.max)
    }

    /// Pin `value` into the scale. An inverted scale pins to its maximum.
    pub fn clamp(&self, value: i64) -> u8 {
        value.max(i64::from(self.min)).min(i64::from(self.max)) as u8
    }

    /// Distance between the two ends of the scale, zero when inverted
    pub fn span(&self) -> u8 {
        self.max.saturating_sub(self.min)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.min == 0 {
            return Err("scale minimum must be at least 1".to_string());
        }
        if self.max > 100 {
            return Err(format!("scale maximum {} exceeds 100", self.max));
        }
        if self.min >= self.max {
            return Err(format!(
                "scale minimum {} must be below maximum {}",
                self.min, self.max
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}
