//! Series color table.

use serde::{Deserialize, Serialize};

use super::types::Color;
use crate::error::ChartError;

/// Microsoft Office (2013+) chart series palette.
/// Order: blue, orange, gray, gold, light blue, green, then darker blue, orange,
/// gray and gold.
const OFFICE10: [Color; 10] = [
    Color(68, 114, 196),  // blue      (#4472C4)
    Color(237, 125, 49),  // orange    (#ED7D31)
    Color(165, 165, 165), // gray      (#A5A5A5)
    Color(255, 192, 0),   // gold      (#FFC000)
    Color(91, 155, 213),  // light blue(#5B9BD5)
    Color(112, 173, 71),  // green     (#70AD47)
    Color(38, 68, 120),   // dark blue (#264478)
    Color(158, 72, 14),   // dark org. (#9E480E)
    Color(99, 99, 99),    // dark gray (#636363)
    Color(153, 115, 0),   // brownish  (#997300)
];

/// Ordered, non-empty list of series colors. Series `i` uses entry `i mod len`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Result<Self, ChartError> {
        if colors.is_empty() {
            return Err(ChartError::InvalidOptions("palette must not be empty".into()));
        }
        Ok(Self { colors })
    }

    pub fn office() -> Self {
        Self {
            colors: OFFICE10.to_vec(),
        }
    }

    /// Color for the series at `index`, wrapping around the table.
    #[inline]
    pub fn color(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::office()
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = ChartError;

    fn try_from(colors: Vec<Color>) -> Result<Self, Self::Error> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<Color> {
    fn from(p: Palette) -> Self {
        p.colors
    }
}
