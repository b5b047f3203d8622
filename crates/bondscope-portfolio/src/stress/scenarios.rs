//! Shock grid definitions.

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};

const GRID_TOLERANCE: f64 = 1e-9;
const GRID_DECIMALS: f64 = 1e10;

/// Largest number of points a grid may produce.
pub const MAX_GRID_POINTS: usize = 10_000;

/// An inclusive, evenly spaced range of rate shocks in percentage points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShockGrid {
    /// Lowest shock.
    pub min: f64,
    /// Highest shock.
    pub max: f64,
    /// Spacing between shocks.
    pub step: f64,
}

impl Default for ShockGrid {
    /// −2% to +2% in 0.1% steps.
    fn default() -> Self {
        Self {
            min: -2.0,
            max: 2.0,
            step: 0.1,
        }
    }
}

impl ShockGrid {
    /// Creates a validated grid.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::InvalidInput`] if any bound is not finite,
    /// `min > max`, `step` is not positive, or the grid would hold more
    /// than [`MAX_GRID_POINTS`] shocks.
    pub fn new(min: f64, max: f64, step: f64) -> PortfolioResult<Self> {
        let grid = Self { min, max, step };
        grid.validate()?;
        Ok(grid)
    }

    /// Checks the grid bounds.
    pub fn validate(&self) -> PortfolioResult<()> {
        if !(self.min.is_finite() && self.max.is_finite() && self.step.is_finite()) {
            return Err(PortfolioError::invalid_input(format!(
                "shock grid bounds must be finite: min={}, max={}, step={}",
                self.min, self.max, self.step
            )));
        }
        if self.min > self.max {
            return Err(PortfolioError::invalid_input(format!(
                "shock grid min {} exceeds max {}",
                self.min, self.max
            )));
        }
        if self.step <= 0.0 {
            return Err(PortfolioError::invalid_input(format!(
                "shock grid step must be positive, got {}",
                self.step
            )));
        }
        let points = self.intervals() + 1.0;
        if !points.is_finite() || points > MAX_GRID_POINTS as f64 {
            return Err(PortfolioError::invalid_input(format!(
                "shock grid step {} over [{}, {}] exceeds {} points",
                self.step, self.min, self.max, MAX_GRID_POINTS
            )));
        }
        Ok(())
    }

    fn intervals(&self) -> f64 {
        ((self.max - self.min) / self.step + GRID_TOLERANCE).floor()
    }

    /// Every shock on the grid, ascending, both ends included.
    ///
    /// Points are `min + i × step` rounded to ten decimals so that
    /// `0.1`-style steps land on clean values.
    ///
    /// ```rust
    /// use bondscope_portfolio::ShockGrid;
    ///
    /// let shocks = ShockGrid::default().shocks();
    /// assert_eq!(shocks.len(), 41);
    /// assert_eq!(shocks[20], 0.0);
    /// assert_eq!(shocks[21], 0.1);
    /// ```
    ///
    /// A grid that fails [`validate`](Self::validate) yields no shocks.
    #[must_use]
    pub fn shocks(&self) -> Vec<f64> {
        if self.validate().is_err() {
            return Vec::new();
        }
        let intervals = self.intervals() as usize;
        (0..=intervals)
            .map(|i| {
                let raw = self.min + i as f64 * self.step;
                // + 0.0 turns -0.0 into 0.0
                (raw * GRID_DECIMALS).round() / GRID_DECIMALS + 0.0
            })
            .collect()
    }

    /// True if `shock` lies within the grid bounds.
    #[must_use]
    pub fn contains(&self, shock: f64) -> bool {
        shock.is_finite()
            && shock >= self.min - GRID_TOLERANCE
            && shock <= self.max + GRID_TOLERANCE
    }
}
