//! X-11 multiplicative decomposition.
//!
//! Alternates trend estimation with seasonal-irregular ratios:
//!
//! ```text
//! trend      = 2x12 MA of X
//! SI         = X / trend
//! seasonal   = 3x3 MA of SI, normalized by its own 2x12 MA
//! adjusted   = X / seasonal
//! trend      = Henderson(adjusted)
//! SI         = X / trend
//! seasonal   = SI / (3x5 MA of SI)
//! adjusted   = X / seasonal
//! Trend      = 2x12 MA of adjusted
//! Seasonal   = adjusted / Trend
//! Error      = X - Seasonal (see ErrorMode)
//! ```
//!
//! Monthly data is assumed: the seasonal period is fixed at 12.

use tracing::debug;
use x11_spi::{Decomposer, DecompositionResult, ErrorMode, Result, TimeSeries, X11Error};

use crate::erosion::{Chain, Coverage, EdgeErosion};

/// Final series produced by one run of the step chain
pub(crate) struct Passes<S> {
    pub adjusted: S,
    pub seasonal: S,
    pub trend: S,
    pub error: S,
}

/// The X-11 step chain. Window order and sizes are fixed.
pub(crate) fn passes<S: Chain>(x: &S, error_mode: ErrorMode) -> Result<Passes<S>> {
    // preliminary trend-cycle
    let ma12 = x.moving_average(12)?;
    let trend_2x12 = ma12.moving_average(2)?;
    let si_ratio = x.divide(&trend_2x12)?;

    // raw seasonal factors, normalized over a full cycle
    let si_3 = si_ratio.moving_average(3)?;
    let si_3x3 = si_3.moving_average(3)?;
    let norm_12 = si_3x3.moving_average(12)?;
    let norm_2x12 = norm_12.moving_average(2)?;
    let seasonal_first = si_3x3.divide(&norm_2x12)?;
    let adjusted_first = x.divide(&seasonal_first)?;

    // refined trend-cycle and seasonal factors
    let trend_henderson = adjusted_first.henderson()?;
    let si_refined = x.divide(&trend_henderson)?;
    let si_5 = si_refined.moving_average(5)?;
    let si_3x5 = si_5.moving_average(3)?;
    let seasonal_refined = si_refined.divide(&si_3x5)?;
    let adjusted = x.divide(&seasonal_refined)?;

    // final components
    let trend_12 = adjusted.moving_average(12)?;
    let trend = trend_12.moving_average(2)?;
    let seasonal = adjusted.divide(&trend)?;
    let error = match error_mode {
        ErrorMode::Difference => x.subtract(&seasonal)?,
        ErrorMode::Ratio => x.divide(&seasonal.multiply(&trend)?)?,
        ErrorMode::AdjustedDifference => x.subtract(&adjusted)?,
    };

    Ok(Passes {
        adjusted,
        seasonal,
        trend,
        error,
    })
}

/// Multiplicative X-11 decomposer for monthly series.
///
/// Requires strictly positive observations unless
/// [`with_require_positive(false)`](Self::with_require_positive) is set,
/// in which case zero denominators surface as undefined values.
#[derive(Debug, Clone)]
pub struct X11Decomposer {
    error_mode: ErrorMode,
    require_positive: bool,
}

impl X11Decomposer {
    pub fn new() -> Self {
        Self {
            error_mode: ErrorMode::default(),
            require_positive: true,
        }
    }

    pub fn with_error_mode(mut self, error_mode: ErrorMode) -> Self {
        self.error_mode = error_mode;
        self
    }

    pub fn with_require_positive(mut self, require_positive: bool) -> Self {
        self.require_positive = require_positive;
        self
    }

    pub fn error_mode(&self) -> ErrorMode {
        self.error_mode
    }

    pub fn require_positive(&self) -> bool {
        self.require_positive
    }

    /// Predicted undefined edges of the seasonal and trend outputs.
    ///
    /// Every input gap is followed through the chain, including interior
    /// gaps that grow into an edge. When no position would be defined both
    /// sides equal the series length.
    pub fn erosion(&self, series: &TimeSeries) -> EdgeErosion {
        let coverage = Coverage::of(series);
        match passes(&coverage, self.error_mode) {
            Ok(p) => p.seasonal.combine(&p.trend).erosion(),
            Err(_) => EdgeErosion::new(series.len(), series.len()),
        }
    }

    /// Shortest gap-free series that leaves one defined trend value
    pub fn min_len(&self) -> usize {
        Self::edge_erosion(EdgeErosion::default(), self.error_mode).required_len()
    }

    /// Output edges predicted from the input's edge runs alone
    fn edge_erosion(input: EdgeErosion, error_mode: ErrorMode) -> EdgeErosion {
        match passes(&input, error_mode) {
            Ok(p) => p.seasonal.combine(p.trend),
            // erosion arithmetic cannot fail
            Err(_) => input,
        }
    }

    /// `series` is long enough for its edge runs but leaves nothing defined
    fn no_usable_output(series: &TimeSeries) -> X11Error {
        X11Error::InsufficientData {
            required: series.len() + 1,
            actual: series.len(),
        }
    }

    fn check_positive(&self, series: &TimeSeries) -> Result<()> {
        if !self.require_positive {
            return Ok(());
        }
        match series.defined().find(|&(_, v)| v <= 0.0) {
            Some((position, value)) => Err(X11Error::NonPositiveValue { position, value }),
            None => Ok(()),
        }
    }
}

impl Default for X11Decomposer {
    fn default() -> Self {
        Self::new()
    }
}

impl Decomposer for X11Decomposer {
    fn decompose(&self, series: &TimeSeries) -> Result<DecompositionResult> {
        self.check_positive(series)?;

        let edges = Self::edge_erosion(EdgeErosion::of(series), self.error_mode);
        if series.len() < edges.required_len() {
            return Err(X11Error::InsufficientData {
                required: edges.required_len(),
                actual: series.len(),
            });
        }
        let erosion = self.erosion(series);
        if erosion.defined_len(series.len()) == 0 {
            return Err(Self::no_usable_output(series));
        }
        debug!(
            len = series.len(),
            leading = erosion.leading,
            trailing = erosion.trailing,
            error_mode = ?self.error_mode,
            "starting X-11 decomposition"
        );

        let p = passes(series, self.error_mode)?;
        // zero divisors and overflow only show up in the values
        if p.trend.defined_count() == 0 || p.seasonal.defined_count() == 0 {
            return Err(Self::no_usable_output(series));
        }
        debug!(
            defined = p.trend.defined_count(),
            "X-11 decomposition complete"
        );

        Ok(DecompositionResult {
            original: series.clone(),
            adjusted: p.adjusted,
            seasonal: p.seasonal,
            trend: p.trend,
            error: p.error,
        })
    }
}

/// Decompose `series` with the default [`X11Decomposer`]
pub fn x11(series: &TimeSeries) -> Result<DecompositionResult> {
    X11Decomposer::new().decompose(series)
}
