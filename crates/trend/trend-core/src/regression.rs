//! Ordinary least squares line fitting
//!
//! Fits y = intercept + slope * x to paired missing-aware samples and
//! exposes the mean-response line, its prediction bands at a chosen
//! confidence level, and the inverse of each (solve for x given y).
//!
//! ## When to use
//!
//! - Data shows a clear linear trend
//! - Interval math (bands, crossing-time bounds) is needed, not just a slope

use statrs::distribution::{ContinuousCDF, StudentsT};
use trend_spi::{Result, TrendError};

/// Minimum usable sample pairs: interval math needs n-2 > 0 degrees of
/// freedom, and n = 3 is the smallest count that provides them.
pub const MIN_SAMPLES: usize = 3;

/// An immutable least-squares fit over cleaned (x, y) pairs
///
/// Construction truncates the inputs to their common length, drops pairs
/// with a missing side, and precomputes every interval-math ingredient.
/// The value is never mutated afterwards.
///
/// # Example
///
/// ```rust
/// use trend_core::FittedLine;
///
/// let x: Vec<Option<f64>> = (0..6).map(|i| Some(i as f64)).collect();
/// let y: Vec<Option<f64>> = (0..6).map(|i| Some(10.0 + 2.0 * i as f64)).collect();
/// let line = FittedLine::new(&x, &y).unwrap();
///
/// assert!((line.slope() - 2.0).abs() < 1e-10);
/// assert!((line.line_at(8.0) - 26.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct FittedLine {
    n: usize,
    slope: f64,
    intercept: f64,
    r_value: f64,
    p_value: f64,
    std_error: f64,
    x_data: Vec<f64>,
    y_data: Vec<f64>,
    sum_x: f64,
    sum_y: f64,
    sum_xx: f64,
    sum_yy: f64,
    sum_xy: f64,
    error_sigma: f64,
    error_slope: f64,
    error_intercept: f64,
    t: f64,
    slope_range: (f64, f64),
    intercept_range: (f64, f64),
}

impl FittedLine {
    /// Fit a line to paired samples.
    ///
    /// Inputs may differ in length (the longer tail is ignored) and may
    /// contain missing samples; a missing value on either side drops the
    /// pair from both sequences.
    ///
    /// # Errors
    ///
    /// - [`TrendError::InsufficientData`] when fewer than [`MIN_SAMPLES`]
    ///   pairs survive cleaning
    /// - [`TrendError::Numerical`] when all x values coincide
    /// - [`TrendError::DegenerateSlope`] when the fitted slope is exactly
    ///   zero, which would make the line uninvertible
    pub fn new(x_data: &[Option<f64>], y_data: &[Option<f64>]) -> Result<Self> {
        let len = x_data.len().min(y_data.len());
        let (xs, ys): (Vec<f64>, Vec<f64>) = x_data[..len]
            .iter()
            .zip(&y_data[..len])
            .filter_map(|(x, y)| match (x, y) {
                (Some(x), Some(y)) => Some((*x, *y)),
                _ => None,
            })
            .unzip();

        let n = xs.len();
        if n < MIN_SAMPLES {
            return Err(TrendError::InsufficientData {
                required: MIN_SAMPLES,
                actual: n,
            });
        }
        let nf = n as f64;

        let sum_x: f64 = xs.iter().sum();
        let sum_y: f64 = ys.iter().sum();
        let sum_xx: f64 = xs.iter().map(|x| x * x).sum();
        let sum_yy: f64 = ys.iter().map(|y| y * y).sum();
        let sum_xy: f64 = xs.iter().zip(&ys).map(|(x, y)| x * y).sum();

        // Centered sums for the closed-form OLS solution
        let sxx = sum_xx - sum_x * sum_x / nf;
        let syy = sum_yy - sum_y * sum_y / nf;
        let sxy = sum_xy - sum_x * sum_y / nf;

        if sxx == 0.0 {
            return Err(TrendError::Numerical(
                "zero variance in x: all sample times coincide".to_string(),
            ));
        }

        let slope = sxy / sxx;
        if slope == 0.0 {
            return Err(TrendError::DegenerateSlope);
        }
        let intercept = (sum_y - slope * sum_x) / nf;

        let r_value = if syy == 0.0 {
            0.0
        } else {
            sxy / (sxx * syy).sqrt()
        };

        let df = (n - 2) as f64;
        // Standard error of the slope estimate
        let std_error = ((syy / sxx - slope * slope).max(0.0) / df).sqrt();

        let dist = StudentsT::new(0.0, 1.0, df)
            .map_err(|e| TrendError::Numerical(format!("t distribution: {e}")))?;

        // Two-sided p-value for the slope t-statistic
        let p_value = if std_error == 0.0 {
            0.0
        } else {
            2.0 * (1.0 - dist.cdf((slope / std_error).abs()))
        };

        // Two-sided 95% critical value used for the parameter ranges
        let t = dist.inverse_cdf(1.0 - 0.025);

        // Residual variance; max(0) absorbs floating point round-off on
        // perfect fits, where the true value is zero.
        let sigma_sq = ((nf * sum_yy - sum_y * sum_y)
            - slope * slope * (nf * sum_xx - sum_x * sum_x))
            .max(0.0)
            / (nf * df);
        let error_sigma = sigma_sq.sqrt();
        let error_slope = (nf * sigma_sq / (nf * sum_xx - sum_x * sum_x)).sqrt();
        let error_intercept = (error_slope * error_slope * sum_xx / nf).sqrt();

        Ok(Self {
            n,
            slope,
            intercept,
            r_value,
            p_value,
            std_error,
            x_data: xs,
            y_data: ys,
            sum_x,
            sum_y,
            sum_xx,
            sum_yy,
            sum_xy,
            error_sigma,
            error_slope,
            error_intercept,
            t,
            slope_range: (slope - t * error_slope, slope + t * error_slope),
            intercept_range: (intercept - t * error_intercept, intercept + t * error_intercept),
        })
    }

    /// Number of cleaned sample pairs
    pub fn n(&self) -> usize {
        self.n
    }

    /// Fitted slope
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Fitted intercept
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Pearson correlation coefficient
    pub fn r_value(&self) -> f64 {
        self.r_value
    }

    /// Coefficient of determination
    pub fn r_squared(&self) -> f64 {
        self.r_value * self.r_value
    }

    /// Two-sided p-value of the slope t-statistic
    pub fn p_value(&self) -> f64 {
        self.p_value
    }

    /// Standard error of the slope estimate
    pub fn std_error(&self) -> f64 {
        self.std_error
    }

    /// Cleaned x samples
    pub fn x_data(&self) -> &[f64] {
        &self.x_data
    }

    /// Cleaned y samples
    pub fn y_data(&self) -> &[f64] {
        &self.y_data
    }

    /// Residual standard deviation
    pub fn error_sigma(&self) -> f64 {
        self.error_sigma
    }

    /// Standard error of the slope interval
    pub fn error_slope(&self) -> f64 {
        self.error_slope
    }

    /// Standard error of the intercept interval
    pub fn error_intercept(&self) -> f64 {
        self.error_intercept
    }

    /// Two-sided 95% Student-t critical value for n-2 degrees of freedom
    pub fn t(&self) -> f64 {
        self.t
    }

    /// 95% confidence interval for the slope (lower, upper)
    pub fn slope_range(&self) -> (f64, f64) {
        self.slope_range
    }

    /// 95% confidence interval for the intercept (lower, upper)
    pub fn intercept_range(&self) -> (f64, f64) {
        self.intercept_range
    }

    /// Sum of the cleaned x samples
    pub fn sum_x(&self) -> f64 {
        self.sum_x
    }

    /// Sum of the cleaned y samples
    pub fn sum_y(&self) -> f64 {
        self.sum_y
    }

    /// Sum of squared x samples
    pub fn sum_xx(&self) -> f64 {
        self.sum_xx
    }

    /// Sum of squared y samples
    pub fn sum_yy(&self) -> f64 {
        self.sum_yy
    }

    /// Sum of x*y products
    pub fn sum_xy(&self) -> f64 {
        self.sum_xy
    }

    /// Two-sided Student-t critical value for a caller-chosen confidence
    /// level in (0, 1)
    pub fn critical_t(&self, confidence: f64) -> Result<f64> {
        if !(0.0 < confidence && confidence < 1.0) {
            return Err(TrendError::InvalidParameter {
                name: "confidence".to_string(),
                reason: format!("must be in (0, 1), got {confidence}"),
            });
        }
        let df = (self.n - 2) as f64;
        let dist = StudentsT::new(0.0, 1.0, df)
            .map_err(|e| TrendError::Numerical(format!("t distribution: {e}")))?;
        let alpha = (1.0 - confidence) / 2.0;
        Ok(dist.inverse_cdf(1.0 - alpha))
    }

    /// Mean-response value at `x`
    pub fn line_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Half-width of the prediction band at the given confidence level
    pub fn band_offset(&self, confidence: f64) -> Result<f64> {
        Ok(self.critical_t(confidence)? * self.error_sigma)
    }

    /// Lower prediction band value at `x`
    pub fn band_lower_at(&self, confidence: f64, x: f64) -> Result<f64> {
        Ok(self.line_at(x) - self.band_offset(confidence)?)
    }

    /// Upper prediction band value at `x`
    pub fn band_upper_at(&self, confidence: f64, x: f64) -> Result<f64> {
        Ok(self.line_at(x) + self.band_offset(confidence)?)
    }

    /// Solve the mean-response line for x given `y`.
    ///
    /// The slope is re-checked here even though construction already
    /// rejects flat fits.
    pub fn solve_line(&self, y: f64) -> Result<f64> {
        if self.slope == 0.0 {
            return Err(TrendError::DegenerateSlope);
        }
        Ok((y - self.intercept) / self.slope)
    }

    /// Solve the lower prediction band for x given `y`.
    ///
    /// The band offset changes sign through the division by the slope, so
    /// for a positive slope this is the larger of the two band roots.
    pub fn solve_band_lower(&self, confidence: f64, y: f64) -> Result<f64> {
        if self.slope == 0.0 {
            return Err(TrendError::DegenerateSlope);
        }
        let offset = self.band_offset(confidence)?;
        Ok((y - self.intercept + offset) / self.slope)
    }

    /// Solve the upper prediction band for x given `y`
    pub fn solve_band_upper(&self, confidence: f64, y: f64) -> Result<f64> {
        if self.slope == 0.0 {
            return Err(TrendError::DegenerateSlope);
        }
        let offset = self.band_offset(confidence)?;
        Ok((y - self.intercept - offset) / self.slope)
    }
}
