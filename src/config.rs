//! Tunable knobs for the analysis and the numeric solver.

/// Controls the symbolic zero test.
#[derive(Clone, Debug, PartialEq)]
pub struct ZeroTestOptions {
    /// Sample opaque residues (trig, log, radicals) numerically when the
    /// canonical numerator does not cancel on its own.
    pub numeric_fallback: bool,
    /// Relative tolerance for a sample to count as zero.
    pub tolerance: f64,
    /// Minimum number of finite samples required before declaring zero.
    pub min_valid_samples: usize,
}

impl Default for ZeroTestOptions {
    fn default() -> Self {
        ZeroTestOptions {
            numeric_fallback: true,
            tolerance: 1e-9,
            min_valid_samples: 3,
        }
    }
}

impl ZeroTestOptions {
    /// Purely symbolic: only a cancelled numerator counts as zero.
    pub fn symbolic() -> Self {
        ZeroTestOptions {
            numeric_fallback: false,
            ..ZeroTestOptions::default()
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_min_valid_samples(mut self, count: usize) -> Self {
        self.min_valid_samples = count;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisOptions {
    pub zero_test: ZeroTestOptions,
    /// Exponent radius of the `x^m y^n` grid.
    pub exponent_grid: i32,
    /// Radius of the `a`, `b` range tried by the degree/ratio solver.
    pub ratio_range: i32,
    /// Highest power of `t` probed by the homogeneity test.
    pub max_homogeneous_degree: u32,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        AnalysisOptions {
            zero_test: ZeroTestOptions::default(),
            exponent_grid: 3,
            ratio_range: 2,
            max_homogeneous_degree: 4,
        }
    }
}

impl AnalysisOptions {
    pub fn with_zero_test(mut self, zero_test: ZeroTestOptions) -> Self {
        self.zero_test = zero_test;
        self
    }

    pub fn with_exponent_grid(mut self, radius: i32) -> Self {
        self.exponent_grid = radius;
        self
    }

    pub fn with_ratio_range(mut self, radius: i32) -> Self {
        self.ratio_range = radius;
        self
    }

    pub fn with_max_homogeneous_degree(mut self, degree: u32) -> Self {
        self.max_homogeneous_degree = degree;
        self
    }
}

/// Options for [`crate::numeric::solve_ivp`].
#[derive(Clone, Debug, PartialEq)]
pub struct IvpOptions {
    pub rtol: f64,
    pub atol: f64,
    /// Number of evenly spaced output abscissae, endpoints included.
    pub samples: usize,
    /// Step budget across the whole interval.
    pub max_steps: usize,
    /// Initial step; derived from the interval length when `None`.
    pub first_step: Option<f64>,
}

impl Default for IvpOptions {
    fn default() -> Self {
        IvpOptions {
            rtol: 1e-6,
            atol: 1e-9,
            samples: 200,
            max_steps: 100_000,
            first_step: None,
        }
    }
}

impl IvpOptions {
    pub fn with_tolerances(mut self, rtol: f64, atol: f64) -> Self {
        self.rtol = rtol;
        self.atol = atol;
        self
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_first_step(mut self, h: f64) -> Self {
        self.first_step = Some(h);
        self
    }
}
