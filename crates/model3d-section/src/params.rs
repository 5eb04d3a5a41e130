//! Slicing parameters.

/// Parameters for plane slicing.
///
/// Sampling is an explicit, opt-in performance shortcut for interactive
/// preview: when `sample_fraction < 1.0` the pass slices only that share of
/// the mesh's triangles, chosen uniformly without replacement. The default
/// processes every triangle deterministically. Supplying a `seed` makes a
/// sampled pass reproducible as well.
///
/// # Example
///
/// ```
/// use model3d_section::SectionParams;
///
/// let params = SectionParams::default();
/// assert!(!params.is_sampled());
///
/// let preview = SectionParams::default()
///     .with_sample_fraction(0.8)
///     .with_seed(42);
/// assert!(preview.is_sampled());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionParams {
    /// Fraction of triangles to slice, in (0, 1]. 1.0 disables sampling.
    pub sample_fraction: f64,

    /// RNG seed for reproducible sampling. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for SectionParams {
    fn default() -> Self {
        Self {
            sample_fraction: 1.0,
            seed: None,
        }
    }
}

impl SectionParams {
    /// Set the sampled fraction of triangles.
    #[must_use]
    pub const fn with_sample_fraction(mut self, fraction: f64) -> Self {
        self.sample_fraction = fraction;
        self
    }

    /// Set the sampling seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Whether this configuration subsamples the triangle list.
    #[inline]
    #[must_use]
    pub fn is_sampled(&self) -> bool {
        self.sample_fraction < 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_processes_everything() {
        let params = SectionParams::default();
        assert!((params.sample_fraction - 1.0).abs() < f64::EPSILON);
        assert!(params.seed.is_none());
        assert!(!params.is_sampled());
    }

    #[test]
    fn builder() {
        let params = SectionParams::default()
            .with_sample_fraction(0.5)
            .with_seed(7);
        assert!((params.sample_fraction - 0.5).abs() < f64::EPSILON);
        assert_eq!(params.seed, Some(7));
        assert!(params.is_sampled());
    }
}
