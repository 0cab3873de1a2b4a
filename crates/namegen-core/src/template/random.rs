//! Random source abstraction for evaluation

/// Capability supplying the random draws an evaluation needs
///
/// Every [`rand::Rng`] is a `RandomSource`; tests substitute scripted
/// sequences to pin exact outcomes.
pub trait RandomSource {
    /// Uniform float in `[0, 1)`
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `[0, bound)`; `bound` is never zero
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: rand::Rng + ?Sized> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}
