use num_complex::Complex32;
use realfft::{ComplexToReal, RealFftPlanner, RealToComplex};
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

/// FFT plan for forward and inverse complex FFT operations.
///
/// This struct caches FFT plans for efficient reuse. The underlying planner
/// uses the Cooley-Tukey algorithm and is optimized via the rustfft library.
///
/// # Example
/// ```
/// use rtsi::fft::FftPlan;
/// use num_complex::Complex32;
///
/// let plan = FftPlan::new(512);
/// let mut buffer = vec![Complex32::new(1.0, 0.0); 512];
/// plan.forward(&mut buffer);
/// plan.inverse(&mut buffer);
/// ```
pub struct FftPlan {
    forward: Arc<dyn Fft<f32>>,
    inverse: Arc<dyn Fft<f32>>,
    len: usize,
}

impl FftPlan {
    /// Create a new FFT plan for a given size.
    ///
    /// # Arguments
    /// * `len` - Size of the FFT (must be a power of 2 for best performance)
    ///
    /// # Returns
    /// A new FftPlan instance
    pub fn new(len: usize) -> Self {
        let mut planner = FftPlanner::new();
        let forward = planner.plan_fft_forward(len);
        let inverse = planner.plan_fft_inverse(len);
        Self {
            forward,
            inverse,
            len,
        }
    }

    /// Perform forward FFT in-place.
    ///
    /// # Arguments
    /// * `buffer` - Complex input buffer, will be overwritten with FFT output
    pub fn forward(&self, buffer: &mut [Complex32]) {
        self.forward.process(buffer);
    }

    /// Perform inverse FFT in-place.
    ///
    /// The output is scaled by 1/len to make the transform orthogonal.
    ///
    /// # Arguments
    /// * `buffer` - Complex input buffer, will be overwritten with IFFT output
    pub fn inverse(&self, buffer: &mut [Complex32]) {
        self.inverse.process(buffer);
        let scale = 1.0 / self.len as f32;
        for v in buffer.iter_mut() {
            *v *= scale;
        }
    }
}

#[cfg(feature = "parallel")]
const _: () = {
    fn _assert_send_sync<T: Send + Sync>() {}
    fn _check() {
        _assert_send_sync::<FftPlan>();
        _assert_send_sync::<RealFftPlan>();
    }
};

/// Cached real-input FFT plan (rfft / irfft pair) of a fixed length.
///
/// Unlike the one-shot [`rfft`] and [`irfft`] helpers, the plan works on
/// caller-provided buffers so a streaming loop can run without allocating.
/// The inverse is normalized by `1/len`, so `inverse(forward(x)) == x`.
///
/// # Example
/// ```
/// use rtsi::fft::RealFftPlan;
///
/// let plan = RealFftPlan::new(8);
/// let mut input = vec![1.0f32, 2.0, 3.0, 4.0, 0.0, 0.0, 0.0, 0.0];
/// let original = input.clone();
/// let mut spectrum = plan.make_spectrum();
/// let mut scratch = plan.make_scratch();
/// plan.forward(&mut input, &mut spectrum, &mut scratch).unwrap();
///
/// let mut output = vec![0.0f32; 8];
/// plan.inverse(&mut spectrum, &mut output, &mut scratch).unwrap();
/// for (a, b) in output.iter().zip(original.iter()) {
///     assert!((a - b).abs() < 1e-5);
/// }
/// ```
pub struct RealFftPlan {
    forward: Arc<dyn RealToComplex<f32>>,
    inverse: Arc<dyn ComplexToReal<f32>>,
    len: usize,
}

impl RealFftPlan {
    /// Create a new real FFT plan for a given size.
    pub fn new(len: usize) -> Self {
        let mut planner = RealFftPlanner::<f32>::new();
        let forward = planner.plan_fft_forward(len);
        let inverse = planner.plan_fft_inverse(len);
        Self {
            forward,
            inverse,
            len,
        }
    }

    /// Length of the real time-domain signal.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True for a zero-length plan.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of one-sided frequency bins, `len / 2 + 1`.
    pub fn n_freq(&self) -> usize {
        self.len / 2 + 1
    }

    /// Allocate a zeroed spectrum buffer of `n_freq()` bins.
    pub fn make_spectrum(&self) -> Vec<Complex32> {
        self.forward.make_output_vec()
    }

    /// Allocate a scratch buffer large enough for both directions.
    pub fn make_scratch(&self) -> Vec<Complex32> {
        let len = self
            .forward
            .get_scratch_len()
            .max(self.inverse.get_scratch_len());
        vec![Complex32::new(0.0, 0.0); len]
    }

    /// Forward real-to-complex transform.
    ///
    /// `input` is used as working memory and is left in an unspecified state.
    ///
    /// # Errors
    /// Returns an error if a buffer length does not match the plan.
    pub fn forward(
        &self,
        input: &mut [f32],
        output: &mut [Complex32],
        scratch: &mut [Complex32],
    ) -> crate::Result<()> {
        let scratch_len = self.forward.get_scratch_len();
        check_scratch(scratch, scratch_len)?;
        self.forward
            .process_with_scratch(input, output, &mut scratch[..scratch_len])?;
        Ok(())
    }

    /// Normalized inverse complex-to-real transform.
    ///
    /// The imaginary parts of the DC bin (and of the Nyquist bin for even
    /// lengths) are discarded, as a real signal cannot carry them. `input`
    /// is used as working memory.
    ///
    /// # Errors
    /// Returns an error if a buffer length does not match the plan.
    pub fn inverse(
        &self,
        input: &mut [Complex32],
        output: &mut [f32],
        scratch: &mut [Complex32],
    ) -> crate::Result<()> {
        if let Some(dc) = input.first_mut() {
            dc.im = 0.0;
        }
        if self.len % 2 == 0
            && let Some(nyquist) = input.last_mut()
        {
            nyquist.im = 0.0;
        }
        let scratch_len = self.inverse.get_scratch_len();
        check_scratch(scratch, scratch_len)?;
        self.inverse
            .process_with_scratch(input, output, &mut scratch[..scratch_len])?;
        let scale = 1.0 / self.len as f32;
        for v in output.iter_mut() {
            *v *= scale;
        }
        Ok(())
    }
}

fn check_scratch(scratch: &[Complex32], needed: usize) -> crate::Result<()> {
    if scratch.len() < needed {
        return Err(crate::Error::ShapeMismatch {
            expected: format!("scratch of at least {needed}"),
            got: scratch.len().to_string(),
        });
    }
    Ok(())
}

/// Compute the real-to-complex FFT (rfft) of a real-valued input.
///
/// This function computes the FFT of real input data, returning only the
/// non-redundant half of the spectrum (due to symmetry for real inputs).
///
/// # Arguments
/// * `input` - Real-valued input signal
///
/// # Returns
/// Complex FFT output of length input.len() / 2 + 1
///
/// # Errors
/// Propagates planner errors from `realfft`.
///
/// # Example
/// ```
/// use rtsi::fft::rfft;
///
/// let signal = vec![1.0f32; 1024];
/// let spectrum = rfft(&signal).unwrap();
/// assert_eq!(spectrum.len(), 513); // 1024/2 + 1
/// ```
pub fn rfft(input: &[f32]) -> crate::Result<Vec<Complex32>> {
    if input.is_empty() {
        return Ok(Vec::new());
    }
    let plan = RealFftPlan::new(input.len());
    let mut buffer = input.to_vec();
    let mut spectrum = plan.make_spectrum();
    let mut scratch = plan.make_scratch();
    plan.forward(&mut buffer, &mut spectrum, &mut scratch)?;
    Ok(spectrum)
}

/// Compute the normalized inverse real FFT (irfft) of a one-sided spectrum.
///
/// # Arguments
/// * `spectrum` - One-sided spectrum; must hold `len / 2 + 1` bins
/// * `len` - Length of the real output signal
///
/// # Errors
/// Returns an error if the spectrum length does not match `len / 2 + 1`.
///
/// # Example
/// ```
/// use rtsi::fft::{irfft, rfft};
///
/// let signal = vec![0.5f32, -1.0, 0.25, 2.0, 0.0, 1.0];
/// let restored = irfft(&rfft(&signal).unwrap(), signal.len()).unwrap();
/// for (a, b) in restored.iter().zip(signal.iter()) {
///     assert!((a - b).abs() < 1e-5);
/// }
/// ```
pub fn irfft(spectrum: &[Complex32], len: usize) -> crate::Result<Vec<f32>> {
    if len == 0 {
        return Ok(Vec::new());
    }
    if spectrum.len() != len / 2 + 1 {
        return Err(crate::Error::ShapeMismatch {
            expected: format!("{} bins", len / 2 + 1),
            got: format!("{} bins", spectrum.len()),
        });
    }
    let plan = RealFftPlan::new(len);
    let mut input = spectrum.to_vec();
    let mut output = vec![0.0f32; len];
    let mut scratch = plan.make_scratch();
    plan.inverse(&mut input, &mut output, &mut scratch)?;
    Ok(output)
}
