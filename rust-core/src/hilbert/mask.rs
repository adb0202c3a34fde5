//! Frequency-domain weights for the analytic signal

/// Spectral mask for a length-`n` analytic signal.
///
/// DC and (for even `n`) the Nyquist bin keep weight 1, positive frequencies
/// are doubled and negative frequencies are zeroed:
///
/// ```text
/// n even:  [1, 2, ..., 2, 1, 0, ..., 0]     ones at 0 and n/2
/// n odd:   [1, 2, ..., 2, 0, ..., 0]        twos up to (n-1)/2
/// ```
pub fn spectral_mask(n: usize) -> Vec<f64> {
    let mut mask = vec![0.0; n];
    if n == 0 {
        return mask;
    }

    mask[0] = 1.0;
    // First bin past the positive half: n/2 for even n, (n+1)/2 for odd n
    let half = n.div_ceil(2);
    for w in &mut mask[1..half] {
        *w = 2.0;
    }
    if n % 2 == 0 {
        mask[n / 2] = 1.0;
    }

    mask
}
