//! Row-wise analysis of several equal-length signals held in an ndarray

use ndarray::{Array2, ArrayView1, ArrayView2};
use num_complex::Complex64;

use crate::hilbert::{HilbertAnalyzer, HilbertError};
use crate::transform::TransformEngine;

/// Compute the analytic signal of every row of `signals`
///
/// # Arguments
/// * `analyzer` - Analyzer whose length equals the number of columns
/// * `signals` - One real signal per row
///
/// # Returns
/// Complex array of the same shape
pub fn analytic_signal_rows<E: TransformEngine>(
    analyzer: &HilbertAnalyzer<E>,
    signals: ArrayView2<f64>,
) -> Result<Array2<Complex64>, HilbertError> {
    check_columns(analyzer, &signals)?;

    let mut out = Array2::<Complex64>::zeros(signals.raw_dim());
    let mut dst = Vec::with_capacity(analyzer.len());
    for (row, mut out_row) in signals.rows().into_iter().zip(out.rows_mut()) {
        dst = analyzer.analytic_signal(dst, &row.to_vec())?;
        out_row.assign(&ArrayView1::from(&dst[..]));
    }

    Ok(out)
}

/// Instantaneous amplitude of every row of `signals`
pub fn envelope_rows<E: TransformEngine>(
    analyzer: &HilbertAnalyzer<E>,
    signals: ArrayView2<f64>,
) -> Result<Array2<f64>, HilbertError> {
    Ok(analytic_signal_rows(analyzer, signals)?.mapv(|z| z.norm()))
}

fn check_columns<E: TransformEngine>(
    analyzer: &HilbertAnalyzer<E>,
    signals: &ArrayView2<f64>,
) -> Result<(), HilbertError> {
    if signals.ncols() != analyzer.len() {
        return Err(HilbertError::LengthMismatch {
            expected: analyzer.len(),
            actual: signals.ncols(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_rows_match_single_signal() {
        let signals = array![[1.0, 2.0, 3.0, 4.0], [0.0, 0.0, 0.0, 0.0], [4.0, -1.0, 0.5, 2.0]];
        let analyzer = HilbertAnalyzer::new(4);

        let out = analytic_signal_rows(&analyzer, signals.view()).unwrap();
        assert_eq!(out.dim(), (3, 4));

        for (i, row) in signals.rows().into_iter().enumerate() {
            let single = analyzer.analyze(&row.to_vec()).unwrap();
            for (a, b) in out.row(i).iter().zip(&single) {
                assert!((a - b).norm() < 1e-12);
            }
        }
        assert!((out[[0, 0]] - Complex64::new(1.0, 1.0)).norm() < 1e-10);
    }

    #[test]
    fn test_non_contiguous_rows() {
        // Transposed view: rows are strided
        let columns = array![[1.0, 5.0], [2.0, 4.0], [3.0, 3.0], [4.0, 2.0], [5.0, 1.0]];
        let analyzer = HilbertAnalyzer::new(5);

        let out = analytic_signal_rows(&analyzer, columns.t()).unwrap();
        let first = analyzer.analyze(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        for (a, b) in out.row(0).iter().zip(&first) {
            assert!((a - b).norm() < 1e-12);
        }
    }

    #[test]
    fn test_envelope_rows() {
        let signals = array![[1.0, -1.0, 1.0, -1.0]];
        let env = envelope_rows(&HilbertAnalyzer::new(4), signals.view()).unwrap();

        // Nyquist-only signal has no quadrature part
        for e in env.iter() {
            assert!((e - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_column_mismatch() {
        let signals = Array2::<f64>::zeros((2, 3));
        assert_eq!(
            analytic_signal_rows(&HilbertAnalyzer::new(4), signals.view()),
            Err(HilbertError::LengthMismatch { expected: 4, actual: 3 })
        );
    }

    #[test]
    fn test_empty_rows() {
        let signals = Array2::<f64>::zeros((3, 0));
        let out = analytic_signal_rows(&HilbertAnalyzer::new(0), signals.view()).unwrap();
        assert_eq!(out.dim(), (3, 0));
    }
}
