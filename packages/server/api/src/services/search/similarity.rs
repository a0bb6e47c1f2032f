use crate::error::{FaqError, FaqResult};

/// Cosine similarity of two equal-length, non-empty vectors.
///
/// Accumulates in `f64` and clamps the result to `[-1, 1]`. A zero (or
/// non-finite) norm on either side is a `DegenerateVector` error, so callers
/// never see NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> FaqResult<f64> {
    if a.is_empty() || b.is_empty() {
        return Err(FaqError::InvalidInput(
            "cannot compare empty vectors".to_string(),
        ));
    }
    if a.len() != b.len() {
        return Err(FaqError::InvalidInput(format!(
            "dimension mismatch: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (&x, &y) in a.iter().zip(b) {
        let (x, y) = (f64::from(x), f64::from(y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 || !denom.is_finite() || !dot.is_finite() {
        return Err(FaqError::DegenerateVector(
            "vector has zero or non-finite norm".to_string(),
        ));
    }

    Ok((dot / denom).clamp(-1.0, 1.0))
}

/// Checks that a vector can take part in a cosine comparison at all.
pub fn ensure_comparable(v: &[f32]) -> FaqResult<()> {
    if v.is_empty() {
        return Err(FaqError::InvalidInput("empty embedding".to_string()));
    }
    let norm_sq: f64 = v.iter().map(|&x| f64::from(x) * f64::from(x)).sum();
    if norm_sq == 0.0 || !norm_sq.is_finite() {
        return Err(FaqError::DegenerateVector(
            "embedding has zero or non-finite norm".to_string(),
        ));
    }
    Ok(())
}
