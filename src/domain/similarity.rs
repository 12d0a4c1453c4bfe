//! Cosine similarity over embedding vectors.

#[derive(Debug, Clone, PartialEq)]
pub enum SimilarityError {
    DimensionMismatch { left: usize, right: usize },
}

impl std::fmt::Display for SimilarityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimilarityError::DimensionMismatch { left, right } => {
                write!(f, "vectors must have the same dimensions: {} != {}", left, right)
            }
        }
    }
}

impl std::error::Error for SimilarityError {}

/// Cosine similarity between two vectors: `dot(a, b) / (|a| * |b|)`.
///
/// Vectors of unequal length are an error, never truncated. A zero-magnitude
/// operand yields 0.0 — no directional information, not a failure.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, SimilarityError> {
    if a.len() != b.len() {
        return Err(SimilarityError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let mut dot = 0.0f32;
    let mut magnitude_a = 0.0f32;
    let mut magnitude_b = 0.0f32;

    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        magnitude_a += x * x;
        magnitude_b += y * y;
    }

    let magnitude_a = magnitude_a.sqrt();
    let magnitude_b = magnitude_b.sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return Ok(0.0);
    }

    Ok(dot / (magnitude_a * magnitude_b))
}
