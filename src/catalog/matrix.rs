use crate::error::{AppError, AppResult};

/// Dense feature matrix, one row per catalog record
///
/// Row norms are computed once at construction so that a similarity query
/// only pays for the dot products.
#[derive(Debug, Clone)]
pub struct FeatureMatrix {
    rows: Vec<Vec<f32>>,
    norms: Vec<f32>,
    dimension: usize,
}

impl FeatureMatrix {
    /// Builds a matrix, rejecting ragged rows and non-finite values
    pub fn new(rows: Vec<Vec<f32>>) -> AppResult<Self> {
        let dimension = rows.first().map(Vec::len).unwrap_or(0);

        for (i, row) in rows.iter().enumerate() {
            if row.len() != dimension {
                return Err(AppError::Artifact(format!(
                    "feature row {} has dimension {}, expected {}",
                    i,
                    row.len(),
                    dimension
                )));
            }
            if let Some(value) = row.iter().find(|v| !v.is_finite()) {
                return Err(AppError::Artifact(format!(
                    "feature row {} contains non-finite value {}",
                    i, value
                )));
            }
        }

        let norms = rows
            .iter()
            .map(|row| row.iter().map(|v| v * v).sum::<f32>().sqrt())
            .collect();

        Ok(Self {
            rows,
            norms,
            dimension,
        })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Cosine similarity of row `index` against every row, in row order
    ///
    /// A zero-norm row scores 0.0 against everything, itself included.
    pub fn similarities(&self, index: usize) -> AppResult<Vec<f32>> {
        let seed = self.rows.get(index).ok_or_else(|| {
            AppError::Internal(format!(
                "feature row {} out of range ({} rows)",
                index,
                self.rows.len()
            ))
        })?;
        let seed_norm = self.norms[index];

        Ok(self
            .rows
            .iter()
            .zip(&self.norms)
            .map(|(row, &norm)| cosine(seed, seed_norm, row, norm))
            .collect())
    }
}

fn cosine(a: &[f32], a_norm: f32, b: &[f32], b_norm: f32) -> f32 {
    if a_norm == 0.0 || b_norm == 0.0 {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    (dot / (a_norm * b_norm)).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similarities_against_all_rows() {
        let matrix = FeatureMatrix::new(vec![
            vec![1.0, 0.0],
            vec![2.0, 0.0],
            vec![0.0, 3.0],
            vec![-1.0, 0.0],
        ])
        .unwrap();

        let scores = matrix.similarities(0).unwrap();
        assert_eq!(scores.len(), 4);
        assert!((scores[0] - 1.0).abs() < 1e-6);
        assert!((scores[1] - 1.0).abs() < 1e-6);
        assert!(scores[2].abs() < 1e-6);
        assert!((scores[3] + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_row_scores_zero() {
        let matrix = FeatureMatrix::new(vec![vec![0.0, 0.0], vec![1.0, 1.0]]).unwrap();
        assert_eq!(matrix.similarities(0).unwrap(), vec![0.0, 0.0]);
        assert_eq!(matrix.similarities(1).unwrap()[0], 0.0);
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let err = FeatureMatrix::new(vec![vec![1.0, 0.0], vec![1.0]]).unwrap_err();
        assert!(matches!(err, AppError::Artifact(_)));
    }

    #[test]
    fn test_rejects_non_finite_values() {
        let err = FeatureMatrix::new(vec![vec![f32::NAN, 0.0]]).unwrap_err();
        assert!(matches!(err, AppError::Artifact(_)));
    }

    #[test]
    fn test_out_of_range_row_is_internal_error() {
        let matrix = FeatureMatrix::new(vec![vec![1.0]]).unwrap();
        assert!(matches!(matrix.similarities(5), Err(AppError::Internal(_))));
    }
}
