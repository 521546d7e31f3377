//! Shape checks run before a cleaned matrix leaves the system.

use rasch_model::CleanedMatrix;
use serde::Serialize;

use crate::error::{OutputError, Result};

/// Dimensions of a matrix that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatrixShape {
    pub respondents: usize,
    pub items: usize,
}

/// Rejects empty, zero-width and ragged matrices.
pub fn validate_cleaned(matrix: &CleanedMatrix) -> Result<MatrixShape> {
    if matrix.is_empty() {
        return Err(OutputError::EmptyMatrix);
    }
    let expected = matrix.width();
    if expected == 0 {
        return Err(OutputError::NoItemColumns);
    }
    if let Some((idx, row)) = matrix
        .rows()
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() != expected)
    {
        return Err(OutputError::RaggedRow {
            row: idx + 1,
            len: row.len(),
            expected,
        });
    }
    Ok(MatrixShape {
        respondents: matrix.height(),
        items: expected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasch_model::Response;

    #[test]
    fn accepts_rectangular_matrix() {
        let matrix = CleanedMatrix::new(vec![
            vec![Response::Correct, Response::Missing],
            vec![Response::Incorrect, Response::Correct],
        ]);
        assert_eq!(
            validate_cleaned(&matrix).unwrap(),
            MatrixShape {
                respondents: 2,
                items: 2
            }
        );
    }

    #[test]
    fn rejects_empty_matrix() {
        let err = validate_cleaned(&CleanedMatrix::default()).unwrap_err();
        assert!(matches!(err, OutputError::EmptyMatrix));
        assert_eq!(err.to_string(), "matrix empty after cleaning");
    }

    #[test]
    fn rejects_zero_width() {
        let matrix = CleanedMatrix::new(vec![vec![]]);
        let err = validate_cleaned(&matrix).unwrap_err();
        assert!(matches!(err, OutputError::NoItemColumns));
    }

    #[test]
    fn rejects_ragged_rows() {
        let matrix = CleanedMatrix::new(vec![
            vec![Response::Correct, Response::Correct],
            vec![Response::Correct, Response::Correct],
            vec![Response::Correct],
        ]);
        let err = validate_cleaned(&matrix).unwrap_err();
        assert!(matches!(
            err,
            OutputError::RaggedRow {
                row: 3,
                len: 1,
                expected: 2
            }
        ));
    }
}
