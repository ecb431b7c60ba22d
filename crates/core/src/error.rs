use thiserror::Error;

use crate::model::{CatalogError, QuizError};
use crate::tour::TourError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Tour(#[from] TourError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuizChoice;

    #[test]
    fn domain_errors_convert_into_crate_error() {
        let err: Error = QuizChoice::new(7).unwrap_err().into();
        assert!(matches!(err, Error::Quiz(_)));

        let err: Error = TourError::NoSelection.into();
        assert_eq!(err.to_string(), "no quiz option selected");
    }
}
