use crate::domain::{
    entities::{QrMatrix, RenderOptions},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across callers.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_render_options(options: &RenderOptions) -> Result<(), DomainError> {
        options.validate()
    }

    /// The options must produce a bounded raster for this matrix.
    pub fn validate_geometry(matrix: &QrMatrix, options: &RenderOptions) -> Result<(), DomainError> {
        options.validate_for_size(matrix.size())
    }

    /// A matrix must be a real QR size: 21..=177 modules, stepping by 4.
    pub fn validate_matrix(matrix: &QrMatrix) -> Result<(), DomainError> {
        let size = matrix.size();
        if !(21..=177).contains(&size) || (size - 17) % 4 != 0 {
            return Err(DomainError::InvalidDimension {
                field: "matrix size",
                reason: format!("{size} is not a valid QR symbol size"),
            });
        }
        Ok(())
    }
}
