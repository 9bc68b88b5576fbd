//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service/repository error types, so the
//! conversions from [`TypeConstraintError`] live here.

use crate::domain::types::TypeConstraintError;
use crate::repository::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(feature = "server")]
mod server {
    use crate::forms::listings::CreateListingFormError;
    use crate::services::ServiceError;

    impl From<CreateListingFormError> for ServiceError {
        fn from(val: CreateListingFormError) -> Self {
            ServiceError::Form(val.to_string())
        }
    }
}
