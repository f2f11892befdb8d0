use garageql_store::StoreError;
use juniper::{graphql_value, FieldError};

/// Turns a store failure into a field error carrying a machine-readable
/// `code` extension.
pub(crate) fn field_error(err: StoreError) -> FieldError {
    use StoreError::{DuplicateId, IdsExhausted, Io, UnknownOwner, Validation, Yaml};
    let extensions = match &err {
        Validation { .. } => graphql_value!({ "code": "VALIDATION" }),
        UnknownOwner(_) => graphql_value!({ "code": "UNKNOWN_OWNER" }),
        IdsExhausted(_) => graphql_value!({ "code": "IDS_EXHAUSTED" }),
        DuplicateId { .. } | Yaml(_) | Io(_) => graphql_value!({ "code": "INTERNAL" }),
    };
    log::warn!("mutation failed: {}", err);
    FieldError::new(err, extensions)
}
