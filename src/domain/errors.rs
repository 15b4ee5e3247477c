use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Failed to load orders: {0}")]
    Fetch(String),
    #[error("Order data access denied: {0}")]
    PermissionDenied(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Upstream phrases indicating the API credentials lack entitlement to order
/// data. Matched case-insensitively against the raw failure message.
const PERMISSION_DENIED_PHRASES: [&str; 2] = [
    "not approved to access the order object",
    "access denied for orders field",
];

/// Classify a raw fetch-failure message into the error taxonomy.
///
/// The upstream API reports entitlement problems only as free text, so this
/// is the one place the crate does heuristic string matching. Callers switch
/// on the returned variant; if the API ever grows a structured error code,
/// only this function changes.
pub fn classify_fetch_failure(message: String) -> DomainError {
    let lowered = message.to_lowercase();
    if PERMISSION_DENIED_PHRASES
        .iter()
        .any(|phrase| lowered.contains(phrase))
    {
        DomainError::PermissionDenied(message)
    } else {
        DomainError::Fetch(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unapproved_order_object_is_permission_denied() {
        let err = classify_fetch_failure(
            "This app is not approved to access the Order object.".to_string(),
        );
        assert!(matches!(err, DomainError::PermissionDenied(_)));
    }

    #[test]
    fn access_denied_for_orders_field_is_permission_denied() {
        let err = classify_fetch_failure("Access denied for orders field".to_string());
        assert!(matches!(err, DomainError::PermissionDenied(_)));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let err = classify_fetch_failure("ACCESS DENIED FOR ORDERS FIELD".to_string());
        assert!(matches!(err, DomainError::PermissionDenied(_)));
    }

    #[test]
    fn other_failures_stay_generic() {
        let err = classify_fetch_failure("HTTP 500 Internal Server Error".to_string());
        assert!(matches!(err, DomainError::Fetch(_)));
    }

    #[test]
    fn classification_preserves_the_raw_message() {
        let err = classify_fetch_failure("HTTP 502 Bad Gateway".to_string());
        match err {
            DomainError::Fetch(msg) => assert_eq!(msg, "HTTP 502 Bad Gateway"),
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
