use tonic::metadata::MetadataMap;

/// Metadata header carrying the API key on gRPC calls.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Validates the provided API key against the key configured at startup.
///
/// Returns `Ok(())` if the key matches. An empty configured key rejects every request.
#[allow(clippy::result_large_err)]
pub fn validate_api_key(provided_key: &str, expected_key: &str) -> Result<(), tonic::Status> {
    if expected_key.is_empty() {
        return Err(tonic::Status::internal("API_KEY not configured"));
    }

    if provided_key == expected_key {
        Ok(())
    } else {
        Err(tonic::Status::unauthenticated("Invalid API key"))
    }
}

/// Reads the `x-api-key` header from request metadata and validates it.
#[allow(clippy::result_large_err)]
pub fn check_metadata(metadata: &MetadataMap, expected_key: &str) -> Result<(), tonic::Status> {
    let api_key = metadata
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| tonic::Status::unauthenticated("Missing x-api-key header"))?;

    validate_api_key(api_key, expected_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::Code;

    #[test]
    fn matching_key_is_accepted() {
        assert!(validate_api_key("secret", "secret").is_ok());
    }

    #[test]
    fn wrong_key_is_unauthenticated() {
        let err = validate_api_key("guess", "secret").unwrap_err();
        assert_eq!(err.code(), Code::Unauthenticated);
    }

    #[test]
    fn unconfigured_key_is_internal_error() {
        let err = validate_api_key("anything", "").unwrap_err();
        assert_eq!(err.code(), Code::Internal);
    }

    #[test]
    fn missing_header_is_unauthenticated() {
        let metadata = MetadataMap::new();

        let err = check_metadata(&metadata, "secret").unwrap_err();
        assert_eq!(err.code(), Code::Unauthenticated);
        assert_eq!(err.message(), "Missing x-api-key header");
    }

    #[test]
    fn header_is_checked() {
        let mut metadata = MetadataMap::new();
        metadata.insert(API_KEY_HEADER, "secret".parse().unwrap());

        assert!(check_metadata(&metadata, "secret").is_ok());
    }
}
