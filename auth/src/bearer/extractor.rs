use super::errors::BearerError;

/// Authentication scheme accepted in the `Authorization` header.
pub const BEARER_SCHEME: &str = "Bearer";

/// Whether a request carries credentials at all.
///
/// Only presence matters here; a malformed header is still "supported" and
/// fails later in [`extract`].
pub fn supports(authorization: Option<&str>) -> bool {
    authorization.is_some()
}

/// Extract the bearer token from an `Authorization` header value.
///
/// The value must split on single spaces into exactly `Bearer` and the
/// token. The token is returned verbatim.
///
/// # Errors
/// * `MissingHeader` - No header value
/// * `MalformedHeader` - Wrong scheme or wrong number of parts
pub fn extract(authorization: Option<&str>) -> Result<&str, BearerError> {
    let authorization = authorization.ok_or(BearerError::MissingHeader)?;

    match authorization.split(' ').collect::<Vec<_>>().as_slice() {
        [scheme, token] if *scheme == BEARER_SCHEME => Ok(*token),
        _ => Err(BearerError::MalformedHeader),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supports_checks_presence_only() {
        assert!(supports(Some("Bearer token")));
        assert!(supports(Some("garbage")));
        assert!(!supports(None));
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract(Some("Bearer abc.def.ghi")), Ok("abc.def.ghi"));
    }

    #[test]
    fn test_extract_empty_token_is_left_to_decoding() {
        assert_eq!(extract(Some("Bearer ")), Ok(""));
    }

    #[test]
    fn test_extract_missing_header() {
        assert_eq!(extract(None), Err(BearerError::MissingHeader));
    }

    #[test]
    fn test_extract_wrong_scheme() {
        assert_eq!(extract(Some("Basic xyz")), Err(BearerError::MalformedHeader));
        assert_eq!(extract(Some("bearer xyz")), Err(BearerError::MalformedHeader));
    }

    #[test]
    fn test_extract_wrong_number_of_parts() {
        assert_eq!(extract(Some("Bearer a b")), Err(BearerError::MalformedHeader));
        assert_eq!(extract(Some("Bearer")), Err(BearerError::MalformedHeader));
        assert_eq!(
            extract(Some("Bearer  double-space")),
            Err(BearerError::MalformedHeader)
        );
    }
}
