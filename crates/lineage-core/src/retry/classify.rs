//! HTTP status classification for retry decisions

/// Request timeout, too early, rate limiting and every server error
pub fn is_transient_status(code: u16) -> bool {
    matches!(code, 408 | 425 | 429 | 500..=599)
}

/// Errors that may carry an HTTP status code
pub trait HttpStatusError {
    /// Status code of the response, if one was received
    fn status_code(&self) -> Option<u16>;

    /// Whether repeating the request could succeed
    ///
    /// Errors without a status (connection failures, timeouts) count as
    /// transient.
    fn is_transient(&self) -> bool {
        self.status_code().is_none_or(is_transient_status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StatusErr(Option<u16>);

    impl HttpStatusError for StatusErr {
        fn status_code(&self) -> Option<u16> {
            self.0
        }
    }

    #[test]
    fn test_transient_statuses() {
        for code in [408, 425, 429, 500, 502, 503, 599] {
            assert!(is_transient_status(code), "{} should be transient", code);
        }
        for code in [200, 400, 401, 403, 404, 410, 422] {
            assert!(!is_transient_status(code), "{} should be final", code);
        }
    }

    #[test]
    fn test_missing_status_is_transient() {
        assert!(StatusErr(None).is_transient());
        assert!(StatusErr(Some(503)).is_transient());
        assert!(!StatusErr(Some(404)).is_transient());
    }
}
