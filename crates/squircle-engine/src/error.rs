use thiserror::Error;

/// Failure reported by a host surface while it is read or written.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SurfaceError {
    /// The element left the host tree (or was reclaimed) before the operation ran.
    #[error("surface is detached from the host tree")]
    Detached,
    /// The host could not produce a box size for the element.
    #[error("surface has no measurable box")]
    Unmeasurable,
    /// The host refused the presentation write.
    #[error("surface rejected presentation: {0}")]
    Rejected(String),
}

/// Errors surfaced by [`Dispatcher`](crate::Dispatcher) operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SquircleError {
    /// `update` / `remove` on an element that has no registry entry.
    #[error("element is not managed")]
    NotManaged,
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// Errors from declarative configuration parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("unknown squircle attribute `{0}`")]
    UnknownKey(String),
    #[error("attribute `{key}` has non-numeric value `{value}`")]
    InvalidNumber { key: String, value: String },
    #[error("malformed attribute pair `{0}`")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_errors_convert_into_squircle_errors() {
        let err: SquircleError = SurfaceError::Detached.into();
        assert_eq!(err, SquircleError::Surface(SurfaceError::Detached));
        assert_eq!(err.to_string(), "surface is detached from the host tree");
    }

    #[test]
    fn config_error_messages_name_the_key() {
        let err = ConfigError::InvalidNumber { key: "radius".into(), value: "big".into() };
        assert_eq!(err.to_string(), "attribute `radius` has non-numeric value `big`");
    }
}
