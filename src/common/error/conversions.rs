//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from internal
//! error types that have no dedicated variant in the unified Error type.

use super::types::Error;

impl From<crate::ooxml::opc::error::OpcError> for Error {
    fn from(err: crate::ooxml::opc::error::OpcError) -> Self {
        Error::Ooxml(crate::ooxml::error::OoxmlError::Opc(err))
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        match err.into_io_error() {
            Some(io) => Error::Io(io),
            None => Error::Io(std::io::Error::other("filesystem loop detected")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutError;

    #[test]
    fn test_layout_error_display_is_preserved() {
        let err: Error = LayoutError::TooManyImages { count: 9, max: 8 }.into();
        assert!(matches!(err, Error::Layout(_)));
        assert_eq!(
            err.to_string(),
            LayoutError::TooManyImages { count: 9, max: 8 }.to_string()
        );
    }

    #[test]
    fn test_opc_error_wraps_into_ooxml() {
        let err: Error = crate::ooxml::opc::error::OpcError::PartNotFound("/x".into()).into();
        assert!(matches!(err, Error::Ooxml(_)));
    }
}
