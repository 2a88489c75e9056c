use std::error::Error;
use std::fmt::{Display, Formatter};

pub type AbundanceResult<T> = Result<T, AbundanceError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbundanceErrorKind {
    UnknownIdentifier,
    ShapeMismatch,
    UnsupportedOperation,
    InvalidOption,
    Io,
}

impl AbundanceErrorKind {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::UnknownIdentifier => 2,
            Self::ShapeMismatch => 3,
            Self::UnsupportedOperation => 4,
            Self::InvalidOption => 5,
            Self::Io => 6,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::UnknownIdentifier => "UnknownIdentifierError",
            Self::ShapeMismatch => "ShapeMismatchError",
            Self::UnsupportedOperation => "UnsupportedOperationError",
            Self::InvalidOption => "InvalidOptionError",
            Self::Io => "IoError",
        }
    }
}

/// Failure of a lookup or computation, tagged with a stable placeholder
/// (e.g. `INPUT.UNKNOWN_ISOTOPE`) that scripts can match on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbundanceError {
    kind: AbundanceErrorKind,
    placeholder: &'static str,
    message: String,
}

impl AbundanceError {
    pub fn new(
        kind: AbundanceErrorKind,
        placeholder: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            placeholder,
            message: message.into(),
        }
    }

    pub fn unknown_identifier(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(AbundanceErrorKind::UnknownIdentifier, placeholder, message)
    }

    pub fn shape_mismatch(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(AbundanceErrorKind::ShapeMismatch, placeholder, message)
    }

    pub fn unsupported_operation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(AbundanceErrorKind::UnsupportedOperation, placeholder, message)
    }

    pub fn invalid_option(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(AbundanceErrorKind::InvalidOption, placeholder, message)
    }

    pub fn io(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(AbundanceErrorKind::Io, placeholder, message)
    }

    pub const fn kind(&self) -> AbundanceErrorKind {
        self.kind
    }

    pub const fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.kind.exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        format!("ERROR: [{}] {}", self.placeholder, self.message)
    }
}

impl Display for AbundanceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            self.kind.name(),
            self.placeholder,
            self.message
        )
    }
}

impl Error for AbundanceError {}

#[cfg(test)]
mod tests {
    use super::{AbundanceError, AbundanceErrorKind};

    #[test]
    fn exit_mapping_is_stable() {
        let cases = [
            (AbundanceErrorKind::UnknownIdentifier, 2, "UnknownIdentifierError"),
            (AbundanceErrorKind::ShapeMismatch, 3, "ShapeMismatchError"),
            (
                AbundanceErrorKind::UnsupportedOperation,
                4,
                "UnsupportedOperationError",
            ),
            (AbundanceErrorKind::InvalidOption, 5, "InvalidOptionError"),
            (AbundanceErrorKind::Io, 6, "IoError"),
        ];

        for (kind, exit_code, name) in cases {
            assert_eq!(kind.exit_code(), exit_code);
            assert_eq!(kind.name(), name);
        }
    }

    #[test]
    fn error_renders_diagnostic_and_display_lines() {
        let error = AbundanceError::unknown_identifier(
            "INPUT.UNKNOWN_ISOTOPE",
            "isotope 'Xx-999' is not in database 'lodders09'",
        );

        assert_eq!(error.exit_code(), 2);
        assert_eq!(
            error.diagnostic_line(),
            "ERROR: [INPUT.UNKNOWN_ISOTOPE] isotope 'Xx-999' is not in database 'lodders09'"
        );
        assert_eq!(
            error.to_string(),
            "UnknownIdentifierError [INPUT.UNKNOWN_ISOTOPE] isotope 'Xx-999' is not in database 'lodders09'"
        );
    }
}
