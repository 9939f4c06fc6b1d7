use std::fmt;

/// Encoding and decoding errors.
///
/// Loads and stores themselves cannot fail; errors come from the reader or writer, from parsing,
/// or from bytes that do not name a valid enum variant.
pub struct Error {
    message: String,
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl Error {
    /// Creates a new `Error` with the given message.
    pub fn new<S>(message: S) -> Self
    where
        S: ToString,
    {
        Self {
            message: message.to_string(),
            source: None,
        }
    }

    /// Creates a new `Error` with the given error value as the source.
    pub fn wrap<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            message: error.to_string(),
            source: Some(Box::new(error)),
        }
    }

    /// Creates a new `Error` with a custom message and a source error value.
    pub fn with_context<S, E>(message: S, error: E) -> Self
    where
        S: ToString,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            message: message.to_string(),
            source: Some(Box::new(error)),
        }
    }

    /// Creates the error for a stored discriminant that matches no variant of `type_name`.
    pub fn unknown_discriminant<D>(type_name: &str, discriminant: D) -> Self
    where
        D: fmt::Display,
    {
        Self::new(format!(
            "unknown discriminant for {}: {}",
            type_name, discriminant
        ))
    }

    /// The message of this error, without its sources.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // defer to Display
        write!(f, "{}", self)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(source) = &self.source {
            if source.to_string() != self.message {
                write!(f, ": {}", source)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn std::error::Error + 'static))
    }
}

macro_rules! convert_error {
    ($($t:ty,)*) => {$(
        impl From<$t> for Error {
            fn from(error: $t) -> Self {
                Self::wrap(error)
            }
        }
    )*}
}

convert_error! {
    std::io::Error,
    std::num::TryFromIntError,
}
