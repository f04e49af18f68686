/// An option carried a value of the wrong type, so the field cannot be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationTypeError {
    /// JSON pointer of the offending option, e.g. `/index`. Empty for the document root.
    pub pointer: String,
    pub message: String,
}

impl ConfigurationTypeError {
    pub(crate) fn new(pointer: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            pointer: pointer.into(),
            message: message.into(),
        }
    }

    /// Name of the offending option, without the leading slash.
    pub fn option(&self) -> &str {
        self.pointer.trim_start_matches('/')
    }
}

impl std::fmt::Display for ConfigurationTypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pointer = if self.pointer.is_empty() {
            "<root>"
        } else {
            self.pointer.as_str()
        };
        write!(f, "{}: {}", pointer, self.message)
    }
}

impl std::error::Error for ConfigurationTypeError {}
