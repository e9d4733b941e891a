//! Graphics error types.

use thiserror::Error;

use crate::shader::ShaderStage;

/// Errors that can occur in the graphics layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphicsError {
    /// A shader stage failed to compile. `log` is the driver's info log.
    #[error("{stage} shader compilation failed: {log}")]
    ShaderCompilation {
        /// Stage that failed.
        stage: ShaderStage,
        /// Driver info log.
        log: String,
    },
    /// The program failed to link. Carries the driver's info log.
    #[error("program link failed: {0}")]
    ProgramLink(String),
    /// Failed to create a GL object.
    #[error("resource creation failed: {0}")]
    ResourceCreationFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GraphicsError::ShaderCompilation {
            stage: ShaderStage::Fragment,
            log: "0:3: syntax error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "fragment shader compilation failed: 0:3: syntax error"
        );

        let err = GraphicsError::ProgramLink("undefined varying".to_string());
        assert_eq!(err.to_string(), "program link failed: undefined varying");
    }
}
