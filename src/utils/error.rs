use crate::utils::output::OutputStyle;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("System error: {0}")]
    System(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

pub fn report_error(err: &AppError) {
    match err {
        AppError::ModelUnavailable(_) => {
            eprintln!(
                "❌ {}",
                OutputStyle::error("Sorry, there was a problem calculating your bedtime.")
            );
        }
        AppError::InvalidInput(msg) => {
            println!("⚠️  {}", OutputStyle::warning(msg));
        }
        AppError::Io(e) => {
            eprintln!("❌ {}", OutputStyle::error(e));
        }
        AppError::System(msg) => {
            eprintln!("❌ {}", OutputStyle::error(msg));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::ModelUnavailable("artifact missing".to_string());
        assert_eq!(err.to_string(), "Model unavailable: artifact missing");

        let err = AppError::InvalidInput("sleep amount out of range".to_string());
        assert_eq!(err.to_string(), "Invalid input: sleep amount out of range");
    }
}
