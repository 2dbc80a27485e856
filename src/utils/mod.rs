pub mod error;
pub mod output;
pub mod time_format;

pub use error::{report_error, AppError, AppResult};
pub use output::{print_success, print_warning, OutputStyle};
