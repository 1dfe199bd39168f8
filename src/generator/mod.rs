//! Invoking quicktype: its argument list, the process runner and locating the executable.

mod locate;
mod process;

use std::io;
use std::path::Path;

use crate::models::GenerationRequest;

pub use locate::{locate_generator, RESOURCES_DIR};
pub use process::QuicktypeProcess;

/// Default generator executable name
pub const DEFAULT_GENERATOR: &str = "quicktype";

/// Build the generator's argument list for `request`, reading JSON from `input`.
///
/// Arguments are passed to the process directly, so no shell quoting is applied.
/// An input path that is not valid UTF-8 is rejected rather than mangled.
pub fn generator_args(request: &GenerationRequest, input: &Path) -> io::Result<Vec<String>> {
    let input = input.to_str().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("path is not valid UTF-8: {}", input.display()),
        )
    })?;

    Ok(vec![
        "--telemetry".to_string(),
        "disable".to_string(),
        "--lang".to_string(),
        request.target_language.clone(),
        "--top-level".to_string(),
        request.top_level_name.clone(),
        input.to_string(),
    ])
}
