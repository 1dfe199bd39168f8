mod language;
mod outcome;
mod request;

pub use language::{SupportedLanguageSet, QUICKTYPE_LANGUAGES};
pub use outcome::{GenerationOutcome, ProcessOutput};
pub use request::GenerationRequest;
