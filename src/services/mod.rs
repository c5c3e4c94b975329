pub mod decoder;
pub mod report;
pub mod scanner;

pub use decoder::{decode_file, DecodedImage};
pub use report::ReportWriter;
pub use scanner::{is_candidate, ScanOutcome, Scanner};
