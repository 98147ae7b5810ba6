//! Receipt scan domain module.
//!
//! # Module Structure
//!
//! - `model`: `UploadedImage` and `ScannedIngredient`
//! - `scanner`: the idle/scanning/reviewing state machine (`ReceiptScanner`)
//! - `recognizer`: the recognition capability (`ReceiptRecognizer`)

mod model;
mod recognizer;
mod scanner;

pub use model::{ScannedIngredient, UploadedImage};
pub use recognizer::ReceiptRecognizer;
pub use scanner::{ReceiptScanner, ScanPhase, ScanState};
