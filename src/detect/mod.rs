pub mod interface;
pub mod whatlang_detector;

pub use interface::LanguageDetector;
pub use whatlang_detector::WhatlangDetector;
