//! The career analysis experience: form wiring around the pure composer.

mod form;
pub use form::AnalysisForm;
