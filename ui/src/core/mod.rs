//! Pure, platform-agnostic logic: topic profiles, the career analysis
//! composer, the sample news dataset, and formatting helpers.

pub mod composer;
pub mod format;
pub mod profiles;
pub mod samples;
