mod home;
pub use home::Home;

mod data;
pub use data::Data;

mod analytics;
pub use analytics::Analytics;

mod analysis;
pub use analysis::Analysis;

mod about;
pub use about::About;
