//! Dashboard building blocks: metric cards, the category table, inline SVG
//! charts, and the report export panel.

mod highlights;
pub use highlights::HeadlineCards;
pub use highlights::KpiRow;

mod table;
pub use table::CategoryTable;

mod charts;
pub use charts::{BarChart, ChartSeries, LineChart};

mod export;
pub use export::ReportExportPanel;
