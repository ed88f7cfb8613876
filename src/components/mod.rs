pub mod charts;
pub mod metric_tile;
pub mod panel;
pub mod pill;
pub mod status_dot;

pub use metric_tile::MetricRow;
pub use panel::Panel;
pub use pill::Pill;
pub use status_dot::StatusDot;
