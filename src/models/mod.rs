// Graph payload models (wire format of the performance graph API)

mod graph;
mod line;
mod metric;
mod time_value;

pub use graph::{GlobalConfig, GraphData};
pub use line::Line;
pub use metric::{DsData, Metric};
pub use time_value::{TIME_TICK, TimeValue};
