//! Chart adapters.

mod plotters_renderer;

pub use plotters_renderer::{
    PlottersChartRenderer, CHART_TITLE, DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, X_AXIS_LABEL,
    Y_AXIS_LABEL,
};
