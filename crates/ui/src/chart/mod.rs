//! Drawdown line chart: fixed axes, nice tick marks, and a hover readout.

mod drawing;
mod frame;

pub(crate) use drawing::draw_drawdown_chart;
