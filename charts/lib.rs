/*!
This crate draws the dashboard's charts. Charts are rendered on the server to inline svg, so they are visible without any client side scripting. Hovering a bar, point, or slice shows its native svg tooltip.
*/

pub mod bar_chart;
pub mod common;
pub mod components;
mod config;
pub mod line_chart;
pub mod pie_chart;
