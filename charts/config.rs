pub struct ChartConfig {
	pub axis_width: f64,
	pub bar_group_gap: f64,
	pub bottom_padding: f64,
	pub font_size: f64,
	pub height: f64,
	pub label_padding: f64,
	pub left_padding: f64,
	pub line_width: f64,
	pub pie_size: f64,
	pub point_radius: f64,
	pub right_padding: f64,
	pub top_padding: f64,
	pub width: f64,
}

pub const CHART_CONFIG: ChartConfig = ChartConfig {
	axis_width: 2.0,
	bar_group_gap: 0.2,
	bottom_padding: 8.0,
	font_size: 12.0,
	height: 360.0,
	label_padding: 8.0,
	left_padding: 8.0,
	line_width: 2.0,
	pie_size: 320.0,
	point_radius: 4.0,
	right_padding: 8.0,
	top_padding: 24.0,
	width: 640.0,
};

pub struct ChartColors {
	pub axis_color: &'static str,
	pub empty_color: &'static str,
	pub grid_line_color: &'static str,
	pub label_color: &'static str,
	pub slice_border_color: &'static str,
	pub slice_label_color: &'static str,
}

pub const CHART_COLORS: ChartColors = ChartColors {
	axis_color: "#bbbbbb",
	empty_color: "#eeeeee",
	grid_line_color: "#eeeeee",
	label_color: "#666666",
	slice_border_color: "#ffffff",
	slice_label_color: "#ffffff",
};
