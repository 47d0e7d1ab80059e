use crate::config::{CHART_COLORS, CHART_CONFIG};
use html::{html, Node};
use num_traits::ToPrimitive;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartBox {
	pub h: f64,
	pub w: f64,
	pub x: f64,
	pub y: f64,
}

// The interval is k * 10 ** p. k will always be 1, 2, or 5.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLineInterval {
	pub k: f64,
	pub p: i32,
}

impl GridLineInterval {
	pub fn value(&self) -> f64 {
		self.k * 10.0f64.powi(self.p)
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLineInfo {
	pub interval: f64,
	pub num_grid_lines: usize,
	pub start: f64,
}

pub struct ComputeBoxesOptions {
	pub height: f64,
	pub include_x_axis_labels: bool,
	pub include_x_axis_title: bool,
	pub include_y_axis_labels: bool,
	pub include_y_axis_title: bool,
	pub width: f64,
	pub y_axis_grid_line_interval: Option<GridLineInterval>,
	pub y_max: f64,
	pub y_min: f64,
}

pub struct ComputeBoxesOutput {
	pub chart_box: ChartBox,
	pub x_axis_labels_box: ChartBox,
	pub x_axis_title_box: ChartBox,
	pub y_axis_grid_line_info: GridLineInfo,
	pub y_axis_labels_box: ChartBox,
	pub y_axis_title_box: ChartBox,
}

pub fn compute_boxes(options: ComputeBoxesOptions) -> ComputeBoxesOutput {
	let ComputeBoxesOptions {
		height,
		include_x_axis_labels,
		include_x_axis_title,
		include_y_axis_labels,
		include_y_axis_title,
		width,
		y_axis_grid_line_interval,
		y_max,
		y_min,
	} = options;
	let font_size = CHART_CONFIG.font_size;
	let label_padding = CHART_CONFIG.label_padding;

	let x_axis_labels_padding = if include_x_axis_labels {
		label_padding + font_size
	} else {
		0.0
	};
	let x_axis_title_padding = if include_x_axis_title {
		label_padding + font_size
	} else {
		0.0
	};
	let chart_height = height
		- (CHART_CONFIG.top_padding
			+ x_axis_labels_padding
			+ x_axis_title_padding
			+ CHART_CONFIG.bottom_padding);

	let y_axis_grid_line_interval = y_axis_grid_line_interval.unwrap_or_else(|| {
		compute_grid_line_interval(y_min, y_max, chart_height, font_size * 3.0)
	});
	let y_axis_grid_line_info = compute_grid_line_info(y_min, y_max, y_axis_grid_line_interval);
	let y_axis_labels_width = compute_axis_labels_max_width(y_axis_grid_line_info);

	let y_axis_title_padding = if include_y_axis_title {
		font_size + label_padding
	} else {
		0.0
	};
	let y_axis_labels_padding = if include_y_axis_labels {
		y_axis_labels_width + label_padding
	} else {
		0.0
	};
	let chart_width = width
		- (CHART_CONFIG.left_padding
			+ y_axis_title_padding
			+ y_axis_labels_padding
			+ CHART_CONFIG.right_padding);

	let chart_box = ChartBox {
		h: chart_height,
		w: chart_width,
		x: CHART_CONFIG.left_padding + y_axis_title_padding + y_axis_labels_padding,
		y: CHART_CONFIG.top_padding,
	};
	let x_axis_labels_box = ChartBox {
		h: if include_x_axis_labels { font_size } else { 0.0 },
		w: chart_width,
		x: chart_box.x,
		y: chart_box.y + chart_height + if include_x_axis_labels { label_padding } else { 0.0 },
	};
	let x_axis_title_box = ChartBox {
		h: if include_x_axis_title { font_size } else { 0.0 },
		w: chart_width,
		x: chart_box.x,
		y: chart_box.y
			+ chart_height
			+ x_axis_labels_padding
			+ if include_x_axis_title { label_padding } else { 0.0 },
	};
	let y_axis_title_box = ChartBox {
		h: chart_height,
		w: font_size,
		x: CHART_CONFIG.left_padding,
		y: CHART_CONFIG.top_padding,
	};
	let y_axis_labels_box = ChartBox {
		h: chart_height,
		w: y_axis_labels_width,
		x: CHART_CONFIG.left_padding + y_axis_title_padding,
		y: CHART_CONFIG.top_padding,
	};
	ComputeBoxesOutput {
		chart_box,
		x_axis_labels_box,
		x_axis_title_box,
		y_axis_grid_line_info,
		y_axis_labels_box,
		y_axis_title_box,
	}
}

/// Choose the smallest interval of the form k * 10 ** p that keeps grid lines at least `min_spacing` pixels apart.
pub fn compute_grid_line_interval(
	min: f64,
	max: f64,
	distance: f64,
	min_spacing: f64,
) -> GridLineInterval {
	let range = max - min;
	let ideal_n = (distance / min_spacing).floor().max(1.0);
	let ideal_interval = range / ideal_n;
	let p = ideal_interval.log10().floor();
	let mantissa = ideal_interval / 10.0f64.powf(p);
	let p = p.to_i32().unwrap_or(0);
	if mantissa <= 1.0 {
		GridLineInterval { k: 1.0, p }
	} else if mantissa <= 2.0 {
		GridLineInterval { k: 2.0, p }
	} else if mantissa <= 5.0 {
		GridLineInterval { k: 5.0, p }
	} else {
		GridLineInterval { k: 1.0, p: p + 1 }
	}
}

pub fn compute_grid_line_info(min: f64, max: f64, interval: GridLineInterval) -> GridLineInfo {
	let interval = interval.value();
	let start = (min / interval).ceil() * interval;
	let num_grid_lines = ((max - start) / interval + 1e-9)
		.floor()
		.max(0.0)
		.to_usize()
		.unwrap_or(0)
		+ 1;
	GridLineInfo {
		interval,
		num_grid_lines,
		start,
	}
}

pub fn grid_line_values(info: GridLineInfo) -> impl Iterator<Item = f64> {
	(0..info.num_grid_lines).map(move |index| info.start + index.to_f64().unwrap_or(0.0) * info.interval)
}

fn compute_axis_labels_max_width(info: GridLineInfo) -> f64 {
	grid_line_values(info)
		.map(|value| text_width(&format_number(value)))
		.fold(0.0, f64::max)
}

/// Estimate the rendered width of a label, since the server cannot measure text.
pub fn text_width(text: &str) -> f64 {
	text.chars().count().to_f64().unwrap_or(0.0) * CHART_CONFIG.font_size * 0.6
}

/// Format a number with at most six decimal places and no trailing zeros.
pub fn format_number(value: f64) -> String {
	if value == 0.0 {
		return "0".to_owned();
	}
	let formatted = format!("{:.6}", value);
	if formatted.contains('.') {
		formatted
			.trim_end_matches('0')
			.trim_end_matches('.')
			.to_owned()
	} else {
		formatted
	}
}

/// Format an svg coordinate.
pub fn coordinate(value: f64) -> String {
	format!("{:.2}", value)
}

/// Compute the y bounds of a chart from the values it draws, always including zero.
pub fn compute_y_bounds(
	values: impl Iterator<Item = f64>,
	y_min: Option<f64>,
	y_max: Option<f64>,
) -> (f64, f64) {
	let values: Vec<f64> = values.filter(|value| value.is_finite()).collect();
	let y_min = y_min.unwrap_or_else(|| values.iter().cloned().fold(0.0, f64::min));
	let mut y_max = y_max.unwrap_or_else(|| values.iter().cloned().fold(0.0, f64::max));
	if y_max <= y_min {
		y_max = y_min + 1.0;
	}
	(y_min, y_max)
}

pub fn y_to_pixels(chart_box: ChartBox, y: f64, y_min: f64, y_max: f64) -> f64 {
	chart_box.y + chart_box.h - (y - y_min) / (y_max - y_min) * chart_box.h
}

pub fn draw_y_axis_grid_lines(
	chart_box: ChartBox,
	info: GridLineInfo,
	y_min: f64,
	y_max: f64,
) -> Node {
	grid_line_values(info)
		.map(|value| {
			let y = coordinate(y_to_pixels(chart_box, value, y_min, y_max));
			html! {
				<line
					stroke={CHART_COLORS.grid_line_color}
					x1={coordinate(chart_box.x)}
					x2={coordinate(chart_box.x + chart_box.w)}
					y1={y.clone()}
					y2={y}
				/>
			}
		})
		.collect::<Vec<_>>()
		.into()
}

pub fn draw_y_axis_labels(
	labels_box: ChartBox,
	chart_box: ChartBox,
	info: GridLineInfo,
	y_min: f64,
	y_max: f64,
) -> Node {
	grid_line_values(info)
		.map(|value| {
			html! {
				<text
					dominant-baseline="middle"
					fill={CHART_COLORS.label_color}
					font-size={format_number(CHART_CONFIG.font_size)}
					text-anchor="end"
					x={coordinate(labels_box.x + labels_box.w)}
					y={coordinate(y_to_pixels(chart_box, value, y_min, y_max))}
				>
					{format_number(value)}
				</text>
			}
		})
		.collect::<Vec<_>>()
		.into()
}

/// Draw one label centered below each `(x, label)` pair.
pub fn draw_x_axis_labels(labels_box: ChartBox, labels: Vec<(f64, String)>) -> Node {
	labels
		.into_iter()
		.map(|(x, label)| {
			html! {
				<text
					dominant-baseline="hanging"
					fill={CHART_COLORS.label_color}
					font-size={format_number(CHART_CONFIG.font_size)}
					text-anchor="middle"
					x={coordinate(x)}
					y={coordinate(labels_box.y)}
				>
					{label}
				</text>
			}
		})
		.collect::<Vec<_>>()
		.into()
}

pub fn draw_axes(chart_box: ChartBox) -> Node {
	let bottom = coordinate(chart_box.y + chart_box.h);
	html! {
		<g stroke={CHART_COLORS.axis_color} stroke-width={format_number(CHART_CONFIG.axis_width)}>
			<line
				x1={coordinate(chart_box.x)}
				x2={coordinate(chart_box.x + chart_box.w)}
				y1={bottom.clone()}
				y2={bottom.clone()}
			/>
			<line
				x1={coordinate(chart_box.x)}
				x2={coordinate(chart_box.x)}
				y1={coordinate(chart_box.y)}
				y2={bottom}
			/>
		</g>
	}
}

pub fn draw_x_axis_title(title_box: ChartBox, title: Option<String>) -> Node {
	title
		.map(|title| {
			html! {
				<text
					dominant-baseline="hanging"
					font-size={format_number(CHART_CONFIG.font_size)}
					text-anchor="middle"
					x={coordinate(title_box.x + title_box.w / 2.0)}
					y={coordinate(title_box.y)}
				>
					{title}
				</text>
			}
		})
		.into()
}

pub fn draw_y_axis_title(title_box: ChartBox, title: Option<String>) -> Node {
	title
		.map(|title| {
			let x = title_box.x + title_box.w / 2.0;
			let y = title_box.y + title_box.h / 2.0;
			html! {
				<text
					dominant-baseline="middle"
					font-size={format_number(CHART_CONFIG.font_size)}
					text-anchor="middle"
					transform={format!("rotate(-90 {} {})", coordinate(x), coordinate(y))}
					x={coordinate(x)}
					y={coordinate(y)}
				>
					{title}
				</text>
			}
		})
		.into()
}

/// The root svg element that every chart draws into.
pub fn draw_svg(width: f64, height: f64, label: Option<String>, children: Vec<Node>) -> Node {
	html! {
		<svg
			aria-label={label}
			class="chart"
			role="img"
			viewBox={format!("0 0 {} {}", format_number(width), format_number(height))}
			xmlns="http://www.w3.org/2000/svg"
		>
			{children}
		</svg>
	}
}

#[test]
fn test_grid_line_interval() {
	let interval = compute_grid_line_interval(0.0, 1.0, 264.0, 36.0);
	assert_eq!(interval, GridLineInterval { k: 2.0, p: -1 });
	let info = compute_grid_line_info(0.0, 1.0, interval);
	assert_eq!(info.num_grid_lines, 6);
	let labels: Vec<String> = grid_line_values(info).map(format_number).collect();
	assert_eq!(labels, vec!["0", "0.2", "0.4", "0.6", "0.8", "1"]);
	let interval = compute_grid_line_interval(0.0, 120.0, 264.0, 36.0);
	assert_eq!(interval, GridLineInterval { k: 2.0, p: 1 });
	let interval = compute_grid_line_interval(0.0, 7.0, 264.0, 36.0);
	assert_eq!(interval, GridLineInterval { k: 1.0, p: 0 });
}

#[test]
fn test_format_number() {
	assert_eq!(format_number(12.0), "12");
	assert_eq!(format_number(0.6000000000000001), "0.6");
	assert_eq!(format_number(-0.0), "0");
	assert_eq!(format_number(2.5), "2.5");
}

#[test]
fn test_y_bounds() {
	assert_eq!(compute_y_bounds(vec![3.0, 12.0].into_iter(), None, None), (0.0, 12.0));
	assert_eq!(compute_y_bounds(vec![0.82].into_iter(), Some(0.0), Some(1.0)), (0.0, 1.0));
	assert_eq!(compute_y_bounds(std::iter::empty(), None, None), (0.0, 1.0));
}
