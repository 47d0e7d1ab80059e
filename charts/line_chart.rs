use crate::{
	common::{
		compute_boxes, compute_y_bounds, coordinate, draw_axes, draw_svg, draw_x_axis_labels,
		draw_x_axis_title, draw_y_axis_grid_lines, draw_y_axis_labels, draw_y_axis_title,
		format_number, y_to_pixels, ChartBox, ComputeBoxesOptions, ComputeBoxesOutput,
		GridLineInterval, Point,
	},
	config::CHART_CONFIG,
};
use html::{html, Node};
use num_traits::ToPrimitive;

#[derive(Clone)]
pub struct LineChartOptions {
	/// The labels of the categorical x axis. The x of each point is an index into these labels.
	pub labels: Vec<String>,
	pub series: Vec<LineChartSeries>,
	pub should_draw_x_axis_labels: Option<bool>,
	pub should_draw_y_axis_labels: Option<bool>,
	pub x_axis_title: Option<String>,
	pub y_axis_grid_line_interval: Option<GridLineInterval>,
	pub y_axis_title: Option<String>,
	pub y_max: Option<f64>,
	pub y_min: Option<f64>,
}

#[derive(Clone)]
pub struct LineChartSeries {
	pub color: String,
	pub data: Vec<LineChartPoint>,
	pub line_style: Option<LineStyle>,
	pub point_style: Option<PointStyle>,
	pub title: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineChartPoint {
	pub x: f64,
	pub y: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineStyle {
	Hidden,
	Solid,
	Dashed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointStyle {
	Hidden,
	Circle,
}

fn x_to_pixels(chart_box: ChartBox, x: f64, n_labels: usize) -> f64 {
	let slot_width = chart_box.w / n_labels.max(1).to_f64().unwrap_or(1.0);
	chart_box.x + (x + 0.5) * slot_width
}

pub fn draw_line_chart(options: LineChartOptions) -> Node {
	let LineChartOptions {
		labels,
		series,
		should_draw_x_axis_labels,
		should_draw_y_axis_labels,
		x_axis_title,
		y_axis_grid_line_interval,
		y_axis_title,
		y_max,
		y_min,
	} = options;
	let should_draw_x_axis_labels = should_draw_x_axis_labels.unwrap_or(true);
	let should_draw_y_axis_labels = should_draw_y_axis_labels.unwrap_or(true);
	let (y_min, y_max) = compute_y_bounds(
		series
			.iter()
			.flat_map(|series| series.data.iter().filter_map(|point| point.y)),
		y_min,
		y_max,
	);
	let ComputeBoxesOutput {
		chart_box,
		x_axis_labels_box,
		x_axis_title_box,
		y_axis_grid_line_info,
		y_axis_labels_box,
		y_axis_title_box,
	} = compute_boxes(ComputeBoxesOptions {
		height: CHART_CONFIG.height,
		include_x_axis_labels: should_draw_x_axis_labels,
		include_x_axis_title: x_axis_title.is_some(),
		include_y_axis_labels: should_draw_y_axis_labels,
		include_y_axis_title: y_axis_title.is_some(),
		width: CHART_CONFIG.width,
		y_axis_grid_line_interval,
		y_max,
		y_min,
	});
	let n_labels = labels.len();

	let mut lines = Vec::new();
	let mut points = Vec::new();
	for series in series.iter() {
		let line_style = series.line_style.unwrap_or(LineStyle::Solid);
		let point_style = series.point_style.unwrap_or(PointStyle::Circle);
		// A missing value breaks the line into separate segments.
		let mut segments: Vec<Vec<Point>> = vec![Vec::new()];
		for point in series.data.iter() {
			match point.y {
				Some(y) if y.is_finite() => {
					let pixel = Point {
						x: x_to_pixels(chart_box, point.x, n_labels),
						y: y_to_pixels(chart_box, y, y_min, y_max),
					};
					if let Some(segment) = segments.last_mut() {
						segment.push(pixel);
					}
					if point_style == PointStyle::Circle {
						let label = point
							.x
							.to_usize()
							.and_then(|index| labels.get(index))
							.cloned()
							.unwrap_or_else(|| format_number(point.x));
						let tooltip = match &series.title {
							Some(title) => format!("{} ({}, {})", title, label, format_number(y)),
							None => format!("({}, {})", label, format_number(y)),
						};
						points.push(html! {
							<circle
								cx={coordinate(pixel.x)}
								cy={coordinate(pixel.y)}
								fill={series.color.clone()}
								r={format_number(CHART_CONFIG.point_radius)}
							>
								<title>{tooltip}</title>
							</circle>
						});
					}
				}
				_ => segments.push(Vec::new()),
			}
		}
		if line_style == LineStyle::Hidden {
			continue;
		}
		for segment in segments.into_iter().filter(|segment| segment.len() > 1) {
			let coordinates = segment
				.iter()
				.map(|point| format!("{},{}", coordinate(point.x), coordinate(point.y)))
				.collect::<Vec<_>>()
				.join(" ");
			let dash_array = if line_style == LineStyle::Dashed {
				Some("4 4".to_owned())
			} else {
				None
			};
			lines.push(html! {
				<polyline
					fill="none"
					points={coordinates}
					stroke={series.color.clone()}
					stroke-dasharray={dash_array}
					stroke-width={format_number(CHART_CONFIG.line_width)}
				/>
			});
		}
	}

	let x_axis_labels = if should_draw_x_axis_labels {
		Some(draw_x_axis_labels(
			x_axis_labels_box,
			labels
				.iter()
				.enumerate()
				.map(|(index, label)| {
					(
						x_to_pixels(chart_box, index.to_f64().unwrap_or(0.0), n_labels),
						label.clone(),
					)
				})
				.collect(),
		))
	} else {
		None
	};
	let y_axis_labels = if should_draw_y_axis_labels {
		Some(draw_y_axis_labels(
			y_axis_labels_box,
			chart_box,
			y_axis_grid_line_info,
			y_min,
			y_max,
		))
	} else {
		None
	};
	let label = y_axis_title.clone();
	draw_svg(
		CHART_CONFIG.width,
		CHART_CONFIG.height,
		label,
		vec![
			draw_y_axis_grid_lines(chart_box, y_axis_grid_line_info, y_min, y_max),
			draw_axes(chart_box),
			lines.into(),
			points.into(),
			x_axis_labels.into(),
			y_axis_labels.into(),
			draw_x_axis_title(x_axis_title_box, x_axis_title),
			draw_y_axis_title(y_axis_title_box, y_axis_title),
		],
	)
}

#[test]
fn test_line_chart() {
	let series = vec![LineChartSeries {
		color: "#FF6B6B".to_owned(),
		data: vec![
			LineChartPoint { x: 0.0, y: Some(10.0) },
			LineChartPoint { x: 1.0, y: Some(3.0) },
			LineChartPoint { x: 2.0, y: None },
			LineChartPoint { x: 3.0, y: Some(7.0) },
		],
		line_style: None,
		point_style: None,
		title: Some("negative".to_owned()),
	}];
	let svg = draw_line_chart(LineChartOptions {
		labels: vec![
			"Phase 1".to_owned(),
			"Phase 2".to_owned(),
			"Phase 3".to_owned(),
			"Phase 4".to_owned(),
		],
		series,
		should_draw_x_axis_labels: None,
		should_draw_y_axis_labels: None,
		x_axis_title: Some("Fasa Analisis".to_owned()),
		y_axis_grid_line_interval: None,
		y_axis_title: Some("Jumlah Sentimen".to_owned()),
		y_max: None,
		y_min: None,
	})
	.render_to_string();
	// The missing value splits the line, and the lone point after it has no line.
	assert_eq!(svg.matches("<polyline").count(), 1);
	assert_eq!(svg.matches("<circle").count(), 3);
	assert!(svg.contains("<title>negative (Phase 2, 3)</title>"));
	assert!(svg.contains(">Phase 4</text>"));
	assert!(svg.contains(">Fasa Analisis</text>"));
	assert!(svg.contains(">Jumlah Sentimen</text>"));
}
