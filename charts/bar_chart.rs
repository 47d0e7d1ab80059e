use crate::{
	common::{
		compute_boxes, compute_y_bounds, coordinate, draw_axes, draw_svg, draw_x_axis_labels,
		draw_x_axis_title, draw_y_axis_grid_lines, draw_y_axis_labels, draw_y_axis_title,
		format_number, y_to_pixels, ComputeBoxesOptions, ComputeBoxesOutput, GridLineInterval,
	},
	config::{CHART_COLORS, CHART_CONFIG},
};
use html::{html, Node};
use num_traits::ToPrimitive;

#[derive(Clone)]
pub struct BarChartOptions {
	pub group_gap: Option<f64>,
	pub series: Vec<BarChartSeries>,
	pub should_draw_x_axis_labels: Option<bool>,
	pub should_draw_y_axis_labels: Option<bool>,
	/// When set, each bar is annotated with its value rounded to this many decimal places.
	pub value_label_precision: Option<usize>,
	pub x_axis_title: Option<String>,
	pub y_axis_grid_line_interval: Option<GridLineInterval>,
	pub y_axis_title: Option<String>,
	pub y_max: Option<f64>,
	pub y_min: Option<f64>,
}

#[derive(Clone)]
pub struct BarChartSeries {
	pub color: String,
	pub data: Vec<BarChartPoint>,
	pub title: Option<String>,
}

#[derive(Clone)]
pub struct BarChartPoint {
	pub label: String,
	pub x: f64,
	pub y: Option<f64>,
}

/// Draw a bar chart. Points with the same x share a slot, and the bars in a slot split its width between the series that have a point there.
pub fn draw_bar_chart(options: BarChartOptions) -> Node {
	let BarChartOptions {
		group_gap,
		series,
		should_draw_x_axis_labels,
		should_draw_y_axis_labels,
		value_label_precision,
		x_axis_title,
		y_axis_grid_line_interval,
		y_axis_title,
		y_max,
		y_min,
	} = options;
	let group_gap = group_gap.unwrap_or(CHART_CONFIG.bar_group_gap);
	let should_draw_x_axis_labels = should_draw_x_axis_labels.unwrap_or(true);
	let should_draw_y_axis_labels = should_draw_y_axis_labels.unwrap_or(true);

	// Collect the slots in order of x.
	let mut slots: Vec<(f64, String)> = Vec::new();
	for point in series.iter().flat_map(|series| series.data.iter()) {
		if !slots.iter().any(|(x, _)| *x == point.x) {
			slots.push((point.x, point.label.clone()));
		}
	}
	slots.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

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

	let slot_width = chart_box.w / slots.len().max(1).to_f64().unwrap_or(1.0);
	let baseline = y_to_pixels(chart_box, 0.0f64.max(y_min).min(y_max), y_min, y_max);
	let mut bars = Vec::new();
	let mut value_labels = Vec::new();
	for (slot_index, (x, _)) in slots.iter().enumerate() {
		let present: Vec<(&BarChartSeries, &BarChartPoint)> = series
			.iter()
			.filter_map(|series| {
				series
					.data
					.iter()
					.find(|point| point.x == *x)
					.map(|point| (series, point))
			})
			.collect();
		let slot_x = chart_box.x + slot_index.to_f64().unwrap_or(0.0) * slot_width;
		let bar_width = slot_width * (1.0 - group_gap) / present.len().to_f64().unwrap_or(1.0);
		for (bar_index, (series, point)) in present.into_iter().enumerate() {
			let value = match point.y {
				Some(value) if value.is_finite() => value,
				_ => continue,
			};
			let bar_x = slot_x + slot_width * group_gap / 2.0 + bar_index.to_f64().unwrap_or(0.0) * bar_width;
			let top = y_to_pixels(chart_box, value.max(y_min).min(y_max), y_min, y_max);
			let formatted_value = value_label_precision
				.map(|precision| format!("{:.*}", precision, value))
				.unwrap_or_else(|| format_number(value));
			let tooltip = match &series.title {
				Some(title) if title != &point.label => {
					format!("{} ({}, {})", title, point.label, formatted_value)
				}
				_ => format!("{}: {}", point.label, formatted_value),
			};
			bars.push(html! {
				<rect
					fill={series.color.clone()}
					height={coordinate((baseline - top).abs())}
					width={coordinate(bar_width)}
					x={coordinate(bar_x)}
					y={coordinate(top.min(baseline))}
				>
					<title>{tooltip}</title>
				</rect>
			});
			if value_label_precision.is_some() {
				value_labels.push(html! {
					<text
						fill={CHART_COLORS.label_color}
						font-size={format_number(CHART_CONFIG.font_size)}
						text-anchor="middle"
						x={coordinate(bar_x + bar_width / 2.0)}
						y={coordinate(top.min(baseline) - CHART_CONFIG.label_padding / 2.0)}
					>
						{formatted_value}
					</text>
				});
			}
		}
	}

	let x_axis_labels = if should_draw_x_axis_labels {
		Some(draw_x_axis_labels(
			x_axis_labels_box,
			slots
				.into_iter()
				.enumerate()
				.map(|(slot_index, (_, label))| {
					let center = chart_box.x + (slot_index.to_f64().unwrap_or(0.0) + 0.5) * slot_width;
					(center, label)
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
			bars.into(),
			draw_axes(chart_box),
			value_labels.into(),
			x_axis_labels.into(),
			y_axis_labels.into(),
			draw_x_axis_title(x_axis_title_box, x_axis_title),
			draw_y_axis_title(y_axis_title_box, y_axis_title),
		],
	)
}

#[cfg(test)]
fn accuracy_series() -> Vec<BarChartSeries> {
	vec![
		BarChartSeries {
			color: "#4B3C91".to_owned(),
			data: vec![BarChartPoint {
				label: "SVM".to_owned(),
				x: 0.0,
				y: Some(0.82),
			}],
			title: Some("SVM".to_owned()),
		},
		BarChartSeries {
			color: "#FF6F61".to_owned(),
			data: vec![BarChartPoint {
				label: "BERT".to_owned(),
				x: 1.0,
				y: Some(0.91),
			}],
			title: Some("BERT".to_owned()),
		},
	]
}

#[test]
fn test_value_labels_and_tooltips() {
	let svg = draw_bar_chart(BarChartOptions {
		group_gap: None,
		series: accuracy_series(),
		should_draw_x_axis_labels: None,
		should_draw_y_axis_labels: None,
		value_label_precision: Some(2),
		x_axis_title: Some("Model".to_owned()),
		y_axis_grid_line_interval: None,
		y_axis_title: Some("Ketepatan".to_owned()),
		y_max: Some(1.0),
		y_min: Some(0.0),
	})
	.render_to_string();
	assert!(svg.starts_with("<svg aria-label=\"Ketepatan\""));
	assert!(svg.contains(">0.82</text>"));
	assert!(svg.contains(">0.91</text>"));
	assert!(svg.contains("<title>SVM: 0.82</title>"));
	assert!(svg.contains("<title>BERT: 0.91</title>"));
	assert!(svg.contains(r##"fill="#4B3C91""##));
	assert!(svg.contains(r##"fill="#FF6F61""##));
	assert_eq!(svg.matches("<rect").count(), 2);
}

#[test]
fn test_bars_in_separate_slots_use_the_full_slot() {
	let svg = draw_bar_chart(BarChartOptions {
		group_gap: Some(0.0),
		series: accuracy_series(),
		should_draw_x_axis_labels: Some(false),
		should_draw_y_axis_labels: Some(false),
		value_label_precision: None,
		x_axis_title: None,
		y_axis_grid_line_interval: None,
		y_axis_title: None,
		y_max: Some(1.0),
		y_min: Some(0.0),
	})
	.render_to_string();
	let width = CHART_CONFIG.width - CHART_CONFIG.left_padding - CHART_CONFIG.right_padding;
	let expected = format!("width=\"{}\"", coordinate(width / 2.0));
	assert_eq!(svg.matches(expected.as_str()).count(), 2);
}
