use crate::{
	common::{coordinate, draw_svg, format_number, Point},
	config::{CHART_COLORS, CHART_CONFIG},
};
use html::{html, Node};
use std::f64::consts::PI;

#[derive(Clone)]
pub struct PieChartOptions {
	/// The radius of the hole in the middle as a fraction of the outer radius. A value above zero draws a donut.
	pub inner_radius: Option<f64>,
	pub series: Vec<PieChartSlice>,
	/// Whether each slice is annotated with its label in addition to its percentage.
	pub should_draw_slice_titles: Option<bool>,
}

#[derive(Clone)]
pub struct PieChartSlice {
	pub color: String,
	pub title: String,
	/// The text shown when hovering the slice. Defaults to the title and the value.
	pub tooltip: Option<String>,
	pub value: f64,
}

/// Format a fraction as a percentage, dropping the decimal when the rounded percentage is whole.
pub fn format_percent(fraction: f64) -> String {
	let percent = (fraction * 1000.0).round() / 10.0;
	if percent.fract() == 0.0 {
		format!("{:.0}%", percent)
	} else {
		format!("{:.1}%", percent)
	}
}

/// Missing and negative values are drawn as zero.
fn slice_value(value: f64) -> f64 {
	if value.is_finite() && value > 0.0 {
		value
	} else {
		0.0
	}
}

fn polar(center: f64, radius: f64, angle: f64) -> Point {
	Point {
		x: center + radius * angle.cos(),
		y: center + radius * angle.sin(),
	}
}

pub fn draw_pie_chart(options: PieChartOptions) -> Node {
	let PieChartOptions {
		inner_radius,
		series,
		should_draw_slice_titles,
	} = options;
	let size = CHART_CONFIG.pie_size;
	let center = size / 2.0;
	let outer_radius = center - CHART_CONFIG.top_padding / 2.0;
	let inner_radius = outer_radius * inner_radius.unwrap_or(0.0).max(0.0).min(0.95);
	let should_draw_slice_titles = should_draw_slice_titles.unwrap_or(false);
	let total: f64 = series.iter().map(|slice| slice_value(slice.value)).sum();
	if total <= 0.0 {
		let empty = html! {
			<circle
				cx={coordinate(center)}
				cy={coordinate(center)}
				fill="none"
				r={coordinate(outer_radius)}
				stroke={CHART_COLORS.empty_color}
			/>
		};
		return draw_svg(size, size, None, vec![empty]);
	}

	let mut slices = Vec::new();
	let mut titles = Vec::new();
	// Slices start at the top and go clockwise.
	let mut start_angle = -PI / 2.0;
	for slice in series.into_iter() {
		let value = slice_value(slice.value);
		if value == 0.0 {
			continue;
		}
		let fraction = value / total;
		let end_angle = start_angle + fraction * 2.0 * PI;
		let tooltip = slice
			.tooltip
			.clone()
			.unwrap_or_else(|| format!("{}: {}", slice.title, format_number(slice.value)));
		let shape = if fraction >= 1.0 {
			// A single slice is a full circle, which an arc cannot draw.
			let radius = (outer_radius + inner_radius) / 2.0;
			html! {
				<circle
					cx={coordinate(center)}
					cy={coordinate(center)}
					fill="none"
					r={coordinate(radius)}
					stroke={slice.color.clone()}
					stroke-width={coordinate(outer_radius - inner_radius)}
				>
					<title>{tooltip}</title>
				</circle>
			}
		} else {
			let large_arc = if end_angle - start_angle > PI { 1 } else { 0 };
			let outer_start = polar(center, outer_radius, start_angle);
			let outer_end = polar(center, outer_radius, end_angle);
			let mut path = format!(
				"M {} {} A {} {} 0 {} 1 {} {}",
				coordinate(outer_start.x),
				coordinate(outer_start.y),
				coordinate(outer_radius),
				coordinate(outer_radius),
				large_arc,
				coordinate(outer_end.x),
				coordinate(outer_end.y),
			);
			if inner_radius > 0.0 {
				let inner_start = polar(center, inner_radius, start_angle);
				let inner_end = polar(center, inner_radius, end_angle);
				path.push_str(&format!(
					" L {} {} A {} {} 0 {} 0 {} {} Z",
					coordinate(inner_end.x),
					coordinate(inner_end.y),
					coordinate(inner_radius),
					coordinate(inner_radius),
					large_arc,
					coordinate(inner_start.x),
					coordinate(inner_start.y),
				));
			} else {
				path.push_str(&format!(" L {} {} Z", coordinate(center), coordinate(center)));
			}
			html! {
				<path
					d={path}
					fill={slice.color.clone()}
					stroke={CHART_COLORS.slice_border_color}
				>
					<title>{tooltip}</title>
				</path>
			}
		};
		slices.push(shape);
		let label_radius = if inner_radius > 0.0 {
			(outer_radius + inner_radius) / 2.0
		} else {
			outer_radius * 0.65
		};
		let label_position = polar(center, label_radius, (start_angle + end_angle) / 2.0);
		let percent = format_percent(fraction);
		let title = if should_draw_slice_titles {
			Some(html! {
				<tspan dy="-0.6em" x={coordinate(label_position.x)}>{slice.title.clone()}</tspan>
			})
		} else {
			None
		};
		let percent_dy = if should_draw_slice_titles {
			Some("1.2em")
		} else {
			None
		};
		titles.push(html! {
			<text
				dominant-baseline="middle"
				fill={CHART_COLORS.slice_label_color}
				font-size={format_number(CHART_CONFIG.font_size)}
				text-anchor="middle"
				x={coordinate(label_position.x)}
				y={coordinate(label_position.y)}
			>
				{title}
				<tspan dy={percent_dy} x={coordinate(label_position.x)}>{percent}</tspan>
			</text>
		});
		start_angle = end_angle;
	}
	draw_svg(size, size, None, vec![slices.into(), titles.into()])
}

#[test]
fn test_format_percent() {
	assert_eq!(format_percent(0.6), "60%");
	assert_eq!(format_percent(1.0 / 3.0), "33.3%");
	assert_eq!(format_percent(0.15), "15%");
	assert_eq!(format_percent(1.0), "100%");
	assert_eq!(format_percent(0.0667), "6.7%");
}

#[test]
fn test_pie_chart() {
	let slice = |title: &str, color: &str, value: f64| PieChartSlice {
		color: color.to_owned(),
		title: title.to_owned(),
		tooltip: Some(format!("{}: {} tweet", title, value)),
		value,
	};
	let svg = draw_pie_chart(PieChartOptions {
		inner_radius: None,
		series: vec![
			slice("Positif", "#4CAF50", 12.0),
			slice("Neutral", "#FFC107", 5.0),
			slice("Negatif", "#F44336", 3.0),
		],
		should_draw_slice_titles: Some(true),
	})
	.render_to_string();
	assert_eq!(svg.matches("<path").count(), 3);
	assert!(svg.contains("<title>Positif: 12 tweet</title>"));
	assert!(svg.contains(">60%</tspan>"));
	assert!(svg.contains(">25%</tspan>"));
	assert!(svg.contains(">15%</tspan>"));
	assert!(svg.contains(">Positif</tspan>"));
}

#[test]
fn test_pie_chart_single_and_empty() {
	let single = draw_pie_chart(PieChartOptions {
		inner_radius: Some(0.5),
		series: vec![
			PieChartSlice {
				color: "#4e79a7".to_owned(),
				title: "negative".to_owned(),
				tooltip: None,
				value: 4.0,
			},
			PieChartSlice {
				color: "#f28e2b".to_owned(),
				title: "positive".to_owned(),
				tooltip: None,
				value: f64::NAN,
			},
		],
		should_draw_slice_titles: None,
	})
	.render_to_string();
	assert_eq!(single.matches("<circle").count(), 1);
	assert!(single.contains("<title>negative: 4</title>"));
	assert!(single.contains(">100%</tspan>"));
	let empty = draw_pie_chart(PieChartOptions {
		inner_radius: None,
		series: vec![PieChartSlice {
			color: "#4CAF50".to_owned(),
			title: "Positif".to_owned(),
			tooltip: None,
			value: -2.0,
		}],
		should_draw_slice_titles: None,
	})
	.render_to_string();
	assert!(!empty.contains("<path"));
	assert!(!empty.contains("<title>"));
}
