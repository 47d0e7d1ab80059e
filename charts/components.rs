use crate::bar_chart::{draw_bar_chart, BarChartOptions, BarChartSeries};
use crate::common::GridLineInterval;
use crate::line_chart::{draw_line_chart, LineChartOptions, LineChartSeries};
use crate::pie_chart::{draw_pie_chart, PieChartOptions, PieChartSlice};
use html::{classes, component, html, style};

#[component]
pub fn BarChart(
	class: Option<String>,
	group_gap: Option<f64>,
	hide_legend: Option<bool>,
	id: Option<String>,
	series: Vec<BarChartSeries>,
	should_draw_x_axis_labels: Option<bool>,
	should_draw_y_axis_labels: Option<bool>,
	title: Option<String>,
	value_label_precision: Option<usize>,
	x_axis_title: Option<String>,
	y_axis_grid_line_interval: Option<GridLineInterval>,
	y_axis_title: Option<String>,
	y_max: Option<f64>,
	y_min: Option<f64>,
) {
	let hide_legend = hide_legend.unwrap_or(false);
	let legend_items: Vec<LegendItem> = series
		.iter()
		.filter_map(|series| {
			series.title.as_ref().map(|title| LegendItem {
				color: series.color.clone(),
				title: title.clone(),
			})
		})
		.collect();
	let chart = draw_bar_chart(BarChartOptions {
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
	});
	html! {
		<div class="chart-wrapper">
			<ChartTitle>{title}</ChartTitle>
			{if !hide_legend {
				Some(html! { <ChartLegend items={legend_items} /> })
			} else {
				None
			}}
			<div class={classes!("chart-container", class)} data-chart-type="bar" id={id}>
				{chart}
			</div>
		</div>
	}
}

#[component]
pub fn LineChart(
	class: Option<String>,
	hide_legend: Option<bool>,
	id: Option<String>,
	labels: Vec<String>,
	series: Vec<LineChartSeries>,
	should_draw_x_axis_labels: Option<bool>,
	should_draw_y_axis_labels: Option<bool>,
	title: Option<String>,
	x_axis_title: Option<String>,
	y_axis_grid_line_interval: Option<GridLineInterval>,
	y_axis_title: Option<String>,
	y_max: Option<f64>,
	y_min: Option<f64>,
) {
	let hide_legend = hide_legend.unwrap_or(false);
	let legend_items: Vec<LegendItem> = series
		.iter()
		.filter_map(|series| {
			series.title.as_ref().map(|title| LegendItem {
				color: series.color.clone(),
				title: title.clone(),
			})
		})
		.collect();
	let chart = draw_line_chart(LineChartOptions {
		labels,
		series,
		should_draw_x_axis_labels,
		should_draw_y_axis_labels,
		x_axis_title,
		y_axis_grid_line_interval,
		y_axis_title,
		y_max,
		y_min,
	});
	html! {
		<div class="chart-wrapper">
			<ChartTitle>{title}</ChartTitle>
			{if !hide_legend {
				Some(html! { <ChartLegend items={legend_items} /> })
			} else {
				None
			}}
			<div class={classes!("chart-container", class)} data-chart-type="line" id={id}>
				{chart}
			</div>
		</div>
	}
}

#[component]
pub fn PieChart(
	class: Option<String>,
	hide_legend: Option<bool>,
	id: Option<String>,
	inner_radius: Option<f64>,
	series: Vec<PieChartSlice>,
	should_draw_slice_titles: Option<bool>,
	title: Option<String>,
) {
	let hide_legend = hide_legend.unwrap_or(false);
	let legend_items: Vec<LegendItem> = series
		.iter()
		.map(|slice| LegendItem {
			color: slice.color.clone(),
			title: slice.title.clone(),
		})
		.collect();
	let chart = draw_pie_chart(PieChartOptions {
		inner_radius,
		series,
		should_draw_slice_titles,
	});
	html! {
		<div class="chart-wrapper">
			<ChartTitle>{title}</ChartTitle>
			{if !hide_legend {
				Some(html! { <ChartLegend items={legend_items} /> })
			} else {
				None
			}}
			<div class={classes!("chart-container", "chart-container-pie", class)} data-chart-type="pie" id={id}>
				{chart}
			</div>
		</div>
	}
}

#[component]
pub fn ChartTitle() {
	html! {
		<div class="chart-title">{children}</div>
	}
}

#[derive(Clone)]
pub struct LegendItem {
	pub color: String,
	pub title: String,
}

#[component]
pub fn ChartLegend(items: Vec<LegendItem>) {
	html! {
		<div class="chart-legend-wrapper">
			{items.into_iter().map(|item| html! {
				<ChartLegendItem
					color={item.color}
					title={item.title}
				/>
			}).collect::<Vec<_>>()}
		</div>
	}
}

#[component]
fn ChartLegendItem(color: String, title: String) {
	let style = style! {
		"background-color" => color,
	};
	html! {
		<div class="chart-legend-item">
			<div class="chart-legend-indicator" style={style}></div>
			<div class="chart-legend-title">{title}</div>
		</div>
	}
}

#[test]
fn test_bar_chart_component() {
	use crate::bar_chart::BarChartPoint;
	let html = html! {
		<BarChart
			class={None}
			group_gap={None}
			hide_legend={None}
			id={Some("accuracy".to_owned())}
			series={vec![BarChartSeries {
				color: "#4B3C91".to_owned(),
				data: vec![BarChartPoint {
					label: "SVM".to_owned(),
					x: 0.0,
					y: Some(0.82),
				}],
				title: Some("SVM".to_owned()),
			}]}
			should_draw_x_axis_labels={None}
			should_draw_y_axis_labels={None}
			title={Some("Perbandingan Ketepatan".to_owned())}
			value_label_precision={Some(2)}
			x_axis_title={None}
			y_axis_grid_line_interval={None}
			y_axis_title={Some("Ketepatan".to_owned())}
			y_max={Some(1.0)}
			y_min={Some(0.0)}
		/>
	}
	.render_to_string();
	assert!(html.starts_with(
		r#"<div class="chart-wrapper"><div class="chart-title">Perbandingan Ketepatan</div><div class="chart-legend-wrapper"><div class="chart-legend-item"><div class="chart-legend-indicator" style="background-color: #4B3C91;"></div><div class="chart-legend-title">SVM</div></div></div><div class="chart-container" data-chart-type="bar" id="accuracy"><svg"#
	));
}

#[test]
fn test_chart_legend() {
	let items = vec![
		LegendItem {
			color: "#4CAF50".to_owned(),
			title: "Positif".to_owned(),
		},
		LegendItem {
			color: "#F44336".to_owned(),
			title: "Negatif".to_owned(),
		},
	];
	let html = html! { <ChartLegend items={items} /> }.render_to_string();
	insta::assert_snapshot!(html, @r###"<div class="chart-legend-wrapper"><div class="chart-legend-item"><div class="chart-legend-indicator" style="background-color: #4CAF50;"></div><div class="chart-legend-title">Positif</div></div><div class="chart-legend-item"><div class="chart-legend-indicator" style="background-color: #F44336;"></div><div class="chart-legend-title">Negatif</div></div></div>"###);
}
