use super::props::{PhaseSection, Props, TrendChart};
use crate::{
	common::{
		dataframe_table::DataFrameTable,
		tokens::{trend_color, NEGATIVE_PIE_COLOR, NEUTRAL_PIE_COLOR, POSITIVE_PIE_COLOR},
	},
	layouts::{
		document::PageInfo,
		page_layout::{PageLayout, OVERALL_PATH},
	},
};
use buli_charts::{
	common::format_number,
	components::{LineChart, PieChart},
	line_chart::{LineChartPoint, LineChartSeries},
	pie_chart::PieChartSlice,
};
use buli_ui as ui;
use html::{component, html};
use num_traits::ToPrimitive;

pub fn render(props: Props, page_info: PageInfo) -> String {
	let trend = match props.trend {
		Ok(trend) => html! { <TrendSection trend={trend} /> },
		Err(error) => html! {
			<ui::Alert level={ui::Level::Danger} title={None}>
				{error}
			</ui::Alert>
		},
	};
	let phases = match props.phases {
		Some(phases) => phases
			.into_iter()
			.map(|phase| html! { <PhaseSectionView phase={phase} /> })
			.collect::<Vec<_>>()
			.into(),
		None => html! {
			<ui::Alert level={ui::Level::Info} title={None}>
				{"Data sentimen atau tweet tidak tersedia."}
			</ui::Alert>
		},
	};
	let html = html! {
		<PageLayout page_info={page_info}>
			<ui::S1>
				<ui::H2 center={None}>{"Analisis Mengikut Fasa"}</ui::H2>
				<ui::H2 center={None}>{"Graf Perubahan Sentimen Mengikut Fasa"}</ui::H2>
				{trend}
				<hr class="page-layout-rule" />
				{props.errors.into_iter().map(|error| html! {
					<ui::Alert level={ui::Level::Danger} title={None}>
						{error}
					</ui::Alert>
				}).collect::<Vec<_>>()}
				{phases}
				<ui::Button
					button_type={ui::ButtonType::Button}
					disabled={None}
					href={Some(OVERALL_PATH.to_owned())}
					id={None}
				>
					{"📊 Papar Hasil Analisis Keseluruhan"}
				</ui::Button>
			</ui::S1>
		</PageLayout>
	};
	format!("<!doctype html>{}", html.render_to_string())
}

#[component]
fn TrendSection(trend: TrendChart) {
	let series = trend
		.series
		.into_iter()
		.map(|(sentiment, values)| LineChartSeries {
			color: trend_color(&sentiment).to_owned(),
			data: values
				.into_iter()
				.enumerate()
				.map(|(index, y)| LineChartPoint {
					x: index.to_f64().unwrap_or(0.0),
					y,
				})
				.collect(),
			line_style: None,
			point_style: None,
			title: Some(sentiment),
		})
		.collect();
	html! {
		<LineChart
			class={None}
			hide_legend={None}
			id={Some("phase_trend".to_owned())}
			labels={trend.phases}
			series={series}
			should_draw_x_axis_labels={None}
			should_draw_y_axis_labels={None}
			title={None}
			x_axis_title={Some("Fasa Analisis".to_owned())}
			y_axis_grid_line_interval={None}
			y_axis_title={Some("Jumlah Sentimen".to_owned())}
			y_max={None}
			y_min={Some(0.0)}
		/>
	}
}

#[component]
fn PhaseSectionView(phase: PhaseSection) {
	let PhaseSection {
		fasa,
		counts,
		tweets,
	} = phase;
	let slices = ["Positif", "Neutral", "Negatif"]
		.iter()
		.zip([POSITIVE_PIE_COLOR, NEUTRAL_PIE_COLOR, NEGATIVE_PIE_COLOR].iter())
		.zip(counts.iter())
		.map(|((title, color), count)| PieChartSlice {
			color: color.to_string(),
			title: title.to_string(),
			tooltip: Some(format!("{}: {} tweet", title, format_number(*count))),
			value: *count,
		})
		.collect();
	let tweet_list = if tweets.is_empty() {
		html! { <ui::P>{"Tiada tweet untuk fasa ini."}</ui::P> }
	} else {
		html! { <DataFrameTable dataframe={tweets} /> }
	};
	html! {
		<ui::Columns columns={Some("1fr 3fr".to_owned())}>
			<ui::S2>
				<ui::H3>{fasa.clone()}</ui::H3>
				<PieChart
					class={None}
					hide_legend={None}
					id={None}
					inner_radius={None}
					series={slices}
					should_draw_slice_titles={Some(true)}
					title={None}
				/>
			</ui::S2>
			<ui::S2>
				<ui::H3>{format!("Tweet {}", fasa)}</ui::H3>
				{tweet_list}
			</ui::S2>
		</ui::Columns>
	}
}

#[cfg(test)]
fn page_info() -> PageInfo {
	PageInfo {
		path: "/Keputusan_Analisis_Mengikut_Fasa".to_owned(),
		title: "Keputusan Analisis Sentimen Mengikut Fasa".to_owned(),
	}
}

#[test]
fn test_render_phases() {
	let dir = tempfile::tempdir().unwrap();
	super::props::write_artifacts(dir.path());
	let props = super::props::props(&crate::test_context(dir.path())).unwrap();
	let html = render(props, page_info());
	assert!(html.contains(r#"data-chart-type="line" id="phase_trend""#));
	assert!(html.contains(">Fasa Analisis</text>"));
	assert!(html.contains("<title>positive (Phase 2, 12)</title>"));
	assert!(html.contains(r#"<h3 class="h3">Fasa 2</h3>"#));
	assert!(html.contains("<title>Positif: 12 tweet</title>"));
	assert!(html.contains(r##"fill="#4CAF50""##));
	assert!(html.contains(">60%</tspan>"));
	assert!(html.contains(">25%</tspan>"));
	assert!(html.contains(">15%</tspan>"));
	assert!(html.contains(r#"<td class="table-cell table-align-left">kesian mangsa</td>"#));
	// Fasa 10 has no tweets.
	assert_eq!(html.matches("Tiada tweet untuk fasa ini.").count(), 1);
	assert!(html.contains(r#"<a class="button" href="/Keputusan_Analisis_Keseluruhan">"#));
}

#[test]
fn test_render_without_artifacts() {
	let dir = tempfile::tempdir().unwrap();
	let props = super::props::props(&crate::test_context(dir.path())).unwrap();
	let html = render(props, page_info());
	assert!(html.contains(
		r#"<div class="alert-wrapper alert-level-danger" role="alert">Gagal baca atau paparkan fail sentiment_distribution_by_phase.csv: "#
	));
	assert!(html.contains("Gagal membaca fail sentiment: "));
	assert!(html.contains("Gagal membaca fail tweets: "));
	assert!(html.contains("Data sentimen atau tweet tidak tersedia."));
	assert!(!html.contains("data-chart-type"));
}
