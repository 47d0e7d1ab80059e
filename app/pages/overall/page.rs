use super::props::{Comparison, Model, ModelCategories, ModelResults, Props};
use crate::{
	common::{dataframe_table::DataFrameTable, tokens::category_color},
	layouts::{
		document::PageInfo,
		page_layout::{PageLayout, PHASES_PATH},
	},
};
use buli_charts::{
	bar_chart::{BarChartPoint, BarChartSeries},
	components::{BarChart, PieChart},
	pie_chart::PieChartSlice,
};
use buli_ui as ui;
use html::{component, html};
use num_traits::ToPrimitive;

pub fn render(props: Props, page_info: PageInfo) -> String {
	let html = html! {
		<PageLayout page_info={page_info}>
			<ui::S1>
				{props.errors.into_iter().map(|error| html! {
					<ui::Alert level={ui::Level::Danger} title={None}>
						{error}
					</ui::Alert>
				}).collect::<Vec<_>>()}
				{props.comparison.map(|comparison| html! {
					<ComparisonSection comparison={comparison} />
				})}
				<ui::H2 center={None}>{"Analisis Berdasarkan Kategori"}</ui::H2>
				{props.categories.into_iter().map(|categories| html! {
					<CategorySection categories={categories} />
				}).collect::<Vec<_>>()}
				<ui::Button
					button_type={ui::ButtonType::Button}
					disabled={None}
					href={Some(PHASES_PATH.to_owned())}
					id={None}
				>
					{"📊 Papar Hasil Analisis Mengikut Fasa"}
				</ui::Button>
			</ui::S1>
		</PageLayout>
	};
	format!("<!doctype html>{}", html.render_to_string())
}

#[component]
fn ComparisonSection(comparison: Comparison) {
	let series = vec![
		(Model::Svm, comparison.svm_accuracy),
		(Model::Bert, comparison.bert_accuracy),
	]
	.into_iter()
	.enumerate()
	.map(|(index, (model, accuracy))| BarChartSeries {
		color: model.color().to_owned(),
		data: vec![BarChartPoint {
			label: model.title().to_owned(),
			x: index.to_f64().unwrap_or(0.0),
			y: Some(accuracy),
		}],
		title: Some(model.title().to_owned()),
	})
	.collect();
	html! {
		<ui::S1>
			<ui::H2 center={None}>{"Analisis Keseluruhan"}</ui::H2>
			<ui::Columns columns={Some("1fr 2fr".to_owned())}>
				<ui::S2>
					<ui::H3>{"Perbandingan Ketepatan Model"}</ui::H3>
					<DataFrameTable dataframe={comparison.accuracy_table} />
					<ui::H3>{"Visualisasi Perbandingan Model"}</ui::H3>
					<BarChart
						class={None}
						group_gap={None}
						hide_legend={None}
						id={Some("accuracy_comparison".to_owned())}
						series={series}
						should_draw_x_axis_labels={None}
						should_draw_y_axis_labels={None}
						title={None}
						value_label_precision={Some(2)}
						x_axis_title={None}
						y_axis_grid_line_interval={None}
						y_axis_title={Some("Ketepatan".to_owned())}
						y_max={Some(1.0)}
						y_min={Some(0.0)}
					/>
				</ui::S2>
				<ui::S2>
					<ui::H3>{"Laporan Klasifikasi Model SVM"}</ui::H3>
					<DataFrameTable dataframe={comparison.svm_classification_report} />
					<ui::H3>{"Laporan Klasifikasi Model BERT"}</ui::H3>
					<DataFrameTable dataframe={comparison.bert_classification_report} />
				</ui::S2>
			</ui::Columns>
			<hr class="page-layout-rule" />
			<ui::H2 center={None}>{"Analisis Terperinci"}</ui::H2>
			{comparison.results.into_iter().map(|results| html! {
				<ResultsSection results={results} />
			}).collect::<Vec<_>>()}
		</ui::S1>
	}
}

#[component]
fn ResultsSection(results: ModelResults) {
	let title = results.model.title();
	html! {
		<ui::S2>
			<ui::H3>{format!("Keseluruhan {}", title)}</ui::H3>
			<DataFrameTable dataframe={results.preview} />
			<ui::Details open={None} summary={format!("Lihat Hasil Keseluruhan {}", title)}>
				<DataFrameTable dataframe={results.all} />
			</ui::Details>
		</ui::S2>
	}
}

#[component]
fn CategorySection(categories: ModelCategories) {
	let ModelCategories {
		model,
		breakdown,
		other_selections,
	} = categories;
	let param = model.category_param();
	let options = breakdown
		.counts
		.iter()
		.map(|(category, _)| ui::SelectFieldOption {
			text: category.clone(),
			value: category.clone(),
		})
		.collect();
	let slices = breakdown
		.counts
		.iter()
		.enumerate()
		.map(|(index, (category, count))| PieChartSlice {
			color: category_color(index).to_owned(),
			title: category.clone(),
			tooltip: Some(format!("{}: {}", category, count)),
			value: count.to_f64().unwrap_or(0.0),
		})
		.collect();
	html! {
		<ui::S2>
			<ui::H3>{format!("Model {}", model.title())}</ui::H3>
			<ui::Columns columns={Some("1fr 2fr".to_owned())}>
				<ui::S2>
					<p class="p">{"Pilih Kategori untuk Melihat Tweet"}</p>
					<ui::Form action={None} id={Some(format!("{}_form", param))} post={None}>
						<ui::SelectField
							disabled={None}
							id={Some(param.to_owned())}
							label={Some("Kategori".to_owned())}
							name={Some(param.to_owned())}
							options={options}
							required={None}
							submit_on_change={Some(true)}
							value={Some(breakdown.selected.clone())}
						/>
						{other_selections.into_iter().map(|(name, value)| html! {
							<input name={name} type="hidden" value={value} />
						}).collect::<Vec<_>>()}
						<noscript>
							<ui::Button
								button_type={ui::ButtonType::Submit}
								disabled={None}
								href={None}
								id={None}
							>
								{"Papar"}
							</ui::Button>
						</noscript>
					</ui::Form>
					<PieChart
						class={None}
						hide_legend={None}
						id={Some(format!("{}_chart", param))}
						inner_radius={Some(0.5)}
						series={slices}
						should_draw_slice_titles={None}
						title={None}
					/>
				</ui::S2>
				<ui::S2>
					<ui::H3>{"Keputusan Analisis"}</ui::H3>
					<DataFrameTable dataframe={breakdown.preview} />
					<ui::Details open={None} summary={"Lihat Keseluruhan".to_owned()}>
						<DataFrameTable dataframe={breakdown.filtered} />
					</ui::Details>
				</ui::S2>
			</ui::Columns>
		</ui::S2>
	}
}

#[cfg(test)]
fn page_info() -> PageInfo {
	PageInfo {
		path: "/Keputusan_Analisis_Keseluruhan".to_owned(),
		title: "Keputusan Analisis Sentimen".to_owned(),
	}
}

#[test]
fn test_render_comparison_and_categories() {
	let dir = tempfile::tempdir().unwrap();
	super::props::write_artifacts(dir.path());
	let props = super::props::props(&crate::test_context(dir.path()), None).unwrap();
	let html = render(props, page_info());
	assert!(html.contains(r#"<td class="table-cell table-align-left">SVM</td><td class="table-cell table-align-right">0.82</td>"#));
	assert!(html.contains(r#"<td class="table-cell table-align-left">BERT</td><td class="table-cell table-align-right">0.91</td>"#));
	assert!(html.contains(">0.82</text>"));
	assert!(html.contains(">0.91</text>"));
	assert!(html.contains(r##"fill="#4B3C91""##));
	assert!(html.contains(r##"fill="#FF6F61""##));
	assert!(html.contains("Lihat Hasil Keseluruhan SVM"));
	assert!(html.contains("Lihat Hasil Keseluruhan BERT"));
	assert!(html.contains(r#"<select class="form-select" id="svm_category" name="svm_category" onchange="this.form.submit()">"#));
	assert!(html.contains(r#"<input name="bert_category" type="hidden" value="positive" />"#));
	assert!(html.contains("<title>negative: 4</title>"));
	assert!(html.contains(r#"<a class="button" href="/Keputusan_Analisis_Mengikut_Fasa">"#));
}

#[test]
fn test_render_without_comparison() {
	let dir = tempfile::tempdir().unwrap();
	super::props::write_artifacts(dir.path());
	std::fs::remove_file(dir.path().join("svm_accuracy.csv")).unwrap();
	let props = super::props::props(&crate::test_context(dir.path()), None).unwrap();
	let html = render(props, page_info());
	assert!(html.contains(r#"<div class="alert-wrapper alert-level-danger" role="alert">Ralat membaca ketepatan dari &apos;"#));
	assert!(!html.contains("Analisis Keseluruhan</h2>"));
	assert!(!html.contains("Lihat Hasil Keseluruhan"));
	assert!(html.contains("Analisis Berdasarkan Kategori"));
	assert!(html.contains("Model SVM"));
}
