use buli_dataframe::{Column, DataFrame};
use buli_ui as ui;
use html::{component, html};

fn column_text_align(column: &Column) -> Option<ui::TextAlign> {
	match column {
		Column::Number(_) => Some(ui::TextAlign::Right),
		_ => None,
	}
}

/// Render a dataframe as a table with a header row of column names. Numbers are right aligned.
#[component]
pub fn DataFrameTable(dataframe: DataFrame) {
	let nrows = dataframe.nrows();
	html! {
		<ui::Table width={Some("100%".to_owned())}>
			<ui::TableHeader>
				<ui::TableRow>
					{dataframe.columns.iter().map(|column| html! {
						<ui::TableHeaderCell text_align={column_text_align(column)}>
							{column.name().to_owned()}
						</ui::TableHeaderCell>
					}).collect::<Vec<_>>()}
				</ui::TableRow>
			</ui::TableHeader>
			<ui::TableBody>
				{(0..nrows).map(|row| html! {
					<ui::TableRow>
						{dataframe.columns.iter().map(|column| html! {
							<ui::TableCell text_align={column_text_align(column)}>
								{column.value(row).to_string()}
							</ui::TableCell>
						}).collect::<Vec<_>>()}
					</ui::TableRow>
				}).collect::<Vec<_>>()}
			</ui::TableBody>
		</ui::Table>
	}
}

#[test]
fn test_dataframe_table() {
	use buli_dataframe::{NumberColumn, TextColumn};
	let dataframe = DataFrame {
		columns: vec![
			Column::Text(TextColumn {
				name: "Model".to_owned(),
				data: vec!["SVM".to_owned(), "BERT".to_owned()],
			}),
			Column::Number(NumberColumn {
				name: "Ketepatan".to_owned(),
				data: vec![0.82, 0.91],
			}),
		],
	};
	let html = html! { <DataFrameTable dataframe={dataframe} /> }.render_to_string();
	insta::assert_snapshot!(html, @r###"<div class="table-wrapper"><table class="table" style="width: 100%;"><thead class="table-header"><tr><th class="table-header-cell table-align-left">Model</th><th class="table-header-cell table-align-right">Ketepatan</th></tr></thead><tbody><tr><td class="table-cell table-align-left">SVM</td><td class="table-cell table-align-right">0.82</td></tr><tr><td class="table-cell table-align-left">BERT</td><td class="table-cell table-align-right">0.91</td></tr></tbody></table></div>"###);
}
