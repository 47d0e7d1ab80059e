use crate::{
	common::{
		accuracy::read_accuracy,
		category::{category_breakdown, CategoryBreakdown},
		load::read_csv_or_empty,
		tokens::{BERT_COLOR, SVM_COLOR},
	},
	Context,
};
use anyhow::Result;
use buli_dataframe::{Column, DataFrame, NumberColumn, TextColumn};
use std::collections::BTreeMap;

/// The number of rows of each result set shown before the expander.
pub const RESULTS_PREVIEW_ROWS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Model {
	Svm,
	Bert,
}

impl Model {
	pub fn title(self) -> &'static str {
		match self {
			Model::Svm => "SVM",
			Model::Bert => "BERT",
		}
	}

	pub fn color(self) -> &'static str {
		match self {
			Model::Svm => SVM_COLOR,
			Model::Bert => BERT_COLOR,
		}
	}

	/// The search param that holds the selected category of this model.
	pub fn category_param(self) -> &'static str {
		match self {
			Model::Svm => "svm_category",
			Model::Bert => "bert_category",
		}
	}
}

pub struct Props {
	pub errors: Vec<String>,
	pub comparison: Option<Comparison>,
	pub categories: Vec<ModelCategories>,
}

#[derive(Clone)]
pub struct Comparison {
	pub svm_accuracy: f64,
	pub bert_accuracy: f64,
	/// The `Model | Ketepatan` table.
	pub accuracy_table: DataFrame,
	pub svm_classification_report: DataFrame,
	pub bert_classification_report: DataFrame,
	pub results: Vec<ModelResults>,
}

#[derive(Clone)]
pub struct ModelResults {
	pub model: Model,
	pub preview: DataFrame,
	pub all: DataFrame,
}

#[derive(Clone)]
pub struct ModelCategories {
	pub model: Model,
	pub breakdown: CategoryBreakdown,
	/// The selections of the other models, carried along when this model's selection changes.
	pub other_selections: Vec<(String, String)>,
}

pub fn accuracy_table(svm_accuracy: f64, bert_accuracy: f64) -> DataFrame {
	DataFrame {
		columns: vec![
			Column::Text(TextColumn {
				name: "Model".to_owned(),
				data: vec![Model::Svm.title().to_owned(), Model::Bert.title().to_owned()],
			}),
			Column::Number(NumberColumn {
				name: "Ketepatan".to_owned(),
				data: vec![svm_accuracy, bert_accuracy],
			}),
		],
	}
}

pub fn props(
	context: &Context,
	search_params: Option<BTreeMap<String, String>>,
) -> Result<Props> {
	let files = &context.options.files;
	let mut errors = Vec::new();
	let svm_accuracy = read_accuracy(&context.data_path(&files.svm_accuracy), &mut errors);
	let bert_accuracy = read_accuracy(&context.data_path(&files.bert_accuracy), &mut errors);
	let svm_classification_report =
		read_csv_or_empty(&context.data_path(&files.svm_classification_report), &mut errors);
	let bert_classification_report =
		read_csv_or_empty(&context.data_path(&files.bert_classification_report), &mut errors);
	let svm_results = read_csv_or_empty(&context.data_path(&files.svm_results), &mut errors);
	let bert_results = read_csv_or_empty(&context.data_path(&files.bert_results), &mut errors);

	// The comparison is only shown when both accuracies are available.
	let comparison = match (svm_accuracy, bert_accuracy) {
		(Some(svm_accuracy), Some(bert_accuracy)) => {
			let results = vec![(Model::Svm, &svm_results), (Model::Bert, &bert_results)]
				.into_iter()
				.filter(|(_, results)| !results.is_empty())
				.map(|(model, results)| ModelResults {
					model,
					preview: results.head(RESULTS_PREVIEW_ROWS),
					all: results.clone(),
				})
				.collect();
			Some(Comparison {
				svm_accuracy,
				bert_accuracy,
				accuracy_table: accuracy_table(svm_accuracy, bert_accuracy),
				svm_classification_report,
				bert_classification_report,
				results,
			})
		}
		_ => None,
	};

	let requested = |model: Model| {
		search_params
			.as_ref()
			.and_then(|search_params| search_params.get(model.category_param()))
			.map(|category| category.as_str())
	};
	let mut breakdowns = Vec::new();
	for (model, results) in vec![(Model::Svm, &svm_results), (Model::Bert, &bert_results)] {
		if let Some(breakdown) = category_breakdown(results, requested(model))? {
			breakdowns.push((model, breakdown));
		}
	}
	let categories = breakdowns
		.iter()
		.map(|(model, breakdown)| ModelCategories {
			model: *model,
			breakdown: breakdown.clone(),
			other_selections: breakdowns
				.iter()
				.filter(|(other, _)| other != model)
				.map(|(other, breakdown)| {
					(other.category_param().to_owned(), breakdown.selected.clone())
				})
				.collect(),
		})
		.collect();

	Ok(Props {
		errors: errors.iter().map(|error| error.to_string()).collect(),
		comparison,
		categories,
	})
}

#[cfg(test)]
pub fn write_artifacts(dir: &std::path::Path) {
	let files = [
		("svm_accuracy.csv", "Accuracy\n0.82\n"),
		("bert_accuracy.csv", "Accuracy\n0.91\n"),
		(
			"svm_classification_report.csv",
			",precision,recall,f1-score,support\nnegative,0.8,0.9,0.85,10\npositive,0.75,0.6,0.67,5\n",
		),
		(
			"bert_classification_report.csv",
			",precision,recall,f1-score,support\nnegative,0.9,0.95,0.92,10\npositive,0.88,0.8,0.84,5\n",
		),
		(
			"svm_results.csv",
			"Tweet,Actual,Predicted\nt1,negative,negative\nt2,positive,positive\nt3,negative,negative\nt4,neutral,negative\nt5,positive,neutral\nt6,negative,negative\n",
		),
		(
			"bert_results.csv",
			"Tweet,Actual,Predicted\nt1,negative,negative\nt2,positive,positive\nt3,positive,positive\n",
		),
	];
	for (file, contents) in files.iter() {
		std::fs::write(dir.join(file), contents).unwrap();
	}
}

#[test]
fn test_props_compare_both_models() {
	let dir = tempfile::tempdir().unwrap();
	write_artifacts(dir.path());
	let props = props(&crate::test_context(dir.path()), None).unwrap();
	assert!(props.errors.is_empty());
	let comparison = props.comparison.unwrap();
	assert_eq!(comparison.svm_accuracy, 0.82);
	assert_eq!(comparison.bert_accuracy, 0.91);
	let rows: Vec<Vec<String>> = (0..comparison.accuracy_table.nrows())
		.map(|row| {
			comparison
				.accuracy_table
				.row(row)
				.iter()
				.map(|value| value.to_string())
				.collect()
		})
		.collect();
	assert_eq!(rows, vec![vec!["SVM", "0.82"], vec!["BERT", "0.91"]]);
	assert_eq!(
		comparison.svm_classification_report.column_names(),
		vec!["Unnamed: 0", "precision", "recall", "f1-score", "support"]
	);
	assert_eq!(comparison.results.len(), 2);
	assert_eq!(comparison.results[0].preview.nrows(), 5);
	assert_eq!(comparison.results[0].all.nrows(), 6);
	assert_eq!(props.categories.len(), 2);
	assert_eq!(props.categories[0].breakdown.selected, "negative");
	assert_eq!(props.categories[1].breakdown.selected, "positive");
	assert_eq!(
		props.categories[0].other_selections,
		vec![("bert_category".to_owned(), "positive".to_owned())]
	);
}

#[test]
fn test_props_selected_category() {
	let dir = tempfile::tempdir().unwrap();
	write_artifacts(dir.path());
	let mut search_params = BTreeMap::new();
	search_params.insert("svm_category".to_owned(), "neutral".to_owned());
	search_params.insert("bert_category".to_owned(), "marah".to_owned());
	let props = props(&crate::test_context(dir.path()), Some(search_params)).unwrap();
	let svm = &props.categories[0].breakdown;
	assert_eq!(svm.selected, "neutral");
	assert_eq!(svm.filtered.nrows(), 1);
	let bert = &props.categories[1].breakdown;
	assert_eq!(bert.selected, "positive");
	assert_eq!(
		props.categories[1].other_selections,
		vec![("svm_category".to_owned(), "neutral".to_owned())]
	);
}

#[test]
fn test_props_without_accuracy() {
	let dir = tempfile::tempdir().unwrap();
	write_artifacts(dir.path());
	std::fs::write(dir.path().join("bert_accuracy.csv"), "Ketepatan\n0.91\n").unwrap();
	std::fs::remove_file(dir.path().join("svm_results.csv")).unwrap();
	let props = props(&crate::test_context(dir.path()), None).unwrap();
	assert!(props.comparison.is_none());
	assert_eq!(props.errors.len(), 2);
	assert!(props.errors[0].starts_with("Ralat membaca ketepatan dari '"));
	assert!(props.errors[0].ends_with("bert_accuracy.csv': fail tidak mengandungi lajur 'Accuracy'"));
	assert!(props.errors[1].starts_with("Gagal membaca fail '"));
	// The missing svm results only remove the svm breakdown.
	assert_eq!(props.categories.len(), 1);
	assert_eq!(props.categories[0].model, Model::Bert);
}
