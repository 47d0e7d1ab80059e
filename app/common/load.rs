use anyhow::Result;
use buli_dataframe::{ColumnType, DataFrame, FromCsvOptions};
use derive_more::Display;
use std::{collections::BTreeMap, path::Path};

/// Columns that hold labels and are always loaded as text, even when every value happens to look like a number.
const TEXT_COLUMNS: &[&str] = &[
	"Phase",
	"Username",
	"Tweet",
	"Actual",
	"Predicted",
	"Sentiment_Bert",
];

/// A problem with one of the artifacts. These are shown on the page where they occur and never stop the rest of the page from rendering.
#[derive(Clone, Debug, Display, PartialEq)]
pub enum DataError {
	#[display(fmt = "Gagal membaca fail '{}': {}", path, cause)]
	Read { path: String, cause: String },
	#[display(fmt = "Ralat membaca ketepatan dari '{}': {}", path, cause)]
	Accuracy { path: String, cause: String },
	#[display(fmt = "Gagal baca atau paparkan fail {}: {}", file, cause)]
	PhaseTrend { file: String, cause: String },
	#[display(fmt = "Gagal membaca fail sentiment: {}", _0)]
	PhaseSentiment(String),
	#[display(fmt = "Gagal membaca fail tweets: {}", _0)]
	PhaseTweets(String),
}

pub fn read_csv(path: &Path) -> Result<DataFrame> {
	let column_types: BTreeMap<String, ColumnType> = TEXT_COLUMNS
		.iter()
		.map(|column_name| (column_name.to_string(), ColumnType::Text))
		.collect();
	DataFrame::from_path(
		path,
		FromCsvOptions {
			column_types: Some(column_types),
			..Default::default()
		},
	)
}

/// Read the csv file at `path`. If it cannot be read, record the problem in `errors` and return an empty dataframe.
pub fn read_csv_or_empty(path: &Path, errors: &mut Vec<DataError>) -> DataFrame {
	match read_csv(path) {
		Ok(dataframe) => dataframe,
		Err(error) => {
			let error = DataError::Read {
				path: path.display().to_string(),
				cause: format!("{:#}", error),
			};
			log::warn!("{}", error);
			errors.push(error);
			DataFrame::default()
		}
	}
}

#[test]
fn test_read_csv_or_empty() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("svm_results.csv");
	std::fs::write(&path, "Tweet,Actual,Predicted\nkesian mangsa,negative,negative\n").unwrap();
	let mut errors = Vec::new();
	let dataframe = read_csv_or_empty(&path, &mut errors);
	assert!(errors.is_empty());
	assert_eq!(dataframe.nrows(), 1);
	assert_eq!(dataframe.column_names(), vec!["Tweet", "Actual", "Predicted"]);

	let missing = dir.path().join("bert_results.csv");
	let dataframe = read_csv_or_empty(&missing, &mut errors);
	assert!(dataframe.is_empty());
	assert_eq!(errors.len(), 1);
	let message = errors[0].to_string();
	assert!(message.starts_with(&format!(
		"Gagal membaca fail '{}': ",
		missing.display()
	)));
}

#[test]
fn test_malformed_and_empty_files_fall_back() {
	let dir = tempfile::tempdir().unwrap();
	let malformed = dir.path().join("malformed.csv");
	std::fs::write(&malformed, "Tweet,Actual,Predicted\na,b\nc,d,e,f\n").unwrap();
	let empty = dir.path().join("empty.csv");
	std::fs::write(&empty, "").unwrap();
	let mut errors = Vec::new();
	assert!(read_csv_or_empty(&malformed, &mut errors).is_empty());
	assert!(read_csv_or_empty(&empty, &mut errors).is_empty());
	assert_eq!(errors.len(), 2);
	assert!(matches!(errors[0], DataError::Read { .. }));
	assert!(errors[1].to_string().ends_with("no columns to parse from file"));
}

#[test]
fn test_label_columns_are_text() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("labels.csv");
	std::fs::write(&path, "Phase,Predicted,negative\n1,0,3\n2,1,4\n").unwrap();
	let dataframe = read_csv(&path).unwrap();
	let column_types: Vec<ColumnType> = dataframe
		.columns
		.iter()
		.map(|column| column.column_type())
		.collect();
	assert_eq!(
		column_types,
		vec![ColumnType::Text, ColumnType::Text, ColumnType::Number]
	);
}
