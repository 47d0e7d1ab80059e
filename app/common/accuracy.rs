use super::load::{read_csv, DataError};
use buli_dataframe::{Column, DataFrame};
use derive_more::{Display, Error};
use std::path::Path;

const ACCURACY_COLUMN: &str = "Accuracy";

#[derive(Clone, Copy, Debug, Display, Error, PartialEq)]
pub enum AccuracyError {
	#[display(fmt = "fail tidak mengandungi lajur 'Accuracy'")]
	MissingColumn,
	#[display(fmt = "fail kosong")]
	Empty,
	#[display(fmt = "lajur 'Accuracy' bukan nombor")]
	NotNumeric,
	#[display(fmt = "nilai pertama lajur 'Accuracy' tiada")]
	MissingValue,
}

/// Extract the model accuracy, which is the first value of the `Accuracy` column.
pub fn extract_accuracy(dataframe: &DataFrame) -> Result<f64, AccuracyError> {
	let column = dataframe
		.column(ACCURACY_COLUMN)
		.ok_or(AccuracyError::MissingColumn)?;
	if dataframe.nrows() == 0 {
		return Err(AccuracyError::Empty);
	}
	match column {
		Column::Number(column) => column
			.data
			.first()
			.copied()
			.filter(|value| !value.is_nan())
			.ok_or(AccuracyError::MissingValue),
		Column::Text(column) => {
			let value = column.data.first().ok_or(AccuracyError::Empty)?.trim();
			if value.is_empty() {
				return Err(AccuracyError::MissingValue);
			}
			value
				.parse::<f64>()
				.ok()
				.filter(|value| value.is_finite())
				.ok_or(AccuracyError::NotNumeric)
		}
		Column::Unknown(_) => Err(AccuracyError::MissingValue),
	}
}

/// Read the accuracy file at `path`. Returns `None` when the accuracy is unavailable, after recording why in `errors`.
pub fn read_accuracy(path: &Path, errors: &mut Vec<DataError>) -> Option<f64> {
	let result = read_csv(path)
		.map_err(|error| format!("{:#}", error))
		.and_then(|dataframe| extract_accuracy(&dataframe).map_err(|error| error.to_string()));
	match result {
		Ok(accuracy) => Some(accuracy),
		Err(cause) => {
			let error = DataError::Accuracy {
				path: path.display().to_string(),
				cause,
			};
			log::warn!("{}", error);
			errors.push(error);
			None
		}
	}
}

#[cfg(test)]
fn dataframe(csv: &str) -> DataFrame {
	let file = tempfile::NamedTempFile::new().unwrap();
	std::fs::write(file.path(), csv).unwrap();
	read_csv(file.path()).unwrap()
}

#[test]
fn test_extract_accuracy() {
	assert_eq!(extract_accuracy(&dataframe("Accuracy\n0.82\n")), Ok(0.82));
	assert_eq!(
		extract_accuracy(&dataframe("Model,Accuracy\nSVM,0.91\nSVM,0.5\n")),
		Ok(0.91)
	);
	assert_eq!(
		extract_accuracy(&dataframe("Ketepatan\n0.82\n")),
		Err(AccuracyError::MissingColumn)
	);
	assert_eq!(
		extract_accuracy(&dataframe("Accuracy\n")),
		Err(AccuracyError::Empty)
	);
	assert_eq!(
		extract_accuracy(&dataframe("Accuracy\ntinggi\n")),
		Err(AccuracyError::NotNumeric)
	);
	assert_eq!(
		extract_accuracy(&dataframe("Accuracy,Model\n,SVM\n")),
		Err(AccuracyError::MissingValue)
	);
}

#[test]
fn test_read_accuracy() {
	let dir = tempfile::tempdir().unwrap();
	let svm = dir.path().join("svm_accuracy.csv");
	std::fs::write(&svm, "Accuracy\n0.82\n").unwrap();
	let bert = dir.path().join("bert_accuracy.csv");
	std::fs::write(&bert, "Accuracy\n").unwrap();
	let mut errors = Vec::new();
	assert_eq!(read_accuracy(&svm, &mut errors), Some(0.82));
	assert!(errors.is_empty());
	assert_eq!(read_accuracy(&bert, &mut errors), None);
	assert_eq!(
		errors,
		vec![DataError::Accuracy {
			path: bert.display().to_string(),
			cause: "fail kosong".to_owned(),
		}]
	);
	let missing = dir.path().join("missing.csv");
	assert_eq!(read_accuracy(&missing, &mut errors), None);
	assert_eq!(errors.len(), 2);
	assert!(errors[1]
		.to_string()
		.starts_with(&format!("Ralat membaca ketepatan dari '{}'", missing.display())));
}
