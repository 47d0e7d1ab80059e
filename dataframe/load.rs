use super::*;
use anyhow::{bail, Result};
use std::{collections::BTreeMap, path::Path};

#[derive(Clone)]
pub struct FromCsvOptions<'a> {
	pub column_types: Option<BTreeMap<String, ColumnType>>,
	pub invalid_values: &'a [&'a str],
}

impl<'a> Default for FromCsvOptions<'a> {
	fn default() -> Self {
		Self {
			column_types: None,
			invalid_values: DEFAULT_INVALID_VALUES,
		}
	}
}

/// These values are the default values that are considered invalid.
pub const DEFAULT_INVALID_VALUES: &[&str] = &[
	"", "null", "NULL", "n/a", "N/A", "NA", "nan", "-nan", "NaN", "-NaN", "?",
];

impl DataFrame {
	pub fn from_path(path: &Path, options: FromCsvOptions) -> Result<Self> {
		// Short records are padded with missing values, as long as no record is longer than the header.
		let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
		Self::from_csv(&mut reader, options)
	}

	pub fn from_csv<R>(reader: &mut csv::Reader<R>, options: FromCsvOptions) -> Result<Self>
	where
		R: std::io::Read + std::io::Seek,
	{
		// Headers left empty by the writer are named after their position.
		let column_names: Vec<String> = reader
			.headers()?
			.iter()
			.enumerate()
			.map(|(index, column_name)| {
				if column_name.is_empty() {
					format!("Unnamed: {}", index)
				} else {
					column_name.to_owned()
				}
			})
			.collect();
		if column_names.is_empty() {
			bail!("no columns to parse from file");
		}
		let n_columns = column_names.len();
		let start_position = reader.position().clone();
		let invalid_values = options.invalid_values;

		#[derive(Clone, Debug)]
		enum ColumnTypeOrInferStats<'a> {
			ColumnType(ColumnType),
			InferStats(InferStats<'a>),
		}

		// Retrieve any column types present in the options.
		let mut column_types: Vec<ColumnTypeOrInferStats> =
			if let Some(column_types) = options.column_types {
				column_names
					.iter()
					.map(|column_name| {
						column_types
							.get(column_name)
							.map(|column_type| ColumnTypeOrInferStats::ColumnType(column_type.clone()))
							.unwrap_or_else(|| {
								ColumnTypeOrInferStats::InferStats(InferStats::new(invalid_values))
							})
					})
					.collect()
			} else {
				vec![ColumnTypeOrInferStats::InferStats(InferStats::new(invalid_values)); n_columns]
			};

		// Passing over the csv to infer column types is only necessary if one or more columns did not have its type specified.
		let needs_infer = column_types
			.iter()
			.any(|column_type_or_infer_stats| {
				matches!(
					column_type_or_infer_stats,
					ColumnTypeOrInferStats::InferStats(_)
				)
			});

		let mut n_rows = None;
		if needs_infer {
			let mut record = csv::StringRecord::new();
			let mut n_rows_computed = 0;
			while reader.read_record(&mut record)? {
				n_rows_computed += 1;
				check_record_len(record.len(), n_columns, n_rows_computed)?;
				for (column_type_or_infer_stats, value) in column_types.iter_mut().zip(record.iter()) {
					if let ColumnTypeOrInferStats::InferStats(infer_stats) = column_type_or_infer_stats {
						infer_stats.update(value);
					}
				}
			}
			n_rows = Some(n_rows_computed);
			// After inference, return back to the beginning of the csv to load the values.
			reader.seek(start_position)?;
		}
		let column_types: Vec<ColumnType> = column_types
			.into_iter()
			.map(
				|column_type_or_infer_stats| match column_type_or_infer_stats {
					ColumnTypeOrInferStats::ColumnType(column_type) => column_type,
					ColumnTypeOrInferStats::InferStats(infer_stats) => infer_stats.finalize(),
				},
			)
			.collect();

		// Create the dataframe.
		let mut dataframe = Self::new(column_names, column_types);
		// If an inference pass was done, reserve storage for the values because we know how many rows are in the csv.
		if let Some(n_rows) = n_rows {
			for column in dataframe.columns.iter_mut() {
				match column {
					Column::Unknown(_) => {}
					Column::Number(column) => column.data.reserve_exact(n_rows),
					Column::Text(column) => column.data.reserve_exact(n_rows),
				}
			}
		}
		// Read each csv record and insert the values into the columns of the dataframe.
		let mut record = csv::ByteRecord::new();
		let mut n_records = 0;
		while reader.read_byte_record(&mut record)? {
			n_records += 1;
			check_record_len(record.len(), n_columns, n_records)?;
			for (index, column) in dataframe.columns.iter_mut().enumerate() {
				let value = record.get(index);
				match column {
					Column::Unknown(column) => {
						column.len += 1;
					}
					Column::Number(column) => {
						let value = match value.map(lexical::parse::<f64, _>) {
							Some(Ok(value)) if value.is_finite() => value,
							_ => std::f64::NAN,
						};
						column.data.push(value);
					}
					Column::Text(column) => {
						let value = match value {
							Some(value) => std::str::from_utf8(value)?.to_owned(),
							None => String::new(),
						};
						column.data.push(value);
					}
				}
			}
		}
		Ok(dataframe)
	}
}

fn check_record_len(record_len: usize, n_columns: usize, record_index: usize) -> Result<()> {
	if record_len > n_columns {
		bail!(
			"expected {} fields in record {}, saw {}",
			n_columns,
			record_index,
			record_len
		);
	}
	Ok(())
}

#[derive(Clone, Debug)]
pub struct InferStats<'a> {
	invalid_values: &'a [&'a str],
	column_type: InferColumnType,
}

#[derive(PartialEq, Clone, Copy, Debug)]
enum InferColumnType {
	Unknown,
	Number,
	Text,
}

impl<'a> InferStats<'a> {
	pub fn new(invalid_values: &'a [&'a str]) -> Self {
		Self {
			invalid_values,
			column_type: InferColumnType::Unknown,
		}
	}

	pub fn update(&mut self, value: &str) {
		if self.invalid_values.contains(&value) {
			return;
		}
		if let InferColumnType::Unknown | InferColumnType::Number = self.column_type {
			if lexical::parse::<f64, _>(value)
				.map(|value| value.is_finite())
				.unwrap_or(false)
			{
				self.column_type = InferColumnType::Number;
			} else {
				self.column_type = InferColumnType::Text;
			}
		}
	}

	pub fn finalize(self) -> ColumnType {
		match self.column_type {
			InferColumnType::Unknown => ColumnType::Unknown,
			InferColumnType::Number => ColumnType::Number,
			InferColumnType::Text => ColumnType::Text,
		}
	}
}

#[test]
fn test_infer() {
	let csv = r#"number,text,empty
1,negative,
2.5,positive,
"#;
	let df = DataFrame::from_csv(
		&mut csv::Reader::from_reader(std::io::Cursor::new(csv)),
		FromCsvOptions::default(),
	)
	.unwrap();
	insta::assert_debug_snapshot!(df, @r###"
 DataFrame {
     columns: [
         Number(
             NumberColumn {
                 name: "number",
                 data: [
                     1.0,
                     2.5,
                 ],
             },
         ),
         Text(
             TextColumn {
                 name: "text",
                 data: [
                     "negative",
                     "positive",
                 ],
             },
         ),
         Unknown(
             UnknownColumn {
                 name: "empty",
                 len: 2,
             },
         ),
     ],
 }
 "###);
}

#[test]
fn test_column_types() {
	let csv = r#"Phase,negative
1,3
2,4
"#;
	let mut column_types = BTreeMap::new();
	column_types.insert("Phase".to_owned(), ColumnType::Text);
	let df = DataFrame::from_csv(
		&mut csv::Reader::from_reader(std::io::Cursor::new(csv)),
		FromCsvOptions {
			column_types: Some(column_types),
			..Default::default()
		},
	)
	.unwrap();
	insta::assert_debug_snapshot!(df, @r###"
 DataFrame {
     columns: [
         Text(
             TextColumn {
                 name: "Phase",
                 data: [
                     "1",
                     "2",
                 ],
             },
         ),
         Number(
             NumberColumn {
                 name: "negative",
                 data: [
                     3.0,
                     4.0,
                 ],
             },
         ),
     ],
 }
 "###);
}

#[test]
fn test_invalid_numbers_become_nan() {
	let csv = "accuracy\n0.82\n?\n";
	let df = DataFrame::from_csv(
		&mut csv::Reader::from_reader(std::io::Cursor::new(csv)),
		FromCsvOptions::default(),
	)
	.unwrap();
	let column = df.column("accuracy").unwrap().as_number().unwrap();
	assert_eq!(column.data[0], 0.82);
	assert!(column.data[1].is_nan());
}

#[test]
fn test_unnamed_headers() {
	let csv = ",Tweet\n0,kesian\n1,tahniah\n";
	let df = DataFrame::from_csv(
		&mut csv::Reader::from_reader(std::io::Cursor::new(csv)),
		FromCsvOptions::default(),
	)
	.unwrap();
	assert_eq!(df.column_names(), vec!["Unnamed: 0", "Tweet"]);
	assert_eq!(df.nrows(), 2);
}

#[test]
fn test_empty_input() {
	let result = DataFrame::from_csv(
		&mut csv::Reader::from_reader(std::io::Cursor::new("")),
		FromCsvOptions::default(),
	);
	assert!(result.is_err());
}

#[test]
fn test_header_only() {
	let df = DataFrame::from_csv(
		&mut csv::Reader::from_reader(std::io::Cursor::new("accuracy\n")),
		FromCsvOptions::default(),
	)
	.unwrap();
	assert_eq!(df.ncols(), 1);
	assert!(df.is_empty());
}

#[test]
fn test_ragged_rows_fail() {
	let csv = "Tweet,Predicted\nkesian,negative,extra\n";
	let result = DataFrame::from_csv(
		&mut csv::Reader::from_reader(std::io::Cursor::new(csv)),
		FromCsvOptions::default(),
	);
	assert!(result.is_err());
}

#[test]
fn test_short_records_are_padded() {
	let file = tempfile::NamedTempFile::new().unwrap();
	std::fs::write(
		file.path(),
		"Tweet,Actual,Predicted,Confidence\nt1,negative,negative,0.9\nt2,positive\n",
	)
	.unwrap();
	let df = DataFrame::from_path(file.path(), FromCsvOptions::default()).unwrap();
	assert_eq!(df.nrows(), 2);
	let predicted = df.column("Predicted").unwrap().as_text().unwrap();
	assert_eq!(predicted.data, vec!["negative".to_owned(), String::new()]);
	let confidence = df.column("Confidence").unwrap().as_number().unwrap();
	assert_eq!(confidence.data[0], 0.9);
	assert!(confidence.data[1].is_nan());
}

#[test]
fn test_long_records_fail() {
	let file = tempfile::NamedTempFile::new().unwrap();
	std::fs::write(file.path(), "Tweet,Predicted\nkesian,negative\ntahniah,positive,extra\n").unwrap();
	let error = DataFrame::from_path(file.path(), FromCsvOptions::default()).unwrap_err();
	assert_eq!(error.to_string(), "expected 2 fields in record 2, saw 3");
}
