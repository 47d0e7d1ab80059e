/*!
This crate provides a basic implementation of dataframes, which are two dimensional arrays of data where each column can have a different data type, like a spreadsheet. It implements the handful of operations the dashboard needs to turn the csv artifacts produced by the sentiment pipeline into tables and charts: loading with type inference, projection, filtering, counting, renaming, and reshaping between wide and long form.
*/

use anyhow::{bail, format_err, Result};
use std::collections::HashMap;

pub mod load;
mod reshape;

pub use self::load::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataFrame {
	pub columns: Vec<Column>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Column {
	Unknown(UnknownColumn),
	Number(NumberColumn),
	Text(TextColumn),
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnknownColumn {
	pub name: String,
	pub len: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberColumn {
	pub name: String,
	pub data: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextColumn {
	pub name: String,
	pub data: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnType {
	Unknown,
	Number,
	Text,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value<'a> {
	Unknown,
	Number(f64),
	Text(&'a str),
}

impl DataFrame {
	pub fn new(column_names: Vec<String>, column_types: Vec<ColumnType>) -> Self {
		let columns = column_names
			.into_iter()
			.zip(column_types.into_iter())
			.map(|(column_name, column_type)| Column::new(column_name, column_type))
			.collect();
		Self { columns }
	}

	pub fn ncols(&self) -> usize {
		self.columns.len()
	}

	pub fn nrows(&self) -> usize {
		self.columns.first().map(|column| column.len()).unwrap_or(0)
	}

	/// A dataframe is empty when it has no rows or no columns.
	pub fn is_empty(&self) -> bool {
		self.ncols() == 0 || self.nrows() == 0
	}

	pub fn column_names(&self) -> Vec<&str> {
		self.columns.iter().map(|column| column.name()).collect()
	}

	pub fn column(&self, name: &str) -> Option<&Column> {
		self.columns.iter().find(|column| column.name() == name)
	}

	pub fn has_column(&self, name: &str) -> bool {
		self.column(name).is_some()
	}

	fn column_or_err(&self, name: &str) -> Result<&Column> {
		self.column(name)
			.ok_or_else(|| format_err!("column '{}' does not exist", name))
	}

	pub fn row(&self, index: usize) -> Vec<Value> {
		self.columns.iter().map(|column| column.value(index)).collect()
	}

	/// Return a dataframe containing the rows at `indices`, in that order.
	pub fn take(&self, indices: &[usize]) -> DataFrame {
		DataFrame {
			columns: self
				.columns
				.iter()
				.map(|column| column.take(indices))
				.collect(),
		}
	}

	pub fn head(&self, n: usize) -> DataFrame {
		let indices: Vec<usize> = (0..n.min(self.nrows())).collect();
		self.take(&indices)
	}

	/// Project the dataframe onto the columns named in `names`, in that order.
	pub fn select(&self, names: &[&str]) -> Result<DataFrame> {
		let columns = names
			.iter()
			.map(|name| self.column_or_err(name).map(|column| column.clone()))
			.collect::<Result<Vec<_>>>()?;
		Ok(DataFrame { columns })
	}

	/// Keep the rows whose value in `column` renders exactly as `value`. Rows keep their original order.
	pub fn filter(&self, column: &str, value: &str) -> Result<DataFrame> {
		let column = self.column_or_err(column)?;
		let indices: Vec<usize> = (0..column.len())
			.filter(|index| {
				let row_value = column.value(*index);
				!row_value.is_missing() && row_value.to_string() == value
			})
			.collect();
		Ok(self.take(&indices))
	}

	/// Count the occurrences of each distinct value in `column`. Missing values are not counted. The counts are sorted in descending order, and values with equal counts keep the order in which they first appear.
	pub fn value_counts(&self, column: &str) -> Result<Vec<(String, usize)>> {
		let column = self.column_or_err(column)?;
		let mut positions: HashMap<String, usize> = HashMap::new();
		let mut counts: Vec<(String, usize)> = Vec::new();
		for index in 0..column.len() {
			let value = column.value(index);
			if value.is_missing() {
				continue;
			}
			let value = value.to_string();
			match positions.get(&value) {
				Some(position) => counts[*position].1 += 1,
				None => {
					positions.insert(value.clone(), counts.len());
					counts.push((value, 1));
				}
			}
		}
		counts.sort_by(|a, b| b.1.cmp(&a.1));
		Ok(counts)
	}

	/// Rename the column `from` to `to`. Renaming a column that does not exist leaves the dataframe unchanged.
	pub fn rename_column(mut self, from: &str, to: &str) -> DataFrame {
		for column in self.columns.iter_mut() {
			if column.name() == from {
				column.set_name(to.to_owned());
			}
		}
		self
	}

	/// Replace every occurrence of `from` with `to` in the values of the text column `column`.
	pub fn replace_in_column(mut self, column: &str, from: &str, to: &str) -> Result<DataFrame> {
		let column = self
			.columns
			.iter_mut()
			.find(|c| c.name() == column)
			.ok_or_else(|| format_err!("column '{}' does not exist", column))?;
		match column {
			Column::Text(column) => {
				for value in column.data.iter_mut() {
					if value.contains(from) {
						*value = value.replace(from, to);
					}
				}
			}
			_ => bail!(
				"column '{}' does not contain text values",
				column.name()
			),
		}
		Ok(self)
	}
}

impl Column {
	pub fn new(name: String, column_type: ColumnType) -> Column {
		match column_type {
			ColumnType::Unknown => Column::Unknown(UnknownColumn { name, len: 0 }),
			ColumnType::Number => Column::Number(NumberColumn {
				name,
				data: Vec::new(),
			}),
			ColumnType::Text => Column::Text(TextColumn {
				name,
				data: Vec::new(),
			}),
		}
	}

	pub fn name(&self) -> &str {
		match self {
			Column::Unknown(column) => &column.name,
			Column::Number(column) => &column.name,
			Column::Text(column) => &column.name,
		}
	}

	fn set_name(&mut self, name: String) {
		match self {
			Column::Unknown(column) => column.name = name,
			Column::Number(column) => column.name = name,
			Column::Text(column) => column.name = name,
		}
	}

	pub fn len(&self) -> usize {
		match self {
			Column::Unknown(column) => column.len,
			Column::Number(column) => column.data.len(),
			Column::Text(column) => column.data.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn column_type(&self) -> ColumnType {
		match self {
			Column::Unknown(_) => ColumnType::Unknown,
			Column::Number(_) => ColumnType::Number,
			Column::Text(_) => ColumnType::Text,
		}
	}

	pub fn value(&self, index: usize) -> Value {
		match self {
			Column::Unknown(_) => Value::Unknown,
			Column::Number(column) => column
				.data
				.get(index)
				.map(|value| Value::Number(*value))
				.unwrap_or(Value::Unknown),
			Column::Text(column) => column
				.data
				.get(index)
				.map(|value| Value::Text(value))
				.unwrap_or(Value::Unknown),
		}
	}

	pub fn as_number(&self) -> Option<&NumberColumn> {
		match self {
			Column::Number(column) => Some(column),
			_ => None,
		}
	}

	pub fn as_text(&self) -> Option<&TextColumn> {
		match self {
			Column::Text(column) => Some(column),
			_ => None,
		}
	}

	pub fn take(&self, indices: &[usize]) -> Column {
		match self {
			Column::Unknown(column) => Column::Unknown(UnknownColumn {
				name: column.name.clone(),
				len: indices.len(),
			}),
			Column::Number(column) => Column::Number(NumberColumn {
				name: column.name.clone(),
				data: indices.iter().map(|index| column.data[*index]).collect(),
			}),
			Column::Text(column) => Column::Text(TextColumn {
				name: column.name.clone(),
				data: indices
					.iter()
					.map(|index| column.data[*index].clone())
					.collect(),
			}),
		}
	}
}

impl<'a> Value<'a> {
	/// Missing values are unknown values, numbers that failed to parse, and text that matches one of the default invalid values.
	pub fn is_missing(&self) -> bool {
		match self {
			Value::Unknown => true,
			Value::Number(value) => value.is_nan(),
			Value::Text(value) => DEFAULT_INVALID_VALUES.contains(value),
		}
	}

	pub fn as_number(&self) -> Option<f64> {
		match self {
			Value::Number(value) if !value.is_nan() => Some(*value),
			_ => None,
		}
	}
}

impl<'a> std::fmt::Display for Value<'a> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Unknown => Ok(()),
			Value::Number(value) => write!(f, "{}", value),
			Value::Text(value) => write!(f, "{}", value),
		}
	}
}

#[cfg(test)]
fn predictions() -> DataFrame {
	let csv = "Tweet,Actual,Predicted
kesian mangsa,negative,negative
tahniah polis,positive,positive
siasat segera,neutral,negative
,neutral,
jangan buli,negative,negative
";
	DataFrame::from_csv(
		&mut csv::Reader::from_reader(std::io::Cursor::new(csv)),
		FromCsvOptions::default(),
	)
	.unwrap()
}

#[test]
fn test_value_counts() {
	let df = predictions();
	let counts = df.value_counts("Predicted").unwrap();
	insta::assert_debug_snapshot!(counts, @r###"
 [
     (
         "negative",
         3,
     ),
     (
         "positive",
         1,
     ),
 ]
 "###);
	let missing = (0..df.nrows())
		.filter(|index| df.column("Predicted").unwrap().value(*index).is_missing())
		.count();
	let total: usize = counts.iter().map(|(_, count)| count).sum();
	assert_eq!(total + missing, df.nrows());
	assert!(df.value_counts("Sentimen").is_err());
}

#[test]
fn test_value_counts_ties_keep_first_appearance() {
	let csv = "Predicted\nneutral\npositive\npositive\nneutral\nnegative\n";
	let df = DataFrame::from_csv(
		&mut csv::Reader::from_reader(std::io::Cursor::new(csv)),
		FromCsvOptions::default(),
	)
	.unwrap();
	let counts = df.value_counts("Predicted").unwrap();
	let order: Vec<&str> = counts.iter().map(|(value, _)| value.as_str()).collect();
	assert_eq!(order, vec!["neutral", "positive", "negative"]);
}

#[test]
fn test_filter_keeps_order() {
	let df = predictions();
	let filtered = df.filter("Predicted", "negative").unwrap();
	assert_eq!(filtered.nrows(), 3);
	let tweets: Vec<String> = (0..filtered.nrows())
		.map(|index| filtered.column("Tweet").unwrap().value(index).to_string())
		.collect();
	assert_eq!(tweets, vec!["kesian mangsa", "siasat segera", "jangan buli"]);
	assert_eq!(filtered.head(2).row(1), filtered.row(1));
	assert_eq!(filtered.head(10).nrows(), 3);
	assert!(df.filter("Sentimen", "negative").is_err());
}

#[test]
fn test_select() {
	let df = predictions();
	let selected = df.select(&["Predicted", "Tweet"]).unwrap();
	assert_eq!(selected.column_names(), vec!["Predicted", "Tweet"]);
	assert!(df.select(&["Tweet", "Username"]).is_err());
}

#[test]
fn test_rename_and_replace() {
	let csv = "Phase,Sentiment_Bert\nPhase 1,positive\nPhase 2,negative\n";
	let df = DataFrame::from_csv(
		&mut csv::Reader::from_reader(std::io::Cursor::new(csv)),
		FromCsvOptions::default(),
	)
	.unwrap();
	let df = df
		.rename_column("Sentiment_Bert", "Sentimen")
		.rename_column("Phase", "Fasa")
		.rename_column("Missing", "Ignored")
		.replace_in_column("Fasa", "Phase", "Fasa")
		.unwrap();
	assert_eq!(df.column_names(), vec!["Fasa", "Sentimen"]);
	assert_eq!(df.row(1), vec![Value::Text("Fasa 2"), Value::Text("negative")]);
	assert!(df.clone().replace_in_column("Phase", "Phase", "Fasa").is_err());
}

#[test]
fn test_replace_requires_text() {
	let csv = "count\n1\n2\n";
	let df = DataFrame::from_csv(
		&mut csv::Reader::from_reader(std::io::Cursor::new(csv)),
		FromCsvOptions::default(),
	)
	.unwrap();
	assert!(df.replace_in_column("count", "1", "one").is_err());
}

#[test]
fn test_number_display() {
	assert_eq!(Value::Number(3.0).to_string(), "3");
	assert_eq!(Value::Number(0.82).to_string(), "0.82");
	assert_eq!(Value::Number(f64::NAN).to_string(), "NaN");
	assert!(Value::Number(f64::NAN).is_missing());
	assert!(Value::Text("").is_missing());
	assert!(!Value::Text("neutral").is_missing());
}
