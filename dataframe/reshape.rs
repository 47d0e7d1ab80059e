use super::*;
use anyhow::{bail, Result};
use itertools::Itertools;
use std::collections::HashMap;

impl DataFrame {
	/// Unpivot the dataframe from wide to long form. The output has the `id_column`, a text column `var_name` holding the name of the value column each row came from, and a column `value_name` holding the value. Rows are grouped by value column, in the order the value columns are given, and within each group keep the order of the input rows.
	pub fn melt(
		&self,
		id_column: &str,
		value_columns: &[&str],
		var_name: &str,
		value_name: &str,
	) -> Result<DataFrame> {
		let id = self.column_or_err(id_column)?;
		let values = value_columns
			.iter()
			.map(|name| self.column_or_err(name))
			.collect::<Result<Vec<_>>>()?;
		let nrows = self.nrows();
		let indices: Vec<usize> = values.iter().flat_map(|_| 0..nrows).collect();
		let id = id.take(&indices);
		let var = Column::Text(TextColumn {
			name: var_name.to_owned(),
			data: values
				.iter()
				.flat_map(|column| std::iter::repeat(column.name().to_owned()).take(nrows))
				.collect(),
		});
		let all_numbers = values
			.iter()
			.all(|column| matches!(column, Column::Number(_) | Column::Unknown(_)));
		let value = if all_numbers {
			Column::Number(NumberColumn {
				name: value_name.to_owned(),
				data: values
					.iter()
					.flat_map(|column| {
						(0..nrows).map(move |index| column.value(index).as_number().unwrap_or(f64::NAN))
					})
					.collect(),
			})
		} else {
			Column::Text(TextColumn {
				name: value_name.to_owned(),
				data: values
					.iter()
					.flat_map(|column| (0..nrows).map(move |index| column.value(index).to_string()))
					.collect(),
			})
		};
		Ok(DataFrame {
			columns: vec![id, var, value],
		})
	}

	/// Reshape the dataframe from long to wide form. Each distinct value of `index` becomes a row and each distinct value of `columns` becomes a column holding the matching value from `values`. Rows and columns appear in the order their keys first appear. Combinations that do not occur are missing, and a combination that occurs more than once is an error.
	pub fn pivot(&self, index: &str, columns: &str, values: &str) -> Result<DataFrame> {
		let index_column = self.column_or_err(index)?;
		let columns_column = self.column_or_err(columns)?;
		let values_column = self.column_or_err(values)?;
		let nrows = self.nrows();
		let keys = |column: &Column| -> Vec<String> {
			(0..nrows)
				.map(|row| column.value(row).to_string())
				.unique()
				.collect()
		};
		let row_keys = keys(index_column);
		let column_keys = keys(columns_column);
		let row_positions: HashMap<&str, usize> = row_keys
			.iter()
			.enumerate()
			.map(|(position, key)| (key.as_str(), position))
			.collect();
		let column_positions: HashMap<&str, usize> = column_keys
			.iter()
			.enumerate()
			.map(|(position, key)| (key.as_str(), position))
			.collect();
		let mut cells: Vec<Option<usize>> = vec![None; row_keys.len() * column_keys.len()];
		for row in 0..nrows {
			let row_key = index_column.value(row).to_string();
			let column_key = columns_column.value(row).to_string();
			let cell = row_positions[row_key.as_str()] * column_keys.len()
				+ column_positions[column_key.as_str()];
			if cells[cell].is_some() {
				bail!(
					"index contains duplicate entries, cannot reshape: ({}, {})",
					row_key,
					column_key
				);
			}
			cells[cell] = Some(row);
		}
		let first_rows: Vec<usize> = row_keys
			.iter()
			.map(|key| {
				(0..nrows)
					.find(|row| &index_column.value(*row).to_string() == key)
					.unwrap_or(0)
			})
			.collect();
		let mut output = vec![index_column.take(&first_rows)];
		for (position, key) in column_keys.iter().enumerate() {
			let source = |row_position: usize| cells[row_position * column_keys.len() + position];
			let column = match values_column {
				Column::Text(values_column) => Column::Text(TextColumn {
					name: key.clone(),
					data: (0..row_keys.len())
						.map(|row_position| {
							source(row_position)
								.map(|row| values_column.data[row].clone())
								.unwrap_or_default()
						})
						.collect(),
				}),
				_ => Column::Number(NumberColumn {
					name: key.clone(),
					data: (0..row_keys.len())
						.map(|row_position| {
							source(row_position)
								.and_then(|row| values_column.value(row).as_number())
								.unwrap_or(f64::NAN)
						})
						.collect(),
				}),
			};
			output.push(column);
		}
		Ok(DataFrame { columns: output })
	}
}

#[cfg(test)]
fn distribution() -> DataFrame {
	let csv = "Phase,negative,neutral,positive
Phase 1,10,4,2
Phase 2,3,5,12
";
	DataFrame::from_csv(
		&mut csv::Reader::from_reader(std::io::Cursor::new(csv)),
		FromCsvOptions::default(),
	)
	.unwrap()
}

#[test]
fn test_melt() {
	let df = distribution();
	let long = df
		.melt("Phase", &["negative", "neutral", "positive"], "Sentimen", "Jumlah")
		.unwrap();
	assert_eq!(long.column_names(), vec!["Phase", "Sentimen", "Jumlah"]);
	assert_eq!(long.nrows(), 6);
	let rows: Vec<String> = (0..long.nrows())
		.map(|index| long.row(index).iter().map(|value| value.to_string()).join(" "))
		.collect();
	insta::assert_debug_snapshot!(rows, @r###"
 [
     "Phase 1 negative 10",
     "Phase 2 negative 3",
     "Phase 1 neutral 4",
     "Phase 2 neutral 5",
     "Phase 1 positive 2",
     "Phase 2 positive 12",
 ]
 "###);
	assert!(df.melt("Phase", &["mixed"], "Sentimen", "Jumlah").is_err());
}

#[test]
fn test_pivot_inverts_melt() {
	let df = distribution();
	let long = df
		.melt("Phase", &["negative", "neutral", "positive"], "Sentimen", "Jumlah")
		.unwrap();
	let wide = long.pivot("Phase", "Sentimen", "Jumlah").unwrap();
	assert_eq!(wide, df);
}

#[test]
fn test_pivot_missing_and_duplicate() {
	let csv = "Phase,Sentimen,Jumlah
Phase 1,negative,1
Phase 2,positive,2
";
	let df = DataFrame::from_csv(
		&mut csv::Reader::from_reader(std::io::Cursor::new(csv)),
		FromCsvOptions::default(),
	)
	.unwrap();
	let wide = df.pivot("Phase", "Sentimen", "Jumlah").unwrap();
	assert_eq!(wide.column_names(), vec!["Phase", "negative", "positive"]);
	assert!(wide.row(1)[1].is_missing());
	let csv = "Phase,Sentimen,Jumlah
Phase 1,negative,1
Phase 1,negative,2
";
	let df = DataFrame::from_csv(
		&mut csv::Reader::from_reader(std::io::Cursor::new(csv)),
		FromCsvOptions::default(),
	)
	.unwrap();
	assert!(df.pivot("Phase", "Sentimen", "Jumlah").is_err());
}
