use anyhow::Result;
use buli_dataframe::DataFrame;

/// The number of filtered rows shown before the expander.
pub const PREVIEW_ROWS: usize = 10;
const PREVIEW_COLUMNS: &[&str] = &["Tweet", "Actual", "Predicted"];

#[derive(Clone, Debug)]
pub struct CategoryBreakdown {
	/// The count of each predicted category, largest first.
	pub counts: Vec<(String, usize)>,
	pub selected: String,
	/// The first rows of `filtered`, restricted to the tweet and its labels.
	pub preview: DataFrame,
	pub filtered: DataFrame,
}

/// Group a model's predictions by the `Predicted` column and filter them to the `requested` category. A category that does not occur falls back to the most common one. Returns `None` when there is nothing to break down.
pub fn category_breakdown(
	results: &DataFrame,
	requested: Option<&str>,
) -> Result<Option<CategoryBreakdown>> {
	if results.is_empty() || !results.has_column("Predicted") || !results.has_column("Tweet") {
		return Ok(None);
	}
	let counts = results.value_counts("Predicted")?;
	let selected = match requested {
		Some(requested) if counts.iter().any(|(category, _)| category == requested) => {
			requested.to_owned()
		}
		_ => match counts.first() {
			Some((category, _)) => category.clone(),
			None => return Ok(None),
		},
	};
	let filtered = results.filter("Predicted", &selected)?;
	let preview_columns: Vec<&str> = PREVIEW_COLUMNS
		.iter()
		.copied()
		.filter(|column_name| filtered.has_column(column_name))
		.collect();
	let preview = filtered.select(&preview_columns)?.head(PREVIEW_ROWS);
	Ok(Some(CategoryBreakdown {
		counts,
		selected,
		preview,
		filtered,
	}))
}

#[cfg(test)]
fn results(csv: &str) -> DataFrame {
	let file = tempfile::NamedTempFile::new().unwrap();
	std::fs::write(file.path(), csv).unwrap();
	super::load::read_csv(file.path()).unwrap()
}

#[cfg(test)]
fn svm_results() -> DataFrame {
	let mut csv = "Username,Tweet,Actual,Predicted\n".to_owned();
	for index in 0..14 {
		csv.push_str(&format!("user{},tweet negatif {},negative,negative\n", index, index));
		if index % 2 == 0 {
			csv.push_str(&format!("user{},tweet positif {},positive,positive\n", index, index));
		}
	}
	csv.push_str("userx,tweet neutral,neutral,neutral\n");
	results(&csv)
}

#[test]
fn test_category_breakdown_defaults_to_most_common() {
	let results = svm_results();
	let breakdown = category_breakdown(&results, None).unwrap().unwrap();
	insta::assert_debug_snapshot!(breakdown.counts, @r###"
 [
     (
         "negative",
         14,
     ),
     (
         "positive",
         7,
     ),
     (
         "neutral",
         1,
     ),
 ]
 "###);
	let total: usize = breakdown.counts.iter().map(|(_, count)| count).sum();
	assert_eq!(total, results.nrows());
	assert_eq!(breakdown.selected, "negative");
	assert_eq!(breakdown.filtered.nrows(), 14);
	assert_eq!(breakdown.preview.nrows(), PREVIEW_ROWS);
	assert_eq!(breakdown.preview.column_names(), vec!["Tweet", "Actual", "Predicted"]);
	assert_eq!(breakdown.filtered.ncols(), 4);
	// The preview is the start of the filtered rows, in their original order.
	for row in 0..PREVIEW_ROWS {
		assert_eq!(
			breakdown.preview.column("Tweet").unwrap().value(row),
			breakdown.filtered.column("Tweet").unwrap().value(row),
		);
	}
}

#[test]
fn test_category_breakdown_filters_the_requested_category() {
	let results = svm_results();
	let breakdown = category_breakdown(&results, Some("positive")).unwrap().unwrap();
	assert_eq!(breakdown.selected, "positive");
	assert_eq!(breakdown.filtered.nrows(), 7);
	let predicted = breakdown.filtered.column("Predicted").unwrap();
	assert!((0..predicted.len()).all(|row| predicted.value(row).to_string() == "positive"));
	let unknown = category_breakdown(&results, Some("marah")).unwrap().unwrap();
	assert_eq!(unknown.selected, "negative");
}

#[test]
fn test_category_breakdown_requires_predictions_and_tweets() {
	assert!(category_breakdown(&DataFrame::default(), None).unwrap().is_none());
	let without_tweets = results("Actual,Predicted\nnegative,negative\n");
	assert!(category_breakdown(&without_tweets, None).unwrap().is_none());
	let without_predictions = results("Tweet,Actual\nkesian,negative\n");
	assert!(category_breakdown(&without_predictions, None).unwrap().is_none());
	let only_tweets = results("Tweet,Predicted\nkesian,negative\n");
	let breakdown = category_breakdown(&only_tweets, None).unwrap().unwrap();
	assert_eq!(breakdown.preview.column_names(), vec!["Tweet", "Predicted"]);
}
