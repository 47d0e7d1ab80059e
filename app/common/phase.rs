use crate::config::PhaseOrder;
use anyhow::{bail, Result};
use buli_dataframe::DataFrame;
use std::{cmp::Ordering, collections::HashSet};

/// The sentiment columns of the phase aggregate, in the order they are charted.
pub const SENTIMENTS: [&str; 3] = ["negative", "neutral", "positive"];

/// The per phase sentiment counts in long form, one row per phase and sentiment, sorted by phase.
#[derive(Clone, Debug)]
pub struct PhaseTrend {
	pub phases: Vec<String>,
	pub long: DataFrame,
}

pub fn compare_phases(a: &str, b: &str, order: PhaseOrder) -> Ordering {
	match order {
		PhaseOrder::Lexicographic => a.cmp(b),
		PhaseOrder::Natural => natural_cmp(a, b),
	}
}

/// Compare two strings, treating each run of ascii digits as a single number.
fn natural_cmp(a: &str, b: &str) -> Ordering {
	let mut a = a.chars().peekable();
	let mut b = b.chars().peekable();
	loop {
		match (a.peek().copied(), b.peek().copied()) {
			(None, None) => return Ordering::Equal,
			(None, Some(_)) => return Ordering::Less,
			(Some(_), None) => return Ordering::Greater,
			(Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
				let mut x_digits = String::new();
				while let Some(c) = a.peek().copied().filter(char::is_ascii_digit) {
					x_digits.push(c);
					a.next();
				}
				let mut y_digits = String::new();
				while let Some(c) = b.peek().copied().filter(char::is_ascii_digit) {
					y_digits.push(c);
					b.next();
				}
				let x_trimmed = x_digits.trim_start_matches('0');
				let y_trimmed = y_digits.trim_start_matches('0');
				let ordering = x_trimmed
					.len()
					.cmp(&y_trimmed.len())
					.then_with(|| x_trimmed.cmp(y_trimmed))
					.then_with(|| x_digits.len().cmp(&y_digits.len()));
				if ordering != Ordering::Equal {
					return ordering;
				}
			}
			(Some(x), Some(y)) => {
				if x != y {
					return x.cmp(&y);
				}
				a.next();
				b.next();
			}
		}
	}
}

/// Reshape the phase aggregate into long form with the columns `Phase`, `Sentimen` and `Jumlah`, and sort it by phase. Phases must be unique.
pub fn phase_trend(aggregate: &DataFrame, order: PhaseOrder) -> Result<PhaseTrend> {
	let long = aggregate.melt("Phase", &SENTIMENTS, "Sentimen", "Jumlah")?;
	let phase_column = aggregate
		.column("Phase")
		.ok_or_else(|| anyhow::format_err!("column 'Phase' does not exist"))?;
	let mut phases: Vec<String> = (0..phase_column.len())
		.map(|row| phase_column.value(row).to_string())
		.collect();
	let mut seen = HashSet::new();
	for phase in phases.iter() {
		if !seen.insert(phase.as_str()) {
			bail!("phase '{}' appears more than once", phase);
		}
	}
	phases.sort_by(|a, b| compare_phases(a, b, order));
	let long_phases = long
		.column("Phase")
		.ok_or_else(|| anyhow::format_err!("column 'Phase' does not exist"))?;
	let position = |row: usize| {
		let phase = long_phases.value(row).to_string();
		phases.iter().position(|p| *p == phase).unwrap_or(phases.len())
	};
	let mut rows: Vec<usize> = (0..long.nrows()).collect();
	// The sort is stable, so within a phase the sentiments keep their order.
	rows.sort_by_key(|row| position(*row));
	let long = long.take(&rows);
	Ok(PhaseTrend { phases, long })
}

/// Rename the phase aggregate's columns for display: `Phase` becomes `Fasa`, and so does the word in its values.
pub fn prepare_sentiment(aggregate: DataFrame) -> Result<DataFrame> {
	aggregate
		.rename_column("Phase", "Fasa")
		.replace_in_column("Fasa", "Phase", "Fasa")
}

/// Rename the phase tagged predictions the same way as the aggregate, and `Sentiment_Bert` to `Sentimen`.
pub fn prepare_tweets(tweets: DataFrame) -> Result<DataFrame> {
	tweets
		.rename_column("Sentiment_Bert", "Sentimen")
		.rename_column("Phase", "Fasa")
		.replace_in_column("Fasa", "Phase", "Fasa")
}

const TWEET_COLUMNS: &[&str] = &["Username", "Tweet", "Sentimen"];

/// The tweets of one phase, restricted to the columns shown in the tweet list.
pub fn tweets_for_phase(tweets: &DataFrame, fasa: &str) -> Result<DataFrame> {
	let filtered = tweets.filter("Fasa", fasa)?;
	let columns: Vec<&str> = TWEET_COLUMNS
		.iter()
		.copied()
		.filter(|column_name| filtered.has_column(column_name))
		.collect();
	filtered.select(&columns)
}

/// The positive, neutral and negative counts of the aggregate row `row`. Missing and negative counts are zero.
pub fn phase_counts(aggregate: &DataFrame, row: usize) -> [f64; 3] {
	let count = |column_name: &str| {
		aggregate
			.column(column_name)
			.and_then(|column| column.value(row).as_number())
			.filter(|value| *value > 0.0)
			.unwrap_or(0.0)
	};
	[count("positive"), count("neutral"), count("negative")]
}

#[cfg(test)]
fn aggregate(csv: &str) -> DataFrame {
	let file = tempfile::NamedTempFile::new().unwrap();
	std::fs::write(file.path(), csv).unwrap();
	super::load::read_csv(file.path()).unwrap()
}

#[test]
fn test_natural_cmp() {
	assert_eq!(natural_cmp("Phase 2", "Phase 10"), Ordering::Less);
	assert_eq!(natural_cmp("Phase 10", "Phase 10"), Ordering::Equal);
	assert_eq!(natural_cmp("Phase 02", "Phase 2"), Ordering::Greater);
	assert_eq!(natural_cmp("Fasa 1", "Phase 1"), Ordering::Less);
	assert_eq!(natural_cmp("Phase 1", "Phase 1a"), Ordering::Less);
}

#[test]
fn test_phase_trend_lexicographic_order() {
	let aggregate = aggregate(
		"Phase,negative,neutral,positive\nPhase 2,3,5,12\nPhase 10,1,1,1\nPhase 1,4,0,2\n",
	);
	let trend = phase_trend(&aggregate, PhaseOrder::Lexicographic).unwrap();
	assert_eq!(trend.phases, vec!["Phase 1", "Phase 10", "Phase 2"]);
	let rows: Vec<String> = (0..trend.long.nrows())
		.map(|row| {
			trend
				.long
				.row(row)
				.iter()
				.map(|value| value.to_string())
				.collect::<Vec<_>>()
				.join(" | ")
		})
		.collect();
	insta::assert_debug_snapshot!(rows, @r###"
 [
     "Phase 1 | negative | 4",
     "Phase 1 | neutral | 0",
     "Phase 1 | positive | 2",
     "Phase 10 | negative | 1",
     "Phase 10 | neutral | 1",
     "Phase 10 | positive | 1",
     "Phase 2 | negative | 3",
     "Phase 2 | neutral | 5",
     "Phase 2 | positive | 12",
 ]
 "###);
	let natural = phase_trend(&aggregate, PhaseOrder::Natural).unwrap();
	assert_eq!(natural.phases, vec!["Phase 1", "Phase 2", "Phase 10"]);
}

#[test]
fn test_phase_trend_round_trip() {
	let aggregate = aggregate(
		"Phase,negative,neutral,positive\nPhase 1,4,0,2\nPhase 2,3,5,12\nPhase 3,7,2,9\n",
	);
	let trend = phase_trend(&aggregate, PhaseOrder::Lexicographic).unwrap();
	let wide = trend.long.pivot("Phase", "Sentimen", "Jumlah").unwrap();
	assert_eq!(
		wide.column_names(),
		vec!["Phase", "negative", "neutral", "positive"]
	);
	for row in 0..aggregate.nrows() {
		let phase = aggregate.column("Phase").unwrap().value(row).to_string();
		let wide_row = wide.filter("Phase", &phase).unwrap();
		assert_eq!(wide_row.nrows(), 1);
		for sentiment in SENTIMENTS.iter() {
			assert_eq!(
				wide_row.column(sentiment).unwrap().value(0).as_number(),
				aggregate.column(sentiment).unwrap().value(row).as_number(),
			);
		}
	}
}

#[test]
fn test_phase_trend_errors() {
	let duplicated = aggregate("Phase,negative,neutral,positive\nPhase 1,1,2,3\nPhase 1,4,5,6\n");
	let error = phase_trend(&duplicated, PhaseOrder::Lexicographic).unwrap_err();
	assert_eq!(error.to_string(), "phase 'Phase 1' appears more than once");
	let missing_sentiment = aggregate("Phase,negative,neutral\nPhase 1,1,2\n");
	let error = phase_trend(&missing_sentiment, PhaseOrder::Lexicographic).unwrap_err();
	assert_eq!(error.to_string(), "column 'positive' does not exist");
}

#[test]
fn test_prepare_and_filter_tweets() {
	let sentiment = prepare_sentiment(aggregate(
		"Phase,negative,neutral,positive\nPhase 1,4,0,2\nPhase 2,3,5,12\n",
	))
	.unwrap();
	assert_eq!(
		sentiment.column_names(),
		vec!["Fasa", "negative", "neutral", "positive"]
	);
	assert_eq!(sentiment.column("Fasa").unwrap().value(1).to_string(), "Fasa 2");
	assert_eq!(phase_counts(&sentiment, 1), [12.0, 5.0, 3.0]);
	let tweets = prepare_tweets(aggregate(
		"Username,Tweet,Sentiment_Bert,Phase,Confidence\nali,kesian mangsa,negative,Phase 2,0.9\nabu,tahniah,positive,Phase 2,0.8\nmat,siasat,neutral,Phase 3,0.7\n",
	))
	.unwrap();
	let phase_2 = tweets_for_phase(&tweets, "Fasa 2").unwrap();
	assert_eq!(phase_2.column_names(), vec!["Username", "Tweet", "Sentimen"]);
	assert_eq!(phase_2.nrows(), 2);
	let phase_1 = tweets_for_phase(&tweets, "Fasa 1").unwrap();
	assert!(phase_1.is_empty());
	let error = prepare_tweets(aggregate("Username,Tweet\nali,kesian\n")).unwrap_err();
	assert_eq!(error.to_string(), "column 'Fasa' does not exist");
}

#[test]
fn test_phase_counts_clamp_missing_and_negative() {
	let aggregate = aggregate("Fasa,negative,neutral\nFasa 1,-2,\n");
	assert_eq!(phase_counts(&aggregate, 0), [0.0, 0.0, 0.0]);
}
