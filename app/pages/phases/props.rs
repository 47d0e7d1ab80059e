use crate::{
	common::{
		load::{read_csv, DataError},
		phase::{
			phase_counts, phase_trend, prepare_sentiment, prepare_tweets, tweets_for_phase,
			PhaseTrend, SENTIMENTS,
		},
	},
	Context,
};
use anyhow::Result;
use buli_dataframe::DataFrame;

pub struct Props {
	pub trend: Result<TrendChart, String>,
	pub errors: Vec<String>,
	/// One section per row of the phase aggregate, or `None` when either artifact could not be prepared.
	pub phases: Option<Vec<PhaseSection>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrendChart {
	pub phases: Vec<String>,
	/// For each sentiment, its count in each phase, in the order of `phases`.
	pub series: Vec<(String, Vec<Option<f64>>)>,
}

#[derive(Clone)]
pub struct PhaseSection {
	pub fasa: String,
	/// The positive, neutral and negative counts.
	pub counts: [f64; 3],
	pub tweets: DataFrame,
}

fn trend_chart(trend: PhaseTrend) -> Result<TrendChart> {
	let PhaseTrend { phases, long } = trend;
	let column = |name: &str| {
		long.column(name)
			.ok_or_else(|| anyhow::format_err!("column '{}' does not exist", name))
	};
	let phase_column = column("Phase")?;
	let sentiment_column = column("Sentimen")?;
	let count_column = column("Jumlah")?;
	let mut series: Vec<(String, Vec<Option<f64>>)> = SENTIMENTS
		.iter()
		.map(|sentiment| (sentiment.to_string(), vec![None; phases.len()]))
		.collect();
	for row in 0..long.nrows() {
		let phase = phase_column.value(row).to_string();
		let sentiment = sentiment_column.value(row).to_string();
		let position = phases.iter().position(|p| *p == phase);
		let values = series
			.iter_mut()
			.find(|(s, _)| *s == sentiment)
			.map(|(_, values)| values);
		if let (Some(position), Some(values)) = (position, values) {
			values[position] = count_column.value(row).as_number();
		}
	}
	Ok(TrendChart { phases, series })
}

pub fn props(context: &Context) -> Result<Props> {
	let files = &context.options.files;
	let distribution_path = context.data_path(&files.phase_distribution);
	let tweets_path = context.data_path(&files.phase_results);

	let trend = read_csv(&distribution_path)
		.and_then(|aggregate| phase_trend(&aggregate, context.options.phase_order))
		.and_then(trend_chart)
		.map_err(|error| {
			let error = DataError::PhaseTrend {
				file: files.phase_distribution.clone(),
				cause: format!("{:#}", error),
			};
			log::warn!("{}", error);
			error.to_string()
		});

	let mut errors = Vec::new();
	let sentiment = match read_csv(&distribution_path).and_then(prepare_sentiment) {
		Ok(sentiment) => Some(sentiment),
		Err(error) => {
			errors.push(DataError::PhaseSentiment(format!("{:#}", error)));
			None
		}
	};
	let tweets = match read_csv(&tweets_path).and_then(prepare_tweets) {
		Ok(tweets) => Some(tweets),
		Err(error) => {
			errors.push(DataError::PhaseTweets(format!("{:#}", error)));
			None
		}
	};
	for error in errors.iter() {
		log::warn!("{}", error);
	}

	let phases = match (sentiment, tweets) {
		(Some(sentiment), Some(tweets)) => {
			let mut sections = Vec::new();
			if let Some(fasa_column) = sentiment.column("Fasa") {
				for row in 0..sentiment.nrows() {
					let fasa = fasa_column.value(row).to_string();
					let tweets = tweets_for_phase(&tweets, &fasa)?;
					sections.push(PhaseSection {
						counts: phase_counts(&sentiment, row),
						fasa,
						tweets,
					});
				}
			}
			Some(sections)
		}
		_ => None,
	};

	Ok(Props {
		trend,
		errors: errors.iter().map(|error| error.to_string()).collect(),
		phases,
	})
}

#[cfg(test)]
pub fn write_artifacts(dir: &std::path::Path) {
	std::fs::write(
		dir.join("sentiment_distribution_by_phase.csv"),
		"Phase,negative,neutral,positive\nPhase 1,4,0,2\nPhase 2,3,5,12\nPhase 10,1,1,1\n",
	)
	.unwrap();
	std::fs::write(
		dir.join("bert_results_with_phase.csv"),
		"Username,Tweet,Sentiment_Bert,Phase\nali,kesian mangsa,negative,Phase 2\nabu,tahniah polis,positive,Phase 2\nmat,siasat segera,neutral,Phase 1\n",
	)
	.unwrap();
}

#[test]
fn test_props() {
	let dir = tempfile::tempdir().unwrap();
	write_artifacts(dir.path());
	let phase_props = props(&crate::test_context(dir.path())).unwrap();
	assert!(phase_props.errors.is_empty());
	let trend = phase_props.trend.unwrap();
	assert_eq!(trend.phases, vec!["Phase 1", "Phase 10", "Phase 2"]);
	insta::assert_debug_snapshot!(trend.series, @r###"
 [
     (
         "negative",
         [
             Some(
                 4.0,
             ),
             Some(
                 1.0,
             ),
             Some(
                 3.0,
             ),
         ],
     ),
     (
         "neutral",
         [
             Some(
                 0.0,
             ),
             Some(
                 1.0,
             ),
             Some(
                 5.0,
             ),
         ],
     ),
     (
         "positive",
         [
             Some(
                 2.0,
             ),
             Some(
                 1.0,
             ),
             Some(
                 12.0,
             ),
         ],
     ),
 ]
 "###);
	let phases = phase_props.phases.unwrap();
	let fasa: Vec<&str> = phases.iter().map(|phase| phase.fasa.as_str()).collect();
	assert_eq!(fasa, vec!["Fasa 1", "Fasa 2", "Fasa 10"]);
	assert_eq!(phases[1].counts, [12.0, 5.0, 3.0]);
	assert_eq!(phases[1].tweets.nrows(), 2);
	assert_eq!(phases[1].tweets.column_names(), vec!["Username", "Tweet", "Sentimen"]);
	assert!(phases[2].tweets.is_empty());
}

#[test]
fn test_props_with_missing_artifacts() {
	let dir = tempfile::tempdir().unwrap();
	write_artifacts(dir.path());
	std::fs::remove_file(dir.path().join("bert_results_with_phase.csv")).unwrap();
	let without_tweets = props(&crate::test_context(dir.path())).unwrap();
	assert!(without_tweets.trend.is_ok());
	assert!(without_tweets.phases.is_none());
	assert_eq!(without_tweets.errors.len(), 1);
	assert!(without_tweets.errors[0].starts_with("Gagal membaca fail tweets: "));

	std::fs::write(
		dir.path().join("sentiment_distribution_by_phase.csv"),
		"Phase,negative,neutral\nPhase 1,4,0\n",
	)
	.unwrap();
	let without_positive = props(&crate::test_context(dir.path())).unwrap();
	assert_eq!(
		without_positive.trend.unwrap_err(),
		"Gagal baca atau paparkan fail sentiment_distribution_by_phase.csv: column 'positive' does not exist"
	);
}
