use crate::{
	common::{
		accuracy::read_accuracy,
		category::category_breakdown,
		load::{read_csv, read_csv_or_empty, DataError},
		phase::{phase_trend, prepare_sentiment, prepare_tweets},
	},
	config::{DataFiles, PhaseOrder},
};
use itertools::Itertools;
use std::{fmt, path::Path};

/// The outcome of loading one artifact.
#[derive(Clone, Debug, PartialEq)]
pub struct ArtifactReport {
	pub file: String,
	/// What was found when the artifact loaded, such as its row count.
	pub summary: Option<String>,
	pub problems: Vec<String>,
}

impl ArtifactReport {
	pub fn is_ok(&self) -> bool {
		self.problems.is_empty()
	}
}

impl fmt::Display for ArtifactReport {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		if self.is_ok() {
			write!(f, "ok       {}", self.file)?;
			if let Some(summary) = &self.summary {
				write!(f, " ({})", summary)?;
			}
			Ok(())
		} else {
			write!(f, "problem  {}: {}", self.file, self.problems.iter().join("; "))
		}
	}
}

fn rows(n: usize) -> String {
	if n == 1 {
		"1 row".to_owned()
	} else {
		format!("{} rows", n)
	}
}

/// Load every artifact in `data_dir` the way the pages do, and report what went wrong with each.
pub fn check(data_dir: &Path, files: &DataFiles, phase_order: PhaseOrder) -> Vec<ArtifactReport> {
	let mut reports = Vec::new();

	for file in [&files.svm_accuracy, &files.bert_accuracy].iter() {
		let mut errors = Vec::new();
		let accuracy = read_accuracy(&data_dir.join(file), &mut errors);
		reports.push(ArtifactReport {
			file: file.to_string(),
			summary: accuracy.map(|accuracy| format!("accuracy {}", accuracy)),
			problems: errors.iter().map(ToString::to_string).collect(),
		});
	}

	for file in [
		&files.svm_classification_report,
		&files.bert_classification_report,
	]
	.iter()
	{
		let mut errors = Vec::new();
		let report = read_csv_or_empty(&data_dir.join(file), &mut errors);
		reports.push(ArtifactReport {
			file: file.to_string(),
			summary: Some(rows(report.nrows())),
			problems: errors.iter().map(ToString::to_string).collect(),
		});
	}

	for file in [&files.svm_results, &files.bert_results].iter() {
		let mut errors = Vec::new();
		let results = read_csv_or_empty(&data_dir.join(file), &mut errors);
		let mut problems: Vec<String> = errors.iter().map(ToString::to_string).collect();
		let summary = match category_breakdown(&results, None) {
			Ok(Some(breakdown)) => Some(format!(
				"{}, {} categories",
				rows(results.nrows()),
				breakdown.counts.len()
			)),
			Ok(None) => {
				if problems.is_empty() {
					problems.push("no tweets with a 'Predicted' category".to_owned());
				}
				None
			}
			Err(error) => {
				problems.push(format!("{:#}", error));
				None
			}
		};
		reports.push(ArtifactReport {
			file: file.to_string(),
			summary,
			problems,
		});
	}

	let distribution_path = data_dir.join(&files.phase_distribution);
	let mut problems = Vec::new();
	let trend = read_csv(&distribution_path)
		.and_then(|aggregate| phase_trend(&aggregate, phase_order));
	let summary = match trend {
		Ok(trend) => Some(format!("{} phases", trend.phases.len())),
		Err(error) => {
			problems.push(
				DataError::PhaseTrend {
					file: files.phase_distribution.clone(),
					cause: format!("{:#}", error),
				}
				.to_string(),
			);
			None
		}
	};
	if let Err(error) = read_csv(&distribution_path).and_then(prepare_sentiment) {
		problems.push(DataError::PhaseSentiment(format!("{:#}", error)).to_string());
	}
	reports.push(ArtifactReport {
		file: files.phase_distribution.clone(),
		summary,
		problems,
	});

	let tweets = read_csv(&data_dir.join(&files.phase_results)).and_then(prepare_tweets);
	reports.push(match tweets {
		Ok(tweets) => ArtifactReport {
			file: files.phase_results.clone(),
			summary: Some(rows(tweets.nrows())),
			problems: Vec::new(),
		},
		Err(error) => ArtifactReport {
			file: files.phase_results.clone(),
			summary: None,
			problems: vec![DataError::PhaseTweets(format!("{:#}", error)).to_string()],
		},
	});

	// The landing page renders without its image.
	let image_found = data_dir.join(&files.landing_image).is_file();
	reports.push(ArtifactReport {
		file: files.landing_image.clone(),
		summary: Some(if image_found { "found" } else { "not found, optional" }.to_owned()),
		problems: Vec::new(),
	});

	reports
}

#[cfg(test)]
fn write_artifacts(dir: &Path) {
	let files = [
		("svm_accuracy.csv", "Accuracy\n0.82\n"),
		("bert_accuracy.csv", "Ketepatan\n0.91\n"),
		(
			"svm_classification_report.csv",
			",precision,recall,f1-score,support\nnegative,0.8,0.9,0.85,10\npositive,0.75,0.6,0.67,5\n",
		),
		(
			"bert_classification_report.csv",
			",precision,recall,f1-score,support\nnegative,0.9,0.95,0.92,10\n",
		),
		(
			"svm_results.csv",
			"Tweet,Actual,Predicted\nt1,negative,negative\nt2,positive,positive\nt3,neutral,negative\n",
		),
		(
			"sentiment_distribution_by_phase.csv",
			"Phase,negative,neutral,positive\nPhase 1,4,0,2\nPhase 2,3,5,12\n",
		),
		(
			"bert_results_with_phase.csv",
			"Username,Tweet,Sentiment_Bert,Phase\nali,kesian mangsa,negative,Phase 2\n",
		),
	];
	for (file, contents) in files.iter() {
		std::fs::write(dir.join(file), contents).unwrap();
	}
}

#[test]
fn test_check_reports_each_artifact() {
	let dir = tempfile::tempdir().unwrap();
	write_artifacts(dir.path());
	let reports = check(dir.path(), &DataFiles::default(), PhaseOrder::Lexicographic);
	let lines: Vec<String> = reports.iter().map(ToString::to_string).collect();
	insta::assert_debug_snapshot!(&lines[2..5], @r###"
 [
     "ok       svm_classification_report.csv (2 rows)",
     "ok       bert_classification_report.csv (1 row)",
     "ok       svm_results.csv (3 rows, 2 categories)",
 ]
 "###);
	assert_eq!(lines[0], "ok       svm_accuracy.csv (accuracy 0.82)");
	assert!(lines[1].starts_with("problem  bert_accuracy.csv: Ralat membaca ketepatan dari '"));
	assert!(lines[1].ends_with("': fail tidak mengandungi lajur 'Accuracy'"));
	assert!(lines[5].starts_with("problem  bert_results.csv: Gagal membaca fail '"));
	assert_eq!(lines[6], "ok       sentiment_distribution_by_phase.csv (2 phases)");
	assert_eq!(lines[7], "ok       bert_results_with_phase.csv (1 row)");
	assert_eq!(lines[8], "ok       buli_ipta.jpg (not found, optional)");
	let failed = reports.iter().filter(|report| !report.is_ok()).count();
	assert_eq!(failed, 2);
}

#[test]
fn test_check_phase_artifacts() {
	let dir = tempfile::tempdir().unwrap();
	std::fs::write(
		dir.path().join("sentiment_distribution_by_phase.csv"),
		"Phase,negative,neutral,positive\nPhase 1,4,0,2\nPhase 1,3,5,12\n",
	)
	.unwrap();
	std::fs::write(
		dir.path().join("bert_results_with_phase.csv"),
		"Username,Tweet\nali,kesian mangsa\n",
	)
	.unwrap();
	let reports = check(dir.path(), &DataFiles::default(), PhaseOrder::Natural);
	assert_eq!(
		reports[6].problems,
		vec!["Gagal baca atau paparkan fail sentiment_distribution_by_phase.csv: phase 'Phase 1' appears more than once"]
	);
	assert_eq!(
		reports[7].problems,
		vec!["Gagal membaca fail tweets: column 'Fasa' does not exist"]
	);
}
