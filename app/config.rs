/*!
This module defines the `Config` struct, which is read from the json file passed to `buli app --config` or `buli check --config`. Every field is optional, and anything left out falls back to the defaults in [`DataFiles`].
*/

use anyhow::{Context, Result};
use std::path::Path;

#[derive(Debug, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
	pub files: Option<FilesConfig>,
	pub phase_order: Option<PhaseOrder>,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilesConfig {
	pub svm_accuracy: Option<String>,
	pub bert_accuracy: Option<String>,
	pub svm_classification_report: Option<String>,
	pub bert_classification_report: Option<String>,
	pub svm_results: Option<String>,
	pub bert_results: Option<String>,
	pub phase_distribution: Option<String>,
	pub phase_results: Option<String>,
	pub landing_image: Option<String>,
}

/// The order of the phases along the x axis of the trend chart.
#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize)]
pub enum PhaseOrder {
	/// Compare phase labels as plain strings, so "Phase 10" comes before "Phase 2".
	#[serde(rename = "lexicographic")]
	Lexicographic,
	/// Compare runs of digits by their numeric value, so "Phase 2" comes before "Phase 10".
	#[serde(rename = "natural")]
	Natural,
}

impl Default for PhaseOrder {
	fn default() -> Self {
		PhaseOrder::Lexicographic
	}
}

impl Config {
	pub fn from_path(path: &Path) -> Result<Config> {
		let config = std::fs::read_to_string(path)
			.with_context(|| format!("failed to read config file {}", path.display()))?;
		let config = serde_json::from_str(&config)
			.with_context(|| format!("failed to parse config file {}", path.display()))?;
		Ok(config)
	}
}

/// The names of the artifacts, relative to the data directory.
#[derive(Clone, Debug, PartialEq)]
pub struct DataFiles {
	pub svm_accuracy: String,
	pub bert_accuracy: String,
	pub svm_classification_report: String,
	pub bert_classification_report: String,
	pub svm_results: String,
	pub bert_results: String,
	pub phase_distribution: String,
	pub phase_results: String,
	pub landing_image: String,
}

impl Default for DataFiles {
	fn default() -> Self {
		DataFiles {
			svm_accuracy: "svm_accuracy.csv".to_owned(),
			bert_accuracy: "bert_accuracy.csv".to_owned(),
			svm_classification_report: "svm_classification_report.csv".to_owned(),
			bert_classification_report: "bert_classification_report.csv".to_owned(),
			svm_results: "svm_results.csv".to_owned(),
			bert_results: "bert_results.csv".to_owned(),
			phase_distribution: "sentiment_distribution_by_phase.csv".to_owned(),
			phase_results: "bert_results_with_phase.csv".to_owned(),
			landing_image: "buli_ipta.jpg".to_owned(),
		}
	}
}

impl DataFiles {
	pub fn from_config(config: Option<FilesConfig>) -> DataFiles {
		let defaults = DataFiles::default();
		let config = config.unwrap_or_default();
		DataFiles {
			svm_accuracy: config.svm_accuracy.unwrap_or(defaults.svm_accuracy),
			bert_accuracy: config.bert_accuracy.unwrap_or(defaults.bert_accuracy),
			svm_classification_report: config
				.svm_classification_report
				.unwrap_or(defaults.svm_classification_report),
			bert_classification_report: config
				.bert_classification_report
				.unwrap_or(defaults.bert_classification_report),
			svm_results: config.svm_results.unwrap_or(defaults.svm_results),
			bert_results: config.bert_results.unwrap_or(defaults.bert_results),
			phase_distribution: config
				.phase_distribution
				.unwrap_or(defaults.phase_distribution),
			phase_results: config.phase_results.unwrap_or(defaults.phase_results),
			landing_image: config.landing_image.unwrap_or(defaults.landing_image),
		}
	}
}

#[test]
fn test_config_overrides_defaults() {
	let config: Config = serde_json::from_str(
		r#"{ "files": { "svm_results": "svm_run2.csv" }, "phase_order": "natural" }"#,
	)
	.unwrap();
	assert_eq!(config.phase_order, Some(PhaseOrder::Natural));
	let files = DataFiles::from_config(config.files);
	assert_eq!(files.svm_results, "svm_run2.csv");
	assert_eq!(files.bert_results, "bert_results.csv");
	assert_eq!(files.landing_image, "buli_ipta.jpg");
}

#[test]
fn test_config_rejects_unknown_fields() {
	let result = serde_json::from_str::<Config>(r#"{ "files": { "svm_result": "a.csv" } }"#);
	assert!(result.is_err());
	let result = serde_json::from_str::<Config>(r#"{ "phase_order": "random" }"#);
	assert!(result.is_err());
}

#[test]
fn test_config_from_path() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("buli.json");
	std::fs::write(&path, r#"{ "phase_order": "lexicographic" }"#).unwrap();
	let config = Config::from_path(&path).unwrap();
	assert_eq!(config.phase_order, Some(PhaseOrder::Lexicographic));
	assert!(config.files.is_none());
	let error = Config::from_path(&dir.path().join("missing.json")).unwrap_err();
	assert!(error.to_string().starts_with("failed to read config file"));
}
