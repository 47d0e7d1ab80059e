//! This module contains the main entrypoint to the buli cli.

use anyhow::Result;
use buli_app::{check::check, Config, DataFiles};
use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[clap(
	about = "Dashboard for the sentiment analysis of bullying at public universities.",
	setting = clap::AppSettings::DisableHelpSubcommand,
)]
enum Options {
	#[clap(name = "app")]
	App(AppOptions),
	#[clap(name = "check")]
	Check(CheckOptions),
}

#[derive(Parser)]
#[clap(about = "run the app")]
#[clap(long_about = "serve the sentiment analysis dashboard")]
struct AppOptions {
	#[clap(long, help = "the path to a .json config file")]
	config: Option<PathBuf>,
	#[clap(
		long,
		env = "DATA_DIR",
		default_value = ".",
		help = "the directory holding the .csv artifacts"
	)]
	data_dir: PathBuf,
	#[clap(long, env = "HOST", default_value = "0.0.0.0")]
	host: std::net::IpAddr,
	#[clap(long, env = "PORT", default_value = "8501")]
	port: u16,
}

#[derive(Parser)]
#[clap(about = "check the artifacts")]
#[clap(long_about = "load every artifact the dashboard reads and report the problems with each")]
struct CheckOptions {
	#[clap(long, help = "the path to a .json config file")]
	config: Option<PathBuf>,
	#[clap(
		long,
		env = "DATA_DIR",
		default_value = ".",
		help = "the directory holding the .csv artifacts"
	)]
	data_dir: PathBuf,
}

fn main() {
	let options = Options::parse();
	let env_filter = ["buli", "buli_app", "buli_dataframe"]
		.iter()
		.map(|crate_name| format!("{}=info", crate_name))
		.collect::<Vec<_>>()
		.join(",");
	let env = env_logger::Env::default().default_filter_or(env_filter);
	env_logger::Builder::from_env(env)
		.format_level(false)
		.format_module_path(false)
		.format_timestamp(None)
		.init();
	let result = match options {
		Options::App(options) => cli_app(options),
		Options::Check(options) => cli_check(options),
	};
	if let Err(error) = result {
		eprintln!("{}: {:#}", "error".red().bold(), error);
		std::process::exit(1);
	}
}

fn load_config(path: Option<&Path>) -> Result<Config> {
	match path {
		Some(path) => Config::from_path(path),
		None => Ok(Config::default()),
	}
}

fn cli_app(options: AppOptions) -> Result<()> {
	let config = load_config(options.config.as_deref())?;
	buli_app::run(buli_app::Options {
		data_dir: options.data_dir,
		files: DataFiles::from_config(config.files),
		host: options.host,
		phase_order: config.phase_order.unwrap_or_default(),
		port: options.port,
	})
}

fn cli_check(options: CheckOptions) -> Result<()> {
	let config = load_config(options.config.as_deref())?;
	let files = DataFiles::from_config(config.files);
	let reports = check(
		&options.data_dir,
		&files,
		config.phase_order.unwrap_or_default(),
	);
	for report in reports.iter() {
		if report.is_ok() {
			println!("{}", report);
		} else {
			println!("{}", report.to_string().yellow());
		}
	}
	let failed = reports.iter().filter(|report| !report.is_ok()).count();
	if failed > 0 {
		anyhow::bail!("{} of {} artifacts failed to load", failed, reports.len());
	}
	Ok(())
}
