use crate::{common::error::Error, Context};
use anyhow::Result;
use hyper::{header, Body, Response, StatusCode};
use std::path::Path;

const STYLES: &str = include_str!("styles.css");

fn content_type(path: &str) -> Option<&'static str> {
	let extension = Path::new(path)
		.extension()
		.and_then(|extension| extension.to_str())
		.map(|extension| extension.to_ascii_lowercase());
	match extension.as_deref() {
		Some("jpg") | Some("jpeg") => Some("image/jpeg"),
		Some("png") => Some("image/png"),
		Some("svg") => Some("image/svg+xml"),
		_ => None,
	}
}

pub fn is_image(file_name: &str) -> bool {
	content_type(file_name)
		.map(|content_type| content_type.starts_with("image/"))
		.unwrap_or(false)
}

/// The href of an image in the data directory, if the file exists and can be served.
pub fn image_href(context: &Context, file_name: &str) -> Option<String> {
	let servable = is_image(file_name)
		&& !file_name.starts_with('.')
		&& !file_name.contains(|c| c == '/' || c == '\\');
	if servable && context.data_path(file_name).is_file() {
		Some(format!("/{}", file_name))
	} else {
		None
	}
}

pub fn styles() -> Result<Response<Body>> {
	let response = Response::builder()
		.status(StatusCode::OK)
		.header(header::CONTENT_TYPE, "text/css; charset=utf-8")
		.body(Body::from(STYLES))?;
	Ok(response)
}

pub async fn image(context: &Context, file_name: &str) -> Result<Response<Body>> {
	if file_name.starts_with('.') || file_name.contains('\\') {
		return Err(Error::BadRequest.into());
	}
	let content_type = content_type(file_name).ok_or(Error::NotFound)?;
	let data = std::fs::read(context.data_path(file_name)).map_err(|_| Error::NotFound)?;
	let response = Response::builder()
		.status(StatusCode::OK)
		.header(header::CONTENT_TYPE, content_type)
		.body(Body::from(data))?;
	Ok(response)
}

#[test]
fn test_content_type() {
	assert_eq!(content_type("buli_ipta.jpg"), Some("image/jpeg"));
	assert_eq!(content_type("BULI.JPEG"), Some("image/jpeg"));
	assert_eq!(content_type("logo.svg"), Some("image/svg+xml"));
	assert_eq!(content_type("svm_results.csv"), None);
	assert!(is_image("chart.png"));
	assert!(!is_image("styles.css"));
	assert!(!is_image("png"));
}
