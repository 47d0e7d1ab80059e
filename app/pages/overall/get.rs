use super::{page::render, props::props};
use crate::{
	layouts::{document::PageInfo, page_layout::OVERALL_PATH},
	Context,
};
use anyhow::Result;
use hyper::{header, Body, Request, Response, StatusCode};
use std::collections::BTreeMap;

pub async fn get(
	context: &Context,
	_request: Request<Body>,
	search_params: Option<BTreeMap<String, String>>,
) -> Result<Response<Body>> {
	let props = props(context, search_params)?;
	let page_info = PageInfo {
		path: OVERALL_PATH.to_owned(),
		title: "Keputusan Analisis Sentimen".to_owned(),
	};
	let html = render(props, page_info);
	let response = Response::builder()
		.status(StatusCode::OK)
		.header(header::CONTENT_TYPE, "text/html; charset=utf-8")
		.body(Body::from(html))?;
	Ok(response)
}
