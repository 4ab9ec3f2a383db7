use crate::api::{refresh_cafes, CafeApiClient};
use crate::errors::{ResultResp, ServerError};
use crate::responses::{css_response, html_response, redirect_response};
use crate::store::CafeStore;
use crate::templates;
use astra::Request;

const MAIN_CSS: &str = include_str!("../static/main.css");

pub fn handle(req: Request, store: &CafeStore, client: &CafeApiClient) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => {
            let page = store.with_state(templates::pages::home_page)?;
            html_response(page)
        }

        ("GET", "/static/main.css") => css_response(MAIN_CSS),

        ("POST", "/refresh") => {
            refresh_cafes(client, store);
            redirect_response("/")
        }

        ("GET", path) if path.starts_with("/cafes/") => {
            let id = parse_cafe_id(path)?;
            let cafe = store.find(id)?.ok_or(ServerError::NotFound)?;
            html_response(templates::pages::detail_page(&cafe))
        }

        _ => Err(ServerError::NotFound),
    }
}

fn parse_cafe_id(path: &str) -> Result<i64, ServerError> {
    path.strip_prefix("/cafes/")
        .and_then(|rest| rest.parse().ok())
        .ok_or_else(|| ServerError::BadRequest("invalid cafe id".into()))
}
