use serde_json::Value;
use warp::http::{StatusCode, Uri};
use warp::{reply, Reply};

/// What a handler decided to send back, before warp turns it into a response.
#[derive(Debug, Clone, PartialEq)]
pub enum HandlerResponse {
    Html(StatusCode, String),
    Json(StatusCode, Value),
    NoContent,
    /// 303 See Other, the answer to a successful form POST
    Redirect(&'static str),
    Asset { content_type: String, body: Vec<u8> },
}

impl HandlerResponse {
    pub fn status(&self) -> StatusCode {
        match self {
            HandlerResponse::Html(status, _) | HandlerResponse::Json(status, _) => *status,
            HandlerResponse::NoContent => StatusCode::NO_CONTENT,
            HandlerResponse::Redirect(_) => StatusCode::SEE_OTHER,
            HandlerResponse::Asset { .. } => StatusCode::OK,
        }
    }
}

impl Reply for HandlerResponse {
    fn into_response(self) -> reply::Response {
        match self {
            HandlerResponse::Html(status, body) => {
                reply::with_status(reply::html(body), status).into_response()
            }
            HandlerResponse::Json(status, body) => {
                reply::with_status(reply::json(&body), status).into_response()
            }
            HandlerResponse::NoContent => {
                reply::with_status(reply(), StatusCode::NO_CONTENT).into_response()
            }
            HandlerResponse::Redirect(location) => {
                warp::redirect::see_other(Uri::from_static(location)).into_response()
            }
            HandlerResponse::Asset { content_type, body } => {
                reply::with_header(body, "content-type", content_type).into_response()
            }
        }
    }
}
