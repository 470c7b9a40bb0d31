use rocket::{http::Status, serde::json::Json, Responder};
use serde::Serialize;

#[derive(Responder, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum ErrorBodyKind {
    Static(&'static str),
    Dynamic(String),
}

#[derive(Responder, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
#[response(content_type = "json")]
pub struct ErrorBody {
    pub error: ErrorBodyKind,
}

#[derive(Responder, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Error((Status, Json<ErrorBody>));

impl Error {
    pub fn new_static(status: Status, message: &'static str) -> Self {
        Error((
            status,
            Json(ErrorBody {
                error: ErrorBodyKind::Static(message),
            }),
        ))
    }

    pub fn new_dynamic(status: Status, message: impl Into<String>) -> Self {
        Error((
            status,
            Json(ErrorBody {
                error: ErrorBodyKind::Dynamic(message.into()),
            }),
        ))
    }
}

impl From<Status> for Error {
    fn from(value: Status) -> Self {
        let message = match value.code {
            400 => "bad request",
            401 => "unauthorized",
            403 => "forbidden",
            404 => "not found",
            409 => "conflict",
            413 => "payload too large",
            422 => "unprocessable entity",
            500 => "internal server error",
            _ => "unknown",
        };

        Self::new_static(value, message)
    }
}

pub type JsonRes<T> = Result<(Status, Json<T>), Error>;
