use crate::types::error::AppError;
use crate::types::ownership::EmployeeKey;
use actix_web::{http::StatusCode, HttpResponse, Responder, ResponseError};
use serde::{Deserialize, Serialize};

pub enum ApiResponse<T> {
    Ok(T),
    EmptyOk,
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = actix_web::body::BoxBody;
    fn respond_to(self, _: &actix_web::HttpRequest) -> HttpResponse {
        match self {
            ApiResponse::Ok(v) => HttpResponse::Ok().json(v),
            ApiResponse::EmptyOk => HttpResponse::Ok().finish(),
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

/// Outcome of a mutating operation. Failures are reported here instead of
/// being raised past the operation boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub non_member_ids: Option<Vec<EmployeeKey>>,
    #[serde(skip, default = "default_status")]
    pub status: u16,
}

fn default_status() -> u16 {
    StatusCode::OK.as_u16()
}

impl ActionResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            non_member_ids: None,
            status: StatusCode::OK.as_u16(),
        }
    }

    pub fn with_non_members(mut self, ids: Vec<EmployeeKey>) -> Self {
        self.non_member_ids = Some(ids);
        self
    }

    pub fn failed(err: &AppError) -> Self {
        Self {
            success: false,
            message: err.user_message(),
            non_member_ids: None,
            status: err.status_code().as_u16(),
        }
    }
}

impl From<Result<ActionResponse, AppError>> for ActionResponse {
    fn from(res: Result<ActionResponse, AppError>) -> Self {
        res.unwrap_or_else(|err| ActionResponse::failed(&err))
    }
}

impl Responder for ActionResponse {
    type Body = actix_web::body::BoxBody;
    fn respond_to(self, _: &actix_web::HttpRequest) -> HttpResponse {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        HttpResponse::build(status).json(self)
    }
}
