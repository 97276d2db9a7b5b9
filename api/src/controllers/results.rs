//! Action outcomes
//!
//! `PageResult` is what a page action produces, `ApiResult` what a JSON action
//! produces. Both convert into HTTP responses at the handler layer.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use super::ModelState;

/// Action name of the product list page
pub const INDEX_ACTION: &str = "Index";

/// A page to render, with the model it shows
#[derive(Debug, Clone, PartialEq)]
pub struct ViewResult<M> {
    pub view_name: &'static str,
    pub model: Option<M>,
    /// Errors to show next to the form fields
    pub model_state: ModelState,
}

/// Redirect to another page action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectToActionResult {
    pub action_name: &'static str,
}

impl RedirectToActionResult {
    pub fn to_index() -> Self {
        Self {
            action_name: INDEX_ACTION,
        }
    }

    /// Path of the page the action name refers to
    pub fn location(&self) -> String {
        match self.action_name {
            INDEX_ACTION => "/Products".to_string(),
            action => format!("/Products/{}", action),
        }
    }
}

/// Outcome of a page action
#[derive(Debug, Clone, PartialEq)]
pub enum PageResult<M> {
    View(ViewResult<M>),
    Redirect(RedirectToActionResult),
    NotFound,
}

impl<M> PageResult<M> {
    pub fn view(view_name: &'static str, model: M) -> Self {
        PageResult::View(ViewResult {
            view_name,
            model: Some(model),
            model_state: ModelState::new(),
        })
    }

    /// Re-render a form with the submitted model and its errors
    pub fn invalid(view_name: &'static str, model: M, model_state: ModelState) -> Self {
        PageResult::View(ViewResult {
            view_name,
            model: Some(model),
            model_state,
        })
    }

    pub fn empty_view(view_name: &'static str) -> Self {
        PageResult::View(ViewResult {
            view_name,
            model: None,
            model_state: ModelState::new(),
        })
    }

    pub fn redirect_to_index() -> Self {
        PageResult::Redirect(RedirectToActionResult::to_index())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            PageResult::View(_) => StatusCode::OK,
            PageResult::Redirect(_) => StatusCode::SEE_OTHER,
            PageResult::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// A `201 Created` pointing at the action that can read the new resource back
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedAtActionResult<T> {
    pub action_name: &'static str,
    /// Route the action is mounted on, without the id segment
    pub route: &'static str,
    pub id: i32,
    pub value: T,
}

impl<T> CreatedAtActionResult<T> {
    pub fn location(&self) -> String {
        format!("{}/{}", self.route, self.id)
    }
}

/// Outcome of a JSON action
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult<T> {
    Ok(T),
    NoContent,
    NotFound,
    BadRequest,
    CreatedAtAction(CreatedAtActionResult<T>),
}

impl<T> ApiResult<T> {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiResult::Ok(_) => StatusCode::OK,
            ApiResult::NoContent => StatusCode::NO_CONTENT,
            ApiResult::NotFound => StatusCode::NOT_FOUND,
            ApiResult::BadRequest => StatusCode::BAD_REQUEST,
            ApiResult::CreatedAtAction(_) => StatusCode::CREATED,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResult<T> {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiResult::Ok(value) => (status, Json(value)).into_response(),
            ApiResult::CreatedAtAction(created) => (
                status,
                [(header::LOCATION, created.location())],
                Json(created.value),
            )
                .into_response(),
            ApiResult::NoContent | ApiResult::NotFound | ApiResult::BadRequest => {
                status.into_response()
            }
        }
    }
}
