use std::collections::HashMap;

use log::{error, info, warn};
use warp::http::StatusCode;

use super::form::{EmployeeForm, FormErrors};
use super::views;
use crate::error_handling::types::{StorageError, WebError};
use crate::storage::storage_trait::EmployeeStorage;
use crate::storage::types::EmployeeId;
use crate::web_interface::types::HandlerResponse;

pub const EMPLOYEE_LIST_PATH: &str = "/employees/";

fn lookup_error(id: EmployeeId) -> impl FnOnce(StorageError) -> WebError {
    move |err| match err {
        StorageError::NotFound => WebError::NotFound(format!("No employee matches id {}", id)),
        other => WebError::Storage(other),
    }
}

/// Renders a failed handler result as an HTML page.
pub fn html_error(err: WebError) -> HandlerResponse {
    match err {
        WebError::NotFound(message) => {
            warn!("{}", message);
            HandlerResponse::Html(
                StatusCode::NOT_FOUND,
                views::error_page("Not Found", &message),
            )
        }
        WebError::Validation(message) => {
            warn!("Rejected employee request: {}", message);
            HandlerResponse::Html(
                StatusCode::BAD_REQUEST,
                views::error_page("Bad Request", &message),
            )
        }
        WebError::Storage(e) => {
            error!("Employee request failed: {}", e);
            HandlerResponse::Html(
                StatusCode::INTERNAL_SERVER_ERROR,
                views::error_page(
                    "Server Error",
                    "Something went wrong while handling the request.",
                ),
            )
        }
    }
}

pub fn respond(result: Result<HandlerResponse, WebError>) -> HandlerResponse {
    result.unwrap_or_else(html_error)
}

fn invalid_form(id: Option<EmployeeId>, form: &EmployeeForm, errors: &FormErrors) -> HandlerResponse {
    warn!("Invalid employee form: {}", errors);
    HandlerResponse::Html(
        StatusCode::BAD_REQUEST,
        views::employee_form(id, form, errors),
    )
}

/// GET /
pub fn index() -> HandlerResponse {
    HandlerResponse::Html(StatusCode::OK, views::index())
}

/// GET /employees/
pub async fn list<S: EmployeeStorage>(storage: &S) -> Result<HandlerResponse, WebError> {
    let employees = storage.list_employees().await?;
    Ok(HandlerResponse::Html(
        StatusCode::OK,
        views::employee_list(&employees),
    ))
}

/// GET /employees/new/
pub fn new_form() -> HandlerResponse {
    HandlerResponse::Html(
        StatusCode::OK,
        views::employee_form(None, &EmployeeForm::default(), &FormErrors::default()),
    )
}

/// POST /employees/new/
pub async fn create<S: EmployeeStorage>(
    storage: &S,
    data: &HashMap<String, String>,
) -> Result<HandlerResponse, WebError> {
    let form = EmployeeForm::from_submission(data);
    let fields = match form.validate() {
        Ok(fields) => fields,
        Err(errors) => return Ok(invalid_form(None, &form, &errors)),
    };
    let employee = storage.create_employee(fields).await?;
    info!("Employee {} ({}) created", employee.id, employee);
    Ok(HandlerResponse::Redirect(EMPLOYEE_LIST_PATH))
}

/// Loads an employee into an edit form, dates formatted for date inputs.
pub async fn read_for_edit<S: EmployeeStorage>(
    storage: &S,
    id: EmployeeId,
) -> Result<EmployeeForm, WebError> {
    let employee = storage.get_employee(id).await.map_err(lookup_error(id))?;
    Ok(EmployeeForm::from_employee(&employee))
}

/// GET /employees/<id>/edit/
pub async fn edit_form<S: EmployeeStorage>(
    storage: &S,
    id: EmployeeId,
) -> Result<HandlerResponse, WebError> {
    let form = read_for_edit(storage, id).await?;
    Ok(HandlerResponse::Html(
        StatusCode::OK,
        views::employee_form(Some(id), &form, &FormErrors::default()),
    ))
}

/// POST /employees/<id>/edit/
///
/// The record must exist before the submission is even looked at; all six
/// fields are then written, there is no partial update.
pub async fn update<S: EmployeeStorage>(
    storage: &S,
    id: EmployeeId,
    data: &HashMap<String, String>,
) -> Result<HandlerResponse, WebError> {
    storage.get_employee(id).await.map_err(lookup_error(id))?;

    let form = EmployeeForm::from_submission(data);
    let fields = match form.validate() {
        Ok(fields) => fields,
        Err(errors) => return Ok(invalid_form(Some(id), &form, &errors)),
    };
    storage
        .update_employee(id, fields)
        .await
        .map_err(lookup_error(id))?;
    info!("Employee {} updated", id);
    Ok(HandlerResponse::Redirect(EMPLOYEE_LIST_PATH))
}

/// GET /employees/<id>/delete/
pub async fn confirm_delete<S: EmployeeStorage>(
    storage: &S,
    id: EmployeeId,
) -> Result<HandlerResponse, WebError> {
    let employee = storage.get_employee(id).await.map_err(lookup_error(id))?;
    Ok(HandlerResponse::Html(
        StatusCode::OK,
        views::confirm_delete(&employee),
    ))
}

/// POST /employees/<id>/delete/
pub async fn delete<S: EmployeeStorage>(
    storage: &S,
    id: EmployeeId,
) -> Result<HandlerResponse, WebError> {
    storage.delete_employee(id).await.map_err(lookup_error(id))?;
    info!("Employee {} deleted", id);
    Ok(HandlerResponse::Redirect(EMPLOYEE_LIST_PATH))
}
