use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;

use serde_json::Value;
use warp::{path::Tail, reply::Response, Filter, Rejection, Reply};

use super::assets;
use crate::employee_management::handlers as employees;
use crate::item_management::handlers as items;
use crate::storage::item_store::ItemStore;
use crate::storage::storage_trait::EmployeeStorage;
use crate::storage::types::EmployeeId;

/// Upper bound for form and JSON request bodies. Larger bodies get 413 and
/// bodies without a `Content-Length` header get 411.
pub const MAX_BODY_BYTES: u64 = 16 * 1024;

fn with_shared<T: Send + Sync + 'static>(
    shared: Arc<T>,
) -> impl Filter<Extract = (Arc<T>,), Error = Infallible> + Clone {
    warp::any().map(move || shared.clone())
}

fn form_body() -> impl Filter<Extract = (HashMap<String, String>,), Error = Rejection> + Clone {
    warp::body::content_length_limit(MAX_BODY_BYTES).and(warp::body::form())
}

fn json_body() -> impl Filter<Extract = (Value,), Error = Rejection> + Clone {
    warp::body::content_length_limit(MAX_BODY_BYTES).and(warp::body::json())
}

/// GET /static/<path>
pub fn static_route() -> impl Filter<Extract = (Response,), Error = Rejection> + Clone {
    warp::path("static")
        .and(warp::path::tail())
        .and(warp::get())
        .map(|tail: Tail| employees::respond(assets::serve_asset(tail.as_str())).into_response())
}

/// GET /, /employees/, GET|POST /employees/new/, GET|POST /employees/<id>/edit/,
/// GET|POST /employees/<id>/delete/
pub fn employee_routes<S: EmployeeStorage>(
    storage: Arc<S>,
) -> impl Filter<Extract = (Response,), Error = Rejection> + Clone {
    let index = warp::path::end()
        .and(warp::get())
        .map(|| employees::index().into_response());

    let list = warp::path!("employees")
        .and(warp::get())
        .and(with_shared(storage.clone()))
        .then(|storage: Arc<S>| async move {
            employees::respond(employees::list(storage.as_ref()).await).into_response()
        });

    let new_form = warp::path!("employees" / "new")
        .and(warp::get())
        .map(|| employees::new_form().into_response());

    let create = warp::path!("employees" / "new")
        .and(warp::post())
        .and(with_shared(storage.clone()))
        .and(form_body())
        .then(|storage: Arc<S>, data: HashMap<String, String>| async move {
            employees::respond(employees::create(storage.as_ref(), &data).await).into_response()
        });

    let edit_form = warp::path!("employees" / EmployeeId / "edit")
        .and(warp::get())
        .and(with_shared(storage.clone()))
        .then(|id: EmployeeId, storage: Arc<S>| async move {
            employees::respond(employees::edit_form(storage.as_ref(), id).await).into_response()
        });

    let update = warp::path!("employees" / EmployeeId / "edit")
        .and(warp::post())
        .and(with_shared(storage.clone()))
        .and(form_body())
        .then(
            |id: EmployeeId, storage: Arc<S>, data: HashMap<String, String>| async move {
                employees::respond(employees::update(storage.as_ref(), id, &data).await)
                    .into_response()
            },
        );

    let confirm_delete = warp::path!("employees" / EmployeeId / "delete")
        .and(warp::get())
        .and(with_shared(storage.clone()))
        .then(|id: EmployeeId, storage: Arc<S>| async move {
            employees::respond(employees::confirm_delete(storage.as_ref(), id).await)
                .into_response()
        });

    let delete = warp::path!("employees" / EmployeeId / "delete")
        .and(warp::post())
        .and(with_shared(storage))
        .then(|id: EmployeeId, storage: Arc<S>| async move {
            employees::respond(employees::delete(storage.as_ref(), id).await).into_response()
        });

    index
        .or(list)
        .unify()
        .or(new_form)
        .unify()
        .or(create)
        .unify()
        .or(edit_form)
        .unify()
        .or(update)
        .unify()
        .or(confirm_delete)
        .unify()
        .or(delete)
        .unify()
}

/// GET /hello, GET|POST /items, GET|PUT|DELETE /items/<id>
pub fn item_routes(
    store: Arc<ItemStore>,
) -> impl Filter<Extract = (Response,), Error = Rejection> + Clone {
    let hello = warp::path!("hello")
        .and(warp::get())
        .map(|| items::hello().into_response());

    let list = warp::path!("items")
        .and(warp::get())
        .and(with_shared(store.clone()))
        .map(|store: Arc<ItemStore>| items::list(&store).into_response());

    let create = warp::path!("items")
        .and(warp::post())
        .and(with_shared(store.clone()))
        .and(json_body())
        .map(|store: Arc<ItemStore>, body: Value| {
            items::respond(items::create(&store, body)).into_response()
        });

    let get = warp::path!("items" / usize)
        .and(warp::get())
        .and(with_shared(store.clone()))
        .map(|index: usize, store: Arc<ItemStore>| {
            items::respond(items::get(&store, index)).into_response()
        });

    let replace = warp::path!("items" / usize)
        .and(warp::put())
        .and(with_shared(store.clone()))
        .and(json_body())
        .map(|index: usize, store: Arc<ItemStore>, body: Value| {
            items::respond(items::replace(&store, index, body)).into_response()
        });

    let delete = warp::path!("items" / usize)
        .and(warp::delete())
        .and(with_shared(store))
        .map(|index: usize, store: Arc<ItemStore>| {
            items::respond(items::delete(&store, index)).into_response()
        });

    hello
        .or(list)
        .unify()
        .or(create)
        .unify()
        .or(get)
        .unify()
        .or(replace)
        .unify()
        .or(delete)
        .unify()
}
