#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::NaiveDate;
    use warp::http::StatusCode;

    use crate::employee_management::handlers::{self, EMPLOYEE_LIST_PATH};
    use crate::error_handling::types::WebError;
    use crate::storage::database_storage::DatabaseStorage;
    use crate::storage::storage_trait::EmployeeStorage;
    use crate::web_interface::types::HandlerResponse;

    // Helper to build a form submission
    fn submission(name: &str, department: &str, salary: &str) -> HashMap<String, String> {
        [
            ("name", name.to_string()),
            ("email", format!("{}@example.com", name.to_lowercase())),
            ("date_of_birth", "1990-05-01".to_string()),
            ("department", department.to_string()),
            ("salary", salary.to_string()),
            ("hire_date", "2020-01-15".to_string()),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
    }

    async fn storage() -> DatabaseStorage {
        DatabaseStorage::in_memory().await.unwrap()
    }

    fn html_body(response: HandlerResponse) -> String {
        match response {
            HandlerResponse::Html(status, body) if status == StatusCode::OK => body,
            other => panic!("expected a 200 HTML page, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_then_list_shows_one_new_record() {
        let storage = storage().await;
        let response = handlers::create(&storage, &submission("Alice", "Sales", "4100.25"))
            .await
            .unwrap();
        assert_eq!(response, HandlerResponse::Redirect(EMPLOYEE_LIST_PATH));

        let employees = storage.list_employees().await.unwrap();
        assert_eq!(employees.len(), 1);
        let fields = &employees[0].fields;
        assert_eq!(fields.name, "Alice");
        assert_eq!(fields.email, "alice@example.com");
        assert_eq!(fields.department, "Sales");
        assert_eq!(fields.salary.to_string(), "4100.25");
        assert_eq!(fields.date_of_birth, NaiveDate::from_ymd_opt(1990, 5, 1).unwrap());

        let html = html_body(handlers::list(&storage).await.unwrap());
        assert!(html.contains("Alice"));
        assert!(html.contains(&format!("/employees/{}/edit/", employees[0].id)));
    }

    #[tokio::test]
    async fn test_invalid_create_leaves_store_unchanged() {
        let storage = storage().await;
        let mut data = submission("Alice", "Sales", "4100.25");
        data.remove("hire_date");
        data.insert("salary".into(), "lots".into());

        match handlers::create(&storage, &data).await.unwrap() {
            HandlerResponse::Html(status, body) if status == StatusCode::BAD_REQUEST => {
                assert!(body.contains("This field is required."));
                assert!(body.contains("Enter a non-negative number."));
                // submitted values are echoed back
                assert!(body.contains(r#"value="Alice""#));
            }
            other => panic!("unexpected response {:?}", other),
        }
        assert!(storage.list_employees().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_then_read_for_edit_returns_new_fields() {
        let storage = storage().await;
        handlers::create(&storage, &submission("Alice", "Sales", "4100.25"))
            .await
            .unwrap();
        let id = storage.list_employees().await.unwrap()[0].id;

        let mut replacement = submission("Bob", "Support", "3900");
        replacement.insert("hire_date".into(), "2022-11-30".into());
        let response = handlers::update(&storage, id, &replacement).await.unwrap();
        assert_eq!(response, HandlerResponse::Redirect(EMPLOYEE_LIST_PATH));

        let form = handlers::read_for_edit(&storage, id).await.unwrap();
        assert_eq!(form.name, "Bob");
        assert_eq!(form.email, "bob@example.com");
        assert_eq!(form.department, "Support");
        assert_eq!(form.salary, "3900.00");
        assert_eq!(form.date_of_birth, "1990-05-01");
        assert_eq!(form.hire_date, "2022-11-30");

        let html = html_body(handlers::edit_form(&storage, id).await.unwrap());
        assert!(html.contains(r#"value="2022-11-30""#));
    }

    #[tokio::test]
    async fn test_invalid_update_keeps_old_record() {
        let storage = storage().await;
        handlers::create(&storage, &submission("Alice", "Sales", "4100.25"))
            .await
            .unwrap();
        let before = storage.list_employees().await.unwrap();
        let id = before[0].id;

        let mut data = submission("Alice", "Sales", "4100.25");
        data.insert("date_of_birth".into(), "yesterday".into());
        let response = handlers::update(&storage, id, &data).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(storage.list_employees().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_missing_employee_is_not_found_everywhere() {
        let storage = storage().await;
        let data = submission("Ghost", "Nowhere", "1");

        assert!(matches!(
            handlers::edit_form(&storage, 99).await,
            Err(WebError::NotFound(_))
        ));
        // existence is checked before the form is validated
        assert!(matches!(
            handlers::update(&storage, 99, &HashMap::new()).await,
            Err(WebError::NotFound(_))
        ));
        assert!(matches!(
            handlers::update(&storage, 99, &data).await,
            Err(WebError::NotFound(_))
        ));
        assert!(matches!(
            handlers::confirm_delete(&storage, 99).await,
            Err(WebError::NotFound(_))
        ));
        assert!(matches!(
            handlers::delete(&storage, 99).await,
            Err(WebError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_two_phase_delete() {
        let storage = storage().await;
        handlers::create(&storage, &submission("Alice", "Sales", "4100.25"))
            .await
            .unwrap();
        let id = storage.list_employees().await.unwrap()[0].id;

        let html = html_body(handlers::confirm_delete(&storage, id).await.unwrap());
        assert!(html.contains("Are you sure you want to delete \"Alice\"?"));
        // confirmation alone removes nothing
        assert_eq!(storage.list_employees().await.unwrap().len(), 1);

        let response = handlers::delete(&storage, id).await.unwrap();
        assert_eq!(response, HandlerResponse::Redirect(EMPLOYEE_LIST_PATH));
        assert!(storage.list_employees().await.unwrap().is_empty());

        let second = handlers::delete(&storage, id).await;
        assert!(matches!(second, Err(WebError::NotFound(_))));
        assert_eq!(
            handlers::respond(second).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_errors_render_as_status_pages() {
        use crate::error_handling::types::StorageError;

        let cases = [
            (WebError::NotFound("No employee matches id 3".into()), StatusCode::NOT_FOUND),
            (WebError::Validation("Bad <input>".into()), StatusCode::BAD_REQUEST),
            (
                WebError::Storage(StorageError::ReadFailed),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            match handlers::html_error(err) {
                HandlerResponse::Html(status, body) if status == expected => {
                    assert!(body.contains(r#"<a href="/employees/">"#));
                    assert!(!body.contains("<input>"));
                }
                other => panic!("expected a {} page, got {:?}", expected, other),
            }
        }
    }

    #[test]
    fn test_static_pages() {
        assert!(html_body(handlers::index()).contains("/employees/"));
        assert!(html_body(handlers::new_form()).contains(r#"action="/employees/new/""#));
    }
}
