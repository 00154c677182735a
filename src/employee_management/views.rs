//! HTML pages for the employee app.

use super::form::{EmployeeForm, FormErrors};
use crate::storage::types::{Employee, EmployeeId};

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<h1>{title}</h1>
{body}
</body>
</html>
"#,
        title = escape(title),
        body = body
    )
}

pub fn index() -> String {
    page(
        "Employee Management",
        r#"<p><a href="/employees/">View employees</a></p>
<p><a href="/employees/new/">Add an employee</a></p>
<p>The item API is served under <a href="/items">/items</a>.</p>"#,
    )
}

pub fn employee_list(employees: &[Employee]) -> String {
    let mut body = String::from(r#"<p><a href="/employees/new/">Add an employee</a></p>"#);
    if employees.is_empty() {
        body.push_str("<p>No employees yet.</p>");
        return page("Employees", &body);
    }
    body.push_str(
        "<table>\n<tr><th>Name</th><th>Email</th><th>Date of birth</th><th>Department</th>\
         <th>Salary</th><th>Hire date</th><th></th></tr>\n",
    );
    for employee in employees {
        let f = &employee.fields;
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td><a href=\"/employees/{id}/edit/\">Edit</a> \
             <a href=\"/employees/{id}/delete/\">Delete</a></td></tr>\n",
            escape(&f.name),
            escape(&f.email),
            f.date_of_birth,
            escape(&f.department),
            f.salary,
            f.hire_date,
            id = employee.id,
        ));
    }
    body.push_str("</table>");
    page("Employees", &body)
}

fn input(label: &str, field: &str, kind: &str, value: &str, errors: &FormErrors) -> String {
    let error = errors
        .for_field(field)
        .map(|message| format!(r#"<ul class="errorlist"><li>{}</li></ul>"#, escape(message)))
        .unwrap_or_default();
    let step = if kind == "number" { r#" step="0.01" min="0""# } else { "" };
    format!(
        r#"<p>{error}<label for="id_{field}">{label}</label> <input type="{kind}" name="{field}" id="id_{field}" value="{value}"{step} required></p>
"#,
        value = escape(value),
    )
}

/// Create form when `id` is `None`, edit form otherwise.
pub fn employee_form(id: Option<EmployeeId>, form: &EmployeeForm, errors: &FormErrors) -> String {
    let (title, action) = match id {
        Some(id) => ("Edit Employee", format!("/employees/{}/edit/", id)),
        None => ("New Employee", "/employees/new/".to_string()),
    };
    let mut body = format!(r#"<form method="post" action="{}">"#, action);
    body.push('\n');
    body.push_str(&input("Name", "name", "text", &form.name, errors));
    body.push_str(&input("Email", "email", "email", &form.email, errors));
    body.push_str(&input(
        "Date of birth",
        "date_of_birth",
        "date",
        &form.date_of_birth,
        errors,
    ));
    body.push_str(&input("Department", "department", "text", &form.department, errors));
    body.push_str(&input("Salary", "salary", "number", &form.salary, errors));
    body.push_str(&input("Hire date", "hire_date", "date", &form.hire_date, errors));
    body.push_str(
        r#"<p><button type="submit">Save</button> <a href="/employees/">Cancel</a></p>
</form>"#,
    );
    page(title, &body)
}

pub fn confirm_delete(employee: &Employee) -> String {
    let body = format!(
        r#"<p>Are you sure you want to delete "{name}"?</p>
<form method="post" action="/employees/{id}/delete/">
<button type="submit" class="danger">Confirm</button> <a href="/employees/">Cancel</a>
</form>"#,
        name = escape(&employee.to_string()),
        id = employee.id,
    );
    page("Delete Employee", &body)
}

/// Status page for a failed request, with a way back to the list.
pub fn error_page(title: &str, message: &str) -> String {
    page(
        title,
        &format!(
            r#"<p>{}</p><p><a href="/employees/">Back to the list</a></p>"#,
            escape(message)
        ),
    )
}
