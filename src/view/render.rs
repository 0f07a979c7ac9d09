use dioxus::prelude::*;

use super::roster::RosterView;
use crate::models::employee::{Gender, ProfileColor, Salutation};

/// Full roster page. Row clicks, hover and keystrokes are wired up by
/// `/static/roster.js`.
pub fn render_page(view: &RosterView) -> String {
    let body = dioxus_ssr::render_element(rsx! {
        {roster_table(view)}
        br {}
        if view.is_form_visible() {
            {employee_form(view)}
        }
        script { src: "/static/roster.js" }
    });
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Employees</title></head>\n<body>{}</body>\n</html>\n",
        body
    )
}

fn row_class(view: &RosterView, index: usize) -> &'static str {
    match (view.is_highlighted(index), view.is_selected(index)) {
        (_, true) => "row highlighted selected",
        (true, false) => "row highlighted",
        (false, false) => "row",
    }
}

fn roster_table(view: &RosterView) -> Element {
    rsx! {
        div { class: "centered-container",
            h2 { "Current Employees" }
            form { method: "post", action: "/form/open",
                button { class: "add-employee-button", "Add Employee" }
            }
            table {
                thead {
                    tr {
                        th { "ID" }
                        th { "First Name" }
                        th { "Last Name" }
                        th { "Salutation" }
                        th { "Profile Colour" }
                    }
                }
                tbody {
                    for (index, employee) in view.roster().iter().enumerate() {
                        {
                            let class = row_class(view, index);
                            let id = employee.id.map(|id| id.to_string()).unwrap_or_default();
                            let first_name = employee.first_name.as_str();
                            let last_name = employee.last_name.as_str();
                            let salutation = employee.salutation.as_str();
                            let profile_color = employee.profile_color.as_deref().unwrap_or_default();
                            rsx! {
                                tr { key: "{index}", class: "{class}", "data-index": "{index}",
                                    td { "{id}" }
                                    td { "{first_name}" }
                                    td { "{last_name}" }
                                    td { "{salutation}" }
                                    td { "{profile_color}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn employee_form(view: &RosterView) -> Element {
    let form = view.form();
    let first_name = form.first_name();
    let last_name = form.last_name();
    let full_name = form.full_name();
    let gross_salary = form.gross_salary_display();
    let button_class = view.submit_button_class();

    rsx! {
        div { class: "centered-container",
            h2 { "Employee Information" }
            form { id: "employeeForm", class: "styled-form", method: "post", action: "/employees",
                label { "First Name:"
                    input { r#type: "text", name: "firstName", value: "{first_name}" }
                }
                label { "Last Name:"
                    input { r#type: "text", name: "lastName", value: "{last_name}" }
                }
                label { "Salutation:"
                    select { name: "salutation",
                        for salutation in Salutation::ALL {
                            {salutation_option(salutation, salutation == form.salutation())}
                        }
                    }
                }
                fieldset {
                    legend { "Gender:" }
                    for gender in Gender::ALL {
                        {gender_radio(gender, form.gender() == Some(gender))}
                    }
                }
                label { "Full Name:"
                    input { r#type: "text", name: "fullName", value: "{full_name}", disabled: "disabled" }
                }
                label { "Gross Salary:"
                    input { r#type: "text", name: "grossSalary", value: "{gross_salary}" }
                }
                fieldset {
                    legend { "Employee Profile Colour:" }
                    for color in ProfileColor::ALL {
                        {color_checkbox(color, form.is_checked(color))}
                    }
                }
                button { r#type: "submit", class: "{button_class}", "Save" }
                button {
                    r#type: "submit",
                    class: "btn btn-secondary mr-2",
                    "formaction": "/form/cancel",
                    "formnovalidate": "formnovalidate",
                    "Cancel"
                }
            }
        }
    }
}

fn salutation_option(salutation: Salutation, selected: bool) -> Element {
    let value = salutation.as_str();
    if selected {
        rsx! { option { value: "{value}", selected: "selected", "{value}" } }
    } else {
        rsx! { option { value: "{value}", "{value}" } }
    }
}

// Every radio is `required`, so the browser refuses a submit without a gender.
fn gender_radio(gender: Gender, checked: bool) -> Element {
    let value = gender.as_str();
    if checked {
        rsx! {
            label {
                input { r#type: "radio", name: "gender", value: "{value}", required: "required", checked: "checked" }
                "{value}"
            }
        }
    } else {
        rsx! {
            label {
                input { r#type: "radio", name: "gender", value: "{value}", required: "required" }
                "{value}"
            }
        }
    }
}

fn color_checkbox(color: ProfileColor, checked: bool) -> Element {
    let value = color.as_str();
    if checked {
        rsx! {
            label {
                input { r#type: "checkbox", name: "profileColor", value: "{value}", checked: "checked" }
                "{value}"
            }
        }
    } else {
        rsx! {
            label {
                input { r#type: "checkbox", name: "profileColor", value: "{value}" }
                "{value}"
            }
        }
    }
}
