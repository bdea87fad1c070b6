//! `<option>` rows for selects whose value and label are the same text.

use leptos::prelude::*;

#[cfg(test)]
#[path = "option_list_test.rs"]
mod option_list_test;

pub fn option_rows(values: impl IntoIterator<Item = String>) -> Vec<impl IntoView> {
    values
        .into_iter()
        .map(|value| {
            let label = value.clone();
            view! { <option value=value>{label}</option> }
        })
        .collect()
}
