use super::*;

#[test]
fn each_value_becomes_its_own_label() {
    let html = option_rows(vec!["Data".to_owned(), "Génie Civil".to_owned()]).to_html();
    assert!(html.contains(r#"value="Data""#), "{html}");
    assert!(html.contains(">Data<"), "{html}");
    assert!(html.contains(r#"value="Génie Civil""#), "{html}");
    assert!(html.contains(">Génie Civil<"), "{html}");
}

#[test]
fn no_values_render_nothing() {
    assert!(option_rows(Vec::<String>::new()).to_html().is_empty());
}
