use bigapp_forms::{
    Addon, Button, ButtonAction, ButtonElement, FormEntry, FormSet, Input, Markup, NULL_MARKER, Select,
    SelectOptions, Switch, Wrap, hidden,
};

#[test]
fn hidden_strips_spaces_from_name() {
    let html = hidden("User Id", "42");
    assert_eq!(html.as_str(), r#"<input type="hidden" name="userid" id="userid" value="42" />"#);
}

#[test]
fn input_with_label_and_prepend() {
    let html = Input::new("Email Address")
        .input_type("email")
        .label("email address")
        .prepend(Addon::label("@"))
        .required(true)
        .render();

    assert!(html.as_str().starts_with(r#"<label for="emailaddress" class="mb-2">Email Address</label>"#));
    assert!(html.contains(r#"<div class="input-group"><div class="input-group-prepend">"#));
    assert!(html.contains(r#"<span class="input-group-text" id="inputGroup-sizing-default">@</span>"#));
    assert!(html.contains(r#"type="email" name="emailaddress" id="emailaddress" class="form-control""#));
    assert!(html.contains(" required />"));
}

#[test]
fn plain_input_has_no_group() {
    let html = Input::new("age").input_type("number").value("7").placeholder("years").render();
    assert_eq!(
        html.as_str(),
        r#"<input type="number" name="age" id="age" class="form-control" value="7" placeholder="years" />"#
    );
}

#[test]
fn input_with_button_addon_and_wrappers() {
    let search = Button::submit("Go").class("btn-primary").render();
    let html = Input::new("q")
        .append(Addon::button(search))
        .wrap(Wrap::class("col").inner("mb-3"))
        .render();

    assert!(html.as_str().starts_with(r#"<div class="col"><div class="mb-3"><div class="input-group"><input"#));
    assert!(html.contains(
        r#"<div class="input-group-append"><button type="submit" class="btn btn-primary">Go</button></div>"#
    ));
    assert!(html.as_str().ends_with("</div></div></div>"));
}

#[test]
fn select_marks_selected_option() {
    let html = Select::new("Colour")
        .label("favourite colour")
        .options(SelectOptions::list(["red", "green"]))
        .selected("green")
        .render();

    assert!(html.as_str().starts_with(r#"<label for="colour">Favourite Colour</label><select name="colour""#));
    assert!(html.contains(r#"<option value="red">red</option>"#));
    assert!(html.contains(r#"<option value="green" selected>green</option>"#));
}

#[test]
fn select_pairs_and_groups() {
    let pairs = Select::new("size").options(SelectOptions::pairs([("Small", "s"), ("Large", "l")])).render();
    assert!(pairs.contains(r#"<option value="s">Small</option><option value="l">Large</option>"#));

    let groups = Select::new("city")
        .options(SelectOptions::Groups(vec![
            ("UK".to_owned(), vec![("London".to_owned(), "lon".to_owned())]),
            ("FR".to_owned(), vec![("Paris".to_owned(), "par".to_owned())]),
        ]))
        .prepend_label("City")
        .render();
    assert!(groups.contains(r#"<optgroup label="UK"><option value="lon">London</option></optgroup>"#));
    assert!(groups.as_str().starts_with(r#"<div class="input-group"><div class="input-group-prepend">"#));
}

#[test]
fn switch_renders_flags_and_label() {
    let html = Switch::new("notify").label("Notify me").checked(true).onclick("toggle()").render();
    assert_eq!(
        html.as_str(),
        concat!(
            r#"<div class="form-check form-switch">"#,
            r#"<input class="form-check-input" type="checkbox" name="notify" id="notify" onclick="toggle()" checked>"#,
            r#"<label class="form-check-label" for="notify">Notify me</label></div>"#
        )
    );
}

#[test]
fn buttons_and_links() {
    let reset = Button::new("Clear").element(ButtonElement::Button(ButtonAction::Reset)).disabled(true).render();
    assert_eq!(reset.as_str(), r#"<button type="reset" class="btn" disabled>Clear</button>"#);

    let link = Button::new("Docs")
        .element(ButtonElement::Anchor { href: "/docs".to_owned(), target: Some("_blank".to_owned()) })
        .class("btn btn-link")
        .render();
    assert_eq!(link.as_str(), r#"<a href="/docs" class="btn btn-link" target="_blank" role="button">Docs</a>"#);
}

#[test]
fn form_set_names_unnamed_elements() {
    let mut form = FormSet::new();
    form.add("token", &hidden(NULL_MARKER, "abc"));
    form.add("remember", &Switch::default().render());
    form.add_list("tags", &[Input::default().render(), Input::new("custom").render()]);

    let names: Vec<_> = form.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["token", "remember", "tags"]);

    let Some(FormEntry::Single(token)) = form.get("token") else { panic!("token missing") };
    assert!(token.contains(r#"name="token""#));
    assert!(!token.contains(NULL_MARKER));

    let Some(FormEntry::List(tags)) = form.get("tags") else { panic!("tags missing") };
    assert!(tags[0].contains(r#"name="tags_0""#));
    assert!(tags[1].contains(r#"name="custom""#));
}

#[test]
fn form_set_update_remove_clear() {
    let mut form = FormSet::new();
    form.add("a", &Markup::from("<p>:null:</p>"));
    form.add("b", &Markup::from("<p>b</p>"));
    form.update("a", FormEntry::Single(Markup::from("<p>:null:</p>")));

    assert_eq!(form.len(), 2);
    assert_eq!(form.get("a"), Some(&FormEntry::Single(Markup::from("<p>:null:</p>"))));
    assert!(form.remove("a").is_some());
    assert!(form.remove("a").is_none());
    form.clear();
    assert!(form.is_empty());
}

#[test]
fn form_set_serializes_in_order() {
    let mut form = FormSet::new();
    form.add("z", &Markup::from("<i>z</i>"));
    form.add_list("a", &[Markup::from("<i>1</i>")]);

    let json = serde_json::to_string(&form).unwrap();
    assert_eq!(json, r#"{"z":"<i>z</i>","a":["<i>1</i>"]}"#);
}

#[test]
fn form_set_renders_in_tera() {
    let mut form = FormSet::new();
    form.add("email", &Input::default().input_type("email").render());

    let mut tera = tera::Tera::default();
    tera.add_raw_template("form.html", "<form>{{ form.email | safe }}</form>").unwrap();
    let mut context = tera::Context::new();
    context.insert("form", &form);

    let html = tera.render("form.html", &context).unwrap();
    assert_eq!(html, r#"<form><input type="email" name="email" id="email" class="form-control" /></form>"#);
}
