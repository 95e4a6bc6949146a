#[test]
fn bigapp_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/bigapp_error_pass.rs");
    t.pass("tests/ui/bigapp_error_cfg_variant.rs");
}
