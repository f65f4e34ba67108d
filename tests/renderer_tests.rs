#[cfg(test)]
mod tests {
    use fieldtype_scaffold::renderer::{MiniJinjaRenderer, TemplateRenderer};
    use serde_json::json;
    use test_log::test;

    fn test_template(template: &str, expected: &str) {
        let renderer = MiniJinjaRenderer::new();
        let result = renderer.render(template, &json!({})).unwrap();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_camel_case_filter() {
        test_template("{{ 'hello world' | camel_case }}", "helloWorld");
    }

    #[test]
    fn test_kebab_case_filter() {
        test_template("{{ 'hello world' | kebab_case }}", "hello-world");
    }

    #[test]
    fn test_pascal_case_filter() {
        test_template("{{ 'hello world' | pascal_case }}", "HelloWorld");
    }

    #[test]
    fn test_screaming_snake_case_filter() {
        test_template("{{ 'hello world' | screaming_snake_case }}", "HELLO_WORLD");
    }

    #[test]
    fn test_snake_case_filter() {
        test_template("{{ 'hello world' | snake_case }}", "hello_world");
    }

    #[test]
    fn test_underscore_filter() {
        test_template("{{ 'MyFieldType' | underscore }}", "My_Field_Type");
        test_template("{{ 'HTMLField' | underscore }}", "HTML_Field");
    }

    #[test]
    fn test_identifier_filter() {
        test_template("{{ 'My Field Type' | identifier }}", "MyFieldType");
        test_template("{{ 'My Field Type' | identifier | lower }}", "myfieldtype");
    }

    #[test]
    fn test_output_is_not_escaped() {
        let renderer = MiniJinjaRenderer::new();
        let result = renderer
            .render("{{ ns }}\\Type <{{ tag }}>", &json!({"ns": "Acme\\Foo", "tag": "div"}))
            .unwrap();
        assert_eq!(result, "Acme\\Foo\\Type <div>");
    }

    #[test]
    fn test_raw_blocks_keep_twig_syntax() {
        test_template(
            "{% raw %}{% block {% endraw %}{{ 'acme' }}{% raw %}_field %}{{ field }}{% endraw %}",
            "{% block acme_field %}{{ field }}",
        );
    }

    #[test]
    fn test_unknown_template_is_an_error() {
        let renderer = MiniJinjaRenderer::new();
        assert!(renderer.render_template("fieldtype/missing.j2", &json!({})).is_err());
    }
}
