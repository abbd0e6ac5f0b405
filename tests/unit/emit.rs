use super::*;

#[test]
fn minimal_form_renders_fragment() {
    let form = FormState {
        image: "cat.png".to_string(),
        ..FormState::default()
    };
    let html = generate_html(&form, "", StyleOptions::default());
    assert_eq!(
        html,
        "<style>\n</style>\n\
         <div style=\"position: relative; overflow: hidden;\">\n  \
         <img src=\"assets/cat.png\" class=\"animated-image\"/>\n\
         </div>\n"
    );
}

#[test]
fn width_attribute_only_when_size_present() {
    let mut form = FormState {
        image: "C:\\img\\dog.jpg".to_string(),
        ..FormState::default()
    };
    let html = generate_html(&form, "slideInFromTop", StyleOptions::default());
    assert!(html.contains("<img src=\"assets/dog.jpg\" class=\"animated-image\"/>"));
    assert!(!html.contains("width="));

    form.image_size = "120".to_string();
    let html = generate_html(&form, "slideInFromTop", StyleOptions::default());
    assert!(html.contains("<img src=\"assets/dog.jpg\" width=\"120\" class=\"animated-image\"/>"));
}

#[test]
fn style_block_wraps_animation() {
    let form = FormState {
        image: "a.png".to_string(),
        ..FormState::default()
    };
    let html = generate_html(&form, "zoomInFromBottom", StyleOptions::default());
    let expected = format!(
        "<style>\n{}\n</style>\n",
        animation_style("zoomInFromBottom")
    );
    assert!(html.starts_with(&expected));
}

#[test]
fn values_are_not_escaped() {
    let form = FormState {
        image: "x\"><script>.png".to_string(),
        ..FormState::default()
    };
    let html = generate_html(&form, "", StyleOptions::default());
    assert!(html.contains("assets/x\"><script>.png"));
}
