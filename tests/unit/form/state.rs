use super::*;

#[test]
fn new_form_is_empty_and_invalid() {
    let form = FormState::new();
    for field in Field::ALL {
        assert_eq!(form.get(field), "");
        assert_eq!(form.value(field), None);
    }
    assert!(!form.is_valid());
    assert_eq!(
        form.missing_required(),
        vec![Field::Image, Field::Animation]
    );
}

#[test]
fn validity_requires_image_and_animation() {
    let mut form = FormState::new();
    form.set(Field::Image, "cat.png");
    assert!(!form.is_valid());
    assert_eq!(form.missing_required(), vec![Field::Animation]);

    form.set(Field::Animation, "slideInFromTop");
    assert!(form.is_valid());
    assert!(form.missing_required().is_empty());

    form.set(Field::Image, "");
    assert!(!form.is_valid());
}

#[test]
fn field_names_roundtrip_through_from_str() {
    for field in Field::ALL {
        assert_eq!(field.name().parse::<Field>().unwrap(), field);
    }
    assert!("containerwidth".parse::<Field>().is_err());
    assert!("".parse::<Field>().is_err());
}

#[test]
fn basename_takes_segment_after_last_backslash() {
    assert_eq!(basename("C:\\pics\\cat.png"), "cat.png");
    assert_eq!(basename("cat.png"), "cat.png");
    assert_eq!(basename("dir/sub/cat.png"), "dir/sub/cat.png");
    assert_eq!(basename("C:\\pics\\"), "");
}

#[test]
fn json_missing_keys_default_to_empty() {
    let form = FormState::from_json(r#"{ "image": "a.png", "containerWidth": "40" }"#).unwrap();
    assert_eq!(form.image, "a.png");
    assert_eq!(form.container_width, "40");
    assert_eq!(form.animation, "");
    assert_eq!(form.image_position_y, "");
}

#[test]
fn json_rejects_unknown_keys() {
    assert!(FormState::from_json(r#"{ "colour": "red" }"#).is_err());
}

#[test]
fn flags_start_pristine() {
    let flags = FieldFlags::default();
    assert!(flags.is_pristine());
    assert!(!flags.touched);
}
