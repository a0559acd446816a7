/// CSS class for a wizard input, highlighting fields with an error
pub fn field_input_class(error: Option<&str>) -> &'static str {
    match error {
        Some(_) => "input-field input-invalid",
        None => "input-field",
    }
}

pub fn field_input_style(error: Option<&str>) -> &'static str {
    match error {
        Some(_) => "border: 2px solid #ef4444; background-color: #fef2f2;",
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_fields_are_highlighted() {
        assert_eq!(field_input_class(None), "input-field");
        assert_eq!(field_input_class(Some("Invalid KFID format")), "input-field input-invalid");
        assert!(field_input_style(Some("x")).contains("#ef4444"));
        assert!(field_input_style(None).is_empty());
    }
}
