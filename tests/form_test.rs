// Simulates interactive editing sessions against the form reducers.
use pretty_assertions::assert_eq;
use timeflip::{
    ConvertEvent, ConvertForm, CurrentTime, FieldIssue, RangeEvent, RangeForm, TimeFormat,
};

fn type_into(form: ConvertForm, format: TimeFormat, keys: &str) -> ConvertForm {
    let mut form = form;
    let mut buffer = String::new();
    for key in keys.chars() {
        buffer.push(key);
        form = form.apply(ConvertEvent::Edit(format, buffer.clone()));
    }
    form
}

#[test]
fn test_typing_a_12_hour_time_end_to_end() {
    let form = type_into(ConvertForm::default(), TimeFormat::Hour12, "2:30 PM");

    assert_eq!(form.time12, "2:30 PM");
    assert_eq!(form.time24, "14:30");
    assert_eq!(form.error12, None);
    assert_eq!(form.last_edited, Some(TimeFormat::Hour12));
    assert!(form.is_12_valid());
    assert!(form.is_24_valid());
}

#[test]
fn test_typing_a_24_hour_time_end_to_end() {
    let form = type_into(ConvertForm::default(), TimeFormat::Hour24, "14:30");

    assert_eq!(form.time24, "14:30");
    assert_eq!(form.time12, "2:30 PM");
    assert_eq!(form.error24, None);
    assert_eq!(form.last_edited, Some(TimeFormat::Hour24));
}

#[test]
fn test_partial_input_is_not_flagged_until_long_enough() {
    // "14:" is already past the grace length and not yet valid.
    let form = type_into(ConvertForm::default(), TimeFormat::Hour24, "14:");
    assert_eq!(form.error24, Some(FieldIssue::Format24));

    // Finishing the minutes clears the error again.
    let form = form.apply(ConvertEvent::Edit(TimeFormat::Hour24, "14:30".to_string()));
    assert_eq!(form.error24, None);
    assert_eq!(form.time12, "2:30 PM");
}

#[test]
fn test_editing_one_side_then_the_other() {
    let form = type_into(ConvertForm::default(), TimeFormat::Hour12, "6:30 AM");
    assert_eq!(form.time24, "06:30");

    let form = form.apply(ConvertEvent::Edit(TimeFormat::Hour24, "23:45".to_string()));
    assert_eq!(form.time12, "11:45 PM");
    assert_eq!(form.last_edited, Some(TimeFormat::Hour24));
    assert_eq!(form.error12, None);
    assert_eq!(form.error24, None);
}

#[test]
fn test_set_current_replaces_a_half_typed_entry() {
    let form = type_into(ConvertForm::default(), TimeFormat::Hour12, "2:30 P");
    assert_eq!(form.error12, Some(FieldIssue::Format12));

    let snapshot = CurrentTime { time12: "9:05 AM".to_string(), time24: "09:05".to_string() };
    let form = form.apply(ConvertEvent::SetCurrent(snapshot));

    assert_eq!(form.time12, "9:05 AM");
    assert_eq!(form.time24, "09:05");
    assert_eq!(form.error12, None);
    assert_eq!(form.last_edited, None);
    assert!(form.is_12_valid());
    assert!(form.is_24_valid());
}

#[test]
fn test_clearing_a_field_clears_its_counterpart() {
    let form = type_into(ConvertForm::default(), TimeFormat::Hour24, "14:30");
    assert_eq!(form.time12, "2:30 PM");

    let form = form.apply(ConvertEvent::Edit(TimeFormat::Hour24, String::new()));
    assert_eq!(form.time24, "");
    assert_eq!(form.time12, "");
    assert_eq!(form.error24, None);
    assert!(form.is_24_valid());
}

fn type_range(form: RangeForm, format: TimeFormat, keys: &str) -> RangeForm {
    let mut form = form;
    let mut buffer = String::new();
    for key in keys.chars() {
        buffer.push(key);
        form = form.apply(RangeEvent::Edit(format, buffer.clone()));
    }
    form
}

#[test]
fn test_typing_a_range_end_to_end() {
    let form = type_range(RangeForm::default(), TimeFormat::Hour12, "9:00 AM to 5:00 PM");

    assert_eq!(form.range12, "9:00 AM to 5:00 PM");
    assert_eq!(form.range24, "09:00 to 17:00");
    assert_eq!(form.error12, None);
    assert!(form.is_12_valid());
    assert!(form.is_24_valid());
}

#[test]
fn test_range_error_appears_once_the_shape_is_there() {
    // Up to the separator nothing is flagged.
    let form = type_range(RangeForm::default(), TimeFormat::Hour12, "9:00 AM to");
    assert_eq!(form.error12, None);
    assert_eq!(form.range24, "");

    // "9:00 AM to 5" splits into two parts, so the bad endpoint shows.
    let form = form.apply(RangeEvent::Edit(TimeFormat::Hour12, "9:00 AM to 5".to_string()));
    assert_eq!(form.error12, Some(FieldIssue::RangeFormat12));

    // Completing the endpoint converts and clears the error.
    let form = form.apply(RangeEvent::Edit(TimeFormat::Hour12, "9:00 AM to 5:00 PM".to_string()));
    assert_eq!(form.error12, None);
    assert_eq!(form.range24, "09:00 to 17:00");
}

#[test]
fn test_out_of_order_range_converts_but_is_flagged() {
    let form = type_range(RangeForm::default(), TimeFormat::Hour24, "17:00 to 09:00");

    assert_eq!(form.error24, Some(FieldIssue::OutOfOrder));
    assert_eq!(form.range12, "5:00 PM to 9:00 AM");
    assert!(!form.is_24_valid());
}

#[test]
fn test_dashed_range_input_converts() {
    let form = type_range(RangeForm::default(), TimeFormat::Hour24, "14:30-15:30");

    assert_eq!(form.range24, "14:30-15:30", "Raw input is kept verbatim");
    assert_eq!(form.range12, "2:30 PM to 3:30 PM");
    assert_eq!(form.error24, None);
}

#[test]
fn test_clear_resets_both_forms() {
    let convert_form = type_into(ConvertForm::default(), TimeFormat::Hour12, "2:30 PM");
    let range_form = type_range(RangeForm::default(), TimeFormat::Hour24, "14:30 to 15:30");

    assert_eq!(convert_form.apply(ConvertEvent::Clear), ConvertForm::default());
    assert_eq!(range_form.apply(RangeEvent::Clear), RangeForm::default());
}
