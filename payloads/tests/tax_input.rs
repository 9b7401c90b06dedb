use payloads::tax_input::{
    AMOUNT_POSITIVE_MESSAGE, AMOUNT_REQUIRED_MESSAGE, AMOUNT_TOO_LARGE_MESSAGE,
    BlurOutcome,
    CdwFormState, InputOutcome, PERCENTAGE_RANGE_MESSAGE,
    PERCENTAGE_REQUIRED_MESSAGE, PercentageInput, PricingInput,
    TITLE_REQUIRED_MESSAGE, TaxFormState, WarningThrottle,
    format_two_decimals, is_percentage_shape, sanitize_amount,
    sanitize_percentage, validate_amount, validate_percentage,
};
use payloads::{LocationId, TaxType};
use rstest::rstest;
use rust_decimal::dec;
use uuid::Uuid;

#[rstest]
#[case("007", "7")]
#[case("150", "100")]
#[case("100.01", "100")]
#[case("999999999999999999999999999999999", "100")]
#[case("12.345", "12.34")]
#[case("1.2.3", "1.23")]
#[case("..5", "0.5")]
#[case(".5", "0.5")]
#[case("00.5", "0.5")]
#[case("000", "0")]
#[case("0", "0")]
#[case("5%", "5")]
#[case("-5", "5")]
#[case("1a2", "12")]
#[case("abc", "")]
#[case("", "")]
#[case("5.", "5.")]
#[case("100.", "100.")]
#[case("100.00", "100.00")]
fn sanitizes_percentage_keystrokes(#[case] raw: &str, #[case] expected: &str) {
    assert_eq!(sanitize_percentage(raw), expected);
}

#[rstest]
#[case("0.01")]
#[case("5")]
#[case("5.5")]
#[case("12.34")]
#[case("50.00")]
#[case("99.99")]
fn valid_percentages_are_stable(#[case] value: &str) {
    assert_eq!(sanitize_percentage(value), value);
    assert_eq!(sanitize_percentage(&sanitize_percentage(value)), value);
    assert!(validate_percentage(value).is_ok());
}

#[rstest]
#[case("0")]
#[case("0.00")]
#[case("100")]
#[case("100.00")]
fn boundary_percentages_are_rejected(#[case] value: &str) {
    assert_eq!(validate_percentage(value), Err(PERCENTAGE_RANGE_MESSAGE));
}

#[test]
fn empty_percentage_is_required() {
    assert_eq!(validate_percentage(""), Err(PERCENTAGE_REQUIRED_MESSAGE));
    assert_eq!(validate_percentage("   "), Err(PERCENTAGE_REQUIRED_MESSAGE));
}

#[test]
fn percentage_shape() {
    assert!(is_percentage_shape(""));
    assert!(is_percentage_shape("0"));
    assert!(is_percentage_shape("5."));
    assert!(is_percentage_shape("99.99"));
    assert!(is_percentage_shape("100.0"));
    assert!(!is_percentage_shape("100.5"));
    assert!(!is_percentage_shape("101"));
    assert!(!is_percentage_shape("1.234"));
    assert!(!is_percentage_shape(".5"));
    assert!(!is_percentage_shape("1.2.3"));
}

#[test]
fn formats_with_two_decimals() {
    assert_eq!(format_two_decimals(dec!(5)), "5.00");
    assert_eq!(format_two_decimals(dec!(7.5)), "7.50");
    assert_eq!(format_two_decimals(dec!(12.345)), "12.34");
}

#[test]
fn warning_throttle_spaces_warnings() {
    let mut throttle = WarningThrottle::default();
    assert!(throttle.allow(1_000));
    assert!(!throttle.allow(1_500));
    assert!(!throttle.allow(1_799));
    assert!(throttle.allow(1_800));
}

#[test]
fn typing_zero_is_an_intermediate_state() {
    let mut input = PercentageInput::default();
    assert_eq!(input.on_input("0", 0), InputOutcome::Accepted);
    assert_eq!(input.on_input("0.", 10), InputOutcome::Accepted);
    assert_eq!(input.on_input("0.0", 20), InputOutcome::Accepted);
    assert_eq!(input.on_input("0.05", 30), InputOutcome::Accepted);
    assert_eq!(input.value(), "0.05");
}

#[test]
fn complete_zero_warns() {
    let mut input = PercentageInput::default();
    assert_eq!(
        input.on_input("0.00", 0),
        InputOutcome::Warned(PERCENTAGE_RANGE_MESSAGE)
    );
    assert_eq!(input.value(), "0.00");
}

#[test]
fn hundred_is_kept_but_warned_at_most_every_800ms() {
    let mut input = PercentageInput::default();
    assert_eq!(
        input.on_input("150", 1_000),
        InputOutcome::Warned(PERCENTAGE_RANGE_MESSAGE)
    );
    assert_eq!(input.value(), "100");
    assert_eq!(input.on_input("1000", 1_200), InputOutcome::Accepted);
    assert_eq!(input.value(), "100");
    assert_eq!(
        input.on_input("100", 1_900),
        InputOutcome::Warned(PERCENTAGE_RANGE_MESSAGE)
    );
}

#[test]
fn blur_formats_valid_input() {
    let mut input = PercentageInput::default();
    input.on_input("5", 0);
    assert_eq!(input.on_blur(), BlurOutcome::Formatted);
    assert_eq!(input.value(), "5.00");
    assert_eq!(input.last_accepted(), "5.00");

    input.on_input("12.5", 10);
    assert_eq!(input.on_blur(), BlurOutcome::Formatted);
    assert_eq!(input.value(), "12.50");
}

#[test]
fn blur_reverts_invalid_input_to_last_accepted() {
    let mut input = PercentageInput::with_value("7.50");
    input.on_input("100", 0);
    assert_eq!(input.on_blur(), BlurOutcome::Reverted);
    assert_eq!(input.value(), "7.50");
}

#[test]
fn blur_clears_when_nothing_was_accepted() {
    let mut input = PercentageInput::default();
    input.on_input("0", 0);
    assert_eq!(input.on_blur(), BlurOutcome::Reverted);
    assert_eq!(input.value(), "");
}

#[test]
fn auto_format_rewrites_bare_integers() {
    let mut input = PercentageInput::default();
    input.on_input("8", 0);
    assert!(input.needs_auto_format());
    assert!(input.auto_format());
    assert_eq!(input.value(), "8.00");
    assert!(!input.auto_format());
}

#[rstest]
#[case("0")]
#[case("100")]
#[case("5.")]
#[case("5.5")]
#[case("")]
fn auto_format_leaves_other_values(#[case] typed: &str) {
    let mut input = PercentageInput::default();
    input.on_input(typed, 0);
    let before = input.value().to_string();
    assert!(!input.auto_format());
    assert_eq!(input.value(), before);
}

#[rstest]
#[case("", "1", "1")]
#[case("1", "12", "12")]
#[case("12", "12.", "12.")]
#[case("12.", "12.5", "12.5")]
#[case("12.5", "12.55", "12.55")]
#[case("12.55", "12.555", "12.55")]
#[case("12.5", "12.5.", "12.5")]
#[case("12", "12a", "12")]
#[case("12", "-12", "12")]
#[case("99", "100000", "100000")]
fn amount_keystrokes(
    #[case] previous: &str,
    #[case] raw: &str,
    #[case] expected: &str,
) {
    assert_eq!(sanitize_amount(previous, raw), expected);
}

#[test]
fn amount_validation() {
    assert_eq!(validate_amount(""), Err(AMOUNT_REQUIRED_MESSAGE));
    assert_eq!(validate_amount("0"), Err(AMOUNT_POSITIVE_MESSAGE));
    assert_eq!(validate_amount("0.00"), Err(AMOUNT_POSITIVE_MESSAGE));
    assert_eq!(validate_amount("12.5"), Ok(dec!(12.5)));
    assert_eq!(validate_amount("250000"), Ok(dec!(250000)));
    assert_eq!(validate_amount("999999999999.99"), Ok(dec!(999999999999.99)));
    assert_eq!(
        validate_amount("123456789012345678901234567890"),
        Err(AMOUNT_TOO_LARGE_MESSAGE)
    );
    assert_eq!(validate_amount("1234567890123"), Err(AMOUNT_TOO_LARGE_MESSAGE));
}

#[test]
fn amount_keystroke_beyond_twelve_digits_is_refused() {
    assert_eq!(sanitize_amount("999999999999", "9999999999999"), "999999999999");
    assert_eq!(sanitize_amount("999999999999", "999999999999.5"), "999999999999.5");
}

fn location() -> LocationId {
    LocationId(Uuid::from_u128(7))
}

fn percentage_form(title: &str, typed: &str) -> TaxFormState {
    let mut form = TaxFormState {
        title: title.to_string(),
        ..Default::default()
    };
    form.pricing.percentage.on_input(typed, 0);
    form
}

#[test]
fn form_requires_title() {
    let form = percentage_form("  ", "5");
    assert_eq!(form.validate().as_deref(), Some(TITLE_REQUIRED_MESSAGE));
}

#[test]
fn form_rejects_long_title() {
    let form = percentage_form(&"x".repeat(101), "5");
    assert_eq!(
        form.validate().as_deref(),
        Some("Title must be at most 100 characters")
    );
}

#[rstest]
#[case("0")]
#[case("0.00")]
#[case("100")]
#[case("100.00")]
#[case("150")]
fn form_rejects_boundary_percentages(#[case] typed: &str) {
    let form = percentage_form("VAT", typed);
    assert_eq!(form.validate().as_deref(), Some(PERCENTAGE_RANGE_MESSAGE));
    assert!(form.to_create_request(location()).is_err());
}

#[test]
fn percentage_submission_carries_two_decimals() {
    let mut form = percentage_form("City tax", "5");
    form.pricing.percentage.on_blur();
    assert_eq!(form.pricing.percentage.value(), "5.00");

    let request = form.to_create_request(location()).unwrap();
    assert_eq!(request.tax_type, TaxType::Percentage);
    assert_eq!(request.percentage.as_deref(), Some("5.00"));
    assert_eq!(request.amount, None);

    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body["percentage"], "5.00");
    assert_eq!(body["taxType"], "PERCENTAGE");
    assert!(body.get("amount").is_none());
}

#[test]
fn submission_canonicalizes_without_blur() {
    let form = percentage_form("City tax", "5");
    let request = form.to_update_request().unwrap();
    assert_eq!(request.percentage.as_deref(), Some("5.00"));
}

#[test]
fn fixed_tax_requires_positive_amount() {
    let mut form = TaxFormState {
        title: "Airport fee".to_string(),
        description: "  ".to_string(),
        pricing: PricingInput {
            pricing_type: TaxType::Fixed,
            ..Default::default()
        },
    };
    assert_eq!(form.validate().as_deref(), Some(AMOUNT_REQUIRED_MESSAGE));

    form.pricing.on_amount_input("0");
    assert_eq!(form.validate().as_deref(), Some(AMOUNT_POSITIVE_MESSAGE));

    form.pricing.on_amount_input("25.5");
    assert_eq!(form.validate(), None);

    let request = form.to_create_request(location()).unwrap();
    assert_eq!(request.amount.as_deref(), Some("25.50"));
    assert_eq!(request.percentage, None);
    assert_eq!(request.description, None);
}

#[test]
fn switching_type_ignores_the_other_field() {
    let mut form = percentage_form("Mixed", "150");
    form.pricing.pricing_type = TaxType::Fixed;
    form.pricing.on_amount_input("10");
    assert_eq!(form.validate(), None);
}

#[test]
fn disabled_cdw_skips_pricing_checks() {
    let mut form = CdwFormState::default();
    assert_eq!(form.validate(), None);
    let request = form.to_request().unwrap();
    assert!(!request.enabled);
    assert_eq!(request.percentage, None);

    form.enabled = true;
    assert_eq!(form.validate().as_deref(), Some(PERCENTAGE_REQUIRED_MESSAGE));
    form.pricing.percentage.on_input("15", 0);
    let request = form.to_request().unwrap();
    assert_eq!(request.percentage.as_deref(), Some("15.00"));
}
