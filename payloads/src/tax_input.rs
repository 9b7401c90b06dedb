//! Keystroke-level sanitizing and submit-time validation for percentage and
//! fixed-amount pricing fields (company taxes and CDW settings).
//!
//! Percentage fields are masked on every keystroke into a decimal between 0
//! and 100 with at most two fractional digits. Amount fields only accept
//! well-formed input and silently keep the previous value otherwise.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::{LocationId, TaxType, requests, responses};

pub const PERCENTAGE_RANGE_MESSAGE: &str =
    "Percentage must be greater than 0 and less than 100";
pub const PERCENTAGE_REQUIRED_MESSAGE: &str = "Percentage is required";
pub const AMOUNT_REQUIRED_MESSAGE: &str = "Amount is required";
pub const AMOUNT_POSITIVE_MESSAGE: &str = "Amount must be greater than 0";
pub const AMOUNT_TOO_LARGE_MESSAGE: &str = "Amount is too large";
pub const TITLE_REQUIRED_MESSAGE: &str = "Title is required";

/// Minimum spacing between two boundary warnings.
pub const WARNING_THROTTLE_MS: u64 = 800;
/// How long a bare integer must sit untouched before it is rewritten with
/// two decimals.
pub const AUTO_FORMAT_DELAY_MS: u32 = 400;

const MAX_DECIMALS: usize = 2;
/// Integer digits an amount may have, well inside what `Decimal` holds.
const MAX_AMOUNT_DIGITS: usize = 12;

/// Mask raw text into a percentage string.
///
/// Steps, in order: drop anything that is not a digit or a dot, keep only
/// the first dot, cut the fraction to two digits, strip leading zeros of the
/// integer part and clamp values above 100 to `"100"`.
pub fn sanitize_percentage(raw: &str) -> String {
    let filtered: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let (int_part, frac_part) = match filtered.split_once('.') {
        Some((int_part, rest)) => {
            let frac: String = rest
                .chars()
                .filter(|c| *c != '.')
                .take(MAX_DECIMALS)
                .collect();
            (int_part, Some(frac))
        }
        None => (filtered.as_str(), None),
    };

    let stripped = int_part.trim_start_matches('0');
    let int_part = if !stripped.is_empty() {
        stripped
    } else if int_part.is_empty() && frac_part.is_none() {
        ""
    } else {
        "0"
    };

    if exceeds_hundred(int_part, frac_part.as_deref()) {
        return "100".to_string();
    }

    match frac_part {
        Some(frac) => format!("{int_part}.{frac}"),
        None => int_part.to_string(),
    }
}

/// `int_part` has no leading zeros here.
fn exceeds_hundred(int_part: &str, frac_part: Option<&str>) -> bool {
    match int_part.len() {
        0..=2 => false,
        3 => match int_part.cmp("100") {
            std::cmp::Ordering::Less => false,
            std::cmp::Ordering::Greater => true,
            std::cmp::Ordering::Equal => {
                frac_part.is_some_and(|f| f.chars().any(|c| c != '0'))
            }
        },
        _ => true,
    }
}

/// Whether `value` has the shape of a percentage between 0 and 100 with at
/// most two decimals. A trailing dot is tolerated because it is a normal
/// state while typing, and an empty field is a cleared field.
pub fn is_percentage_shape(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }

    let (int_part, frac_part) = match value.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (value, None),
    };

    if let Some(frac) = frac_part
        && (frac.len() > MAX_DECIMALS || !frac.chars().all(|c| c.is_ascii_digit()))
    {
        return false;
    }

    if !int_part.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    match int_part.len() {
        1 | 2 => true,
        3 => {
            int_part == "100"
                && frac_part.is_none_or(|f| f.chars().all(|c| c == '0'))
        }
        _ => false,
    }
}

/// Check a percentage for submission: it must parse and lie strictly
/// between 0 and 100.
pub fn validate_percentage(value: &str) -> Result<Decimal, &'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(PERCENTAGE_REQUIRED_MESSAGE);
    }
    if !is_percentage_shape(value) {
        return Err(PERCENTAGE_RANGE_MESSAGE);
    }

    let parsed = Decimal::from_str(value.trim_end_matches('.'))
        .map_err(|_| PERCENTAGE_RANGE_MESSAGE)?;
    if parsed <= Decimal::ZERO || parsed >= Decimal::ONE_HUNDRED {
        return Err(PERCENTAGE_RANGE_MESSAGE);
    }
    Ok(parsed)
}

/// Render a value with exactly two decimals, e.g. `5` -> `"5.00"`.
pub fn format_two_decimals(value: Decimal) -> String {
    let mut rounded = value.round_dp(MAX_DECIMALS as u32);
    rounded.rescale(MAX_DECIMALS as u32);
    rounded.to_string()
}

/// Accept `raw` if it is digits with at most one dot and two decimals,
/// otherwise return `previous` unchanged. No message is produced.
pub fn sanitize_amount(previous: &str, raw: &str) -> String {
    if is_amount_shape(raw) {
        raw.to_string()
    } else {
        previous.to_string()
    }
}

fn is_amount_shape(value: &str) -> bool {
    if !value.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return false;
    }
    let (int, frac) = value.split_once('.').unwrap_or((value, ""));
    int.len() <= MAX_AMOUNT_DIGITS
        && !frac.contains('.')
        && frac.len() <= MAX_DECIMALS
}

pub fn validate_amount(value: &str) -> Result<Decimal, &'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AMOUNT_REQUIRED_MESSAGE);
    }
    let int = value.split('.').next().unwrap_or_default();
    if int.trim_start_matches('0').len() > MAX_AMOUNT_DIGITS {
        return Err(AMOUNT_TOO_LARGE_MESSAGE);
    }
    let parsed = Decimal::from_str(value.trim_end_matches('.'))
        .map_err(|_| AMOUNT_POSITIVE_MESSAGE)?;
    if parsed <= Decimal::ZERO {
        return Err(AMOUNT_POSITIVE_MESSAGE);
    }
    Ok(parsed)
}

/// Rate limiter for the boundary warning so that holding a key down does
/// not flood the toast stack.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WarningThrottle {
    last_shown_ms: Option<u64>,
}

impl WarningThrottle {
    /// Returns true and records `now_ms` when a warning may be shown.
    pub fn allow(&mut self, now_ms: u64) -> bool {
        if let Some(last) = self.last_shown_ms
            && now_ms.saturating_sub(last) < WARNING_THROTTLE_MS
        {
            return false;
        }
        self.last_shown_ms = Some(now_ms);
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// The sanitized text is now the field value.
    Accepted,
    /// The keystroke produced an invalid shape; the field went back to the
    /// last accepted value.
    Reverted,
    /// The text was kept but sits on a forbidden boundary (0 or 100).
    Warned(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlurOutcome {
    Formatted,
    Reverted,
}

/// State of a single percentage text field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PercentageInput {
    value: String,
    last_accepted: String,
    throttle: WarningThrottle,
}

impl PercentageInput {
    /// Start from a value loaded from the server.
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            last_accepted: value.clone(),
            value,
            throttle: WarningThrottle::default(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn last_accepted(&self) -> &str {
        &self.last_accepted
    }

    pub fn on_input(&mut self, raw: &str, now_ms: u64) -> InputOutcome {
        let sanitized = sanitize_percentage(raw);
        if !is_percentage_shape(&sanitized) {
            self.value = self.last_accepted.clone();
            return InputOutcome::Reverted;
        }

        self.value = sanitized;
        if is_forbidden_boundary(&self.value) && self.throttle.allow(now_ms) {
            return InputOutcome::Warned(PERCENTAGE_RANGE_MESSAGE);
        }
        InputOutcome::Accepted
    }

    pub fn on_blur(&mut self) -> BlurOutcome {
        match validate_percentage(&self.value) {
            Ok(parsed) => {
                self.value = format_two_decimals(parsed);
                self.last_accepted = self.value.clone();
                BlurOutcome::Formatted
            }
            Err(_) => {
                self.value = self.last_accepted.clone();
                BlurOutcome::Reverted
            }
        }
    }

    /// Rewrite a bare integer with two decimals. Returns whether the value
    /// changed. 0 and 100 are left alone since `0.00` and `100.00` can never
    /// be submitted.
    pub fn auto_format(&mut self) -> bool {
        if self.value.is_empty()
            || !self.value.chars().all(|c| c.is_ascii_digit())
        {
            return false;
        }
        let Ok(whole) = self.value.parse::<u32>() else {
            return false;
        };
        if whole == 0 || whole >= 100 {
            return false;
        }

        self.value = format!("{whole}.00");
        self.last_accepted = self.value.clone();
        true
    }

    /// Whether the current text is a bare integer that `auto_format` would
    /// rewrite.
    pub fn needs_auto_format(&self) -> bool {
        let mut probe = self.clone();
        probe.auto_format()
    }
}

/// Complete zero (`0.00`) or any spelling of 100. `0`, `0.` and `0.0` are
/// still being typed and do not count.
fn is_forbidden_boundary(value: &str) -> bool {
    let (int_part, frac_part) = match value.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (value, None),
    };
    match int_part {
        "100" => true,
        "0" => frac_part
            .is_some_and(|f| f.len() == MAX_DECIMALS && f.chars().all(|c| c == '0')),
        _ => false,
    }
}

/// A price that is either a percentage or a fixed amount, as used by taxes
/// and CDW settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PricingInput {
    pub pricing_type: TaxType,
    pub percentage: PercentageInput,
    pub amount: String,
}

impl PricingInput {
    pub fn from_values(
        pricing_type: TaxType,
        percentage: Option<Decimal>,
        amount: Option<Decimal>,
    ) -> Self {
        Self {
            pricing_type,
            percentage: percentage
                .map(|p| PercentageInput::with_value(format_two_decimals(p)))
                .unwrap_or_default(),
            amount: amount.map(format_two_decimals).unwrap_or_default(),
        }
    }

    pub fn on_amount_input(&mut self, raw: &str) {
        self.amount = sanitize_amount(&self.amount, raw);
    }

    pub fn validate(&self) -> Option<&'static str> {
        match self.pricing_type {
            TaxType::Percentage => {
                validate_percentage(self.percentage.value()).err()
            }
            TaxType::Fixed => validate_amount(&self.amount).err(),
        }
    }

    /// Canonical `(percentage, amount)` strings for submission. Only the
    /// field matching the pricing type is set.
    pub fn canonical(
        &self,
    ) -> Result<(Option<String>, Option<String>), &'static str> {
        match self.pricing_type {
            TaxType::Percentage => {
                let value = validate_percentage(self.percentage.value())?;
                Ok((Some(format_two_decimals(value)), None))
            }
            TaxType::Fixed => {
                let value = validate_amount(&self.amount)?;
                Ok((None, Some(format_two_decimals(value))))
            }
        }
    }
}

/// Everything the tax dialog edits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaxFormState {
    pub title: String,
    pub description: String,
    pub pricing: PricingInput,
}

impl TaxFormState {
    pub fn from_tax(tax: &responses::CompanyLocationTax) -> Self {
        Self {
            title: tax.title.clone(),
            description: tax.description.clone().unwrap_or_default(),
            pricing: PricingInput::from_values(
                tax.tax_type,
                tax.percentage,
                tax.amount,
            ),
        }
    }

    /// First problem blocking submission, if any.
    pub fn validate(&self) -> Option<String> {
        if self.title.trim().is_empty() {
            return Some(TITLE_REQUIRED_MESSAGE.to_string());
        }
        if self.title.trim().chars().count() > requests::TAX_TITLE_MAX_LEN {
            return Some(format!(
                "Title must be at most {} characters",
                requests::TAX_TITLE_MAX_LEN
            ));
        }
        self.pricing.validate().map(str::to_string)
    }

    fn description(&self) -> Option<String> {
        let description = self.description.trim();
        (!description.is_empty()).then(|| description.to_string())
    }

    pub fn to_create_request(
        &self,
        operational_location_id: LocationId,
    ) -> Result<requests::CreateCompanyTax, String> {
        if let Some(error) = self.validate() {
            return Err(error);
        }
        let (percentage, amount) = self.pricing.canonical()?;
        Ok(requests::CreateCompanyTax {
            operational_location_id,
            title: self.title.trim().to_string(),
            description: self.description(),
            tax_type: self.pricing.pricing_type,
            percentage,
            amount,
        })
    }

    pub fn to_update_request(
        &self,
    ) -> Result<requests::UpdateCompanyTax, String> {
        if let Some(error) = self.validate() {
            return Err(error);
        }
        let (percentage, amount) = self.pricing.canonical()?;
        Ok(requests::UpdateCompanyTax {
            title: self.title.trim().to_string(),
            description: self.description(),
            tax_type: self.pricing.pricing_type,
            percentage,
            amount,
        })
    }
}

/// CDW settings form. Pricing is only checked while the waiver is enabled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CdwFormState {
    pub enabled: bool,
    pub description: String,
    pub pricing: PricingInput,
}

impl CdwFormState {
    pub fn from_settings(settings: &responses::CdwSettings) -> Self {
        Self {
            enabled: settings.enabled,
            description: settings.description.clone().unwrap_or_default(),
            pricing: PricingInput::from_values(
                settings.cdw_type,
                settings.percentage,
                settings.amount,
            ),
        }
    }

    pub fn validate(&self) -> Option<String> {
        if !self.enabled {
            return None;
        }
        self.pricing.validate().map(str::to_string)
    }

    pub fn to_request(&self) -> Result<requests::UpdateCdwSettings, String> {
        let (percentage, amount) = if self.enabled {
            self.pricing.canonical()?
        } else {
            (None, None)
        };
        let description = self.description.trim();
        Ok(requests::UpdateCdwSettings {
            enabled: self.enabled,
            cdw_type: self.pricing.pricing_type,
            percentage,
            amount,
            description: (!description.is_empty())
                .then(|| description.to_string()),
        })
    }
}
