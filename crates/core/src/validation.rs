//! Field-level validation for checkout and booking submissions.
//!
//! The storefront UI enforces the same rules before letting the customer
//! submit, but the API boundary re-runs everything here because client-side
//! checks are bypassable. Validators collect every failing field instead of
//! stopping at the first, so forms can highlight all problems at once.
//! Messages are customer-facing, in Italian.

use serde::{Deserialize, Serialize};

use crate::rules::geography::GeographyPolicy;
use crate::rules::hours::WeeklySchedule;
use crate::types::email::Email;
use crate::types::line_item::LineItem;

/// One rejected field with a customer-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Form field the message belongs to, e.g. `zip` or `billing.zip`.
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Raw address fields as submitted by the checkout form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address_line: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Raw checkout submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutInput {
    pub customer: AddressInput,
    /// Separate billing address, when it differs from the shipping one.
    #[serde(default)]
    pub billing: Option<AddressInput>,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    #[serde(default)]
    pub transaction_id: String,
}

/// Raw booking submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingInput {
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: String,
    #[serde(default)]
    pub product_list: String,
    #[serde(default)]
    pub pickup_date: String,
    #[serde(default)]
    pub pickup_time: String,
}

/// Validate a checkout submission.
///
/// Checks the shipping address (and billing address when present) against
/// format rules and the geography block-lists, requires a non-empty order
/// with positive quantities and a payment transaction id. Returns an empty
/// vector when the submission is acceptable.
#[must_use]
pub fn validate_checkout(input: &CheckoutInput, geography: &GeographyPolicy) -> Vec<FieldError> {
    let mut errors = Vec::new();

    validate_address(&input.customer, "", geography, &mut errors);
    if let Some(billing) = &input.billing {
        validate_address(billing, "billing.", geography, &mut errors);
    }

    if input.line_items.is_empty() {
        errors.push(FieldError::new("lineItems", "Il carrello è vuoto"));
    } else if input.line_items.iter().any(|line| line.quantity == 0) {
        errors.push(FieldError::new(
            "lineItems",
            "Ogni prodotto deve avere quantità di almeno 1",
        ));
    }

    if input.transaction_id.trim().is_empty() {
        errors.push(FieldError::new(
            "transactionId",
            "Pagamento non confermato, riprova",
        ));
    }

    errors
}

/// Validate a booking submission against the shop's opening hours.
#[must_use]
pub fn validate_booking(input: &BookingInput, schedule: &WeeklySchedule) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if char_count(&input.customer_name) < 2 {
        errors.push(FieldError::new("customerName", "Inserisci il tuo nome"));
    }
    if digit_count(&input.customer_phone) < 9 {
        errors.push(FieldError::new(
            "customerPhone",
            "Inserisci un numero di telefono valido",
        ));
    }
    if char_count(&input.product_list) < 3 {
        errors.push(FieldError::new(
            "productList",
            "Indica i prodotti che vuoi prenotare",
        ));
    }

    let date_missing = input.pickup_date.trim().is_empty();
    let time_missing = input.pickup_time.trim().is_empty();
    if date_missing {
        errors.push(FieldError::new("pickupDate", "Scegli una data di ritiro"));
    }
    if time_missing {
        errors.push(FieldError::new("pickupTime", "Scegli un orario di ritiro"));
    }

    // The hours check only makes sense once both fields are present; the
    // failure is attributed to the time field, like the form does.
    if !date_missing
        && !time_missing
        && !schedule.is_valid_pickup_time(&input.pickup_date, &input.pickup_time)
    {
        errors.push(FieldError::new(
            "pickupTime",
            "L'orario scelto è fuori dall'orario di apertura",
        ));
    }

    errors
}

fn validate_address(
    address: &AddressInput,
    prefix: &str,
    geography: &GeographyPolicy,
    errors: &mut Vec<FieldError>,
) {
    let field = |name: &str| format!("{prefix}{name}");

    if char_count(&address.name) < 2 {
        errors.push(FieldError::new(field("name"), "Inserisci il nome completo"));
    }
    if char_count(&address.address_line) < 5 {
        errors.push(FieldError::new(
            field("addressLine"),
            "Inserisci un indirizzo valido",
        ));
    }

    if char_count(&address.city) < 2 {
        errors.push(FieldError::new(field("city"), "Inserisci una città valida"));
    } else if geography.is_city_blocked(&address.city) {
        errors.push(FieldError::new(
            field("city"),
            "Non effettuiamo spedizioni in questa località",
        ));
    }

    let province = address.province.trim();
    if province.chars().count() != 2 || !province.chars().all(char::is_alphabetic) {
        errors.push(FieldError::new(
            field("province"),
            "La provincia deve essere di 2 lettere",
        ));
    } else if geography.is_province_blocked(province) {
        errors.push(FieldError::new(
            field("province"),
            "Non effettuiamo spedizioni in Sicilia e Sardegna",
        ));
    }

    let zip = address.zip.trim();
    if zip.chars().count() != 5 || !zip.chars().all(|c| c.is_ascii_digit()) {
        errors.push(FieldError::new(field("zip"), "Il CAP deve essere di 5 cifre"));
    } else if geography.is_zip_blocked(zip) {
        errors.push(FieldError::new(
            field("zip"),
            "Non effettuiamo spedizioni verso le isole minori",
        ));
    }

    if Email::parse(address.email.trim()).is_err() {
        errors.push(FieldError::new(field("email"), "Inserisci un'email valida"));
    }
    if digit_count(&address.phone) < 9 {
        errors.push(FieldError::new(
            field("phone"),
            "Inserisci un numero di telefono valido",
        ));
    }
}

fn char_count(s: &str) -> usize {
    s.trim().chars().count()
}

/// Digits in a phone number, ignoring separators and the leading `+`.
fn digit_count(s: &str) -> usize {
    s.chars().filter(char::is_ascii_digit).count()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn good_address() -> AddressInput {
        AddressInput {
            name: "Mario Rossi".to_owned(),
            address_line: "Via Roma 12".to_owned(),
            city: "Milano".to_owned(),
            province: "MI".to_owned(),
            zip: "20100".to_owned(),
            email: "mario.rossi@example.it".to_owned(),
            phone: "333 123 4567".to_owned(),
            notes: None,
        }
    }

    fn good_checkout() -> CheckoutInput {
        CheckoutInput {
            customer: good_address(),
            billing: None,
            line_items: vec![LineItem {
                product_id: "salsiccia-asino".to_owned(),
                name: "Salsiccia di asino".to_owned(),
                unit_price: Decimal::TEN,
                weight_per_unit: Decimal::ONE,
                quantity: 2,
            }],
            transaction_id: "5TY05013RG002845M".to_owned(),
        }
    }

    fn fields(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_valid_checkout_passes() {
        let errors = validate_checkout(&good_checkout(), &GeographyPolicy::default());
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn test_blocked_destination_rejected_per_field() {
        let mut input = good_checkout();
        input.customer.city = "Palermo".to_owned();
        input.customer.province = "PA".to_owned();
        input.customer.zip = "90010".to_owned();

        let errors = validate_checkout(&input, &GeographyPolicy::default());
        let fields = fields(&errors);
        assert!(fields.contains(&"city"));
        assert!(fields.contains(&"province"));
        assert!(fields.contains(&"zip"));
    }

    #[test]
    fn test_malformed_province_and_zip() {
        let mut input = good_checkout();
        input.customer.province = "MIL".to_owned();
        input.customer.zip = "2010A".to_owned();

        let errors = validate_checkout(&input, &GeographyPolicy::default());
        let fields = fields(&errors);
        assert!(fields.contains(&"province"));
        assert!(fields.contains(&"zip"));
    }

    #[test]
    fn test_billing_errors_are_prefixed() {
        let mut input = good_checkout();
        let mut billing = good_address();
        billing.zip = "123".to_owned();
        input.billing = Some(billing);

        let errors = validate_checkout(&input, &GeographyPolicy::default());
        assert!(fields(&errors).contains(&"billing.zip"));
    }

    #[test]
    fn test_empty_cart_rejected() {
        let mut input = good_checkout();
        input.line_items.clear();
        let errors = validate_checkout(&input, &GeographyPolicy::default());
        assert!(fields(&errors).contains(&"lineItems"));
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut input = good_checkout();
        input.line_items.first_mut().unwrap().quantity = 0;
        let errors = validate_checkout(&input, &GeographyPolicy::default());
        assert!(fields(&errors).contains(&"lineItems"));
    }

    #[test]
    fn test_missing_transaction_rejected() {
        let mut input = good_checkout();
        input.transaction_id = "  ".to_owned();
        let errors = validate_checkout(&input, &GeographyPolicy::default());
        assert!(fields(&errors).contains(&"transactionId"));
    }

    #[test]
    fn test_bad_email_and_short_phone() {
        let mut input = good_checkout();
        input.customer.email = "chiocciola-mancante".to_owned();
        input.customer.phone = "12345".to_owned();
        let errors = validate_checkout(&input, &GeographyPolicy::default());
        let fields = fields(&errors);
        assert!(fields.contains(&"email"));
        assert!(fields.contains(&"phone"));
    }

    fn good_booking() -> BookingInput {
        BookingInput {
            customer_name: "Lucia Greco".to_owned(),
            customer_phone: "328 765 4321".to_owned(),
            product_list: "2 kg pezzetti di cavallo".to_owned(),
            pickup_date: "2025-03-06".to_owned(), // a Thursday
            pickup_time: "09:30".to_owned(),
        }
    }

    #[test]
    fn test_valid_booking_passes() {
        let errors = validate_booking(&good_booking(), &WeeklySchedule::default());
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn test_booking_outside_hours_blamed_on_time_field() {
        let mut input = good_booking();
        input.pickup_time = "14:00".to_owned();
        let errors = validate_booking(&input, &WeeklySchedule::default());
        assert_eq!(fields(&errors), vec!["pickupTime"]);
    }

    #[test]
    fn test_booking_missing_slot_fields() {
        let mut input = good_booking();
        input.pickup_date = String::new();
        input.pickup_time = String::new();
        let errors = validate_booking(&input, &WeeklySchedule::default());
        let fields = fields(&errors);
        assert!(fields.contains(&"pickupDate"));
        assert!(fields.contains(&"pickupTime"));
        // No hours check without a usable slot.
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn test_booking_short_fields() {
        let input = BookingInput {
            customer_name: "L".to_owned(),
            customer_phone: "123".to_owned(),
            product_list: "ok".to_owned(),
            pickup_date: "2025-03-06".to_owned(),
            pickup_time: "09:30".to_owned(),
        };
        let errors = validate_booking(&input, &WeeklySchedule::default());
        let fields = fields(&errors);
        assert!(fields.contains(&"customerName"));
        assert!(fields.contains(&"customerPhone"));
        assert!(fields.contains(&"productList"));
    }
}
