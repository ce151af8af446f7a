//! Client-side validation for the registration form.
//!
//! Mirrors the auth service's own rules so most mistakes are caught before a
//! round trip; the server remains authoritative.

use std::collections::BTreeMap;

use nexabank_http::types::RegisterRequest;

/// Raw form state, bound field-by-field to the inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub date_of_birth: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    pub aadhar_number: String,
    pub pan_number: String,
}

impl RegisterForm {
    /// Convert to the wire request, mapping empty optional fields to `None`.
    pub fn to_request(&self) -> RegisterRequest {
        let optional = |value: &str| {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        };

        RegisterRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            date_of_birth: optional(&self.date_of_birth),
            address: optional(&self.address),
            city: optional(&self.city),
            state: optional(&self.state),
            country: optional(&self.country),
            postal_code: optional(&self.postal_code),
            aadhar_number: optional(&self.aadhar_number),
            pan_number: optional(&self.pan_number),
            user_type: None,
        }
    }
}

/// Validate the form, returning messages keyed by field id. Empty map means
/// the form may be submitted.
pub fn validate(form: &RegisterForm) -> BTreeMap<&'static str, &'static str> {
    let mut errors = BTreeMap::new();

    let email = form.email.trim();
    if email.is_empty() {
        errors.insert("email", "Email is required");
    } else if email.len() > 100 || !looks_like_email(email) {
        errors.insert("email", "Please enter a valid email address");
    }

    if form.password.len() < 8 || form.password.len() > 128 {
        errors.insert("password", "Password must be 8-128 characters");
    } else if !is_strong_password(&form.password) {
        errors.insert(
            "password",
            "Password must contain an uppercase letter, a lowercase letter, a number, and a special character",
        );
    }

    if form.confirm_password != form.password {
        errors.insert("confirmPassword", "Passwords don't match");
    }

    if !is_person_name(form.first_name.trim()) {
        errors.insert(
            "firstName",
            "First name must be 2-50 letters, spaces, hyphens, or apostrophes",
        );
    }
    if !is_person_name(form.last_name.trim()) {
        errors.insert(
            "lastName",
            "Last name must be 2-50 letters, spaces, hyphens, or apostrophes",
        );
    }

    if !is_phone_number(form.phone_number.trim()) {
        errors.insert(
            "phoneNumber",
            "Phone number must be exactly 10 digits starting with 6, 7, 8, or 9",
        );
    }

    let dob = form.date_of_birth.trim();
    if dob.is_empty() {
        errors.insert("dateOfBirth", "Date of birth is required");
    } else if !is_iso_date(dob) {
        errors.insert("dateOfBirth", "Date of birth must be in YYYY-MM-DD format");
    }

    if form.address.trim().len() > 200 {
        errors.insert("address", "Address cannot exceed 200 characters");
    }
    let city = form.city.trim();
    if !city.is_empty() && !is_place_name(city) {
        errors.insert(
            "city",
            "City can only contain letters, spaces, hyphens, and apostrophes",
        );
    }
    let state = form.state.trim();
    if !state.is_empty() && !is_place_name(state) {
        errors.insert(
            "state",
            "State can only contain letters, spaces, hyphens, and apostrophes",
        );
    }

    let postal = form.postal_code.trim();
    if !postal.is_empty() && !is_postal_code(postal) {
        errors.insert(
            "postalCode",
            "Postal code must be exactly 6 digits and cannot start with 0",
        );
    }

    let aadhar = form.aadhar_number.trim();
    if !aadhar.is_empty() && !is_aadhar(aadhar) {
        errors.insert(
            "aadharNumber",
            "Aadhar number must be exactly 12 digits and cannot start with 0 or 1",
        );
    }

    let pan = form.pan_number.trim();
    if !pan.is_empty() && !is_pan(pan) {
        errors.insert("panNumber", "PAN number must follow format: AAAAA9999A");
    }

    errors
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

fn is_strong_password(value: &str) -> bool {
    const SPECIALS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";
    value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| SPECIALS.contains(c))
}

fn is_person_name(value: &str) -> bool {
    (2..=50).contains(&value.len())
        && value
            .chars()
            .all(|c| c.is_ascii_alphabetic() || matches!(c, ' ' | '\'' | '-'))
}

fn is_place_name(value: &str) -> bool {
    value.len() <= 50
        && value
            .chars()
            .all(|c| c.is_ascii_alphabetic() || matches!(c, ' ' | '\'' | '-'))
}

fn is_phone_number(value: &str) -> bool {
    value.len() == 10
        && value.chars().all(|c| c.is_ascii_digit())
        && matches!(value.as_bytes()[0], b'6'..=b'9')
}

fn is_iso_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| matches!(i, 4 | 7) || b.is_ascii_digit())
}

fn is_postal_code(value: &str) -> bool {
    value.len() == 6
        && value.chars().all(|c| c.is_ascii_digit())
        && !value.starts_with('0')
}

fn is_aadhar(value: &str) -> bool {
    value.len() == 12
        && value.chars().all(|c| c.is_ascii_digit())
        && matches!(value.as_bytes()[0], b'2'..=b'9')
}

fn is_pan(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes[..5].iter().all(u8::is_ascii_uppercase)
        && bytes[5..9].iter().all(u8::is_ascii_digit)
        && bytes[9].is_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegisterForm {
        RegisterForm {
            email: "ada@nexabank.test".into(),
            password: "Str0ng!pass".into(),
            confirm_password: "Str0ng!pass".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            phone_number: "9876543210".into(),
            date_of_birth: "1990-12-10".into(),
            ..RegisterForm::default()
        }
    }

    #[test]
    fn valid_form_has_no_errors() {
        assert!(validate(&valid_form()).is_empty());
    }

    #[test]
    fn required_fields_are_enforced() {
        let errors = validate(&RegisterForm::default());
        for field in ["email", "password", "firstName", "lastName", "phoneNumber", "dateOfBirth"] {
            assert!(errors.contains_key(field), "missing error for {field}");
        }
    }

    #[test]
    fn password_rules() {
        let mut form = valid_form();
        form.password = "weakpass".into();
        form.confirm_password = form.password.clone();
        assert!(validate(&form).contains_key("password"));

        form.password = "Str0ng!pass".into();
        form.confirm_password = "Different1!".into();
        assert!(validate(&form).contains_key("confirmPassword"));
    }

    #[test]
    fn phone_number_shape() {
        let mut form = valid_form();
        for bad in ["12345", "1234567890", "98765432101", "98765abc10"] {
            form.phone_number = bad.into();
            assert!(validate(&form).contains_key("phoneNumber"), "{bad} accepted");
        }
    }

    #[test]
    fn optional_document_numbers_validate_only_when_present() {
        let mut form = valid_form();
        assert!(validate(&form).is_empty());

        form.postal_code = "012345".into();
        form.aadhar_number = "123456789012".into();
        form.pan_number = "abcde1234f".into();
        let errors = validate(&form);
        assert!(errors.contains_key("postalCode"));
        assert!(errors.contains_key("aadharNumber"));
        assert!(errors.contains_key("panNumber"));

        form.postal_code = "560001".into();
        form.aadhar_number = "234567890123".into();
        form.pan_number = "ABCDE1234F".into();
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn empty_optionals_become_none_on_the_wire() {
        let request = valid_form().to_request();
        assert_eq!(request.address, None);
        assert_eq!(request.pan_number, None);
        assert_eq!(request.date_of_birth.as_deref(), Some("1990-12-10"));
    }
}
