//! Registration input

use std::fmt;

/// Form field id that receives the password a second time.
pub const REPEATED_PASSWORD_FIELD: &str = "repeatedPassword";

/// User-supplied registration data, collected in full before the workflow
/// starts and read-only thereafter.
#[derive(Clone, Default)]
pub struct RegistrationRecord {
    pub first_name: String,
    pub last_name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone_number: String,
    pub ssn: String,
    pub username: String,
    pub password: String,
}

impl RegistrationRecord {
    /// Ordered (form field id, value) pairs matching the registration form.
    pub fn fields(&self) -> [(&'static str, &str); 10] {
        [
            ("customer.firstName", self.first_name.as_str()),
            ("customer.lastName", self.last_name.as_str()),
            ("customer.address.street", self.street.as_str()),
            ("customer.address.city", self.city.as_str()),
            ("customer.address.state", self.state.as_str()),
            ("customer.address.zipCode", self.zip_code.as_str()),
            ("customer.phoneNumber", self.phone_number.as_str()),
            ("customer.ssn", self.ssn.as_str()),
            ("customer.username", self.username.as_str()),
            ("customer.password", self.password.as_str()),
        ]
    }
}

// SSN and password stay out of debug output and logs.
impl fmt::Debug for RegistrationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRecord")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("username", &self.username)
            .field("ssn", &"<redacted>")
            .field("password", &"<redacted>")
            .finish_non_exhaustive()
    }
}
