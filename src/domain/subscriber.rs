/// Provenance tag stamped on every record this service inserts.
pub const SIGNUP_SOURCE: &str = "signup-service";

/// One form submission. Stored documents may carry a store-assigned `_id`,
/// which deserialization ignores.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Subscriber {
    pub name: String,
    pub email: String,
    pub source: String,
}

impl Subscriber {
    pub fn new(name: String, email: String) -> Self {
        Self {
            name,
            email,
            source: SIGNUP_SOURCE.into(),
        }
    }
}
