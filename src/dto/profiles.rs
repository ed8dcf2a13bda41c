use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProfileRequest {
    #[validate(length(min = 1))]
    pub bio: String,
    #[validate(url)]
    pub avatar_url: Option<String>,
    pub user_id: i32,
}

/// The owning user cannot be reassigned.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1))]
    pub bio: Option<String>,
    /// Absent keeps the current avatar, `null` removes it.
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>, nullable)]
    #[validate(url)]
    pub avatar_url: Option<Option<String>>,
}

// Only called when the key exists, so `null` becomes `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> UpdateProfileRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn avatar_null_differs_from_absent() {
        assert_eq!(parse(r#"{"bio":"hi"}"#).avatar_url, None);
        assert_eq!(parse(r#"{"avatar_url":null}"#).avatar_url, Some(None));
        assert_eq!(
            parse(r#"{"avatar_url":"https://example.com/a.png"}"#).avatar_url,
            Some(Some("https://example.com/a.png".to_string()))
        );
    }

    #[test]
    fn cleared_avatar_passes_validation() {
        assert!(parse(r#"{"avatar_url":null}"#).validate().is_ok());
        assert!(parse(r#"{"avatar_url":"not a url"}"#).validate().is_err());
    }
}
