//! User domain entity and related types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "dob")]
    pub date_of_birth: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Age in whole years as of `today`.
    ///
    /// Returns 0 for a date of birth in the future rather than failing.
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        today.years_since(self.date_of_birth).unwrap_or(0)
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewUser {
    /// User display name
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// User email address
    #[schema(example = "ada@example.com")]
    pub email: String,
    /// Contact phone number
    #[schema(example = "+44 20 7946 0000")]
    pub phone: String,
    /// Date of birth (ISO 8601 date)
    #[serde(rename = "dob")]
    pub date_of_birth: NaiveDate,
    /// Optional avatar image URL
    pub avatar_url: Option<String>,
}

/// Partial update of a user.
///
/// Every field is optional; absent fields keep the stored value.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(rename = "dob")]
    pub date_of_birth: Option<NaiveDate>,
    pub avatar_url: Option<String>,
}

impl UserPatch {
    /// Merge this patch over an existing user, yielding the full set of
    /// values to persist. Fields not present in the patch fall back to
    /// the stored values.
    pub fn apply(self, existing: User) -> User {
        User {
            id: existing.id,
            name: self.name.unwrap_or(existing.name),
            email: self.email.unwrap_or(existing.email),
            phone: self.phone.unwrap_or(existing.phone),
            date_of_birth: self.date_of_birth.unwrap_or(existing.date_of_birth),
            avatar_url: self.avatar_url.or(existing.avatar_url),
            created_at: existing.created_at,
            updated_at: Utc::now(),
        }
    }
}

/// User with derived social-graph fields, as returned by list/get endpoints.
///
/// `age` is computed from the date of birth at query time; the counts are
/// aggregations over the follow edges. None of these are stored.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserProfile {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "dob")]
    pub date_of_birth: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Whole years from date of birth to the current date
    pub age: u32,
    /// Number of users following this user
    pub follower_count: u64,
    /// Number of users this user follows
    pub following_count: u64,
    pub created_at: DateTime<Utc>,
}

/// Compact user representation for follower/following listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserSummary {
    pub id: i32,
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_user() -> User {
        User {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "123".to_string(),
            date_of_birth: date(1990, 6, 15),
            avatar_url: Some("https://example.com/a.png".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn age_counts_whole_years() {
        let user = sample_user();
        assert_eq!(user.age_on(date(2020, 6, 15)), 30);
        // Birthday not reached yet that year
        assert_eq!(user.age_on(date(2020, 6, 14)), 29);
    }

    #[test]
    fn age_is_zero_for_future_dob() {
        let user = sample_user();
        assert_eq!(user.age_on(date(1980, 1, 1)), 0);
    }

    #[test]
    fn patch_overrides_only_present_fields() {
        let user = sample_user();
        let patch = UserPatch {
            email: Some("new@example.com".to_string()),
            ..Default::default()
        };

        let merged = patch.apply(user.clone());

        assert_eq!(merged.email, "new@example.com");
        assert_eq!(merged.name, user.name);
        assert_eq!(merged.phone, user.phone);
        assert_eq!(merged.date_of_birth, user.date_of_birth);
        assert_eq!(merged.avatar_url, user.avatar_url);
        assert_eq!(merged.id, user.id);
    }

    #[test]
    fn empty_patch_preserves_everything() {
        let user = sample_user();
        let merged = UserPatch::default().apply(user.clone());

        assert_eq!(merged.name, user.name);
        assert_eq!(merged.email, user.email);
        assert_eq!(merged.avatar_url, user.avatar_url);
    }
}
