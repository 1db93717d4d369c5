//! User profile and membership models.

use serde::{Deserialize, Deserializer, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Signed-in user's profile as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct User {
    pub id: String,
    pub email: String,
    pub display_name: String,
    /// Nickname shown in the game client
    pub in_game_nickname: String,
    /// Color tag used for this member in group views (e.g. "#ff8800")
    pub color_hex: String,
    /// Character name, set once the profile is verified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_item_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
}

/// Partial profile update applied locally with [`UserUpdate::apply_to`].
///
/// Only fields that are `Some` overwrite the profile. The optional profile
/// fields take `Some(None)` to clear them; in JSON an explicit `null` clears
/// and an absent key leaves the field alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_game_nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_hex: Option<String>,
    #[serde(
        default,
        deserialize_with = "explicit_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub character_nickname: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "explicit_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub character_item_level: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "explicit_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_verified: Option<Option<bool>>,
}

/// A present key (even `null`) becomes `Some`, so `null` maps to `Some(None)`.
fn explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl UserUpdate {
    /// Shallow-merge the set fields into `user`.
    pub fn apply_to(self, user: &mut User) {
        if let Some(id) = self.id {
            user.id = id;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(display_name) = self.display_name {
            user.display_name = display_name;
        }
        if let Some(in_game_nickname) = self.in_game_nickname {
            user.in_game_nickname = in_game_nickname;
        }
        if let Some(color_hex) = self.color_hex {
            user.color_hex = color_hex;
        }
        if let Some(character_nickname) = self.character_nickname {
            user.character_nickname = character_nickname;
        }
        if let Some(character_item_level) = self.character_item_level {
            user.character_item_level = character_item_level;
        }
        if let Some(is_verified) = self.is_verified {
            user.is_verified = is_verified;
        }
    }
}

/// Token and profile returned by login and signup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Public roster entry for a guild member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MemberInfo {
    pub id: String,
    pub display_name: String,
    pub in_game_nickname: String,
    pub color_hex: String,
}

// ─── Requests ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub display_name: String,
    pub in_game_nickname: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ProfileUpdateRequest {
    pub display_name: String,
    pub in_game_nickname: String,
}
