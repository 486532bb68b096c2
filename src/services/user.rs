use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::{generate_reset_token, hash_password, hash_token, verify_password};
use crate::config::ProgramRules;
use crate::db::operations::assessment as assessment_ops;
use crate::db::operations::progress as progress_ops;
use crate::db::operations::simulation as simulation_ops;
use crate::db::operations::user as user_ops;
use crate::db::operations::user::{NewUser, ProfileUpdate, RoleFilter, UserQuery, UserRecord};
use crate::db::DatabaseProxy;
use crate::response::AppError;
use crate::validators::{
    required, sanitize_input, validate_email, validate_password, validate_username,
};

pub const RESET_TOKEN_TTL_HOURS: i64 = 24;
pub const USERS_PER_PAGE: i64 = 20;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
    pub specialization: Option<String>,
    pub year_level: Option<String>,
    pub birthday: Option<String>,
    pub address: Option<String>,
}

/// Fields a learner may change on their own profile. Anything else in the
/// request body is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfilePatch {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub specialization: Option<String>,
    pub year_level: Option<String>,
    pub birthday: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSummary {
    pub total: i64,
    pub passed: i64,
    pub average_percentage: f64,
    pub best_percentage: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSummary {
    pub total: i64,
    pub completed: i64,
    pub average_score: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatistics {
    pub modules_completed: i64,
    pub total_modules: i64,
    pub completion_percentage: i64,
    pub assessments: AssessmentSummary,
    pub simulations: SimulationSummary,
    pub total_score: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformerSummary {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub modules_completed: i64,
    pub simulations_completed: i64,
    pub total_score: i64,
    pub completion_percentage: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPage {
    pub users: Vec<UserRecord>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenCleanup {
    pub reset_tokens_removed: u64,
    pub sessions_removed: u64,
}

pub fn completion_percentage(modules_completed: i64, total_modules: i64) -> i64 {
    if total_modules <= 0 {
        return 0;
    }
    (modules_completed.clamp(0, total_modules) * 100) / total_modules
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub async fn create_user(
    proxy: &DatabaseProxy,
    bcrypt_cost: u32,
    input: RegistrationInput,
    is_admin: bool,
) -> Result<UserRecord, AppError> {
    let username = required(input.username.as_deref(), "Username")?.to_string();
    let email = required(input.email.as_deref(), "Email")?.to_lowercase();
    let password = required(input.password.as_deref(), "Password")?.to_string();
    let specialization = sanitize_input(required(input.specialization.as_deref(), "Specialization")?);
    let year_level = sanitize_input(required(input.year_level.as_deref(), "Year level")?);

    validate_username(&username)?;
    validate_email(&email)?;
    validate_password(&password)?;

    if user_ops::username_exists(proxy, &username).await? {
        return Err(AppError::conflict("Username already exists"));
    }
    if user_ops::email_taken(proxy, &email, None).await? {
        return Err(AppError::conflict("Email already registered"));
    }

    let full_name = trimmed(input.full_name)
        .map(|name| sanitize_input(&name))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| format!("User {username}"));

    let password_hash = hash_password(&password, bcrypt_cost)?;
    let new_user = NewUser {
        username,
        email,
        password_hash,
        full_name,
        specialization,
        year_level,
        birthday: trimmed(input.birthday),
        address: trimmed(input.address).map(|a| sanitize_input(&a)),
        is_admin,
    };

    let id = user_ops::insert_user(proxy, &new_user).await?;
    tracing::info!(user_id = id, username = %new_user.username, is_admin, "user created");

    load_user(proxy, id).await
}

pub async fn load_user(proxy: &DatabaseProxy, user_id: i64) -> Result<UserRecord, AppError> {
    user_ops::find_user_by_id(proxy, user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))
}

pub async fn authenticate(
    proxy: &DatabaseProxy,
    username: &str,
    password: &str,
) -> Result<UserRecord, AppError> {
    let invalid = || AppError::unauthorized("Invalid username or password");

    let user = user_ops::find_user_by_username(proxy, username.trim())
        .await?
        .ok_or_else(invalid)?;

    if !verify_password(password, &user.password_hash) {
        tracing::debug!(user_id = user.id, "password mismatch");
        return Err(invalid());
    }
    Ok(user)
}

pub async fn update_profile(
    proxy: &DatabaseProxy,
    user_id: i64,
    patch: ProfilePatch,
) -> Result<UserRecord, AppError> {
    apply_profile_patch(proxy, user_id, patch, None).await
}

/// Admin edit: the profile fields plus the admin flag.
pub async fn admin_update_user(
    proxy: &DatabaseProxy,
    user_id: i64,
    patch: ProfilePatch,
    is_admin: Option<bool>,
) -> Result<UserRecord, AppError> {
    apply_profile_patch(proxy, user_id, patch, is_admin).await
}

async fn apply_profile_patch(
    proxy: &DatabaseProxy,
    user_id: i64,
    patch: ProfilePatch,
    is_admin: Option<bool>,
) -> Result<UserRecord, AppError> {
    load_user(proxy, user_id).await?;

    let email = match trimmed(patch.email) {
        Some(email) => {
            let email = email.to_lowercase();
            validate_email(&email)?;
            if user_ops::email_taken(proxy, &email, Some(user_id)).await? {
                return Err(AppError::conflict("Email already registered"));
            }
            Some(email)
        }
        None => None,
    };

    // An empty string clears the optional columns; an absent key leaves them.
    let clearable = |value: Option<String>| {
        value.map(|v| Some(sanitize_input(&v)).filter(|v| !v.is_empty()))
    };

    let update = ProfileUpdate {
        email,
        full_name: trimmed(patch.full_name).map(|v| sanitize_input(&v)),
        specialization: trimmed(patch.specialization).map(|v| sanitize_input(&v)),
        year_level: trimmed(patch.year_level).map(|v| sanitize_input(&v)),
        birthday: clearable(patch.birthday),
        address: clearable(patch.address),
        is_admin,
    };

    user_ops::update_profile(proxy, user_id, &update).await?;
    load_user(proxy, user_id).await
}

pub async fn change_password(
    proxy: &DatabaseProxy,
    bcrypt_cost: u32,
    user_id: i64,
    current_password: &str,
    new_password: &str,
) -> Result<(), AppError> {
    let user = load_user(proxy, user_id).await?;
    if !verify_password(current_password, &user.password_hash) {
        return Err(AppError::unauthorized("Current password is incorrect"));
    }
    validate_password(new_password)?;

    let password_hash = hash_password(new_password, bcrypt_cost)?;
    user_ops::update_password_hash(proxy, user_id, &password_hash).await?;
    let revoked = user_ops::delete_user_sessions(proxy, user_id).await?;
    tracing::info!(user_id, revoked, "password changed");
    Ok(())
}

/// Returns the raw token for a known email. Unknown addresses yield `None`
/// so callers can answer identically either way.
pub async fn request_password_reset(
    proxy: &DatabaseProxy,
    email: &str,
) -> Result<Option<String>, AppError> {
    let email = email.trim().to_lowercase();
    let Some(user) = user_ops::find_user_by_email(proxy, &email).await? else {
        tracing::debug!("password reset requested for unknown email");
        return Ok(None);
    };

    user_ops::invalidate_reset_tokens(proxy, user.id).await?;

    let token = generate_reset_token();
    let expires_at = Utc::now() + Duration::hours(RESET_TOKEN_TTL_HOURS);
    user_ops::insert_reset_token(proxy, user.id, &hash_token(&token), expires_at).await?;
    tracing::info!(user_id = user.id, "password reset token issued");

    Ok(Some(token))
}

pub async fn reset_password(
    proxy: &DatabaseProxy,
    bcrypt_cost: u32,
    token: &str,
    new_password: &str,
) -> Result<(), AppError> {
    let invalid = || AppError::bad_request("Invalid or expired reset token");

    let record = user_ops::find_reset_token(proxy, &hash_token(token.trim()))
        .await?
        .ok_or_else(invalid)?;
    if record.used || record.expires_at <= Utc::now() {
        return Err(invalid());
    }

    validate_password(new_password)?;

    let password_hash = hash_password(new_password, bcrypt_cost)?;
    user_ops::update_password_hash(proxy, record.user_id, &password_hash).await?;
    user_ops::mark_reset_token_used(proxy, record.id).await?;
    user_ops::delete_user_sessions(proxy, record.user_id).await?;
    tracing::info!(user_id = record.user_id, "password reset completed");
    Ok(())
}

pub async fn user_statistics(
    proxy: &DatabaseProxy,
    rules: &ProgramRules,
    user_id: i64,
) -> Result<UserStatistics, AppError> {
    let modules_completed = progress_ops::count_completed(proxy, user_id).await?;
    let assessments = assessment_ops::stats(proxy, None, Some(user_id), None).await?;
    let simulations = simulation_ops::stats(proxy, None, Some(user_id)).await?;
    let total_score = assessment_ops::sum_scores(proxy, user_id).await?;

    Ok(UserStatistics {
        modules_completed,
        total_modules: rules.total_modules,
        completion_percentage: completion_percentage(modules_completed, rules.total_modules),
        assessments: AssessmentSummary {
            total: assessments.total_attempts,
            passed: assessments.passed_attempts,
            average_percentage: round1(assessments.average_percentage.unwrap_or(0.0)),
            best_percentage: assessments.best_percentage.unwrap_or(0),
        },
        simulations: SimulationSummary {
            total: simulations.total_attempts,
            completed: simulations.completed_attempts,
            average_score: round1(simulations.average_score.unwrap_or(0.0)),
        },
        total_score,
    })
}

pub async fn top_performers(
    proxy: &DatabaseProxy,
    rules: &ProgramRules,
    limit: i64,
) -> Result<Vec<PerformerSummary>, AppError> {
    let users = user_ops::top_performers(proxy, limit.clamp(1, 100)).await?;
    Ok(users
        .into_iter()
        .map(|user| PerformerSummary {
            completion_percentage: completion_percentage(
                user.modules_completed,
                rules.total_modules,
            ),
            id: user.id,
            username: user.username,
            full_name: user.full_name,
            modules_completed: user.modules_completed,
            simulations_completed: user.simulations_completed,
            total_score: user.total_score,
        })
        .collect())
}

pub async fn cleanup_expired_tokens(proxy: &DatabaseProxy) -> Result<TokenCleanup, AppError> {
    let now = Utc::now();
    let reset_tokens_removed = user_ops::delete_expired_reset_tokens(proxy, now).await?;
    let sessions_removed = user_ops::delete_expired_sessions(proxy, now).await?;
    tracing::info!(reset_tokens_removed, sessions_removed, "expired tokens purged");
    Ok(TokenCleanup {
        reset_tokens_removed,
        sessions_removed,
    })
}

/// Recomputes the denormalized counters on the user row from stored results.
pub async fn refresh_counters(proxy: &DatabaseProxy, user_id: i64) -> Result<(), AppError> {
    let modules_completed = progress_ops::count_completed(proxy, user_id).await?;
    let simulations_completed = simulation_ops::count_completed(proxy, user_id).await?;
    let total_score = assessment_ops::sum_scores(proxy, user_id).await?;
    user_ops::update_counters(
        proxy,
        user_id,
        modules_completed,
        simulations_completed,
        total_score,
    )
    .await?;
    Ok(())
}

pub async fn list_users(
    proxy: &DatabaseProxy,
    search: Option<String>,
    role: Option<&str>,
    page: i64,
) -> Result<UserPage, AppError> {
    let role = match role.map(str::trim).filter(|r| !r.is_empty()) {
        None => None,
        Some("admin") => Some(RoleFilter::Admin),
        Some("learner") | Some("user") => Some(RoleFilter::Learner),
        Some(other) => {
            return Err(AppError::validation(format!("Unknown role filter: {other}")));
        }
    };
    let page = page.max(1);
    let query = UserQuery {
        search: trimmed(search),
        role,
        limit: USERS_PER_PAGE,
        offset: (page - 1) * USERS_PER_PAGE,
    };

    let users = user_ops::list_users(proxy, &query).await?;
    let total = user_ops::count_users_matching(proxy, &query).await?;

    Ok(UserPage {
        users,
        total,
        page,
        per_page: USERS_PER_PAGE,
        total_pages: (total + USERS_PER_PAGE - 1) / USERS_PER_PAGE,
    })
}

/// Admins cannot delete themselves or the bootstrap administrator.
pub async fn delete_user(
    proxy: &DatabaseProxy,
    actor_id: i64,
    target_id: i64,
    protected_username: &str,
) -> Result<UserRecord, AppError> {
    if actor_id == target_id {
        return Err(AppError::forbidden("You cannot delete your own account"));
    }
    let target = load_user(proxy, target_id).await?;
    if target.username == protected_username {
        return Err(AppError::forbidden("The default administrator cannot be deleted"));
    }

    user_ops::delete_user(proxy, target_id).await?;
    tracing::info!(actor_id, target_id, "user deleted");
    Ok(target)
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_percentage_is_truncated() {
        assert_eq!(completion_percentage(0, 5), 0);
        assert_eq!(completion_percentage(3, 5), 60);
        assert_eq!(completion_percentage(5, 5), 100);
        assert_eq!(completion_percentage(7, 5), 100);
        assert_eq!(completion_percentage(1, 0), 0);
    }

    #[test]
    fn profile_patch_ignores_privileged_keys() {
        let patch: ProfilePatch = serde_json::from_value(serde_json::json!({
            "fullName": "Ada",
            "isAdmin": true,
            "password": "nope",
        }))
        .unwrap();
        assert_eq!(patch.full_name.as_deref(), Some("Ada"));
        assert!(patch.email.is_none());
    }

    #[test]
    fn round1_keeps_one_decimal() {
        assert_eq!(round1(66.666), 66.7);
        assert_eq!(round1(80.0), 80.0);
    }
}
