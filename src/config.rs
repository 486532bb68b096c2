use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;

pub const DEFAULT_ADMIN_USERNAME: &str = "administrator";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub auth: AuthConfig,
    pub admin: AdminBootstrap,
    pub rules: ProgramRules,
    pub allow_admin_maintenance: bool,
    pub expose_reset_tokens: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3000);

        let host = std::env::var("HOST")
            .ok()
            .and_then(|value| value.parse::<IpAddr>().ok())
            .unwrap_or(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)));

        let log_level = std::env::var("RUST_LOG")
            .or_else(|_| std::env::var("LOG_LEVEL"))
            .map(|value| value.to_ascii_lowercase())
            .unwrap_or_else(|_| "info".to_string());

        Self {
            host,
            port,
            log_level,
            auth: AuthConfig::from_env(),
            admin: AdminBootstrap::from_env(),
            rules: ProgramRules::from_env(),
            allow_admin_maintenance: env_bool("ALLOW_ADMIN_MAINTENANCE").unwrap_or(false),
            expose_reset_tokens: env_bool("EXPOSE_RESET_TOKENS").unwrap_or(false),
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub expires_in: String,
    pub cookie_secure: bool,
    pub bcrypt_cost: u32,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        let jwt_secret = match std::env::var("JWT_SECRET") {
            Ok(secret) if !secret.trim().is_empty() => secret,
            _ => {
                tracing::warn!("JWT_SECRET not set, generating an ephemeral secret");
                generate_secret()
            }
        };

        Self {
            jwt_secret,
            expires_in: std::env::var("JWT_EXPIRES_IN").unwrap_or_else(|_| "24h".to_string()),
            cookie_secure: env_bool("SESSION_COOKIE_SECURE").unwrap_or(false),
            bcrypt_cost: env_u32("BCRYPT_COST")
                .filter(|cost| (4..=31).contains(cost))
                .unwrap_or(bcrypt::DEFAULT_COST),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdminBootstrap {
    pub username: String,
    pub email: String,
    pub password: Option<String>,
}

impl AdminBootstrap {
    pub fn from_env() -> Self {
        Self {
            username: std::env::var("ADMIN_USERNAME")
                .ok()
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ADMIN_USERNAME.to_string()),
            email: std::env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@awareness.local".to_string()),
            password: std::env::var("ADMIN_PASSWORD")
                .ok()
                .filter(|value| !value.is_empty()),
        }
    }
}

/// Thresholds and limits for the completion/unlock rules.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramRules {
    pub knowledge_check_passing_score: i64,
    pub knowledge_check_question_count: usize,
    pub max_attempts_per_module: i64,
    pub final_assessment_passing_score: i64,
    pub final_assessment_question_count: usize,
    pub final_assessment_max_attempts: usize,
    pub assessment_cooldown_hours: i64,
    pub simulation_passing_score: i64,
    pub total_modules: i64,
}

impl Default for ProgramRules {
    fn default() -> Self {
        Self {
            knowledge_check_passing_score: 80,
            knowledge_check_question_count: 5,
            max_attempts_per_module: 10,
            final_assessment_passing_score: 70,
            final_assessment_question_count: 25,
            final_assessment_max_attempts: 3,
            assessment_cooldown_hours: 48,
            simulation_passing_score: crate::simulations::SIMULATION_PASSING_SCORE,
            total_modules: 5,
        }
    }
}

impl ProgramRules {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            knowledge_check_question_count: env_u32("KNOWLEDGE_CHECK_NUM_QUESTIONS")
                .filter(|count| *count > 0)
                .map(|count| count as usize)
                .unwrap_or(defaults.knowledge_check_question_count),
            final_assessment_passing_score: env_u32("FINAL_ASSESSMENT_PASSING_SCORE")
                .filter(|score| *score <= 100)
                .map(i64::from)
                .unwrap_or(defaults.final_assessment_passing_score),
            final_assessment_question_count: env_u32("FINAL_ASSESSMENT_NUM_QUESTIONS")
                .filter(|count| *count > 0)
                .map(|count| count as usize)
                .unwrap_or(defaults.final_assessment_question_count),
            ..defaults
        }
    }
}

pub fn env_bool(key: &str) -> Option<bool> {
    let value = std::env::var(key).ok()?;
    let normalized = value.trim().to_ascii_lowercase();
    if normalized.is_empty() {
        return None;
    }
    match normalized.as_str() {
        "1" | "true" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}

pub fn env_u32(key: &str) -> Option<u32> {
    std::env::var(key).ok()?.trim().parse().ok()
}

fn generate_secret() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_match_program_policy() {
        let rules = ProgramRules::default();
        assert_eq!(rules.knowledge_check_passing_score, 80);
        assert_eq!(rules.knowledge_check_question_count, 5);
        assert_eq!(rules.max_attempts_per_module, 10);
        assert_eq!(rules.final_assessment_passing_score, 70);
        assert_eq!(rules.final_assessment_max_attempts, 3);
        assert_eq!(rules.assessment_cooldown_hours, 48);
        assert_eq!(rules.total_modules, 5);
    }

    #[test]
    fn generated_secrets_differ() {
        assert_ne!(generate_secret(), generate_secret());
    }
}
