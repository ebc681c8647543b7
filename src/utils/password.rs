use crate::config::AppConfig;
use crate::errors::RegistryError;
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};
use once_cell::sync::Lazy;

// 邮箱不存在时用于比对的哈希，使两种失败路径耗时一致
static DUMMY_HASH: Lazy<String> =
    Lazy::new(|| hash_password("registry-dummy-password").unwrap_or_default());

/// 哈希密码
pub fn hash_password(password: &str) -> Result<String, RegistryError> {
    let config = AppConfig::get();
    let params = Params::new(
        config.argon2.memory_cost,
        config.argon2.time_cost,
        config.argon2.parallelism,
        None,
    )
    .map_err(|e| RegistryError::internal(format!("Argon2 参数错误: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| RegistryError::internal(format!("密码哈希失败: {e}")))?;
    Ok(hash.to_string())
}

/// 验证密码（哈希输出的比较为常量时间）
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed_hash) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok(),
        Err(_) => false,
    }
}

/// 验证可能不存在的用户的密码
///
/// 用户不存在时仍对占位哈希执行一次验证，结果恒为 false。
pub fn verify_password_or_dummy(password: &str, hash: Option<&str>) -> bool {
    match hash {
        Some(hash) => verify_password(password, hash),
        None => {
            let _ = verify_password(password, &DUMMY_HASH);
            false
        }
    }
}

/// 在阻塞线程池中哈希密码，避免占用 actix 工作线程
pub async fn hash_password_blocking(password: String) -> Result<String, RegistryError> {
    match tokio::task::spawn_blocking(move || hash_password(&password)).await {
        Ok(result) => result,
        Err(e) => Err(RegistryError::internal(format!("密码处理失败: {e}"))),
    }
}

/// 在阻塞线程池中执行 [`verify_password_or_dummy`]
pub async fn verify_password_or_dummy_blocking(
    password: String,
    hash: Option<String>,
) -> Result<bool, RegistryError> {
    tokio::task::spawn_blocking(move || verify_password_or_dummy(&password, hash.as_deref()))
        .await
        .map_err(|e| RegistryError::internal(format!("密码处理失败: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("SecurePass123").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert_ne!(hash, "SecurePass123");
        assert!(verify_password("SecurePass123", &hash));
        assert!(!verify_password("securepass123", &hash));
    }

    #[test]
    fn test_same_password_different_salt() {
        let a = hash_password("SecurePass123").unwrap();
        let b = hash_password("SecurePass123").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_plaintext_is_never_accepted_as_hash() {
        assert!(!verify_password("SecurePass123", "SecurePass123"));
    }

    #[test]
    fn test_unknown_user_always_fails() {
        assert!(!verify_password_or_dummy("registry-dummy-password", None));
    }

    #[tokio::test]
    async fn test_blocking_variants() {
        let hash = hash_password_blocking("SecurePass123".to_string())
            .await
            .unwrap();
        assert!(
            verify_password_or_dummy_blocking("SecurePass123".to_string(), Some(hash.clone()))
                .await
                .unwrap()
        );
        assert!(
            !verify_password_or_dummy_blocking("WrongPass123".to_string(), Some(hash))
                .await
                .unwrap()
        );
        assert!(
            !verify_password_or_dummy_blocking("SecurePass123".to_string(), None)
                .await
                .unwrap()
        );
    }
}
