//! Authentication and authorization service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use validator::Validate;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::user::{LoginRequest, LoginResponse, RegisterRequest, User, UserClaims},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Register a new user account.
    ///
    /// A missing email or password maps to Conflict, the same status the
    /// database not-null constraint would produce. The uniqueness check
    /// runs up front for a friendly message; the unique constraint
    /// remains the authority and also maps to Conflict if a concurrent
    /// registration slips past the check.
    pub async fn register(&self, request: RegisterRequest) -> AppResult<User> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let email = request
            .email
            .as_deref()
            .ok_or_else(|| AppError::Conflict("email is required".to_string()))?;
        let password = request
            .password
            .as_deref()
            .ok_or_else(|| AppError::Conflict("password is required".to_string()))?;

        if self.repository.users.email_exists(email).await? {
            return Err(AppError::Conflict("Email is already in use".to_string()));
        }

        let password_hash = self.hash_password(password)?;
        self.repository.users.create(&request, &password_hash).await
    }

    /// Authenticate by email and password, returning a signed token.
    ///
    /// The failure message never reveals whether the email exists; an
    /// absent email or password fails the same way as unknown
    /// credentials.
    pub async fn login(&self, request: &LoginRequest) -> AppResult<LoginResponse> {
        let invalid = || AppError::Authentication("Invalid email or password".to_string());

        let email = request.email.as_deref().unwrap_or_default();
        let user = self
            .repository
            .users
            .get_by_email(email)
            .await?
            .ok_or_else(invalid)?;

        let password = request.password.as_deref().unwrap_or_default();
        if !self.verify_password(&user, password)? {
            return Err(invalid());
        }

        let claims = UserClaims::for_user(user.id, self.config.jwt_expiration_hours);
        let token = claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))?;

        Ok(LoginResponse {
            email: user.email,
            token,
            is_admin: user.is_admin,
        })
    }

    /// Get the user behind an authenticated request; a token whose user
    /// row has been deleted since issuance is no longer authenticated.
    pub async fn current_user(&self, user_id: i32) -> AppResult<User> {
        self.repository
            .users
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::Authentication("User no longer exists".to_string()))
    }

    /// Require administrator privileges for the given identity.
    ///
    /// The admin flag is read from the database, not the token, so a
    /// revoked or deleted account is rejected even with a valid token.
    /// An identity that resolves to no user row is Forbidden, not an
    /// internal error.
    pub async fn require_admin(&self, user_id: i32) -> AppResult<()> {
        let user = self.repository.users.get_by_id(user_id).await?;
        match user {
            Some(user) if user.is_admin => Ok(()),
            _ => Err(AppError::Authorization(
                "Administrator privileges required".to_string(),
            )),
        }
    }

    /// Hash a password using Argon2
    pub fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }

    /// Verify user password against the stored hash
    fn verify_password(&self, user: &User, password: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}
