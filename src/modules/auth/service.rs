use quill_auth::{TokenService, hash_password, verify_password};
use quill_core::AppError;
use quill_models::{AuthResponse, LoginRequest, RegisterRequest, User};
use sqlx::PgPool;
use tracing::instrument;

pub struct AuthService;

#[derive(sqlx::FromRow)]
struct UserWithPassword {
    id: i64,
    username: String,
    email: String,
    password: String,
}

/// Hashes off the async executor; bcrypt at the default cost takes a while.
async fn hash_blocking(password: String) -> Result<String, AppError> {
    let hashed = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(AppError::internal)??;
    Ok(hashed)
}

async fn verify_blocking(password: String, hashed: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hashed))
        .await
        .map_err(AppError::internal)
}

fn conflict_on_unique_violation(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            match db_err.constraint() {
                Some("idx_users_email") => AppError::conflict("Email already exists".to_string()),
                _ => AppError::conflict("Username already exists".to_string()),
            }
        }
        _ => AppError::from(err),
    }
}

impl AuthService {
    #[instrument(skip(db, tokens))]
    pub async fn register(
        db: &PgPool,
        tokens: &TokenService,
        dto: RegisterRequest,
    ) -> Result<AuthResponse, AppError> {
        let username_taken: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
                .bind(&dto.username)
                .fetch_one(db)
                .await?;
        if username_taken {
            return Err(AppError::conflict("Username already exists".to_string()));
        }

        let email_taken: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(&dto.email)
                .fetch_one(db)
                .await?;
        if email_taken {
            return Err(AppError::conflict("Email already exists".to_string()));
        }

        let hashed_password = hash_blocking(dto.password).await?;

        // The unique indexes still decide races between concurrent registrations.
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, email, password)
             VALUES ($1, $2, $3)
             RETURNING id, username, email, created_at, updated_at",
        )
        .bind(&dto.username)
        .bind(&dto.email)
        .bind(&hashed_password)
        .fetch_one(db)
        .await
        .map_err(conflict_on_unique_violation)?;

        let token = tokens.issue_default(user.id, &user.username)?;
        tracing::info!(user_id = user.id, "User registered");

        Ok(AuthResponse {
            token,
            user: user.into(),
        })
    }

    #[instrument(skip(db, tokens))]
    pub async fn login(
        db: &PgPool,
        tokens: &TokenService,
        dto: LoginRequest,
    ) -> Result<AuthResponse, AppError> {
        let invalid = || AppError::unauthorized("Invalid username or password".to_string());

        let user = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, username, email, password
             FROM users
             WHERE username = $1 AND deleted_at IS NULL",
        )
        .bind(&dto.username)
        .fetch_optional(db)
        .await?
        .ok_or_else(invalid)?;

        if !verify_blocking(dto.password, user.password).await? {
            return Err(invalid());
        }

        let token = tokens.issue_default(user.id, &user.username)?;

        Ok(AuthResponse {
            token,
            user: quill_models::ProfileResponse {
                id: user.id,
                username: user.username,
                email: user.email,
            },
        })
    }
}
