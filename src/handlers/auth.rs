use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use axum_extra::extract::WithRejection;
use crate::errors::{AppError, AppResult};
use crate::models::{LoginForm, LoginResponse, NewUser, RegisterForm, RegisterResponse};
use crate::state::AppState;
use crate::validation::check_registration;

// bcrypt is CPU-bound at production cost, so it runs on the blocking pool.
async fn hash_password(password: String, cost: u32) -> AppResult<String> {
    Ok(tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??)
}

async fn verify_password(password: String, hash: String) -> AppResult<bool> {
    Ok(tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??)
}

pub async fn health() -> &'static str {
    "System is Online!"
}

pub async fn handle_register(
    State(state): State<AppState>,
    WithRejection(Json(form), _): WithRejection<Json<RegisterForm>, AppError>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    let registration = check_registration(&form)?;
    tracing::info!("Registration attempt for {}", registration.email);

    if state.store.find_user_by_email(&registration.email).await?.is_some() {
        return Err(AppError::EmailTaken);
    }

    let password_hash = hash_password(registration.password, state.bcrypt_cost).await?;
    let user = state
        .store
        .create_user(NewUser {
            name: registration.name,
            email: registration.email,
            password_hash,
            emergency_contact: registration.emergency_contact,
        })
        .await?;

    tracing::info!("Registered user {}", user.id);
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User Registered Successfully!".into(),
            user_id: user.id,
        }),
    ))
}

pub async fn handle_login(
    State(state): State<AppState>,
    WithRejection(Json(form), _): WithRejection<Json<LoginForm>, AppError>,
) -> AppResult<Json<LoginResponse>> {
    let (Some(email), Some(password)) = (
        form.email.filter(|v| !v.is_empty()),
        form.password.filter(|v| !v.is_empty()),
    ) else {
        return Err(AppError::MissingCredentials);
    };

    tracing::debug!("Login attempt for {}", email);
    let user = state.store.find_user_by_email(&email).await?;

    // Unknown e-mails still pay for one verification.
    let stored_hash = user.as_ref().map_or(&*state.decoy_hash, |u| u.password_hash.as_str());
    let password_matches = verify_password(password, stored_hash.to_string()).await?;

    match user {
        Some(user) if password_matches => {
            tracing::info!("User {} logged in", user.id);
            Ok(Json(LoginResponse {
                message: "Login Successful".into(),
                user_id: user.id,
                name: user.name,
            }))
        }
        _ => Err(AppError::InvalidCredentials),
    }
}
