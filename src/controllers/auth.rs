// src/controllers/auth.rs
use crate::api::MarketApi;
use crate::domain::errors::{AppError, AppResult};
use crate::domain::models::{LoginCredentials, Registration};
use crate::notify::Notifier;
use std::sync::Arc;

/// Registration form as the user fills it in, confirmation included.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub full_name: String,
}

/// Login and registration against the auth endpoints. Stateless; outcomes
/// surface as notifications.
#[derive(Clone)]
pub struct AuthFlow {
    api: Arc<dyn MarketApi>,
    notifier: Notifier,
}

impl AuthFlow {
    pub fn new(api: Arc<dyn MarketApi>, notifier: Notifier) -> Self {
        Self { api, notifier }
    }

    pub async fn login(&self, credentials: &LoginCredentials) -> AppResult<()> {
        match self.api.login(credentials).await {
            Ok(()) => {
                self.notifier.success("Login successful!");
                Ok(())
            }
            Err(e) => {
                // The service's own message is the most useful thing to show.
                self.notifier.error(&e.to_string());
                Err(e.into())
            }
        }
    }

    /// Passwords are checked locally before anything leaves the client.
    pub async fn register(&self, form: &RegistrationForm) -> AppResult<()> {
        if form.password != form.confirm_password {
            self.notifier.error("Passwords do not match!");
            return Err(AppError::Validation("passwords do not match".to_string()));
        }

        let registration = Registration {
            email: form.email.clone(),
            password: form.password.clone(),
            full_name: form.full_name.clone(),
        };
        match self.api.register(&registration).await {
            Ok(()) => {
                self.notifier.success("Registration successful! Please login.");
                Ok(())
            }
            Err(e) => {
                self.notifier.error(&e.to_string());
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{Endpoint, MockApi};
    use crate::notify::NotificationLevel;

    fn form(password: &str, confirm: &str) -> RegistrationForm {
        RegistrationForm {
            email: "ana@example.com".to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
            full_name: "Ana Petrova".to_string(),
        }
    }

    fn credentials() -> LoginCredentials {
        LoginCredentials {
            email: "ana@example.com".to_string(),
            password: "s3cret".to_string(),
        }
    }

    #[tokio::test]
    async fn successful_login_notifies() {
        let api = Arc::new(MockApi::new());
        let notifier = Notifier::new();
        let mut rx = notifier.subscribe();
        let auth = AuthFlow::new(api.clone(), notifier);

        auth.login(&credentials()).await.unwrap();

        assert_eq!(api.calls(Endpoint::Login), 1);
        let toast = rx.recv().await.unwrap();
        assert_eq!(toast.level, NotificationLevel::Success);
        assert_eq!(toast.message, "Login successful!");
    }

    #[tokio::test]
    async fn failed_login_surfaces_the_service_message() {
        let api = Arc::new(MockApi::new().failing(Endpoint::Login));
        let notifier = Notifier::new();
        let mut rx = notifier.subscribe();
        let auth = AuthFlow::new(api, notifier);

        assert!(auth.login(&credentials()).await.is_err());

        let toast = rx.recv().await.unwrap();
        assert_eq!(toast.level, NotificationLevel::Error);
        assert!(toast.message.contains("Internal Server Error"));
    }

    #[tokio::test]
    async fn mismatched_passwords_never_reach_the_service() {
        let api = Arc::new(MockApi::new());
        let notifier = Notifier::new();
        let mut rx = notifier.subscribe();
        let auth = AuthFlow::new(api.clone(), notifier);

        let result = auth.register(&form("s3cret", "different")).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(api.calls(Endpoint::Register), 0);
        let toast = rx.recv().await.unwrap();
        assert_eq!(toast.message, "Passwords do not match!");
    }

    #[tokio::test]
    async fn successful_registration_invites_login() {
        let api = Arc::new(MockApi::new());
        let notifier = Notifier::new();
        let mut rx = notifier.subscribe();
        let auth = AuthFlow::new(api.clone(), notifier);

        auth.register(&form("s3cret", "s3cret")).await.unwrap();

        assert_eq!(api.calls(Endpoint::Register), 1);
        let toast = rx.recv().await.unwrap();
        assert_eq!(toast.level, NotificationLevel::Success);
        assert_eq!(toast.message, "Registration successful! Please login.");
    }
}
