use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    LoginUseCase, LogoutUseCase, ResolveSessionUseCase, UpdateProfileUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn LoginUseCase + Send + Sync>,
    pub logout: Arc<dyn LogoutUseCase + Send + Sync>,
    pub resolve_session: Arc<dyn ResolveSessionUseCase + Send + Sync>,
    pub update_profile: Arc<dyn UpdateProfileUseCase + Send + Sync>,
}
