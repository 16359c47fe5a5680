//! Formulario de login

use validator::Validate;

use crate::utils::errors::AppResult;
use crate::utils::validation::validate_not_empty;

#[derive(Debug, Clone, Default, Validate)]
pub struct LoginForm {
    #[validate(custom = "validate_not_empty")]
    pub username: String,
    #[validate(custom = "validate_not_empty")]
    pub password: String,
}

impl LoginForm {
    pub fn check(&self) -> AppResult<()> {
        self.validate()?;
        Ok(())
    }
}
