// src/application/commands/articles/authorize.rs
use crate::{
    application::{
        ApplicationResult,
        dto::AuthenticatedUser,
        error::ApplicationError,
    },
    domain::article::specifications::can_modify_status,
};

pub(super) fn ensure_can_moderate(actor: &AuthenticatedUser) -> ApplicationResult<()> {
    if can_modify_status(actor.caller()) {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(
            "administrator privileges are required to review articles",
        ))
    }
}
