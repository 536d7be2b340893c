use crate::webauthn::{attestation::AttestationContext, error::Error};
use tracing::debug;

/// `none` carries no proof; the registration is accepted as is.
pub fn verify(ctx: &AttestationContext) -> Result<bool, Error> {
    if !ctx.att_stmt.is_empty() {
        debug!(keys = ctx.att_stmt.len(), "ignoring non empty attStmt of a none attestation");
    }
    Ok(true)
}
