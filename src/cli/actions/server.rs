use crate::{
    api,
    authority::{DynAuthority, HttpAuthority},
    cli::{actions::Action, globals::GlobalArgs},
};
use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

/// Handle the server action
pub async fn handle(action: Action) -> Result<()> {
    match action {
        Action::Server {
            port,
            authority_url,
            authority_token,
            admin_scope,
        } => {
            let mut globals = GlobalArgs::new(authority_url);
            globals.set_token(authority_token);
            globals.set_admin_scope(admin_scope);

            debug!("Global args: {:?}", globals);

            // The authority client is built once here and handed to the
            // router; handlers never reach for ambient state.
            let authority: DynAuthority = Arc::new(HttpAuthority::new(&globals)?);
            let auth_config = api::handlers::auth::AuthConfig::new(globals.admin_scope.clone());

            api::new(port, authority, auth_config).await?;
        }
    }

    Ok(())
}
