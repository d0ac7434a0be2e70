use crate::cli::actions::Action;
use anyhow::Result;
use secrecy::SecretString;

pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    Ok(Action::Server {
        port: matches.get_one::<u16>("port").copied().unwrap_or(8080),
        authority_url: matches
            .get_one("authority-url")
            .map(|s: &String| s.to_string())
            .ok_or_else(|| anyhow::anyhow!("missing required argument: --authority-url"))?,
        authority_token: matches
            .get_one("authority-token")
            .map(|s: &String| SecretString::from(s.to_string()))
            .ok_or_else(|| anyhow::anyhow!("missing required argument: --authority-token"))?,
        admin_scope: matches
            .get_one("admin-scope")
            .map(|s: &String| s.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;
    use secrecy::ExposeSecret;

    #[test]
    fn test_handler_builds_server_action() -> Result<()> {
        let matches = commands::new().get_matches_from(vec![
            "slosilo",
            "--port",
            "9090",
            "--authority-url",
            "https://authority.tld:9200",
            "--authority-token",
            "admin-token",
            "--admin-scope",
            "credentials-admin",
        ]);

        let Action::Server {
            port,
            authority_url,
            authority_token,
            admin_scope,
        } = handler(&matches)?;

        assert_eq!(port, 9090);
        assert_eq!(authority_url, "https://authority.tld:9200");
        assert_eq!(authority_token.expose_secret(), "admin-token");
        assert_eq!(admin_scope.as_deref(), Some("credentials-admin"));
        Ok(())
    }
}
