pub mod server;

use secrecy::SecretString;

#[derive(Debug)]
pub enum Action {
    Server {
        port: u16,
        authority_url: String,
        authority_token: SecretString,
        admin_scope: Option<String>,
    },
}
