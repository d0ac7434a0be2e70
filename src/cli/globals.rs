use secrecy::SecretString;

#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub authority_url: String,
    pub authority_token: SecretString,
    pub admin_scope: Option<String>,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(authority_url: String) -> Self {
        Self {
            authority_url,
            authority_token: SecretString::default(),
            admin_scope: None,
        }
    }

    pub fn set_token(&mut self, token: SecretString) {
        self.authority_token = token;
    }

    pub fn set_admin_scope(&mut self, scope: Option<String>) {
        self.admin_scope = scope;
    }
}
