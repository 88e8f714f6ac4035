use std::env;

pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_url: String,
    pub secret_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a number"),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://tarefas.db".to_string()),
            secret_key: env::var("SECRET_KEY").unwrap_or_else(|_| "your-secret-key".to_string()),
        }
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_from_env() {
        // Defaults apply when nothing is set
        env::remove_var("SERVER_HOST");
        env::remove_var("PORT");
        env::remove_var("DATABASE_URL");
        env::remove_var("SECRET_KEY");

        let config = Config::from_env();

        assert_eq!(config.server_host, "127.0.0.1");
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.database_url, "sqlite://tarefas.db");
        assert_eq!(config.secret_key, "your-secret-key");
        assert_eq!(config.server_url(), "http://127.0.0.1:3000");

        // Environment overrides each default
        env::set_var("SERVER_HOST", "0.0.0.0");
        env::set_var("PORT", "8081");
        env::set_var("DATABASE_URL", "sqlite::memory:");
        env::set_var("SECRET_KEY", "override-key");

        let config = Config::from_env();

        assert_eq!(config.server_host, "0.0.0.0");
        assert_eq!(config.server_port, 8081);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.secret_key, "override-key");

        env::remove_var("SERVER_HOST");
        env::remove_var("PORT");
        env::remove_var("DATABASE_URL");
        env::remove_var("SECRET_KEY");
    }
}
