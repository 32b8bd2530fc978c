use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarketError {
    #[error("HTTP request failed with status {status}")]
    Http { status: u16 },

    #[error("Request timed out")]
    Timeout,

    #[error("Could not reach host: {0}")]
    NoConnection(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Server returned an empty body")]
    EmptyBody,

    #[error("Fixture '{file}' could not be loaded: {reason}")]
    Fixture { file: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, MarketError>;

/// The user-facing flow a failure happened in. Each flow has its own wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Search,
    Detail,
}

impl MarketError {
    /// Classifies a transport error coming out of reqwest.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            MarketError::Timeout
        } else if err.is_connect() {
            MarketError::NoConnection(err.to_string())
        } else if let Some(status) = err.status() {
            MarketError::Http {
                status: status.as_u16(),
            }
        } else {
            MarketError::Network(err)
        }
    }

    /// Localized message shown to the user for this failure.
    pub fn user_message(&self, op: Operation) -> String {
        match (op, self) {
            (Operation::Search, MarketError::Http { status: 404 }) => {
                "Nenhum resultado encontrado".to_string()
            }
            (Operation::Detail, MarketError::Http { status: 404 }) => {
                "Produto não encontrado".to_string()
            }
            (_, MarketError::Http { status: 500 }) => "Erro interno do servidor".to_string(),
            (Operation::Search, MarketError::Http { status }) => {
                format!("Erro na busca: {}", status)
            }
            (Operation::Detail, MarketError::Http { status }) => {
                format!("Erro ao carregar produto: {}", status)
            }

            (Operation::Search, MarketError::Timeout) => {
                "A requisição demorou muito para ser processada. Tente novamente mais tarde."
                    .to_string()
            }
            (Operation::Search, MarketError::NoConnection(_)) => {
                "Sem conexão com a internet. Verifique sua conexão e tente novamente.".to_string()
            }
            (Operation::Search, MarketError::Network(_) | MarketError::IoError(_)) => {
                "Erro de conexão. Verifique sua internet e tente novamente.".to_string()
            }
            (
                Operation::Detail,
                MarketError::Timeout
                | MarketError::NoConnection(_)
                | MarketError::Network(_)
                | MarketError::IoError(_),
            ) => "Erro de conexão. Verifique sua internet.".to_string(),

            (Operation::Search, MarketError::EmptyBody) => "Resposta vazia do servidor".to_string(),
            (Operation::Detail, MarketError::EmptyBody) => "Produto não encontrado".to_string(),

            (Operation::Search, MarketError::Fixture { .. }) => {
                "Erro ao carregar os resultados da pesquisa".to_string()
            }
            (Operation::Detail, MarketError::Fixture { .. }) => {
                "Erro ao carregar os detalhes do produto".to_string()
            }

            (Operation::Search, _) => {
                "Ocorreu um erro inesperado. Tente novamente mais tarde.".to_string()
            }
            (Operation::Detail, _) => "Ocorreu um erro inesperado".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_messages() {
        let not_found = MarketError::Http { status: 404 };
        assert_eq!(
            not_found.user_message(Operation::Search),
            "Nenhum resultado encontrado"
        );
        assert_eq!(
            not_found.user_message(Operation::Detail),
            "Produto não encontrado"
        );

        let server = MarketError::Http { status: 500 };
        assert_eq!(
            server.user_message(Operation::Search),
            "Erro interno do servidor"
        );
        assert_eq!(
            server.user_message(Operation::Detail),
            "Erro interno do servidor"
        );

        let other = MarketError::Http { status: 403 };
        assert_eq!(other.user_message(Operation::Search), "Erro na busca: 403");
        assert_eq!(
            other.user_message(Operation::Detail),
            "Erro ao carregar produto: 403"
        );
    }

    #[test]
    fn test_network_messages_differ_per_operation() {
        assert!(MarketError::Timeout
            .user_message(Operation::Search)
            .starts_with("A requisição demorou muito"));
        assert_eq!(
            MarketError::Timeout.user_message(Operation::Detail),
            "Erro de conexão. Verifique sua internet."
        );
        assert!(MarketError::NoConnection("dns".into())
            .user_message(Operation::Search)
            .starts_with("Sem conexão com a internet"));
    }

    #[test]
    fn test_fixture_and_fallback_messages() {
        let fixture = MarketError::Fixture {
            file: "item-X.json".into(),
            reason: "missing".into(),
        };
        assert_eq!(
            fixture.user_message(Operation::Search),
            "Erro ao carregar os resultados da pesquisa"
        );
        assert_eq!(
            fixture.user_message(Operation::Detail),
            "Erro ao carregar os detalhes do produto"
        );

        let config = MarketError::ConfigError {
            message: "boom".into(),
        };
        assert_eq!(
            config.user_message(Operation::Detail),
            "Ocorreu um erro inesperado"
        );
    }
}
