use player_domain::error::DomainError;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("domain: {0}")]
    Domain(#[from] DomainError),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("infra: {0}")]
    Infra(String),
}

impl AppError {
    /// 对应的 HTTP 状态码：调用方输入错误 400、记录不存在 404、其余 500
    pub fn status(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::NotFound(_) => 404,
            Self::Domain(DomainError::NotFound { .. }) => 404,
            Self::Domain(e) if e.is_invalid_input() => 400,
            Self::Domain(_) | Self::Infra(_) => 500,
        }
    }

    pub fn is_bad_request(&self) -> bool {
        self.status() == 400
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == 404
    }
}

pub type AppResult<T> = Result<T, AppError>;
