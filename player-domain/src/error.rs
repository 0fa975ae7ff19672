//! 领域层统一错误定义
//!
//! 覆盖字段校验、查询参数解析、封闭枚举映射与仓储访问，
//! 由应用层统一映射为“请求无效 / 未找到 / 服务端错误”。
//!
use thiserror::Error;

/// 统一错误类型
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 字段校验 ---
    #[error("missing field: {field}")]
    MissingField { field: &'static str },
    #[error("invalid value: field={field}, reason={reason}")]
    InvalidValue { field: &'static str, reason: String },

    // --- 解析 ---
    #[error("invalid parameter: {name}={value}, reason={reason}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },
    #[error("unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },

    // --- 仓储 ---
    #[error("not found: {reason}")]
    NotFound { reason: String },
    #[error("repository error: {reason}")]
    Repository { reason: String },
}

impl DomainError {
    /// 是否属于调用方输入错误（校验或解析失败）
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::MissingField { .. }
                | Self::InvalidValue { .. }
                | Self::InvalidParameter { .. }
                | Self::UnknownVariant { .. }
        )
    }
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
