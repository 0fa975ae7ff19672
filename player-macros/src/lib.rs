//! 玩家服务的过程宏（player-macros）
//!
//! - `#[entity_id]`：为数值型标识的 tuple struct 生成常用派生与转换；
//! - `#[domain_enum]`：为封闭枚举生成严格解析（`FromStr`）、`Display` 与成员列表。
//!
use proc_macro::TokenStream;

mod derive_utils;
mod domain_enum;
mod entity_id;

/// 实体 ID 宏
///
/// 用于 `struct PlayerId(i64);` 这类单字段 tuple struct，自动实现：
/// - 派生：Clone, Copy, Debug, Serialize, Deserialize（transparent）, PartialEq, Eq, PartialOrd, Ord, Hash
/// - `new(value)`、`value()`、`Display`、`FromStr` 以及与内部类型之间的 `From`
#[proc_macro_attribute]
pub fn entity_id(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity_id::expand(attr, item)
}

/// 封闭枚举宏
///
/// 仅支持无字段变体的枚举。每个变体的外部名称为其 SCREAMING_SNAKE_CASE 形式，
/// 序列化、`Display` 与 `FromStr` 共用同一名称；未知名称解析为
/// `player_domain::error::DomainError::UnknownVariant`，不会回退为默认值。
#[proc_macro_attribute]
pub fn domain_enum(attr: TokenStream, item: TokenStream) -> TokenStream {
    domain_enum::expand(attr, item)
}
