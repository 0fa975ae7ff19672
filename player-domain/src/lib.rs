//! 玩家领域层（player-domain）
//!
//! 提供游戏后端玩家记录的领域模型与纯函数核心：
//! - 玩家实体与封闭枚举（`player`）
//! - 字段校验（`validation`）与等级推导（`leveling`）
//! - 由查询参数构建的规约与分页描述（`filter`、`specification`）
//! - 支持规约查询、计数、分页与排序的通用仓储接口及内存实现（`persist`）
//!
//! 校验、等级推导与过滤构建均为无状态纯计算，可在任意线程并发调用；
//! 所有可变状态只存在于仓储实现中。
//!
pub mod entity;
pub mod error;
pub mod filter;
pub mod leveling;
pub mod persist;
pub mod player;
pub mod specification;
pub mod validation;

// 允许在本 crate 内部通过 ::player_domain 进行自引用，
// 以便过程宏生成的路径在本 crate 内同样可以解析。
extern crate self as player_domain;
