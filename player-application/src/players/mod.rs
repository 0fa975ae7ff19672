//! 玩家用例：命令（创建/更新/删除）与查询（列表/计数/详情）及其处理器
//!
mod commands;
mod queries;

pub use commands::{CreatePlayer, DeletePlayer, PlayerCommandHandler, UpdatePlayer};
pub use queries::{CountPlayers, GetPlayer, ListPlayers, PlayerQueryHandler};
