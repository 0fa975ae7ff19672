//! 持久化（persist）
//!
//! 定义玩家存储所需的通用仓储协议，支持：
//! - 按规约过滤的分页、排序查询与计数（`Repository::find`/`count`）；
//! - 按标识读取、保存（首次保存时分配标识）与删除；
//! - 基于 `DashMap` 的内存实现（`InMemoryRepository`），用于演示与测试。
//!
//! 具体存储后端由上层提供实现并注入；单条记录的读写需保证原子性，不要求多记录事务。
//!
mod inmemory;
mod page;
mod repository;

pub use inmemory::InMemoryRepository;
pub use page::PageRequest;
pub use repository::Repository;
