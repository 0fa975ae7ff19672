//! 实体（Entity）基础抽象
//!
//! 标识由仓储在首次保存时分配，此前为空；排序键由实体自身定义比较方式。
//!
use std::{cmp::Ordering, fmt::Display, hash::Hash};

/// 具备仓储分配标识、可按排序键比较的实体抽象
pub trait Entity: Clone + Send + Sync + 'static {
    /// 实体标识类型；内存仓储通过 `From<i64>` 生成单调递增的标识
    type Id: Copy + Eq + Ord + Hash + Display + From<i64> + Send + Sync + 'static;

    /// 列表查询可用的排序键
    type SortKey: Copy + Send + Sync + 'static;

    /// 获取实体标识（尚未保存时为 `None`）
    fn id(&self) -> Option<Self::Id>;

    /// 由仓储写入标识，只在首次保存时调用一次
    fn assign_id(&mut self, id: Self::Id);

    /// 按排序键比较两个实体（升序语义）
    fn compare_by(&self, other: &Self, key: Self::SortKey) -> Ordering;
}
