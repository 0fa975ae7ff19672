/// 分页描述：页码（从 0 开始）、每页条数与排序键，排序恒为升序
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest<K> {
    pub page_number: usize,
    pub page_size: usize,
    pub sort: K,
}

impl<K> PageRequest<K> {
    pub fn new(page_number: usize, page_size: usize, sort: K) -> Self {
        Self {
            page_number,
            page_size,
            sort,
        }
    }

    /// 跳过的记录数
    pub fn offset(&self) -> usize {
        self.page_number.saturating_mul(self.page_size)
    }
}
