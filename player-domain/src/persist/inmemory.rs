use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use crate::persist::{PageRequest, Repository};
use crate::specification::Specification;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

/// 基于内存的仓储实现
/// - 标识从 1 开始单调递增，删除后不复用
/// - 查询时全量扫描，排序键相同时按标识升序保证结果稳定
pub struct InMemoryRepository<E>
where
    E: Entity,
{
    records: DashMap<E::Id, E>,
    last_id: AtomicI64,
}

impl<E> Default for InMemoryRepository<E>
where
    E: Entity,
{
    fn default() -> Self {
        Self {
            records: DashMap::new(),
            last_id: AtomicI64::new(0),
        }
    }
}

impl<E> InMemoryRepository<E>
where
    E: Entity,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn matching(&self, spec: &dyn Specification<E>) -> Vec<E> {
        self.records
            .iter()
            .filter(|e| spec.is_satisfied_by(e.value()))
            .map(|e| e.value().clone())
            .collect()
    }
}

#[async_trait]
impl<E> Repository<E> for InMemoryRepository<E>
where
    E: Entity,
{
    async fn find(
        &self,
        spec: &dyn Specification<E>,
        page: &PageRequest<E::SortKey>,
    ) -> DomainResult<Vec<E>> {
        let mut matched = self.matching(spec);
        matched.sort_by(|a, b| {
            a.compare_by(b, page.sort)
                .then_with(|| a.id().cmp(&b.id()))
        });

        Ok(matched
            .into_iter()
            .skip(page.offset())
            .take(page.page_size)
            .collect())
    }

    async fn count(&self, spec: &dyn Specification<E>) -> DomainResult<usize> {
        Ok(self
            .records
            .iter()
            .filter(|e| spec.is_satisfied_by(e.value()))
            .count())
    }

    async fn get_by_id(&self, id: E::Id) -> DomainResult<Option<E>> {
        Ok(self.records.get(&id).map(|e| e.value().clone()))
    }

    async fn exists_by_id(&self, id: E::Id) -> DomainResult<bool> {
        Ok(self.records.contains_key(&id))
    }

    async fn save(&self, mut entity: E) -> DomainResult<E> {
        match entity.id() {
            // 已删除的记录不会被更新重新写回
            Some(id) => match self.records.get_mut(&id) {
                Some(mut slot) => *slot = entity.clone(),
                None => {
                    return Err(DomainError::NotFound {
                        reason: format!("record {id}"),
                    });
                }
            },
            None => {
                let id = E::Id::from(self.last_id.fetch_add(1, Ordering::SeqCst) + 1);
                entity.assign_id(id);
                self.records.insert(id, entity.clone());
                tracing::debug!(%id, "assigned new id");
            }
        }
        Ok(entity)
    }

    async fn delete_by_id(&self, id: E::Id) -> DomainResult<bool> {
        let removed = self.records.remove(&id).is_some();
        if removed {
            tracing::debug!(%id, "deleted record");
        }
        Ok(removed)
    }
}
