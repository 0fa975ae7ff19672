use crate::entity::Entity;
use crate::error::DomainResult;
use crate::persist::PageRequest;
use crate::specification::Specification;
use async_trait::async_trait;
use std::sync::Arc;

/// 通用仓储：规约查询、计数、按标识读写与删除
#[async_trait]
pub trait Repository<E>: Send + Sync
where
    E: Entity,
{
    /// 返回满足规约的记录，按分页描述排序并截取
    async fn find(
        &self,
        spec: &dyn Specification<E>,
        page: &PageRequest<E::SortKey>,
    ) -> DomainResult<Vec<E>>;

    /// 满足规约的记录总数（忽略分页）
    async fn count(&self, spec: &dyn Specification<E>) -> DomainResult<usize>;

    async fn get_by_id(&self, id: E::Id) -> DomainResult<Option<E>>;

    async fn exists_by_id(&self, id: E::Id) -> DomainResult<bool> {
        Ok(self.get_by_id(id).await?.is_some())
    }

    /// 保存记录；未分配标识的记录在此获得新标识
    async fn save(&self, entity: E) -> DomainResult<E>;

    /// 删除记录，返回是否确有记录被删除
    async fn delete_by_id(&self, id: E::Id) -> DomainResult<bool>;
}

#[async_trait]
impl<E, T> Repository<E> for Arc<T>
where
    E: Entity,
    T: Repository<E> + ?Sized,
{
    async fn find(
        &self,
        spec: &dyn Specification<E>,
        page: &PageRequest<E::SortKey>,
    ) -> DomainResult<Vec<E>> {
        (**self).find(spec, page).await
    }

    async fn count(&self, spec: &dyn Specification<E>) -> DomainResult<usize> {
        (**self).count(spec).await
    }

    async fn get_by_id(&self, id: E::Id) -> DomainResult<Option<E>> {
        (**self).get_by_id(id).await
    }

    async fn exists_by_id(&self, id: E::Id) -> DomainResult<bool> {
        (**self).exists_by_id(id).await
    }

    async fn save(&self, entity: E) -> DomainResult<E> {
        (**self).save(entity).await
    }

    async fn delete_by_id(&self, id: E::Id) -> DomainResult<bool> {
        (**self).delete_by_id(id).await
    }
}
