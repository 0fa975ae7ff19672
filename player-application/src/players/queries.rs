use crate::context::AppContext;
use crate::dto::{CountDto, PlayerDto, PlayerListDto};
use crate::error::{AppError, AppResult};
use crate::query::Query;
use crate::query_handler::QueryHandler;
use async_trait::async_trait;
use player_domain::filter::{PlayerFilter, PlayerQuery};
use player_domain::persist::Repository;
use player_domain::player::{Player, PlayerId};
use std::sync::Arc;

/// 分页列表查询
#[derive(Debug, Clone)]
pub struct ListPlayers {
    pub query: PlayerQuery,
}

impl Query for ListPlayers {
    const NAME: &'static str = "player.list";
    type Dto = PlayerListDto;
}

/// 计数查询（忽略分页）
#[derive(Debug, Clone)]
pub struct CountPlayers {
    pub filter: PlayerFilter,
}

impl Query for CountPlayers {
    const NAME: &'static str = "player.count";
    type Dto = CountDto;
}

#[derive(Debug, Clone, Copy)]
pub struct GetPlayer {
    pub id: PlayerId,
}

impl Query for GetPlayer {
    const NAME: &'static str = "player.get";
    type Dto = PlayerDto;
}

/// 玩家只读查询处理器
pub struct PlayerQueryHandler<R> {
    repo: Arc<R>,
}

impl<R> PlayerQueryHandler<R>
where
    R: Repository<Player>,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> QueryHandler<ListPlayers> for PlayerQueryHandler<R>
where
    R: Repository<Player>,
{
    async fn handle(&self, ctx: &AppContext, q: ListPlayers) -> AppResult<PlayerListDto> {
        let PlayerQuery { filter, page } = q.query;
        let players = self.repo.find(&filter, &page).await?;

        tracing::debug!(
            request_id = ctx.request_id(),
            query = ListPlayers::NAME,
            criteria = filter.criteria().len(),
            page = page.page_number,
            size = page.page_size,
            order = page.sort.field_name(),
            returned = players.len(),
            "players listed"
        );
        Ok(PlayerListDto(players.iter().map(PlayerDto::from).collect()))
    }
}

#[async_trait]
impl<R> QueryHandler<CountPlayers> for PlayerQueryHandler<R>
where
    R: Repository<Player>,
{
    async fn handle(&self, ctx: &AppContext, q: CountPlayers) -> AppResult<CountDto> {
        let count = self.repo.count(&q.filter).await?;

        tracing::debug!(
            request_id = ctx.request_id(),
            query = CountPlayers::NAME,
            criteria = q.filter.criteria().len(),
            count,
            "players counted"
        );
        Ok(CountDto(count))
    }
}

#[async_trait]
impl<R> QueryHandler<GetPlayer> for PlayerQueryHandler<R>
where
    R: Repository<Player>,
{
    async fn handle(&self, ctx: &AppContext, q: GetPlayer) -> AppResult<PlayerDto> {
        tracing::debug!(
            request_id = ctx.request_id(),
            query = GetPlayer::NAME,
            id = %q.id,
            "player requested"
        );

        self.repo
            .get_by_id(q.id)
            .await?
            .map(PlayerDto::from)
            .ok_or_else(|| AppError::NotFound(format!("player {}", q.id)))
    }
}
