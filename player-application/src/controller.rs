//! 请求处理入口（与具体 Web 框架无关）
//!
//! 接收原始输入（查询参数表、路径中的原始 id、请求体），完成解析与校验后
//! 分派给对应的命令/查询处理器；错误通过 [`AppError::status`] 映射为状态码。
//!
use crate::command_handler::CommandHandler;
use crate::config::PlayerConfig;
use crate::context::AppContext;
use crate::dto::{CountDto, PlayerDto, PlayerListDto};
use crate::error::{AppError, AppResult};
use crate::players::{
    CountPlayers, CreatePlayer, DeletePlayer, GetPlayer, ListPlayers, PlayerCommandHandler,
    PlayerQueryHandler, UpdatePlayer,
};
use crate::query_handler::QueryHandler;
use player_domain::filter::{PlayerFilter, PlayerQuery};
use player_domain::persist::Repository;
use player_domain::player::{Player, PlayerId};
use player_domain::validation::PlayerFields;
use std::collections::HashMap;
use std::sync::Arc;

pub struct PlayerController<R> {
    commands: PlayerCommandHandler<R>,
    queries: PlayerQueryHandler<R>,
    config: PlayerConfig,
}

impl<R> PlayerController<R>
where
    R: Repository<Player>,
{
    pub fn new(repo: Arc<R>, config: PlayerConfig) -> Self {
        Self {
            commands: PlayerCommandHandler::new(Arc::clone(&repo)),
            queries: PlayerQueryHandler::new(repo),
            config,
        }
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// `GET /players?<filters>`
    pub async fn list(
        &self,
        ctx: &AppContext,
        params: &HashMap<String, String>,
    ) -> AppResult<PlayerListDto> {
        observe(ctx, "list", self.handle_list(ctx, params).await)
    }

    /// `GET /players/count?<filters>`，分页参数被忽略
    pub async fn count(
        &self,
        ctx: &AppContext,
        params: &HashMap<String, String>,
    ) -> AppResult<CountDto> {
        observe(ctx, "count", self.handle_count(ctx, params).await)
    }

    /// `POST /players`
    pub async fn create(&self, ctx: &AppContext, body: PlayerFields) -> AppResult<PlayerDto> {
        let cmd = CreatePlayer { fields: body };
        observe(ctx, "create", self.commands.handle(ctx, cmd).await)
    }

    /// `GET /players/{id}`
    pub async fn get(&self, ctx: &AppContext, raw_id: Option<&str>) -> AppResult<PlayerDto> {
        observe(ctx, "get", self.handle_get(ctx, raw_id).await)
    }

    /// `POST /players/{id}`，部分更新
    pub async fn update(
        &self,
        ctx: &AppContext,
        raw_id: Option<&str>,
        body: PlayerFields,
    ) -> AppResult<PlayerDto> {
        observe(ctx, "update", self.handle_update(ctx, raw_id, body).await)
    }

    /// `DELETE /players/{id}`
    pub async fn delete(&self, ctx: &AppContext, raw_id: Option<&str>) -> AppResult<()> {
        observe(ctx, "delete", self.handle_delete(ctx, raw_id).await)
    }

    async fn handle_list(
        &self,
        ctx: &AppContext,
        params: &HashMap<String, String>,
    ) -> AppResult<PlayerListDto> {
        let mut query = PlayerQuery::from_params(params, self.config.default_page_size())?;
        query.page.page_size = self.config.clamp_page_size(ctx, query.page.page_size);
        self.queries.handle(ctx, ListPlayers { query }).await
    }

    async fn handle_count(
        &self,
        ctx: &AppContext,
        params: &HashMap<String, String>,
    ) -> AppResult<CountDto> {
        let filter = PlayerFilter::from_params(params)?;
        self.queries.handle(ctx, CountPlayers { filter }).await
    }

    async fn handle_get(&self, ctx: &AppContext, raw_id: Option<&str>) -> AppResult<PlayerDto> {
        let id = parse_id(raw_id)?;
        self.queries.handle(ctx, GetPlayer { id }).await
    }

    async fn handle_update(
        &self,
        ctx: &AppContext,
        raw_id: Option<&str>,
        body: PlayerFields,
    ) -> AppResult<PlayerDto> {
        let id = parse_id(raw_id)?;
        self.commands
            .handle(ctx, UpdatePlayer { id, fields: body })
            .await
    }

    async fn handle_delete(&self, ctx: &AppContext, raw_id: Option<&str>) -> AppResult<()> {
        let id = parse_id(raw_id)?;
        self.commands.handle(ctx, DeletePlayer { id }).await
    }
}

/// 解析 JSON 请求体；格式错误或类型不符视为请求错误
pub fn parse_body(json: &str) -> AppResult<PlayerFields> {
    serde_json::from_str(json)
        .map_err(|e| AppError::BadRequest(format!("malformed body: {e}")))
}

fn parse_id(raw: Option<&str>) -> AppResult<PlayerId> {
    PlayerId::parse(raw)
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

fn observe<T>(ctx: &AppContext, op: &'static str, result: AppResult<T>) -> AppResult<T> {
    let request_id = ctx.request_id();
    let actor = ctx.actor().unwrap_or("-");
    match &result {
        Ok(_) => {
            tracing::debug!(request_id, actor, op, "request handled");
        }
        Err(err) if err.status() >= 500 => {
            let status = err.status();
            tracing::error!(request_id, actor, op, status, error = %err, "request failed");
        }
        Err(err) => {
            let status = err.status();
            tracing::warn!(request_id, actor, op, status, error = %err, "request rejected");
        }
    }
    result
}
