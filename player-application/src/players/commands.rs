use crate::command::Command;
use crate::command_handler::CommandHandler;
use crate::context::AppContext;
use crate::dto::PlayerDto;
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use player_domain::entity::Entity;
use player_domain::persist::Repository;
use player_domain::player::{Player, PlayerId};
use player_domain::validation::{PlayerFields, validate_fields, validate_new_player};
use std::sync::Arc;

/// 创建玩家：全部必填字段需存在且合法
#[derive(Debug, Clone)]
pub struct CreatePlayer {
    pub fields: PlayerFields,
}

impl Command for CreatePlayer {
    const NAME: &'static str = "player.create";
    type Output = PlayerDto;
}

/// 部分更新：仅覆盖已提供的字段
#[derive(Debug, Clone)]
pub struct UpdatePlayer {
    pub id: PlayerId,
    pub fields: PlayerFields,
}

impl Command for UpdatePlayer {
    const NAME: &'static str = "player.update";
    type Output = PlayerDto;
}

#[derive(Debug, Clone, Copy)]
pub struct DeletePlayer {
    pub id: PlayerId,
}

impl Command for DeletePlayer {
    const NAME: &'static str = "player.delete";
    type Output = ();
}

/// 玩家写操作处理器
pub struct PlayerCommandHandler<R> {
    repo: Arc<R>,
}

impl<R> PlayerCommandHandler<R>
where
    R: Repository<Player>,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    async fn load(&self, id: PlayerId) -> AppResult<Player> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("player {id}")))
    }
}

#[async_trait]
impl<R> CommandHandler<CreatePlayer> for PlayerCommandHandler<R>
where
    R: Repository<Player>,
{
    async fn handle(&self, ctx: &AppContext, cmd: CreatePlayer) -> AppResult<PlayerDto> {
        let player = validate_new_player(&cmd.fields)?;
        let saved = self.repo.save(player).await?;

        tracing::info!(
            request_id = ctx.request_id(),
            command = CreatePlayer::NAME,
            id = ?saved.id(),
            "player created"
        );
        Ok(PlayerDto::from(saved))
    }
}

#[async_trait]
impl<R> CommandHandler<UpdatePlayer> for PlayerCommandHandler<R>
where
    R: Repository<Player>,
{
    async fn handle(&self, ctx: &AppContext, cmd: UpdatePlayer) -> AppResult<PlayerDto> {
        // 先确认记录存在，再校验请求体
        let mut player = self.load(cmd.id).await?;
        let changes = validate_fields(&cmd.fields)?;

        if changes.is_empty() {
            tracing::debug!(
                request_id = ctx.request_id(),
                command = UpdatePlayer::NAME,
                id = %cmd.id,
                "empty update, record unchanged"
            );
            return Ok(PlayerDto::from(player));
        }

        changes.apply_to(&mut player);
        let saved = self.repo.save(player).await?;

        tracing::info!(
            request_id = ctx.request_id(),
            command = UpdatePlayer::NAME,
            id = %cmd.id,
            "player updated"
        );
        Ok(PlayerDto::from(saved))
    }
}

#[async_trait]
impl<R> CommandHandler<DeletePlayer> for PlayerCommandHandler<R>
where
    R: Repository<Player>,
{
    async fn handle(&self, ctx: &AppContext, cmd: DeletePlayer) -> AppResult<()> {
        if !self.repo.exists_by_id(cmd.id).await? {
            return Err(AppError::NotFound(format!("player {}", cmd.id)));
        }
        self.repo.delete_by_id(cmd.id).await?;

        tracing::info!(
            request_id = ctx.request_id(),
            command = DeletePlayer::NAME,
            id = %cmd.id,
            "player deleted"
        );
        Ok(())
    }
}
