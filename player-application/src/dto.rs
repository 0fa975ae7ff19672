use chrono::{DateTime, Utc};
use player_domain::entity::Entity;
use player_domain::player::{Player, PlayerId, Profession, Race};
use serde::Serialize;

/// 数据传输对象（DTO）
///
/// - 作为应用层的输出载体，面向接口/外部系统序列化友好；
/// - 与领域模型解耦，避免将领域对象直接暴露到接口层。
pub trait Dto: Serialize + Send + Sync + 'static {}

/// 玩家记录的对外形态（生日为毫秒时间戳）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub id: Option<PlayerId>,
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub birthday: DateTime<Utc>,
    pub banned: bool,
    pub experience: i32,
    pub level: i32,
    pub until_next_level: i32,
}

impl Dto for PlayerDto {}

impl From<&Player> for PlayerDto {
    fn from(p: &Player) -> Self {
        Self {
            id: p.id(),
            name: p.name().to_string(),
            title: p.title().to_string(),
            race: p.race(),
            profession: p.profession(),
            birthday: p.birthday(),
            banned: p.banned(),
            experience: p.experience(),
            level: p.level(),
            until_next_level: p.until_next_level(),
        }
    }
}

impl From<Player> for PlayerDto {
    fn from(p: Player) -> Self {
        Self::from(&p)
    }
}

/// 玩家列表
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PlayerListDto(pub Vec<PlayerDto>);

impl Dto for PlayerListDto {}

/// 计数结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CountDto(pub usize);

impl Dto for CountDto {}
