//! 玩家实体与封闭枚举
//!
//! `level` 与 `until_next_level` 是经验值的派生字段，只能通过设置经验值间接更新。
//!
use crate::entity::Entity;
use crate::error::DomainError;
use crate::filter::PlayerOrder;
use crate::leveling::{self, Progress};
use chrono::{DateTime, Utc};
use player_macros::{domain_enum, entity_id};
use std::cmp::Ordering;

/// 注册时间窗口下界：2000-01-01T00:00:00Z（毫秒时间戳）
pub const MIN_BIRTHDAY_MILLIS: i64 = 946_684_800_000;
/// 注册时间窗口上界：3000-12-31T23:59:59Z（毫秒时间戳）
pub const MAX_BIRTHDAY_MILLIS: i64 = 32_535_215_999_000;

/// 玩家标识，由仓储在创建时分配
#[entity_id]
pub struct PlayerId(i64);

impl PlayerId {
    /// 解析路径中的原始标识；缺失、非数字或非正数均视为无效
    pub fn parse(raw: Option<&str>) -> Result<Self, DomainError> {
        let raw = raw.ok_or_else(|| DomainError::InvalidParameter {
            name: "id",
            value: String::new(),
            reason: "missing".into(),
        })?;
        let invalid = |reason: String| DomainError::InvalidParameter {
            name: "id",
            value: raw.to_string(),
            reason,
        };

        let id = raw.parse::<PlayerId>().map_err(|e| invalid(e.to_string()))?;
        if id.value() <= 0 {
            return Err(invalid("must be positive".into()));
        }
        Ok(id)
    }
}

#[domain_enum]
pub enum Race {
    Human,
    Dwarf,
    Elf,
    Giant,
    Orc,
    Troll,
    Hobbit,
}

#[domain_enum]
pub enum Profession {
    Warrior,
    Rogue,
    Sorcerer,
    Cleric,
    Paladin,
    Nazgul,
    Warlock,
    Druid,
}

/// 玩家记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: Option<PlayerId>,
    name: String,
    title: String,
    race: Race,
    profession: Profession,
    birthday: DateTime<Utc>,
    banned: bool,
    experience: i32,
    level: i32,
    until_next_level: i32,
}

#[bon::bon]
impl Player {
    /// 创建尚未持久化的玩家，派生字段由经验值计算
    #[builder]
    pub fn new(
        #[builder(into)] name: String,
        #[builder(into)] title: String,
        race: Race,
        profession: Profession,
        birthday: DateTime<Utc>,
        experience: i32,
        #[builder(default)] banned: bool,
    ) -> Self {
        let Progress {
            level,
            until_next_level,
        } = leveling::progress(experience);

        Self {
            id: None,
            name,
            title,
            race,
            profession,
            birthday,
            banned,
            experience,
            level,
            until_next_level,
        }
    }
}

impl Player {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn race(&self) -> Race {
        self.race
    }

    pub fn profession(&self) -> Profession {
        self.profession
    }

    pub fn birthday(&self) -> DateTime<Utc> {
        self.birthday
    }

    pub fn banned(&self) -> bool {
        self.banned
    }

    pub fn experience(&self) -> i32 {
        self.experience
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn until_next_level(&self) -> i32 {
        self.until_next_level
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_race(&mut self, race: Race) {
        self.race = race;
    }

    pub fn set_profession(&mut self, profession: Profession) {
        self.profession = profession;
    }

    pub fn set_birthday(&mut self, birthday: DateTime<Utc>) {
        self.birthday = birthday;
    }

    pub fn set_banned(&mut self, banned: bool) {
        self.banned = banned;
    }

    /// 设置经验值并同步重算等级与升级所需经验
    pub fn set_experience(&mut self, experience: i32) {
        let progress = leveling::progress(experience);
        self.experience = experience;
        self.level = progress.level;
        self.until_next_level = progress.until_next_level;
    }
}

impl Entity for Player {
    type Id = PlayerId;
    type SortKey = PlayerOrder;

    fn id(&self) -> Option<PlayerId> {
        self.id
    }

    fn assign_id(&mut self, id: PlayerId) {
        self.id = Some(id);
    }

    fn compare_by(&self, other: &Self, key: PlayerOrder) -> Ordering {
        match key {
            PlayerOrder::Id => self.id.cmp(&other.id),
            PlayerOrder::Name => self.name.cmp(&other.name),
            PlayerOrder::Experience => self.experience.cmp(&other.experience),
            PlayerOrder::Birthday => self.birthday.cmp(&other.birthday),
            PlayerOrder::Level => self.level.cmp(&other.level),
        }
    }
}
