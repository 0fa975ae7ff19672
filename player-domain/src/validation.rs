//! 字段校验
//!
//! 入参为全部可选的原始字段集合；任一字段不合法即整体失败，不存在部分成功。
//! 创建路径另要求除 `banned` 外的字段全部存在。
//!
use crate::error::{DomainError, DomainResult};
use crate::player::{MAX_BIRTHDAY_MILLIS, MIN_BIRTHDAY_MILLIS, Player, Profession, Race};
use chrono::{DateTime, Utc};
use serde::Deserialize;

pub const MAX_NAME_LEN: usize = 12;
pub const MAX_TITLE_LEN: usize = 30;
pub const MIN_EXPERIENCE: i32 = 0;
pub const MAX_EXPERIENCE: i32 = 10_000_000;

/// 待校验的玩家字段（请求体）
///
/// 缺失与显式 `null` 均表示“未提供”，更新时保持原值不变。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerFields {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<String>,
    pub profession: Option<String>,
    /// 毫秒时间戳
    pub birthday: Option<i64>,
    pub experience: Option<i64>,
    pub banned: Option<bool>,
}

/// 校验通过、已转换为领域类型的字段集合
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerChanges {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    pub birthday: Option<DateTime<Utc>>,
    pub experience: Option<i32>,
    pub banned: Option<bool>,
}

impl PlayerChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// 仅覆盖已提供的字段；经验值变化时同步重算派生字段
    pub fn apply_to(self, player: &mut Player) {
        if let Some(name) = self.name {
            player.set_name(name);
        }
        if let Some(title) = self.title {
            player.set_title(title);
        }
        if let Some(race) = self.race {
            player.set_race(race);
        }
        if let Some(profession) = self.profession {
            player.set_profession(profession);
        }
        if let Some(birthday) = self.birthday {
            player.set_birthday(birthday);
        }
        if let Some(banned) = self.banned {
            player.set_banned(banned);
        }
        if let Some(experience) = self.experience {
            player.set_experience(experience);
        }
    }
}

pub fn validate_name(name: &str) -> DomainResult<()> {
    if name.is_empty() {
        return Err(invalid("name", "must not be empty"));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(invalid("name", format!("longer than {MAX_NAME_LEN} characters")));
    }
    Ok(())
}

pub fn validate_title(title: &str) -> DomainResult<()> {
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(invalid("title", format!("longer than {MAX_TITLE_LEN} characters")));
    }
    Ok(())
}

pub fn validate_experience(experience: i64) -> DomainResult<i32> {
    if !(i64::from(MIN_EXPERIENCE)..=i64::from(MAX_EXPERIENCE)).contains(&experience) {
        return Err(invalid(
            "experience",
            format!("{experience} outside [{MIN_EXPERIENCE}, {MAX_EXPERIENCE}]"),
        ));
    }
    Ok(experience as i32)
}

pub fn validate_birthday(millis: i64) -> DomainResult<DateTime<Utc>> {
    if millis < 0 {
        return Err(invalid("birthday", "negative timestamp"));
    }
    if !(MIN_BIRTHDAY_MILLIS..=MAX_BIRTHDAY_MILLIS).contains(&millis) {
        return Err(invalid("birthday", format!("{millis} outside registration window")));
    }
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| invalid("birthday", "out of range"))
}

/// 逐字段校验；未提供的字段不参与校验
pub fn validate_fields(fields: &PlayerFields) -> DomainResult<PlayerChanges> {
    if let Some(name) = &fields.name {
        validate_name(name)?;
    }
    if let Some(title) = &fields.title {
        validate_title(title)?;
    }

    Ok(PlayerChanges {
        name: fields.name.clone(),
        title: fields.title.clone(),
        race: fields.race.as_deref().map(str::parse).transpose()?,
        profession: fields.profession.as_deref().map(str::parse).transpose()?,
        birthday: fields.birthday.map(validate_birthday).transpose()?,
        experience: fields.experience.map(validate_experience).transpose()?,
        banned: fields.banned,
    })
}

/// 创建校验：除 `banned`（默认 false）外全部字段必填
pub fn validate_new_player(fields: &PlayerFields) -> DomainResult<Player> {
    let changes = validate_fields(fields)?;

    Ok(Player::builder()
        .name(changes.name.ok_or_else(|| missing("name"))?)
        .title(changes.title.ok_or_else(|| missing("title"))?)
        .race(changes.race.ok_or_else(|| missing("race"))?)
        .profession(changes.profession.ok_or_else(|| missing("profession"))?)
        .birthday(changes.birthday.ok_or_else(|| missing("birthday"))?)
        .experience(changes.experience.ok_or_else(|| missing("experience"))?)
        .maybe_banned(changes.banned)
        .build())
}

fn invalid(field: &'static str, reason: impl Into<String>) -> DomainError {
    DomainError::InvalidValue {
        field,
        reason: reason.into(),
    }
}

fn missing(field: &'static str) -> DomainError {
    DomainError::MissingField { field }
}
