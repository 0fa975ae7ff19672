//! 查询参数 → 规约 + 分页描述
//!
//! 每个出现的参数生成一个子条件，子条件之间仅做 AND 组合，与顺序无关；
//! 未出现的参数不生成任何条件。无法解析的参数值一律视为请求错误。
//!
use crate::error::{DomainError, DomainResult};
use crate::persist::PageRequest;
use crate::player::{MAX_BIRTHDAY_MILLIS, Player, Profession, Race};
use crate::specification::Specification;
use player_macros::domain_enum;
use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

/// 默认每页条数
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// 列表排序字段
#[domain_enum]
#[derive(Default)]
pub enum PlayerOrder {
    #[default]
    Id,
    Name,
    Experience,
    Birthday,
    Level,
}

impl PlayerOrder {
    /// 对应的实体字段名
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Experience => "experience",
            Self::Birthday => "birthday",
            Self::Level => "level",
        }
    }
}

/// 单个过滤条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerCriterion {
    NameContains(String),
    TitleContains(String),
    RaceIs(Race),
    ProfessionIs(Profession),
    /// 毫秒时间戳，两端包含
    BornBetween { after: i64, before: i64 },
    BannedIs(bool),
    ExperienceBetween { min: i32, max: i32 },
    LevelBetween { min: i32, max: i32 },
}

impl Specification<Player> for PlayerCriterion {
    fn is_satisfied_by(&self, p: &Player) -> bool {
        match self {
            Self::NameContains(s) => p.name().contains(s.as_str()),
            Self::TitleContains(s) => p.title().contains(s.as_str()),
            Self::RaceIs(race) => p.race() == *race,
            Self::ProfessionIs(profession) => p.profession() == *profession,
            Self::BornBetween { after, before } => {
                let born = p.birthday().timestamp_millis();
                (*after..=*before).contains(&born)
            }
            Self::BannedIs(banned) => p.banned() == *banned,
            Self::ExperienceBetween { min, max } => (*min..=*max).contains(&p.experience()),
            Self::LevelBetween { min, max } => (*min..=*max).contains(&p.level()),
        }
    }
}

/// 所有生效条件的合取
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerFilter {
    criteria: Vec<PlayerCriterion>,
}

impl PlayerFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个条件
    pub fn with(mut self, criterion: PlayerCriterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    pub fn criteria(&self) -> &[PlayerCriterion] {
        &self.criteria
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// 由查询参数构建过滤条件
    pub fn from_params(params: &HashMap<String, String>) -> DomainResult<Self> {
        let mut filter = Self::new();

        if let Some(name) = raw(params, "name") {
            filter = filter.with(PlayerCriterion::NameContains(name.to_string()));
        }
        if let Some(title) = raw(params, "title") {
            filter = filter.with(PlayerCriterion::TitleContains(title.to_string()));
        }
        if let Some(race) = parsed::<Race>(params, "race")? {
            filter = filter.with(PlayerCriterion::RaceIs(race));
        }
        if let Some(profession) = parsed::<Profession>(params, "profession")? {
            filter = filter.with(PlayerCriterion::ProfessionIs(profession));
        }

        let after = parsed::<i64>(params, "after")?;
        let before = parsed::<i64>(params, "before")?;
        if after.is_some() || before.is_some() {
            filter = filter.with(PlayerCriterion::BornBetween {
                after: after.unwrap_or(0),
                before: before.unwrap_or(MAX_BIRTHDAY_MILLIS + 1),
            });
        }

        if let Some(banned) = parsed::<bool>(params, "banned")? {
            filter = filter.with(PlayerCriterion::BannedIs(banned));
        }

        if let Some((min, max)) = range(params, "minExperience", "maxExperience")? {
            filter = filter.with(PlayerCriterion::ExperienceBetween { min, max });
        }
        if let Some((min, max)) = range(params, "minLevel", "maxLevel")? {
            filter = filter.with(PlayerCriterion::LevelBetween { min, max });
        }

        Ok(filter)
    }
}

impl Specification<Player> for PlayerFilter {
    fn is_satisfied_by(&self, candidate: &Player) -> bool {
        self.criteria.iter().all(|c| c.is_satisfied_by(candidate))
    }
}

impl PageRequest<PlayerOrder> {
    /// 由查询参数构建分页描述
    pub fn from_params(
        params: &HashMap<String, String>,
        default_page_size: usize,
    ) -> DomainResult<Self> {
        let sort = parsed::<PlayerOrder>(params, "order")?.unwrap_or_default();
        let page_number = parsed::<usize>(params, "pageNumber")?.unwrap_or(0);
        let page_size = parsed::<usize>(params, "pageSize")?;
        let page_size = page_size.unwrap_or(default_page_size);

        if page_size == 0 {
            return Err(DomainError::InvalidParameter {
                name: "pageSize",
                value: page_size.to_string(),
                reason: "must be at least 1".into(),
            });
        }

        Ok(Self::new(page_number, page_size, sort))
    }
}

/// 过滤构建器的完整输出
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerQuery {
    pub filter: PlayerFilter,
    pub page: PageRequest<PlayerOrder>,
}

impl PlayerQuery {
    pub fn from_params(
        params: &HashMap<String, String>,
        default_page_size: usize,
    ) -> DomainResult<Self> {
        Ok(Self {
            filter: PlayerFilter::from_params(params)?,
            page: PageRequest::from_params(params, default_page_size)?,
        })
    }
}

fn raw<'a>(params: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    params.get(name).map(String::as_str)
}

fn parsed<T>(params: &HashMap<String, String>, name: &'static str) -> DomainResult<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    raw(params, name)
        .map(|value| {
            value.parse::<T>().map_err(|e| DomainError::InvalidParameter {
                name,
                value: value.to_string(),
                reason: e.to_string(),
            })
        })
        .transpose()
}

// 任一端出现即生效；缺省下界 0，缺省上界 i32::MAX
fn range(
    params: &HashMap<String, String>,
    min_name: &'static str,
    max_name: &'static str,
) -> DomainResult<Option<(i32, i32)>> {
    let min = parsed::<i32>(params, min_name)?;
    let max = parsed::<i32>(params, max_name)?;
    if min.is_none() && max.is_none() {
        return Ok(None);
    }
    Ok(Some((min.unwrap_or(0), max.unwrap_or(i32::MAX))))
}
