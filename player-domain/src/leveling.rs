//! 等级推导
//!
//! level = floor((sqrt(2500 + 200·exp) − 50) / 100)
//! untilNextLevel = 50·(level+1)·(level+2) − exp
//!
//! 两者总是一起由同一经验值计算得出。

/// 由经验值推导出的等级进度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub level: i32,
    pub until_next_level: i32,
}

/// 计算经验值对应的等级（先求连续值，再向零截断）
pub fn level(experience: i32) -> i32 {
    let exp = f64::from(experience);
    (((2500.0 + 200.0 * exp).sqrt() - 50.0) / 100.0) as i32
}

/// 计算在给定等级下距离升级还需的经验
pub fn until_next_level(level: i32, experience: i32) -> i32 {
    let level = i64::from(level);
    (50 * (level + 1) * (level + 2) - i64::from(experience)) as i32
}

/// 同时计算等级与升级所需经验
pub fn progress(experience: i32) -> Progress {
    let level = level(experience);
    Progress {
        level,
        until_next_level: until_next_level(level, experience),
    }
}
