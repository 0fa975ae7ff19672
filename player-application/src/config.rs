use crate::context::AppContext;
use bon::Builder;
use player_domain::filter::DEFAULT_PAGE_SIZE;

/// 玩家服务配置
///
/// 环境变量：
/// - `PLAYER_DEFAULT_PAGE_SIZE`：未指定 `pageSize` 时的每页条数（≥1，默认 3）
/// - `PLAYER_MAX_PAGE_SIZE`：每页条数上限（≥1，默认不限）
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct PlayerConfig {
    #[builder(default = DEFAULT_PAGE_SIZE)]
    default_page_size: usize,
    max_page_size: Option<usize>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl PlayerConfig {
    pub fn default_page_size(&self) -> usize {
        self.default_page_size
    }

    pub fn max_page_size(&self) -> Option<usize> {
        self.max_page_size
    }

    /// 将请求的每页条数收敛到上限以内
    pub fn clamp_page_size(&self, ctx: &AppContext, requested: usize) -> usize {
        match self.max_page_size {
            Some(max) if requested > max => {
                tracing::debug!(
                    request_id = ctx.request_id(),
                    requested,
                    max,
                    "page size clamped"
                );
                max
            }
            _ => requested,
        }
    }

    /// 从进程环境变量加载，非法值忽略并回退默认
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(size) = positive(&lookup, "PLAYER_DEFAULT_PAGE_SIZE") {
            config.default_page_size = size;
            tracing::info!(
                size,
                "Applied PLAYER_DEFAULT_PAGE_SIZE environment variable"
            );
        }
        if let Some(size) = positive(&lookup, "PLAYER_MAX_PAGE_SIZE") {
            config.max_page_size = Some(size);
            tracing::info!(size, "Applied PLAYER_MAX_PAGE_SIZE environment variable");
        }

        config
    }
}

fn positive(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<usize> {
    let val = lookup(key)?;
    match val.trim().parse::<usize>() {
        Ok(size) if size >= 1 => Some(size),
        _ => {
            tracing::warn!(key, val = %val, "invalid page size, ignoring");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = PlayerConfig::default();
        assert_eq!(config.default_page_size(), 3);
        assert_eq!(config.max_page_size(), None);
    }

    #[test]
    fn reads_overrides() {
        let config = PlayerConfig::from_lookup(lookup(&[
            ("PLAYER_DEFAULT_PAGE_SIZE", "20"),
            ("PLAYER_MAX_PAGE_SIZE", " 100 "),
        ]));
        assert_eq!(config.default_page_size(), 20);
        assert_eq!(config.max_page_size(), Some(100));
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = PlayerConfig::from_lookup(lookup(&[
            ("PLAYER_DEFAULT_PAGE_SIZE", "0"),
            ("PLAYER_MAX_PAGE_SIZE", "many"),
        ]));
        assert_eq!(config, PlayerConfig::default());
    }

    #[test]
    fn clamp_respects_max() {
        let ctx = AppContext::default();
        let config = PlayerConfig::builder().max_page_size(10).build();
        assert_eq!(config.clamp_page_size(&ctx, 50), 10);
        assert_eq!(config.clamp_page_size(&ctx, 5), 5);
        assert_eq!(PlayerConfig::default().clamp_page_size(&ctx, 500), 500);
    }
}
