use bon::Builder;

/// 应用层上下文（Application Context）
///
/// 承载一次请求的横切信息，仅用于日志关联：
/// - `request_id`：请求标识，贯穿该请求产生的所有日志；
/// - `actor`：发起方描述（可选）。
///
/// ```rust
/// use player_application::context::AppContext;
///
/// let ctx = AppContext::builder()
///     .request_id("req-1")
///     .actor("ops-console")
///     .build();
/// assert_eq!(ctx.request_id(), "req-1");
/// assert_eq!(ctx.actor(), Some("ops-console"));
/// ```
#[derive(Clone, Debug, Default, Builder)]
pub struct AppContext {
    #[builder(into)]
    request_id: Option<String>,
    #[builder(into)]
    actor: Option<String>,
}

impl AppContext {
    pub fn request_id(&self) -> &str {
        self.request_id.as_deref().unwrap_or("-")
    }

    pub fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }
}
