/// 应用层命令（Command）
///
/// 表达“意图”的写操作请求，会修改玩家存储。
/// - 建议保持语义化的“动宾结构”命名，如 `CreatePlayer`、`DeletePlayer`。
///
/// 关联常量：
/// - `NAME`：命令的稳定名称，用于日志与追踪。避免依赖 `type_name::<T>()`。
pub trait Command: Send + Sync + 'static {
    /// 命令的稳定名称（建议常量字符串，不随重构变化）
    const NAME: &'static str;

    /// 执行结果（创建/更新返回记录，删除返回空）
    type Output: Send + 'static;
}
