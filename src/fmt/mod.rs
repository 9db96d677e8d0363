//! 基于模板的时长格式化

pub mod decompose;
pub mod render;
pub mod template;

pub use template::{Template, Token};

use tracing::debug;

/// 按照模板格式化时长（纳秒计）
///
/// 支持的占位符：
/// - `%y` 年（固定 365 天）
/// - `%o` 月（固定 30 天）
/// - `%w` 周
/// - `%d` 天
/// - `%h` 时
/// - `%m` 分
/// - `%s` 秒
/// - `%i` 毫秒
/// - `%c` 微秒
/// - `%n` 纳秒
/// - `%%` 百分号本身
///
/// 在单位字符前加 `0`（如 `%0m`）可将数值零填充到两位，填充只对
/// 时、分、秒有明确意义；其余单位同样按两位填充处理，但不作保证。
/// 未出现在模板中的单位不参与分解，其数值范围折入更小的已请求单位。
pub fn format(dur_nanos: i64, template: &str) -> crate::Result<String> {
    let template = Template::parse(template)?;
    Ok(template.format(dur_nanos))
}

/// [`std::time::Duration`] 便捷入口
///
/// 纳秒数超出 i64 范围时饱和为 `i64::MAX`。
pub fn format_std(dur: std::time::Duration, template: &str) -> crate::Result<String> {
    let dur_nanos = dur.as_nanos().try_into().unwrap_or_else(|_| {
        debug!("duration exceeds i64 nanoseconds, saturating");
        i64::MAX
    });
    format(dur_nanos, template)
}
