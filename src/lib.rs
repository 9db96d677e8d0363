pub mod core;
pub mod fmt;

// 重新导出主要类型
pub use self::core::error::FormatError;
pub use self::core::units::{Unit, UnitSet};
pub use self::fmt::template::{Template, Token};
pub use self::fmt::{format, format_std};

// 时长常量（纳秒）
pub use self::core::units::{
    DAY, HOUR, MICROSECOND, MILLISECOND, MINUTE, MONTH, NANOSECOND, SECOND, WEEK, YEAR,
};

// 结果类型别名
pub type Result<T> = std::result::Result<T, FormatError>;
