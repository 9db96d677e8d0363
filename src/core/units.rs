use serde::{Deserialize, Serialize};

// 时长常量（纳秒计）
pub const NANOSECOND: i64 = 1;
pub const MICROSECOND: i64 = 1_000 * NANOSECOND;
pub const MILLISECOND: i64 = 1_000 * MICROSECOND;
pub const SECOND: i64 = 1_000 * MILLISECOND;
pub const MINUTE: i64 = 60 * SECOND;
pub const HOUR: i64 = 60 * MINUTE;
pub const DAY: i64 = 24 * HOUR;
pub const WEEK: i64 = 7 * DAY;
pub const MONTH: i64 = 30 * DAY; // 固定 30 天近似，无日历语义
pub const YEAR: i64 = 365 * DAY; // 固定 365 天近似，无日历语义

/// 规范单位个数
pub const UNIT_COUNT: usize = 10;

/// 时长单位，对应模板中的单字符占位符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Unit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
    Microsecond,
    Nanosecond,
}

impl Unit {
    /// 规范单位顺序（从大到小），分解时按此顺序处理
    pub const CANONICAL: [Unit; UNIT_COUNT] = [
        Unit::Year,
        Unit::Month,
        Unit::Week,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
        Unit::Millisecond,
        Unit::Microsecond,
        Unit::Nanosecond,
    ];

    /// 从占位符字符查找单位
    pub fn from_code(code: char) -> Option<Unit> {
        match code {
            'y' => Some(Unit::Year),
            'o' => Some(Unit::Month),
            'w' => Some(Unit::Week),
            'd' => Some(Unit::Day),
            'h' => Some(Unit::Hour),
            'm' => Some(Unit::Minute),
            's' => Some(Unit::Second),
            'i' => Some(Unit::Millisecond),
            'c' => Some(Unit::Microsecond),
            'n' => Some(Unit::Nanosecond),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            Unit::Year => 'y',
            Unit::Month => 'o',
            Unit::Week => 'w',
            Unit::Day => 'd',
            Unit::Hour => 'h',
            Unit::Minute => 'm',
            Unit::Second => 's',
            Unit::Millisecond => 'i',
            Unit::Microsecond => 'c',
            Unit::Nanosecond => 'n',
        }
    }

    /// 该单位对应的除数（纳秒）
    pub fn divisor(self) -> i64 {
        match self {
            Unit::Year => YEAR,
            Unit::Month => MONTH,
            Unit::Week => WEEK,
            Unit::Day => DAY,
            Unit::Hour => HOUR,
            Unit::Minute => MINUTE,
            Unit::Second => SECOND,
            Unit::Millisecond => MILLISECOND,
            Unit::Microsecond => MICROSECOND,
            Unit::Nanosecond => NANOSECOND,
        }
    }
}

/// 模板中出现过的单位集合
///
/// 解析阶段构建，分解阶段只读消费，不存在跨调用的共享可变状态。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitSet {
    bits: u16,
}

impl UnitSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, unit: Unit) {
        self.bits |= 1 << unit as u16;
    }

    pub fn contains(&self, unit: Unit) -> bool {
        self.bits & (1 << unit as u16) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// 按规范顺序（从大到小）遍历集合成员
    pub fn iter(&self) -> impl Iterator<Item = Unit> + '_ {
        Unit::CANONICAL
            .into_iter()
            .filter(move |unit| self.contains(*unit))
    }
}
