use crate::core::units::{Unit, UnitSet, UNIT_COUNT};

/// 分解结果：各单位的整数计数，按规范单位下标存放
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitValues {
    counts: [i64; UNIT_COUNT],
}

impl UnitValues {
    pub fn get(&self, unit: Unit) -> i64 {
        self.counts[unit as usize]
    }

    fn set(&mut self, unit: Unit, count: i64) {
        self.counts[unit as usize] = count;
    }
}

/// 把时长按请求的单位集合逐级分解
///
/// 按规范顺序（从大到小）处理集合内的单位：`count = remaining / divisor`，
/// `remaining %= divisor`。未请求的单位不消耗余数，其数值范围折入下一个
/// 更小的已请求单位。除法与取余均向零截断，余数符号跟随被除数。
pub fn decompose(dur_nanos: i64, units: UnitSet) -> UnitValues {
    let mut values = UnitValues::default();
    let mut remaining = dur_nanos;

    for unit in Unit::CANONICAL {
        if !units.contains(unit) {
            continue;
        }
        values.set(unit, remaining / unit.divisor());
        remaining %= unit.divisor();
    }

    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::units::{DAY, HOUR, MINUTE, SECOND};

    fn set_of(units: &[Unit]) -> UnitSet {
        let mut set = UnitSet::new();
        for unit in units {
            set.insert(*unit);
        }
        set
    }

    #[test]
    fn test_hours_and_minutes() {
        let values = decompose(90 * MINUTE, set_of(&[Unit::Hour, Unit::Minute]));
        assert_eq!(values.get(Unit::Hour), 1);
        assert_eq!(values.get(Unit::Minute), 30);
    }

    #[test]
    fn test_skipped_unit_folds_into_smaller() {
        // 未请求分钟时，提取小时后的余数直接折入秒
        let values = decompose(90 * MINUTE, set_of(&[Unit::Hour, Unit::Second]));
        assert_eq!(values.get(Unit::Hour), 1);
        assert_eq!(values.get(Unit::Second), 1800);
        assert_eq!(values.get(Unit::Minute), 0);
    }

    #[test]
    fn test_no_larger_unit_means_no_upper_bound() {
        let values = decompose(3 * DAY, set_of(&[Unit::Hour]));
        assert_eq!(values.get(Unit::Hour), 72);
    }

    #[test]
    fn test_full_extended_chain() {
        let dur = 2 * DAY + 3 * HOUR + 4 * MINUTE + 5 * SECOND + 6_007_008;
        let values = decompose(
            dur,
            set_of(&[
                Unit::Day,
                Unit::Hour,
                Unit::Minute,
                Unit::Second,
                Unit::Millisecond,
                Unit::Microsecond,
                Unit::Nanosecond,
            ]),
        );
        assert_eq!(values.get(Unit::Day), 2);
        assert_eq!(values.get(Unit::Hour), 3);
        assert_eq!(values.get(Unit::Minute), 4);
        assert_eq!(values.get(Unit::Second), 5);
        assert_eq!(values.get(Unit::Millisecond), 6);
        assert_eq!(values.get(Unit::Microsecond), 7);
        assert_eq!(values.get(Unit::Nanosecond), 8);
    }

    #[test]
    fn test_negative_duration_truncates_toward_zero() {
        let values = decompose(-90 * MINUTE, set_of(&[Unit::Hour, Unit::Minute]));
        assert_eq!(values.get(Unit::Hour), -1);
        assert_eq!(values.get(Unit::Minute), -30);
    }

    #[test]
    fn test_empty_set() {
        let values = decompose(123 * HOUR, UnitSet::new());
        for unit in Unit::CANONICAL {
            assert_eq!(values.get(unit), 0);
        }
    }

    #[test]
    fn test_zero_duration() {
        let values = decompose(0, set_of(&[Unit::Year, Unit::Second]));
        assert_eq!(values.get(Unit::Year), 0);
        assert_eq!(values.get(Unit::Second), 0);
    }
}
