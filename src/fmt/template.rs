use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::trace;

use crate::core::error::FormatError;
use crate::core::units::{Unit, UnitSet};

/// 模板中的一段：原样输出的文本，或一个单位占位符
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Literal(String),
    Unit { unit: Unit, zero_pad: bool },
}

/// 解析后的时长格式模板
///
/// 一次解析可多次复用；`format` 在解析成功后不再失败。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    raw: String,
    tokens: Vec<Token>,
    units: UnitSet,
}

// 解析器状态：普通文本 / `%` 之后 / `%0` 之后
enum State {
    Literal,
    DirectiveOpen,
    ZeroPending,
}

impl Template {
    /// 解析模板字符串
    ///
    /// 占位符形如 `%<code>` 或 `%0<code>`，`%%` 输出百分号本身。
    /// `%` 之后（可带一个 `0`）出现未知字符时整体解析失败，不产生部分结果。
    pub fn parse(raw: &str) -> crate::Result<Self> {
        let mut tokens = Vec::new();
        let mut units = UnitSet::new();
        let mut literal = String::new();
        let mut state = State::Literal;
        // 当前占位符的起始 `%` 位置，用于错误定位
        let mut directive_start = 0;

        for (pos, c) in raw.char_indices() {
            match state {
                State::Literal => {
                    if c == '%' {
                        directive_start = pos;
                        state = State::DirectiveOpen;
                    } else {
                        literal.push(c);
                    }
                }
                State::DirectiveOpen => match c {
                    '0' => {
                        state = State::ZeroPending;
                    }
                    '%' => {
                        literal.push('%');
                        state = State::Literal;
                    }
                    _ => {
                        let unit = Unit::from_code(c)
                            .ok_or_else(|| FormatError::invalid_directive(c, pos))?;
                        if !literal.is_empty() {
                            tokens.push(Token::Literal(std::mem::take(&mut literal)));
                        }
                        tokens.push(Token::Unit {
                            unit,
                            zero_pad: false,
                        });
                        units.insert(unit);
                        state = State::Literal;
                    }
                },
                State::ZeroPending => {
                    // `%0` 之后只接受单位字符
                    let unit = Unit::from_code(c)
                        .ok_or_else(|| FormatError::invalid_directive(c, pos))?;
                    if !literal.is_empty() {
                        tokens.push(Token::Literal(std::mem::take(&mut literal)));
                    }
                    tokens.push(Token::Unit {
                        unit,
                        zero_pad: true,
                    });
                    units.insert(unit);
                    state = State::Literal;
                }
            }
        }

        if !matches!(state, State::Literal) {
            return Err(FormatError::unterminated(directive_start));
        }

        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }

        trace!(template = raw, tokens = tokens.len(), "parsed duration template");

        Ok(Self {
            raw: raw.to_string(),
            tokens,
            units,
        })
    }

    /// 按模板格式化时长（纳秒计）
    pub fn format(&self, dur_nanos: i64) -> String {
        let values = super::decompose::decompose(dur_nanos, self.units);
        super::render::render(&self.tokens, &values)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn units(&self) -> UnitSet {
        self.units
    }

    /// 原始模板字符串
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for Template {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::parse(s)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

// 模板在配置中以原始字符串形式出现，序列化/反序列化均走字符串
impl Serialize for Template {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Template {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Template::parse(&raw).map_err(serde::de::Error::custom)
    }
}
