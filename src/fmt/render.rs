use crate::fmt::decompose::UnitValues;
use crate::fmt::template::Token;

/// 按出现顺序渲染 token 序列
///
/// 文本段原样输出；单位占位符输出十进制计数，零填充形式最少两位，
/// 超过两位时完整输出、从不截断。同一单位的多个占位符输出同一数值。
pub fn render(tokens: &[Token], values: &UnitValues) -> String {
    let mut out = String::new();

    for token in tokens {
        match token {
            Token::Literal(text) => out.push_str(text),
            Token::Unit { unit, zero_pad } => {
                let count = values.get(*unit);
                if *zero_pad {
                    out.push_str(&format!("{:02}", count));
                } else {
                    out.push_str(&count.to_string());
                }
            }
        }
    }

    out
}
