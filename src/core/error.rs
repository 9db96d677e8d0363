use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("invalid character '{found}' in duration directive at byte {position}")]
    InvalidDirective { found: char, position: usize },

    #[error("unterminated duration directive at byte {position}")]
    UnterminatedDirective { position: usize },
}

impl FormatError {
    pub fn invalid_directive(found: char, position: usize) -> Self {
        Self::InvalidDirective { found, position }
    }

    pub fn unterminated(position: usize) -> Self {
        Self::UnterminatedDirective { position }
    }

    /// 出错位置（模板字符串中的字节偏移）
    pub fn position(&self) -> usize {
        match self {
            Self::InvalidDirective { position, .. } => *position,
            Self::UnterminatedDirective { position } => *position,
        }
    }
}
