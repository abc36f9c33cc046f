/// Kind of a transient notification; each one has its own accent colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NoticeKind {
    /// Accent colour as RGB.
    pub fn accent_rgb(&self) -> (u8, u8, u8) {
        match self {
            NoticeKind::Info => (0x34, 0x98, 0xdb),
            NoticeKind::Success => (0x27, 0xae, 0x60),
            NoticeKind::Error => (0xe7, 0x4c, 0x3c),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Info => "info",
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}
