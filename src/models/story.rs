use std::fmt;

/// 故事标识
///
/// 由存储按创建顺序分配，从 0 开始单调递增，移除后也不会复用。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StoryId(u64);

impl StoryId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// 解析路径参数中的 ID
    ///
    /// 非数字、负数或溢出的输入不对应任何故事，返回 `None`。
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse::<u64>().ok().map(Self)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 故事实体
///
/// 创建后不可变。只有经过 `persist` 的故事才能被查询到。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    id: StoryId,
    title: String,
    body: String,
}

impl Story {
    pub(crate) fn new(id: StoryId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn id(&self) -> StoryId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}
