#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Node>),
}

impl Content {
    pub fn children(&self) -> &[super::Node] {
        match self {
            Self::Children(children) => children,
            _ => &[],
        }
    }

    pub fn children_mut(&mut self) -> &mut [super::Node] {
        match self {
            Self::Children(children) => children,
            _ => &mut [],
        }
    }
}
