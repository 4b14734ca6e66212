use std::fmt;
use std::str::FromStr;

/// The role a node plays in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeKind {
    /// Plain wrapper, only groups its children.
    #[default]
    Container,
    /// Submit-capable root container.
    Form,
    /// Static text or a field caption.
    Label,
    /// An input widget holding a raw value.
    Input(InputKind),
    /// A clickable button.
    Button,
}

/// Input widget flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputKind {
    #[default]
    Text,
    Password,
    Email,
    Number,
    TextArea,
    Select,
    Hidden,
    Checkbox,
    Radio,
}

impl InputKind {
    /// Toggle inputs report their checked state instead of their value.
    pub fn is_toggle(self) -> bool {
        matches!(self, Self::Checkbox | Self::Radio)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Email => "email",
            Self::Number => "number",
            Self::TextArea => "textarea",
            Self::Select => "select",
            Self::Hidden => "hidden",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when an input type name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownInputKind(pub String);

impl fmt::Display for UnknownInputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown input type '{}'", self.0)
    }
}

impl std::error::Error for UnknownInputKind {}

impl FromStr for InputKind {
    type Err = UnknownInputKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "password" => Ok(Self::Password),
            "email" => Ok(Self::Email),
            "number" => Ok(Self::Number),
            "textarea" => Ok(Self::TextArea),
            "select" => Ok(Self::Select),
            "hidden" => Ok(Self::Hidden),
            "checkbox" => Ok(Self::Checkbox),
            "radio" => Ok(Self::Radio),
            _ => Err(UnknownInputKind(s.to_string())),
        }
    }
}
