pub mod event;
pub mod node;
pub mod types;

pub use event::{
    compose, dispatch_change, dispatch_change_by_name, ChangeEvent, ChangeHandler, SubmitEvent,
};
pub use node::{
    collect_named, find_last_named, find_last_named_mut, find_named, find_named_mut, find_node,
    find_node_mut, walk, Content, Extensions, Node,
};
pub use types::{InputKind, NodeKind, UnknownInputKind};
