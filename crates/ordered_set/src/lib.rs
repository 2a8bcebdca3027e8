mod avl;
mod display;

pub use avl::AvlTreeSet;
pub use display::Layout;
