//! Block syntax kinds.
//!
//! One module per block construct, each owning its delimiters and line
//! tests so the classifier and builder stay free of syntax knowledge.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod table;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::ListItem;
pub use table::Table;
