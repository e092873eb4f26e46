/*!
## Rust Machine Module

This Rust module is the virtual machine: the operand stack, the symbol
table with its traversals, the save file codec and the instruction
dispatcher.

*/

pub mod codec;
mod driver;
mod limits;
mod runtime;
mod stack;
mod storage;
mod table;
mod traverse;

pub use limits::Limits;
pub use limits::MAX_INSTRUCTIONS;
pub use limits::MAX_LINE_LENGTH;
pub use limits::STACK_CAPACITY;
pub use runtime::Runtime;
pub use stack::Stack;
pub use storage::DiscardStorage;
pub use storage::FileStorage;
pub use storage::Storage;
pub use table::NodeRef;
pub use table::SymbolTable;
pub use traverse::InOrder;
pub use traverse::LevelOrder;

#[cfg(test)]
mod tests;
