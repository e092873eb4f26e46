//! # dc
//!
//! A stack calculator virtual machine with a table of named values
//! that can be saved and replayed.
//!
//! ```
//! use dc::mach::Runtime;
//!
//! let mut runtime = Runtime::default();
//! let mut out = vec![];
//! let program = "push 6\npush 7\n*\nstore answer\nlist\n";
//! assert_eq!(runtime.run(&mut program.as_bytes(), &mut out).unwrap(), 5);
//! assert_eq!(out, b"VARIABLE: answer, VALUE: 42\n");
//! ```
//!
//! Run the executable with a list of files to execute, or `-` to read
//! standard input.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

pub mod lang;
pub mod mach;
pub mod term;
