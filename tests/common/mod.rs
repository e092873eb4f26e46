#![allow(dead_code)]

use dc::lang::Error;
use dc::mach::{NodeRef, Runtime, SymbolTable};

/// Runs `program` and returns everything it printed. Panics if the
/// program fails.
pub fn exec(runtime: &mut Runtime, program: &str) -> String {
    match try_exec(runtime, program) {
        (Ok(_), out) => out,
        (Err(error), out) => panic!("{}\n{}", error, out),
    }
}

pub fn try_exec(runtime: &mut Runtime, program: &str) -> (Result<usize, Error>, String) {
    let mut out = vec![];
    let result = runtime.run(&mut program.as_bytes(), &mut out);
    (result, String::from_utf8_lossy(&out).into_owned())
}

/// Level-order description of the tree: each node with the names of
/// its children. Two tables with the same fingerprint have the same
/// shape and the same bindings.
pub fn fingerprint(table: &SymbolTable) -> Vec<(String, i32, Option<String>, Option<String>)> {
    table
        .level_order()
        .map(|node| {
            (
                name(node),
                node.value(),
                node.left().map(name),
                node.right().map(name),
            )
        })
        .collect()
}

fn name(node: NodeRef) -> String {
    String::from_utf8_lossy(node.name()).into_owned()
}
