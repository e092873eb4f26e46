/*!
## Save file format

A saved table is ordinary instruction text: a `push` of the value then
a `store` of the name, for every binding, in level order.

```text
push 12
store m
push -4
store c
```

Feeding the file back through a runtime with an empty table rebuilds
the same tree, node for node.
*/

use super::{Storage, SymbolTable};
use crate::error;
use crate::lang::{Error, Instruction};
use std::io::{self, Write};
use tracing::debug;

/// Writes `table` to `w`, returning the number of bindings written.
pub fn encode<W: Write>(table: &SymbolTable, w: &mut W) -> io::Result<usize> {
    let mut count = 0;
    for node in table.level_order() {
        Instruction::Push(node.value()).write_to(w)?;
        w.write_all(b"\n")?;
        Instruction::Store(node.name()).write_to(w)?;
        w.write_all(b"\n")?;
        count += 1;
    }
    w.flush()?;
    Ok(count)
}

/// Encodes `table` into the target `name` opened through `storage`.
/// Target names must be UTF-8.
pub fn save(table: &SymbolTable, storage: &mut dyn Storage, name: &[u8]) -> Result<usize, Error> {
    let name = match std::str::from_utf8(name) {
        Ok(name) => name,
        Err(_) => {
            return Err(error!(BadFileName; &format!(
                "FILE NAME {} IS NOT UTF-8",
                String::from_utf8_lossy(name)
            )));
        }
    };
    let mut target = match storage.create(name) {
        Ok(target) => target,
        Err(error) => {
            return Err(error!(BadFileName; &format!(
                "COULDN'T OPEN {} FOR WRITING; {}",
                name, error
            )));
        }
    };
    match encode(table, &mut target) {
        Ok(count) => {
            debug!(file = name, bindings = count, "saved table");
            Ok(count)
        }
        Err(error) => Err(error!(DiskIOError; &format!("WRITING {}; {}", name, error))),
    }
}
