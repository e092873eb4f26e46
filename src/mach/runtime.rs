use super::{codec, FileStorage, Limits, Stack, Storage, SymbolTable};
use crate::error;
use crate::lang::{Error, Instruction, Line};
use std::io::Write;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

/// ## Virtual machine
///
/// Owns the operand stack and the symbol table. Both survive from one
/// `run` to the next, so several inputs executed in turn share their
/// bindings and operands.
///
/// Output meant for the user (`list`, `print`, a `load` that misses)
/// goes to the writer handed to `execute` or `run`. Diagnostics go to
/// `tracing`.

pub struct Runtime {
    limits: Limits,
    stack: Stack<i32>,
    table: SymbolTable,
    storage: Box<dyn Storage>,
}

impl Default for Runtime {
    fn default() -> Runtime {
        Runtime::with_limits(Limits::default())
    }
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    pub fn with_limits(limits: Limits) -> Runtime {
        Runtime {
            limits,
            stack: Stack::new(limits.stack_capacity),
            table: SymbolTable::new(),
            storage: Box::new(FileStorage),
        }
    }

    /// Replaces where `save` writes to.
    pub fn with_storage<S: Storage + 'static>(mut self, storage: S) -> Runtime {
        self.storage = Box::new(storage);
        self
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn stack(&self) -> &Stack<i32> {
        &self.stack
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    /// Empties the stack and tears down the table. Returns the number
    /// of bindings released.
    pub fn reset(&mut self) -> usize {
        self.stack.clear();
        let released = self.table.clear();
        debug!(released, "runtime reset");
        released
    }

    /// Executes one line of instruction text. Blank lines do nothing.
    ///
    /// An instruction either completes or fails without touching the
    /// stack or the table.
    pub fn execute(&mut self, line: &[u8], out: &mut dyn Write) -> Result<()> {
        let instruction = match Line::new(line).instruction()? {
            Some(instruction) => instruction,
            None => return Ok(()),
        };
        trace!(%instruction, depth = self.stack.len(), "execute");
        self.dispatch(instruction, out)
    }

    fn dispatch(&mut self, instruction: Instruction, out: &mut dyn Write) -> Result<()> {
        use Instruction::*;
        match instruction {
            Push(value) => self.stack.push(value),
            Pop => self.stack.pop().map(|_| ()),
            Add => self.arithmetic(|a, b| Ok(a.wrapping_add(b))),
            Sub => self.arithmetic(|a, b| Ok(a.wrapping_sub(b))),
            Mul => self.arithmetic(|a, b| Ok(a.wrapping_mul(b))),
            Div => self.arithmetic(|a, b| {
                if b == 0 {
                    Err(error!(DivisionByZero))
                } else {
                    Ok(a.wrapping_div(b))
                }
            }),
            Load(name) => self.load(name, out),
            Store(name) => {
                let value = self.stack.pop()?;
                if let Some(previous) = self.table.insert(name, value) {
                    trace!(name = %String::from_utf8_lossy(name), previous, value, "updated binding");
                }
                Ok(())
            }
            Remove(name) => {
                if self.table.remove(name).is_none() {
                    debug!(name = %String::from_utf8_lossy(name), "remove of unbound name");
                }
                Ok(())
            }
            Save(name) => {
                debug!(file = %String::from_utf8_lossy(name), "saving table");
                codec::save(&self.table, self.storage.as_mut(), name)?;
                Ok(())
            }
            List => {
                for node in self.table.iter() {
                    node.write_to(out)?;
                }
                Ok(())
            }
            Print => {
                for value in self.stack.iter_top_down() {
                    writeln!(out, "{}", value)?;
                }
                Ok(())
            }
        }
    }

    /// `a` is the top of the stack, `b` the operand under it. Both stay
    /// put unless `op` succeeds.
    fn arithmetic<F>(&mut self, op: F) -> Result<()>
    where
        F: FnOnce(i32, i32) -> Result<i32>,
    {
        let (&a, &b) = self.stack.peek_2()?;
        let value = op(a, b)?;
        self.stack.pop_2()?;
        self.stack.push(value)
    }

    fn load(&mut self, name: &[u8], out: &mut dyn Write) -> Result<()> {
        match self.table.get(name) {
            Some(value) => self.stack.push(value),
            None => {
                debug!(name = %String::from_utf8_lossy(name), "load of unbound name");
                writeln!(out, "Not found.")?;
                Ok(())
            }
        }
    }
}
