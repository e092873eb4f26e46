/// Operand stack entries.
pub const STACK_CAPACITY: usize = 512;
/// Bytes per instruction line, not counting the newline.
pub const MAX_LINE_LENGTH: usize = 1022;
/// Lines read from one input before giving up.
pub const MAX_INSTRUCTIONS: usize = 1024;

/// ## Runtime limits
///
/// Bounds enforced by the machine. The defaults are the sizes the
/// instruction format was designed around.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub stack_capacity: usize,
    pub max_line_length: usize,
    pub max_instructions: usize,
}

impl Default for Limits {
    fn default() -> Limits {
        Limits {
            stack_capacity: STACK_CAPACITY,
            max_line_length: MAX_LINE_LENGTH,
            max_instructions: MAX_INSTRUCTIONS,
        }
    }
}
