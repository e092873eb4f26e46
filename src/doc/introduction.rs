/*!
# Introduction to dc

dc reads instructions one per line and executes them against an operand
stack of 32-bit signed integers and a table of named values. Give it one
or more files on the command line, or `-` for standard input.

<pre><code>&nbsp;  $ dc prog.dc
&nbsp;  Running on input file prog.dc
</code></pre>

Files run in order and share the same stack and table, so a file can
load values that an earlier one stored. The first failing instruction
stops the file it is in; dc reports the error and moves on to the next
file.

## Instructions

| Instruction | Effect |
|---|---|
| `push <n>` | Push the integer `n`. |
| `pop` | Discard the top of the stack. |
| `+` `-` `*` `/` | Pop `a`, then pop `b`, then push `a` op `b`. |
| `load <name>` | Push the value bound to `name`, or print `Not found.` |
| `store <name>` | Pop a value and bind `name` to it. |
| `remove <name>` | Forget `name`, if it is bound. |
| `save <file>` | Write the table to `file`. |
| `list` | Print every binding in name order. |
| `print` | Print the stack, top first. |

A name is any run of bytes without a space, tab or line break in it.
Names are ordered byte by byte and written back exactly as given.

Arithmetic wraps around on overflow. Division truncates toward zero and
fails when `b` is zero. Note the operand order:

<pre><code>&nbsp;  push 1
&nbsp;  push 2
&nbsp;  -
&nbsp;  print
&nbsp;  1
</code></pre>

## Saving

A saved file is itself a dc program made of `push` and `store` pairs.
Running it against an empty table rebuilds the same table, down to the
shape of the tree the names are kept in.

## Limits

A line may be at most 1022 characters, a file at most 1024 lines, and
the stack holds 512 values. Going past any of them is an error.

## Diagnostics

Set `RUST_LOG=dc=debug` (or `trace`) to see what the machine is doing
on standard error.
*/
