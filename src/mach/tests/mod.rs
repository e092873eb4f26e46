use crate::lang::{Error, ErrorCode, ErrorKind};
use crate::mach::{DiscardStorage, Limits, Runtime, STACK_CAPACITY};


fn runtime() -> Runtime {
    Runtime::new().with_storage(DiscardStorage)
}

fn run(runtime: &mut Runtime, s: &str) -> (Result<usize, Error>, String) {
    let mut out = vec![];
    let result = runtime.run(&mut s.as_bytes(), &mut out);
    (result, String::from_utf8_lossy(&out).into_owned())
}

fn stack(runtime: &Runtime) -> Vec<i32> {
    runtime.stack().iter_top_down().copied().collect()
}
