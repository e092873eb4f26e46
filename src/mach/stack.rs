use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

const OVERFLOW_MESSAGE: &str = "OPERAND STACK IS FULL";

/// ## Stack enforced and size limited vector

pub struct Stack<T> {
    capacity: usize,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new(capacity: usize) -> Stack<T> {
        Stack {
            capacity,
            vec: Vec::with_capacity(capacity),
        }
    }
    fn underflow_error(&self) -> Error {
        error!(StackUnderflow)
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn is_full(&self) -> bool {
        self.vec.len() >= self.capacity
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    /// Top of stack first.
    pub fn iter_top_down(&self) -> std::iter::Rev<std::slice::Iter<'_, T>> {
        self.vec.iter().rev()
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        if self.is_full() {
            return Err(error!(StackOverflow; OVERFLOW_MESSAGE));
        }
        self.vec.push(val);
        Ok(())
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(self.underflow_error()),
        }
    }
    /// Top and the one under it, without removing either.
    pub fn peek_2(&self) -> Result<(&T, &T)> {
        match self.vec.len() {
            len if len >= 2 => Ok((&self.vec[len - 1], &self.vec[len - 2])),
            _ => Err(self.underflow_error()),
        }
    }
    /// Pops top then second, returned in that order.
    pub fn pop_2(&mut self) -> Result<(T, T)> {
        if self.vec.len() < 2 {
            return Err(self.underflow_error());
        }
        let top = self.pop()?;
        let second = self.pop()?;
        Ok((top, second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_capacity() {
        let mut s: Stack<i32> = Stack::new(3);
        for n in 0..3 {
            assert!(s.push(n).is_ok());
        }
        assert!(s.is_full());
        assert_eq!(s.capacity(), 3);
        let error = s.push(3).unwrap_err();
        assert_eq!(error.code(), ErrorCode::StackOverflow);
        assert!(error.to_string().ends_with(OVERFLOW_MESSAGE));
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_underflow() {
        let mut s: Stack<i32> = Stack::new(3);
        assert_eq!(s.pop().unwrap_err().code(), ErrorCode::StackUnderflow);
        s.push(1).unwrap();
        assert_eq!(s.pop_2().unwrap_err().code(), ErrorCode::StackUnderflow);
        assert_eq!(s.peek_2().unwrap_err().code(), ErrorCode::StackUnderflow);
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_order() {
        let mut s: Stack<i32> = Stack::new(8);
        s.push(1).unwrap();
        s.push(2).unwrap();
        s.push(3).unwrap();
        assert_eq!(s.iter_top_down().copied().collect::<Vec<_>>(), [3, 2, 1]);
        assert_eq!(s.peek_2().unwrap(), (&3, &2));
        assert_eq!(s.pop_2().unwrap(), (3, 2));
        assert_eq!(s.last(), Some(&1));
    }
}
