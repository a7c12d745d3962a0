use crate::error::{Error, Result};

#[derive(Clone, Debug)]
struct Node<T> {
    value: Option<T>,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Doubly linked deque. Nodes live in a `Vec` and link to each other by index; freed slots are
/// reused.
#[derive(Clone)]
pub struct Deque<T> {
    nodes: Vec<Node<T>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deque<T> {
    /// O(1)
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// O(1)
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// O(1)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn alloc(&mut self, value: T, prev: Option<usize>, next: Option<usize>) -> usize {
        let node = Node {
            value: Some(value),
            prev,
            next,
        };
        match self.free.pop() {
            Some(i) => {
                self.nodes[i] = node;
                i
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, i: usize) -> Option<T> {
        let value = self.nodes[i].value.take();
        self.nodes[i].prev = None;
        self.nodes[i].next = None;
        self.free.push(i);
        value
    }

    /// O(1)
    pub fn add_first(&mut self, value: T) {
        let i = self.alloc(value, None, self.head);
        match self.head {
            Some(head) => self.nodes[head].prev = Some(i),
            None => self.tail = Some(i),
        }
        self.head = Some(i);
        self.len += 1;
    }

    /// O(1)
    pub fn add_last(&mut self, value: T) {
        let i = self.alloc(value, self.tail, None);
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(i),
            None => self.head = Some(i),
        }
        self.tail = Some(i);
        self.len += 1;
    }

    /// O(1)
    pub fn remove_first(&mut self) -> Result<T> {
        let head = self.head.ok_or(Error::EmptyDeque)?;
        let next = self.nodes[head].next;
        match next {
            Some(next) => self.nodes[next].prev = None,
            None => self.tail = None,
        }
        self.head = next;
        self.len -= 1;
        self.release(head).ok_or(Error::EmptyDeque)
    }

    /// O(1)
    pub fn remove_last(&mut self) -> Result<T> {
        let tail = self.tail.ok_or(Error::EmptyDeque)?;
        let prev = self.nodes[tail].prev;
        match prev {
            Some(prev) => self.nodes[prev].next = None,
            None => self.head = None,
        }
        self.tail = prev;
        self.len -= 1;
        self.release(tail).ok_or(Error::EmptyDeque)
    }

    /// O(1)
    pub fn peek_first(&self) -> Option<&T> {
        self.nodes[self.head?].value.as_ref()
    }

    /// O(1)
    pub fn peek_last(&self) -> Option<&T> {
        self.nodes[self.tail?].value.as_ref()
    }

    /// Front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            deque: self,
            cursor: self.head,
            remaining: self.len,
        }
    }
}

pub struct Iter<'a, T> {
    deque: &'a Deque<T>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let deque = self.deque;
        let node = &deque.nodes[self.cursor?];
        self.cursor = node.next;
        self.remaining -= 1;
        node.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

pub struct IntoIter<T>(Deque<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.remove_first().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.nodes.reserve(iter.size_hint().0);

        for x in iter {
            self.add_last(x);
        }
    }
}

impl<T> std::iter::FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
