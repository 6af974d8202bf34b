use std::slice;

use crate::part::{Part, PartKind};

/// Root of a parsed multipart tree.
///
/// Parts appear in buffer order. Dropping a `Message` releases every part,
/// header and parameter it owns; bodies borrow from the buffer, which is
/// left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message<'a> {
    /// Top-level parts in buffer order.
    pub parts: Vec<Part<'a>>,
}

impl<'a> Message<'a> {
    /// Number of top-level parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns `true` when the message holds no parts.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Iterates top-level parts in buffer order.
    pub fn iter(&self) -> slice::Iter<'_, Part<'a>> {
        self.parts.iter()
    }

    /// Depth-first iterator over every leaf part, containers flattened away.
    pub fn leaves(&self) -> Leaves<'_, 'a> {
        Leaves {
            stack: vec![self.parts.iter()],
        }
    }

    /// First leaf whose `Content-Disposition` carries `name="<name>"`.
    pub fn field(&self, name: &str) -> Option<&Part<'a>> {
        self.leaves().find(|part| part.field_name() == Some(name))
    }
}

impl<'m, 'a> IntoIterator for &'m Message<'a> {
    type Item = &'m Part<'a>;
    type IntoIter = slice::Iter<'m, Part<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}

/// Iterator returned by [`Message::leaves`].
#[derive(Debug)]
pub struct Leaves<'m, 'a> {
    stack: Vec<slice::Iter<'m, Part<'a>>>,
}

impl<'m, 'a> Iterator for Leaves<'m, 'a> {
    type Item = &'m Part<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let next = self.stack.last_mut()?.next();
            let Some(part) = next else {
                self.stack.pop();
                continue;
            };

            match &part.kind {
                PartKind::Leaf(_) => return Some(part),
                PartKind::Container(children) => self.stack.push(children.iter()),
            }
        }
    }
}
