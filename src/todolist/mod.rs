use crate::error::{EinsteinError, Result};
use crate::task::Task;

/// Ordered tasks for the session. Indices are 0-based here; the parser
/// converts from the 1-based numbers users type.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskList {
    items: Vec<Task>,
}

impl TaskList {
    pub fn new(items: Vec<Task>) -> Self {
        Self { items }
    }

    pub fn add(&mut self, task: Task) {
        self.items.push(task);
    }

    pub fn delete(&mut self, idx: usize) -> Result<Task> {
        self.check(idx)?;
        Ok(self.items.remove(idx))
    }

    pub fn mark_done(&mut self, idx: usize) -> Result<&Task> {
        let task = self.get_mut(idx)?;
        task.mark_done();
        Ok(&*task)
    }

    pub fn mark_not_done(&mut self, idx: usize) -> Result<&Task> {
        let task = self.get_mut(idx)?;
        task.mark_not_done();
        Ok(&*task)
    }

    pub fn get(&self, idx: usize) -> Result<&Task> {
        self.items.get(idx).ok_or(EinsteinError::InvalidIndex)
    }

    pub fn get_mut(&mut self, idx: usize) -> Result<&mut Task> {
        self.items.get_mut(idx).ok_or(EinsteinError::InvalidIndex)
    }

    pub fn all(&self) -> &[Task] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn done_count(&self) -> usize {
        self.items.iter().filter(|t| t.is_done()).count()
    }

    fn check(&self, idx: usize) -> Result<()> {
        if idx < self.items.len() {
            Ok(())
        } else {
            Err(EinsteinError::InvalidIndex)
        }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
