use std::cell::RefCell;

use super::Action;

/// Sink for actions raised by UI components.
pub trait Dispatch {
    fn dispatch(&self, action: Action);
}

impl<F> Dispatch for F
where
    F: Fn(Action),
{
    fn dispatch(&self, action: Action) {
        self(action)
    }
}

/// Records every dispatched action in order.
#[derive(Debug, Default)]
pub struct ActionLog {
    actions: RefCell<Vec<Action>>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.actions.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.borrow().is_empty()
    }

    /// Drain the recorded actions, oldest first.
    pub fn take(&self) -> Vec<Action> {
        std::mem::take(&mut *self.actions.borrow_mut())
    }
}

impl Dispatch for ActionLog {
    fn dispatch(&self, action: Action) {
        tracing::debug!(action = action.label(), "dispatch");
        self.actions.borrow_mut().push(action);
    }
}

impl Action {
    /// Human-readable label for logs and status lines.
    pub fn label(&self) -> &'static str {
        match self {
            Action::CreateCard(_) => "Create Card",
            Action::OpenEditor { .. } => "Open Editor",
            Action::None => "None",
        }
    }
}
