// src/application/confirm.rs

/// Asks the user a yes/no question before a destructive step.
///
/// Anything other than an explicit "yes" must be reported as `false`.
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, question: &str) -> bool {
        self(question)
    }
}
