use std::collections::HashMap;
use std::fmt;

/// A command key after normalization: trimmed, lowercased, inner whitespace
/// collapsed to single spaces. Two utterances match iff their phrases are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommandPhrase(String);

impl CommandPhrase {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(normalize(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommandPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[must_use]
pub fn normalize(utterance: &str) -> String {
    utterance
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Flat phrase -> action table for one page. No grammar, no partial matches.
#[derive(Debug, Clone)]
pub struct CommandRegistry<A> {
    commands: HashMap<CommandPhrase, A>,
}

impl<A> Default for CommandRegistry<A> {
    fn default() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }
}

impl<A> CommandRegistry<A> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `phrase` to `action`, replacing any previous binding of the same phrase.
    pub fn register(&mut self, phrase: &str, action: A) {
        self.commands.insert(CommandPhrase::new(phrase), action);
    }

    #[must_use]
    pub fn lookup(&self, utterance: &str) -> Option<&A> {
        self.commands.get(&CommandPhrase::new(utterance))
    }

    /// Invokes the action bound to `utterance`, if any. Returns whether one matched.
    pub fn dispatch(&self, utterance: &str, invoke: impl FnOnce(&A)) -> bool {
        match self.lookup(utterance) {
            Some(action) => {
                invoke(action);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn phrases(&self) -> Vec<&CommandPhrase> {
        let mut phrases: Vec<_> = self.commands.keys().collect();
        phrases.sort();
        phrases
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    type Callback = Box<dyn Fn()>;

    fn counter() -> (Rc<Cell<u32>>, Callback) {
        let count = Rc::new(Cell::new(0));
        let handle = count.clone();
        (count, Box::new(move || handle.set(handle.get() + 1)))
    }

    #[test]
    fn test_dispatch_invokes_only_bound_action() {
        let (edits, begin_edit) = counter();
        let (confirms, confirm_pending) = counter();
        let (cancels, cancel_pending) = counter();

        let mut registry: CommandRegistry<Callback> = CommandRegistry::new();
        registry.register("edit job", begin_edit);
        registry.register("yes", confirm_pending);
        registry.register("no", cancel_pending);

        assert!(registry.dispatch("Edit Job", |action| action()));
        assert_eq!(edits.get(), 1);
        assert_eq!(confirms.get(), 0);
        assert_eq!(cancels.get(), 0);

        assert!(!registry.dispatch("delete", |action| action()));
        assert_eq!(edits.get() + confirms.get() + cancels.get(), 1);
    }

    #[test]
    fn test_whitespace_and_case_variants_match() {
        let mut registry = CommandRegistry::new();
        registry.register("delete job", 7);

        for variant in ["delete job", "  DELETE JOB ", "Delete\tJob", "delete   job\n"] {
            assert_eq!(registry.lookup(variant), Some(&7), "variant {variant:?}");
        }
        assert_eq!(registry.lookup("delete jobs"), None);
        assert_eq!(registry.lookup("delete"), None);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["  Edit  Job ", "YES", "log\tout", ""] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_register_replaces_and_lists_sorted() {
        let mut registry = CommandRegistry::new();
        registry.register("yes", 1);
        registry.register("edit job", 2);
        registry.register("YES", 3);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.lookup("yes"), Some(&3));
        let phrases: Vec<&str> = registry.phrases().iter().map(|p| p.as_str()).collect();
        assert_eq!(phrases, vec!["edit job", "yes"]);
    }
}
