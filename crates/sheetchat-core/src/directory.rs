//! Participant directory: registration and lookups.

use thiserror::Error;
use tracing::info;

use crate::cache::ReadCache;
use crate::models::{parse_directory, Handle, Participant};
use crate::session::SessionContext;
use crate::store::{StoreError, Table, TableStore};

/// Failures of directory lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    /// The display name did not resolve to exactly one participant.
    #[error("no unique participant named {name:?} ({matches} matches)")]
    NotFound { name: String, matches: usize },
}

/// Ensure `session` has a directory row.
///
/// Reads the current directory first and appends only when the handle is
/// absent, so repeating a login never duplicates a row. Returns whether a
/// row was appended. Two sessions registering the same new handle at the
/// same moment can still both append: the store has no compare-and-swap.
/// The engine tolerates the duplicate rows because every lookup that
/// matters goes by handle.
pub fn register(
    store: &dyn TableStore,
    cache: &mut ReadCache,
    session: &SessionContext,
) -> Result<bool, StoreError> {
    let rows = cache.read_through(store, Table::Directory)?;
    let directory = parse_directory(&rows);
    if directory.iter().any(|p| p.handle == session.handle) {
        return Ok(false);
    }

    let participant = Participant {
        name: session.name.clone(),
        handle: session.handle.clone(),
    };
    store.append(Table::Directory, participant.to_row())?;
    cache.invalidate();
    info!("registered {} as {:?}", session.handle, session.name);
    Ok(true)
}

/// Everyone in `directory` except the caller.
pub fn peers(directory: &[Participant], own: &Handle) -> Vec<Participant> {
    directory
        .iter()
        .filter(|p| p.handle != *own)
        .cloned()
        .collect()
}

/// Resolve a display name to a handle.
///
/// Names are not unique, so this refuses to guess: it succeeds only when
/// exactly one participant carries `name`.
pub fn handle_for_name(directory: &[Participant], name: &str) -> Result<Handle, DirectoryError> {
    let matches: Vec<&Participant> = directory.iter().filter(|p| p.name == name).collect();
    match matches.as_slice() {
        [only] => Ok(only.handle.clone()),
        _ => Err(DirectoryError::NotFound {
            name: name.to_string(),
            matches: matches.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::time::Duration;

    fn session(name: &str, digits: &str) -> SessionContext {
        SessionContext {
            name: name.to_string(),
            handle: Handle::parse(digits).unwrap(),
        }
    }

    fn participant(name: &str, digits: &str) -> Participant {
        Participant {
            name: name.to_string(),
            handle: Handle::parse(digits).unwrap(),
        }
    }

    #[test]
    fn register_appends_exactly_once() {
        let store = MemoryStore::new();
        let mut cache = ReadCache::new(Duration::from_secs(2));
        let alice = session("Alice", "1234567890");

        assert!(register(&store, &mut cache, &alice).unwrap());
        assert!(!register(&store, &mut cache, &alice).unwrap());

        let rows = store.read(Table::Directory).unwrap();
        assert_eq!(rows, vec![vec!["Alice".to_string(), "1234567890".to_string()]]);
    }

    #[test]
    fn register_is_keyed_by_handle_not_name() {
        let store = MemoryStore::new();
        let mut cache = ReadCache::new(Duration::from_secs(2));

        assert!(register(&store, &mut cache, &session("Alice", "1111111111")).unwrap());
        // same name, different handle: a distinct participant
        assert!(register(&store, &mut cache, &session("Alice", "2222222222")).unwrap());
        // different name, same handle: already registered
        assert!(!register(&store, &mut cache, &session("Alicia", "1111111111")).unwrap());

        assert_eq!(store.read(Table::Directory).unwrap().len(), 2);
    }

    #[test]
    fn peers_excludes_the_caller() {
        let directory = vec![
            participant("Alice", "1111111111"),
            participant("Bob", "2222222222"),
            participant("Carol", "3333333333"),
        ];
        let own = Handle::parse("2222222222").unwrap();
        let others = peers(&directory, &own);
        assert_eq!(others.len(), 2);
        assert!(others.iter().all(|p| p.handle != own));
    }

    #[test]
    fn handle_for_name_needs_exactly_one_match() {
        let directory = vec![
            participant("Alice", "1111111111"),
            participant("Bob", "2222222222"),
            participant("Bob", "3333333333"),
        ];

        assert_eq!(
            handle_for_name(&directory, "Alice").unwrap(),
            Handle::parse("1111111111").unwrap()
        );
        assert_eq!(
            handle_for_name(&directory, "Bob").unwrap_err(),
            DirectoryError::NotFound {
                name: "Bob".to_string(),
                matches: 2,
            }
        );
        assert_eq!(
            handle_for_name(&directory, "Dave").unwrap_err(),
            DirectoryError::NotFound {
                name: "Dave".to_string(),
                matches: 0,
            }
        );
    }
}
