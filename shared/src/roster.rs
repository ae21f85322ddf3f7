use std::future::Future;

use futures::future::try_join_all;

use crate::error::FetchError;
use crate::model::RecordId;

/// Fetch every member of a group concurrently.
///
/// All-or-nothing: the first failure is returned and the remaining fetches are dropped.
/// An empty id list resolves immediately without invoking `fetch`.
pub async fn resolve_roster<T, F, Fut>(ids: &[RecordId], fetch: F) -> Result<Vec<T>, FetchError>
where
    F: Fn(RecordId) -> Fut,
    Fut: Future<Output = Result<T, FetchError>>,
{
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    try_join_all(ids.iter().copied().map(fetch)).await
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures::executor::block_on;

    use super::*;

    #[test]
    fn empty_roster_makes_no_calls() {
        let calls = Cell::new(0);
        let roster = block_on(resolve_roster(&[], |id| {
            calls.set(calls.get() + 1);
            async move { Ok::<_, FetchError>(id) }
        }))
        .unwrap();
        assert!(roster.is_empty());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn members_resolve_in_id_order() {
        let calls = Cell::new(0);
        let roster = block_on(resolve_roster(&[3, 1, 2], |id| {
            calls.set(calls.get() + 1);
            async move { Ok::<_, FetchError>(format!("member-{id}")) }
        }))
        .unwrap();
        assert_eq!(roster, vec!["member-3", "member-1", "member-2"]);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn one_failure_fails_the_whole_roster() {
        let result = block_on(resolve_roster(&[10, 11, 12], |id| async move {
            if id == 11 {
                Err(FetchError::Status { status: 404 })
            } else {
                Ok(id)
            }
        }));
        assert_eq!(result, Err(FetchError::Status { status: 404 }));
    }
}
