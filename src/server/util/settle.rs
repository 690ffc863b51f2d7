//! Settled task group.
//!
//! Runs a set of independent fallible futures concurrently and keeps every branch's
//! outcome next to the key it was started with, so one failure never discards the
//! results of its siblings.

use std::future::Future;

use futures::future::join_all;

/// Awaits every branch concurrently and pairs each outcome with its key.
///
/// Outcomes are returned in the order the branches were supplied.
pub async fn settle<K, T, E, Fut>(branches: impl IntoIterator<Item = (K, Fut)>) -> Vec<(K, Result<T, E>)>
where
    Fut: Future<Output = Result<T, E>>,
{
    let (keys, futures): (Vec<K>, Vec<Fut>) = branches.into_iter().unzip();
    let outcomes = join_all(futures).await;

    keys.into_iter().zip(outcomes).collect()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::settle;

    /// Expect a failing branch to leave its siblings' results intact
    #[tokio::test]
    async fn keeps_sibling_results_when_one_fails() {
        let branches = (1..=3).map(|n| {
            (n, async move {
                if n == 2 {
                    Err(format!("branch {n} failed"))
                } else {
                    Ok(n * 10)
                }
            })
        });

        let settled = settle(branches).await;

        assert_eq!(
            settled,
            vec![(1, Ok(10)), (2, Err("branch 2 failed".to_string())), (3, Ok(30))]
        );
    }

    /// Expect outcomes in supplied order regardless of completion order
    #[tokio::test]
    async fn preserves_supplied_order() {
        let branches = [30u64, 10, 20].into_iter().map(|delay| {
            (delay, async move {
                tokio::time::sleep(Duration::from_millis(delay)).await;
                Ok::<_, ()>(delay)
            })
        });

        let settled = settle(branches).await;
        let keys: Vec<u64> = settled.into_iter().map(|(key, _)| key).collect();

        assert_eq!(keys, vec![30, 10, 20]);
    }
}
