// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Sequential fallback across candidate endpoint routes.
//!
//! Backend route names drift while services are consolidated; affected
//! operations declare an ordered candidate list and probe it strictly in
//! order. The first candidate that succeeds wins and later candidates are
//! never attempted; when every candidate fails, the last observed error
//! propagates. There is no backoff and no memo of which candidate served the
//! previous call; each invocation probes from the start of the list.

use std::{fmt::Display, future::Future};

/// Tries `attempt` against each route in `routes`, returning the first
/// success or the last failure.
///
/// `operation` names the caller in diagnostics.
///
/// # Panics
///
/// Panics if `routes` is empty; candidate lists are compile-time constants.
///
/// # Errors
///
/// Returns the error from the last attempted route when all candidates fail.
pub async fn first_success<T, E, F, Fut>(
    operation: &str,
    routes: &'static [&'static str],
    mut attempt: F,
) -> Result<T, E>
where
    E: Display,
    F: FnMut(&'static str) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut last_error = None;

    for &route in routes {
        match attempt(route).await {
            Ok(value) => return Ok(value),
            Err(error) => {
                tracing::warn!("{operation}: candidate route {route} failed: {error}");
                last_error = Some(error);
            }
        }
    }

    Err(last_error.expect("route candidate list must not be empty"))
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use rstest::rstest;

    use super::*;

    const ROUTES: &[&str] = &["/a/", "/b/", "/c"];

    #[rstest]
    #[tokio::test]
    async fn test_first_candidate_success_stops_probing() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let counter = attempts.clone();

        let result: Result<&str, String> = first_success("op", ROUTES, |route| {
            counter.fetch_add(1, Ordering::SeqCst);
            async move { Ok(route) }
        })
        .await;

        assert_eq!(result.unwrap(), "/a/");
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn test_probes_until_success_then_stops() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let counter = attempts.clone();

        let result: Result<&str, String> = first_success("op", ROUTES, |route| {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            async move {
                if n < 1 {
                    Err(format!("{route} unavailable"))
                } else {
                    Ok(route)
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), "/b/");
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn test_all_failing_propagates_last_error() {
        let result: Result<(), String> = first_success("op", ROUTES, |route| async move {
            Err(format!("{route} unavailable"))
        })
        .await;

        assert_eq!(result.unwrap_err(), "/c unavailable");
    }
}
