#![cfg(feature = "task")]
//! Property-based tests for the Task functor, applicative and monad laws.
//!
//! Two tasks are equal when forking them yields equal outcomes.

use adequate::task::{Task, TaskError, TaskOutcome};
use proptest::prelude::*;

type TestTask = Task<i32, String>;

fn outcome<T>(task: Task<T, String>) -> TaskOutcome<T, String>
where
    T: Clone + Send + Sync + 'static,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap();
    runtime.block_on(task.fork())
}

fn source(value: Result<i32, String>) -> TestTask {
    match value {
        Ok(value) => Task::pure(value),
        Err(error) => Task::rejected(error),
    }
}

fn any_source() -> impl Strategy<Value = Result<i32, String>> {
    prop::result::maybe_ok(any::<i32>(), "[a-z]{1,6}")
}

fn function_source(function: Result<fn(i32) -> i32, String>) -> Task<fn(i32) -> i32, String> {
    match function {
        Ok(function) => Task::pure(function),
        Err(error) => Task::rejected(error),
    }
}

fn any_function_source() -> impl Strategy<Value = Result<fn(i32) -> i32, String>> {
    let functions = prop::sample::select(vec![
        (|n: i32| n.wrapping_mul(7)) as fn(i32) -> i32,
        |n: i32| n.wrapping_sub(4),
        i32::wrapping_neg,
    ]);
    prop::result::maybe_ok(functions, "[a-z]{1,6}")
}

fn increment(n: i32) -> TestTask {
    Task::pure(n.wrapping_add(1))
}

fn reject_negative(n: i32) -> TestTask {
    if n < 0 {
        Task::rejected(format!("{n} is negative"))
    } else {
        Task::pure(n)
    }
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_task_functor_identity(value in any_source()) {
        prop_assert_eq!(outcome(source(value.clone()).fmap(|x| x)), outcome(source(value)));
    }

    #[test]
    fn prop_task_functor_composition(value in any_source()) {
        let function1 = |n: i32| n.wrapping_mul(3);
        let function2 = |n: i32| n.to_string();

        let left = outcome(source(value.clone()).fmap(function1).fmap(function2));
        let right = outcome(source(value).fmap(move |x| function2(function1(x))));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Applicative Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_task_applicative_identity(value in any_source()) {
        let identity: Task<fn(i32) -> i32, String> = Task::pure(|x| x);
        prop_assert_eq!(outcome(identity.apply(source(value.clone()))), outcome(source(value)));
    }

    #[test]
    fn prop_task_applicative_homomorphism(value in any::<i32>()) {
        let function: fn(i32) -> i32 = |n| n.wrapping_sub(4);
        let left = outcome(Task::<_, String>::pure(function).apply(Task::pure(value)));
        prop_assert_eq!(left, Ok(function(value)));
    }

    #[test]
    fn prop_task_applicative_interchange(value in any::<i32>(), function in any_function_source()) {
        let left = outcome(function_source(function.clone()).apply(Task::pure(value)));
        let right = outcome(
            Task::<_, String>::pure(move |f: fn(i32) -> i32| f(value))
                .apply(function_source(function)),
        );
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_task_applicative_composition(
        value in any_source(),
        first in any_function_source(),
        second in any_function_source(),
    ) {
        let left = outcome(
            function_source(second.clone())
                .apply(function_source(first.clone()).apply(source(value.clone()))),
        );
        let composed = function_source(second)
            .map2(function_source(first), |g, f| move |x: i32| g(f(x)));
        let right = outcome(composed.apply(source(value)));
        prop_assert_eq!(left, right);
    }

    /// A rejected side makes the combination rejected.
    #[test]
    fn prop_task_map2_propagates_rejection(value in any::<i32>(), error in "[a-z]{1,6}") {
        let combined =
            source(Ok(value)).map2(source(Err(error.clone())), |a, b| a.wrapping_add(b));
        prop_assert_eq!(outcome(combined), Err(TaskError::Rejected(error)));
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_task_monad_left_identity(value in any::<i32>()) {
        let left = outcome(TestTask::pure(value).flat_map(reject_negative));
        prop_assert_eq!(left, outcome(reject_negative(value)));
    }

    #[test]
    fn prop_task_monad_right_identity(value in any_source()) {
        let left = outcome(source(value.clone()).flat_map(Task::pure));
        prop_assert_eq!(left, outcome(source(value)));
    }

    #[test]
    fn prop_task_monad_associativity(value in any_source()) {
        let left = outcome(source(value.clone()).flat_map(increment).flat_map(reject_negative));
        let right = outcome(source(value).flat_map(|x| increment(x).flat_map(reject_negative)));
        prop_assert_eq!(left, right);
    }

    /// `sequence` of pure tasks is `pure` of the values.
    #[test]
    fn prop_task_sequence_of_pure(values in prop::collection::vec(any::<i32>(), 0..10)) {
        let tasks: Vec<TestTask> = values.iter().copied().map(TestTask::pure).collect();
        prop_assert_eq!(outcome(Task::sequence(tasks)), Ok(values));
    }
}
