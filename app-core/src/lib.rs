#![warn(clippy::all, rust_2018_idioms)]

pub mod backend;
pub mod event;
pub mod storage;
pub mod string_error;

pub const BACKEND_HUNG_UP_MSG: &str = "backend hung up unexpectedly";

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use log::trace;

    use crate::backend::{request_stop, BackendEventLoop, BackendLink, BackendState};

    struct TestState {
        counter: usize,
    }
    impl BackendState for TestState {}

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_request_runs_on_backend() {
        init();
        let (request_tx, request_rx) = std::sync::mpsc::channel();
        let eventloop_handle =
            BackendEventLoop::new(request_rx, TestState { counter: 41 }).run();

        let (rx, linker) = BackendLink::new("increment", |b: &mut BackendEventLoop<TestState>| {
            b.state.counter += 1;
            b.state.counter
        });
        request_tx.send(Box::new(linker)).unwrap();
        assert_eq!(rx.recv_timeout(Duration::from_secs(5)), Ok(42));

        request_stop(&request_tx, eventloop_handle);
    }

    #[test]
    fn test_cancel_request_working() {
        init();
        let (request_tx, request_rx) = std::sync::mpsc::channel();
        let eventloop_handle = BackendEventLoop::new(request_rx, TestState { counter: 0 }).run();

        let tic = Instant::now();

        let (rx, linker) = BackendLink::new("sleep", |_b: &mut BackendEventLoop<TestState>| {
            std::thread::sleep(Duration::from_millis(1000));
        });

        // dropping rx makes the request invalid, so the backend action
        // (sleeping for 1 s) is never executed ...
        drop(rx);
        trace!("drop of receiver done");
        assert!(linker.is_cancelled());
        request_tx.send(Box::new(linker)).unwrap();
        request_stop(&request_tx, eventloop_handle);
        // ... thus joining the backend thread returns almost immediately
        assert!(tic.elapsed() < Duration::from_millis(500));
    }
}
