//! Property tests for the node protocol: begin/end bracketing and abort
//! idempotence under arbitrary tick histories.

use proptest::prelude::*;

use canopy::{Context, Node, Status};

/// Leaf that replays an arbitrary script and counts its hook invocations.
struct Counting {
    script: Vec<Status>,
    cursor: usize,
    status: Status,
    begins: usize,
    ends: usize,
    aborts: usize,
}

impl Counting {
    fn new(script: Vec<Status>) -> Self {
        Self {
            script,
            cursor: 0,
            status: Status::Idle,
            begins: 0,
            ends: 0,
            aborts: 0,
        }
    }
}

impl Node<()> for Counting {
    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    fn execute(&mut self, _ctx: &mut Context<()>) -> Status {
        let status = self.script[self.cursor];
        self.cursor += 1;
        status
    }

    fn on_begin(&mut self, _ctx: &mut Context<()>) {
        self.begins += 1;
    }

    fn on_end(&mut self, _ctx: &mut Context<()>) {
        self.ends += 1;
    }

    fn on_abort(&mut self, _ctx: &mut Context<()>) {
        self.aborts += 1;
    }
}

fn result_status() -> impl Strategy<Value = Status> {
    prop::sample::select(vec![
        Status::Success,
        Status::Running,
        Status::Failure,
        Status::Error,
    ])
}

proptest! {
    /// Begin fires iff the status entering a tick is not Running; end fires
    /// iff the status leaving it is not Running.
    #[test]
    fn begin_end_bracketing_holds_for_any_tick_history(
        script in prop::collection::vec(result_status(), 1..40)
    ) {
        let mut ctx = Context::new(());
        let mut node = Counting::new(script.clone());

        let mut expected_begins = 0;
        let mut expected_ends = 0;
        let mut entering = Status::Idle;

        for &result in &script {
            if entering != Status::Running {
                expected_begins += 1;
            }
            if result != Status::Running {
                expected_ends += 1;
            }

            prop_assert_eq!(node.tick(&mut ctx), result);
            prop_assert_eq!(node.begins, expected_begins);
            prop_assert_eq!(node.ends, expected_ends);
            entering = result;
        }
    }

    /// Aborting a node that is not Running never changes its status and
    /// never fires the abort hook, wherever in its history it happens.
    #[test]
    fn abort_is_a_noop_on_any_non_running_status(
        script in prop::collection::vec(result_status(), 1..40)
    ) {
        let mut ctx = Context::new(());
        let mut node = Counting::new(script.clone());

        for &result in &script {
            node.tick(&mut ctx);

            let before = node.status();
            let aborted = node.abort(&mut ctx);

            if result == Status::Running {
                prop_assert_eq!(aborted, Status::Aborted);
                prop_assert_eq!(node.aborts, 1);
                // The run is over once aborted; stop replaying this script.
                break;
            }
            prop_assert_eq!(aborted, before);
            prop_assert_eq!(node.aborts, 0);
        }
    }

    /// A run that is never interrupted sees exactly one begin per cycle and
    /// one end per terminal result.
    #[test]
    fn cycles_match_terminal_results(
        script in prop::collection::vec(result_status(), 1..60)
    ) {
        let mut ctx = Context::new(());
        let mut node = Counting::new(script.clone());

        for _ in 0..script.len() {
            node.tick(&mut ctx);
        }

        let terminals = script.iter().filter(|s| **s != Status::Running).count();
        prop_assert_eq!(node.ends, terminals);

        // One begin for the opening tick plus one for every cycle that
        // followed a terminal result.
        let reopenings = script[..script.len() - 1]
            .iter()
            .filter(|s| **s != Status::Running)
            .count();
        prop_assert_eq!(node.begins, 1 + reopenings);
    }
}
