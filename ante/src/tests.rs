//! Chain-of-responsibility behaviour of the ante handler.

use {
    crate::{
        AnteDecorator, AnteError, AnteHandler, AnteResult, Context, Msg, Next, StdFee, StdTx, Tx,
        ValidateBasicDecorator,
    },
    assert_matches::assert_matches,
    std::sync::{Arc, Mutex},
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

type Trace = Arc<Mutex<Vec<&'static str>>>;

/// Records its name, then forwards.
struct Record {
    name: &'static str,
    trace: Trace,
}

impl AnteDecorator for Record {
    fn ante_handle(
        &self,
        ctx: Context,
        tx: &dyn Tx,
        simulate: bool,
        next: Next<'_>,
    ) -> AnteResult<Context> {
        self.trace.lock().unwrap().push(self.name);
        next.run(ctx, tx, simulate)
    }
}

/// Records its name, then rejects.
struct Reject {
    name: &'static str,
    trace: Trace,
}

impl AnteDecorator for Reject {
    fn ante_handle(
        &self,
        _ctx: Context,
        _tx: &dyn Tx,
        _simulate: bool,
        _next: Next<'_>,
    ) -> AnteResult<Context> {
        self.trace.lock().unwrap().push(self.name);
        Err(AnteError::Internal(format!("{} said no", self.name)))
    }
}

/// Forwards a context with a bumped height.
struct BumpHeight;

impl AnteDecorator for BumpHeight {
    fn ante_handle(
        &self,
        ctx: Context,
        tx: &dyn Tx,
        simulate: bool,
        next: Next<'_>,
    ) -> AnteResult<Context> {
        let height = ctx.block_height().saturating_add(1);
        next.run(ctx.with_block_height(height), tx, simulate)
    }
}

/// A transaction type with no fee capability.
#[derive(Debug)]
struct BareTx;

impl Tx for BareTx {}

fn record(name: &'static str, trace: &Trace) -> Box<dyn AnteDecorator> {
    Box::new(Record {
        name,
        trace: trace.clone(),
    })
}

fn reject(name: &'static str, trace: &Trace) -> Box<dyn AnteDecorator> {
    Box::new(Reject {
        name,
        trace: trace.clone(),
    })
}

fn valid_tx() -> StdTx {
    StdTx::new(
        vec![Msg::new("/cosmos.bank.v1beta1.MsgSend", vec![])],
        StdFee::new("10uatom".parse().unwrap(), 100_000),
        "",
    )
}

fn check_ctx() -> Context {
    Context::new("cosmzone-1", 7).with_check_tx(true)
}

// ===========================================================================
// 1. Ordering and short-circuit
// ===========================================================================

#[test]
fn stages_run_in_declared_order() {
    cosmzone_logger::setup();
    let trace = Trace::default();
    let handler = AnteHandler::new(vec![
        record("first", &trace),
        record("second", &trace),
        record("third", &trace),
    ]);
    assert_eq!(handler.len(), 3);

    let ctx = handler.handle(check_ctx(), &valid_tx(), false).unwrap();
    assert_eq!(ctx, check_ctx());
    assert_eq!(*trace.lock().unwrap(), ["first", "second", "third"]);
}

#[test]
fn first_error_aborts_remaining_stages() {
    let trace = Trace::default();
    let handler = AnteHandler::new(vec![
        record("first", &trace),
        reject("gate", &trace),
        record("never", &trace),
    ]);

    let result = handler.handle(check_ctx(), &valid_tx(), false);
    assert_eq!(
        result,
        Err(AnteError::Internal("gate said no".to_string()))
    );
    assert_eq!(*trace.lock().unwrap(), ["first", "gate"]);
}

#[test]
fn empty_chain_returns_context() {
    let handler = AnteHandler::new(vec![]);
    assert!(handler.is_empty());
    assert_eq!(
        handler.handle(check_ctx(), &BareTx, true),
        Ok(check_ctx())
    );
}

#[test]
fn updated_context_reaches_later_stages() {
    let handler = AnteHandler::new(vec![Box::new(BumpHeight), Box::new(BumpHeight)]);
    let ctx = handler.handle(check_ctx(), &valid_tx(), false).unwrap();
    assert_eq!(ctx.block_height(), 9);
}

#[test]
fn terminator_returns_context_unchanged() {
    let ctx = Next::terminator().run(check_ctx(), &BareTx, false).unwrap();
    assert_eq!(ctx, check_ctx());
}

// ===========================================================================
// 2. ValidateBasicDecorator
// ===========================================================================

#[test]
fn validate_basic_rejects_before_later_stages() {
    let trace = Trace::default();
    let handler = AnteHandler::new(vec![
        Box::new(ValidateBasicDecorator),
        record("after", &trace),
    ]);
    let empty = StdTx::new(vec![], StdFee::default(), "");

    assert_matches!(
        handler.handle(check_ctx(), &empty, false),
        Err(AnteError::InvalidRequest(_))
    );
    assert!(trace.lock().unwrap().is_empty());

    handler.handle(check_ctx(), &valid_tx(), false).unwrap();
    assert_eq!(*trace.lock().unwrap(), ["after"]);
}

#[test]
fn validate_basic_defaults_to_ok() {
    let handler = AnteHandler::new(vec![Box::new(ValidateBasicDecorator)]);
    assert!(handler.handle(check_ctx(), &BareTx, false).is_ok());
    assert!(BareTx.fee_tx().is_none());
}

#[test]
fn handler_is_shareable_across_threads() {
    let trace = Trace::default();
    let handler = Arc::new(AnteHandler::new(vec![record("stage", &trace)]));
    let threads: Vec<_> = (0..4)
        .map(|_| {
            let handler = handler.clone();
            std::thread::spawn(move || handler.handle(check_ctx(), &valid_tx(), false))
        })
        .collect();
    for thread in threads {
        assert!(thread.join().unwrap().is_ok());
    }
    assert_eq!(trace.lock().unwrap().len(), 4);
}
