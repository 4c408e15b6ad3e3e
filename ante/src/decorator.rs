use {
    crate::{context::Context, error::AnteResult, tx::Tx},
    log::debug,
};

/// One stage of the ante chain.
///
/// A decorator inspects the transaction and either returns an error, which
/// aborts the rest of the chain, or hands control to `next`. Decorators must
/// not assume anything about their neighbours beyond "the next stage receives
/// the context I pass it".
pub trait AnteDecorator: Send + Sync {
    fn ante_handle(
        &self,
        ctx: Context,
        tx: &dyn Tx,
        simulate: bool,
        next: Next<'_>,
    ) -> AnteResult<Context>;
}

/// Continuation over the stages that follow the current one.
#[derive(Clone, Copy)]
pub struct Next<'a> {
    remaining: &'a [Box<dyn AnteDecorator>],
}

impl<'a> Next<'a> {
    /// A continuation with no further stages; running it returns the
    /// context unchanged. Useful for exercising a single decorator.
    pub fn terminator() -> Next<'static> {
        Next { remaining: &[] }
    }

    pub fn run(self, ctx: Context, tx: &dyn Tx, simulate: bool) -> AnteResult<Context> {
        match self.remaining.split_first() {
            Some((decorator, remaining)) => {
                decorator.ante_handle(ctx, tx, simulate, Next { remaining })
            }
            None => Ok(ctx),
        }
    }
}

/// A fixed, ordered chain of decorators composed once at start-up.
pub struct AnteHandler {
    decorators: Vec<Box<dyn AnteDecorator>>,
}

impl AnteHandler {
    pub fn new(decorators: Vec<Box<dyn AnteDecorator>>) -> Self {
        Self { decorators }
    }

    pub fn len(&self) -> usize {
        self.decorators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decorators.is_empty()
    }

    /// Run every stage in order, stopping at the first error.
    pub fn handle(&self, ctx: Context, tx: &dyn Tx, simulate: bool) -> AnteResult<Context> {
        let height = ctx.block_height();
        let result = Next {
            remaining: &self.decorators,
        }
        .run(ctx, tx, simulate);
        if let Err(err) = &result {
            debug!("ante chain rejected tx at height {height}: {err}");
        }
        result
    }
}

/// Runs [`Tx::validate_basic`] before anything that reads state.
#[derive(Clone, Copy, Debug, Default)]
pub struct ValidateBasicDecorator;

impl AnteDecorator for ValidateBasicDecorator {
    fn ante_handle(
        &self,
        ctx: Context,
        tx: &dyn Tx,
        simulate: bool,
        next: Next<'_>,
    ) -> AnteResult<Context> {
        tx.validate_basic()?;
        next.run(ctx, tx, simulate)
    }
}
