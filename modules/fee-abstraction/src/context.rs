use {
    crate::branch::StoreBranch,
    cosmwasm_std::{BlockInfo, Event, Storage},
};

/// The phase of the transaction lifecycle the state machine is running in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecMode {
    /// Admission of a new transaction into the mempool
    CheckTx,
    /// Re-admission of a mempool transaction after a block is committed
    ReCheckTx,
    /// Block execution
    DeliverTx,
    /// Gas estimation; signatures and fees are not enforced
    Simulate,
}

pub struct Context<'a> {
    pub store:    &'a mut dyn Storage,
    pub block:    BlockInfo,
    pub mode:     ExecMode,
    pub priority: i64,
    pub events:   Vec<Event>,
}

impl<'a> Context<'a> {
    pub fn new(store: &'a mut dyn Storage, block: BlockInfo, mode: ExecMode) -> Self {
        Self {
            store,
            block,
            mode,
            priority: 0,
            events: vec![],
        }
    }

    /// True in both CheckTx and ReCheckTx
    pub fn is_check_tx(&self) -> bool {
        matches!(self.mode, ExecMode::CheckTx | ExecMode::ReCheckTx)
    }

    pub fn is_simulate(&self) -> bool {
        self.mode == ExecMode::Simulate
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Run `f` against a branch of this context's store.
    ///
    /// If `f` succeeds, its writes, events, and priority are applied to this
    /// context. Otherwise all of them are discarded and the error is returned
    /// as-is.
    pub fn branch<T, E, F>(&mut self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Context) -> Result<T, E>,
    {
        let mut branch = StoreBranch::new(&mut *self.store);

        let mut child = Context {
            store:    &mut branch,
            block:    self.block.clone(),
            mode:     self.mode,
            priority: self.priority,
            events:   vec![],
        };

        let res = f(&mut child);

        let Context {
            priority,
            events,
            ..
        } = child;

        let data = res?;

        branch.commit();
        self.priority = priority;
        self.events.extend(events);

        Ok(data)
    }
}

// ----------------------------------- Tests -----------------------------------
