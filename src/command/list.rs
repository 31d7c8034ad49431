use crate::{
    command::encode,
    foundation::error::{OsbError, OsbResult},
    object::kinds::TriggerCondition,
};

/// Progress of an object through its (at most one) trigger block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TriggerState {
    /// No trigger opened; plain commands are accepted.
    #[default]
    Idle,
    /// Inside the body of a trigger; commands are nested one level deeper.
    InTrigger,
    /// The trigger body completed; the object is sealed.
    Finalized,
}

/// Ordered, already-encoded command lines of one storyboard object.
///
/// Lines keep their declaration order and carry their indentation (one space
/// at top level, two inside a trigger body).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandList {
    lines: Vec<String>,
    state: TriggerState,
}

impl CommandList {
    /// An empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Encoded lines, in declaration order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of encoded lines, including a trigger marker.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Return `true` when no command has been added.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Current trigger state.
    pub fn trigger_state(&self) -> TriggerState {
        self.state
    }

    /// Return `true` while a trigger body is being recorded.
    pub fn is_inside_trigger(&self) -> bool {
        self.state == TriggerState::InTrigger
    }

    /// Return `true` once a trigger block has completed.
    pub fn is_trigger_finalized(&self) -> bool {
        self.state == TriggerState::Finalized
    }

    /// Fail if the list no longer accepts commands.
    pub fn ensure_open(&self) -> OsbResult<()> {
        if self.is_trigger_finalized() {
            return Err(OsbError::state(
                "cannot add commands after a trigger block has been finalized",
            ));
        }
        Ok(())
    }

    fn indent(&self) -> &'static str {
        if self.is_inside_trigger() { "  " } else { " " }
    }

    /// Append an encoded line body at the current nesting level.
    pub(crate) fn append(&mut self, body: String) -> OsbResult<()> {
        self.ensure_open()?;
        let line = format!("{}{body}", self.indent());
        self.lines.push(line);
        Ok(())
    }

    /// Open a trigger block and return the rollback mark for
    /// [`CommandList::finish_trigger`].
    pub(crate) fn begin_trigger(
        &mut self,
        on: TriggerCondition,
        start_time: i32,
        end_time: i32,
    ) -> OsbResult<usize> {
        self.ensure_open()?;
        if self.is_inside_trigger() {
            return Err(OsbError::state(
                "cannot open a trigger inside another trigger block",
            ));
        }
        if !self.lines.is_empty() {
            return Err(OsbError::state(
                "a trigger must be the only block of its object; \
                 commands were already added",
            ));
        }

        let mark = self.lines.len();
        self.append(encode::trigger(on, start_time, end_time))?;
        self.state = TriggerState::InTrigger;
        tracing::trace!(%on, start_time, end_time, "trigger opened");
        Ok(mark)
    }

    /// Close the trigger opened at `mark`.
    ///
    /// A failed or empty body restores the list to how it was before the
    /// trigger was opened and returns the error.
    pub(crate) fn finish_trigger(&mut self, mark: usize, body: OsbResult<()>) -> OsbResult<()> {
        let result = match body {
            Ok(()) if self.lines.len() <= mark + 1 => {
                Err(OsbError::invalid_value("empty trigger body is invalid"))
            }
            other => other,
        };

        match result {
            Ok(()) => {
                self.state = TriggerState::Finalized;
                let commands = self.lines.len() - mark - 1;
                tracing::trace!(commands, "trigger finalized");
                Ok(())
            }
            Err(e) => {
                self.lines.truncate(mark);
                self.state = TriggerState::Idle;
                tracing::debug!(error = %e, "trigger rolled back");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/command/list.rs"]
mod tests;
