mod event;
mod event_log;

pub use event::{
    EffectCategory,
    OutcomeEvent,
};
pub use event_log::EventLog;
